use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One catalog row. `title` doubles as the movie identifier.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct Movie {
  pub title: String,
  pub popularity: f64,
  pub vote_average: f64,
  /// Stored as a float so integer and fractional counts share one column type.
  pub vote_count: f64,
}

impl Movie {
  #[must_use]
  pub fn new(title: impl Into<String>, popularity: f64, vote_average: f64, vote_count: f64) -> Self {
    Self {
      title: title.into(),
      popularity,
      vote_average,
      vote_count,
    }
  }
}
