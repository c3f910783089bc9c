//! RMSE between a reference movie and a recommendation set.
//!
//! Each metric compares one scalar attribute of the reference movie against
//! the same attribute over every catalog row matched by the recommendation
//! list, then rounds to three decimal places.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use utoipa::ToSchema;

use crate::{Catalog, CoreError, Movie};

/// Scalar movie attribute an RMSE can be computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Attribute {
  Popularity,
  VoteAverage,
  VoteCount,
}

impl Attribute {
  #[must_use]
  pub const fn value(self, movie: &Movie) -> f64 {
    match self {
      Self::Popularity => movie.popularity,
      Self::VoteAverage => movie.vote_average,
      Self::VoteCount => movie.vote_count,
    }
  }
}

/// Round to three decimals from the exact binary value, ties to even.
///
/// Scaling by 1000 first can land on a spurious `.5`, so the rounding is left
/// to the float formatter instead.
fn round3(value: f64) -> f64 {
  format!("{value:.3}").parse().unwrap_or(value)
}

/// RMSE of `attribute` between `reference` and the rows matching `recommended`.
///
/// The reference resolves to its first catalog row. Recommended titles missing
/// from the catalog are ignored; if none match, the result is
/// [`CoreError::EmptyRecommendationSet`] rather than NaN.
pub fn attribute_rmse<S: AsRef<str>>(
  catalog: &Catalog,
  attribute: Attribute,
  reference: &str,
  recommended: &[S],
) -> Result<f64, CoreError> {
  let target = attribute.value(catalog.get(reference)?);

  let (sum, count) = catalog
    .matching(recommended)
    .map(|movie| attribute.value(movie))
    .fold((0.0_f64, 0_usize), |(sum, count), value| {
      let diff = target - value;
      (diff.mul_add(diff, sum), count + 1)
    });

  if count == 0 {
    return Err(CoreError::EmptyRecommendationSet {
      reference: reference.to_owned(),
    });
  }

  #[allow(clippy::cast_precision_loss)]
  let mean = sum / count as f64;
  Ok(round3(mean.sqrt()))
}

pub fn popularity_rmse<S: AsRef<str>>(
  catalog: &Catalog,
  reference: &str,
  recommended: &[S],
) -> Result<f64, CoreError> {
  attribute_rmse(catalog, Attribute::Popularity, reference, recommended)
}

pub fn vote_average_rmse<S: AsRef<str>>(
  catalog: &Catalog,
  reference: &str,
  recommended: &[S],
) -> Result<f64, CoreError> {
  attribute_rmse(catalog, Attribute::VoteAverage, reference, recommended)
}

pub fn vote_count_rmse<S: AsRef<str>>(
  catalog: &Catalog,
  reference: &str,
  recommended: &[S],
) -> Result<f64, CoreError> {
  attribute_rmse(catalog, Attribute::VoteCount, reference, recommended)
}

/// All three RMSE metrics for one recommendation set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationReport {
  pub reference: String,
  pub recommendations: Vec<String>,
  pub popularity_rmse: f64,
  pub vote_average_rmse: f64,
  pub vote_count_rmse: f64,
}

impl RecommendationReport {
  pub fn evaluate<S: AsRef<str>>(
    catalog: &Catalog,
    reference: &str,
    recommended: &[S],
  ) -> Result<Self, CoreError> {
    let mut rmse = [0.0; 3];
    for (slot, attribute) in rmse.iter_mut().zip(Attribute::iter()) {
      *slot = attribute_rmse(catalog, attribute, reference, recommended)?;
    }
    let [popularity_rmse, vote_average_rmse, vote_count_rmse] = rmse;

    tracing::debug!(
      reference,
      popularity_rmse,
      vote_average_rmse,
      vote_count_rmse,
      "evaluated recommendations"
    );

    Ok(Self {
      reference: reference.to_owned(),
      recommendations: recommended.iter().map(|s| s.as_ref().to_owned()).collect(),
      popularity_rmse,
      vote_average_rmse,
      vote_count_rmse,
    })
  }
}
