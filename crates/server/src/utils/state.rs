use std::sync::Arc;

use movierec_core::{Catalog, SimilarityMatrix};

/// Read-only inputs shared by every request.
#[derive(Clone, Debug)]
pub struct AppState {
  pub catalog: Arc<Catalog>,
  pub similarity: Arc<SimilarityMatrix>,
  /// Column labels for `similarity`.
  pub movie_ids: Arc<[String]>,
}

impl AppState {
  #[must_use]
  pub fn new(catalog: Catalog, similarity: SimilarityMatrix, movie_ids: Vec<String>) -> Self {
    Self {
      catalog: Arc::new(catalog),
      similarity: Arc::new(similarity),
      movie_ids: movie_ids.into(),
    }
  }
}
