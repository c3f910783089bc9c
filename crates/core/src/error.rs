use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
  #[error("movie not found: {title:?}")]
  MovieNotFound { title: String },

  /// None of the recommended titles matched a catalog row, so the mean is undefined.
  #[error("no recommended movie for {reference:?} matched the catalog")]
  EmptyRecommendationSet { reference: String },

  /// The identifier list does not line up with the similarity row it labels.
  #[error("identifier list has {actual} entries but similarity rows have {expected}")]
  MisalignedIdentifiers { expected: usize, actual: usize },

  #[error("similarity matrix has {rows} rows for {titles} titles")]
  RowCountMismatch { titles: usize, rows: usize },

  #[error("similarity matrix row {row} has {actual} columns, expected {expected}")]
  MalformedMatrix {
    row: usize,
    expected: usize,
    actual: usize,
  },
}

impl CoreError {
  pub(crate) fn not_found(title: &str) -> Self {
    Self::MovieNotFound {
      title: title.to_owned(),
    }
  }
}
