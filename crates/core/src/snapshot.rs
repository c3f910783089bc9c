use std::{fs::File, io::BufReader, io::Read, path::Path};

use movierec_shared::Movie;
use serde::{Deserialize, Serialize};

use crate::{Catalog, CoreError, SimilarityMatrix};

/// Precomputed inputs as stored on disk.
///
/// ```json
/// {
///   "catalog": [{ "title": "A", "popularity": 1.0, "vote_average": 7.0, "vote_count": 10 }],
///   "similarity": { "titles": ["A"], "scores": [[1.0]] },
///   "movie_ids": ["A"]
/// }
/// ```
///
/// `movie_ids` labels the matrix columns and defaults to `similarity.titles`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
  pub catalog: Vec<Movie>,
  pub similarity: SimilaritySnapshot,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub movie_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilaritySnapshot {
  pub titles: Vec<String>,
  pub scores: Vec<Vec<f64>>,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
  #[error("failed to read snapshot: {0}")]
  Io(#[from] std::io::Error),
  #[error("failed to parse snapshot: {0}")]
  Parse(#[from] serde_json::Error),
  #[error(transparent)]
  Invalid(#[from] CoreError),
}

impl Snapshot {
  pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
    Ok(serde_json::from_reader(reader)?)
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
    let path = path.as_ref();
    let snapshot = Self::from_reader(BufReader::new(File::open(path)?))?;
    tracing::info!(
      path = %path.display(),
      movies = snapshot.catalog.len(),
      matrix = snapshot.similarity.titles.len(),
      "loaded snapshot"
    );
    Ok(snapshot)
  }

  /// Split into the catalog, the validated matrix and the column labels.
  pub fn into_parts(self) -> Result<(Catalog, SimilarityMatrix, Vec<String>), SnapshotError> {
    let matrix = SimilarityMatrix::new(self.similarity.titles, self.similarity.scores)?;
    let movie_ids = self
      .movie_ids
      .unwrap_or_else(|| matrix.titles().to_vec());
    if movie_ids.len() != matrix.len() {
      return Err(
        CoreError::MisalignedIdentifiers {
          expected: matrix.len(),
          actual: movie_ids.len(),
        }
        .into(),
      );
    }

    let catalog = Catalog::new(self.catalog);
    if catalog.is_empty() || matrix.is_empty() {
      tracing::warn!(
        movies = catalog.len(),
        matrix = matrix.len(),
        "snapshot has no movies to recommend"
      );
    }

    let missing = matrix
      .titles()
      .iter()
      .filter(|title| catalog.get(title).is_err())
      .count();
    if missing > 0 {
      tracing::warn!(missing, "similarity titles without a catalog row");
    }

    Ok((catalog, matrix, movie_ids))
  }
}
