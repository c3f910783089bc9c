use std::collections::HashMap;

use crate::CoreError;

/// Square matrix of precomputed similarity scores, rows keyed by title.
///
/// Scores are taken as given: no range is enforced and the matrix is never
/// rebuilt here.
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatrix {
  titles: Vec<String>,
  scores: Vec<f64>,
  index: HashMap<String, usize>,
}

impl SimilarityMatrix {
  /// Build from row titles and row-major scores.
  ///
  /// Fails unless there is one row per title and every row has one column per
  /// title. Duplicate titles resolve to their first row.
  pub fn new(titles: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, CoreError> {
    let n = titles.len();
    if rows.len() != n {
      return Err(CoreError::RowCountMismatch {
        titles: n,
        rows: rows.len(),
      });
    }

    let mut scores = Vec::with_capacity(n * n);
    for (row, values) in rows.into_iter().enumerate() {
      if values.len() != n {
        return Err(CoreError::MalformedMatrix {
          row,
          expected: n,
          actual: values.len(),
        });
      }
      scores.extend(values);
    }

    let mut index = HashMap::with_capacity(n);
    for (row, title) in titles.iter().enumerate() {
      index.entry(title.clone()).or_insert(row);
    }

    Ok(Self {
      titles,
      scores,
      index,
    })
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.titles.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.titles.is_empty()
  }

  /// Row titles, which are also the natural column labels.
  #[must_use]
  pub fn titles(&self) -> &[String] {
    &self.titles
  }

  /// Scores of `title` against every column.
  pub fn row(&self, title: &str) -> Result<&[f64], CoreError> {
    let row = *self
      .index
      .get(title)
      .ok_or_else(|| CoreError::not_found(title))?;
    let n = self.len();
    Ok(&self.scores[row * n..(row + 1) * n])
  }
}
