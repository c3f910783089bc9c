use std::cmp::Ordering;

use crate::{CoreError, SimilarityMatrix};

/// Number of recommendations returned when the caller does not ask for a count.
pub const DEFAULT_TOP_N: usize = 10;

/// Descending by score; NaN sorts before every real score.
fn descending(a: f64, b: f64) -> Ordering {
  match (a.is_nan(), b.is_nan()) {
    (true, true) => Ordering::Equal,
    (true, false) => Ordering::Less,
    (false, true) => Ordering::Greater,
    (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
  }
}

/// Recommend the `top_n` movies most similar to `input_movie`.
///
/// `movie_ids[k]` labels column `k` of the similarity matrix. Columns are
/// ranked by a stable descending sort, so equal scores keep their column
/// order; NaN scores rank above every real score. The first ranked column is always dropped on the assumption that it
/// is `input_movie` itself; when another column ties or beats the
/// self-similarity, that column is the one dropped and `input_movie` can show
/// up in the output.
///
/// Returns fewer than `top_n` titles when the matrix is too small.
pub fn content_movie_recommender<S: AsRef<str>>(
  input_movie: &str,
  similarity: &SimilarityMatrix,
  movie_ids: &[S],
  top_n: usize,
) -> Result<Vec<String>, CoreError> {
  let scores = similarity.row(input_movie)?;
  if movie_ids.len() != scores.len() {
    return Err(CoreError::MisalignedIdentifiers {
      expected: scores.len(),
      actual: movie_ids.len(),
    });
  }

  let mut ranked: Vec<usize> = (0..scores.len()).collect();
  ranked.sort_by(|&a, &b| descending(scores[a], scores[b]));

  let recommendations: Vec<String> = ranked
    .into_iter()
    .skip(1)
    .take(top_n)
    .map(|col| movie_ids[col].as_ref().to_owned())
    .collect();

  tracing::debug!(
    input_movie,
    top_n,
    returned = recommendations.len(),
    "ranked similar movies"
  );

  Ok(recommendations)
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;

  use super::*;

  fn matrix(titles: &[&str], rows: Vec<Vec<f64>>) -> SimilarityMatrix {
    SimilarityMatrix::new(titles.iter().map(ToString::to_string).collect(), rows).unwrap()
  }

  fn abc() -> SimilarityMatrix {
    matrix(
      &["A", "B", "C"],
      vec![
        vec![1.0, 0.9, 0.1],
        vec![0.9, 1.0, 0.4],
        vec![0.1, 0.4, 1.0],
      ],
    )
  }

  #[test]
  fn top_one_is_best_other_movie() {
    let m = abc();
    let recs = content_movie_recommender("A", &m, m.titles(), 1).unwrap();
    assert_eq!(recs, vec!["B"]);
  }

  #[test]
  fn ranks_by_descending_similarity() {
    let m = abc();
    let recs = content_movie_recommender("C", &m, m.titles(), DEFAULT_TOP_N).unwrap();
    assert_eq!(recs, vec!["B", "A"]);
  }

  #[test]
  fn zero_top_n_is_empty() {
    let m = abc();
    let recs = content_movie_recommender("A", &m, m.titles(), 0).unwrap();
    assert!(recs.is_empty());
  }

  #[test]
  fn single_movie_matrix_yields_nothing() {
    let m = matrix(&["A"], vec![vec![1.0]]);
    let recs = content_movie_recommender("A", &m, m.titles(), 5).unwrap();
    assert!(recs.is_empty());
  }

  #[test]
  fn unknown_movie_fails() {
    let m = abc();
    let err = content_movie_recommender("Z", &m, m.titles(), 3).unwrap_err();
    assert!(matches!(err, CoreError::MovieNotFound { title } if title == "Z"));
  }

  #[test]
  fn misaligned_identifiers_fail() {
    let m = abc();
    let err = content_movie_recommender("A", &m, &["A", "B"], 3).unwrap_err();
    assert_eq!(
      err,
      CoreError::MisalignedIdentifiers {
        expected: 3,
        actual: 2
      }
    );
  }

  #[test]
  fn ties_keep_column_order() {
    let m = matrix(
      &["A", "B", "C", "D"],
      vec![
        vec![1.0, 0.5, 0.5, 0.5],
        vec![0.5, 1.0, 0.0, 0.0],
        vec![0.5, 0.0, 1.0, 0.0],
        vec![0.5, 0.0, 0.0, 1.0],
      ],
    );
    let recs = content_movie_recommender("A", &m, m.titles(), 3).unwrap();
    assert_eq!(recs, vec!["B", "C", "D"]);
  }

  #[test]
  fn identifiers_label_columns_positionally() {
    let m = abc();
    let labels = ["x", "y", "z"];
    let recs = content_movie_recommender("A", &m, &labels, 2).unwrap();
    assert_eq!(recs, vec!["y", "z"]);
  }

  #[test]
  fn first_ranked_column_is_dropped_even_when_not_self() {
    // "B" beats the self-similarity of "A", so "B" is dropped and "A" is kept.
    let m = matrix(
      &["A", "B", "C"],
      vec![
        vec![0.8, 0.95, 0.2],
        vec![0.95, 1.0, 0.3],
        vec![0.2, 0.3, 1.0],
      ],
    );
    let recs = content_movie_recommender("A", &m, m.titles(), 2).unwrap();
    assert_eq!(recs, vec!["A", "C"]);
  }

  #[test]
  fn self_tie_with_earlier_column_returns_self() {
    // "A2" ties with the self-similarity of "A" and sits in an earlier
    // column, so "A2" is dropped and "A" is returned.
    let m = matrix(
      &["A2", "A", "B"],
      vec![
        vec![1.0, 1.0, 0.1],
        vec![1.0, 1.0, 0.1],
        vec![0.1, 0.1, 1.0],
      ],
    );
    let recs = content_movie_recommender("A", &m, m.titles(), 1).unwrap();
    assert_eq!(recs, vec!["A"]);
  }

  #[test]
  fn nan_scores_rank_first() {
    let m = matrix(
      &["A", "B", "C"],
      vec![
        vec![1.0, f64::NAN, 0.1],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0],
      ],
    );
    // The NaN column takes rank 0 and is the one dropped.
    let recs = content_movie_recommender("A", &m, m.titles(), 2).unwrap();
    assert_eq!(recs, vec!["A", "C"]);
  }

  #[test]
  fn nan_scores_keep_column_order() {
    let m = matrix(
      &["A", "B", "C", "D"],
      vec![
        vec![1.0, f64::NAN, 0.2, f64::NAN],
        vec![0.0, 1.0, 0.0, 0.0],
        vec![0.0, 0.0, 1.0, 0.0],
        vec![0.0, 0.0, 0.0, 1.0],
      ],
    );
    let recs = content_movie_recommender("A", &m, m.titles(), 3).unwrap();
    assert_eq!(recs, vec!["D", "A", "C"]);
  }

  /// Square matrix whose `input` row holds `scores` with a strict maximum on
  /// the diagonal; other rows are identity rows.
  fn fixture(scores: &[f64], input: usize) -> (SimilarityMatrix, Vec<String>) {
    let n = scores.len();
    let titles: Vec<String> = (0..n).map(|i| format!("m{i}")).collect();
    let rows = (0..n)
      .map(|r| {
        if r == input {
          let mut row = scores.to_vec();
          row[input] = 2.0;
          row
        } else {
          (0..n).map(|c| if c == r { 1.0 } else { 0.0 }).collect()
        }
      })
      .collect();
    (SimilarityMatrix::new(titles.clone(), rows).unwrap(), titles)
  }

  fn scores_and_input() -> impl Strategy<Value = (Vec<f64>, usize)> {
    // Coarse scores so ties show up often.
    prop::collection::vec((-10i32..=10).prop_map(|s| f64::from(s) / 10.0), 1..16)
      .prop_flat_map(|scores| {
        let n = scores.len();
        (Just(scores), 0..n)
      })
  }

  proptest! {
    #[test]
    fn output_length_is_bounded(
      (scores, input) in scores_and_input(),
      top_n in 0usize..20,
    ) {
      let (m, ids) = fixture(&scores, input);
      let recs = content_movie_recommender(&ids[input], &m, &ids, top_n).unwrap();
      prop_assert_eq!(recs.len(), top_n.min(ids.len() - 1));
      prop_assert!(!recs.contains(&ids[input]));
    }

    #[test]
    fn output_is_descending_and_stable(
      (scores, input) in scores_and_input(),
      top_n in 0usize..20,
    ) {
      let (m, ids) = fixture(&scores, input);
      let recs = content_movie_recommender(&ids[input], &m, &ids, top_n).unwrap();
      let row = m.row(&ids[input]).unwrap();
      let positions: Vec<usize> = recs
        .iter()
        .map(|title| ids.iter().position(|id| id == title).unwrap())
        .collect();

      for pair in positions.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        prop_assert!(row[a] >= row[b]);
        if row[a] == row[b] {
          prop_assert!(a < b);
        }
      }
    }
  }
}
