use std::collections::{HashMap, HashSet};

use movierec_shared::Movie;

use crate::CoreError;

/// Movie rows in their original order, plus a title index built once.
///
/// Titles are expected to be unique. When they are not, single-row lookups
/// resolve to the lowest row index carrying the title.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
  movies: Vec<Movie>,
  index: HashMap<String, usize>,
}

impl Catalog {
  #[must_use]
  pub fn new(movies: Vec<Movie>) -> Self {
    let mut index = HashMap::with_capacity(movies.len());
    for (row, movie) in movies.iter().enumerate() {
      index.entry(movie.title.clone()).or_insert(row);
    }

    let duplicates = movies.len() - index.len();
    if duplicates > 0 {
      tracing::warn!(duplicates, "catalog contains duplicate titles, first row wins");
    }

    Self { movies, index }
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.movies.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.movies.is_empty()
  }

  #[must_use]
  pub fn movies(&self) -> &[Movie] {
    &self.movies
  }

  /// First row whose title equals `title`.
  pub fn get(&self, title: &str) -> Result<&Movie, CoreError> {
    self
      .index
      .get(title)
      .map(|&row| &self.movies[row])
      .ok_or_else(|| CoreError::not_found(title))
  }

  /// Every row whose title is a member of `titles`, in catalog order.
  ///
  /// A row is yielded at most once no matter how often its title repeats in
  /// `titles`; rows sharing a title are all yielded.
  pub fn matching<'a, S: AsRef<str>>(&'a self, titles: &'a [S]) -> impl Iterator<Item = &'a Movie> {
    let wanted: HashSet<&str> = titles.iter().map(AsRef::as_ref).collect();
    self
      .movies
      .iter()
      .filter(move |movie| wanted.contains(movie.title.as_str()))
  }
}
