use axum::{Json, extract::State};
use movierec_core::{DEFAULT_TOP_N, content_movie_recommender};
use movierec_shared::AppError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::{AppState, core_error};

pub(super) const fn default_top_n() -> usize {
  DEFAULT_TOP_N
}

#[derive(Deserialize, ToSchema)]
pub struct Recommend {
  /// Title of the movie to find similar movies for
  pub movie: String,
  /// Maximum number of recommendations
  #[serde(default = "default_top_n")]
  pub top_n: usize,
}

#[derive(Serialize, ToSchema)]
pub struct Recommendations {
  pub movie: String,
  /// Titles ordered from most to least similar
  pub recommendations: Vec<String>,
}

/// Recommend movies similar to the given one
#[utoipa::path(
  post,
  path = "/api/v0/recommend",
  request_body = Recommend,
  responses(
    (status = 200, description = "Most similar movies", body = Recommendations),
    (status = 400, description = "Movie cannot be empty"),
    (status = 404, description = "Movie is not in the similarity matrix")
  )
)]
#[axum::debug_handler]
pub async fn recommend(
  State(state): State<AppState>,
  Json(payload): Json<Recommend>,
) -> Result<Json<Recommendations>, AppError> {
  if payload.movie.is_empty() {
    return Err(AppError::bad_request("Movie cannot be empty"));
  }

  let recommendations = content_movie_recommender(
    &payload.movie,
    &state.similarity,
    &state.movie_ids[..],
    payload.top_n,
  )
  .map_err(core_error)?;

  Ok(Json(Recommendations {
    movie: payload.movie,
    recommendations,
  }))
}
