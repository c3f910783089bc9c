use axum::{Json, extract::State};
use movierec_core::{RecommendationReport, content_movie_recommender};
use movierec_shared::AppError;
use serde::Deserialize;
use utoipa::ToSchema;

use super::recommend::default_top_n;
use crate::utils::{AppState, core_error};

#[derive(Deserialize, ToSchema)]
pub struct Evaluate {
  /// Reference movie title
  pub movie: String,
  /// Titles to evaluate. When omitted, the movie's own recommendations are used.
  pub recommendations: Option<Vec<String>>,
  /// Number of recommendations to generate when `recommendations` is omitted
  #[serde(default = "default_top_n")]
  pub top_n: usize,
}

/// Score a recommendation set by RMSE of popularity, vote average and vote count
#[utoipa::path(
  post,
  path = "/api/v0/evaluate",
  request_body = Evaluate,
  responses(
    (status = 200, description = "RMSE of each attribute", body = RecommendationReport),
    (status = 400, description = "Movie cannot be empty"),
    (status = 404, description = "Movie is not in the catalog or similarity matrix"),
    (status = 422, description = "No recommended movie matched the catalog")
  )
)]
#[axum::debug_handler]
pub async fn evaluate(
  State(state): State<AppState>,
  Json(payload): Json<Evaluate>,
) -> Result<Json<RecommendationReport>, AppError> {
  if payload.movie.is_empty() {
    return Err(AppError::bad_request("Movie cannot be empty"));
  }

  let recommendations = match payload.recommendations {
    Some(recommendations) => recommendations,
    None => content_movie_recommender(
      &payload.movie,
      &state.similarity,
      &state.movie_ids[..],
      payload.top_n,
    )
    .map_err(core_error)?,
  };

  let report = RecommendationReport::evaluate(&state.catalog, &payload.movie, &recommendations)
    .map_err(core_error)?;

  Ok(Json(report))
}
