use axum::{Json, extract::State};
use movierec_shared::Movie;

use crate::utils::AppState;

/// List the catalog in its original order
#[utoipa::path(
  get,
  path = "/api/v0/movies",
  responses(
    (status = 200, description = "Catalog rows", body = Vec<Movie>)
  )
)]
#[axum::debug_handler]
pub async fn movies(State(state): State<AppState>) -> Json<Vec<Movie>> {
  Json(state.catalog.movies().to_vec())
}
