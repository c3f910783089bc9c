use axum::{
  Json, Router,
  routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::utils::AppState;

mod evaluate;
mod movies;
mod recommend;

pub use evaluate::Evaluate;
pub use recommend::{Recommend, Recommendations};

#[derive(OpenApi)]
#[openapi(
  info(
    title = "Movierec API",
    version = "0.0.1",
    description = "Content-based movie recommendations and their RMSE evaluation"
  ),
  paths(
    recommend::recommend,
    evaluate::evaluate,
    movies::movies
  ),
  components(schemas(
    Recommend,
    Recommendations,
    Evaluate,
    movierec_core::RecommendationReport,
    movierec_shared::Movie,
  ))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
  Json(ApiDoc::openapi())
}

pub fn app() -> Router<AppState> {
  Router::new()
    .route("/api/v0/recommend", post(recommend::recommend))
    .route("/api/v0/evaluate", post(evaluate::evaluate))
    .route("/api/v0/movies", get(movies::movies))
    .route("/openapi.json", get(openapi_json))
    .merge(Scalar::with_url("/openapi/", ApiDoc::openapi()))
}
