use axum::{Router, response::Html, routing::get};
use movierec_shared::AppError;
use tokio::net::TcpListener;

use crate::{
  api,
  utils::{AppState, shutdown_signal},
};

#[axum::debug_handler]
async fn handler() -> Html<&'static str> {
  Html("<h1>Movierec</h1>")
}

pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/", get(handler))
    .merge(api::app())
    .with_state(state)
}

pub async fn server(state: AppState, addr: &str) -> Result<(), AppError> {
  let movies = state.catalog.len();
  let listener = TcpListener::bind(addr).await?;

  tracing::info!(movies, "server started at http://{addr}");

  axum::serve(listener, router(state))
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}
