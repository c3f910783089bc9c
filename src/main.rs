use movierec_core::Snapshot;
use movierec_server::{server, utils::AppState};
use movierec_shared::{APP_ENV, AppError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
          "{}=debug,movierec_core=debug,movierec_server=debug",
          env!("CARGO_CRATE_NAME")
        )
        .into()
      }),
    )
    .with(tracing_subscriber::fmt::layer())
    .with(tracing_error::ErrorLayer::default())
    .init();
  dotenvy::dotenv().ok();

  let (catalog, similarity, movie_ids) = Snapshot::load(&APP_ENV.snapshot_path)?.into_parts()?;
  let state = AppState::new(catalog, similarity, movie_ids);

  server(state, &APP_ENV.listen_addr).await
}
