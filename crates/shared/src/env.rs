use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

const DEFAULT_SNAPSHOT_PATH: &str = "data/snapshot.json";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

pub struct AppEnv {
  /// JSON snapshot holding the catalog and the precomputed similarity matrix.
  pub snapshot_path: PathBuf,
  pub listen_addr: String,
}

impl AppEnv {
  fn new() -> Self {
    Self {
      snapshot_path: env::var("MOVIEREC_SNAPSHOT")
        .map_or_else(|_| PathBuf::from(DEFAULT_SNAPSHOT_PATH), PathBuf::from),
      listen_addr: env::var("MOVIEREC_LISTEN_ADDR")
        .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_owned()),
    }
  }
}

/// Read once on first access, after `dotenvy` has populated the process env.
pub static APP_ENV: LazyLock<AppEnv> = LazyLock::new(AppEnv::new);
