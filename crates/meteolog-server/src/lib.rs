//! Process wiring for meteolog: configuration and the top-level HTTP router.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use meteolog_core::store::WeatherStore;
use meteolog_provider::ProviderConfig;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

/// Environment variable prefix; nested keys use `__`, e.g.
/// `METEOLOG_PROVIDER__API_KEY`.
pub const ENV_PREFIX: &str = "METEOLOG";

// ─── Configuration ────────────────────────────────────────────────────────────

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8080 }

fn default_store_path() -> PathBuf { PathBuf::from("meteolog.sqlite3") }

/// Runtime configuration, deserialised once at start-up from `config.toml`
/// and `METEOLOG_*` environment variables. Never mutated afterwards.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
  /// Tracked location names, polled in this order every cycle.
  #[serde(default)]
  pub locations:  Vec<String>,
  pub provider:   ProviderConfig,
}

impl ServerConfig {
  /// Load from an optional TOML file at `path`, overlaid with environment
  /// variables. `METEOLOG_LOCATIONS` takes a comma-separated list.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix(ENV_PREFIX)
          .prefix_separator("_")
          .separator("__")
          .list_separator(",")
          .with_list_parse_key("locations")
          .try_parsing(true),
      )
      .build()?
      .try_deserialize()
  }

  /// `store_path` with a leading `~` expanded to the user's home directory.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the top-level router: the read API under `/api/weather`, with
/// request tracing.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: WeatherStore + 'static,
{
  Router::new()
    .nest("/api/weather", meteolog_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}
