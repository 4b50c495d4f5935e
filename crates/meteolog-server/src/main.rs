//! meteolog server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! store, starts the ingestion scheduler in the background and serves the read
//! API over HTTP until Ctrl-C.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use meteolog_ingest::{Ingestor, Scheduler};
use meteolog_provider::WeatherApiClient;
use meteolog_server::ServerConfig;
use meteolog_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "meteolog weather ingestion server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Run a single ingestion cycle and exit without serving HTTP.
  #[arg(long)]
  once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let cfg = ServerConfig::load(&cli.config)
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;

  let store_path = cfg.resolved_store_path();
  if let Some(parent) = store_path.parent() {
    tokio::fs::create_dir_all(parent)
      .await
      .with_context(|| format!("failed to create {parent:?}"))?;
  }
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  let store = Arc::new(store);

  let provider = WeatherApiClient::new(cfg.provider.clone())
    .context("failed to build provider client")?;
  let scheduler = Scheduler::new(
    Ingestor::new(provider, store.clone()),
    cfg.locations.clone(),
  );

  if scheduler.locations().is_empty() {
    tracing::warn!("no locations configured; nothing will be ingested");
  }

  // Helper mode: one cycle, then exit.
  if cli.once {
    let report = scheduler.run_cycle().await;
    tracing::info!(
      succeeded = report.succeeded(),
      failed = report.failed(),
      "single ingestion cycle complete"
    );
    return Ok(());
  }

  let token = CancellationToken::new();
  let scheduler_task = tokio::spawn(scheduler.run(token.clone()));

  let app = meteolog_server::router(store);
  let address = format!("{}:{}", cfg.host, cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  let served = axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal(token.clone()))
    .await
    .context("server error");

  // Stop the scheduler whether the server exited cleanly or not.
  token.cancel();
  scheduler_task.await.context("scheduler task failed")?;

  served
}

/// Resolve on Ctrl-C (or when something else cancels `token`), then cancel
/// `token` so the scheduler stops too.
async fn shutdown_signal(token: CancellationToken) {
  tokio::select! {
    result = tokio::signal::ctrl_c() => {
      if let Err(e) = result {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        token.cancelled().await;
      }
    }
    _ = token.cancelled() => {}
  }
  tracing::info!("shutting down");
  token.cancel();
}
