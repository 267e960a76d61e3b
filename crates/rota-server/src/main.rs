//! rota server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-memory relief store, optionally loads the demo roster and schedule,
//! and serves the JSON API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use rota_store_mem::{MemStore, seed};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Runtime server configuration, deserialised from `config.toml` with
/// `ROTA_`-prefixed environment overrides.
#[derive(Deserialize, Clone)]
struct ServerConfig {
  host:      String,
  port:      u16,
  /// Load the demo roster and schedule on startup.
  #[serde(default)]
  seed_demo: bool,
}

#[derive(Parser)]
#[command(author, version, about = "Rota relief scheduling server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Load the demo roster and schedule on startup.
  #[arg(long)]
  seed_demo: bool,
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

  // Load configuration.
  let settings = config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8080)?
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("ROTA"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Open the store and optionally load the demo fixtures.
  let store = MemStore::new();
  if cli.seed_demo || server_cfg.seed_demo {
    let roster = seed::demo(&store)
      .await
      .context("failed to seed demo data")?;
    tracing::info!("Seeded demo roster with {} teachers", roster.len());
  }

  let app = axum::Router::new()
    .nest("/api", rota_api::api_router(Arc::new(store)))
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
