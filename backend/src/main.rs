use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use audiva_backend::assets::AssetStore;
use audiva_backend::config::ServerConfig;
use audiva_backend::{AppState, app};
use audiva_storage::LibraryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "audiva_backend=info,tower_http=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let cfg = ServerConfig::load().context("failed to load [server] config")?;

  // --- Dependency Injection Phase ---

  // 1. Persistence (SQLite library, shared with the offline player)
  let store = LibraryStore::new_from_config().context("failed to open library database")?;

  // 2. Asset storage (uploaded audio/images on the data dir)
  let assets =
    AssetStore::open(&cfg.assets_dir).context("failed to open asset directory")?;

  let state = AppState { store: Arc::new(store), assets: Arc::new(assets) };

  let listener = TcpListener::bind(&cfg.bind_addr)
    .await
    .with_context(|| format!("failed to bind {}", cfg.bind_addr))?;
  tracing::info!(addr = %cfg.bind_addr, "audiva backend listening");

  axum::serve(listener, app(state)).await?;
  Ok(())
}
