pub mod assets;
pub mod config;
pub mod dto;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use audiva_storage::LibraryStore;

use crate::assets::AssetStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<LibraryStore>,
  pub assets: Arc<AssetStore>,
}

/// Builds the full application router: the JSON API under `/api` plus
/// static serving of the stored assets under `/assets`.
pub fn app(state: AppState) -> Router {
  let assets_root = state.assets.root().to_path_buf();

  Router::new()
    .nest("/api", routes::api_router())
    .nest_service("/assets", ServeDir::new(assets_root))
    .layer(TraceLayer::new_for_http())
    // the player front-end lives on another origin during development
    .layer(CorsLayer::permissive())
    // song uploads carry whole audio files
    .layer(DefaultBodyLimit::max(64 * 1024 * 1024))
    .with_state(state)
}
