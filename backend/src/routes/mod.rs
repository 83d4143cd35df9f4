pub mod playlists;
pub mod songs;

use axum::Router;
use axum::routing::{delete, get, post};

use crate::AppState;

/// Create all `/api` routes.
pub fn api_router() -> Router<AppState> {
  Router::new()
    .route("/songs", get(songs::list_songs).post(songs::upload_song))
    .route("/songs/{id}", get(songs::get_song).delete(songs::delete_song))
    .route("/playlists", get(playlists::list_playlists).post(playlists::create_playlist))
    .route("/playlists/{id}", get(playlists::get_playlist).delete(playlists::delete_playlist))
    .route("/playlists/{id}/songs", post(playlists::add_song))
    .route("/playlists/{id}/songs/{song_id}", delete(playlists::remove_song))
}
