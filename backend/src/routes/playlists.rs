use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use audiva_core::domain::ids::{PlaylistId, SongId};

use crate::AppState;
use crate::dto::{AddSongBody, CreatePlaylistBody, PlaylistDto};
use crate::error::ApiError;

pub async fn create_playlist(
  State(state): State<AppState>,
  Json(body): Json<CreatePlaylistBody>,
) -> Result<(StatusCode, Json<PlaylistDto>), ApiError> {
  let name = body.name.trim();
  if name.is_empty() {
    return Err(ApiError::BadRequest("playlist name cannot be empty".to_string()));
  }

  let playlist = state.store.insert_playlist(name)?;
  tracing::info!(playlist = %playlist.id, name = %playlist.name, "playlist created");
  Ok((StatusCode::CREATED, Json(PlaylistDto::from(&playlist))))
}

pub async fn list_playlists(
  State(state): State<AppState>,
) -> Result<Json<Vec<PlaylistDto>>, ApiError> {
  let playlists = state.store.list_playlists()?;
  Ok(Json(playlists.iter().map(PlaylistDto::from).collect()))
}

pub async fn get_playlist(
  State(state): State<AppState>,
  Path(id): Path<Uuid>,
) -> Result<Json<PlaylistDto>, ApiError> {
  let playlist = state
    .store
    .find_playlist(PlaylistId::from_uuid(id))?
    .ok_or(ApiError::NotFound("Playlist not found"))?;
  Ok(Json(PlaylistDto::from(&playlist)))
}

/// `POST /api/playlists/{id}/songs`: idempotent append; adding a song
/// that is already there just returns the unchanged playlist.
pub async fn add_song(
  State(state): State<AppState>,
  Path(id): Path<Uuid>,
  Json(body): Json<AddSongBody>,
) -> Result<Json<PlaylistDto>, ApiError> {
  let playlist_id = PlaylistId::from_uuid(id);
  let song_id = SongId::from_uuid(body.song_id);

  if state.store.find_playlist(playlist_id)?.is_none() {
    return Err(ApiError::NotFound("Playlist not found"));
  }
  if state.store.find_song(song_id)?.is_none() {
    return Err(ApiError::NotFound("Song not found"));
  }

  state.store.add_song_to_playlist(playlist_id, song_id)?;

  let playlist = state
    .store
    .find_playlist(playlist_id)?
    .ok_or(ApiError::NotFound("Playlist not found"))?;
  Ok(Json(PlaylistDto::from(&playlist)))
}

pub async fn remove_song(
  State(state): State<AppState>,
  Path((id, song_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<PlaylistDto>, ApiError> {
  let playlist_id = PlaylistId::from_uuid(id);

  if state.store.find_playlist(playlist_id)?.is_none() {
    return Err(ApiError::NotFound("Playlist not found"));
  }

  // absent membership is a no-op, the updated playlist is the answer
  state.store.remove_song_from_playlist(playlist_id, SongId::from_uuid(song_id))?;

  let playlist = state
    .store
    .find_playlist(playlist_id)?
    .ok_or(ApiError::NotFound("Playlist not found"))?;
  Ok(Json(PlaylistDto::from(&playlist)))
}

pub async fn delete_playlist(
  State(state): State<AppState>,
  Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
  if !state.store.delete_playlist(PlaylistId::from_uuid(id))? {
    return Err(ApiError::NotFound("Playlist not found"));
  }

  tracing::info!(playlist = %id, "playlist deleted");
  Ok(Json(json!({ "message": "Playlist deleted successfully" })))
}
