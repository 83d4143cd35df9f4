use axum::Json;
use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use audiva_core::domain::ids::SongId;
use audiva_core::domain::song::Song;

use crate::AppState;
use crate::dto::SongDto;
use crate::error::ApiError;

pub async fn list_songs(State(state): State<AppState>) -> Result<Json<Vec<SongDto>>, ApiError> {
  let songs = state.store.list_songs()?;
  Ok(Json(songs.iter().map(SongDto::from).collect()))
}

pub async fn get_song(
  State(state): State<AppState>,
  Path(id): Path<Uuid>,
) -> Result<Json<SongDto>, ApiError> {
  let song = state
    .store
    .find_song(SongId::from_uuid(id))?
    .ok_or(ApiError::NotFound("Song not found"))?;
  Ok(Json(SongDto::from(&song)))
}

struct UploadedFile {
  file_name: String,
  bytes: Vec<u8>,
}

fn bad(e: impl std::fmt::Display) -> ApiError {
  ApiError::BadRequest(e.to_string())
}

async fn read_file(field: Field<'_>) -> Result<UploadedFile, ApiError> {
  let file_name = field.file_name().unwrap_or("upload.bin").to_string();
  let bytes = field.bytes().await.map_err(bad)?.to_vec();
  Ok(UploadedFile { file_name, bytes })
}

fn required_text(value: Option<String>, name: &str) -> Result<String, ApiError> {
  match value {
    Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
    _ => Err(ApiError::BadRequest(format!("missing field {name}"))),
  }
}

fn required_file(value: Option<UploadedFile>, name: &str) -> Result<UploadedFile, ApiError> {
  value.ok_or_else(|| ApiError::BadRequest(format!("missing file {name}")))
}

/// `POST /api/songs`: multipart with title/artist/album plus the audio
/// file, the cover and the artist image. The record is only inserted once
/// all three assets landed on disk; any failure rolls the stored files
/// back so no half-uploaded song ever exists.
pub async fn upload_song(
  State(state): State<AppState>,
  mut multipart: Multipart,
) -> Result<(StatusCode, Json<SongDto>), ApiError> {
  let mut title = None;
  let mut artist = None;
  let mut album = None;
  let mut song_file = None;
  let mut image_file = None;
  let mut artist_image_file = None;

  while let Some(field) = multipart.next_field().await.map_err(bad)? {
    let name = field.name().map(str::to_string);
    match name.as_deref() {
      Some("title") => title = Some(field.text().await.map_err(bad)?),
      Some("artist") => artist = Some(field.text().await.map_err(bad)?),
      Some("album") => album = Some(field.text().await.map_err(bad)?),
      Some("songFile") => song_file = Some(read_file(field).await?),
      Some("imageFile") => image_file = Some(read_file(field).await?),
      Some("artistImageFile") => artist_image_file = Some(read_file(field).await?),
      _ => {}
    }
  }

  let title = required_text(title, "title")?;
  let artist = required_text(artist, "artist")?;
  let album = required_text(album, "album")?;
  let song_file = required_file(song_file, "songFile")?;
  let image_file = required_file(image_file, "imageFile")?;
  let artist_image_file = required_file(artist_image_file, "artistImageFile")?;

  let audio_ref = state.assets.save(&song_file.file_name, &song_file.bytes)?;

  let image_ref = match state.assets.save(&image_file.file_name, &image_file.bytes) {
    Ok(r) => r,
    Err(e) => {
      state.assets.delete(&audio_ref);
      return Err(e);
    }
  };

  let artist_image_ref =
    match state.assets.save(&artist_image_file.file_name, &artist_image_file.bytes) {
      Ok(r) => r,
      Err(e) => {
        state.assets.delete(&audio_ref);
        state.assets.delete(&image_ref);
        return Err(e);
      }
    };

  let song =
    Song { id: SongId::new(), title, artist, album, audio_ref, image_ref, artist_image_ref };

  if let Err(e) = state.store.insert_song(&song) {
    state.assets.delete(&song.audio_ref);
    state.assets.delete(&song.image_ref);
    state.assets.delete(&song.artist_image_ref);
    return Err(e.into());
  }

  tracing::info!(song = %song.id, title = %song.title, "song uploaded");
  Ok((StatusCode::CREATED, Json(SongDto::from(&song))))
}

/// `DELETE /api/songs/{id}`: removes the record, its playlist memberships
/// and its three stored assets.
pub async fn delete_song(
  State(state): State<AppState>,
  Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
  let song = state
    .store
    .remove_song(SongId::from_uuid(id))?
    .ok_or(ApiError::NotFound("Song not found"))?;

  for asset in [&song.audio_ref, &song.image_ref, &song.artist_image_ref] {
    state.assets.delete(asset);
  }

  tracing::info!(song = %song.id, title = %song.title, "song deleted");
  Ok(Json(json!({ "message": "Song deleted successfully" })))
}
