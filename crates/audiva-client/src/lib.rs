//! Cliente HTTP del backend de Audiva.
//!
//! Es el adaptador "conectado" de los ports del núcleo: `CatalogProvider`
//! sale de `GET /api/songs` y `PlaylistStore` del CRUD de playlists. Los
//! errores de red nunca llegan crudos al núcleo; se mapean al error del
//! port correspondiente.

pub mod config;
pub mod dto;

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use audiva_core::domain::ids::{PlaylistId, SongId};
use audiva_core::domain::playlist::Playlist;
use audiva_core::domain::song::Song;
use audiva_core::ports::catalog::{CatalogProvider, ProviderError};
use audiva_core::ports::playlists::{PlaylistStore, PlaylistStoreError};

use crate::config::ApiConfig;
use crate::dto::{PlaylistDto, SongDto};

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
  #[error("request error: {0}")]
  Request(String),

  #[error("not found")]
  NotFound,

  #[error("unexpected status {0}")]
  Status(u16),

  #[error("decode error: {0}")]
  Decode(String),
}

fn req_err(e: reqwest::Error) -> ApiClientError {
  ApiClientError::Request(e.to_string())
}

fn status_err(status: StatusCode) -> ApiClientError {
  if status == StatusCode::NOT_FOUND {
    ApiClientError::NotFound
  } else {
    ApiClientError::Status(status.as_u16())
  }
}

#[derive(Debug, Serialize)]
struct CreatePlaylistBody<'a> {
  name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddSongBody {
  song_id: Uuid,
}

/// Un archivo a subir en el multipart de `POST /api/songs`.
#[derive(Debug, Clone)]
pub struct FilePart {
  pub file_name: String,
  pub bytes: Vec<u8>,
}

/// Carga completa de una canción nueva: metadatos más los tres archivos.
#[derive(Debug, Clone)]
pub struct SongUpload {
  pub title: String,
  pub artist: String,
  pub album: String,
  pub song_file: FilePart,
  pub image_file: FilePart,
  pub artist_image_file: FilePart,
}

pub struct ApiClient {
  http: reqwest::Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(base_url: impl Into<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self { http: reqwest::Client::new(), base_url }
  }

  pub fn from_config() -> Result<Self, audiva_config::ConfigError> {
    let cfg = ApiConfig::load()?;
    Ok(Self::new(cfg.base_url))
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }

  async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiClientError> {
    let response = self.http.get(self.url(path)).send().await.map_err(req_err)?;
    if !response.status().is_success() {
      return Err(status_err(response.status()));
    }
    response.json().await.map_err(|e| ApiClientError::Decode(e.to_string()))
  }

  // -------- canciones --------

  pub async fn fetch_songs(&self) -> Result<Vec<Song>, ApiClientError> {
    let dtos: Vec<SongDto> = self.get_json("/api/songs").await?;
    Ok(dtos.into_iter().map(Song::from).collect())
  }

  pub async fn fetch_song(&self, id: SongId) -> Result<Song, ApiClientError> {
    let dto: SongDto = self.get_json(&format!("/api/songs/{id}")).await?;
    Ok(dto.into())
  }

  pub async fn upload_song(&self, upload: SongUpload) -> Result<Song, ApiClientError> {
    use reqwest::multipart::{Form, Part};

    let form = Form::new()
      .text("title", upload.title)
      .text("artist", upload.artist)
      .text("album", upload.album)
      .part("songFile", Part::bytes(upload.song_file.bytes).file_name(upload.song_file.file_name))
      .part(
        "imageFile",
        Part::bytes(upload.image_file.bytes).file_name(upload.image_file.file_name),
      )
      .part(
        "artistImageFile",
        Part::bytes(upload.artist_image_file.bytes).file_name(upload.artist_image_file.file_name),
      );

    let response =
      self.http.post(self.url("/api/songs")).multipart(form).send().await.map_err(req_err)?;
    if !response.status().is_success() {
      return Err(status_err(response.status()));
    }

    let dto: SongDto = response.json().await.map_err(|e| ApiClientError::Decode(e.to_string()))?;
    Ok(dto.into())
  }

  pub async fn delete_song(&self, id: SongId) -> Result<(), ApiClientError> {
    let response =
      self.http.delete(self.url(&format!("/api/songs/{id}"))).send().await.map_err(req_err)?;
    if !response.status().is_success() {
      return Err(status_err(response.status()));
    }
    Ok(())
  }

  // -------- playlists --------

  pub async fn create_playlist(&self, name: &str) -> Result<Playlist, ApiClientError> {
    let response = self
      .http
      .post(self.url("/api/playlists"))
      .json(&CreatePlaylistBody { name })
      .send()
      .await
      .map_err(req_err)?;
    if !response.status().is_success() {
      return Err(status_err(response.status()));
    }

    let dto: PlaylistDto =
      response.json().await.map_err(|e| ApiClientError::Decode(e.to_string()))?;
    Ok(dto.into())
  }

  pub async fn fetch_playlists(&self) -> Result<Vec<Playlist>, ApiClientError> {
    let dtos: Vec<PlaylistDto> = self.get_json("/api/playlists").await?;
    Ok(dtos.into_iter().map(Playlist::from).collect())
  }

  pub async fn fetch_playlist(&self, id: PlaylistId) -> Result<Playlist, ApiClientError> {
    let dto: PlaylistDto = self.get_json(&format!("/api/playlists/{id}")).await?;
    Ok(dto.into())
  }

  pub async fn add_song_to_playlist(
    &self,
    playlist: PlaylistId,
    song: SongId,
  ) -> Result<(), ApiClientError> {
    let response = self
      .http
      .post(self.url(&format!("/api/playlists/{playlist}/songs")))
      .json(&AddSongBody { song_id: song.as_uuid() })
      .send()
      .await
      .map_err(req_err)?;
    if !response.status().is_success() {
      return Err(status_err(response.status()));
    }
    Ok(())
  }

  pub async fn remove_song_from_playlist(
    &self,
    playlist: PlaylistId,
    song: SongId,
  ) -> Result<(), ApiClientError> {
    let response = self
      .http
      .delete(self.url(&format!("/api/playlists/{playlist}/songs/{song}")))
      .send()
      .await
      .map_err(req_err)?;
    if !response.status().is_success() {
      return Err(status_err(response.status()));
    }
    Ok(())
  }

  pub async fn delete_playlist(&self, id: PlaylistId) -> Result<(), ApiClientError> {
    let response =
      self.http.delete(self.url(&format!("/api/playlists/{id}"))).send().await.map_err(req_err)?;
    if !response.status().is_success() {
      return Err(status_err(response.status()));
    }
    Ok(())
  }
}

// -------- ports del núcleo --------

fn map_playlist_err(e: ApiClientError) -> PlaylistStoreError {
  match e {
    ApiClientError::NotFound => PlaylistStoreError::NotFound,
    other => PlaylistStoreError::Backend(other.to_string()),
  }
}

#[async_trait::async_trait]
impl CatalogProvider for ApiClient {
  async fn list_songs(&self) -> Result<Vec<Song>, ProviderError> {
    self.fetch_songs().await.map_err(|e| match e {
      ApiClientError::Decode(msg) => ProviderError::Decode(msg),
      other => ProviderError::Network(other.to_string()),
    })
  }
}

#[async_trait::async_trait]
impl PlaylistStore for ApiClient {
  async fn create(&self, name: &str) -> Result<Playlist, PlaylistStoreError> {
    self.create_playlist(name).await.map_err(map_playlist_err)
  }

  async fn fetch_all(&self) -> Result<Vec<Playlist>, PlaylistStoreError> {
    self.fetch_playlists().await.map_err(map_playlist_err)
  }

  async fn add_song(&self, playlist: PlaylistId, song: SongId) -> Result<(), PlaylistStoreError> {
    self.add_song_to_playlist(playlist, song).await.map_err(map_playlist_err)
  }

  async fn remove_song(
    &self,
    playlist: PlaylistId,
    song: SongId,
  ) -> Result<(), PlaylistStoreError> {
    self.remove_song_from_playlist(playlist, song).await.map_err(map_playlist_err)
  }

  async fn delete(&self, playlist: PlaylistId) -> Result<(), PlaylistStoreError> {
    self.delete_playlist(playlist).await.map_err(map_playlist_err)
  }
}
