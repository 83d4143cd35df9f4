//! Wire types served by the API.
//!
//! Song JSON is camelCase with a plain `id`; playlist JSON keeps the
//! documented `_id`. The mismatch is part of the published contract, so
//! both sides of it are pinned here rather than papered over.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use audiva_core::domain::playlist::Playlist;
use audiva_core::domain::song::Song;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDto {
  pub id: Uuid,
  pub title: String,
  pub artist: String,
  pub album: String,
  pub song_url: String,
  pub image_url: String,
  pub artist_image_url: String,
}

impl From<&Song> for SongDto {
  fn from(song: &Song) -> Self {
    SongDto {
      id: song.id.as_uuid(),
      title: song.title.clone(),
      artist: song.artist.clone(),
      album: song.album.clone(),
      song_url: song.audio_ref.clone(),
      image_url: song.image_ref.clone(),
      artist_image_url: song.artist_image_ref.clone(),
    }
  }
}

#[derive(Debug, Serialize)]
pub struct PlaylistDto {
  #[serde(rename = "_id")]
  pub id: Uuid,
  pub name: String,
  pub songs: Vec<SongDto>,
}

impl From<&Playlist> for PlaylistDto {
  fn from(playlist: &Playlist) -> Self {
    PlaylistDto {
      id: playlist.id.as_uuid(),
      name: playlist.name.clone(),
      songs: playlist.songs().iter().map(SongDto::from).collect(),
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistBody {
  pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSongBody {
  pub song_id: Uuid,
}
