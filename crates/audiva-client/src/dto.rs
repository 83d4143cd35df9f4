//! Tipos de cable del API REST, lado cliente.
//!
//! Las claves siguen el contrato documentado: canciones en camelCase con
//! `id`, playlists con `_id` (herencia del backend original). La
//! inconsistencia es del contrato, no nuestra; aquí sólo se mapea.

use audiva_core::domain::ids::{PlaylistId, SongId};
use audiva_core::domain::playlist::Playlist;
use audiva_core::domain::song::Song;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
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

impl From<SongDto> for Song {
  fn from(dto: SongDto) -> Self {
    Song {
      id: SongId::from_uuid(dto.id),
      title: dto.title,
      artist: dto.artist,
      album: dto.album,
      audio_ref: dto.song_url,
      image_ref: dto.image_url,
      artist_image_ref: dto.artist_image_url,
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistDto {
  #[serde(rename = "_id")]
  pub id: Uuid,
  pub name: String,
  #[serde(default)]
  pub songs: Vec<SongDto>,
}

impl From<PlaylistDto> for Playlist {
  fn from(dto: PlaylistDto) -> Self {
    let mut playlist = Playlist::new(PlaylistId::from_uuid(dto.id), dto.name);
    for song in dto.songs {
      playlist.add_song(song.into());
    }
    playlist
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn song_wire_is_camel_case_with_plain_id() {
    let raw = r#"{
      "id": "7f8f2b3e-2a5a-4c8e-9d1e-111122223333",
      "title": "Uno",
      "artist": "Ana",
      "album": "Primero",
      "songUrl": "/assets/uno.mp3",
      "imageUrl": "/assets/uno.jpg",
      "artistImageUrl": "/assets/ana.jpg"
    }"#;

    let song: Song = serde_json::from_str::<SongDto>(raw).unwrap().into();
    assert_eq!(song.title, "Uno");
    assert_eq!(song.audio_ref, "/assets/uno.mp3");
    assert_eq!(song.artist_image_ref, "/assets/ana.jpg");
  }

  #[test]
  fn playlist_wire_keeps_the_contract_underscore_id() {
    let raw = r#"{
      "_id": "9a8b7c6d-1111-2222-3333-444455556666",
      "name": "viaje",
      "songs": [{
        "id": "7f8f2b3e-2a5a-4c8e-9d1e-111122223333",
        "title": "Uno",
        "artist": "Ana",
        "album": "Primero",
        "songUrl": "/assets/uno.mp3",
        "imageUrl": "/assets/uno.jpg",
        "artistImageUrl": "/assets/ana.jpg"
      }]
    }"#;

    let playlist: Playlist = serde_json::from_str::<PlaylistDto>(raw).unwrap().into();
    assert_eq!(playlist.name, "viaje");
    assert_eq!(playlist.len(), 1);
  }

  #[test]
  fn playlist_songs_default_to_empty() {
    let raw = r#"{"_id": "9a8b7c6d-1111-2222-3333-444455556666", "name": "nueva"}"#;
    let playlist: Playlist = serde_json::from_str::<PlaylistDto>(raw).unwrap().into();
    assert!(playlist.is_empty());
  }
}
