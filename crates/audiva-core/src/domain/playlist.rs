use crate::collections::OrderedList;
use crate::domain::ids::{PlaylistId, SongId};
use crate::domain::song::Song;

fn song_key(song: &Song) -> SongId {
  song.id
}

/// Una playlist con nombre: lista ordenada de canciones, sin ids repetidos.
///
/// El id lo asigna el backend al crearla; el núcleo nunca inventa ids de
/// playlist por su cuenta.
#[derive(Debug, Clone)]
pub struct Playlist {
  pub id: PlaylistId,
  pub name: String,
  songs: OrderedList<Song, SongId>,
}

impl Playlist {
  pub fn new(id: PlaylistId, name: impl Into<String>) -> Self {
    Playlist { id, name: name.into(), songs: OrderedList::new(song_key) }
  }

  /// Agrega al final si el id no estaba; `false` para duplicados.
  pub fn add_song(&mut self, song: Song) -> bool {
    self.songs.append(song)
  }

  /// Quita por id; `false` si no estaba.
  pub fn remove_song(&mut self, id: SongId) -> bool {
    self.songs.remove_by_key(&id)
  }

  pub fn contains(&self, id: SongId) -> bool {
    self.songs.contains(&id)
  }

  /// Snapshot ordenado para render o para encolar en bloque.
  pub fn songs(&self) -> Vec<Song> {
    self.songs.to_vec()
  }

  pub fn len(&self) -> usize {
    self.songs.len()
  }

  pub fn is_empty(&self) -> bool {
    self.songs.is_empty()
  }
}
