use crate::domain::song::Song;
use serde::{Deserialize, Serialize};

/// Lo único que se persiste de un favorito: el par título/artista.
///
/// No guardamos la canción completa a propósito; al cargar se resuelve
/// contra el catálogo vigente, y si la canción ya no existe el par
/// simplemente no resuelve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
  pub title: String,
  pub artist: String,
}

impl FavoriteEntry {
  pub fn of(song: &Song) -> Self {
    FavoriteEntry { title: song.title.clone(), artist: song.artist.clone() }
  }

  /// Clave de identidad de favoritos (título + artista).
  pub fn key(&self) -> (String, String) {
    (self.title.clone(), self.artist.clone())
  }

  pub fn matches(&self, song: &Song) -> bool {
    self.title == song.title && self.artist == song.artist
  }
}
