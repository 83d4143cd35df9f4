use crate::domain::ids::{PlaylistId, SongId};
use crate::domain::playlist::Playlist;

#[derive(Debug, thiserror::Error)]
pub enum PlaylistStoreError {
  #[error("playlist not found")]
  NotFound,

  #[error("backend error: {0}")]
  Backend(String),
}

/// Port del almacén de playlists (el contrato REST, visto desde el núcleo).
///
/// Cada mutación del servicio de playlists pasa por aquí ANTES de tocar el
/// estado local: si el almacén falla, lo local queda intacto.
#[async_trait::async_trait]
pub trait PlaylistStore: Send + Sync {
  /// Crea una playlist vacía; el almacén asigna el id.
  async fn create(&self, name: &str) -> Result<Playlist, PlaylistStoreError>;

  async fn fetch_all(&self) -> Result<Vec<Playlist>, PlaylistStoreError>;

  async fn add_song(&self, playlist: PlaylistId, song: SongId) -> Result<(), PlaylistStoreError>;

  async fn remove_song(&self, playlist: PlaylistId, song: SongId)
  -> Result<(), PlaylistStoreError>;

  async fn delete(&self, playlist: PlaylistId) -> Result<(), PlaylistStoreError>;
}
