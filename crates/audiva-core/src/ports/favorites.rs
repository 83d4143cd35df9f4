use crate::domain::favorites::FavoriteEntry;

#[derive(Debug, thiserror::Error)]
pub enum FavoritesStoreError {
  #[error("storage error: {0}")]
  Storage(String),
}

/// Port de persistencia local de favoritos: un save/load plano de pares
/// título/artista. Es local-only, no hay confirmación remota de por medio.
pub trait FavoritesStore {
  fn save(&self, entries: &[FavoriteEntry]) -> Result<(), FavoritesStoreError>;
  fn load(&self) -> Result<Vec<FavoriteEntry>, FavoritesStoreError>;
}
