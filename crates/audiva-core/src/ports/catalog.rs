use crate::domain::song::Song;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
  #[error("network error: {0}")]
  Network(String),

  #[error("decode error: {0}")]
  Decode(String),

  #[error("storage error: {0}")]
  Storage(String),
}

/// Port que abstrae de dónde sale la ventana de canciones.
///
/// Implementaciones posibles:
/// - el backend REST (modo conectado)
/// - la biblioteca SQLite local (modo offline)
///
/// El núcleo trata a ambas igual: "reemplaza la ventana completa".
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
  async fn list_songs(&self) -> Result<Vec<Song>, ProviderError>;
}
