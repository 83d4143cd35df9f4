// crates/audiva-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de Audiva.
///
/// Las capas superiores (backend HTTP, bins de demo, etc.) deberían mapear
/// este error a mensajes de usuario o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("backend error: {0}")]
  Backend(String),

  #[error("storage error: {0}")]
  Storage(String),

  #[error("playback error: {0}")]
  Playback(String),

  #[error("invalid name: {0}")]
  InvalidName(String),

  #[error("not found")]
  NotFound,
}
