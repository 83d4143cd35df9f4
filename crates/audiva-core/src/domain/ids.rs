use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SongId(Uuid);

impl SongId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    SongId(Uuid::new_v4())
  }

  /// Construye un `SongId` a partir de un `Uuid` existente.
  pub fn from_uuid(u: Uuid) -> Self {
    SongId(u)
  }

  /// Devuelve el `Uuid` interno.
  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl From<Uuid> for SongId {
  fn from(u: Uuid) -> Self {
    SongId(u)
  }
}

impl From<SongId> for Uuid {
  fn from(id: SongId) -> Self {
    id.0
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

impl Default for SongId {
  fn default() -> Self {
    Self::new()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaylistId(Uuid);

impl PlaylistId {
  pub fn new() -> Self {
    PlaylistId(Uuid::new_v4())
  }

  pub fn from_uuid(u: Uuid) -> Self {
    PlaylistId(u)
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl From<Uuid> for PlaylistId {
  fn from(u: Uuid) -> Self {
    PlaylistId(u)
  }
}

impl From<PlaylistId> for Uuid {
  fn from(id: PlaylistId) -> Self {
    id.0
  }
}

impl fmt::Display for PlaylistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

impl Default for PlaylistId {
  fn default() -> Self {
    Self::new()
  }
}
