pub mod favorites;
pub mod player;
pub mod playlists;

pub use favorites::FavoritesService;
pub use player::{PlayState, PlayerService, PlayerSession};
pub use playlists::PlaylistService;

/// Política de persistencia declarada por entidad.
///
/// Antes esto vivía implícito en cada call-site; ahora cada servicio lo
/// declara: playlists confirman contra el backend antes de comprometer lo
/// local, favoritos son puramente locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceMode {
  /// Sólo estado local: la mutación se aplica y se persiste de inmediato.
  LocalOnly,
  /// La mutación se espeja al almacén remoto y sólo al confirmar se aplica
  /// al estado local.
  ConfirmThenCommit,
}

impl PersistenceMode {
  pub fn requires_confirmation(&self) -> bool {
    matches!(self, PersistenceMode::ConfirmThenCommit)
  }
}
