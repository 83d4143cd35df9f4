use crate::domain::ids::SongId;
use serde::{Deserialize, Serialize};

/// Una canción del catálogo.
///
/// Los campos `*_ref` son localizadores opacos: una URL remota, una ruta
/// `/assets/...` servida por el backend o una ruta local de disco. El núcleo
/// nunca los interpreta; eso es trabajo de los adaptadores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
  /// Identificador único, estable entre recargas del catálogo.
  pub id: SongId,
  /// El título de la canción.
  pub title: String,
  /// El/los intérprete(s), como texto plano de despliegue.
  pub artist: String,
  /// Álbum al que pertenece.
  pub album: String,
  /// Localizador del audio.
  pub audio_ref: String,
  /// Localizador de la carátula.
  pub image_ref: String,
  /// Localizador de la imagen del artista.
  pub artist_image_ref: String,
}
