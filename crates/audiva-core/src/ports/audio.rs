use crate::domain::song::Song;

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
  #[error("audio output error: {0}")]
  Output(String),

  #[error("source error: {0}")]
  Source(String),

  #[error("unsupported source: {0}")]
  Unsupported(String),
}

/// Port de la salida de audio.
///
/// El reproductor nunca deja que un error de aquí lo tire: los fallos se
/// reportan por el `Notifier` y la máquina de estados conserva la
/// intención de reproducción.
pub trait AudioOutput {
  /// Carga `song` y arranca la reproducción desde cero.
  fn load(&mut self, song: &Song) -> Result<(), PlaybackError>;

  /// Reanuda lo ya cargado.
  fn resume(&mut self);

  fn pause(&mut self);

  /// Detiene y descarta lo cargado.
  fn stop(&mut self);

  /// Salta `secs` segundos relativo a la posición actual (negativo para
  /// retroceder); la implementación recorta a los bordes de la pista.
  fn seek_by(&mut self, secs: f64) -> Result<(), PlaybackError>;

  /// Volumen en `0.0..=1.0`.
  fn set_volume(&mut self, volume: f32);
}
