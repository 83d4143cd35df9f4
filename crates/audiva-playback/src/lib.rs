//! Salida de audio real sobre rodio.
//!
//! Implementa el port `AudioOutput` del núcleo para archivos locales.
//! rodio no expone la posición de reproducción, así que se lleva una
//! estimación propia (acumulado + reloj desde el último play) para poder
//! ofrecer el salto relativo de ±10 s.

pub mod config;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use audiva_core::domain::song::Song;
use audiva_core::ports::audio::{AudioOutput, PlaybackError};

pub struct RodioOutput {
  // el stream tiene que vivir tanto como los sinks que cuelgan de él
  _stream: OutputStream,
  handle: OutputStreamHandle,
  sink: Option<Sink>,
  base_dir: Option<PathBuf>,
  volume: f32,
  started: Option<Instant>,
  accumulated: Duration,
}

impl RodioOutput {
  pub fn new() -> Result<Self, PlaybackError> {
    let (stream, handle) =
      OutputStream::try_default().map_err(|e| PlaybackError::Output(e.to_string()))?;

    Ok(Self {
      _stream: stream,
      handle,
      sink: None,
      base_dir: None,
      volume: 1.0,
      started: None,
      accumulated: Duration::ZERO,
    })
  }

  /// Resuelve refs relativos (`/assets/...`) contra este directorio.
  pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.base_dir = Some(dir.into());
    self
  }

  fn resolve(&self, song: &Song) -> Result<PathBuf, PlaybackError> {
    if song.audio_ref.starts_with("http://") || song.audio_ref.starts_with("https://") {
      return Err(PlaybackError::Unsupported(format!(
        "remote source {} (descarga primero a disco)",
        song.audio_ref
      )));
    }

    let path = PathBuf::from(&song.audio_ref);
    if path.is_absolute() {
      return Ok(path);
    }

    match &self.base_dir {
      Some(base) => Ok(base.join(song.audio_ref.trim_start_matches('/'))),
      None => Ok(path),
    }
  }

  fn position(&self) -> Duration {
    let running = self.started.map(|t| t.elapsed()).unwrap_or(Duration::ZERO);
    self.accumulated + running
  }
}

impl AudioOutput for RodioOutput {
  fn load(&mut self, song: &Song) -> Result<(), PlaybackError> {
    let path = self.resolve(song)?;

    let file = File::open(&path)
      .map_err(|e| PlaybackError::Source(format!("{}: {e}", path.display())))?;
    let source = Decoder::new(BufReader::new(file))
      .map_err(|e| PlaybackError::Source(format!("{}: {e}", path.display())))?;

    if let Some(old) = self.sink.take() {
      old.stop();
    }

    let sink = Sink::try_new(&self.handle).map_err(|e| PlaybackError::Output(e.to_string()))?;
    sink.set_volume(self.volume);
    sink.append(source);
    sink.play();

    self.sink = Some(sink);
    self.accumulated = Duration::ZERO;
    self.started = Some(Instant::now());
    Ok(())
  }

  fn resume(&mut self) {
    if let Some(sink) = &self.sink {
      sink.play();
      if self.started.is_none() {
        self.started = Some(Instant::now());
      }
    }
  }

  fn pause(&mut self) {
    if let Some(sink) = &self.sink {
      sink.pause();
    }
    self.accumulated = self.position();
    self.started = None;
  }

  fn stop(&mut self) {
    if let Some(sink) = self.sink.take() {
      sink.stop();
    }
    self.accumulated = Duration::ZERO;
    self.started = None;
  }

  fn seek_by(&mut self, secs: f64) -> Result<(), PlaybackError> {
    let Some(sink) = &self.sink else {
      return Ok(());
    };

    let current = self.position().as_secs_f64();
    // recorte al inicio; el final lo recorta la propia fuente
    let target = Duration::from_secs_f64((current + secs).max(0.0));

    sink.try_seek(target).map_err(|e| PlaybackError::Output(format!("seek: {e:?}")))?;

    self.accumulated = target;
    self.started = if sink.is_paused() { None } else { Some(Instant::now()) };
    Ok(())
  }

  fn set_volume(&mut self, volume: f32) {
    self.volume = volume;
    if let Some(sink) = &self.sink {
      sink.set_volume(volume);
    }
  }
}
