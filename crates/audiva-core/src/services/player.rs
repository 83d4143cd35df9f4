//! La máquina de estados del reproductor.
//!
//! Tres estados (`Idle`, `Paused`, `Playing`) más una sesión que agrupa el
//! estado mutable compartido: cola, catálogo, índice de navegación y pista
//! activa. Toda mutación entra por los métodos del servicio; la capa de
//! presentación sólo lee snapshots.
//!
//! Dos asimetrías vienen del producto original y se conservan a propósito
//! (ver DESIGN.md): `next` consulta la cola antes de caer al catálogo,
//! `previous` ignora la cola siempre; y al terminar una pista de forma
//! natural la reproducción se detiene al vaciarse la cola en vez de seguir
//! con el catálogo.

use crate::catalog::Catalog;
use crate::collections::PlayQueue;
use crate::domain::ids::SongId;
use crate::domain::playlist::Playlist;
use crate::domain::song::Song;
use crate::ports::audio::AudioOutput;
use crate::ports::notifier::{NoticeKind, Notifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
  /// Nada cargado.
  Idle,
  /// Pista activa, audio detenido.
  Paused,
  /// Pista activa sonando (o intentando sonar).
  Playing,
}

/// Estado mutable de la sesión de reproducción.
///
/// Invariante: hay pista activa si y sólo si el estado no es `Idle`.
#[derive(Debug, Clone, Default)]
pub struct PlayerSession {
  queue: PlayQueue,
  catalog: Catalog,
  current_index: usize,
  state: PlayState,
  active: Option<Song>,
}

impl Default for PlayState {
  fn default() -> Self {
    PlayState::Idle
  }
}

impl PlayerSession {
  pub fn queue(&self) -> &PlayQueue {
    &self.queue
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  pub fn current_index(&self) -> usize {
    self.current_index
  }

  pub fn state(&self) -> PlayState {
    self.state
  }

  pub fn active(&self) -> Option<&Song> {
    self.active.as_ref()
  }
}

pub struct PlayerService<A, N>
where
  A: AudioOutput,
  N: Notifier,
{
  sink: A,
  notifier: N,
  session: PlayerSession,
}

impl<A, N> PlayerService<A, N>
where
  A: AudioOutput,
  N: Notifier,
{
  pub fn new(sink: A, notifier: N) -> Self {
    Self { sink, notifier, session: PlayerSession::default() }
  }

  pub fn session(&self) -> &PlayerSession {
    &self.session
  }

  /// Reemplazo total del catálogo. Si la pista activa sobrevive a la
  /// recarga, el índice la sigue; si no, se recorta al rango nuevo.
  pub fn replace_catalog(&mut self, songs: Vec<Song>) {
    self.session.catalog.replace(songs);

    if let Some(active) = &self.session.active
      && let Some(pos) = self.session.catalog.position_of(active.id)
    {
      self.session.current_index = pos;
      return;
    }

    if self.session.current_index >= self.session.catalog.len() {
      self.session.current_index = 0;
    }
  }

  /// Reproducción directa: fuerza la canción a la cola (tolerando que ya
  /// esté), la vuelve la pista activa y pasa a `Playing`.
  pub fn play_song(&mut self, song: Song) {
    self.session.queue.enqueue(song.clone());
    if let Some(pos) = self.session.catalog.position_of(song.id) {
      self.session.current_index = pos;
    }
    self.start(song);
  }

  /// El gesto de "click en una canción de la biblioteca": primer click
  /// encola, segundo click (ya en cola) la promueve al frente y suena.
  pub fn select_song(&mut self, song: Song) {
    if self.session.queue.contains(&song.title) {
      self.session.queue.promote(&song.title);
      self.play_from_queue_front();
    } else if self.session.queue.enqueue(song.clone()) {
      self
        .notifier
        .notify(NoticeKind::Info, &format!("\"{}\" added to queue. Click again to play.", song.title));
    }
  }

  /// Encolar sin reproducir; `false` si el título ya estaba.
  pub fn add_to_queue(&mut self, song: Song) -> bool {
    self.session.queue.enqueue(song)
  }

  pub fn remove_from_queue(&mut self, id: SongId) -> bool {
    self.session.queue.remove_by_id(id)
  }

  /// Activa el frente de la cola, si existe y está en el catálogo.
  pub fn play_from_queue_front(&mut self) {
    let Some(front) = self.session.queue.front().cloned() else {
      return;
    };
    let Some(pos) = self.session.catalog.position_of(front.id) else {
      return;
    };
    self.session.current_index = pos;
    self.start(front);
  }

  pub fn toggle_play_pause(&mut self) {
    match self.session.state {
      PlayState::Playing => {
        self.sink.pause();
        self.session.state = PlayState::Paused;
      }
      PlayState::Paused => {
        self.sink.resume();
        self.session.state = PlayState::Playing;
      }
      PlayState::Idle => {
        // sin pista activa: si la cola tiene algo, eso es lo que va
        if !self.session.queue.is_empty() {
          self.play_from_queue_front();
        }
      }
    }
  }

  /// Avanza: saca el frente de la cola; si queda algo, suena el nuevo
  /// frente; si no, cae al siguiente índice del catálogo (cíclico).
  pub fn next(&mut self) {
    self.session.queue.dequeue();
    if !self.session.queue.is_empty() {
      self.play_from_queue_front();
      return;
    }

    let Some(idx) = self.session.catalog.next_index(self.session.current_index) else {
      return;
    };
    self.session.current_index = idx;
    if let Some(song) = self.session.catalog.get(idx).cloned() {
      self.play_song(song);
    }
  }

  /// Retrocede SIEMPRE por el catálogo, ignorando la cola.
  pub fn previous(&mut self) {
    let Some(idx) = self.session.catalog.prev_index(self.session.current_index) else {
      return;
    };
    self.session.current_index = idx;
    if let Some(song) = self.session.catalog.get(idx).cloned() {
      self.play_song(song);
    }
  }

  /// Fin natural de la pista: como `next`, pero al vaciarse la cola la
  /// reproducción se detiene en vez de seguir con el catálogo.
  pub fn on_track_ended(&mut self) {
    self.session.queue.dequeue();
    if self.session.queue.is_empty() {
      if self.session.state == PlayState::Playing {
        self.session.state = PlayState::Paused;
      }
      return;
    }
    self.play_from_queue_front();
  }

  /// Vacía la cola, encola la playlist completa y arranca por el frente.
  pub fn play_playlist(&mut self, playlist: &Playlist) {
    let songs = playlist.songs();
    if songs.is_empty() {
      self.notifier.notify(NoticeKind::Warning, "Playlist is empty!");
      return;
    }

    self.session.queue.clear();
    for song in songs {
      self.session.queue.enqueue(song);
    }
    self.play_from_queue_front();
    self
      .notifier
      .notify(NoticeKind::Info, &format!("Playing \"{}\" playlist", playlist.name));
  }

  /// Cascada local al eliminar una canción de la biblioteca: sale de la
  /// cola y, si era la pista activa, la sesión vuelve a `Idle`.
  pub fn handle_song_deleted(&mut self, id: SongId) {
    self.session.queue.remove_by_id(id);
    if self.session.active.as_ref().is_some_and(|song| song.id == id) {
      self.sink.stop();
      self.session.active = None;
      self.session.state = PlayState::Idle;
    }
  }

  /// Salto relativo (retroceder/adelantar 10 s). Sin pista activa no hace
  /// nada.
  pub fn seek_by(&mut self, secs: f64) {
    if self.session.state == PlayState::Idle {
      return;
    }
    if let Err(e) = self.sink.seek_by(secs) {
      self.notifier.notify(NoticeKind::Warning, &format!("seek failed: {e}"));
    }
  }

  pub fn set_volume(&mut self, volume: f32) {
    self.sink.set_volume(volume.clamp(0.0, 1.0));
  }

  fn start(&mut self, song: Song) {
    if let Err(e) = self.sink.load(&song) {
      self
        .notifier
        .notify(NoticeKind::Warning, &format!("could not start \"{}\": {e}", song.title));
    }
    // la intención de reproducción queda registrada aunque la salida falle
    self.session.active = Some(song);
    self.session.state = PlayState::Playing;
  }
}
