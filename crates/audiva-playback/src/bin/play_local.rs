//! Reproductor mínimo de consola contra la biblioteca local.
//!
//! Ejercita el núcleo completo (catálogo, cola, máquina de estados,
//! favoritos) con la salida rodio de verdad. Comandos:
//!
//!   l            listar el catálogo
//!   p <n>        seleccionar la canción n (dos veces seguidas = suena)
//!   t            play/pausa
//!   n / b        siguiente / anterior
//!   s / r        adelantar / rebobinar el paso configurado
//!   f            marcar/desmarcar favorita la pista activa
//!   F            listar favoritos resueltos
//!   q            salir

use std::io::{self, BufRead, Write};

use audiva_core::ports::notifier::{NoticeKind, Notifier};
use audiva_core::services::{FavoritesService, PlayState, PlayerService};
use audiva_playback::RodioOutput;
use audiva_playback::config::PlaybackConfig;
use audiva_storage::LibraryStore;

struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
  fn notify(&self, kind: NoticeKind, message: &str) {
    println!("[{kind:?}] {message}");
  }
}

fn main() {
  let store = LibraryStore::new_from_config().expect("failed to open local library");
  let songs = store.list_songs().expect("failed to list songs");
  if songs.is_empty() {
    println!("La biblioteca local está vacía; corre smoke_library o sube canciones al backend.");
    return;
  }

  let cfg = PlaybackConfig::load().expect("failed to load [player] config");
  let step = cfg.seek_step_secs as f64;

  let sink = RodioOutput::new().expect("no audio output available");
  let mut player = PlayerService::new(sink, ConsoleNotifier);
  player.replace_catalog(songs);
  player.set_volume(cfg.volume);

  let mut favorites = FavoritesService::new(store);
  if let Err(e) = favorites.load() {
    println!("[Warning] favorites not loaded: {e}");
  }

  println!("{} canciones en la biblioteca. Comandos: l p t n b s r f F q", player.session().catalog().len());

  let stdin = io::stdin();
  loop {
    print!("> ");
    let _ = io::stdout().flush();

    let Some(Ok(line)) = stdin.lock().lines().next() else {
      break;
    };
    let mut parts = line.split_whitespace();

    match parts.next() {
      Some("l") => {
        for (i, song) in player.session().catalog().songs().iter().enumerate() {
          let mark = if favorites.is_favorite(song) { "♥" } else { " " };
          println!("{i:3} {mark} {} — {}", song.title, song.artist);
        }
      }
      Some("p") => {
        let index = parts.next().and_then(|raw| raw.parse::<usize>().ok());
        match index.and_then(|i| player.session().catalog().get(i).cloned()) {
          Some(song) => player.select_song(song),
          None => println!("índice inválido"),
        }
      }
      Some("t") => player.toggle_play_pause(),
      Some("n") => player.next(),
      Some("b") => player.previous(),
      Some("s") => player.seek_by(step),
      Some("r") => player.seek_by(-step),
      Some("f") => match player.session().active().cloned() {
        Some(song) => match favorites.toggle(&song) {
          Ok(true) => println!("[Success] Added to Favorites"),
          Ok(false) => println!("[Info] Removed from Favorites"),
          Err(e) => println!("[Warning] {e}"),
        },
        None => println!("nada sonando"),
      },
      Some("F") => {
        for song in favorites.resolved(player.session().catalog()) {
          println!("♥ {} — {}", song.title, song.artist);
        }
      }
      Some("q") => break,
      Some(other) => println!("comando desconocido: {other}"),
      None => {}
    }

    let state = match player.session().state() {
      PlayState::Idle => "idle",
      PlayState::Paused => "paused",
      PlayState::Playing => "playing",
    };
    match player.session().active() {
      Some(song) => println!("[{state}] {} — {}", song.title, song.artist),
      None => println!("[{state}]"),
    }
  }
}
