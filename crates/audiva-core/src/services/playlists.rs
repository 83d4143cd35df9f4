//! Servicio de playlists: espejo local del almacén remoto.
//!
//! Política `ConfirmThenCommit`: cada mutación viaja primero al
//! `PlaylistStore`; sólo cuando el almacén confirma se aplica a la copia
//! local. Un fallo del almacén deja lo local exactamente como estaba (no
//! hay optimismo ni rollback).

use crate::domain::ids::{PlaylistId, SongId};
use crate::domain::playlist::Playlist;
use crate::domain::song::Song;
use crate::errors::CoreError;
use crate::ports::playlists::{PlaylistStore, PlaylistStoreError};
use crate::services::PersistenceMode;

fn map_store_err(e: PlaylistStoreError) -> CoreError {
  match e {
    PlaylistStoreError::NotFound => CoreError::NotFound,
    PlaylistStoreError::Backend(msg) => CoreError::Backend(msg),
  }
}

pub struct PlaylistService<S: PlaylistStore> {
  store: S,
  playlists: Vec<Playlist>,
}

impl<S: PlaylistStore> PlaylistService<S> {
  pub fn new(store: S) -> Self {
    Self { store, playlists: Vec::new() }
  }

  pub fn persistence_mode(&self) -> PersistenceMode {
    PersistenceMode::ConfirmThenCommit
  }

  pub fn playlists(&self) -> &[Playlist] {
    &self.playlists
  }

  pub fn get(&self, id: PlaylistId) -> Option<&Playlist> {
    self.playlists.iter().find(|p| p.id == id)
  }

  /// Reemplaza el espejo local con lo que diga el almacén.
  pub async fn load_all(&mut self) -> Result<(), CoreError> {
    self.playlists = self.store.fetch_all().await.map_err(map_store_err)?;
    Ok(())
  }

  /// Crea una playlist (el almacén asigna el id) y la agrega al espejo.
  pub async fn create(&mut self, name: &str) -> Result<PlaylistId, CoreError> {
    let name = name.trim();
    if name.is_empty() {
      return Err(CoreError::InvalidName("playlist name cannot be empty".to_string()));
    }

    let created = self.store.create(name).await.map_err(map_store_err)?;
    let id = created.id;
    self.playlists.push(created);
    Ok(id)
  }

  pub async fn delete(&mut self, id: PlaylistId) -> Result<(), CoreError> {
    if self.get(id).is_none() {
      return Err(CoreError::NotFound);
    }
    self.store.delete(id).await.map_err(map_store_err)?;
    self.playlists.retain(|p| p.id != id);
    Ok(())
  }

  /// Agrega `song` a la playlist. `Ok(false)` si ya estaba (no es error).
  pub async fn add_song(&mut self, playlist_id: PlaylistId, song: &Song) -> Result<bool, CoreError> {
    let idx = self
      .playlists
      .iter()
      .position(|p| p.id == playlist_id)
      .ok_or(CoreError::NotFound)?;

    self.store.add_song(playlist_id, song.id).await.map_err(map_store_err)?;
    Ok(self.playlists[idx].add_song(song.clone()))
  }

  pub async fn remove_song(
    &mut self,
    playlist_id: PlaylistId,
    song_id: SongId,
  ) -> Result<bool, CoreError> {
    let idx = self
      .playlists
      .iter()
      .position(|p| p.id == playlist_id)
      .ok_or(CoreError::NotFound)?;

    self.store.remove_song(playlist_id, song_id).await.map_err(map_store_err)?;
    Ok(self.playlists[idx].remove_song(song_id))
  }

  /// Cascada local al eliminar una canción de la biblioteca (el almacén ya
  /// la sacó de sus membresías).
  pub fn handle_song_deleted(&mut self, song_id: SongId) {
    for playlist in &mut self.playlists {
      playlist.remove_song(song_id);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use futures::executor::block_on;
  use std::sync::{Arc, Mutex};

  #[derive(Default)]
  struct FakeStore {
    known: Mutex<Vec<PlaylistId>>,
    calls: Mutex<Vec<String>>,
    fail: std::sync::atomic::AtomicBool,
  }

  impl FakeStore {
    fn set_fail(&self, fail: bool) {
      self.fail.store(fail, std::sync::atomic::Ordering::SeqCst);
    }

    fn failing(&self) -> bool {
      self.fail.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn log(&self, call: &str) {
      self.calls.lock().unwrap().push(call.to_string());
    }
  }

  #[async_trait::async_trait]
  impl PlaylistStore for Arc<FakeStore> {
    async fn create(&self, name: &str) -> Result<Playlist, PlaylistStoreError> {
      self.log("create");
      if self.failing() {
        return Err(PlaylistStoreError::Backend("offline".to_string()));
      }
      let playlist = Playlist::new(PlaylistId::new(), name);
      self.known.lock().unwrap().push(playlist.id);
      Ok(playlist)
    }

    async fn fetch_all(&self) -> Result<Vec<Playlist>, PlaylistStoreError> {
      self.log("fetch_all");
      if self.failing() {
        return Err(PlaylistStoreError::Backend("offline".to_string()));
      }
      let known = self.known.lock().unwrap();
      Ok(known.iter().map(|id| Playlist::new(*id, "remota")).collect())
    }

    async fn add_song(&self, playlist: PlaylistId, _song: SongId) -> Result<(), PlaylistStoreError> {
      self.log("add_song");
      if self.failing() {
        return Err(PlaylistStoreError::Backend("offline".to_string()));
      }
      if !self.known.lock().unwrap().contains(&playlist) {
        return Err(PlaylistStoreError::NotFound);
      }
      Ok(())
    }

    async fn remove_song(
      &self,
      playlist: PlaylistId,
      _song: SongId,
    ) -> Result<(), PlaylistStoreError> {
      self.log("remove_song");
      if self.failing() {
        return Err(PlaylistStoreError::Backend("offline".to_string()));
      }
      if !self.known.lock().unwrap().contains(&playlist) {
        return Err(PlaylistStoreError::NotFound);
      }
      Ok(())
    }

    async fn delete(&self, playlist: PlaylistId) -> Result<(), PlaylistStoreError> {
      self.log("delete");
      if self.failing() {
        return Err(PlaylistStoreError::Backend("offline".to_string()));
      }
      self.known.lock().unwrap().retain(|id| *id != playlist);
      Ok(())
    }
  }

  fn song(title: &str) -> Song {
    Song {
      id: SongId::new(),
      title: title.to_string(),
      artist: "artist".to_string(),
      album: "album".to_string(),
      audio_ref: String::new(),
      image_ref: String::new(),
      artist_image_ref: String::new(),
    }
  }

  #[test]
  fn create_rejects_blank_names_without_touching_the_store() {
    let store = Arc::new(FakeStore::default());
    let mut service = PlaylistService::new(Arc::clone(&store));

    let err = block_on(service.create("   ")).unwrap_err();
    assert!(matches!(err, CoreError::InvalidName(_)));
    assert!(store.calls.lock().unwrap().is_empty());
    assert!(service.playlists().is_empty());
  }

  #[test]
  fn create_commits_locally_after_store_confirms() {
    let store = Arc::new(FakeStore::default());
    let mut service = PlaylistService::new(Arc::clone(&store));

    let id = block_on(service.create("  viaje  ")).unwrap();
    assert_eq!(service.playlists().len(), 1);
    assert_eq!(service.get(id).map(|p| p.name.as_str()), Some("viaje"));
  }

  #[test]
  fn store_failure_leaves_local_state_unchanged() {
    let store = Arc::new(FakeStore::default());
    let mut service = PlaylistService::new(Arc::clone(&store));
    let id = block_on(service.create("estable")).unwrap();

    store.set_fail(true);

    assert!(matches!(block_on(service.create("otra")), Err(CoreError::Backend(_))));
    assert_eq!(service.playlists().len(), 1);

    let s = song("x");
    assert!(matches!(block_on(service.add_song(id, &s)), Err(CoreError::Backend(_))));
    assert!(service.get(id).unwrap().is_empty());

    assert!(matches!(block_on(service.delete(id)), Err(CoreError::Backend(_))));
    assert_eq!(service.playlists().len(), 1);
  }

  #[test]
  fn add_song_is_idempotent_per_id() {
    let store = Arc::new(FakeStore::default());
    let mut service = PlaylistService::new(Arc::clone(&store));
    let id = block_on(service.create("mix")).unwrap();

    let s = song("x");
    assert_eq!(block_on(service.add_song(id, &s)).unwrap(), true);
    assert_eq!(block_on(service.add_song(id, &s)).unwrap(), false);
    assert_eq!(service.get(id).unwrap().len(), 1);
  }

  #[test]
  fn add_song_to_unknown_playlist_skips_the_store() {
    let store = Arc::new(FakeStore::default());
    let mut service = PlaylistService::new(Arc::clone(&store));

    let err = block_on(service.add_song(PlaylistId::new(), &song("x"))).unwrap_err();
    assert!(matches!(err, CoreError::NotFound));
    assert!(store.calls.lock().unwrap().is_empty());
  }

  #[test]
  fn remove_song_reports_whether_it_was_present() {
    let store = Arc::new(FakeStore::default());
    let mut service = PlaylistService::new(Arc::clone(&store));
    let id = block_on(service.create("mix")).unwrap();
    let s = song("x");
    block_on(service.add_song(id, &s)).unwrap();

    assert_eq!(block_on(service.remove_song(id, s.id)).unwrap(), true);
    assert_eq!(block_on(service.remove_song(id, s.id)).unwrap(), false);
  }

  #[test]
  fn delete_removes_the_local_mirror() {
    let store = Arc::new(FakeStore::default());
    let mut service = PlaylistService::new(Arc::clone(&store));
    let id = block_on(service.create("temporal")).unwrap();

    block_on(service.delete(id)).unwrap();
    assert!(service.playlists().is_empty());
    assert!(matches!(block_on(service.delete(id)), Err(CoreError::NotFound)));
  }

  #[test]
  fn load_all_replaces_the_mirror() {
    let store = Arc::new(FakeStore::default());
    let mut service = PlaylistService::new(Arc::clone(&store));
    block_on(service.create("una")).unwrap();
    block_on(service.create("dos")).unwrap();

    block_on(service.load_all()).unwrap();
    assert_eq!(service.playlists().len(), 2);
    assert!(service.playlists().iter().all(|p| p.name == "remota"));
  }

  #[test]
  fn playlists_declare_confirm_then_commit() {
    let store = Arc::new(FakeStore::default());
    let service = PlaylistService::new(Arc::clone(&store));
    assert!(service.persistence_mode().requires_confirmation());
  }
}
