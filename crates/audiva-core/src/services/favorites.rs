//! Favoritos: lista ordenada local-only.
//!
//! Se persiste como pares `{title, artist}` planos y se resuelve contra el
//! catálogo vigente al momento de render; los pares cuya canción ya no
//! existe simplemente no resuelven (no es error).

use crate::catalog::Catalog;
use crate::collections::OrderedList;
use crate::domain::favorites::FavoriteEntry;
use crate::domain::song::Song;
use crate::errors::CoreError;
use crate::ports::favorites::FavoritesStore;
use crate::services::PersistenceMode;

fn favorite_key(entry: &FavoriteEntry) -> (String, String) {
  entry.key()
}

pub struct FavoritesService<S: FavoritesStore> {
  store: S,
  list: OrderedList<FavoriteEntry, (String, String)>,
}

impl<S: FavoritesStore> FavoritesService<S> {
  pub fn new(store: S) -> Self {
    Self { store, list: OrderedList::new(favorite_key) }
  }

  pub fn persistence_mode(&self) -> PersistenceMode {
    PersistenceMode::LocalOnly
  }

  /// Restaura la lista desde el almacén (descartando lo que hubiera).
  pub fn load(&mut self) -> Result<(), CoreError> {
    let entries = self.store.load().map_err(|e| CoreError::Storage(e.to_string()))?;

    let mut list = OrderedList::new(favorite_key);
    for entry in entries {
      list.append(entry);
    }
    self.list = list;
    Ok(())
  }

  /// Agrega o quita el favorito de `song`; devuelve si quedó marcado.
  pub fn toggle(&mut self, song: &Song) -> Result<bool, CoreError> {
    let entry = FavoriteEntry::of(song);
    let key = entry.key();

    let now_favorite = if self.list.contains(&key) {
      self.list.remove_by_key(&key);
      false
    } else {
      self.list.append(entry);
      true
    };

    self.persist()?;
    Ok(now_favorite)
  }

  /// Quita por par título/artista (botón de la barra lateral, cascada al
  /// borrar una canción). `Ok(false)` si no estaba.
  pub fn remove(&mut self, title: &str, artist: &str) -> Result<bool, CoreError> {
    let key = (title.to_string(), artist.to_string());
    let removed = self.list.remove_by_key(&key);
    if removed {
      self.persist()?;
    }
    Ok(removed)
  }

  pub fn is_favorite(&self, song: &Song) -> bool {
    self.list.contains(&(song.title.clone(), song.artist.clone()))
  }

  pub fn entries(&self) -> Vec<FavoriteEntry> {
    self.list.to_vec()
  }

  pub fn len(&self) -> usize {
    self.list.len()
  }

  pub fn is_empty(&self) -> bool {
    self.list.is_empty()
  }

  /// Pares resueltos contra el catálogo actual, en orden de marcado.
  pub fn resolved<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Song> {
    self.list.iter().filter_map(|e| catalog.find_by_pair(&e.title, &e.artist)).collect()
  }

  fn persist(&self) -> Result<(), CoreError> {
    self.store.save(&self.list.to_vec()).map_err(|e| CoreError::Storage(e.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::ids::SongId;
  use crate::ports::favorites::FavoritesStoreError;
  use std::sync::{Arc, Mutex};

  #[derive(Default)]
  struct MemoryStore {
    saved: Arc<Mutex<Vec<FavoriteEntry>>>,
  }

  impl FavoritesStore for MemoryStore {
    fn save(&self, entries: &[FavoriteEntry]) -> Result<(), FavoritesStoreError> {
      *self.saved.lock().unwrap() = entries.to_vec();
      Ok(())
    }

    fn load(&self) -> Result<Vec<FavoriteEntry>, FavoritesStoreError> {
      Ok(self.saved.lock().unwrap().clone())
    }
  }

  fn song(title: &str, artist: &str) -> Song {
    Song {
      id: SongId::new(),
      title: title.to_string(),
      artist: artist.to_string(),
      album: "album".to_string(),
      audio_ref: String::new(),
      image_ref: String::new(),
      artist_image_ref: String::new(),
    }
  }

  #[test]
  fn toggle_marks_then_unmarks_and_persists_each_time() {
    let saved = Arc::new(Mutex::new(Vec::new()));
    let store = MemoryStore { saved: Arc::clone(&saved) };
    let mut favorites = FavoritesService::new(store);
    let s = song("corazones", "ana");

    assert_eq!(favorites.toggle(&s).unwrap(), true);
    assert!(favorites.is_favorite(&s));
    assert_eq!(saved.lock().unwrap().len(), 1);

    assert_eq!(favorites.toggle(&s).unwrap(), false);
    assert!(!favorites.is_favorite(&s));
    assert!(saved.lock().unwrap().is_empty());
  }

  #[test]
  fn identity_is_the_title_artist_pair() {
    let mut favorites = FavoritesService::new(MemoryStore::default());

    favorites.toggle(&song("tema", "ana")).unwrap();
    // mismo título con otro artista es otro favorito
    favorites.toggle(&song("tema", "beto")).unwrap();
    assert_eq!(favorites.len(), 2);
  }

  #[test]
  fn round_trip_resolves_against_the_catalog() {
    let saved = Arc::new(Mutex::new(Vec::new()));
    let s = song("corazones", "ana");

    {
      let store = MemoryStore { saved: Arc::clone(&saved) };
      let mut favorites = FavoritesService::new(store);
      favorites.toggle(&s).unwrap();
    }

    // sesión nueva sobre el mismo almacén
    let store = MemoryStore { saved: Arc::clone(&saved) };
    let mut favorites = FavoritesService::new(store);
    favorites.load().unwrap();

    let mut catalog = Catalog::new();
    catalog.replace(vec![s.clone(), song("otra", "beto")]);

    assert!(favorites.is_favorite(&s));
    let resolved = favorites.resolved(&catalog);
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].title, "corazones");
  }

  #[test]
  fn unresolvable_pairs_are_skipped_not_errors() {
    let mut favorites = FavoritesService::new(MemoryStore::default());
    favorites.toggle(&song("huerfana", "nadie")).unwrap();

    let catalog = Catalog::new();
    assert!(favorites.resolved(&catalog).is_empty());
    assert_eq!(favorites.len(), 1);
  }

  #[test]
  fn remove_by_pair_reports_presence() {
    let mut favorites = FavoritesService::new(MemoryStore::default());
    favorites.toggle(&song("tema", "ana")).unwrap();

    assert_eq!(favorites.remove("tema", "ana").unwrap(), true);
    assert_eq!(favorites.remove("tema", "ana").unwrap(), false);
    assert!(favorites.is_empty());
  }

  #[test]
  fn favorites_declare_local_only() {
    let favorites = FavoritesService::new(MemoryStore::default());
    assert!(!favorites.persistence_mode().requires_confirmation());
  }
}
