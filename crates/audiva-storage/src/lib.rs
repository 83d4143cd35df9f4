//! Biblioteca local de Audiva sobre SQLite.
//!
//! Cumple dos papeles: es la base de datos del backend (canciones,
//! playlists, membresías) y la biblioteca offline del reproductor, donde
//! además viven los favoritos. Implementa los ports `CatalogProvider` y
//! `FavoritesStore` del núcleo.

pub mod config;
pub mod models;
pub mod schema;

use std::path::Path;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use uuid::Uuid;

use audiva_core::domain::favorites::FavoriteEntry;
use audiva_core::domain::ids::{PlaylistId, SongId};
use audiva_core::domain::playlist::Playlist;
use audiva_core::domain::song::Song;
use audiva_core::ports::catalog::{CatalogProvider, ProviderError};
use audiva_core::ports::favorites::{FavoritesStore, FavoritesStoreError};

use crate::config::StorageConfig;
use crate::models::{
  FavoriteRow, NewFavoriteRow, NewPlaylistRow, NewPlaylistSongRow, NewSongRow, PlaylistRow, SongRow,
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
  #[error("connection error: {0}")]
  Connection(String),

  #[error("migration error: {0}")]
  Migration(String),

  #[error("query error: {0}")]
  Query(String),

  #[error("corrupt row: {0}")]
  Corrupt(String),
}

fn query_err(e: diesel::result::Error) -> StorageError {
  StorageError::Query(e.to_string())
}

type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;
type Conn = PooledConnection<ConnectionManager<SqliteConnection>>;

fn song_to_new_row(song: &Song) -> NewSongRow {
  NewSongRow {
    id: song.id.to_string(),
    title: song.title.clone(),
    artist: song.artist.clone(),
    album: song.album.clone(),
    audio_ref: song.audio_ref.clone(),
    image_ref: song.image_ref.clone(),
    artist_image_ref: song.artist_image_ref.clone(),
  }
}

fn row_to_song(row: SongRow) -> Result<Song, StorageError> {
  let parsed = Uuid::parse_str(&row.id)
    .map_err(|e| StorageError::Corrupt(format!("invalid uuid in songs.id: {e}")))?;

  Ok(Song {
    id: SongId::from_uuid(parsed),
    title: row.title,
    artist: row.artist,
    album: row.album,
    audio_ref: row.audio_ref,
    image_ref: row.image_ref,
    artist_image_ref: row.artist_image_ref,
  })
}

fn parse_playlist_id(raw: &str) -> Result<PlaylistId, StorageError> {
  let parsed = Uuid::parse_str(raw)
    .map_err(|e| StorageError::Corrupt(format!("invalid uuid in playlists.id: {e}")))?;
  Ok(PlaylistId::from_uuid(parsed))
}

pub struct LibraryStore {
  pool: SqlitePool,
}

impl LibraryStore {
  pub fn open(cfg: &StorageConfig) -> Result<Self, StorageError> {
    let database_url = cfg.db_path.to_string_lossy().to_string();
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
      .max_size(8)
      .build(manager)
      .map_err(|e| StorageError::Connection(e.to_string()))?;

    let mut conn = pool.get().map_err(|e| StorageError::Connection(e.to_string()))?;

    if let Some(mode) = &cfg.journal_mode {
      conn
        .batch_execute(&format!("PRAGMA journal_mode = {mode}; PRAGMA foreign_keys = ON;"))
        .map_err(|e| StorageError::Connection(e.to_string()))?;
    }

    conn
      .run_pending_migrations(MIGRATIONS)
      .map_err(|e| StorageError::Migration(e.to_string()))?;

    Ok(Self { pool })
  }

  /// Abre (o crea) la base en `path` con los defaults de journal. Para
  /// tests y bins; el camino normal es `new_from_config`.
  pub fn open_at(path: &Path) -> Result<Self, StorageError> {
    let cfg =
      StorageConfig { db_path: path.to_path_buf(), journal_mode: Some("WAL".to_string()) };
    Self::open(&cfg)
  }

  pub fn new_from_config() -> Result<Self, StorageError> {
    let cfg = StorageConfig::load().map_err(|e| StorageError::Connection(e.to_string()))?;
    Self::open(&cfg)
  }

  fn conn(&self) -> Result<Conn, StorageError> {
    self.pool.get().map_err(|e| StorageError::Connection(e.to_string()))
  }

  // -------- canciones --------

  pub fn insert_song(&self, song: &Song) -> Result<(), StorageError> {
    use crate::schema::songs::dsl::*;

    let new_row = song_to_new_row(song);
    let mut conn = self.conn()?;

    diesel::insert_into(songs).values(&new_row).execute(&mut conn).map_err(query_err)?;
    Ok(())
  }

  /// Todas las canciones, más nuevas primero (como la vista de biblioteca).
  pub fn list_songs(&self) -> Result<Vec<Song>, StorageError> {
    use crate::schema::songs::dsl::*;

    let mut conn = self.conn()?;
    let rows =
      songs.order(created_at.desc()).load::<SongRow>(&mut conn).map_err(query_err)?;

    rows.into_iter().map(row_to_song).collect()
  }

  pub fn find_song(&self, song_id: SongId) -> Result<Option<Song>, StorageError> {
    use crate::schema::songs::dsl::*;

    let id_str = song_id.to_string();
    let mut conn = self.conn()?;

    let row_opt = songs
      .filter(id.eq(id_str))
      .first::<SongRow>(&mut conn)
      .optional()
      .map_err(query_err)?;

    row_opt.map(row_to_song).transpose()
  }

  /// Borra la canción y sus membresías en playlists, todo o nada.
  /// Devuelve la fila borrada para que el caller limpie los assets.
  pub fn remove_song(&self, song_id: SongId) -> Result<Option<Song>, StorageError> {
    let sid = song_id.to_string();
    let mut conn = self.conn()?;

    let row_opt = conn
      .transaction::<_, diesel::result::Error, _>(|conn| {
        let row_opt = schema::songs::table
          .filter(schema::songs::id.eq(&sid))
          .first::<SongRow>(conn)
          .optional()?;

        if row_opt.is_some() {
          diesel::delete(
            schema::playlist_songs::table.filter(schema::playlist_songs::song_id.eq(&sid)),
          )
          .execute(conn)?;
          diesel::delete(schema::songs::table.filter(schema::songs::id.eq(&sid)))
            .execute(conn)?;
        }

        Ok(row_opt)
      })
      .map_err(query_err)?;

    row_opt.map(row_to_song).transpose()
  }

  // -------- playlists --------

  pub fn insert_playlist(&self, playlist_name: &str) -> Result<Playlist, StorageError> {
    use crate::schema::playlists::dsl::*;

    let new_row =
      NewPlaylistRow { id: Uuid::new_v4().to_string(), name: playlist_name.to_string() };
    let mut conn = self.conn()?;

    diesel::insert_into(playlists).values(&new_row).execute(&mut conn).map_err(query_err)?;

    let pid = parse_playlist_id(&new_row.id)?;
    Ok(Playlist::new(pid, playlist_name))
  }

  pub fn list_playlists(&self) -> Result<Vec<Playlist>, StorageError> {
    let mut conn = self.conn()?;

    let rows = schema::playlists::table
      .order(schema::playlists::created_at.asc())
      .load::<PlaylistRow>(&mut conn)
      .map_err(query_err)?;

    rows.into_iter().map(|row| populate_playlist(&mut conn, row)).collect()
  }

  pub fn find_playlist(&self, playlist_id: PlaylistId) -> Result<Option<Playlist>, StorageError> {
    let mut conn = self.conn()?;

    let row_opt = schema::playlists::table
      .filter(schema::playlists::id.eq(playlist_id.to_string()))
      .first::<PlaylistRow>(&mut conn)
      .optional()
      .map_err(query_err)?;

    match row_opt {
      None => Ok(None),
      Some(row) => Ok(Some(populate_playlist(&mut conn, row)?)),
    }
  }

  /// Borra la playlist y sus membresías. `false` si no existía.
  pub fn delete_playlist(&self, playlist_id: PlaylistId) -> Result<bool, StorageError> {
    let pid = playlist_id.to_string();
    let mut conn = self.conn()?;

    conn
      .transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::delete(
          schema::playlist_songs::table.filter(schema::playlist_songs::playlist_id.eq(&pid)),
        )
        .execute(conn)?;

        let deleted = diesel::delete(schema::playlists::table.filter(schema::playlists::id.eq(&pid)))
          .execute(conn)?;

        Ok(deleted > 0)
      })
      .map_err(query_err)
  }

  /// Membresía idempotente: `false` si la canción ya estaba en la playlist.
  /// La posición nueva es siempre el final de la lista.
  pub fn add_song_to_playlist(
    &self,
    playlist: PlaylistId,
    song: SongId,
  ) -> Result<bool, StorageError> {
    let pid = playlist.to_string();
    let sid = song.to_string();
    let mut conn = self.conn()?;

    conn
      .transaction::<_, diesel::result::Error, _>(|conn| {
        let already: i64 = schema::playlist_songs::table
          .filter(schema::playlist_songs::playlist_id.eq(&pid))
          .filter(schema::playlist_songs::song_id.eq(&sid))
          .count()
          .get_result(conn)?;

        if already > 0 {
          return Ok(false);
        }

        let at_end: i64 = schema::playlist_songs::table
          .filter(schema::playlist_songs::playlist_id.eq(&pid))
          .count()
          .get_result(conn)?;

        let new_row = NewPlaylistSongRow {
          id: Uuid::new_v4().to_string(),
          playlist_id: pid.clone(),
          song_id: sid.clone(),
          position: at_end as i32,
        };
        diesel::insert_into(schema::playlist_songs::table).values(&new_row).execute(conn)?;

        Ok(true)
      })
      .map_err(query_err)
  }

  pub fn remove_song_from_playlist(
    &self,
    playlist: PlaylistId,
    song: SongId,
  ) -> Result<bool, StorageError> {
    let mut conn = self.conn()?;

    let deleted = diesel::delete(
      schema::playlist_songs::table
        .filter(schema::playlist_songs::playlist_id.eq(playlist.to_string()))
        .filter(schema::playlist_songs::song_id.eq(song.to_string())),
    )
    .execute(&mut conn)
    .map_err(query_err)?;

    Ok(deleted > 0)
  }

  // -------- favoritos --------

  /// Reemplazo total de la tabla con la lista plana, preservando el orden.
  pub fn save_favorites(&self, entries: &[FavoriteEntry]) -> Result<(), StorageError> {
    let mut conn = self.conn()?;

    conn
      .transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::delete(schema::favorites::table).execute(conn)?;

        for (i, entry) in entries.iter().enumerate() {
          let new_row = NewFavoriteRow {
            id: Uuid::new_v4().to_string(),
            title: entry.title.clone(),
            artist: entry.artist.clone(),
            position: i as i32,
          };
          diesel::insert_into(schema::favorites::table).values(&new_row).execute(conn)?;
        }

        Ok(())
      })
      .map_err(query_err)
  }

  pub fn load_favorites(&self) -> Result<Vec<FavoriteEntry>, StorageError> {
    use crate::schema::favorites::dsl::*;

    let mut conn = self.conn()?;
    let rows =
      favorites.order(position.asc()).load::<FavoriteRow>(&mut conn).map_err(query_err)?;

    Ok(rows.into_iter().map(|row| FavoriteEntry { title: row.title, artist: row.artist }).collect())
  }
}

fn populate_playlist(conn: &mut Conn, row: PlaylistRow) -> Result<Playlist, StorageError> {
  let pid = parse_playlist_id(&row.id)?;
  let mut playlist = Playlist::new(pid, row.name);

  let song_rows = schema::playlist_songs::table
    .inner_join(schema::songs::table)
    .filter(schema::playlist_songs::playlist_id.eq(&row.id))
    .order(schema::playlist_songs::position.asc())
    .select(schema::songs::all_columns)
    .load::<SongRow>(conn)
    .map_err(query_err)?;

  for song_row in song_rows {
    playlist.add_song(row_to_song(song_row)?);
  }

  Ok(playlist)
}

// -------- ports del núcleo --------

#[async_trait::async_trait]
impl CatalogProvider for LibraryStore {
  async fn list_songs(&self) -> Result<Vec<Song>, ProviderError> {
    LibraryStore::list_songs(self).map_err(|e| ProviderError::Storage(e.to_string()))
  }
}

impl FavoritesStore for LibraryStore {
  fn save(&self, entries: &[FavoriteEntry]) -> Result<(), FavoritesStoreError> {
    self.save_favorites(entries).map_err(|e| FavoritesStoreError::Storage(e.to_string()))
  }

  fn load(&self) -> Result<Vec<FavoriteEntry>, FavoritesStoreError> {
    self.load_favorites().map_err(|e| FavoritesStoreError::Storage(e.to_string()))
  }
}
