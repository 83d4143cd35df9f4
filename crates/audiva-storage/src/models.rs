use crate::schema::favorites;
use crate::schema::playlist_songs;
use crate::schema::playlists;
use crate::schema::songs;

use diesel::prelude::*;

#[derive(Debug, Queryable)]
#[diesel(table_name = songs)]
pub struct SongRow {
  pub id: String,
  pub title: String,
  pub artist: String,
  pub album: String,
  pub audio_ref: String,
  pub image_ref: String,
  pub artist_image_ref: String,
  pub created_at: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = songs)]
pub struct NewSongRow {
  pub id: String,
  pub title: String,
  pub artist: String,
  pub album: String,
  pub audio_ref: String,
  pub image_ref: String,
  pub artist_image_ref: String,
}

#[derive(Debug, Queryable)]
#[diesel(table_name = playlists)]
pub struct PlaylistRow {
  pub id: String,
  pub name: String,
  pub created_at: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = playlists)]
pub struct NewPlaylistRow {
  pub id: String,
  pub name: String,
}

#[derive(Debug, Queryable)]
#[diesel(table_name = playlist_songs)]
pub struct PlaylistSongRow {
  pub id: String,
  pub playlist_id: String,
  pub song_id: String,
  pub position: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = playlist_songs)]
pub struct NewPlaylistSongRow {
  pub id: String,
  pub playlist_id: String,
  pub song_id: String,
  pub position: i32,
}

#[derive(Debug, Queryable)]
#[diesel(table_name = favorites)]
pub struct FavoriteRow {
  pub id: String,
  pub title: String,
  pub artist: String,
  pub position: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = favorites)]
pub struct NewFavoriteRow {
  pub id: String,
  pub title: String,
  pub artist: String,
  pub position: i32,
}
