//! End-to-end tests over the in-process router (no sockets involved).

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::util::ServiceExt;

use audiva_backend::assets::AssetStore;
use audiva_backend::{AppState, app};
use audiva_core::domain::ids::SongId;
use audiva_core::domain::song::Song;
use audiva_storage::LibraryStore;

struct TestApp {
  app: Router,
  state: AppState,
  tmp: TempDir,
}

fn test_app() -> TestApp {
  let tmp = TempDir::new().unwrap();
  let store = LibraryStore::open_at(&tmp.path().join("audiva.db")).unwrap();
  let assets = AssetStore::open(tmp.path().join("assets")).unwrap();
  let state = AppState { store: Arc::new(store), assets: Arc::new(assets) };
  TestApp { app: app(state.clone()), state, tmp }
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
  let response = app.clone().oneshot(request).await.unwrap();
  let status = response.status();
  let bytes = response.into_body().collect().await.unwrap().to_bytes();
  let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
  (status, body)
}

async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
  send(app, Request::get(path).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
  let request = Request::post(path)
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_string()))
    .unwrap();
  send(app, request).await
}

async fn delete(app: &Router, path: &str) -> (StatusCode, Value) {
  send(app, Request::delete(path).body(Body::empty()).unwrap()).await
}

fn seeded_song(state: &AppState, title: &str) -> Song {
  let song = Song {
    id: SongId::new(),
    title: title.to_string(),
    artist: "Ana".to_string(),
    album: "Primero".to_string(),
    audio_ref: format!("/assets/{title}.mp3"),
    image_ref: format!("/assets/{title}.jpg"),
    artist_image_ref: format!("/assets/{title}-artist.jpg"),
  };
  state.store.insert_song(&song).unwrap();
  song
}

const BOUNDARY: &str = "audiva-test-boundary";

fn multipart_body(fields: &[(&str, &str)], files: &[(&str, &str, &[u8])]) -> Vec<u8> {
  let mut body = Vec::new();
  for (name, value) in fields {
    body.extend_from_slice(
      format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
      )
      .as_bytes(),
    );
  }
  for (name, file_name, bytes) in files {
    body.extend_from_slice(
      format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
      )
      .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(b"\r\n");
  }
  body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
  body
}

#[tokio::test]
async fn playlist_crud_round_trip() {
  let t = test_app();

  let (status, created) = post_json(&t.app, "/api/playlists", json!({ "name": "viaje" })).await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(created["name"], "viaje");
  assert!(created["_id"].is_string());
  assert_eq!(created["songs"], json!([]));

  let (status, listed) = get(&t.app, "/api/playlists").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(listed.as_array().unwrap().len(), 1);

  let id = created["_id"].as_str().unwrap().to_string();
  let (status, deleted) = delete(&t.app, &format!("/api/playlists/{id}")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(deleted["message"], "Playlist deleted successfully");

  let (status, missing) = get(&t.app, &format!("/api/playlists/{id}")).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(missing["message"], "Playlist not found");
}

#[tokio::test]
async fn blank_playlist_name_is_rejected() {
  let t = test_app();
  let (status, body) = post_json(&t.app, "/api/playlists", json!({ "name": "   " })).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["message"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn playlist_membership_is_idempotent_over_http() {
  let t = test_app();
  let song = seeded_song(&t.state, "uno");

  let (_, created) = post_json(&t.app, "/api/playlists", json!({ "name": "mix" })).await;
  let id = created["_id"].as_str().unwrap().to_string();

  let body = json!({ "songId": song.id.to_string() });
  let (status, updated) =
    post_json(&t.app, &format!("/api/playlists/{id}/songs"), body.clone()).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(updated["songs"].as_array().unwrap().len(), 1);
  // song wire shape: camelCase locators, plain id
  assert_eq!(updated["songs"][0]["songUrl"], song.audio_ref);
  assert_eq!(updated["songs"][0]["id"], song.id.to_string());

  // same song again: no duplicate, same playlist back
  let (status, updated) = post_json(&t.app, &format!("/api/playlists/{id}/songs"), body).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(updated["songs"].as_array().unwrap().len(), 1);

  let (status, updated) =
    delete(&t.app, &format!("/api/playlists/{id}/songs/{}", song.id)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(updated["songs"], json!([]));
}

#[tokio::test]
async fn adding_unknown_song_or_playlist_is_not_found() {
  let t = test_app();
  let song = seeded_song(&t.state, "uno");

  let ghost = uuid::Uuid::new_v4();
  let (status, body) = post_json(
    &t.app,
    &format!("/api/playlists/{ghost}/songs"),
    json!({ "songId": song.id.to_string() }),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["message"], "Playlist not found");

  let (_, created) = post_json(&t.app, "/api/playlists", json!({ "name": "mix" })).await;
  let id = created["_id"].as_str().unwrap().to_string();
  let (status, body) = post_json(
    &t.app,
    &format!("/api/playlists/{id}/songs"),
    json!({ "songId": uuid::Uuid::new_v4().to_string() }),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["message"], "Song not found");
}

#[tokio::test]
async fn upload_then_delete_song_manages_assets() {
  let t = test_app();

  let body = multipart_body(
    &[("title", "Uno"), ("artist", "Ana"), ("album", "Primero")],
    &[
      ("songFile", "uno.mp3", b"not really audio"),
      ("imageFile", "uno.jpg", b"not really a cover"),
      ("artistImageFile", "ana.jpg", b"not really a portrait"),
    ],
  );
  let request = Request::post("/api/songs")
    .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
    .body(Body::from(body))
    .unwrap();

  let (status, created) = send(&t.app, request).await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(created["title"], "Uno");

  let song_url = created["songUrl"].as_str().unwrap().to_string();
  assert!(song_url.starts_with("/assets/"));

  // the three assets are on disk
  let asset_path = |url: &str| t.tmp.path().join("assets").join(url.trim_start_matches("/assets/"));
  assert!(asset_path(&song_url).exists());
  assert!(asset_path(created["imageUrl"].as_str().unwrap()).exists());
  assert!(asset_path(created["artistImageUrl"].as_str().unwrap()).exists());

  // and the song is listed
  let (_, listed) = get(&t.app, "/api/songs").await;
  assert_eq!(listed.as_array().unwrap().len(), 1);

  let id = created["id"].as_str().unwrap().to_string();
  let (status, deleted) = delete(&t.app, &format!("/api/songs/{id}")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(deleted["message"], "Song deleted successfully");
  assert!(!asset_path(&song_url).exists());

  let (status, missing) = get(&t.app, &format!("/api/songs/{id}")).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(missing["message"], "Song not found");
}

#[tokio::test]
async fn upload_with_missing_file_is_rejected() {
  let t = test_app();

  let body = multipart_body(
    &[("title", "Uno"), ("artist", "Ana"), ("album", "Primero")],
    &[("songFile", "uno.mp3", b"not really audio")],
  );
  let request = Request::post("/api/songs")
    .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
    .body(Body::from(body))
    .unwrap();

  let (status, body) = send(&t.app, request).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["message"].as_str().unwrap().contains("imageFile"));

  // the stored audio file was rolled back
  let entries: Vec<_> = std::fs::read_dir(t.tmp.path().join("assets")).unwrap().collect();
  assert!(entries.is_empty());
}

#[tokio::test]
async fn deleting_a_song_removes_playlist_memberships() {
  let t = test_app();
  let song = seeded_song(&t.state, "uno");

  let (_, created) = post_json(&t.app, "/api/playlists", json!({ "name": "mix" })).await;
  let id = created["_id"].as_str().unwrap().to_string();
  post_json(&t.app, &format!("/api/playlists/{id}/songs"), json!({ "songId": song.id.to_string() }))
    .await;

  let (status, _) = delete(&t.app, &format!("/api/songs/{}", song.id)).await;
  assert_eq!(status, StatusCode::OK);

  let (_, playlist) = get(&t.app, &format!("/api/playlists/{id}")).await;
  assert_eq!(playlist["songs"], json!([]));
}
