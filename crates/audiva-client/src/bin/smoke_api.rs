use audiva_client::ApiClient;

/// Recorrido de humo contra un backend corriendo (ver `audiva-backend`).
/// Uso: `smoke_api [base_url]`; default el de la sección [api].
#[tokio::main]
async fn main() {
  let client = match std::env::args().nth(1) {
    Some(base) => ApiClient::new(base),
    None => ApiClient::from_config().expect("failed to load [api] config"),
  };

  let songs = client.fetch_songs().await.expect("failed to fetch songs");
  println!("Backend reports {} song(s)", songs.len());

  let playlist = client.create_playlist("smoke").await.expect("failed to create playlist");
  println!("Created playlist {} ({})", playlist.name, playlist.id);

  if let Some(first) = songs.first() {
    client
      .add_song_to_playlist(playlist.id, first.id)
      .await
      .expect("failed to add song to playlist");
    let reloaded =
      client.fetch_playlist(playlist.id).await.expect("failed to fetch playlist back");
    println!("Playlist now holds {} song(s)", reloaded.len());
  }

  client.delete_playlist(playlist.id).await.expect("failed to delete playlist");
  println!("Smoke playlist deleted, all good");
}
