use audiva_core::domain::ids::SongId;
use audiva_core::domain::song::Song;
use audiva_storage::LibraryStore;
use std::path::Path;

fn main() {
  // Base local en el directorio actual, igual que los smoke de playlists
  let store = LibraryStore::open_at(Path::new("audiva.db")).expect("failed to open library");

  let song = Song {
    id: SongId::new(),
    title: "Test Song".to_string(),
    artist: "Test Artist".to_string(),
    album: "Test Album".to_string(),
    audio_ref: "/assets/test.mp3".to_string(),
    image_ref: "/assets/test.jpg".to_string(),
    artist_image_ref: "/assets/test-artist.jpg".to_string(),
  };

  println!("Saving song with id = {}", song.id);
  store.insert_song(&song).expect("failed to save song");

  let listed = store.list_songs().expect("failed to list songs");
  println!("Library now holds {} song(s):", listed.len());
  for s in listed {
    println!("  {} — {} [{}]", s.title, s.artist, s.album);
  }
}
