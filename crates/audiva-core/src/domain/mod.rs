pub mod favorites;
pub mod ids;
pub mod playlist;
pub mod song;

pub use favorites::FavoriteEntry;
pub use ids::{PlaylistId, SongId};
pub use playlist::Playlist;
pub use song::Song;
