pub mod audio;
pub mod catalog;
pub mod favorites;
pub mod notifier;
pub mod playlists;

pub use audio::{AudioOutput, PlaybackError};
pub use catalog::{CatalogProvider, ProviderError};
pub use favorites::{FavoritesStore, FavoritesStoreError};
pub use notifier::{NoticeKind, Notifier};
pub use playlists::{PlaylistStore, PlaylistStoreError};
