use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::ApiError;

/// Flat on-disk store for uploaded song and image files (the stand-in for
/// the original's cloud bucket). Every file lives under a random name and
/// is referenced as `/assets/<name>` everywhere else.
pub struct AssetStore {
  root: PathBuf,
}

impl AssetStore {
  pub fn open(root: impl Into<PathBuf>) -> Result<Self, ApiError> {
    let root = root.into();
    std::fs::create_dir_all(&root)
      .map_err(|e| ApiError::Asset(format!("create {}: {e}", root.display())))?;
    Ok(Self { root })
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Stores `bytes` under a fresh name, keeping the original extension.
  /// Returns the public `/assets/...` ref.
  pub fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, ApiError> {
    let ext = Path::new(original_name).extension().and_then(|e| e.to_str()).unwrap_or("bin");
    let file_name = format!("{}.{ext}", Uuid::new_v4());
    let path = self.root.join(&file_name);

    std::fs::write(&path, bytes)
      .map_err(|e| ApiError::Asset(format!("write {}: {e}", path.display())))?;

    Ok(format!("/assets/{file_name}"))
  }

  /// Best-effort delete of a stored ref; refs that do not point into the
  /// store (or are already gone) are ignored.
  pub fn delete(&self, asset_ref: &str) {
    let Some(file_name) = asset_ref.strip_prefix("/assets/") else {
      return;
    };
    // never follow anything that could escape the root
    if file_name.contains('/') || file_name.contains("..") {
      return;
    }

    let path = self.root.join(file_name);
    if let Err(e) = std::fs::remove_file(&path)
      && e.kind() != std::io::ErrorKind::NotFound
    {
      tracing::warn!(asset = %asset_ref, error = %e, "failed to delete asset");
    }
  }
}
