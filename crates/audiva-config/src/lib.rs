mod backend;
mod io;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use io::atomic_write_str;
pub use paths::{AudivaPaths, ConfigError};

use once_cell::sync::Lazy;

// Singleton de paths (respeta AUDIVA_BASE_DIR para instalaciones portables)
pub static PATHS: Lazy<AudivaPaths> =
  Lazy::new(|| AudivaPaths::detect().expect("failed to init AudivaPaths"));

// Singleton del backend de config (audiva.toml por secciones)
pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> =
  Lazy::new(|| TomlConfigBackend::new(PATHS.clone()));
