use audiva_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, PATHS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
  /// Address the HTTP server binds to.
  #[serde(default = "default_bind_addr")]
  pub bind_addr: String,

  /// Directory where uploaded song/image files are stored.
  pub assets_dir: PathBuf,
}

fn default_bind_addr() -> String {
  "127.0.0.1:5000".to_string()
}

impl Default for ServerConfig {
  fn default() -> Self {
    ServerConfig { bind_addr: default_bind_addr(), assets_dir: PATHS.data_dir.join("assets") }
  }
}

impl ServerConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("server")?;
    CONFIG_BACKEND.save_section("server", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("server", self)
  }
}
