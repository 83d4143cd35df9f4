use audiva_config::{CONFIG_BACKEND, ConfigBackend, ConfigError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiConfig {
  /// Base del backend, sin barra final.
  pub base_url: String,
}

impl Default for ApiConfig {
  fn default() -> Self {
    ApiConfig { base_url: "http://127.0.0.1:5000".to_string() }
  }
}

impl ApiConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("api")?;
    CONFIG_BACKEND.save_section("api", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("api", self)
  }
}
