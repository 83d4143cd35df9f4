use audiva_config::{CONFIG_BACKEND, ConfigBackend, ConfigError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlaybackConfig {
  /// Volumen inicial, `0.0..=1.0`.
  #[serde(default = "default_volume")]
  pub volume: f32,

  /// Segundos que saltan los botones de rebobinar/adelantar.
  #[serde(default = "default_seek_step")]
  pub seek_step_secs: u64,
}

fn default_volume() -> f32 {
  1.0
}

fn default_seek_step() -> u64 {
  10
}

impl Default for PlaybackConfig {
  fn default() -> Self {
    PlaybackConfig { volume: default_volume(), seek_step_secs: default_seek_step() }
  }
}

impl PlaybackConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("player")?;
    CONFIG_BACKEND.save_section("player", &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    CONFIG_BACKEND.save_section("player", self)
  }
}
