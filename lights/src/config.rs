//! Light array configuration (`lights.toml`)
//!
//! ```toml
//! lights = 12
//! chips = 2            # optional, defaults to ceil(lights / 8)
//!
//! [emulator]
//! socket = "/tmp/tpic6c596-emulator.sock"
//! ```

use std::path::{Path, PathBuf};
use lights_core::DEFAULT_SOCKET;
use lights_driver::MAX_CHIPS;
use serde::{Deserialize, Serialize};
use crate::array::chips_for;
use crate::error::{LightsError, LightsResult};

/// Light array description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightsConfig {
    /// Number of lights
    pub lights: usize,

    /// Chips in the chain (default: just enough for `lights`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chips: Option<usize>,

    /// Emulator connection
    #[serde(default)]
    pub emulator: EmulatorConfig,
}

/// Emulator backend settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmulatorConfig {
    /// Unix datagram socket of the emulator daemon
    #[serde(default = "default_socket")]
    pub socket: PathBuf,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            socket: default_socket(),
        }
    }
}

fn default_socket() -> PathBuf {
    PathBuf::from(DEFAULT_SOCKET)
}

impl LightsConfig {
    pub fn new(lights: usize) -> Self {
        Self {
            lights,
            chips: None,
            emulator: EmulatorConfig::default(),
        }
    }

    /// Chain length, explicit or derived from the light count
    pub fn chips(&self) -> usize {
        self.chips.unwrap_or_else(|| chips_for(self.lights).min(MAX_CHIPS))
    }

    /// Parse a config from TOML
    pub fn from_toml(content: &str) -> LightsResult<Self> {
        toml::from_str(content).map_err(|e| LightsError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load a config file
    pub fn from_file(path: &Path) -> LightsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LightsError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> LightsResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| LightsError::Config(format!("Failed to serialize config: {}", e)))
    }
}

/// Connects a light array to the emulator daemon named in `config`
#[cfg(unix)]
pub fn connect_emulator(
    config: &LightsConfig,
) -> LightsResult<crate::LightArray<lights_driver::SocketPins>> {
    let pins = lights_driver::SocketPins::connect(&config.emulator.socket)
        .map_err(lights_driver::DriverError::from)?;
    crate::LightArray::with_chips(pins, config.lights, config.chips)
}
