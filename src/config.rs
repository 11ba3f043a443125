use crate::error::Result;
use crate::utils::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// tunables of the simulation, loadable from toml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// per axis cap of the accumulated force of a physical body
    pub max_force: V2,
    /// factor applied to the force of a physical body every update
    pub damping: Float,
    /// factor applied per axis by `PhysicalBody::stop`
    pub stop_decay: Float,
    /// sprite height is divided by this when computing the draw depth
    pub depth_divisor: Float,
    /// fixed number of ui widget identities
    pub ui_pool_capacity: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_force: V2::new(10.0, 10.0),
            damping: 0.95,
            stop_decay: 0.8,
            depth_divisor: 16.0,
            ui_pool_capacity: 256,
        }
    }
}

impl EngineConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// like `load`, but logs the failure and falls back to the defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::debug!("loaded engine config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!(
                    "could not load engine config {}: {}. using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}
