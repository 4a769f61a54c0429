//! Controller Configuration
//!
//! Look and locomotion tuning as one serializable document. Every field has a
//! default, so a config file only needs the values it changes:
//!
//! ```json
//! {
//!   "locomotion": { "gravity": 9.81, "speeds": { "sprint": 7.5 } },
//!   "look": { "clamp": { "mode": "both" }, "smoothing": { "window": 8 } }
//! }
//! ```

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::camera::LookConfig;
use crate::error::ConfigError;
use crate::player::LocomotionConfig;

/// Complete tuning for one first-person controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub locomotion: LocomotionConfig,
    pub look: LookConfig,
}

impl ControllerConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!("loaded controller config from {}", path.display());
        Ok(config)
    }

    /// Pretty-printed JSON, suitable for writing a starter config.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.locomotion.validate()?;
        self.look.validate()
    }
}
