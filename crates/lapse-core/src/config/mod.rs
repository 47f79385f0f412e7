pub mod decay_config;
pub mod defaults;
pub mod loader_config;
pub mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use decay_config::DecayConfig;
pub use loader_config::LoaderConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::{ConfigError, LapseResult, LoadError};

/// Top-level configuration, one table per subsystem.
///
/// Every table and field is optional in TOML; missing values fall back to
/// the constants in [`defaults`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LapseConfig {
    pub decay: DecayConfig,
    pub loader: LoaderConfig,
    pub observability: ObservabilityConfig,
}

impl LapseConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(s: &str) -> LapseResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn from_file(path: &Path) -> LapseResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> LapseResult<()> {
        self.decay.validate()?;
        Ok(())
    }
}
