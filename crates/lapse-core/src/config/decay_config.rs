use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Decay subsystem configuration.
///
/// Bound once into a decay engine; every score computed by that engine
/// uses the same values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Days after which an un-adjusted score halves. Must be > 0.
    pub half_life_days: f64,
    /// Upper clamp for the base score. Must be > 0.
    pub max_score: f64,
    /// Lower clamp for the ribbon width, in percentage points (0–100).
    pub min_display_width: f64,
}

impl DecayConfig {
    /// Check the engine preconditions. A failure here means the engine is
    /// misconfigured and should not score anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.half_life_days.is_finite() || self.half_life_days <= 0.0 {
            return Err(ConfigError::InvalidHalfLife {
                value: self.half_life_days,
            });
        }
        if !self.max_score.is_finite() || self.max_score <= 0.0 {
            return Err(ConfigError::InvalidMaxScore {
                value: self.max_score,
            });
        }
        if !(0.0..=100.0).contains(&self.min_display_width) {
            return Err(ConfigError::InvalidMinDisplayWidth {
                value: self.min_display_width,
            });
        }
        Ok(())
    }
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            half_life_days: defaults::DEFAULT_HALF_LIFE_DAYS,
            max_score: defaults::DEFAULT_MAX_SCORE,
            min_display_width: defaults::DEFAULT_MIN_DISPLAY_WIDTH,
        }
    }
}
