use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Displayable outcome of scoring one review at one instant.
///
/// Built fresh on every call; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DecayResult {
    /// Decayed score, rounded to one decimal place.
    pub current_score: f64,
    /// Initial score plus adjustments, capped at the max score.
    pub base_score: f64,
    /// Share of the base score lost to decay, in whole percent.
    pub decay_percentage: i32,
    /// Normalized display magnitude, never below the configured floor.
    pub ribbon_width: u32,
    /// Whole days since the initial date. Negative if scored before it.
    #[ts(type = "number")]
    pub days_elapsed: i64,
}

/// Unrounded intermediate values of a score, for debugging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecayBreakdown {
    pub days_elapsed: i64,
    pub adjustments: i64,
    pub base_score: f64,
    pub decay_factor: f64,
    pub current_score: f64,
    pub ribbon_width: f64,
    pub decay_percentage: f64,
}
