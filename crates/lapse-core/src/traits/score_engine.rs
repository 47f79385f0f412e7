use chrono::{DateTime, Utc};

use crate::models::{ColorToken, DecayResult};
use crate::review::ReviewRecord;

/// Time-decayed review scoring.
///
/// Implementations are pure: the same record, instant and configuration
/// always produce the same result, and the record is never modified.
pub trait IScoreEngine: Send + Sync {
    /// Score a review as seen at `now`.
    fn score(&self, record: &ReviewRecord, now: DateTime<Utc>) -> DecayResult;

    /// Display bucket for a score.
    fn color_for(&self, score: f64) -> ColorToken;
}
