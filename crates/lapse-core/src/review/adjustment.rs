use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A dated point adjustment to a review's base score.
///
/// The date is an audit trail only; decay always runs from the review's
/// initial date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdjustmentEvent {
    pub date: NaiveDate,
    /// Signed delta, e.g. `+1` or `-2`.
    pub change: i32,
}

impl AdjustmentEvent {
    pub fn new(date: NaiveDate, change: i32) -> Self {
        Self { date, change }
    }
}
