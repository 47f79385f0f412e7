use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::adjustment::AdjustmentEvent;
use super::metadata::ReviewMetadata;

/// A validated review, ready to be scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    /// Opaque identifier (the file stem for markdown reviews).
    pub id: String,
    /// Score assigned at creation, expected in `[0, max_score]`.
    pub initial_score: f64,
    /// Decay starts at midnight UTC of this date.
    pub initial_date: NaiveDate,
    /// Adjustments in authored order. Never re-sorted.
    #[serde(default)]
    pub history: Vec<AdjustmentEvent>,
    #[serde(default)]
    pub metadata: ReviewMetadata,
}

impl ReviewRecord {
    pub fn new(id: impl Into<String>, initial_score: f64, initial_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            initial_score,
            initial_date,
            history: Vec::new(),
            metadata: ReviewMetadata::default(),
        }
    }

    /// Replace the adjustment history.
    pub fn with_history(mut self, history: Vec<AdjustmentEvent>) -> Self {
        self.history = history;
        self
    }

    /// Sum of every adjustment delta; 0 for an empty history.
    pub fn total_adjustment(&self) -> i64 {
        self.history.iter().map(|e| i64::from(e.change)).sum()
    }
}
