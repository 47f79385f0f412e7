//! Structured log events for key system operations.
//!
//! Each function emits a `tracing` event with structured fields.

use chrono::{DateTime, Utc};

/// Log a review file that parsed into a record.
pub fn review_loaded(review_id: &str, adjustments: usize) {
    tracing::debug!(
        event = "review_loaded",
        review_id = %review_id,
        adjustments = adjustments,
        "review loaded"
    );
}

/// Log a review file left out of a load.
pub fn review_skipped(file: &str, reason: &str) {
    tracing::error!(
        event = "review_skipped",
        file = %file,
        reason = %reason,
        "review skipped"
    );
}

/// Log a history line that looked like an adjustment but was unusable.
pub fn history_line_skipped(review_id: &str, line: &str, reason: &str) {
    tracing::warn!(
        event = "history_line_skipped",
        review_id = %review_id,
        line = %line,
        reason = %reason,
        "history line skipped"
    );
}

/// Log completion of a review load.
pub fn reviews_loaded(loaded: usize, skipped: usize) {
    tracing::info!(
        event = "reviews_loaded",
        loaded = loaded,
        skipped = skipped,
        "reviews loaded"
    );
}

/// Log completion of a batch score.
pub fn batch_scored(count: usize, now: DateTime<Utc>) {
    tracing::debug!(
        event = "batch_scored",
        count = count,
        now = %now,
        "batch scored"
    );
}
