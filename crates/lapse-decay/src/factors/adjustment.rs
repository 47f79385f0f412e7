use lapse_core::review::ReviewRecord;

/// Base score: initial score plus every adjustment, capped at `max_score`.
///
/// There is no floor; a review pushed below zero keeps its negative base.
pub fn base_score(record: &ReviewRecord, max_score: f64) -> f64 {
    (record.initial_score + record.total_adjustment() as f64).min(max_score)
}
