use crate::errors::LapseResult;
use crate::review::ReviewRecord;

/// Supplies validated review records to the scoring engine.
pub trait IReviewSource: Send + Sync {
    /// Load every available review, in display order.
    fn load_all(&self) -> LapseResult<Vec<ReviewRecord>>;
}
