mod color;
mod decay_result;
mod scored_review;

pub use color::ColorToken;
pub use decay_result::{DecayBreakdown, DecayResult};
pub use scored_review::ScoredReview;
