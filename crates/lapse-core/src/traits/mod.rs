mod review_source;
mod score_engine;

pub use review_source::IReviewSource;
pub use score_engine::IScoreEngine;
