use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::color::ColorToken;
use super::decay_result::DecayResult;

/// A review id paired with its score and display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredReview {
    pub id: String,
    pub result: DecayResult,
    pub color: ColorToken,
}
