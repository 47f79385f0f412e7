use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Display bucket for a score, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum ColorToken {
    Excellent,
    Good,
    Average,
    BelowAverage,
    Poor,
}

impl ColorToken {
    /// All buckets, ordered by descending threshold.
    pub const ALL: [ColorToken; 5] = [
        ColorToken::Excellent,
        ColorToken::Good,
        ColorToken::Average,
        ColorToken::BelowAverage,
        ColorToken::Poor,
    ];

    /// Inclusive lower score bound of the bucket. `Poor` has none.
    pub fn lower_bound(self) -> Option<f64> {
        match self {
            Self::Excellent => Some(8.0),
            Self::Good => Some(6.0),
            Self::Average => Some(4.0),
            Self::BelowAverage => Some(2.0),
            Self::Poor => None,
        }
    }

    /// CSS hex color used by the web front end.
    pub fn hex(self) -> &'static str {
        match self {
            Self::Excellent => "#22c55e",
            Self::Good => "#84cc16",
            Self::Average => "#eab308",
            Self::BelowAverage => "#f97316",
            Self::Poor => "#ef4444",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
