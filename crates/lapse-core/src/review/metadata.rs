use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Descriptive fields carried alongside a review. Never read by scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewMetadata {
    pub title: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    /// Any other frontmatter keys, verbatim.
    pub extra: BTreeMap<String, String>,
}
