use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Review loader configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Directory holding one markdown file per review.
    pub reviews_dir: PathBuf,
    /// Explicit file names to load, in display order.
    /// Empty means every `.md` file in `reviews_dir`, sorted by name.
    pub files: Vec<String>,
    /// Fail the whole load on the first bad file instead of skipping it.
    pub strict: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            reviews_dir: PathBuf::from(defaults::DEFAULT_REVIEWS_DIR),
            files: Vec::new(),
            strict: defaults::DEFAULT_STRICT_LOADING,
        }
    }
}
