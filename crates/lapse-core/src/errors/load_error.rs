/// Errors raised while turning review files into review records.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("reviews directory not found: {path}")]
    ReviewsDirMissing { path: String },

    #[error("review {id}: missing or malformed frontmatter")]
    MissingFrontmatter { id: String },

    #[error("review {id}: missing required field `{field}`")]
    MissingField { id: String, field: String },

    #[error("review {id}: initial score `{value}` is not a number")]
    InvalidScore { id: String, value: String },

    #[error("review {id}: `{value}` is not a YYYY-MM-DD date")]
    InvalidDate { id: String, value: String },
}
