/// Lapse system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File extension of markdown review files.
pub const REVIEW_FILE_EXTENSION: &str = "md";

/// Heading that opens the adjustment history section of a review file.
pub const HISTORY_HEADING: &str = "## History";
