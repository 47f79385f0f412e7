// Single source of truth for all default values.

// --- Decay ---
pub const DEFAULT_HALF_LIFE_DAYS: f64 = 90.0;
pub const DEFAULT_MAX_SCORE: f64 = 10.0;
pub const DEFAULT_MIN_DISPLAY_WIDTH: f64 = 5.0;

// --- Loader ---
pub const DEFAULT_REVIEWS_DIR: &str = "reviews";
pub const DEFAULT_STRICT_LOADING: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = true;
