/// Configuration errors. All of them are fatal: a misconfigured engine
/// must be rejected at startup, not per record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("half-life must be a positive number of days, got {value}")]
    InvalidHalfLife { value: f64 },

    #[error("max score must be positive, got {value}")]
    InvalidMaxScore { value: f64 },

    #[error("min display width must be within 0..=100, got {value}")]
    InvalidMinDisplayWidth { value: f64 },

    #[error("config parse failed: {reason}")]
    Parse { reason: String },
}
