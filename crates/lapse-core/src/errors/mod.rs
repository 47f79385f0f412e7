mod config_error;
mod load_error;

pub use config_error::ConfigError;
pub use load_error::LoadError;

/// Workspace-wide error type. Subsystem errors convert into it with `?`.
#[derive(Debug, thiserror::Error)]
pub enum LapseError {
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("load error: {0}")]
    LoadError(#[from] LoadError),
}

pub type LapseResult<T> = Result<T, LapseError>;
