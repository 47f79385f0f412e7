//! # lapse-core
//!
//! Foundation crate for the Lapse review scoring system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod review;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{DecayConfig, LapseConfig};
pub use errors::{LapseError, LapseResult};
pub use models::{ColorToken, DecayResult, ScoredReview};
pub use review::{AdjustmentEvent, ReviewMetadata, ReviewRecord};
