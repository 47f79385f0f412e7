//! # lapse-observability
//!
//! Structured logging for the Lapse workspace: subscriber setup and the
//! event helpers the loader and engine emit through.

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
