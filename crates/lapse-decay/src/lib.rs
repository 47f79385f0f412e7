//! # lapse-decay
//!
//! Half-life decay engine for review scores.
//! A review's base score (initial score plus adjustments, capped) halves
//! every `half_life_days` since its initial date. The engine also derives
//! the ribbon width and decay percentage shown next to the score.

pub mod color;
pub mod engine;
pub mod factors;
pub mod formula;

pub use color::color_for;
pub use engine::DecayEngine;
pub use lapse_core::models::DecayBreakdown;
