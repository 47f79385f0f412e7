use chrono::{DateTime, Utc};
use lapse_core::config::DecayConfig;
use lapse_core::errors::LapseResult;
use lapse_core::models::{ColorToken, DecayBreakdown, DecayResult, ScoredReview};
use lapse_core::review::ReviewRecord;
use lapse_core::traits::IScoreEngine;
use rayon::prelude::*;

use crate::color;
use crate::formula;

/// Decay engine bound to one validated configuration.
///
/// Holds no mutable state, so one engine can score from many threads.
#[derive(Debug, Clone)]
pub struct DecayEngine {
    config: DecayConfig,
}

impl DecayEngine {
    /// Create an engine, rejecting a config that breaks the decay
    /// preconditions (non-positive half-life or max score).
    pub fn new(config: DecayConfig) -> LapseResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the bound configuration.
    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    /// Score a review as seen at `now`.
    pub fn score(&self, record: &ReviewRecord, now: DateTime<Utc>) -> DecayResult {
        formula::compute(record, now, &self.config)
    }

    /// Score with the unrounded intermediate values.
    pub fn score_breakdown(&self, record: &ReviewRecord, now: DateTime<Utc>) -> DecayBreakdown {
        formula::compute_breakdown(record, now, &self.config)
    }

    /// Score a batch of independent reviews in parallel, keeping input order.
    /// Each review is colored by its rounded current score.
    pub fn score_batch(&self, records: &[ReviewRecord], now: DateTime<Utc>) -> Vec<ScoredReview> {
        let scored: Vec<ScoredReview> = records
            .par_iter()
            .map(|record| {
                let result = self.score(record, now);
                ScoredReview {
                    id: record.id.clone(),
                    color: color::color_for(result.current_score),
                    result,
                }
            })
            .collect();

        lapse_observability::events::batch_scored(scored.len(), now);
        scored
    }
}

impl Default for DecayEngine {
    fn default() -> Self {
        Self {
            config: DecayConfig::default(),
        }
    }
}

impl IScoreEngine for DecayEngine {
    fn score(&self, record: &ReviewRecord, now: DateTime<Utc>) -> DecayResult {
        DecayEngine::score(self, record, now)
    }

    fn color_for(&self, score: f64) -> ColorToken {
        color::color_for(score)
    }
}
