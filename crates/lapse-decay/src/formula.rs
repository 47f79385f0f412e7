use chrono::{DateTime, Utc};
use lapse_core::config::DecayConfig;
use lapse_core::models::{DecayBreakdown, DecayResult};
use lapse_core::review::ReviewRecord;

use crate::factors::{adjustment, display, temporal};

/// Half-life decay of an adjusted review score.
///
/// ```text
/// baseScore    = min(initialScore + Σ changes, maxScore)
/// currentScore = baseScore × 0.5^(daysElapsed / halfLife)
/// ribbonWidth  = max(currentScore / maxScore × 100, minDisplayWidth)
/// decayPct     = (baseScore − currentScore) / baseScore × 100   (0 when baseScore = 0)
/// ```
pub fn compute(record: &ReviewRecord, now: DateTime<Utc>, config: &DecayConfig) -> DecayResult {
    let bd = compute_breakdown(record, now, config);

    DecayResult {
        current_score: display::round1(bd.current_score),
        base_score: bd.base_score,
        decay_percentage: display::whole_percent(bd.decay_percentage),
        ribbon_width: display::round_half_up(bd.ribbon_width) as u32,
        days_elapsed: bd.days_elapsed,
    }
}

/// Every intermediate value of [`compute`], before display rounding.
pub fn compute_breakdown(
    record: &ReviewRecord,
    now: DateTime<Utc>,
    config: &DecayConfig,
) -> DecayBreakdown {
    let days_elapsed = temporal::days_elapsed(record.initial_date, now);
    let base_score = adjustment::base_score(record, config.max_score);
    let decay_factor = temporal::decay_factor(days_elapsed, config.half_life_days);
    let current_score = base_score * decay_factor;

    DecayBreakdown {
        days_elapsed,
        adjustments: record.total_adjustment(),
        base_score,
        decay_factor,
        current_score,
        ribbon_width: display::ribbon_width(
            current_score,
            config.max_score,
            config.min_display_width,
        ),
        decay_percentage: display::decay_percentage(base_score, current_score),
    }
}
