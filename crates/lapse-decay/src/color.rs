use lapse_core::models::ColorToken;

/// Map a score to its display bucket by inclusive lower thresholds:
/// `[8,∞)` excellent, `[6,8)` good, `[4,6)` average, `[2,4)` below average,
/// anything else (NaN included) poor.
pub fn color_for(score: f64) -> ColorToken {
    ColorToken::ALL
        .into_iter()
        .find(|token| token.lower_bound().is_some_and(|bound| score >= bound))
        .unwrap_or(ColorToken::Poor)
}
