/// Round half up (toward +∞), so `-2.5` becomes `-2` and `2.5` becomes `3`.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round half up to one decimal place.
pub fn round1(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Current score as a percentage of `max_score`, floored at `min_width`.
pub fn ribbon_width(current_score: f64, max_score: f64, min_width: f64) -> f64 {
    (current_score / max_score * 100.0).max(min_width)
}

/// Percentage of the base score lost to decay.
///
/// A zero base has nothing to lose, so it reports 0 instead of dividing
/// by zero. Negative bases use the same ratio as positive ones.
pub fn decay_percentage(base_score: f64, current_score: f64) -> f64 {
    if base_score == 0.0 {
        return 0.0;
    }
    (base_score - current_score) / base_score * 100.0
}

/// Whole percent for display. Non-finite input maps to 0.
pub fn whole_percent(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    round_half_up(value) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_round_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(7.5), 8.0);
        assert_eq!(round1(0.75), 0.8);
        assert_eq!(round1(-0.75), -0.7);
    }

    #[test]
    fn zero_base_percentage_falls_back_to_zero() {
        assert_eq!(decay_percentage(0.0, 0.0), 0.0);
        assert_eq!(whole_percent(f64::NAN), 0);
        assert_eq!(whole_percent(f64::INFINITY), 0);
    }

    #[test]
    fn ribbon_floors_at_min_width() {
        assert_eq!(ribbon_width(0.1, 10.0, 5.0), 5.0);
        assert_eq!(ribbon_width(-4.0, 10.0, 5.0), 5.0);
        assert_eq!(ribbon_width(4.0, 10.0, 5.0), 40.0);
    }
}
