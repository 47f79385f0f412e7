use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

/// Whole days from midnight UTC of `initial_date` to `now`, floored.
///
/// Negative when `now` precedes the date.
pub fn days_elapsed(initial_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let start = initial_date.and_time(NaiveTime::MIN).and_utc();
    let delta = now - start;
    let days = delta.num_days(); // truncates toward zero
    if delta < TimeDelta::days(days) {
        days - 1
    } else {
        days
    }
}

/// Half-life decay factor: `0.5^(days / halfLife)`.
///
/// 1.0 at day zero, 0.5 after one half-life, tending to 0.0.
pub fn decay_factor(days_elapsed: i64, half_life_days: f64) -> f64 {
    0.5_f64.powf(days_elapsed as f64 / half_life_days)
}
