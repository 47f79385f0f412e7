use std::sync::LazyLock;

use chrono::NaiveDate;
use lapse_core::constants::HISTORY_HEADING;
use lapse_core::review::AdjustmentEvent;
use regex::Regex;

static HISTORY_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2})\s*\|\s*([+-]?[0-9]+)").ok());

/// Adjustments parsed from a `## History` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    /// Events in file order.
    pub events: Vec<AdjustmentEvent>,
    /// Lines shaped like an adjustment that could not be used.
    pub skipped: Vec<SkippedLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: String,
    pub reason: String,
}

/// Parse the adjustment lines after the first `## History` heading.
///
/// The section runs to the end of the file or to a repeated heading.
/// Lines not shaped like `YYYY-MM-DD | ±N` are prose and ignored; shaped
/// lines with an impossible date or a delta outside `i32` are reported in
/// [`History::skipped`]. A file without the heading has an empty history.
pub fn parse_history(content: &str) -> History {
    let mut history = History::default();
    let Some(re) = HISTORY_LINE.as_ref() else {
        return history;
    };
    let Some(section) = content.split(HISTORY_HEADING).nth(1) else {
        return history;
    };

    for line in section.lines().map(str::trim) {
        let Some(caps) = re.captures(line) else {
            continue;
        };
        let date = match NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d") {
            Ok(date) => date,
            Err(e) => {
                history.skipped.push(SkippedLine {
                    line: line.to_string(),
                    reason: format!("invalid date: {e}"),
                });
                continue;
            }
        };
        let change = match caps[2].parse::<i32>() {
            Ok(change) => change,
            Err(e) => {
                history.skipped.push(SkippedLine {
                    line: line.to_string(),
                    reason: format!("invalid change: {e}"),
                });
                continue;
            }
        };
        history.events.push(AdjustmentEvent::new(date, change));
    }

    history
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn no_heading_means_empty_history() {
        let history = parse_history("---\ninitialScore: 5\n---\nJust prose.\n");
        assert!(history.events.is_empty());
        assert!(history.skipped.is_empty());
    }

    #[test]
    fn parses_signed_and_unsigned_changes_in_order() {
        let content = "## History\n2024-03-01 | +1\n  2024-04-01|-2  \n2024-05-01 | 3 (rewatch)\n";
        let history = parse_history(content);
        assert_eq!(
            history.events,
            vec![
                AdjustmentEvent::new(date("2024-03-01"), 1),
                AdjustmentEvent::new(date("2024-04-01"), -2),
                AdjustmentEvent::new(date("2024-05-01"), 3),
            ]
        );
    }

    #[test]
    fn prose_lines_are_ignored_silently() {
        let content = "## History\nFormat: date | change\n- 2024-03-01 | +1\n2024-03-02 | +1\n";
        let history = parse_history(content);
        assert_eq!(history.events.len(), 1);
        assert!(history.skipped.is_empty());
    }

    #[test]
    fn impossible_dates_are_skipped_and_reported() {
        let history = parse_history("## History\n2024-02-30 | +1\n2024-03-01 | -1\n");
        assert_eq!(history.events, vec![AdjustmentEvent::new(date("2024-03-01"), -1)]);
        assert_eq!(history.skipped.len(), 1);
        assert_eq!(history.skipped[0].line, "2024-02-30 | +1");
    }

    #[test]
    fn overflowing_change_is_skipped() {
        let history = parse_history("## History\n2024-03-01 | +99999999999\n");
        assert!(history.events.is_empty());
        assert_eq!(history.skipped.len(), 1);
    }

    #[test]
    fn section_stops_at_repeated_heading() {
        let content = "## History\n2024-03-01 | +1\n## History\n2024-04-01 | +1\n";
        assert_eq!(parse_history(content).events.len(), 1);
    }
}
