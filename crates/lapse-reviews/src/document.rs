use chrono::NaiveDate;
use lapse_core::errors::LoadError;
use lapse_core::review::{ReviewMetadata, ReviewRecord};
use lapse_observability::events;

use crate::frontmatter::parse_frontmatter;
use crate::history::parse_history;

const INITIAL_SCORE: &str = "initialScore";
const INITIAL_DATE: &str = "initialDate";
const TITLE: &str = "title";
const CATEGORY: &str = "category";
const TAGS: &str = "tags";

/// Parse one markdown review file into a validated record.
///
/// `id` is supplied by the caller (the file stem) and overrides any `id`
/// key in the frontmatter, which is kept in `metadata.extra` instead.
pub fn parse_review(id: &str, content: &str) -> Result<ReviewRecord, LoadError> {
    let fields = parse_frontmatter(content)
        .ok_or_else(|| LoadError::MissingFrontmatter { id: id.to_string() })?
        .into_fields();

    let initial_score = parse_score(id, required(id, &fields, INITIAL_SCORE)?)?;
    let initial_date = parse_date(id, required(id, &fields, INITIAL_DATE)?)?;

    let history = parse_history(content);
    for skipped in &history.skipped {
        events::history_line_skipped(id, &skipped.line, &skipped.reason);
    }

    let mut metadata = ReviewMetadata::default();
    for (key, value) in fields {
        match key.as_str() {
            INITIAL_SCORE | INITIAL_DATE => {}
            TITLE => metadata.title = Some(value),
            CATEGORY => metadata.category = Some(value),
            TAGS => {
                metadata.tags = value
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect();
            }
            _ => {
                metadata.extra.insert(key, value);
            }
        }
    }

    Ok(ReviewRecord {
        id: id.to_string(),
        initial_score,
        initial_date,
        history: history.events,
        metadata,
    })
}

fn required<'a>(
    id: &str,
    fields: &'a std::collections::BTreeMap<String, String>,
    key: &str,
) -> Result<&'a str, LoadError> {
    fields
        .get(key)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| LoadError::MissingField {
            id: id.to_string(),
            field: key.to_string(),
        })
}

fn parse_score(id: &str, value: &str) -> Result<f64, LoadError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|score| score.is_finite())
        .ok_or_else(|| LoadError::InvalidScore {
            id: id.to_string(),
            value: value.to_string(),
        })
}

fn parse_date(id: &str, value: &str) -> Result<NaiveDate, LoadError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| LoadError::InvalidDate {
        id: id.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const INCEPTION: &str = "---
title: Inception
category: movie
initialScore: 9
initialDate: 2024-01-15
tags: sci-fi, nolan, , heist
director: Christopher Nolan
---
Dreams within dreams.

## History
2024-03-01 | +1
2024-06-10 | -2
";

    #[test]
    fn parses_full_review() {
        let record = parse_review("inception", INCEPTION).unwrap();
        assert_eq!(record.id, "inception");
        assert_eq!(record.initial_score, 9.0);
        assert_eq!(record.initial_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(record.history.len(), 2);
        assert_eq!(record.total_adjustment(), -1);
        assert_eq!(record.metadata.title.as_deref(), Some("Inception"));
        assert_eq!(record.metadata.category.as_deref(), Some("movie"));
        assert_eq!(record.metadata.tags, vec!["sci-fi", "nolan", "heist"]);
        assert_eq!(
            record.metadata.extra.get("director").map(String::as_str),
            Some("Christopher Nolan")
        );
    }

    #[test]
    fn fractional_score_is_accepted() {
        let record =
            parse_review("r", "---\ninitialScore: 7.5\ninitialDate: 2024-01-01\n---\n").unwrap();
        assert_eq!(record.initial_score, 7.5);
        assert!(record.history.is_empty());
    }

    #[test]
    fn missing_frontmatter_is_rejected() {
        let err = parse_review("bare", "# Just a heading\n").unwrap_err();
        assert_eq!(err, LoadError::MissingFrontmatter { id: "bare".into() });
    }

    #[test]
    fn missing_score_is_rejected() {
        let err = parse_review("r", "---\ninitialDate: 2024-01-01\n---\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingField { field, .. } if field == "initialScore"));
    }

    #[test]
    fn non_numeric_score_is_rejected() {
        for bad in ["great", "NaN", "inf", "8/10"] {
            let content = format!("---\ninitialScore: {bad}\ninitialDate: 2024-01-01\n---\n");
            let err = parse_review("r", &content).unwrap_err();
            assert!(matches!(err, LoadError::InvalidScore { .. }), "{bad} accepted");
        }
    }

    #[test]
    fn malformed_date_is_rejected() {
        let err =
            parse_review("r", "---\ninitialScore: 5\ninitialDate: 15/01/2024\n---\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidDate { value, .. } if value == "15/01/2024"));
    }
}
