//! Test fixture loader for Lapse review files and scoring scenarios.
//!
//! Provides typed deserialization of the scenario JSON files, paths to the
//! markdown review fixtures, and small builders for review records.

use std::path::PathBuf;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use lapse_core::review::{AdjustmentEvent, ReviewRecord};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find fixtures/.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("fixtures").is_dir() {
        if !path.pop() {
            panic!(
                "Could not find fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Read a fixture file as text.
pub fn load_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file or directory.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List fixture files with the given extension in a subdirectory, sorted.
pub fn list_fixtures(subdir: &str, extension: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension()
                .is_some_and(|ext| ext == extension)
                .then_some(path)
        })
        .collect();
    files.sort();
    files
}

// --- Builders ---

/// Fixed reference instant so date arithmetic in tests never straddles midnight.
pub fn reference_now() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|| panic!("reference instant is a valid date"))
}

/// Calendar date `days` before `now`.
pub fn days_ago(now: DateTime<Utc>, days: i64) -> NaiveDate {
    (now - Duration::days(days)).date_naive()
}

/// A review whose initial date is `days` before `now`.
pub fn review(
    id: &str,
    initial_score: f64,
    now: DateTime<Utc>,
    days: i64,
    changes: &[i32],
) -> ReviewRecord {
    let initial_date = days_ago(now, days);
    let history = changes
        .iter()
        .map(|&change| AdjustmentEvent::new(initial_date, change))
        .collect();
    ReviewRecord::new(id, initial_score, initial_date).with_history(history)
}

// --- Scoring scenarios ---

/// One scoring case from `scenarios/decay_scenarios.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct DecayScenario {
    pub name: String,
    pub initial_score: f64,
    pub days_ago: i64,
    #[serde(default)]
    pub changes: Vec<i32>,
    pub expected: ExpectedResult,
}

/// Expected fields of a scenario. `decay_percentage` is only checked when present.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedResult {
    pub days_elapsed: i64,
    pub base_score: f64,
    pub current_score: f64,
    pub ribbon_width: u32,
    pub decay_percentage: Option<i32>,
}

impl DecayScenario {
    pub fn record(&self, now: DateTime<Utc>) -> ReviewRecord {
        review(&self.name, self.initial_score, now, self.days_ago, &self.changes)
    }
}

/// Load every decay scenario.
pub fn decay_scenarios() -> Vec<DecayScenario> {
    load_fixture("scenarios/decay_scenarios.json")
}
