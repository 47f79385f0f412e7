use chrono::Utc;
use lapse_core::config::ObservabilityConfig;
use lapse_observability::{events, init_from_config, init_tracing_with_filter};

#[test]
fn repeated_init_does_not_panic() {
    init_tracing_with_filter("debug");
    init_from_config(&ObservabilityConfig {
        log_level: "warn".into(),
        json: false,
    });
    lapse_observability::init_tracing();
}

#[test]
fn events_emit_without_subscriber_errors() {
    init_tracing_with_filter("trace");
    events::review_loaded("inception", 2);
    events::review_skipped("broken.md", "missing frontmatter");
    events::history_line_skipped("inception", "2024-02-30 | +1", "invalid date");
    events::reviews_loaded(5, 1);
    events::batch_scored(5, Utc::now());
}
