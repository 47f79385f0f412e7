use lapse_core::errors::*;

#[test]
fn invalid_half_life_carries_value() {
    let err = ConfigError::InvalidHalfLife { value: -3.0 };
    assert!(err.to_string().contains("-3"));
}

#[test]
fn invalid_date_carries_id_and_value() {
    let err = LoadError::InvalidDate {
        id: "inception".into(),
        value: "2024-13-40".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("inception"));
    assert!(msg.contains("2024-13-40"));
}

#[test]
fn missing_field_names_the_field() {
    let err = LoadError::MissingField {
        id: "elden-ring".into(),
        field: "initialScore".into(),
    };
    assert!(err.to_string().contains("initialScore"));
}

// --- From impls ---

#[test]
fn config_error_converts_to_lapse_error() {
    let err: LapseError = ConfigError::InvalidMaxScore { value: 0.0 }.into();
    assert!(matches!(err, LapseError::ConfigError(_)));
}

#[test]
fn load_error_converts_to_lapse_error() {
    let err: LapseError = LoadError::ReviewsDirMissing {
        path: "/nowhere".into(),
    }
    .into();
    assert!(matches!(err, LapseError::LoadError(_)));
    assert!(err.to_string().contains("/nowhere"));
}

#[test]
fn question_mark_propagates_subsystem_errors() {
    fn load() -> LapseResult<()> {
        Err::<(), _>(LoadError::MissingFrontmatter { id: "x".into() })?;
        Ok(())
    }
    assert!(matches!(load(), Err(LapseError::LoadError(_))));
}
