use chrono::{Duration, NaiveTime};
use judging_schedule::{ConfigError, ConfigFile, SourceConfig, load_config};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn expect_invalid(result: Result<judging_schedule::Config, ConfigError>, needle: &str) {
    match result {
        Ok(_) => panic!("expected config to be rejected ({needle})"),
        Err(ConfigError::Invalid(msg)) => {
            assert!(msg.contains(needle), "unexpected message: {msg}")
        }
        Err(other) => panic!("expected Invalid error, got {other:?}"),
    }
}

#[test]
fn defaults_validate_and_match_original_constants() {
    let config = ConfigFile::default().into_config().unwrap();
    assert_eq!(config.judging_groups, 4);
    assert_eq!(config.session, Duration::minutes(10));
    assert_eq!(config.break_between, Duration::minutes(5));
    assert_eq!(config.start_time, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
    assert_eq!(config.end_time, NaiveTime::from_hms_opt(16, 0, 0).unwrap());
    assert_eq!(config.name_column, 2);
    assert_eq!(config.link_column, 1);
    assert_eq!(config.output_path, PathBuf::from("judging_assignments.csv"));
}

#[test]
fn zero_groups_rejected() {
    let mut file = ConfigFile::default();
    file.judging_groups = 0;
    expect_invalid(file.into_config(), "judging_groups");
}

#[test]
fn non_positive_session_rejected() {
    let mut file = ConfigFile::default();
    file.session_minutes = 0;
    expect_invalid(file.into_config(), "session_minutes");
}

#[test]
fn negative_break_rejected() {
    let mut file = ConfigFile::default();
    file.break_minutes = -5;
    expect_invalid(file.into_config(), "break_minutes");
}

#[test]
fn unparsable_time_rejected() {
    let mut file = ConfigFile::default();
    file.start_time = "25:99".to_string();
    expect_invalid(file.into_config(), "invalid time");
}

#[test]
fn start_after_end_rejected() {
    let mut file = ConfigFile::default();
    file.start_time = "16:00".to_string();
    file.end_time = "13:00".to_string();
    expect_invalid(file.into_config(), "before end_time");
}

#[test]
fn equal_column_indices_rejected() {
    let mut file = ConfigFile::default();
    file.name_column = 1;
    expect_invalid(file.into_config(), "must differ");
}

#[test]
fn load_config_reads_sheets_source() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "judging_groups": 6,
            "session_minutes": 8,
            "break_minutes": 2,
            "start_time": "09:30",
            "end_time": "12:00",
            "output_path": "out/schedule.csv",
            "source": {{
                "kind": "sheets",
                "sheet_id": "1jJMJdrKYDSat91D381fN4nYihXOrAC2UCxp51O5mbwk",
                "credentials_path": "token.txt"
            }}
        }}"#
    )
    .unwrap();
    file.flush().unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.judging_groups, 6);
    assert_eq!(config.session, Duration::minutes(8));
    assert_eq!(config.start_time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    match &config.source {
        SourceConfig::Sheets { sheet_id, credentials_path } => {
            assert_eq!(sheet_id, "1jJMJdrKYDSat91D381fN4nYihXOrAC2UCxp51O5mbwk");
            assert_eq!(credentials_path, &PathBuf::from("token.txt"));
        }
        other => panic!("expected sheets source, got {other:?}"),
    }
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"judging_groups": 2}}"#).unwrap();
    file.flush().unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.judging_groups, 2);
    assert_eq!(config.session, Duration::minutes(10));
    assert_eq!(config.end_time, NaiveTime::from_hms_opt(16, 0, 0).unwrap());
}

#[test]
fn missing_file_is_io_error() {
    match load_config("/nonexistent/config.json") {
        Err(ConfigError::Io(_)) => {}
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{not json").unwrap();
    file.flush().unwrap();

    match load_config(file.path()) {
        Err(ConfigError::Parse(_)) => {}
        other => panic!("expected Parse error, got {other:?}"),
    }
}
