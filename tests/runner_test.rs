//! Library-level tests for the runner and configuration loading.

mod common;

use color_adjust::{ColorValue, Operation};
use common::fixtures::{colors, BROKEN_CONFIG, HSV_CONFIG};
use hueshift::error::{CliError, ConfigError};
use hueshift::models::AppConfig;
use hueshift::services::{run_operation, ColorArgs};
use pretty_assertions::assert_eq;

fn args(color: &str) -> ColorArgs {
    ColorArgs {
        color: color.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_config_file_drives_runner() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hueshift.yaml");
    std::fs::write(&path, HSV_CONFIG).unwrap();

    let config = AppConfig::load(Some(&path)).unwrap();
    assert_eq!(config.percent, 50);

    let outcome = run_operation(Operation::Lighten, &args(colors::BLACK), &config).unwrap();
    assert_eq!(outcome.result, ColorValue::Triple([0, 0, 50]));
}

#[test]
fn test_broken_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, BROKEN_CONFIG).unwrap();

    let err = AppConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_every_operation_reports_its_input() {
    let config = AppConfig::default();
    for operation in Operation::ALL {
        let outcome = run_operation(operation, &args(colors::SLATE_BLUE), &config).unwrap();
        assert_eq!(outcome.operation, operation);
        assert!(
            outcome.message().starts_with("#6a5acd is now #"),
            "{operation}: {}",
            outcome.message()
        );
    }
}

#[test]
fn test_lighten_then_darken_returns_near_start() {
    let config = AppConfig::default();
    let lighter = run_operation(Operation::Lighten, &args("#404040"), &config).unwrap();
    assert_eq!(lighter.result.to_string(), "#808080");

    let back = run_operation(Operation::Darken, &args("#808080"), &config).unwrap();
    assert_eq!(back.result.to_string(), "#404040");
}

#[test]
fn test_rgb16_round_trip_through_runner() {
    let color_args = ColorArgs {
        color: "65535 0 0".to_string(),
        input: Some("rgb16".to_string()),
        output: Some("RGB16".to_string()),
        ..Default::default()
    };
    let outcome = run_operation(Operation::Invert, &color_args, &AppConfig::default()).unwrap();
    assert_eq!(outcome.result, ColorValue::Triple([0, 65535, 65535]));
}

#[test]
fn test_errors_keep_their_adjust_message() {
    let err = run_operation(Operation::Lighten, &args("#1234"), &AppConfig::default()).unwrap_err();
    assert!(matches!(err, CliError::Adjust(_)));
    assert_eq!(
        err.to_string(),
        "HEX values must be 6 characters long, got 4 in \"1234\""
    );
}
