//! Tests for failures that abort a conversion run

use modelsmith::source::read_sources;
use modelsmith::{build, ConversionConfig, ModelError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_input_directory() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("diagrams");

    let err = read_sources(&missing, &ConversionConfig::default()).unwrap_err();
    let error_msg = format!("{}", err);
    assert!(error_msg.contains("Input directory not found"));
    assert!(error_msg.contains("diagrams"));

    let err = build(&missing).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ModelError>(),
        Some(ModelError::InputDirMissing { .. })
    ));
}

#[test]
fn test_input_path_is_a_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("diagrams.puml");
    fs::write(&file, "class A {\n}").unwrap();

    assert!(matches!(
        read_sources(&file, &ConversionConfig::default()),
        Err(ModelError::InputDirMissing { .. })
    ));
}

#[test]
fn test_config_file_missing() {
    let dir = tempdir().unwrap();
    let err = ConversionConfig::from_json_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ModelError::Io { .. }));
    assert!(format!("{}", err).contains("nope.json"));
}

#[test]
fn test_config_file_invalid() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"domain_rules": "not a list"}"#).unwrap();

    let err = ConversionConfig::from_json_file(&path).unwrap_err();
    let error_msg = format!("{}", err);
    assert!(matches!(err, ModelError::Config { .. }));
    assert!(error_msg.contains("Config error"));
    assert!(error_msg.contains("config.json"));
}

#[test]
fn test_strict_mode_message() {
    let error = ModelError::strict_mode(3);
    assert_eq!(format!("{}", error), "Strict mode: 3 diagnostic(s) reported");
}

#[test]
fn test_serialize_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: ModelError = json_err.into();
    assert!(format!("{}", error).contains("Serialization error"));
}

#[test]
fn test_error_through_anyhow() {
    let error: anyhow::Error = ModelError::strict_mode(1).into();
    assert!(error.downcast_ref::<ModelError>().is_some());
}
