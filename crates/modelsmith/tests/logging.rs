//! Tests for logging functionality
//!
//! A global subscriber can only be installed once per process, so these
//! tests only check that initialization never panics and that bad formats
//! are rejected before installation.

use modelsmith::core::logging::{init_default_logging, init_logging, LogFormat};
use std::str::FromStr;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert_eq!(LogFormat::from_str("JSON").unwrap(), LogFormat::Json);
    assert!(LogFormat::from_str("xml").is_err());
}

#[test]
fn test_log_format_variants() {
    let variants = LogFormat::variants();
    assert_eq!(variants, &["compact", "pretty", "json"]);
}

#[test]
fn test_init_logging_with_levels() {
    let _ = init_logging(Some("trace"), Some("compact"));
    let _ = init_logging(Some("debug"), Some("json"));
    let _ = init_logging(Some("warn"), Some("pretty"));
    let _ = init_logging(Some("off"), None);
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
}

#[test]
fn test_init_default_logging() {
    let _ = init_default_logging();
}

#[test]
fn test_directive_filters_accepted() {
    let _ = init_logging(Some("info,modelsmith::plugins::class=trace"), Some("compact"));
}

#[test]
fn test_pipeline_runs_with_logging_enabled() {
    let _ = init_logging(Some("trace"), Some("compact"));
    let db = modelsmith::parse_statechart("[*] --> Baru").unwrap();
    assert_eq!(db.states(), vec!["Baru"]);
}
