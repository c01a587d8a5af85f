//! Core error types for model conversion
//!
//! This module defines the failures that abort a conversion run. Malformed
//! diagram lines are not errors; they are collected as diagnostics instead.

use std::path::PathBuf;
use thiserror::Error;

/// Core error types for model conversion
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Input directory not found: {}", path.display())]
    InputDirMissing { path: PathBuf },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },

    #[error("Config error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Strict mode: {count} diagnostic(s) reported")]
    StrictMode { count: usize },
}

impl ModelError {
    /// Create a new IO error bound to the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new config error
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new strict mode error
    pub fn strict_mode(count: usize) -> Self {
        Self::StrictMode { count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_dir_missing() {
        let error = ModelError::InputDirMissing {
            path: PathBuf::from("diagrams"),
        };
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Input directory not found"));
        assert!(error_msg.contains("diagrams"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error = ModelError::io("diagrams/class_a.puml", io_err);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("class_a.puml"));
        assert!(error_msg.contains("denied"));
    }

    #[test]
    fn test_config_error() {
        let error = ModelError::config("model.json", "expected a map");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Config error"));
        assert!(error_msg.contains("model.json"));
        assert!(error_msg.contains("expected a map"));
    }

    #[test]
    fn test_strict_mode_error() {
        let error = ModelError::strict_mode(3);
        assert_eq!(format!("{}", error), "Strict mode: 3 diagnostic(s) reported");
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let error: ModelError = serde_err.into();
        assert!(format!("{}", error).contains("Serialization error"));
    }
}
