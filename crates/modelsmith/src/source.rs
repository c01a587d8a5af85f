//! Reading diagram files and writing documents
//!
//! Thin filesystem helpers around the pipeline. Files are always returned
//! sorted by name so that every run sees the same order.

use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::{ConversionConfig, ModelError};

/// One diagram file read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name without directory
    pub file_name: String,
    pub content: String,
}

impl SourceFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// File name without its extension
    pub fn stem(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.file_name)
    }
}

/// Read every file of `dir` with the configured extension, sorted by file name
pub fn read_sources(dir: &Path, config: &ConversionConfig) -> Result<Vec<SourceFile>, ModelError> {
    if !dir.is_dir() {
        return Err(ModelError::InputDirMissing {
            path: dir.to_path_buf(),
        });
    }

    let mut sources = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| ModelError::io(dir, e))? {
        let entry = entry.map_err(|e| ModelError::io(dir, e))?;
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().into_owned();

        if !path.is_file() || !config.matches_extension(&file_name) {
            continue;
        }

        let content = fs::read_to_string(&path).map_err(|e| ModelError::io(&path, e))?;
        debug!(file = %file_name, bytes = content.len(), "Read diagram file");
        sources.push(SourceFile::new(file_name, content));
    }

    sources.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(sources)
}

/// Write `value` as indented JSON, creating missing parent directories
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ModelError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ModelError::io(parent, e))?;
    }

    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text).map_err(|e| ModelError::io(path, e))?;
    debug!(path = %path.display(), "Wrote JSON document");
    Ok(())
}
