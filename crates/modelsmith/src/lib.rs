//! Modelsmith - Convert PlantUML-style diagrams into a JSON domain model
//!
//! Reads a directory of class and state diagrams and produces one
//! normalized document: domains, enumerations, classes with resolved
//! attribute types, and statecharts.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let output = modelsmith::build(Path::new("diagrams")).unwrap();
//! println!("{}", output.document.to_json_pretty().unwrap());
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use modelsmith::prelude::*;
//!
//! let input = "class Barang {\n  -barangID : Integer\n  -nama : String\n}";
//!
//! // Parse into a database
//! let parser = ClassParser::new();
//! let mut database = ClassDatabase::new();
//! parser.parse(input, &mut database).unwrap();
//!
//! // Access the parsed data
//! assert_eq!(database.class_count(), 1);
//! assert_eq!(database.classes()[0].attributes[1].raw_type, "String");
//! ```

pub mod core;
pub mod model;
pub mod plugins;
pub mod source;

pub use core::*;

use std::path::Path;

use crate::plugins::orchestrator::{BuildOutput, Orchestrator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        ConversionConfig, Database, Diagnostic, DiagnosticKind, Diagnostics, ModelError, Parser,
    };
    pub use crate::model::{Document, FileModel};
    pub use crate::plugins::class::{ClassDatabase, ClassParser};
    pub use crate::plugins::orchestrator::{BuildOutput, Orchestrator};
    pub use crate::plugins::state::{StateDatabase, StateParser, Transition};
    pub use crate::source::{read_sources, write_json, SourceFile};
}

/// Build the domain model from every diagram in `dir` using the built-in tables
///
/// # Example
/// ```rust,no_run
/// use std::path::Path;
///
/// let output = modelsmith::build(Path::new("diagrams")).unwrap();
/// assert!(output.diagnostics.is_empty());
/// ```
pub fn build(dir: &Path) -> anyhow::Result<BuildOutput> {
    build_with_config(dir, &ConversionConfig::default())
}

/// Build the domain model with an explicit configuration
pub fn build_with_config(dir: &Path, config: &ConversionConfig) -> anyhow::Result<BuildOutput> {
    let sources = source::read_sources(dir, config)?;
    Orchestrator::with_config(config.clone()).build(&sources)
}

/// Fail with [`ModelError::StrictMode`] when any diagnostic was reported
pub fn ensure_clean(diagnostics: &Diagnostics) -> Result<(), ModelError> {
    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(ModelError::strict_mode(diagnostics.len()))
    }
}

/// Parse class diagram text into a database
///
/// # Example
/// ```rust
/// let db = modelsmith::parse_classes("enum Warna {\n  Merah\n  Biru\n}").unwrap();
/// assert_eq!(db.enums()[0].values, vec!["Merah", "Biru"]);
/// ```
pub fn parse_classes(input: &str) -> anyhow::Result<plugins::class::ClassDatabase> {
    use crate::plugins::class::{ClassDatabase, ClassParser};

    let parser = ClassParser::new();
    let mut database = ClassDatabase::new();
    parser.parse(input, &mut database)?;
    Ok(database)
}

/// Parse state diagram text into a database
///
/// # Example
/// ```rust
/// let db = modelsmith::parse_statechart("[*] --> Baru\nBaru --> Selesai : tutup").unwrap();
/// assert_eq!(db.states(), vec!["Baru", "Selesai"]);
/// assert_eq!(db.initial_state().as_deref(), Some("[*]"));
/// ```
pub fn parse_statechart(input: &str) -> anyhow::Result<plugins::state::StateDatabase> {
    use crate::plugins::state::{StateDatabase, StateParser};

    let parser = StateParser::new();
    let mut database = StateDatabase::new();
    parser.parse(input, &mut database)?;
    Ok(database)
}
