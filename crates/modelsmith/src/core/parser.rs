//! Core parser trait for diagram text
//!
//! This trait defines the interface for extracting structured data from
//! diagram text into a database.

use anyhow::Result;

use super::Database;

/// Core trait for diagram parsers
///
/// # Example
/// ```
/// use modelsmith::core::{Database, Parser};
/// use modelsmith::plugins::state::{StateDatabase, StateParser};
///
/// let parser = StateParser::new();
/// let mut db = StateDatabase::new();
/// parser.parse("Idle --> Running : start", &mut db).unwrap();
/// assert_eq!(db.record_count(), 1);
/// ```
pub trait Parser<D: Database>: Send + Sync {
    /// Parse diagram text into the provided database
    ///
    /// Malformed constructs are dropped and recorded as diagnostics in the
    /// database; an `Err` is reserved for failures of the parser itself.
    fn parse(&self, input: &str, database: &mut D) -> Result<()>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;

    /// Check if the input contains anything this parser extracts
    fn can_parse(&self, input: &str) -> bool;
}
