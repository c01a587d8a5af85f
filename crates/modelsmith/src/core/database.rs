//! Core database trait for parsed diagram data
//!
//! Each parser fills its own database type with the records it extracts
//! from one diagram file. Databases also carry the diagnostics produced
//! while parsing so the two never drift apart.

use anyhow::Result;

use super::Diagnostics;

/// Core trait for diagram databases
///
/// The associated record type is the primary construct a database stores
/// (classes for class diagrams, transitions for state diagrams).
pub trait Database: Send + Sync {
    /// The primary record type of this database
    type Record: Clone + Send + Sync;

    /// Add a record to the database
    fn add_record(&mut self, record: Self::Record) -> Result<()>;

    /// Iterate over all records in insertion order
    fn records(&self) -> impl Iterator<Item = &Self::Record>;

    /// Get the number of records
    fn record_count(&self) -> usize;

    /// Diagnostics recorded while filling this database
    fn diagnostics(&self) -> &Diagnostics;

    /// Mutable access for parsers recording diagnostics
    fn diagnostics_mut(&mut self) -> &mut Diagnostics;

    /// Clear all data from the database
    fn clear(&mut self);
}
