//! State diagram plugin
//!
//! Extracts state transitions from PlantUML-style state diagram text.
//!
//! Syntax examples:
//! ```text
//! @startuml
//! [*] --> Dilaporkan
//! Dilaporkan --> Diverifikasi : verifikasi
//! Diverifikasi --> Selesai : diambil
//! Selesai --> [*]
//! @enduml
//! ```

mod database;
mod parser;

pub use database::{StateDatabase, Transition};
pub use parser::{StateParser, Statement};

/// Pseudostate marker for diagram start and end points
pub const PSEUDOSTATE: &str = "[*]";
