//! Diagram parsers and the pipeline that combines them
//!
//! Each diagram kind gets its own plugin implementing the core traits. The
//! orchestrator classifies files and routes them to the right plugin.

pub mod class;
pub mod orchestrator;
pub mod state;

pub use class::*;
pub use orchestrator::*;
pub use state::*;
