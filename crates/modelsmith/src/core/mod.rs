//! Core abstractions for model conversion
//!
//! This module defines the traits every diagram parser implements, together
//! with the shared error, diagnostic, configuration and logging types.

pub mod config;
mod database;
mod diagnostics;
mod error;
pub mod logging;
mod parser;

pub use config::*;
pub use database::*;
pub use diagnostics::*;
pub use error::*;
pub use logging::*;
pub use parser::*;
