//! Class diagram plugin
//!
//! Extracts classes, their attributes and methods, and explicit
//! enumerations from PlantUML-style class diagram text.
//!
//! ```text
//! class Barang {
//!     -barangID : Integer
//!     -statusBarang : StatusBarang
//!     +tandaiDitemukan(lokasi : String) : Boolean
//! }
//!
//! enum Kategori {
//!     Elektronik
//!     Dokumen
//! }
//! ```

mod chumsky_parser;
mod database;
mod parser;

pub use chumsky_parser::{split_parameters, ChumskyMemberParser, ParsedMethod};
pub use database::{Attribute, Class, ClassDatabase, EnumDecl, Method, Parameter};
pub use parser::ClassParser;
