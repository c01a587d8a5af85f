//! Domain model assembly
//!
//! Everything between parsed diagram databases and the final document:
//! type normalization, domain resolution, the enum registry, class
//! assembly, and the document itself.

pub mod assembler;
pub mod document;
pub mod domain;
pub mod file_model;
pub mod normalize;
pub mod registry;

pub use assembler::ClassAssembler;
pub use document::{
    AttributeEntry, ClassEntry, Document, DocumentBuilder, DomainEntry, EnumerationEntry,
    StatechartEntry,
};
pub use domain::{statechart_name, DomainResolver, FileClassifier, FileRole};
pub use file_model::FileModel;
pub use registry::{EnumRegistry, Provenance};
