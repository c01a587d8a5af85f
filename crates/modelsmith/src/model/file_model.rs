//! Per-file conversion output
//!
//! A lighter alternative to the full model: one JSON document per diagram
//! file with classes, methods and enums exactly as declared.

use serde::Serialize;

use crate::plugins::class::{Class, EnumDecl};

/// Raw contents of one diagram file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileModel {
    pub classes: Vec<Class>,
    pub enums: Vec<EnumDecl>,
    /// File stem the model was read from
    pub project: String,
}

impl FileModel {
    pub fn new(project: impl Into<String>, classes: Vec<Class>, enums: Vec<EnumDecl>) -> Self {
        Self {
            classes,
            enums,
            project: project.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::class::Attribute;

    #[test]
    fn test_field_order() {
        let mut class = Class::new("Barang");
        class.add_attribute(Attribute::new("barangID", "Integer"));
        let model = FileModel::new("class_barang", vec![class], vec![]);

        let json = serde_json::to_string(&model).unwrap();
        assert!(json.starts_with(r#"{"classes":[{"name":"Barang""#));
        assert!(json.ends_with(r#""enums":[],"project":"class_barang"}"#));
        // raw declared type, no ID forcing
        assert!(json.contains(r#""type":"Integer""#));
    }
}
