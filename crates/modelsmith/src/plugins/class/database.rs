//! Class diagram database
//!
//! Stores the classes and enumerations declared in one diagram file, with
//! attribute types kept exactly as written.

use anyhow::Result;
use serde::Serialize;

use crate::core::{Database, Diagnostics};

/// An attribute line `-name : type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type")]
    pub raw_type: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
        }
    }
}

/// A method parameter `name : type`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, param_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
        }
    }
}

/// A method line `+name(params) : returnType`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: String,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: "void".to_string(),
        }
    }

    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = return_type.into();
        self
    }
}

/// A class block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Class {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub methods: Vec<Method>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }
}

/// An enum block; values keep source order and duplicates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDecl {
    pub name: String,
    pub values: Vec<String>,
}

impl EnumDecl {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Class diagram database
#[derive(Debug, Default)]
pub struct ClassDatabase {
    classes: Vec<Class>,
    enums: Vec<EnumDecl>,
    diagnostics: Diagnostics,
}

impl ClassDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: Class) -> Result<()> {
        self.classes.push(class);
        Ok(())
    }

    pub fn add_enum(&mut self, decl: EnumDecl) -> Result<()> {
        self.enums.push(decl);
        Ok(())
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    pub fn enums(&self) -> &[EnumDecl] {
        &self.enums
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn enum_count(&self) -> usize {
        self.enums.len()
    }

    pub fn get_class(&self, name: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn get_enum(&self, name: &str) -> Option<&EnumDecl> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Split into classes, enums and diagnostics
    pub fn into_parts(self) -> (Vec<Class>, Vec<EnumDecl>, Diagnostics) {
        (self.classes, self.enums, self.diagnostics)
    }
}

impl Database for ClassDatabase {
    type Record = Class;

    fn add_record(&mut self, record: Self::Record) -> Result<()> {
        self.add_class(record)
    }

    fn records(&self) -> impl Iterator<Item = &Self::Record> {
        self.classes.iter()
    }

    fn record_count(&self) -> usize {
        self.classes.len()
    }

    fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    fn clear(&mut self) {
        self.classes.clear();
        self.enums.clear();
        self.diagnostics.clear();
    }
}
