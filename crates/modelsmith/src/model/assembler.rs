//! Class assembly
//!
//! Resolves every parsed attribute against the enum registry and produces
//! the document's class records.

use indexmap::IndexMap;
use tracing::trace;

use super::document::{AttributeEntry, ClassEntry};
use super::normalize::{is_identifier, normalize_attribute, ENUMERATED_TYPE, ID_TYPE};
use super::registry::EnumRegistry;
use crate::plugins::class::{Attribute, Class};

/// Resolves attribute types using read-only lookup tables
#[derive(Debug, Clone, Copy)]
pub struct ClassAssembler<'a> {
    registry: &'a EnumRegistry,
    attribute_enums: &'a IndexMap<String, String>,
}

impl<'a> ClassAssembler<'a> {
    pub fn new(registry: &'a EnumRegistry, attribute_enums: &'a IndexMap<String, String>) -> Self {
        Self {
            registry,
            attribute_enums,
        }
    }

    /// Enumeration an attribute refers to, if any
    ///
    /// The attribute-name table is consulted first, then the normalized
    /// type itself. Either only counts when the enum is registered.
    fn enum_for(&self, name: &str, normalized: &str) -> Option<&'a str> {
        let registry = self.registry;
        let attribute_enums = self.attribute_enums;

        attribute_enums
            .get(name)
            .filter(|enum_name| registry.contains(enum_name))
            .map(String::as_str)
            .or_else(|| registry.get_name(normalized))
    }

    /// Resolve one attribute
    pub fn resolve_attribute(&self, attribute: &Attribute) -> AttributeEntry {
        if is_identifier(&attribute.name) {
            return AttributeEntry {
                name: attribute.name.clone(),
                attr_type: ID_TYPE.to_string(),
                enum_ref: None,
            };
        }

        let normalized = normalize_attribute(&attribute.name, &attribute.raw_type);
        match self.enum_for(&attribute.name, normalized) {
            Some(enum_name) => {
                trace!(attribute = %attribute.name, enum_name, "Resolved enumerated attribute");
                AttributeEntry {
                    name: attribute.name.clone(),
                    attr_type: ENUMERATED_TYPE.to_string(),
                    enum_ref: Some(enum_name.to_string()),
                }
            }
            None => AttributeEntry {
                name: attribute.name.clone(),
                attr_type: normalized.to_string(),
                enum_ref: None,
            },
        }
    }

    /// Build the class record for a class in `domain`
    pub fn assemble(&self, domain: &str, class: &Class) -> ClassEntry {
        ClassEntry {
            domain_ref: domain.to_string(),
            class_name: class.name.clone(),
            attributes: class
                .attributes
                .iter()
                .map(|a| self.resolve_attribute(a))
                .collect(),
        }
    }
}
