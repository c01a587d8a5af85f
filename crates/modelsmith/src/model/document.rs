//! Output document
//!
//! The single artifact a build produces. Field names and order match the
//! serialized JSON; optional fields are omitted when absent.

use serde::Serialize;

use crate::core::ModelError;
use crate::plugins::state::Transition;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainEntry {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumerationEntry {
    pub name: String,
    pub choices: Vec<String>,
}

/// Attribute with its resolved type
///
/// `enum_ref` is set exactly when `attr_type` is `Enumerated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub attr_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
    pub domain_ref: String,
    pub class_name: String,
    pub attributes: Vec<AttributeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatechartEntry {
    pub name: String,
    pub states: Vec<String>,
    pub transitions: Vec<Transition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_state: Option<String>,
}

/// The normalized domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub model_name: String,
    pub version: String,
    pub domains: Vec<DomainEntry>,
    pub enumerations: Vec<EnumerationEntry>,
    pub classes: Vec<ClassEntry>,
    pub statecharts: Vec<StatechartEntry>,
}

impl Document {
    /// Indented JSON, non-ASCII characters written as-is
    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn domain(&self, name: &str) -> Option<&DomainEntry> {
        self.domains.iter().find(|d| d.name == name)
    }

    pub fn enumeration(&self, name: &str) -> Option<&EnumerationEntry> {
        self.enumerations.iter().find(|e| e.name == name)
    }

    pub fn class(&self, name: &str) -> Option<&ClassEntry> {
        self.classes.iter().find(|c| c.class_name == name)
    }

    pub fn statechart(&self, name: &str) -> Option<&StatechartEntry> {
        self.statecharts.iter().find(|s| s.name == name)
    }
}

/// Accumulates document sections in order
#[derive(Debug)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    pub fn new(model_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            document: Document {
                model_name: model_name.into(),
                version: version.into(),
                domains: Vec::new(),
                enumerations: Vec::new(),
                classes: Vec::new(),
                statecharts: Vec::new(),
            },
        }
    }

    /// Append a domain unless one with the same name is already present
    pub fn add_domain(&mut self, name: &str, description: &str) -> &mut Self {
        if self.document.domain(name).is_none() {
            self.document.domains.push(DomainEntry {
                name: name.to_string(),
                description: description.to_string(),
            });
        }
        self
    }

    pub fn enumerations(&mut self, enumerations: Vec<EnumerationEntry>) -> &mut Self {
        self.document.enumerations = enumerations;
        self
    }

    pub fn add_class(&mut self, class: ClassEntry) -> &mut Self {
        self.document.classes.push(class);
        self
    }

    pub fn add_statechart(&mut self, statechart: StatechartEntry) -> &mut Self {
        self.document.statecharts.push(statechart);
        self
    }

    pub fn build(self) -> Document {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domains_deduplicated_in_first_seen_order() {
        let mut builder = DocumentBuilder::new("M", "1.0");
        builder
            .add_domain("pengelolaanLaporan", "first")
            .add_domain("userManagement", "")
            .add_domain("pengelolaanLaporan", "second");
        let doc = builder.build();

        let names: Vec<_> = doc.domains.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["pengelolaanLaporan", "userManagement"]);
        assert_eq!(doc.domains[0].description, "first");
    }

    #[test]
    fn test_json_shape() {
        let mut builder = DocumentBuilder::new("Model", "1.0");
        builder.add_class(ClassEntry {
            domain_ref: "d".to_string(),
            class_name: "Barang".to_string(),
            attributes: vec![
                AttributeEntry {
                    name: "nama".to_string(),
                    attr_type: "String".to_string(),
                    enum_ref: None,
                },
                AttributeEntry {
                    name: "statusBarang".to_string(),
                    attr_type: "Enumerated".to_string(),
                    enum_ref: Some("StatusBarang".to_string()),
                },
            ],
        });
        builder.add_statechart(StatechartEntry {
            name: "Klaim".to_string(),
            states: vec!["Baru".to_string()],
            transitions: vec![Transition::new("[*]", "Baru")],
            initial_state: None,
        });
        let json = serde_json::to_value(builder.build()).unwrap();

        assert_eq!(json["modelName"], "Model");
        assert_eq!(json["classes"][0]["domainRef"], "d");
        assert_eq!(json["classes"][0]["className"], "Barang");
        assert!(json["classes"][0]["attributes"][0].get("enumRef").is_none());
        assert_eq!(json["classes"][0]["attributes"][1]["enumRef"], "StatusBarang");
        assert!(json["statecharts"][0].get("initialState").is_none());
    }

    #[test]
    fn test_pretty_output_keeps_non_ascii() {
        let mut builder = DocumentBuilder::new("Sistem Pelaporan – Kampus", "1.0");
        builder.add_domain("pengguna", "Pengelolaan pengguna");
        let text = builder.build().to_json_pretty().unwrap();

        assert!(text.contains("Sistem Pelaporan – Kampus"));
        assert!(text.starts_with("{\n  \"modelName\""));
    }
}
