//! Domain resolution and file role classification
//!
//! A diagram file's name decides what it contributes: class diagrams are
//! assigned to a domain through ordered substring rules, and state diagram
//! files name the statechart they describe.

use std::path::Path;

use crate::core::{ConversionConfig, DomainRule};

/// What a diagram file contributes to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRole {
    /// Class diagram belonging to a domain
    ClassDiagram { domain: String },
    /// State diagram describing the named statechart
    Statechart { name: String },
    /// Class diagram name pattern without a matching domain rule
    Unassigned,
    /// Neither a class nor a state diagram
    Other,
}

/// Lower-cased file name without its extension
fn lowercase_stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Ordered substring rules mapping file names to domains
#[derive(Debug, Clone)]
pub struct DomainResolver {
    rules: Vec<DomainRule>,
}

impl DomainResolver {
    pub fn new(rules: Vec<DomainRule>) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &ConversionConfig) -> Self {
        Self::new(config.domain_rules.clone())
    }

    /// Domain of the first rule whose pattern occurs in the lower-cased stem
    pub fn resolve(&self, file_name: &str) -> Option<&str> {
        let stem = lowercase_stem(file_name);
        self.rules
            .iter()
            .find(|rule| stem.contains(&rule.pattern))
            .map(|rule| rule.domain.as_str())
    }
}

/// Classifies diagram files by name
#[derive(Debug, Clone)]
pub struct FileClassifier {
    resolver: DomainResolver,
    class_prefixes: Vec<String>,
    statechart_marker: String,
    statechart_prefix: String,
}

impl FileClassifier {
    pub fn from_config(config: &ConversionConfig) -> Self {
        Self {
            resolver: DomainResolver::from_config(config),
            class_prefixes: config.class_file_prefixes.clone(),
            statechart_marker: config.statechart_marker.clone(),
            statechart_prefix: config.statechart_prefix.clone(),
        }
    }

    pub fn resolver(&self) -> &DomainResolver {
        &self.resolver
    }

    /// Role of a file; the class diagram check takes precedence
    pub fn classify(&self, file_name: &str) -> FileRole {
        let class_named = self
            .class_prefixes
            .iter()
            .any(|prefix| file_name.starts_with(prefix.as_str()));

        if class_named {
            if let Some(domain) = self.resolver.resolve(file_name) {
                return FileRole::ClassDiagram {
                    domain: domain.to_string(),
                };
            }
        }

        if file_name.contains(self.statechart_marker.as_str()) {
            return FileRole::Statechart {
                name: statechart_name(file_name, &self.statechart_prefix),
            };
        }

        if class_named {
            FileRole::Unassigned
        } else {
            FileRole::Other
        }
    }
}

/// Capitalize the first character and lower-case the rest
fn capitalize(piece: &str) -> String {
    let mut chars = piece.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Statechart name from a file name
///
/// `state_laporan_hilang.puml` becomes `LaporanHilang`.
pub fn statechart_name(file_name: &str, prefix: &str) -> String {
    let stripped = file_name.strip_prefix(prefix).unwrap_or(file_name);
    let stem = Path::new(stripped)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    stem.split('_').map(capitalize).collect()
}
