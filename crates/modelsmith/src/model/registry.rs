//! Enumeration registry
//!
//! One name-to-values table built from three sources, merged in order:
//! enums declared in class diagrams, enums derived from statecharts, and the
//! configured custom enums. A later source replaces a same-named entry but
//! the entry keeps its original position; every replacement is reported as
//! an [`DiagnosticKind::EnumOverride`] diagnostic.

use indexmap::IndexMap;
use std::fmt;
use tracing::{debug, span, Level};

use super::document::{EnumerationEntry, StatechartEntry};
use crate::core::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::plugins::class::EnumDecl;

/// Where an enumeration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Explicit,
    Statechart,
    Custom,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Explicit => write!(f, "explicit"),
            Provenance::Statechart => write!(f, "statechart"),
            Provenance::Custom => write!(f, "custom"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RegistryEntry {
    values: Vec<String>,
    provenance: Provenance,
}

/// Name to values mapping consulted during class assembly
#[derive(Debug, Clone, Default)]
pub struct EnumRegistry {
    entries: IndexMap<String, RegistryEntry>,
}

impl EnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from all three sources
    ///
    /// `explicit` yields `(file name, enum)` pairs in sorted file order.
    pub fn build<'a>(
        explicit: impl IntoIterator<Item = (&'a str, &'a EnumDecl)>,
        statecharts: &[StatechartEntry],
        custom: &IndexMap<String, Vec<String>>,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let build_span = span!(Level::DEBUG, "build_enum_registry");
        let _enter = build_span.enter();

        let mut registry = Self::new();

        for (file, decl) in explicit {
            if let Some(d) =
                registry.insert(&decl.name, decl.values.clone(), Provenance::Explicit)
            {
                diagnostics.push(d.in_file(file));
            }
        }

        for chart in statecharts {
            if let Some(d) =
                registry.insert(&chart.name, chart.states.clone(), Provenance::Statechart)
            {
                diagnostics.push(d);
            }
        }

        for (name, values) in custom {
            if let Some(d) = registry.insert(name, values.clone(), Provenance::Custom) {
                diagnostics.push(d);
            }
        }

        debug!(enums = registry.len(), "Built enum registry");
        registry
    }

    /// Insert or replace an entry; returns a diagnostic when replacing
    pub fn insert(
        &mut self,
        name: &str,
        values: Vec<String>,
        provenance: Provenance,
    ) -> Option<Diagnostic> {
        let previous = self
            .entries
            .insert(name.to_string(), RegistryEntry { values, provenance })?;

        Some(Diagnostic::new(
            DiagnosticKind::EnumOverride,
            format!(
                "{} enumeration {} replaces the earlier {} one",
                provenance, name, previous.provenance
            ),
        ))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The registered name equal to `name`, borrowed from the registry
    pub fn get_name(&self, name: &str) -> Option<&str> {
        self.entries.get_key_value(name).map(|(key, _)| key.as_str())
    }

    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(|e| e.values.as_slice())
    }

    pub fn provenance(&self, name: &str) -> Option<Provenance> {
        self.entries.get(name).map(|e| e.provenance)
    }

    /// Registered names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten into document enumerations, insertion order
    pub fn to_enumerations(&self) -> Vec<EnumerationEntry> {
        self.entries
            .iter()
            .map(|(name, entry)| EnumerationEntry {
                name: name.clone(),
                choices: entry.values.clone(),
            })
            .collect()
    }
}
