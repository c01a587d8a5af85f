//! State diagram database implementation
//!
//! Stores transitions in source order and derives the state set from them.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeSet;

use super::PSEUDOSTATE;
use crate::core::{Database, Diagnostics};

/// A transition `source --> target : event`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
}

impl Transition {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            event: None,
        }
    }

    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }
}

/// State diagram database
#[derive(Debug, Default)]
pub struct StateDatabase {
    transitions: Vec<Transition>,
    diagnostics: Diagnostics,
}

impl StateDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition
    pub fn add_transition(&mut self, transition: Transition) -> Result<()> {
        self.transitions.push(transition);
        Ok(())
    }

    /// Get all transitions in source order
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// True when the pseudostate marker is a source or target of any transition
    pub fn has_pseudostate(&self) -> bool {
        self.transitions
            .iter()
            .any(|t| t.source == PSEUDOSTATE || t.target == PSEUDOSTATE)
    }

    /// Distinct state names, sorted, without the pseudostate marker
    pub fn states(&self) -> Vec<String> {
        self.transitions
            .iter()
            .flat_map(|t| [t.source.as_str(), t.target.as_str()])
            .filter(|s| *s != PSEUDOSTATE)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// The pseudostate marker when it occurs, else `None`
    pub fn initial_state(&self) -> Option<String> {
        self.has_pseudostate().then(|| PSEUDOSTATE.to_string())
    }

    pub fn into_transitions(self) -> Vec<Transition> {
        self.transitions
    }
}

impl Database for StateDatabase {
    type Record = Transition;

    fn add_record(&mut self, record: Self::Record) -> Result<()> {
        self.add_transition(record)
    }

    fn records(&self) -> impl Iterator<Item = &Self::Record> {
        self.transitions.iter()
    }

    fn record_count(&self) -> usize {
        self.transitions.len()
    }

    fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    fn clear(&mut self) {
        self.transitions.clear();
        self.diagnostics.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_are_sorted_and_distinct() {
        let mut db = StateDatabase::new();
        db.add_transition(Transition::new("Diproses", "Selesai")).unwrap();
        db.add_transition(Transition::new("Baru", "Diproses")).unwrap();
        db.add_transition(Transition::new("Selesai", "Diproses")).unwrap();

        assert_eq!(db.states(), vec!["Baru", "Diproses", "Selesai"]);
        assert_eq!(db.initial_state(), None);
    }

    #[test]
    fn test_pseudostate_excluded_but_reported() {
        let mut db = StateDatabase::new();
        db.add_transition(Transition::new("[*]", "Baru")).unwrap();
        db.add_transition(Transition::new("Baru", "[*]")).unwrap();

        assert_eq!(db.states(), vec!["Baru"]);
        assert_eq!(db.initial_state(), Some("[*]".to_string()));
    }

    #[test]
    fn test_event_omitted_when_absent() {
        let plain = serde_json::to_string(&Transition::new("A", "B")).unwrap();
        assert_eq!(plain, r#"{"source":"A","target":"B"}"#);

        let labeled = serde_json::to_string(&Transition::new("A", "B").with_event("kirim")).unwrap();
        assert_eq!(labeled, r#"{"source":"A","target":"B","event":"kirim"}"#);
    }

    #[test]
    fn test_clear() {
        let mut db = StateDatabase::new();
        db.add_record(Transition::new("A", "B")).unwrap();
        db.clear();
        assert_eq!(db.record_count(), 0);
        assert!(db.states().is_empty());
    }
}
