//! Best-effort parsing diagnostics
//!
//! Parsing never fails on malformed diagram text. Lines that cannot be read
//! are dropped and a [`Diagnostic`] is recorded next to the result, so the
//! caller decides whether to ignore them, print them, or fail in strict mode.

use serde::Serialize;
use std::fmt;
use tracing::warn;

/// What kind of input was dropped or shadowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// `-` line inside a class body that is not `name : type`
    MalformedAttribute,
    /// `+` line inside a class body without a parameter list
    MalformedMethod,
    /// Method parameter that is not `name : type`
    MalformedParameter,
    /// Class diagram file whose name resolves to no domain
    SkippedFile,
    /// Enumeration name registered twice; the later entry wins
    EnumOverride,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::MalformedAttribute => write!(f, "malformed-attribute"),
            DiagnosticKind::MalformedMethod => write!(f, "malformed-method"),
            DiagnosticKind::MalformedParameter => write!(f, "malformed-parameter"),
            DiagnosticKind::SkippedFile => write!(f, "skipped-file"),
            DiagnosticKind::EnumOverride => write!(f, "enum-override"),
        }
    }
}

/// A single warning about dropped or shadowed input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            file: None,
            line: None,
            message: message.into(),
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => write!(f, "{}:{}: ", file, line)?,
            (Some(file), None) => write!(f, "{}: ", file)?,
            (None, Some(line)) => write!(f, "line {}: ", line)?,
            (None, None) => {}
        }
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Ordered list of diagnostics accumulated during a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and emit it as a warning event
    pub fn push(&mut self, diagnostic: Diagnostic) {
        warn!(
            kind = %diagnostic.kind,
            file = diagnostic.file.as_deref().unwrap_or("-"),
            line = diagnostic.line.unwrap_or(0),
            "{}",
            diagnostic.message
        );
        self.entries.push(diagnostic);
    }

    /// Move every entry of `other` into this list, stamping the file name
    /// on entries that do not carry one yet
    pub fn absorb(&mut self, other: Diagnostics, file: &str) {
        self.entries.extend(other.entries.into_iter().map(|mut d| {
            if d.file.is_none() {
                d.file = Some(file.to_string());
            }
            d
        }));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count the entries of a given kind
    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
