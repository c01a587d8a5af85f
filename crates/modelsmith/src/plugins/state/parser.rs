//! State transition parser using chumsky
//!
//! Every line of the input is tried as a transition, so transitions are
//! picked up wherever they appear, not only inside a state diagram block.

use anyhow::Result;
use chumsky::prelude::*;
use tracing::{debug, span, trace, Level};

use super::database::{StateDatabase, Transition};
use crate::core::Parser as CoreParser;

/// Parsed transition line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
}

/// State diagram parser
pub struct StateParser;

impl StateParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a transition: `from --> to` or `from --> to : label`
    fn transition_parser<'src>() -> impl Parser<'src, &'src str, Statement> + Clone {
        let arrow = just("-->");

        let from = any()
            .and_is(arrow.clone().not())
            .repeated()
            .at_least(1)
            .to_slice()
            .map(|s: &str| s.trim().to_string());

        let to = none_of(':')
            .and_is(arrow.clone().not())
            .repeated()
            .at_least(1)
            .to_slice()
            .map(|s: &str| s.trim().to_string());

        let label = just(':')
            .ignore_then(any().repeated().to_slice())
            .map(|s: &str| s.trim().to_string())
            .or_not();

        from.then_ignore(arrow)
            .then(to)
            .then(label)
            .then_ignore(end())
            .filter(|((from, to), _)| !from.is_empty() && !to.is_empty())
            .map(|((from, to), label)| Statement {
                from,
                to,
                label: label.filter(|s| !s.is_empty()),
            })
    }

    /// Parse a single line as a transition
    pub fn parse_statement(&self, input: &str) -> Result<Statement> {
        Self::transition_parser()
            .parse(input.trim())
            .into_result()
            .map_err(|errors| anyhow::anyhow!("Parse error: {:?}", errors))
    }
}

impl Default for StateParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreParser<StateDatabase> for StateParser {
    fn parse(&self, input: &str, database: &mut StateDatabase) -> Result<()> {
        let parse_span = span!(Level::DEBUG, "parse_transitions", input_len = input.len());
        let _enter = parse_span.enter();

        for line in input.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || !trimmed.contains("-->") {
                continue;
            }

            match self.parse_statement(trimmed) {
                Ok(Statement { from, to, label }) => {
                    trace!(%from, %to, "Parsed transition");
                    let transition = match label {
                        Some(event) => Transition::new(from, to).with_event(event),
                        None => Transition::new(from, to),
                    };
                    database.add_transition(transition)?;
                }
                Err(_) => {
                    trace!(line = trimmed, "Skipping non-transition line");
                }
            }
        }

        debug!(
            transitions = database.transition_count(),
            "Parsed state transitions"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "state"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn can_parse(&self, input: &str) -> bool {
        input.lines().any(|line| self.parse_statement(line).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statement(from: &str, to: &str, label: Option<&str>) -> Statement {
        Statement {
            from: from.to_string(),
            to: to.to_string(),
            label: label.map(String::from),
        }
    }

    #[test]
    fn test_parse_simple_transition() {
        let parser = StateParser::new();
        assert_eq!(
            parser.parse_statement("Dilaporkan --> Diverifikasi").unwrap(),
            statement("Dilaporkan", "Diverifikasi", None)
        );
    }

    #[test]
    fn test_parse_transition_with_label() {
        let parser = StateParser::new();
        assert_eq!(
            parser
                .parse_statement("Dilaporkan --> Diverifikasi : verifikasi petugas")
                .unwrap(),
            statement("Dilaporkan", "Diverifikasi", Some("verifikasi petugas"))
        );
    }

    #[test]
    fn test_empty_label_is_no_event() {
        let parser = StateParser::new();
        assert_eq!(
            parser.parse_statement("A --> B :   ").unwrap(),
            statement("A", "B", None)
        );
    }

    #[test]
    fn test_parse_pseudostate_transition() {
        let parser = StateParser::new();
        assert_eq!(
            parser.parse_statement("[*] --> Baru").unwrap(),
            statement("[*]", "Baru", None)
        );
        assert_eq!(
            parser.parse_statement("Selesai-->[*]").unwrap(),
            statement("Selesai", "[*]", None)
        );
    }

    #[test]
    fn test_rejects_incomplete_lines() {
        let parser = StateParser::new();
        assert!(parser.parse_statement("--> B").is_err());
        assert!(parser.parse_statement("A -->").is_err());
        assert!(parser.parse_statement("A -> B").is_err());
        assert!(parser.parse_statement("A --> B --> C").is_err());
    }

    #[test]
    fn test_parse_full_diagram() {
        let parser = StateParser::new();
        let mut db = StateDatabase::new();

        let input = r#"
@startuml
[*] --> Dilaporkan
Dilaporkan --> Diverifikasi : verifikasi
Diverifikasi --> Selesai : diambil
Selesai --> [*]
@enduml
"#;

        parser.parse(input, &mut db).unwrap();

        assert_eq!(db.transition_count(), 4);
        assert_eq!(db.states(), vec!["Dilaporkan", "Diverifikasi", "Selesai"]);
        assert_eq!(db.transitions()[1].event, Some("verifikasi".to_string()));
        assert_eq!(db.transitions()[0].event, None);
    }

    #[test]
    fn test_transitions_found_outside_blocks() {
        let parser = StateParser::new();
        let mut db = StateDatabase::new();
        parser
            .parse("class A {\n -x : String\n}\nA --> B : punya\n", &mut db)
            .unwrap();
        assert_eq!(db.transition_count(), 1);
    }

    #[test]
    fn test_can_parse() {
        let parser = StateParser::new();
        assert!(parser.can_parse("@startuml\n[*] --> Baru\n@enduml"));
        assert!(!parser.can_parse("class A {\n}"));
    }
}
