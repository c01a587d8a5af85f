//! Class diagram parser
//!
//! Locates `class Name { ... }` and `enum Name { ... }` blocks anywhere in
//! the text and reads their bodies line by line. Member lines that do not
//! fit the expected shape are dropped with a diagnostic.

use anyhow::Result;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, span, trace, Level};

use super::chumsky_parser::{split_parameters, ChumskyMemberParser};
use super::database::{Attribute, Class, ClassDatabase, EnumDecl, Method, Parameter};
use crate::core::{Database, Diagnostic, DiagnosticKind, Parser};

static CLASS_BLOCK_RE: OnceLock<Regex> = OnceLock::new();
static ENUM_BLOCK_RE: OnceLock<Regex> = OnceLock::new();

fn class_block_re() -> &'static Regex {
    CLASS_BLOCK_RE.get_or_init(|| {
        Regex::new(r"(?i:\bclass)\s+(\w+)\s*\{([^}]*)\}").expect("class block pattern")
    })
}

fn enum_block_re() -> &'static Regex {
    ENUM_BLOCK_RE
        .get_or_init(|| Regex::new(r"\benum\s+(\w+)\s*\{([^}]*)\}").expect("enum block pattern"))
}

/// 1-based line number of a byte offset
fn line_of(input: &str, offset: usize) -> usize {
    input[..offset].matches('\n').count() + 1
}

/// Section separators inside a class body, optionally titled (`-- ops --`)
const SEPARATORS: [&str; 4] = ["--", "..", "==", "__"];

fn is_separator(line: &str) -> bool {
    SEPARATORS.iter().any(|sep| line.starts_with(sep))
}

/// Class diagram parser
pub struct ClassParser {
    members: ChumskyMemberParser,
}

impl ClassParser {
    pub fn new() -> Self {
        Self {
            members: ChumskyMemberParser::new(),
        }
    }

    /// Read one class body into `class`, recording dropped lines
    fn parse_body(
        &self,
        body: &str,
        first_line: usize,
        class: &mut Class,
        database: &mut ClassDatabase,
    ) {
        for (index, raw) in body.lines().enumerate() {
            let line = raw.trim();
            let line_no = first_line + index;

            if line.is_empty() {
                continue;
            }

            if is_separator(line) {
                trace!(line, "Skipping separator");
                continue;
            }

            if line.starts_with('-') {
                match self.members.parse_attribute(line) {
                    Ok((name, raw_type)) => {
                        trace!(class = %class.name, attribute = %name, "Parsed attribute");
                        class.add_attribute(Attribute::new(name, raw_type));
                    }
                    Err(_) => database.diagnostics_mut().push(
                        Diagnostic::new(
                            DiagnosticKind::MalformedAttribute,
                            format!("`{}` in class {} is not `name : type`", line, class.name),
                        )
                        .at_line(line_no),
                    ),
                }
            } else if line.starts_with('+') {
                match self.members.parse_method(line) {
                    Ok(parsed) => {
                        let mut method = Method::new(parsed.name);
                        if let Some(return_type) = parsed.return_type {
                            method = method.with_return_type(return_type);
                        }

                        let (params, rejected) = split_parameters(&parsed.params);
                        for (name, ty) in params {
                            method = method.with_parameter(Parameter::new(name, ty));
                        }
                        for piece in rejected {
                            database.diagnostics_mut().push(
                                Diagnostic::new(
                                    DiagnosticKind::MalformedParameter,
                                    format!(
                                        "parameter `{}` of {}.{} is not `name : type`",
                                        piece, class.name, method.name
                                    ),
                                )
                                .at_line(line_no),
                            );
                        }

                        trace!(class = %class.name, method = %method.name, "Parsed method");
                        class.add_method(method);
                    }
                    Err(_) => database.diagnostics_mut().push(
                        Diagnostic::new(
                            DiagnosticKind::MalformedMethod,
                            format!("`{}` in class {} has no parameter list", line, class.name),
                        )
                        .at_line(line_no),
                    ),
                }
            } else {
                trace!(line, "Ignoring class body line");
            }
        }
    }
}

impl Default for ClassParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser<ClassDatabase> for ClassParser {
    fn parse(&self, input: &str, database: &mut ClassDatabase) -> Result<()> {
        let parse_span = span!(Level::DEBUG, "parse_class_diagram", input_len = input.len());
        let _enter = parse_span.enter();

        for caps in class_block_re().captures_iter(input) {
            let (Some(name), Some(body)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let mut class = Class::new(name.as_str());
            self.parse_body(
                body.as_str(),
                line_of(input, body.start()),
                &mut class,
                database,
            );
            database.add_class(class)?;
        }

        for caps in enum_block_re().captures_iter(input) {
            let (Some(name), Some(body)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let values = body
                .as_str()
                .lines()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from)
                .collect();
            database.add_enum(EnumDecl::new(name.as_str(), values))?;
        }

        debug!(
            classes = database.class_count(),
            enums = database.enum_count(),
            "Parsed class diagram"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "class"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn can_parse(&self, input: &str) -> bool {
        class_block_re().is_match(input) || enum_block_re().is_match(input)
    }
}
