//! Class member line grammar using chumsky
//!
//! Grammars for the two member forms found inside a class body:
//!
//! ```text
//! -name : Type
//! +name(param : Type, other : Type) : ReturnType
//! ```

use anyhow::Result;
use chumsky::prelude::*;

/// A method line before its parameter list is split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMethod {
    pub name: String,
    /// Raw text between the parentheses
    pub params: String,
    /// Text after `:` following the closing parenthesis
    pub return_type: Option<String>,
}

/// Chumsky-based member line parser
pub struct ChumskyMemberParser;

impl ChumskyMemberParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse an attribute line into `(name, type)`
    ///
    /// The text after `-` must contain exactly one `:`.
    pub fn parse_attribute(&self, line: &str) -> Result<(String, String)> {
        Self::attribute_parser()
            .parse(line.trim())
            .into_result()
            .map_err(|errors| anyhow::anyhow!("Parse errors: {:?}", errors))
    }

    /// Parse a method line; it must contain an opening parenthesis
    pub fn parse_method(&self, line: &str) -> Result<ParsedMethod> {
        Self::method_parser()
            .parse(line.trim())
            .into_result()
            .map_err(|errors| anyhow::anyhow!("Parse errors: {:?}", errors))
    }

    fn attribute_parser<'src>() -> impl Parser<'src, &'src str, (String, String)> + Clone {
        let part = none_of(':')
            .repeated()
            .to_slice()
            .map(|s: &str| s.trim().to_string());

        just('-')
            .ignore_then(part.clone())
            .then_ignore(just(':'))
            .then(part)
            .then_ignore(end())
    }

    fn method_parser<'src>() -> impl Parser<'src, &'src str, ParsedMethod> + Clone {
        let name = none_of('(')
            .repeated()
            .to_slice()
            .map(|s: &str| s.trim().to_string());

        let params = none_of(')').repeated().to_slice().map(|s: &str| s.to_string());

        let return_type = just(')')
            .ignore_then(any().repeated().to_slice())
            .map(|rest: &str| {
                rest.trim()
                    .strip_prefix(':')
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
            })
            .or_not()
            .map(Option::flatten);

        just('+')
            .ignore_then(name)
            .then_ignore(just('('))
            .then(params)
            .then(return_type)
            .then_ignore(end())
            .map(|((name, params), return_type)| ParsedMethod {
                name,
                params,
                return_type,
            })
    }
}

impl Default for ChumskyMemberParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a raw parameter list into `name : type` pairs
///
/// Returns the parsed pairs and the pieces that were not `name : type`.
pub fn split_parameters(params: &str) -> (Vec<(String, String)>, Vec<String>) {
    let mut parsed = Vec::new();
    let mut rejected = Vec::new();

    if params.trim().is_empty() {
        return (parsed, rejected);
    }

    for piece in params.split(',').map(str::trim) {
        match piece.split(':').collect::<Vec<_>>().as_slice() {
            [name, ty] => parsed.push((name.trim().to_string(), ty.trim().to_string())),
            _ => rejected.push(piece.to_string()),
        }
    }

    (parsed, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_line() {
        let parser = ChumskyMemberParser::new();
        assert_eq!(
            parser.parse_attribute("-namaBarang : String").unwrap(),
            ("namaBarang".to_string(), "String".to_string())
        );
        assert_eq!(
            parser.parse_attribute("  -tanggal:DateTime  ").unwrap(),
            ("tanggal".to_string(), "DateTime".to_string())
        );
    }

    #[test]
    fn test_attribute_needs_exactly_one_colon() {
        let parser = ChumskyMemberParser::new();
        assert!(parser.parse_attribute("-nama").is_err());
        assert!(parser.parse_attribute("-waktu : Map : String").is_err());
    }

    #[test]
    fn test_method_line() {
        let parser = ChumskyMemberParser::new();
        let method = parser
            .parse_method("+ajukanKlaim(barangID : Integer, bukti : String) : Boolean")
            .unwrap();
        assert_eq!(method.name, "ajukanKlaim");
        assert_eq!(method.params, "barangID : Integer, bukti : String");
        assert_eq!(method.return_type, Some("Boolean".to_string()));
    }

    #[test]
    fn test_method_without_return_type() {
        let parser = ChumskyMemberParser::new();
        let method = parser.parse_method("+logout()").unwrap();
        assert_eq!(method.name, "logout");
        assert_eq!(method.params, "");
        assert_eq!(method.return_type, None);
    }

    #[test]
    fn test_method_without_closing_paren() {
        let parser = ChumskyMemberParser::new();
        let method = parser.parse_method("+cari(kata : String").unwrap();
        assert_eq!(method.params, "kata : String");
        assert_eq!(method.return_type, None);
    }

    #[test]
    fn test_method_needs_parenthesis() {
        let parser = ChumskyMemberParser::new();
        assert!(parser.parse_method("+simpan").is_err());
    }

    #[test]
    fn test_split_parameters() {
        let (parsed, rejected) = split_parameters("a : Integer, b, c : X : Y");
        assert_eq!(parsed, vec![("a".to_string(), "Integer".to_string())]);
        assert_eq!(rejected, vec!["b".to_string(), "c : X : Y".to_string()]);

        let (parsed, rejected) = split_parameters("   ");
        assert!(parsed.is_empty());
        assert!(rejected.is_empty());
    }
}
