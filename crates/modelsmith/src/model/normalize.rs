//! Attribute type normalization
//!
//! Maps declared attribute types onto canonical type names before any
//! enumeration lookup happens.

/// Canonical type of identifier attributes
pub const ID_TYPE: &str = "ID";

/// Type given to attributes resolved to an enumeration
pub const ENUMERATED_TYPE: &str = "Enumerated";

/// True for attribute names ending in `ID`
pub fn is_identifier(name: &str) -> bool {
    name.ends_with(ID_TYPE)
}

/// Canonical name of a scalar type; unknown tokens pass through unchanged
pub fn canonical_type(raw: &str) -> &str {
    match raw {
        "String" => "String",
        "Integer" => "Integer",
        "Boolean" => "Boolean",
        "Date" => "Date",
        "DateTime" => "Timestamp",
        "Float" => "Float",
        other => other,
    }
}

/// Normalized type of an attribute; identifier names always become `ID`
pub fn normalize_attribute<'a>(name: &str, raw_type: &'a str) -> &'a str {
    if is_identifier(name) {
        ID_TYPE
    } else {
        canonical_type(raw_type)
    }
}
