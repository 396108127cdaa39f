//! Phase 2: Line processors
//!
//! The processors turn one classified line into its output declaration.
//! The constants pass runs first over the whole document and populates
//! the constant table; the configuration pass then resolves references
//! against it. Because the passes are ordered, a configuration line may
//! textually precede the constant it references.
//!
//! Errors are constructed here with an empty location slot; the
//! pipeline fills in the line location.

use crate::error::{ParseError, Result};
use crate::table::ConstantTable;
use crate::value::parse_value;

/// Check a constant or configuration name: a leading underscore or
/// capital letter, then underscores, letters, and digits.
pub fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first == '_' || first.is_ascii_uppercase())
                && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ParseError::InvalidName(name.to_string(), String::new()))
    }
}

/// Process one constant definition line, e.g. `DEVICE_ID: 12345`.
///
/// Stores the canonical value in the table and returns the output
/// declaration `def NAME = value;`.
pub fn process_constant_line(table: &mut ConstantTable, code: &str) -> Result<String> {
    let (name, value) = split_key_value(code);
    validate_name(name)?;

    // Duplicate check precedes value parsing, so a bad redefinition
    // never disturbs the first definition.
    if table.contains(name) {
        return Err(ParseError::DuplicateConstant(
            name.to_string(),
            String::new(),
        ));
    }

    let rendered = parse_value(value)?.to_string();
    table.insert(name, rendered.clone());
    Ok(format!("def {} = {};", name, rendered))
}

/// Process one configuration line, e.g. `Id: "@{DEVICE_ID}"`.
///
/// Configuration values may only be constant references; literals are
/// not permitted in the configuration block. Returns the output
/// assignment `key = value;`.
pub fn process_configuration_line(table: &ConstantTable, code: &str) -> Result<String> {
    let (key, value) = split_key_value(code);
    validate_name(key)?;

    let value = strip_quotes(value);
    let name = value
        .strip_prefix("@{")
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| ParseError::InvalidReferenceFormat(value.to_string(), String::new()))?;

    let resolved = table
        .get(name)
        .ok_or_else(|| ParseError::UndefinedReference(name.to_string(), String::new()))?;

    Ok(format!("{} = {};", key, resolved))
}

/// Split at the first colon, trimming both sides. The classifier
/// guarantees a colon for const and config lines; the fallback keeps
/// this total.
fn split_key_value(code: &str) -> (&str, &str) {
    match code.split_once(':') {
        Some((key, value)) => (key.trim(), value.trim()),
        None => (code.trim(), ""),
    }
}

/// Strip one layer of surrounding double quotes, if present.
fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}
