//! Translator from a YAML-like configuration dialect to DECL.
//!
//! The input dialect has two blocks: `constants:` defines named values
//! (integers, decimals, and arbitrarily nested arrays of them), and
//! `configuration:` assigns those values to keys by quoted reference
//! (`"@{NAME}"`). The output is a flat, semicolon-terminated list of
//! declarations with all constants first:
//!
//! ```text
//! def DEVICE_ID = 12345;
//! Id = 12345;
//! ```
//!
//! Input `#` comments survive translation as `%` comments, attached to
//! the declaration they preceded.
//!
//! # Translation Pipeline
//!
//! The translator operates in three phases:
//!
//! 1. **Line Classifier**: Splits source text into lines, strips
//!    trailing comments, and tags each line as a constant definition,
//!    a configuration assignment, or noise.
//!
//! 2. **Line Processors**: Two passes over the classified lines. The
//!    constants pass builds the constant table and rewrites each
//!    constant line as a `def` declaration; the configuration pass
//!    resolves references against the table and rewrites each
//!    configuration line as an assignment.
//!
//! 3. **Assembler**: Reattaches comments, orders constants before
//!    configuration assignments (input order within each group), and
//!    renders the final text.

mod assembler;
mod error;
mod parser;
mod scanner;
mod table;
mod value;

pub use assembler::assemble;
pub use error::{ParseContext, ParseError, Result};
pub use parser::{process_configuration_line, process_constant_line, validate_name};
pub use scanner::{scan, LineKind, ScanLine};
pub use table::ConstantTable;
pub use value::{canonicalize, parse_value, Value};

/// Translate a configuration document to DECL text.
///
/// # Example
///
/// ```
/// use libdecl::translate;
///
/// let out = translate("DEVICE_ID: 12345\nId: \"@{DEVICE_ID}\"").unwrap();
/// assert_eq!(out, "def DEVICE_ID = 12345;\nId = 12345;");
/// ```
pub fn translate(input: &str) -> Result<String> {
    translate_with_filename(input, None)
}

/// Translate a configuration document with a filename for error messages.
pub fn translate_with_filename(input: &str, filename: Option<&str>) -> Result<String> {
    let ctx = ParseContext::new(filename);

    // Phase 1: classify lines
    let mut lines = scanner::scan(input);

    // Phase 2: constants pass, then configuration pass. The table is
    // complete before any reference is resolved, so configuration
    // lines may textually precede the constants they name.
    let mut table = ConstantTable::new();

    for line in lines.iter_mut().filter(|l| l.kind == LineKind::Const) {
        line.content = process_constant_line(&mut table, &line.content)
            .map_err(|e| e.with_location(&ctx, line.line_num))?;
    }

    for line in lines.iter_mut().filter(|l| l.kind == LineKind::Config) {
        line.content = process_configuration_line(&table, &line.content)
            .map_err(|e| e.with_location(&ctx, line.line_num))?;
    }

    // Phase 3: assemble output
    Ok(assembler::assemble(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_empty_input() {
        assert_eq!(translate("").unwrap(), "");
    }

    #[test]
    fn test_translate_reference_before_definition() {
        let out = translate("Id: \"@{DEVICE_ID}\"\nDEVICE_ID: 12345").unwrap();
        assert_eq!(out, "def DEVICE_ID = 12345;\nId = 12345;");
    }

    #[test]
    fn test_translate_error_carries_location() {
        let err = translate_with_filename("A: 1\nA: 2", Some("dup.conf")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Duplicate constant definition \"A\" at line 2 of <dup.conf>"
        );
    }

    #[test]
    fn test_translate_aborts_on_first_error() {
        let err = translate("INVALID_CONSTANT: not_a_number\nGOOD: 1").unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedValue(_, _)));
    }
}
