//! Value literals: numbers and (possibly nested) arrays.
//!
//! Scalars keep their exact source text; the canonical form never
//! re-renders a number. Arrays render as `#(item, item, ...)` and the
//! empty array as `#()`.

use crate::error::{ParseError, Result};
use std::fmt;

/// A parsed value literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer or decimal, kept verbatim as source text.
    Scalar(String),
    /// Ordered sequence of values.
    Array(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(text) => f.write_str(text),
            Value::Array(items) => {
                f.write_str("#(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Parse a scalar or array literal.
///
/// Accepted forms after trimming:
/// - a nonempty digit sequence,
/// - a decimal with exactly one `.` and digits everywhere else,
/// - a bracketed array `[...]` of such values, nested to any depth,
/// - the canonical array form `#(...)`, so re-parsing rendered output
///   yields the same value.
///
/// Anything else fails with [`ParseError::UnsupportedValue`].
pub fn parse_value(text: &str) -> Result<Value> {
    let text = text.trim();

    if is_number(text) {
        return Ok(Value::Scalar(text.to_string()));
    }

    if let Some(interior) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        return parse_array(interior);
    }
    if let Some(interior) = text.strip_prefix("#(").and_then(|t| t.strip_suffix(')')) {
        return parse_array(interior);
    }

    Err(ParseError::UnsupportedValue(text.to_string(), String::new()))
}

/// Parse and render in one step.
pub fn canonicalize(text: &str) -> Result<String> {
    Ok(parse_value(text)?.to_string())
}

/// Numbers are a digit sequence, or a digit sequence with exactly one
/// embedded, leading, or trailing dot.
fn is_number(text: &str) -> bool {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }
    let without_dot = text.replacen('.', "", 1);
    text.matches('.').count() == 1
        && !without_dot.is_empty()
        && without_dot.bytes().all(|b| b.is_ascii_digit())
}

/// Parse the interior of an array literal, splitting on commas at
/// nesting depth zero only.
fn parse_array(interior: &str) -> Result<Value> {
    let interior = interior.trim();
    if interior.is_empty() {
        return Ok(Value::Array(Vec::new()));
    }

    let mut items: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut depth = 0i32;

    for ch in interior.chars() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth -= 1,
            _ => {}
        }
        if ch == ',' && depth == 0 {
            items.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        items.push(current);
    }

    let mut values = Vec::with_capacity(items.len());
    for item in &items {
        values.push(parse_value(item)?);
    }
    Ok(Value::Array(values))
}
