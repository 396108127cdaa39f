//! Error types for DECL translation.

use thiserror::Error;

/// Result type for DECL translation operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse context carrying filename for error reporting.
#[derive(Clone, Debug)]
pub struct ParseContext {
    pub filename: Option<String>,
}

impl ParseContext {
    /// Create a new parse context.
    pub fn new(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(String::from),
        }
    }

    /// Format a location suffix for error messages.
    pub fn loc_suffix(&self, line: usize) -> String {
        match &self.filename {
            Some(name) => format!(" at line {} of <{}>", line, name),
            None => String::new(),
        }
    }
}

/// Error type for DECL translation.
///
/// Every error aborts the whole translation; there is no per-line
/// recovery and no partial output.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A name fails the identifier pattern.
    #[error("Invalid name \"{0}\"{1}")]
    InvalidName(String, String),

    /// A constant name is defined more than once in a session.
    #[error("Duplicate constant definition \"{0}\"{1}")]
    DuplicateConstant(String, String),

    /// A literal is neither a number nor an array.
    #[error("Unsupported value \"{0}\"{1}")]
    UnsupportedValue(String, String),

    /// A configuration value is not a quoted `@{NAME}` reference.
    #[error("Invalid constant reference format \"{0}\"{1}")]
    InvalidReferenceFormat(String, String),

    /// A configuration line references a name absent from the table.
    #[error("Reference to undefined constant \"{0}\"{1}")]
    UndefinedReference(String, String),
}

impl ParseError {
    /// Create an error with location information.
    pub fn with_location(self, ctx: &ParseContext, line: usize) -> Self {
        let suffix = ctx.loc_suffix(line);
        match self {
            ParseError::InvalidName(name, _) => ParseError::InvalidName(name, suffix),
            ParseError::DuplicateConstant(name, _) => ParseError::DuplicateConstant(name, suffix),
            ParseError::UnsupportedValue(text, _) => ParseError::UnsupportedValue(text, suffix),
            ParseError::InvalidReferenceFormat(text, _) => {
                ParseError::InvalidReferenceFormat(text, suffix)
            }
            ParseError::UndefinedReference(name, _) => ParseError::UndefinedReference(name, suffix),
        }
    }
}
