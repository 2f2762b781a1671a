//! Error types for binding generation.
//!
//! Every failure that aborts a run is a [`BindgenError`]. Unsupported method
//! signatures are not errors: the classifier reports them as
//! [`Rejection`](crate::analysis::classify::Rejection)s and generation goes on.
//!
//! # Error Codes
//!
//! Codes are assigned by category:
//! - E001-E009: I/O and filesystem errors
//! - E010-E019: Parse errors
//! - E020-E029: Configuration errors
//! - E030-E039: Resolution errors (hierarchy and metadata lookups)
//! - E040-E049: Code generation errors
//!
//! # Example
//!
//! ```rust
//! use jsbindgen::errors::{BindgenError, ErrorCode};
//!
//! let err = BindgenError::class_not_found("CCSprite");
//! assert_eq!(err.code(), ErrorCode::CLASS_NOT_FOUND);
//! assert!(err.to_string().contains("CCSprite"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error - generic
    pub const IO_GENERIC: ErrorCode = ErrorCode("E001");

    /// Parse error - malformed input syntax
    pub const PARSE_SYNTAX: ErrorCode = ErrorCode("E010");
    /// Parse error - well-formed input with an unexpected shape
    pub const PARSE_STRUCTURE: ErrorCode = ErrorCode("E011");
    /// Parse error - selector arity does not match the argument list
    pub const PARSE_SELECTOR_MISMATCH: ErrorCode = ErrorCode("E012");

    /// Config error - invalid value or unreadable file
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E020");

    /// Resolution error - superclass links form a cycle
    pub const HIERARCHY_CYCLE: ErrorCode = ErrorCode("E030");
    /// Resolution error - class absent from metadata
    pub const CLASS_NOT_FOUND: ErrorCode = ErrorCode("E031");
    /// Resolution error - class has no superclass to bind against
    pub const MISSING_SUPERCLASS: ErrorCode = ErrorCode("E032");

    /// Codegen error - formatting into the output buffer failed
    pub const CODEGEN_FORMAT: ErrorCode = ErrorCode("E040");

    /// Get the error code string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Main error type for jsbindgen operations
#[derive(Debug, Error)]
pub enum BindgenError {
    /// File system related errors
    #[error("I/O error on {}: {message}", path.display())]
    Io {
        message: String,
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Malformed hierarchy or metadata input
    #[error("Parse error in {}{}: {message}", path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "<input>".to_string()), format_position(*line, *column))]
    Parse {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
        line: Option<usize>,
        column: Option<usize>,
    },

    /// Selector colon count disagrees with the declared arguments
    #[error("Selector '{selector}' on class {class} expects {expected} argument(s) but metadata declares {found}")]
    SelectorMismatch {
        class: String,
        selector: String,
        expected: usize,
        found: usize,
    },

    /// Superclass links loop back on themselves
    #[error("Cycle detected in class hierarchy: {}", chain.join(" -> "))]
    CycleDetected { chain: Vec<String> },

    /// Requested class has no metadata entry
    #[error("Class '{0}' not found in metadata")]
    ClassNotFound(String),

    /// Class cannot be bound because its parent proxy is unknown
    #[error("Class '{0}' has no superclass in the hierarchy file")]
    MissingSuperclass(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Format(#[from] std::fmt::Error),
}

fn format_position(line: Option<usize>, column: Option<usize>) -> String {
    match (line, column) {
        (Some(line), Some(column)) => format!(":{}:{}", line, column),
        (Some(line), None) => format!(":{}", line),
        _ => String::new(),
    }
}

impl BindgenError {
    /// Create an I/O error with path context
    pub fn io(message: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: path.into(),
            source: Some(source),
        }
    }

    /// Create a syntax error at a known line and column
    pub fn syntax(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::Parse {
            code: ErrorCode::PARSE_SYNTAX,
            message: message.into(),
            path: None,
            line: Some(line),
            column: Some(column),
        }
    }

    /// Create an error for input that parsed but has the wrong shape
    pub fn structure(message: impl Into<String>) -> Self {
        Self::Parse {
            code: ErrorCode::PARSE_STRUCTURE,
            message: message.into(),
            path: None,
            line: None,
            column: None,
        }
    }

    pub fn class_not_found(class: impl Into<String>) -> Self {
        Self::ClassNotFound(class.into())
    }

    pub fn missing_superclass(class: impl Into<String>) -> Self {
        Self::MissingSuperclass(class.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Attach the file a parse error came from.
    ///
    /// Parsers work on in-memory text and don't know their source; the
    /// loaders call this once the text has been read.
    #[must_use]
    pub fn with_path(self, source_path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Parse {
                code,
                message,
                line,
                column,
                ..
            } => Self::Parse {
                code,
                message,
                path: Some(source_path.into()),
                line,
                column,
            },
            other => other,
        }
    }

    /// Get the structured error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { .. } => ErrorCode::IO_GENERIC,
            Self::Parse { code, .. } => *code,
            Self::SelectorMismatch { .. } => ErrorCode::PARSE_SELECTOR_MISMATCH,
            Self::CycleDetected { .. } => ErrorCode::HIERARCHY_CYCLE,
            Self::ClassNotFound(_) => ErrorCode::CLASS_NOT_FOUND,
            Self::MissingSuperclass(_) => ErrorCode::MISSING_SUPERCLASS,
            Self::Config(_) => ErrorCode::CONFIG_INVALID,
            Self::Format(_) => ErrorCode::CODEGEN_FORMAT,
        }
    }

    /// Whether the user can fix this by correcting an input file.
    #[must_use]
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io { .. } | Self::Format(_))
    }
}

/// Result alias for jsbindgen operations
pub type Result<T, E = BindgenError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_includes_position() {
        let err = BindgenError::syntax("unexpected ']'", 3, 14).with_path("hierarchy.txt");
        assert_eq!(
            err.to_string(),
            "Parse error in hierarchy.txt:3:14: unexpected ']'"
        );
    }

    #[test]
    fn test_parse_error_without_path() {
        let err = BindgenError::structure("missing 'selector' attribute");
        assert_eq!(
            err.to_string(),
            "Parse error in <input>: missing 'selector' attribute"
        );
        assert_eq!(err.code(), ErrorCode::PARSE_STRUCTURE);
    }

    #[test]
    fn test_with_path_leaves_other_errors_alone() {
        let err = BindgenError::class_not_found("CCNode").with_path("x.bridgesupport");
        assert!(matches!(err, BindgenError::ClassNotFound(ref c) if c == "CCNode"));
    }

    #[test]
    fn test_cycle_display_joins_chain() {
        let err = BindgenError::CycleDetected {
            chain: vec!["A".into(), "B".into(), "A".into()],
        };
        assert_eq!(
            err.to_string(),
            "Cycle detected in class hierarchy: A -> B -> A"
        );
        assert_eq!(err.code().as_str(), "E030");
    }

    #[test]
    fn test_io_errors_are_not_user_fixable() {
        let err = BindgenError::io(
            "Failed to read file",
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(!err.is_user_fixable());
        assert!(BindgenError::config("bad prefix").is_user_fixable());
    }
}
