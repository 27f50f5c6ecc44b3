use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

use crate::parser::span::Location;

/// Error produced by the parsing pipeline.
///
/// This is a plain value: it is returned, never thrown, and it carries a
/// source location whenever one is known so callers can highlight the
/// offending token. The two variants are deliberately disjoint:
///
/// - [`Syntax`](ParseError::Syntax) — malformed input: unexpected token,
///   unclosed quote, invalid parameter value, index out of range.
/// - [`Limit`](ParseError::Limit) — a security/resource cap was hit: input
///   too long, too many symbols or parameters, grid dimensions out of range,
///   or the parse timeout expired.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParseError {
    #[error("{message}")]
    #[diagnostic(code(unicomp::syntax))]
    Syntax {
        message: String,
        location: Option<Location>,
    },

    #[error("{message}")]
    #[diagnostic(code(unicomp::limit))]
    Limit {
        message: String,
        location: Option<Location>,
    },
}

impl ParseError {
    /// Build a syntax error at an optional location.
    pub fn syntax(message: impl Into<String>, location: impl Into<Option<Location>>) -> Self {
        Self::Syntax {
            message: message.into(),
            location: location.into(),
        }
    }

    /// Build a resource-limit error at an optional location.
    pub fn limit(message: impl Into<String>, location: impl Into<Option<Location>>) -> Self {
        Self::Limit {
            message: message.into(),
            location: location.into(),
        }
    }

    /// Whether this error is a resource/security limit violation.
    pub fn is_limit(&self) -> bool {
        matches!(self, Self::Limit { .. })
    }

    /// The source location, if one was recorded.
    pub fn location(&self) -> Option<Location> {
        match self {
            Self::Syntax { location, .. } | Self::Limit { location, .. } => *location,
        }
    }

    /// 1-based line of the error, if known.
    pub fn line(&self) -> Option<u32> {
        self.location().map(|l| l.line)
    }

    /// 1-based column of the error, if known.
    pub fn column(&self) -> Option<u32> {
        self.location().map(|l| l.column)
    }

    /// The error message without location information.
    pub fn message(&self) -> &str {
        match self {
            Self::Syntax { message, .. } | Self::Limit { message, .. } => message,
        }
    }
}

/// Crate-level error type used by the CLI.
#[derive(Error, Diagnostic, Debug)]
pub enum UniCompError {
    #[error("IO error: {0}")]
    #[diagnostic(code(unicomp::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(unicomp::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("JSON error: {0}")]
    #[diagnostic(code(unicomp::json))]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error("Validation failed: {message}")]
    #[diagnostic(code(unicomp::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, UniCompError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_disjoint() {
        let syntax = ParseError::syntax("unexpected token", None);
        let limit = ParseError::limit("too many symbols: max 1000", None);

        assert!(!syntax.is_limit());
        assert!(limit.is_limit());
    }

    #[test]
    fn test_location_accessors() {
        let loc = Location::new(4, 2, 5);
        let err = ParseError::syntax("bad", loc);

        assert_eq!(err.location(), Some(loc));
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.column(), Some(5));
    }

    #[test]
    fn test_display_is_message_only() {
        let err = ParseError::syntax("unclosed quote", Location::new(0, 1, 3));
        assert_eq!(format!("{}", err), "unclosed quote");
    }
}
