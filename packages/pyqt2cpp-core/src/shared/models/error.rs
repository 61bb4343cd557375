//! Typed translation errors
//!
//! Both failure modes abort the whole module translation: no partially
//! translated class is ever returned.

use thiserror::Error;

use crate::shared::models::Span;

/// Errors raised while translating a Python module
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Source text is not syntactically valid Python
    #[error("parse error at {line}:{col}: {message}")]
    Parse { message: String, line: u32, col: u32 },

    /// A base class or signal argument expression has no C++ mapping
    #[error("unknown type expression `{text}` at {line}:{col}")]
    UnknownType { text: String, line: u32, col: u32 },

    /// Tree-sitter grammar initialization failed
    #[error("failed to initialize tree-sitter language: {0}")]
    Language(String),
}

impl TranslateError {
    /// Create a parse error located at the start of `span`
    pub fn parse(message: impl Into<String>, span: Span) -> Self {
        Self::Parse {
            message: message.into(),
            line: span.start_line,
            col: span.start_col,
        }
    }

    /// Create an unknown-type error located at the start of `span`
    pub fn unknown_type(text: impl Into<String>, span: Span) -> Self {
        Self::UnknownType {
            text: text.into(),
            line: span.start_line,
            col: span.start_col,
        }
    }

    /// Create a language error
    pub fn language(reason: impl Into<String>) -> Self {
        Self::Language(reason.into())
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse",
            Self::UnknownType { .. } => "unknown_type",
            Self::Language(_) => "language",
        }
    }
}

/// Result type alias for translation operations
pub type Result<T> = std::result::Result<T, TranslateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TranslateError::parse("invalid syntax", Span::new(2, 0, 2, 9));
        assert_eq!(err.to_string(), "parse error at 2:0: invalid syntax");

        let err = TranslateError::unknown_type("sigs[0]", Span::new(4, 21, 4, 28));
        assert_eq!(
            err.to_string(),
            "unknown type expression `sigs[0]` at 4:21"
        );
    }

    #[test]
    fn test_error_category() {
        let err = TranslateError::parse("bad", Span::zero());
        assert_eq!(err.category(), "parse");

        let err = TranslateError::unknown_type("f()", Span::zero());
        assert_eq!(err.category(), "unknown_type");

        let err = TranslateError::language("no grammar");
        assert_eq!(err.category(), "language");
    }
}
