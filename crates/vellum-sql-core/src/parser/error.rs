//! Parser error types.

use thiserror::Error;

use crate::lexer::{Span, TokenKind};

/// A parse error.
///
/// The first error aborts parsing; no partial expression is returned.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} at position {}..{}", .span.start, .span.end)]
pub struct ParseError {
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// Expected tokens (if applicable).
    pub expected: Option<String>,
    /// The actual token found.
    pub found: Option<TokenKind>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            expected: None,
            found: None,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: TokenKind, span: Span) -> Self {
        let expected: String = expected.into();
        Self {
            message: format!("unexpected token: expected {expected}, found {found}"),
            span,
            expected: Some(expected),
            found: Some(found),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_position() {
        let err = ParseError::new("unable to parse integer", Span::new(3, 7));
        assert_eq!(err.to_string(), "unable to parse integer at position 3..7");
    }

    #[test]
    fn test_unexpected_records_fragments() {
        let err = ParseError::unexpected("}", TokenKind::Eof, Span::new(5, 5));
        assert_eq!(err.expected.as_deref(), Some("}"));
        assert_eq!(err.found, Some(TokenKind::Eof));
        assert!(err.message.contains("expected }"));
    }
}
