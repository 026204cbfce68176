//! Tests for parser error cases and error reporting.

mod common;
use common::*;

use vellum_sql_core::lexer::TokenKind;

#[test]
fn error_empty_input() {
    let err = parse_err("");
    assert_eq!(err.found, Some(TokenKind::Eof));
}

#[test]
fn error_whitespace_only_input() {
    let _ = parse_err("   \n\t ");
}

#[test]
fn error_expected_primary() {
    let err = parse_err(", 1");
    assert_eq!(
        err.expected.as_deref(),
        Some("identifier, string, number, or bool")
    );
    assert_eq!(err.found, Some(TokenKind::Comma));
}

#[test]
fn error_dangling_operator() {
    let _ = parse_err("age = ");
    let _ = parse_err("AND");
}

#[test]
fn error_position_points_at_offender() {
    let err = parse_err("age = ]");
    assert_eq!(err.span.start, 6);
    assert_eq!(err.span.end, 7);
}

#[test]
fn error_unclosed_document() {
    let _ = parse_err("{a: 1");
}

#[test]
fn error_unclosed_lists() {
    let _ = parse_err("(1, 2");
    let _ = parse_err("[1, 2");
}

#[test]
fn error_unterminated_string_propagates_from_lexer() {
    let err = parse_err("age = 'oops");
    assert_eq!(err.message, "unterminated string literal");
}

#[test]
fn error_unterminated_quoted_identifier() {
    let err = parse_err("`oops");
    assert_eq!(err.message, "unterminated quoted identifier");
}

#[test]
fn error_unexpected_character() {
    let err = parse_err("@");
    assert_eq!(err.message, "unexpected character: @");
}

#[test]
fn error_bare_bang() {
    let err = parse_err("! a");
    assert_eq!(err.message, "unexpected character: !");
}

#[test]
fn error_aborts_at_first_failure() {
    // The bad segment reports; nothing after it is considered
    let err = parse_err("a.-1 AND b");
    assert!(err.message.contains("array index or identifier"));
}
