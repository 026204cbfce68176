#![allow(dead_code)]

use vellum_sql_core::{Expr, ParseError, Parser};

pub fn parse_expr(input: &str) -> (Expr, String) {
    Parser::new(input)
        .parse_expr()
        .unwrap_or_else(|e| panic!("failed to parse: {input}\nerror: {e}"))
}

pub fn parse(input: &str) -> Expr {
    parse_expr(input).0
}

pub fn parse_err(input: &str) -> ParseError {
    Parser::new(input)
        .parse_expr()
        .map(|(expr, _)| expr)
        .expect_err(&format!("expected parse error for: {input}"))
}

/// Verifies the literal-slice contract: re-parsing the returned slice
/// yields a structurally equal tree and the same slice again.
pub fn round_trip(input: &str) {
    let (expr1, literal1) = parse_expr(input);
    let (expr2, literal2) = parse_expr(&literal1);
    assert_eq!(
        expr1, expr2,
        "round-trip changed the tree.\n  input:   {input}\n  literal: {literal1}"
    );
    assert_eq!(
        literal1, literal2,
        "round-trip changed the literal.\n  input: {input}"
    );
}
