//! Tests for CAST expressions and type names.

mod common;
use common::*;

use pretty_assertions::assert_eq;
use vellum_sql_core::ast::{Expr, ValueType};

fn cast(expr: Expr, target: ValueType) -> Expr {
    Expr::Cast {
        expr: Box::new(expr),
        target,
    }
}

#[test]
fn cast_to_each_type() {
    let cases = [
        ("BYTES", ValueType::Blob),
        ("STRING", ValueType::Text),
        ("TEXT", ValueType::Text),
        ("BOOL", ValueType::Bool),
        ("INT8", ValueType::Int8),
        ("INT16", ValueType::Int16),
        ("INT32", ValueType::Int32),
        ("INT64", ValueType::Int64),
        ("INT", ValueType::Int64),
        ("INTEGER", ValueType::Int64),
        ("FLOAT64", ValueType::Float64),
        ("NUMERIC", ValueType::Float64),
        ("DURATION", ValueType::Duration),
    ];

    for (name, target) in cases {
        let input = format!("CAST(a AS {name})");
        assert_eq!(
            parse(&input),
            cast(Expr::field(["a"]), target),
            "input: {input}"
        );
    }
}

#[test]
fn cast_is_case_insensitive() {
    assert_eq!(
        parse("cast(1 as int)"),
        cast(Expr::integer(1), ValueType::Int64)
    );
}

#[test]
fn cast_of_a_path_with_indices() {
    assert_eq!(
        parse("CAST(a.b.1.0 AS TEXT)"),
        cast(Expr::field(["a", "b", "1", "0"]), ValueType::Text)
    );
    round_trip("CAST(a.b.1.0 AS TEXT)");
}

#[test]
fn cast_of_an_expression() {
    let (expr, literal) = parse_expr("CAST(age + 1 AS FLOAT64)");
    assert!(matches!(expr, Expr::Cast { .. }));
    assert_eq!(literal, "CAST(age + 1 AS FLOAT64)");
}

#[test]
fn cast_with_unknown_type_fails() {
    let err = parse_err("CAST(a AS BANANA)");
    assert_eq!(err.expected.as_deref(), Some("type"));
}

#[test]
fn cast_missing_as_fails() {
    let err = parse_err("CAST(a TEXT)");
    assert_eq!(err.expected.as_deref(), Some("AS"));
}

#[test]
fn cast_missing_parenthesis_fails() {
    let _ = parse_err("CAST a AS TEXT");
    let _ = parse_err("CAST(a AS TEXT");
}
