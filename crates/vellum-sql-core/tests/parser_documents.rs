//! Tests for document and list literals.

mod common;
use common::*;

use pretty_assertions::assert_eq;
use vellum_sql_core::ast::{Expr, KVPair};

#[test]
fn document_empty() {
    assert_eq!(parse("{}"), Expr::KVPairs(Vec::new()));
}

#[test]
fn document_values_of_every_kind() {
    let input = "{a: 1, b: 1.0, c: true, d: 'string', e: \"string\", f: {foo: 'bar'}, g: h.i.j, k: [1, 2, 3]}";
    assert_eq!(
        parse(input),
        Expr::KVPairs(vec![
            KVPair::new("a", Expr::integer(1)),
            KVPair::new("b", Expr::float(1.0)),
            KVPair::new("c", Expr::boolean(true)),
            KVPair::new("d", Expr::text("string")),
            KVPair::new("e", Expr::text("string")),
            KVPair::new(
                "f",
                Expr::KVPairs(vec![KVPair::new("foo", Expr::text("bar"))])
            ),
            KVPair::new("g", Expr::field(["h", "i", "j"])),
            KVPair::new(
                "k",
                Expr::List(vec![
                    Expr::integer(1),
                    Expr::integer(2),
                    Expr::integer(3)
                ])
            ),
        ])
    );
    round_trip(input);
}

#[test]
fn document_string_keys() {
    assert_eq!(
        parse("{a: 1, \"foo bar __&&))\": 1, 'ola ': 1}"),
        Expr::KVPairs(vec![
            KVPair::new("a", Expr::integer(1)),
            KVPair::new("foo bar __&&))", Expr::integer(1)),
            KVPair::new("ola ", Expr::integer(1)),
        ])
    );
}

#[test]
fn document_duplicate_keys_preserved_in_order() {
    assert_eq!(
        parse("{a: 1, a: 2, \"a\": 3}"),
        Expr::KVPairs(vec![
            KVPair::new("a", Expr::integer(1)),
            KVPair::new("a", Expr::integer(2)),
            KVPair::new("a", Expr::integer(3)),
        ])
    );
}

#[test]
fn document_bad_key_param() {
    let _ = parse_err("{?: 1}");
}

#[test]
fn document_bad_key_dotted() {
    let _ = parse_err("{a.b: 1}");
}

#[test]
fn document_bad_key_with_space() {
    let _ = parse_err("{a b: 1}");
}

#[test]
fn document_missing_right_brace() {
    let err = parse_err("{a: 1");
    assert_eq!(err.expected.as_deref(), Some("}"));
}

#[test]
fn document_missing_colon() {
    let _ = parse_err("{a: 1, 'b'}");
}

#[test]
fn list_with_parentheses_empty() {
    assert_eq!(parse("()"), Expr::List(Vec::new()));
}

#[test]
fn list_with_parentheses_values() {
    assert_eq!(
        parse("(1, true, {a: 1}, a.b.c, (-1), [-1])"),
        Expr::List(vec![
            Expr::integer(1),
            Expr::boolean(true),
            Expr::KVPairs(vec![KVPair::new("a", Expr::integer(1))]),
            Expr::field(["a", "b", "c"]),
            Expr::List(vec![Expr::integer(-1)]),
            Expr::List(vec![Expr::integer(-1)]),
        ])
    );
}

#[test]
fn list_with_parentheses_missing_close() {
    let _ = parse_err("(1, true, {a: 1}, a.b.c, (-1)");
}

#[test]
fn list_with_brackets_empty() {
    assert_eq!(parse("[]"), Expr::List(Vec::new()));
}

#[test]
fn list_with_brackets_values() {
    assert_eq!(
        parse("[1, true, {a: 1}, a.b.c, (-1), [-1]]"),
        Expr::List(vec![
            Expr::integer(1),
            Expr::boolean(true),
            Expr::KVPairs(vec![KVPair::new("a", Expr::integer(1))]),
            Expr::field(["a", "b", "c"]),
            Expr::List(vec![Expr::integer(-1)]),
            Expr::List(vec![Expr::integer(-1)]),
        ])
    );
}

#[test]
fn list_with_brackets_missing_close() {
    let _ = parse_err("[1, true, {a: 1}, a.b.c, (-1), [-1]");
}

#[test]
fn nested_literals_round_trip() {
    round_trip("{a: {b: [1, 2, {c: 3}]}}");
    round_trip("[(), [], {}]");
}
