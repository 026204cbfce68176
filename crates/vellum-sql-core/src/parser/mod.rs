//! Expression parser for the Vellum document SQL dialect.
//!
//! A hand-written recursive descent parser that turns the token stream
//! into a typed expression tree, together with the exact source slice
//! each expression was parsed from.
//!
//! # Expressions
//!
//! - **Literals**: integers (with silent promotion to float when the
//!   value exceeds the 64-bit signed range), floats, strings (single or
//!   double quoted), booleans (`TRUE`/`FALSE`), `NULL`, and durations
//!   (`150ms`, `-1.5h`, `1h30m`)
//! - **Field references**: dotted paths into nested documents and
//!   arrays (`a.b.100.c`), with backquoted segments for identifiers
//!   containing spaces; numeric segments are array indices
//! - **Document literals**: `{key: expr, "other key": expr, ...}` with
//!   duplicate keys preserved in insertion order
//! - **List literals**: `(expr, ...)` and `[expr, ...]`
//! - **Binary operators**: `*`, `/`, `%`, then `+`, `-`, then `&`, `|`,
//!   `^`, then `=`, `!=`, `<`, `<=`, `>`, `>=`, `IN`, `IS`, then `AND`,
//!   then `OR` (tightest first; ties are left-associative)
//! - **Function calls**: `name(expr, ...)` resolved through a
//!   [`FunctionResolver`](crate::functions::FunctionResolver); `pk()`
//!   references the record's primary key
//! - **Conversions**: `CAST(expr AS type)`
//! - **Bind parameters**: positional (`?`, numbered from 1 in source
//!   order) and named (`$name`); the two styles cannot be mixed within
//!   one statement
//!
//! A leading minus directly attached to a numeric literal is absorbed
//! into the literal itself (`-10` is the integer −10, not a negation of
//! 10), so the dialect has no unary operators.
//!
//! # Literal slices
//!
//! [`Parser::parse_expr`] returns, alongside the tree, the input slice
//! the expression was parsed from with surrounding whitespace trimmed.
//! Re-parsing that slice yields a structurally equal tree.

mod core;
mod duration;
mod error;
mod pratt;
mod source;

pub use self::core::Parser;
pub use error::ParseError;
