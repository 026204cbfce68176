//! # vellum-sql-core
//!
//! Lexer, expression parser, and AST for the Vellum document SQL
//! dialect — the front-end layer the statement parser and planner build
//! on.
//!
//! This crate provides:
//! - A hand-written lexer producing spanned tokens ([`lexer`])
//! - A recursive descent expression parser with precedence climbing
//!   ([`parser`])
//! - The closed expression AST handed to the planner ([`ast`])
//! - A pluggable function registry ([`functions`])
//!
//! ## Parsing an expression
//!
//! ```rust
//! use vellum_sql_core::ast::{BinaryOp, Expr};
//! use vellum_sql_core::Parser;
//!
//! let mut parser = Parser::new("age >= 10 AND name = 'bob'");
//! let (expr, literal) = parser.parse_expr().unwrap();
//!
//! assert_eq!(literal, "age >= 10 AND name = 'bob'");
//! assert!(matches!(
//!     expr,
//!     Expr::Binary {
//!         op: BinaryOp::And,
//!         ..
//!     }
//! ));
//! ```
//!
//! The returned literal is the exact source slice the expression was
//! parsed from, surrounding whitespace trimmed; re-parsing it yields a
//! structurally equal tree.
//!
//! ## Documents, paths, and parameters
//!
//! ```rust
//! use vellum_sql_core::ast::Expr;
//! use vellum_sql_core::Parser;
//!
//! // Nested document and list literals
//! let (expr, _) = Parser::new("{a: 1, tags: ['x', 'y']}").parse_expr().unwrap();
//! assert!(matches!(expr, Expr::KVPairs(pairs) if pairs.len() == 2));
//!
//! // Dotted field references; numeric segments index arrays
//! let (expr, _) = Parser::new("address.lines.0").parse_expr().unwrap();
//! assert_eq!(expr, Expr::field(["address", "lines", "0"]));
//!
//! // Positional bind parameters are numbered in source order
//! let (expr, _) = Parser::new("a = ? AND b = ?").parse_expr().unwrap();
//! assert!(matches!(expr, Expr::Binary { .. }));
//! ```

pub mod ast;
pub mod functions;
pub mod lexer;
pub mod parser;

pub use ast::Expr;
pub use functions::{FunctionRegistry, FunctionResolver, ResolveError};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{ParseError, Parser};
