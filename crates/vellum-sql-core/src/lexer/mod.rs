//! Lexer for the Vellum document SQL dialect.
//!
//! A hand-written lexer producing a stream of spanned tokens. Unlike most
//! SQL tokenizers it emits whitespace as tokens: field references such as
//! `a.b.100` are whitespace-sensitive, and the expression parser returns
//! the exact source slice it consumed, so no byte of input may disappear
//! between tokens.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
