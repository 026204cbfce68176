//! Operator precedence for the expression parser.

use crate::ast::BinaryOp;
use crate::lexer::{Keyword, TokenKind};

/// Converts a token to the binary operator it denotes, if any.
#[must_use]
pub(crate) const fn token_to_binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Eq => Some(BinaryOp::Eq),
        TokenKind::NotEq => Some(BinaryOp::NotEq),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::LtEq => Some(BinaryOp::LtEq),
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::GtEq => Some(BinaryOp::GtEq),
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Percent => Some(BinaryOp::Mod),
        TokenKind::Ampersand => Some(BinaryOp::BitAnd),
        TokenKind::Pipe => Some(BinaryOp::BitOr),
        TokenKind::Caret => Some(BinaryOp::BitXor),
        TokenKind::Keyword(Keyword::And) => Some(BinaryOp::And),
        TokenKind::Keyword(Keyword::Or) => Some(BinaryOp::Or),
        TokenKind::Keyword(Keyword::In) => Some(BinaryOp::In),
        TokenKind::Keyword(Keyword::Is) => Some(BinaryOp::Is),
        _ => None,
    }
}

/// Returns the infix binding power for an operator.
///
/// Returns `(left_bp, right_bp)` derived from the operator's precedence
/// tier; `left_bp < right_bp` makes ties left-associative.
#[must_use]
pub(crate) const fn infix_binding_power(op: BinaryOp) -> (u8, u8) {
    let p = op.precedence();
    (2 * p - 1, 2 * p)
}
