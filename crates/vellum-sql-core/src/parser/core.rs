//! Expression parser implementation.

use crate::ast::{Expr, KVPair, ValueType};
use crate::functions::{FunctionRegistry, FunctionResolver};
use crate::lexer::{Keyword, Span, Token, TokenKind};

use super::duration::parse_duration;
use super::error::ParseError;
use super::pratt::{infix_binding_power, token_to_binary_op};
use super::source::TokenSource;

/// Expression parser for the Vellum dialect.
///
/// A parser owns its token source and its bind-parameter accounting.
/// Successive [`parse_expr`](Parser::parse_expr) calls continue in the
/// same input and share parameter state, so positional parameters stay
/// contiguously numbered across the expressions of one statement.
pub struct Parser<'a> {
    src: TokenSource<'a>,
    resolver: &'a dyn FunctionResolver,
    named_params: usize,
    positional_params: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser over the given input, using the built-in
    /// function registry.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_resolver(input, &FunctionRegistry)
    }

    /// Creates a new parser with a caller-supplied function resolver.
    #[must_use]
    pub fn with_resolver(input: &'a str, resolver: &'a dyn FunctionResolver) -> Self {
        Self {
            src: TokenSource::new(input),
            resolver,
            named_params: 0,
            positional_params: 0,
        }
    }

    /// Parses one expression.
    ///
    /// Returns the expression tree together with the exact source slice
    /// it was parsed from, surrounding whitespace trimmed. Parsing stops
    /// at the first token that cannot extend the expression; that token
    /// is left for the caller.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on the first syntactic error; there is
    /// no recovery.
    pub fn parse_expr(&mut self) -> Result<(Expr, String), ParseError> {
        let top_level = !self.src.is_capturing();
        if top_level {
            self.src.begin_capture();
        }

        let result = self.parse_binary_expr(0);
        let literal = self.src.literal().trim().to_string();

        if top_level {
            self.src.end_capture();
        }

        result.map(|expr| (expr, literal))
    }

    /// Parses a sequence of unary expressions joined by binary operators,
    /// folding them by precedence. `min_bp` is the minimum binding power
    /// an operator must have to be consumed at this level.
    fn parse_binary_expr(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_unary_expr()?;

        loop {
            let token = self.src.scan_skip_ws();
            let Some(op) = token_to_binary_op(&token.kind) else {
                self.src.unscan();
                break;
            };

            let (l_bp, r_bp) = infix_binding_power(op);
            if l_bp < min_bp {
                self.src.unscan();
                break;
            }

            let rhs = self.parse_binary_expr(r_bp)?;
            lhs = lhs.binary(op, rhs);
        }

        Ok(lhs)
    }

    /// Parses a non-binary expression.
    fn parse_unary_expr(&mut self) -> Result<Expr, ParseError> {
        let token = self.src.scan_skip_ws();

        match &token.kind {
            TokenKind::Keyword(Keyword::Cast) => {
                self.src.unscan();
                self.parse_cast_expression()
            }

            TokenKind::Identifier(_) => {
                // A left parenthesis directly after the identifier makes
                // this a function call; anything else, a field reference.
                // Both subparsers re-read the identifier.
                let next = self.src.scan();
                let is_call = matches!(next.kind, TokenKind::LeftParen);
                self.src.unscan();
                self.src.unscan();
                if is_call {
                    self.parse_function()
                } else {
                    Ok(Expr::FieldSelector(self.parse_field_ref()?))
                }
            }

            TokenKind::NamedParam(name) => {
                if name.is_empty() {
                    return Err(ParseError::new("missing param name", token.span));
                }
                if self.positional_params > 0 {
                    return Err(ParseError::new(
                        "can't mix positional arguments with named arguments",
                        token.span,
                    ));
                }
                self.named_params += 1;
                Ok(Expr::NamedParam(name.clone()))
            }

            TokenKind::Question => {
                if self.named_params > 0 {
                    return Err(ParseError::new(
                        "can't mix positional arguments with named arguments",
                        token.span,
                    ));
                }
                self.positional_params += 1;
                Ok(Expr::PositionalParam(self.positional_params))
            }

            TokenKind::String(s) => Ok(Expr::text(s.clone())),

            TokenKind::Number => {
                let lexeme = self.src.text(&token);
                match lexeme.parse::<f64>() {
                    Ok(v) => Ok(Expr::float(v)),
                    Err(_) => Err(ParseError::new("unable to parse number", token.span)),
                }
            }

            TokenKind::Integer => {
                let lexeme = self.src.text(&token);
                match lexeme.parse::<i64>() {
                    Ok(v) => Ok(Expr::integer(v)),
                    // The literal may be too large to fit an i64; retry
                    // as a float
                    Err(_) => match lexeme.parse::<f64>() {
                        Ok(v) => Ok(Expr::float(v)),
                        Err(_) => Err(ParseError::new("unable to parse integer", token.span)),
                    },
                }
            }

            TokenKind::Keyword(Keyword::True) => Ok(Expr::boolean(true)),
            TokenKind::Keyword(Keyword::False) => Ok(Expr::boolean(false)),
            TokenKind::Keyword(Keyword::Null) => Ok(Expr::null()),

            TokenKind::Duration => {
                let lexeme = self.src.text(&token);
                match parse_duration(lexeme) {
                    Some(nanos) => Ok(Expr::duration(nanos)),
                    None => Err(ParseError::new("unable to parse duration", token.span)),
                }
            }

            TokenKind::LeftBrace => {
                self.src.unscan();
                self.parse_document()
            }

            TokenKind::LeftBracket => {
                self.src.unscan();
                self.parse_expr_list(TokenKind::LeftBracket, TokenKind::RightBracket)
            }

            TokenKind::LeftParen => {
                self.src.unscan();
                self.parse_expr_list(TokenKind::LeftParen, TokenKind::RightParen)
            }

            TokenKind::Error(msg) => Err(ParseError::new(msg.clone(), token.span)),

            kind => Err(ParseError::unexpected(
                "identifier, string, number, or bool",
                kind.clone(),
                token.span,
            )),
        }
    }

    /// Parses an identifier.
    fn parse_ident(&mut self) -> Result<String, ParseError> {
        let token = self.src.scan_skip_ws();
        match token.kind {
            TokenKind::Identifier(name) => Ok(name),
            kind => Err(ParseError::unexpected("identifier", kind, token.span)),
        }
    }

    /// Parses a field reference: `ident ( '.' ident | '.'number )*`.
    ///
    /// The reference is whitespace-sensitive, so this reads raw tokens.
    /// Array indices arrive as number tokens whose lexeme begins with a
    /// dot (`a.100` lexes as `a` then `.100`); the dot is stripped and
    /// the digits become a segment, stored as a string.
    fn parse_field_ref(&mut self) -> Result<Vec<String>, ParseError> {
        let mut path = vec![self.parse_ident()?];

        loop {
            let token = self.src.scan();
            match &token.kind {
                TokenKind::Dot => {
                    let next = self.src.scan();
                    match next.kind {
                        TokenKind::Identifier(name) => path.push(name),
                        kind => {
                            return Err(ParseError::unexpected(
                                "array index or identifier",
                                kind,
                                next.span,
                            ));
                        }
                    }
                }
                TokenKind::Number => {
                    let lexeme = self.src.text(&token);
                    match lexeme.strip_prefix('.') {
                        Some(index) => path.push(String::from(index)),
                        None => {
                            self.src.unscan();
                            break;
                        }
                    }
                }
                _ => {
                    self.src.unscan();
                    break;
                }
            }
        }

        Ok(path)
    }

    /// Parses a document literal: `'{' (kv (',' kv)*)? '}'`.
    ///
    /// Duplicate keys are kept in insertion order. A failed pair parse
    /// ends the loop; the required closing brace then reports the error.
    fn parse_document(&mut self) -> Result<Expr, ParseError> {
        self.expect(TokenKind::LeftBrace)?;

        let mut pairs = Vec::new();

        loop {
            match self.parse_kv() {
                Ok(pair) => pairs.push(pair),
                Err(_) => {
                    self.src.unscan();
                    break;
                }
            }

            let token = self.src.scan_skip_ws();
            if !matches!(token.kind, TokenKind::Comma) {
                self.src.unscan();
                break;
            }
        }

        self.expect(TokenKind::RightBrace)?;
        Ok(Expr::KVPairs(pairs))
    }

    /// Parses a key-value pair: `(ident | string) ':' expr`.
    fn parse_kv(&mut self) -> Result<KVPair, ParseError> {
        let token = self.src.scan_skip_ws();
        let key = match token.kind {
            TokenKind::Identifier(name) => name,
            TokenKind::String(s) => s,
            kind => {
                return Err(ParseError::unexpected("ident or string", kind, token.span));
            }
        };

        let token = self.src.scan_skip_ws();
        if !matches!(token.kind, TokenKind::Colon) {
            self.src.unscan();
            return Err(ParseError::unexpected(":", token.kind, token.span));
        }

        let (value, _) = self.parse_expr()?;
        Ok(KVPair::new(key, value))
    }

    /// Parses a list literal bracketed by the given tokens: zero or more
    /// comma-separated expressions.
    fn parse_expr_list(&mut self, left: TokenKind, right: TokenKind) -> Result<Expr, ParseError> {
        self.expect(left)?;

        let mut exprs = Vec::new();

        loop {
            match self.parse_expr() {
                Ok((expr, _)) => exprs.push(expr),
                Err(_) => {
                    self.src.unscan();
                    break;
                }
            }

            let token = self.src.scan_skip_ws();
            if !matches!(token.kind, TokenKind::Comma) {
                self.src.unscan();
                break;
            }
        }

        self.expect(right)?;
        Ok(Expr::List(exprs))
    }

    /// Parses a function call: `ident '(' (expr (',' expr)*)? ')'`,
    /// resolved through the function resolver.
    fn parse_function(&mut self) -> Result<Expr, ParseError> {
        let token = self.src.scan_skip_ws();
        let (name, name_span) = match token.kind {
            TokenKind::Identifier(name) => (name, token.span),
            kind => return Err(ParseError::unexpected("identifier", kind, token.span)),
        };

        self.expect(TokenKind::LeftParen)?;

        // Zero-argument form
        let token = self.src.scan_skip_ws();
        if matches!(token.kind, TokenKind::RightParen) {
            return self.resolve_function(&name, Vec::new(), name_span);
        }
        self.src.unscan();

        let mut args = Vec::new();
        loop {
            let (expr, _) = self.parse_expr()?;
            args.push(expr);

            let token = self.src.scan_skip_ws();
            if !matches!(token.kind, TokenKind::Comma) {
                self.src.unscan();
                break;
            }
        }

        self.expect(TokenKind::RightParen)?;
        self.resolve_function(&name, args, name_span)
    }

    fn resolve_function(
        &mut self,
        name: &str,
        args: Vec<Expr>,
        span: Span,
    ) -> Result<Expr, ParseError> {
        self.resolver
            .resolve(name, args)
            .map_err(|err| ParseError::new(err.to_string(), span))
    }

    /// Parses a CAST expression: `CAST '(' expr 'AS' type ')'`.
    fn parse_cast_expression(&mut self) -> Result<Expr, ParseError> {
        self.expect_keyword(Keyword::Cast)?;
        self.expect(TokenKind::LeftParen)?;

        let (expr, _) = self.parse_expr()?;

        self.expect_keyword(Keyword::As)?;
        let target = self.parse_type()?;
        self.expect(TokenKind::RightParen)?;

        Ok(Expr::Cast {
            expr: Box::new(expr),
            target,
        })
    }

    /// Parses a type name (CAST target).
    fn parse_type(&mut self) -> Result<ValueType, ParseError> {
        let token = self.src.scan_skip_ws();
        match token.as_keyword() {
            Some(Keyword::Bytes) => Ok(ValueType::Blob),
            Some(Keyword::String | Keyword::Text) => Ok(ValueType::Text),
            Some(Keyword::Bool) => Ok(ValueType::Bool),
            Some(Keyword::Int8) => Ok(ValueType::Int8),
            Some(Keyword::Int16) => Ok(ValueType::Int16),
            Some(Keyword::Int32) => Ok(ValueType::Int32),
            Some(Keyword::Int64 | Keyword::Int | Keyword::Integer) => Ok(ValueType::Int64),
            Some(Keyword::Float64 | Keyword::Numeric) => Ok(ValueType::Float64),
            Some(Keyword::Duration) => Ok(ValueType::Duration),
            _ => Err(ParseError::unexpected("type", token.kind, token.span)),
        }
    }

    // --- Helper methods ---

    /// Expects the next non-whitespace token to be of the given kind.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        let token = self.src.scan_skip_ws();
        if core::mem::discriminant(&token.kind) == core::mem::discriminant(&kind) {
            Ok(token)
        } else {
            Err(ParseError::unexpected(
                kind.to_string(),
                token.kind,
                token.span,
            ))
        }
    }

    /// Expects the next non-whitespace token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<Token, ParseError> {
        let token = self.src.scan_skip_ws();
        if token.as_keyword() == Some(keyword) {
            Ok(token)
        } else {
            Err(ParseError::unexpected(
                keyword.as_str(),
                token.kind,
                token.span,
            ))
        }
    }
}
