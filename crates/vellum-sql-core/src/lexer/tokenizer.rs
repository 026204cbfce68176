//! Tokenizer for the Vellum document SQL dialect.

use super::{Keyword, Span, Token, TokenKind};

/// A lexer that tokenizes dialect input.
///
/// Whitespace (and comments) are emitted as tokens rather than skipped:
/// the field-reference grammar is whitespace-sensitive, and the parser
/// reconstructs the exact source slice of every expression from token
/// spans.
pub struct Lexer<'a> {
    /// The input source text.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Creates a span from start to current position.
    fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token with the current span.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.make_span())
    }

    /// Returns true if the cursor sits at the start of a comment.
    fn at_comment(&self) -> bool {
        (self.peek() == Some('-') && self.peek_next() == Some('-'))
            || (self.peek() == Some('/') && self.peek_next() == Some('*'))
    }

    /// Scans a contiguous run of whitespace and comments into one token.
    fn scan_whitespace(&mut self) -> Token {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // Single-line comments (-- ...)
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                self.advance();
                self.advance();
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            // Multi-line comments (/* ... */)
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        None => break,
                        _ => {}
                    }
                }
                continue;
            }

            break;
        }

        self.make_token(TokenKind::Whitespace)
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];

        if let Some(keyword) = Keyword::from_str(text) {
            self.make_token(TokenKind::Keyword(keyword))
        } else {
            self.make_token(TokenKind::Identifier(String::from(text)))
        }
    }

    /// Scans a backquoted identifier (e.g. `` `some ident` ``), preserving
    /// interior spaces. A doubled backquote escapes a literal backquote.
    fn scan_quoted_identifier(&mut self) -> Token {
        self.advance(); // consume opening backquote
        let content_start = self.pos;

        loop {
            match self.peek() {
                Some('`') => {
                    if self.peek_next() == Some('`') {
                        self.advance();
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some(_) => {
                    self.advance();
                }
                None => {
                    return self.make_token(TokenKind::Error(String::from(
                        "unterminated quoted identifier",
                    )));
                }
            }
        }

        let content = &self.input[content_start..self.pos];
        self.advance(); // consume closing backquote

        let unescaped = content.replace("``", "`");
        self.make_token(TokenKind::Identifier(unescaped))
    }

    /// Scans a string literal delimited by `quote`. A doubled quote
    /// escapes a literal quote character.
    fn scan_string(&mut self, quote: char) -> Token {
        self.advance(); // consume opening quote
        let mut value = String::new();

        loop {
            match self.peek() {
                Some(c) if c == quote => {
                    if self.peek_next() == Some(quote) {
                        value.push(quote);
                        self.advance();
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
                None => {
                    return self.make_token(TokenKind::Error(String::from(
                        "unterminated string literal",
                    )));
                }
            }
        }

        self.advance(); // consume closing quote
        self.make_token(TokenKind::String(value))
    }

    /// Scans a numeric literal: integer, decimal number, or duration.
    ///
    /// The lexeme may begin with `-` (the sign is absorbed into the
    /// literal) or with `.` (the form a field reference like `a.100`
    /// produces; the lexeme keeps the leading dot). A number never
    /// contains a second dot, so `a.b.1.0` lexes as `.1` then `.0`.
    /// A trailing run of letters turns the literal into a duration
    /// lexeme (e.g. `150ms`, `1h30m`, `1.5h`).
    fn scan_number(&mut self) -> Token {
        let mut is_decimal = false;

        if self.peek() == Some('-') {
            self.advance();
        }

        if self.peek() == Some('.') {
            is_decimal = true;
            self.advance();
        }

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // Decimal point (only one per literal)
        if !is_decimal
            && self.peek() == Some('.')
            && self.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            is_decimal = true;
            self.advance(); // consume .
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // Exponent
        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            let exponent_follows = match self.peek_next() {
                Some(c) if c.is_ascii_digit() => true,
                Some('+' | '-') => {
                    let mut chars = self.input[self.pos..].chars();
                    chars.next();
                    chars.next();
                    chars.next().is_some_and(|c| c.is_ascii_digit())
                }
                _ => false,
            };
            if exponent_follows {
                is_decimal = true;
                self.advance(); // consume e/E
                if self.peek().is_some_and(|c| c == '+' || c == '-') {
                    self.advance();
                }
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            }
        }

        // Unit suffix: the literal becomes a duration lexeme. Consumes
        // alternating digit/letter runs so multi-group forms like 1h30m
        // or 1.5h30m stay a single token.
        if self.peek().is_some_and(char::is_alphabetic) {
            while self.peek().is_some_and(char::is_alphanumeric)
                || (self.peek() == Some('.')
                    && self.peek_next().is_some_and(|c| c.is_ascii_digit()))
            {
                self.advance();
            }
            return self.make_token(TokenKind::Duration);
        }

        if is_decimal {
            self.make_token(TokenKind::Number)
        } else {
            self.make_token(TokenKind::Integer)
        }
    }

    /// Scans a named parameter (`$name`).
    fn scan_named_param(&mut self) -> Token {
        let name_start = self.pos;
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        let name = String::from(&self.input[name_start..self.pos]);
        self.make_token(TokenKind::NamedParam(name))
    }

    /// Scans the next token.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.start = self.pos;

        let c = match self.peek() {
            Some(c) => c,
            None => return self.make_token(TokenKind::Eof),
        };

        if c.is_whitespace() || self.at_comment() {
            return self.scan_whitespace();
        }

        self.advance();

        match c {
            // Single-character tokens
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '[' => self.make_token(TokenKind::LeftBracket),
            ']' => self.make_token(TokenKind::RightBracket),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            ',' => self.make_token(TokenKind::Comma),
            ':' => self.make_token(TokenKind::Colon),
            '+' => self.make_token(TokenKind::Plus),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '%' => self.make_token(TokenKind::Percent),
            '&' => self.make_token(TokenKind::Ampersand),
            '|' => self.make_token(TokenKind::Pipe),
            '^' => self.make_token(TokenKind::Caret),
            '=' => self.make_token(TokenKind::Eq),

            // Parameters
            '?' => self.make_token(TokenKind::Question),
            '$' => self.scan_named_param(),

            // A minus directly attached to a digit is a negative literal,
            // not the subtraction operator.
            '-' => {
                if self.peek().is_some_and(|c| c.is_ascii_digit())
                    || (self.peek() == Some('.')
                        && self.peek_next().is_some_and(|c| c.is_ascii_digit()))
                {
                    self.pos = self.start;
                    self.scan_number()
                } else {
                    self.make_token(TokenKind::Minus)
                }
            }

            // A dot directly followed by a digit starts a number token
            // whose lexeme keeps the dot; the field-reference parser
            // relies on this.
            '.' => {
                if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.pos = self.start;
                    self.scan_number()
                } else {
                    self.make_token(TokenKind::Dot)
                }
            }

            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::LtEq)
                } else {
                    self.make_token(TokenKind::Lt)
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::GtEq)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                } else {
                    self.make_token(TokenKind::Error(String::from("unexpected character: !")))
                }
            }

            // String literals
            '\'' => {
                self.pos = self.start;
                self.scan_string('\'')
            }
            '"' => {
                self.pos = self.start;
                self.scan_string('"')
            }

            // Backquoted identifiers
            '`' => {
                self.pos = self.start;
                self.scan_quoted_identifier()
            }

            // Numbers
            c if c.is_ascii_digit() => {
                self.pos = self.start;
                self.scan_number()
            }

            // Identifiers and keywords
            c if c.is_alphabetic() || c == '_' => {
                self.pos = self.start;
                self.scan_identifier()
            }

            _ => self.make_token(TokenKind::Error(format!("unexpected character: {c}"))),
        }
    }

    /// Tokenizes the entire input and returns all tokens.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}
