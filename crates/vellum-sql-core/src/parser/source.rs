//! Token source adapter: pushback and literal capture.

use crate::lexer::{Lexer, Span, Token, TokenKind};

/// Literal-capture state: the byte range of the source consumed since
/// capture began. Rewinding on `unscan` keeps the range aligned with the
/// tokens the parser actually kept.
struct Capture {
    start: Option<usize>,
    end: usize,
    prev_ends: [usize; 2],
}

/// A pull-based token source wrapping the lexer.
///
/// Keeps the last two scanned tokens so the parser can push back up to
/// two of them (the identifier/function-call disambiguation re-reads an
/// identifier through a double pushback).
pub(crate) struct TokenSource<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
    /// Most recently scanned tokens, newest first.
    buf: [Token; 2],
    /// How many of `buf` hold real tokens.
    buffered: usize,
    /// How many tokens are currently pushed back.
    unread: usize,
    capture: Option<Capture>,
}

impl<'a> TokenSource<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        let placeholder = Token::new(TokenKind::Eof, Span::new(0, 0));
        Self {
            input,
            lexer: Lexer::new(input),
            buf: [placeholder.clone(), placeholder],
            buffered: 0,
            unread: 0,
            capture: None,
        }
    }

    /// Returns the raw lexeme of a token.
    pub(crate) fn text(&self, token: &Token) -> &'a str {
        &self.input[token.span.start..token.span.end]
    }

    /// Returns the next token, whitespace included.
    pub(crate) fn scan(&mut self) -> Token {
        let token = if self.unread > 0 {
            self.unread -= 1;
            self.buf[self.unread].clone()
        } else {
            let token = self.lexer.next_token();
            self.buf.swap(0, 1);
            self.buf[0] = token.clone();
            if self.buffered < 2 {
                self.buffered += 1;
            }
            token
        };

        if let Some(cap) = &mut self.capture {
            cap.prev_ends[1] = cap.prev_ends[0];
            cap.prev_ends[0] = cap.end;
            if cap.start.is_none() {
                cap.start = Some(token.span.start);
            }
            cap.end = token.span.end;
        }

        token
    }

    /// Returns the next non-whitespace token.
    pub(crate) fn scan_skip_ws(&mut self) -> Token {
        loop {
            let token = self.scan();
            if !token.is_whitespace() {
                return token;
            }
        }
    }

    /// Pushes the most recently scanned token back; the next `scan`
    /// returns it again. At most two consecutive pushbacks are supported.
    pub(crate) fn unscan(&mut self) {
        debug_assert!(self.unread < self.buffered, "unscan without a scanned token");
        self.unread += 1;

        if let Some(cap) = &mut self.capture {
            cap.end = cap.prev_ends[0];
            cap.prev_ends[0] = cap.prev_ends[1];
        }
    }

    /// Starts mirroring consumed source bytes into the capture range.
    pub(crate) fn begin_capture(&mut self) {
        self.capture = Some(Capture {
            start: None,
            end: 0,
            prev_ends: [0, 0],
        });
    }

    /// Stops capturing.
    pub(crate) fn end_capture(&mut self) {
        self.capture = None;
    }

    /// Returns true while a capture is active.
    pub(crate) fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// Returns the source slice consumed since capture began.
    pub(crate) fn literal(&self) -> &'a str {
        match &self.capture {
            Some(cap) => match cap.start {
                Some(start) if cap.end > start => &self.input[start..cap.end],
                _ => "",
            },
            None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_and_unscan() {
        let mut src = TokenSource::new("a b");
        let a = src.scan();
        assert!(matches!(&a.kind, TokenKind::Identifier(s) if s == "a"));
        src.unscan();
        let a2 = src.scan();
        assert_eq!(a, a2);
    }

    #[test]
    fn test_double_unscan() {
        let mut src = TokenSource::new("f(x)");
        let f = src.scan();
        let paren = src.scan();
        assert!(matches!(paren.kind, TokenKind::LeftParen));
        src.unscan();
        src.unscan();
        assert_eq!(src.scan(), f);
        assert_eq!(src.scan(), paren);
    }

    #[test]
    fn test_scan_skip_ws() {
        let mut src = TokenSource::new("a   b");
        src.scan();
        let b = src.scan_skip_ws();
        assert!(matches!(&b.kind, TokenKind::Identifier(s) if s == "b"));
    }

    #[test]
    fn test_capture_tracks_consumed_slice() {
        let mut src = TokenSource::new("  age >= 10");
        src.begin_capture();
        src.scan_skip_ws(); // age
        src.scan_skip_ws(); // >=
        src.scan_skip_ws(); // 10
        assert_eq!(src.literal().trim(), "age >= 10");
    }

    #[test]
    fn test_capture_rewinds_on_unscan() {
        let mut src = TokenSource::new("10 AND");
        src.begin_capture();
        src.scan_skip_ws(); // 10
        src.scan_skip_ws(); // AND
        src.unscan();
        assert_eq!(src.literal().trim(), "10");
    }
}
