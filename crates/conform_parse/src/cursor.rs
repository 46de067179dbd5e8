//! Token cursor for navigating the token stream.

use std::mem;

use tracing::trace;

use crate::lexer::{Token, TokenKind};
use crate::{ParseError, Span};

/// Position in a token list that ends with `Eof`.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// The current token. Past the end this stays on `Eof`.
    #[inline]
    pub(crate) fn current(&self) -> &'a Token {
        static EOF: Token = Token {
            kind: TokenKind::Eof,
            span: Span::new(0, 0),
        };
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub(crate) fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(Span::new(0, 0), |token| token.span)
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Whether the current token has the same kind as `kind`, ignoring payload.
    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        mem::discriminant(self.current_kind()) == mem::discriminant(kind)
    }

    /// Consume and return the current token. `Eof` is never consumed.
    pub(crate) fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or fail, describing it as `expected`.
    pub(crate) fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Error for the current token when `expected` was wanted.
    pub(crate) fn unexpected(&self, expected: &'static str) -> ParseError {
        let token = self.current();
        match &token.kind {
            TokenKind::Eof => ParseError::UnexpectedEof {
                expected,
                span: token.span,
            },
            kind => ParseError::UnexpectedToken {
                expected,
                found: kind.display_name(),
                span: token.span,
            },
        }
    }
}
