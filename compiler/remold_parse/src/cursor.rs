//! Token cursor.
//!
//! Besides navigation, the cursor owns the trivia bookkeeping: `consumed` is
//! the byte offset up to which source text has been attached to the tree.
//! [`Cursor::whitespace`] hands out the gap before the current token as a
//! [`Space`]; [`Cursor::bump`] hands out whatever of that gap is left and
//! steps past the token. No source byte is ever skipped, which is what makes
//! the parse lossless.

use remold_tree::Space;

use crate::lexer::{Token, TokenKind};
use crate::ParseError;

pub(crate) struct Cursor<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    consumed: usize,
}

impl<'src> Cursor<'src> {
    /// `tokens` must end with [`TokenKind::Eof`].
    pub(crate) fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Cursor {
            source,
            tokens,
            pos: 0,
            consumed: 0,
        }
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Token at absolute index `index`, clamped to the trailing EOF.
    #[inline]
    pub(crate) fn token_at(&self, index: usize) -> Token {
        let last = self.tokens.len().saturating_sub(1);
        self.tokens.get(index.min(last)).copied().unwrap_or(Token {
            kind: TokenKind::Eof,
            start: self.source.len(),
            end: self.source.len(),
        })
    }

    #[inline]
    pub(crate) fn kind_at(&self, index: usize) -> TokenKind {
        self.token_at(index).kind
    }

    #[inline]
    pub(crate) fn current(&self) -> Token {
        self.token_at(self.pos)
    }

    #[inline]
    pub(crate) fn peek(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub(crate) fn peek_nth(&self, n: usize) -> TokenKind {
        self.kind_at(self.pos + n)
    }

    #[inline]
    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.peek() == kind
    }

    /// `true` when the token `n` ahead directly follows the one before it.
    pub(crate) fn adjacent(&self, n: usize) -> bool {
        n > 0 && self.token_at(self.pos + n - 1).end == self.token_at(self.pos + n).start
    }

    /// Source text of the current token.
    pub(crate) fn text(&self) -> &'src str {
        let token = self.current();
        self.source.get(token.start..token.end).unwrap_or_default()
    }

    /// Take the trivia before the current token.
    pub(crate) fn whitespace(&mut self) -> Space {
        let end = self.current().start;
        if self.consumed >= end {
            return Space::EMPTY;
        }
        let gap = self.source.get(self.consumed..end).unwrap_or_default();
        self.consumed = end;
        Space::format(gap)
    }

    /// Step past the current token, returning any trivia before it that was
    /// not already taken.
    pub(crate) fn bump(&mut self) -> Space {
        let before = self.whitespace();
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.consumed = token.end;
            self.pos += 1;
        }
        before
    }

    /// Step past a token of `kind`, returning the trivia before it.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Space, ParseError> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(self.error(kind.describe()))
        }
    }

    pub(crate) fn error(&self, expected: &'static str) -> ParseError {
        self.error_at(self.pos, expected)
    }

    /// Error pointing at the token at absolute index `index`.
    pub(crate) fn error_at(&self, index: usize, expected: &'static str) -> ParseError {
        let token = self.token_at(index);
        if token.kind == TokenKind::Eof {
            ParseError::UnexpectedEof { expected }
        } else {
            ParseError::UnexpectedToken {
                expected,
                found: format!(
                    "`{}`",
                    self.source.get(token.start..token.end).unwrap_or_default()
                ),
                offset: token.start,
            }
        }
    }
}
