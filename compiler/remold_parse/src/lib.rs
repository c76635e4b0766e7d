//! Lossless recursive descent parser for the Java subset `remold` formats.
//!
//! Produces a [`J::CompilationUnit`] that prints back to its input byte for
//! byte: every gap between tokens is attached to the tree as a
//! [`Space`](remold_tree::Space).
//!
//! # Design
//!
//! The outermost node owns the leading trivia. Left-recursive constructs
//! (binary operators, member selects, postfix operators, assignments) lift
//! the prefix off their first operand when they wrap it.
//!
//! Statements never consume their own `;`. The enclosing list does, storing
//! the space before it as the statement's right padding, which is where the
//! printer puts it back.

mod cursor;
mod error;
mod grammar;
pub mod lexer;

use remold_tree::{Space, J};

use cursor::Cursor;
pub use error::ParseError;
use lexer::{Token, TokenKind};

/// Parse a compilation unit.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<J, ParseError> {
    let tokens = lexer::lex(source)?;
    tracing::trace!(tokens = tokens.len(), "lexed");
    let mut parser = Parser::new(source, tokens);
    let unit = parser.parse_compilation_unit();
    if let Err(error) = &unit {
        tracing::debug!(%error, "parse failed");
    }
    unit
}

/// Parse a single expression, e.g. for building replacement trees.
pub fn parse_expression(source: &str) -> Result<J, ParseError> {
    let mut parser = Parser::new(source, lexer::lex(source)?);
    let expression = parser.parse_expression()?;
    parser.finish(expression)
}

/// Parse a single statement, including its `;` if it needs one.
///
/// The `;` is consumed but not kept: in a tree the block (or padded slot)
/// holding a statement prints it, so a bare statement prints without one.
pub fn parse_statement(source: &str) -> Result<J, ParseError> {
    let mut parser = Parser::new(source, lexer::lex(source)?);
    let statement = parser.parse_statement()?;
    if remold_tree::needs_semicolon(&statement) {
        // The snippet's `;` has nowhere to live on a bare statement.
        parser.cursor.expect(TokenKind::Semicolon)?;
    }
    parser.finish(statement)
}

/// Parser state.
pub(crate) struct Parser<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Parser {
            cursor: Cursor::new(source, tokens),
        }
    }

    /// Require end of input after a snippet. Trailing trivia is dropped.
    fn finish(&mut self, tree: J) -> Result<J, ParseError> {
        if self.at(TokenKind::Eof) {
            Ok(tree)
        } else {
            Err(self.cursor.error("end of input"))
        }
    }

    // Cursor delegation.

    #[inline]
    fn peek(&self) -> TokenKind {
        self.cursor.peek()
    }

    #[inline]
    fn peek_nth(&self, n: usize) -> TokenKind {
        self.cursor.peek_nth(n)
    }

    #[inline]
    fn at(&self, kind: TokenKind) -> bool {
        self.cursor.at(kind)
    }

    #[inline]
    fn whitespace(&mut self) -> Space {
        self.cursor.whitespace()
    }

    #[inline]
    fn bump(&mut self) -> Space {
        self.cursor.bump()
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind) -> Result<Space, ParseError> {
        self.cursor.expect(kind)
    }
}

#[cfg(test)]
mod tests;
