//! Grammar modules.
//!
//! Each module extends `Parser` with the productions for one part of the
//! language:
//!
//! - [`item`]: compilation units, classes, members, annotations
//! - [`stmt`]: blocks and statements
//! - [`expr`]: expressions, from assignment down to primaries
//! - [`ty`]: type expressions and type parameter lists
//!
//! This module holds the pieces they share: token lookahead for the
//! ambiguous spots of the grammar and the delimited-list helper.

mod expr;
mod item;
mod stmt;
mod ty;

use remold_tree::{Container, Empty, Identifier, RightPadded, Space, J};

use crate::lexer::TokenKind;
use crate::{ParseError, Parser};

/// Split a node into its prefix and the node without it, for wrapping it in
/// a node that starts at the same token.
fn lift(tree: J) -> (Space, J) {
    let prefix = tree.prefix().clone();
    (prefix, tree.with_prefix(Space::EMPTY))
}

impl Parser<'_> {
    /// Identifier with its prefix.
    fn ident(&mut self) -> Result<J, ParseError> {
        if !self.at(TokenKind::Identifier) {
            return Err(self.cursor.error("identifier"));
        }
        let prefix = self.whitespace();
        let name = self.cursor.text().to_string();
        self.bump();
        Ok(Identifier::build(prefix, name).into())
    }

    /// The current token's text as an identifier, whatever its kind
    /// (`this`, `class`, `*`).
    fn name_token(&mut self) -> J {
        let prefix = self.whitespace();
        let name = self.cursor.text().to_string();
        self.bump();
        Identifier::build(prefix, name).into()
    }

    /// `open element (, element)* close`, with `before` the space before
    /// `open`. `()` holds a single [`Empty`] carrying the inner space; a
    /// trailing comma leaves an [`Empty`] last element.
    fn delimited(
        &mut self,
        open: TokenKind,
        close: TokenKind,
        mut element: impl FnMut(&mut Self) -> Result<J, ParseError>,
    ) -> Result<Container<J>, ParseError> {
        let before = self.expect(open)?;
        let mut elements = Vec::new();
        if self.at(close) {
            elements.push(RightPadded::build(Empty::build(self.whitespace()).into()));
        } else {
            loop {
                let tree = element(self)?;
                let after = self.whitespace();
                elements.push(RightPadded::new(tree, after));
                if !self.at(TokenKind::Comma) {
                    break;
                }
                self.bump();
                if self.at(close) {
                    elements.push(RightPadded::build(Empty::build(self.whitespace()).into()));
                    break;
                }
            }
        }
        self.expect(close)?;
        Ok(Container::new(before, elements))
    }

    /// Types separated by `separator`, after a keyword such as `implements`.
    /// The last element's padding is left to whatever follows.
    fn type_list(&mut self, before: Space, separator: TokenKind) -> Result<Container<J>, ParseError> {
        let mut elements = Vec::new();
        loop {
            let ty = self.parse_type()?;
            if self.at(separator) {
                let after = self.whitespace();
                self.bump();
                elements.push(RightPadded::new(ty, after));
            } else {
                elements.push(RightPadded::build(ty));
                break;
            }
        }
        Ok(Container::new(before, elements))
    }

    // === Lookahead ===

    /// Index just past a type starting at token `index`, if one is there.
    fn scan_type(&self, mut index: usize) -> Option<usize> {
        let kind = self.cursor.kind_at(index);
        if kind.primitive().is_some() {
            index += 1;
        } else if kind == TokenKind::Identifier {
            index += 1;
            loop {
                if self.cursor.kind_at(index) == TokenKind::Lt {
                    index = self.scan_type_arguments(index)?;
                }
                if self.cursor.kind_at(index) == TokenKind::Dot
                    && self.cursor.kind_at(index + 1) == TokenKind::Identifier
                {
                    index += 2;
                } else {
                    break;
                }
            }
        } else {
            return None;
        }
        while self.cursor.kind_at(index) == TokenKind::LBracket
            && self.cursor.kind_at(index + 1) == TokenKind::RBracket
        {
            index += 2;
        }
        Some(index)
    }

    /// Index just past `<...>` starting at `index`, if it can be type
    /// arguments.
    fn scan_type_arguments(&self, index: usize) -> Option<usize> {
        let mut depth = 0usize;
        let mut i = index;
        loop {
            match self.cursor.kind_at(i) {
                TokenKind::Lt => depth += 1,
                TokenKind::Gt => {
                    depth = depth.checked_sub(1)?;
                    if depth == 0 {
                        return Some(i + 1);
                    }
                }
                TokenKind::Identifier
                | TokenKind::Dot
                | TokenKind::Comma
                | TokenKind::Question
                | TokenKind::Extends
                | TokenKind::Super
                | TokenKind::Amp
                | TokenKind::LBracket
                | TokenKind::RBracket => {}
                kind if kind.primitive().is_some() => {}
                _ => return None,
            }
            i += 1;
        }
    }

    /// `Type name` ahead: a local variable declaration.
    fn at_local_variable(&self) -> bool {
        let start = self.cursor.position();
        self.scan_type(start)
            .is_some_and(|end| self.cursor.kind_at(end) == TokenKind::Identifier)
    }

    /// `(Type) operand` ahead.
    fn at_cast(&self) -> bool {
        let start = self.cursor.position();
        if self.cursor.kind_at(start) != TokenKind::LParen {
            return false;
        }
        let Some(end) = self.scan_type(start + 1) else {
            return false;
        };
        if self.cursor.kind_at(end) != TokenKind::RParen {
            return false;
        }
        if self.cursor.kind_at(start + 1).primitive().is_some() {
            return true;
        }
        matches!(
            self.cursor.kind_at(end + 1),
            TokenKind::Identifier
                | TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::CharLiteral
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
                | TokenKind::This
                | TokenKind::Super
                | TokenKind::New
                | TokenKind::LParen
                | TokenKind::Bang
                | TokenKind::Tilde
        )
    }

    /// `x ->` or `( ... ) ->` ahead.
    fn at_lambda(&self) -> bool {
        let start = self.cursor.position();
        match self.cursor.kind_at(start) {
            TokenKind::Identifier => self.cursor.kind_at(start + 1) == TokenKind::Arrow,
            TokenKind::LParen => {
                let mut depth = 0usize;
                let mut i = start;
                loop {
                    match self.cursor.kind_at(i) {
                        TokenKind::LParen => depth += 1,
                        TokenKind::RParen => {
                            depth -= 1;
                            if depth == 0 {
                                return self.cursor.kind_at(i + 1) == TokenKind::Arrow;
                            }
                        }
                        TokenKind::Eof | TokenKind::Semicolon | TokenKind::LBrace => return false,
                        _ => {}
                    }
                    i += 1;
                }
            }
            _ => false,
        }
    }

    /// After `for`: `(` ... `:` at the top level before any `;`.
    fn at_for_each(&self) -> bool {
        let mut depth = 0usize;
        let mut i = self.cursor.position();
        loop {
            match self.cursor.kind_at(i) {
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => depth += 1,
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    if depth <= 1 {
                        return false;
                    }
                    depth -= 1;
                }
                TokenKind::Colon if depth == 1 => return true,
                TokenKind::Semicolon | TokenKind::Eof => return false,
                _ => {}
            }
            i += 1;
        }
    }
}
