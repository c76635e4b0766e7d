//! Type expressions: `int`, `java.util.List<? extends T>`, `String[][]`, and
//! type parameter declarations.

use remold_tree::{
    ArrayType, Container, Empty, FieldAccess, LeftPadded, ParameterizedType, PrimitiveType,
    RightPadded, TreeId, TypeParameter, Wildcard, WildcardBound, J,
};

use super::lift;
use crate::lexer::TokenKind;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// A type, array dimensions included.
    pub(crate) fn parse_type(&mut self) -> Result<J, ParseError> {
        let mut ty = self.parse_type_without_dimensions()?;
        while self.at(TokenKind::LBracket) && self.peek_nth(1) == TokenKind::RBracket {
            let before = self.bump();
            let inside = self.bump();
            let (prefix, element_type) = lift(ty);
            ty = ArrayType {
                id: TreeId::next(),
                prefix,
                element_type,
                dimension: LeftPadded::new(before, inside),
            }
            .into();
        }
        Ok(ty)
    }

    /// A primitive or a possibly qualified, possibly parameterized class
    /// type; `new` and array creation parse their own dimensions.
    pub(crate) fn parse_type_without_dimensions(&mut self) -> Result<J, ParseError> {
        if let Some(primitive) = self.peek().primitive() {
            let prefix = self.bump();
            return Ok(PrimitiveType::build(prefix, primitive).into());
        }
        if self.at(TokenKind::Question) {
            return self.parse_wildcard();
        }

        let mut ty = self.ident()?;
        loop {
            if self.at(TokenKind::Lt) {
                let type_parameters = self.parse_type_arguments()?;
                let (prefix, clazz) = lift(ty);
                ty = ParameterizedType {
                    id: TreeId::next(),
                    prefix,
                    clazz,
                    type_parameters: Some(type_parameters),
                    ty: None,
                }
                .into();
            }
            if !(self.at(TokenKind::Dot) && self.peek_nth(1) == TokenKind::Identifier) {
                break;
            }
            let before = self.bump();
            let name = self.ident()?;
            let (prefix, target) = lift(ty);
            ty = FieldAccess {
                id: TreeId::next(),
                prefix,
                target,
                name: LeftPadded::new(before, name),
                ty: None,
            }
            .into();
        }
        Ok(ty)
    }

    /// `<A, B>`; the diamond `<>` holds a single [`Empty`].
    pub(crate) fn parse_type_arguments(&mut self) -> Result<Container<J>, ParseError> {
        let before = self.expect(TokenKind::Lt)?;
        let mut elements = Vec::new();
        if self.at(TokenKind::Gt) {
            elements.push(RightPadded::build(Empty::build(self.whitespace()).into()));
        } else {
            loop {
                let ty = self.parse_type()?;
                let after = self.whitespace();
                elements.push(RightPadded::new(ty, after));
                if !self.at(TokenKind::Comma) {
                    break;
                }
                self.bump();
            }
        }
        self.expect(TokenKind::Gt)?;
        Ok(Container::new(before, elements))
    }

    fn parse_wildcard(&mut self) -> Result<J, ParseError> {
        let prefix = self.expect(TokenKind::Question)?;
        let bound = match self.peek() {
            TokenKind::Extends => Some(WildcardBound::Extends),
            TokenKind::Super => Some(WildcardBound::Super),
            _ => None,
        };
        let (bound, bounded_type) = match bound {
            Some(bound) => {
                let before = self.bump();
                (Some(LeftPadded::new(before, bound)), Some(self.parse_type()?))
            }
            None => (None, None),
        };
        Ok(Wildcard {
            id: TreeId::next(),
            prefix,
            bound,
            bounded_type,
        }
        .into())
    }

    /// `<T extends A & B, U>` on a class or method declaration.
    pub(crate) fn parse_type_parameters(&mut self) -> Result<Container<J>, ParseError> {
        self.delimited(TokenKind::Lt, TokenKind::Gt, |p| {
            let prefix = p.whitespace();
            let mut annotations = Vec::new();
            while p.at(TokenKind::At) {
                annotations.push(p.parse_annotation()?);
            }
            let name = p.ident()?;
            let bounds = if p.at(TokenKind::Extends) {
                let before = p.bump();
                Some(p.type_list(before, TokenKind::Amp)?)
            } else {
                None
            };
            Ok(TypeParameter {
                id: TreeId::next(),
                prefix,
                annotations,
                name,
                bounds,
            }
            .into())
        })
    }
}
