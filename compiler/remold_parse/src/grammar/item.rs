//! Compilation units, type declarations and their members.

use remold_tree::{
    Annotation, Block, ClassDeclaration, ClassDeclarationKind, CompilationUnit, Container, Empty,
    EnumValue, EnumValueSet, FieldAccess, Import, LeftPadded, MethodDeclaration, Modifier,
    ModifierKind, Package, RightPadded, Space, TreeId, VariableDeclarations, J,
};
use remold_types::ClassKind;

use super::lift;
use crate::lexer::TokenKind;
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_compilation_unit(&mut self) -> Result<J, ParseError> {
        let prefix = self.whitespace();

        let package = if self.at(TokenKind::Package) {
            let package_prefix = self.bump();
            let expression = self.parse_qualified_name(false)?;
            let after = self.expect(TokenKind::Semicolon)?;
            let package: J = Package {
                id: TreeId::next(),
                prefix: package_prefix,
                annotations: Vec::new(),
                expression,
            }
            .into();
            Some(RightPadded::new(package, after))
        } else {
            None
        };

        let mut imports = Vec::new();
        while self.at(TokenKind::Import) {
            let import_prefix = self.bump();
            let is_static = if self.at(TokenKind::Static) {
                LeftPadded::new(self.bump(), true)
            } else {
                LeftPadded::build(false)
            };
            let qualid = self.parse_qualified_name(true)?;
            let after = self.expect(TokenKind::Semicolon)?;
            let import: J = Import {
                id: TreeId::next(),
                prefix: import_prefix,
                is_static,
                qualid,
            }
            .into();
            imports.push(RightPadded::new(import, after));
        }

        let mut classes = Vec::new();
        while !self.at(TokenKind::Eof) {
            let start = self.cursor.position();
            let declaration = self.parse_member()?;
            if !matches!(declaration, J::ClassDeclaration(_)) {
                return Err(self.cursor.error_at(start, "type declaration"));
            }
            classes.push(declaration);
        }
        let eof = self.whitespace();

        tracing::trace!(imports = imports.len(), classes = classes.len(), "parsed compilation unit");
        Ok(CompilationUnit {
            id: TreeId::next(),
            prefix,
            package,
            imports,
            classes,
            eof,
        }
        .into())
    }

    /// `a.b.c`, or `a.b.*` in an import.
    fn parse_qualified_name(&mut self, allow_star: bool) -> Result<J, ParseError> {
        let mut name = self.ident()?;
        while self.at(TokenKind::Dot) {
            let before = self.bump();
            let segment = if allow_star && self.at(TokenKind::Star) {
                self.name_token()
            } else {
                self.ident()?
            };
            let (prefix, target) = lift(name);
            name = FieldAccess {
                id: TreeId::next(),
                prefix,
                target,
                name: LeftPadded::new(before, segment),
                ty: None,
            }
            .into();
        }
        Ok(name)
    }

    pub(crate) fn parse_annotation(&mut self) -> Result<J, ParseError> {
        let prefix = self.expect(TokenKind::At)?;
        let annotation_type = self.parse_qualified_name(false)?;
        let arguments = if self.at(TokenKind::LParen) {
            Some(self.parse_arguments()?)
        } else {
            None
        };
        Ok(Annotation {
            id: TreeId::next(),
            prefix,
            annotation_type,
            arguments,
        }
        .into())
    }

    pub(crate) fn parse_modifier(&mut self, keyword: ModifierKind) -> J {
        let prefix = self.bump();
        Modifier::build(prefix, keyword).into()
    }

    /// A class member, or a declaration statement inside a block: nested
    /// type, method, constructor, field or local variables, initializer
    /// block, or a stray `;`.
    pub(crate) fn parse_member(&mut self) -> Result<J, ParseError> {
        match self.peek() {
            TokenKind::Semicolon => return Ok(Empty::build(self.whitespace()).into()),
            TokenKind::LBrace => return self.parse_block(),
            TokenKind::Static if self.peek_nth(1) == TokenKind::LBrace => {
                let prefix = self.bump();
                let after_static = self.whitespace();
                return self.parse_block_body(prefix, Some(after_static));
            }
            _ => {}
        }

        let prefix = self.whitespace();
        let mut leading_annotations = Vec::new();
        while self.at(TokenKind::At) {
            leading_annotations.push(self.parse_annotation()?);
        }
        let mut modifiers = Vec::new();
        while let Some(keyword) = self.peek().modifier() {
            modifiers.push(self.parse_modifier(keyword));
        }

        if matches!(
            self.peek(),
            TokenKind::Class | TokenKind::Interface | TokenKind::Enum | TokenKind::AtInterface
        ) {
            return self.parse_class_declaration(prefix, leading_annotations, modifiers);
        }

        let type_parameters = if self.at(TokenKind::Lt) {
            Some(self.parse_type_parameters()?)
        } else {
            None
        };
        let declaration = Declaration {
            prefix,
            leading_annotations,
            modifiers,
            type_parameters,
        };
        if self.at(TokenKind::Identifier) && self.peek_nth(1) == TokenKind::LParen {
            return self.parse_method(declaration, None);
        }
        let type_expr = self.parse_type()?;
        if self.at(TokenKind::Identifier) && self.peek_nth(1) == TokenKind::LParen {
            return self.parse_method(declaration, Some(type_expr));
        }
        if declaration.type_parameters.is_some() {
            return Err(self.cursor.error("method declaration"));
        }

        let mut variables = Vec::new();
        loop {
            let variable = self.parse_named_variable(true)?;
            if !self.at(TokenKind::Comma) {
                variables.push(RightPadded::build(variable));
                break;
            }
            let after = self.bump();
            variables.push(RightPadded::new(variable, after));
        }
        Ok(VariableDeclarations {
            id: TreeId::next(),
            prefix: declaration.prefix,
            leading_annotations: declaration.leading_annotations,
            modifiers: declaration.modifiers,
            type_expr: Some(type_expr),
            varargs: None,
            variables,
        }
        .into())
    }

    fn parse_class_declaration(
        &mut self,
        prefix: Space,
        leading_annotations: Vec<J>,
        modifiers: Vec<J>,
    ) -> Result<J, ParseError> {
        let kind = match self.peek() {
            TokenKind::Class => ClassKind::Class,
            TokenKind::Interface => ClassKind::Interface,
            TokenKind::Enum => ClassKind::Enum,
            TokenKind::AtInterface => ClassKind::Annotation,
            _ => return Err(self.cursor.error("`class`")),
        };
        let kind = ClassDeclarationKind {
            prefix: self.bump(),
            kind,
        };
        let name = self.ident()?;
        let type_parameters = if self.at(TokenKind::Lt) {
            Some(self.parse_type_parameters()?)
        } else {
            None
        };

        let mut extends = None;
        let mut implements = None;
        if self.at(TokenKind::Extends) {
            let before = self.bump();
            if kind.kind == ClassKind::Interface {
                implements = Some(self.type_list(before, TokenKind::Comma)?);
            } else {
                extends = Some(LeftPadded::new(before, self.parse_type()?));
            }
        }
        if self.at(TokenKind::Implements) {
            let before = self.bump();
            implements = Some(self.type_list(before, TokenKind::Comma)?);
        }

        let body = if kind.kind == ClassKind::Enum {
            self.parse_enum_body()?
        } else {
            self.parse_class_body()?
        };
        Ok(ClassDeclaration {
            id: TreeId::next(),
            prefix,
            leading_annotations,
            modifiers,
            kind,
            name,
            type_parameters,
            extends,
            implements,
            body,
            ty: None,
        }
        .into())
    }

    pub(crate) fn parse_class_body(&mut self) -> Result<J, ParseError> {
        let prefix = self.expect(TokenKind::LBrace)?;
        let members = self.parse_members(Vec::new())?;
        let end = self.expect(TokenKind::RBrace)?;
        Ok(Block::build(prefix, members, end).into())
    }

    fn parse_members(
        &mut self,
        mut members: Vec<RightPadded<J>>,
    ) -> Result<Vec<RightPadded<J>>, ParseError> {
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            let member = self.parse_member()?;
            members.push(self.terminate(member)?);
        }
        Ok(members)
    }

    /// Enum body: the constants, then ordinary members.
    fn parse_enum_body(&mut self) -> Result<J, ParseError> {
        let prefix = self.expect(TokenKind::LBrace)?;
        let mut members = Vec::new();
        if self.at(TokenKind::Identifier) || self.at(TokenKind::Semicolon) {
            members.push(RightPadded::build(self.parse_enum_values()?));
        }
        let members = self.parse_members(members)?;
        let end = self.expect(TokenKind::RBrace)?;
        Ok(Block::build(prefix, members, end).into())
    }

    fn parse_enum_values(&mut self) -> Result<J, ParseError> {
        let prefix = self.whitespace();
        let mut enums = Vec::new();
        let mut trailing_comma = false;
        while self.at(TokenKind::Identifier) {
            let value_prefix = self.whitespace();
            let name = self.ident()?;
            let arguments = if self.at(TokenKind::LParen) {
                Some(self.parse_arguments()?)
            } else {
                None
            };
            let value: J = EnumValue {
                id: TreeId::next(),
                prefix: value_prefix,
                name,
                arguments,
            }
            .into();
            match self.peek() {
                TokenKind::Comma => {
                    let after = self.bump();
                    enums.push(RightPadded::new(value, after));
                    trailing_comma = true;
                }
                TokenKind::Semicolon => {
                    enums.push(RightPadded::new(value, self.whitespace()));
                    trailing_comma = false;
                    break;
                }
                _ => {
                    enums.push(RightPadded::build(value));
                    trailing_comma = false;
                    break;
                }
            }
        }
        if trailing_comma {
            let after = if self.at(TokenKind::Semicolon) {
                self.whitespace()
            } else {
                Space::EMPTY
            };
            enums.push(RightPadded::new(Empty::build(Space::EMPTY).into(), after));
        }
        let terminated_with_semicolon = self.at(TokenKind::Semicolon);
        if terminated_with_semicolon {
            self.bump();
        }
        Ok(EnumValueSet {
            id: TreeId::next(),
            prefix,
            enums,
            terminated_with_semicolon,
        }
        .into())
    }

    fn parse_method(
        &mut self,
        declaration: Declaration,
        return_type: Option<J>,
    ) -> Result<J, ParseError> {
        let name = self.ident()?;
        let parameters =
            self.delimited(TokenKind::LParen, TokenKind::RParen, Self::parse_parameter)?;
        let throws = if self.at(TokenKind::Throws) {
            let before = self.bump();
            Some(self.type_list(before, TokenKind::Comma)?)
        } else {
            None
        };
        let body = if self.at(TokenKind::LBrace) {
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(MethodDeclaration {
            id: TreeId::next(),
            prefix: declaration.prefix,
            leading_annotations: declaration.leading_annotations,
            modifiers: declaration.modifiers,
            type_parameters: declaration.type_parameters,
            return_type,
            name,
            parameters,
            throws,
            body,
            method_type: None,
        }
        .into())
    }

    /// A single declared variable: method and typed lambda parameters.
    pub(crate) fn parse_parameter(&mut self) -> Result<J, ParseError> {
        let prefix = self.whitespace();
        let mut leading_annotations = Vec::new();
        while self.at(TokenKind::At) {
            leading_annotations.push(self.parse_annotation()?);
        }
        let mut modifiers = Vec::new();
        while self.at(TokenKind::Final) {
            modifiers.push(self.parse_modifier(ModifierKind::Final));
        }
        let type_expr = self.parse_type()?;
        let varargs = if self.at(TokenKind::Ellipsis) {
            Some(self.bump())
        } else {
            None
        };
        let variable = self.parse_named_variable(false)?;
        Ok(VariableDeclarations {
            id: TreeId::next(),
            prefix,
            leading_annotations,
            modifiers,
            type_expr: Some(type_expr),
            varargs,
            variables: vec![RightPadded::build(variable)],
        }
        .into())
    }
}

/// What precedes a member's type or name.
struct Declaration {
    prefix: Space,
    leading_annotations: Vec<J>,
    modifiers: Vec<J>,
    type_parameters: Option<Container<J>>,
}
