//! Blocks and statements.

use remold_stack::ensure_sufficient_stack;
use remold_tree::{
    needs_semicolon, Block, Break, Case, Catch, Container, Continue, ControlParentheses,
    DoWhileLoop, Else, Empty, ForControl, ForEachControl, ForEachLoop, ForLoop, If, Label,
    LeftPadded, ModifierKind, MultiCatch, Return, RightPadded, Space, Switch, Throw, TreeId, Try,
    VariableDeclarations, WhileLoop, J,
};

use super::lift;
use crate::lexer::TokenKind;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `{ statements }`.
    pub(crate) fn parse_block(&mut self) -> Result<J, ParseError> {
        let prefix = self.whitespace();
        self.parse_block_body(prefix, None)
    }

    /// The braces and statements of a block whose prefix (and `static`
    /// keyword, for an initializer) were already consumed.
    pub(crate) fn parse_block_body(
        &mut self,
        prefix: Space,
        is_static: Option<Space>,
    ) -> Result<J, ParseError> {
        self.expect(TokenKind::LBrace)?;
        let mut statements = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            statements.push(self.parse_statement_padded()?);
        }
        let end = self.expect(TokenKind::RBrace)?;
        Ok(Block {
            id: TreeId::next(),
            prefix,
            is_static,
            statements,
            end,
        }
        .into())
    }

    /// A statement with its terminating `;`, whose leading space becomes the
    /// padding.
    pub(crate) fn parse_statement_padded(&mut self) -> Result<RightPadded<J>, ParseError> {
        let statement = self.parse_statement()?;
        self.terminate(statement)
    }

    pub(crate) fn terminate(&mut self, statement: J) -> Result<RightPadded<J>, ParseError> {
        if !needs_semicolon(&statement) {
            return Ok(RightPadded::build(statement));
        }
        let after = self.expect(TokenKind::Semicolon)?;
        Ok(RightPadded::new(statement, after))
    }

    pub(crate) fn parse_statement(&mut self) -> Result<J, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<J, ParseError> {
        match self.peek() {
            TokenKind::LBrace => self.parse_block(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Do => self.parse_do_while(),
            TokenKind::For => self.parse_for(),
            TokenKind::Try => self.parse_try(),
            TokenKind::Switch => self.parse_switch(),
            TokenKind::Return => {
                let prefix = self.bump();
                let expression = if self.at(TokenKind::Semicolon) {
                    None
                } else {
                    Some(self.parse_expression()?)
                };
                Ok(Return {
                    id: TreeId::next(),
                    prefix,
                    expression,
                }
                .into())
            }
            TokenKind::Throw => {
                let prefix = self.bump();
                let exception = self.parse_expression()?;
                Ok(Throw {
                    id: TreeId::next(),
                    prefix,
                    exception,
                }
                .into())
            }
            TokenKind::Break => {
                let prefix = self.bump();
                let label = self.optional_label()?;
                Ok(Break {
                    id: TreeId::next(),
                    prefix,
                    label,
                }
                .into())
            }
            TokenKind::Continue => {
                let prefix = self.bump();
                let label = self.optional_label()?;
                Ok(Continue {
                    id: TreeId::next(),
                    prefix,
                    label,
                }
                .into())
            }
            TokenKind::Semicolon => Ok(Empty::build(self.whitespace()).into()),
            TokenKind::Identifier if self.peek_nth(1) == TokenKind::Colon => self.parse_label(),
            TokenKind::Class
            | TokenKind::Interface
            | TokenKind::Enum
            | TokenKind::Final
            | TokenKind::Abstract
            | TokenKind::At => self.parse_member(),
            _ if self.at_local_variable() => self.parse_member(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_expression_statement(&mut self) -> Result<J, ParseError> {
        let start = self.cursor.position();
        let expression = self.parse_expression()?;
        if needs_semicolon(&expression) {
            Ok(expression)
        } else {
            Err(self.cursor.error_at(start, "statement"))
        }
    }

    fn optional_label(&mut self) -> Result<Option<J>, ParseError> {
        if self.at(TokenKind::Identifier) {
            Ok(Some(self.ident()?))
        } else {
            Ok(None)
        }
    }

    fn parse_label(&mut self) -> Result<J, ParseError> {
        let (prefix, name) = lift(self.ident()?);
        let after = self.expect(TokenKind::Colon)?;
        let statement = self.parse_statement()?;
        Ok(Label {
            id: TreeId::next(),
            prefix,
            label: RightPadded::new(name, after),
            statement,
        }
        .into())
    }

    /// `( expression )` after `if`, `while` and `switch`.
    fn parse_control_parentheses(&mut self) -> Result<J, ParseError> {
        let prefix = self.expect(TokenKind::LParen)?;
        let tree = self.parse_expression()?;
        let after = self.whitespace();
        self.expect(TokenKind::RParen)?;
        Ok(ControlParentheses {
            id: TreeId::next(),
            prefix,
            tree: RightPadded::new(tree, after),
        }
        .into())
    }

    fn parse_if(&mut self) -> Result<J, ParseError> {
        let prefix = self.expect(TokenKind::If)?;
        let condition = self.parse_control_parentheses()?;
        let then_part = self.parse_statement_padded()?;
        let else_part = if self.at(TokenKind::Else) {
            let prefix = self.bump();
            let body = self.parse_statement_padded()?;
            Some(
                Else {
                    id: TreeId::next(),
                    prefix,
                    body,
                }
                .into(),
            )
        } else {
            None
        };
        Ok(If {
            id: TreeId::next(),
            prefix,
            condition,
            then_part,
            else_part,
        }
        .into())
    }

    fn parse_while(&mut self) -> Result<J, ParseError> {
        let prefix = self.expect(TokenKind::While)?;
        let condition = self.parse_control_parentheses()?;
        let body = self.parse_statement_padded()?;
        Ok(WhileLoop {
            id: TreeId::next(),
            prefix,
            condition,
            body,
        }
        .into())
    }

    fn parse_do_while(&mut self) -> Result<J, ParseError> {
        let prefix = self.expect(TokenKind::Do)?;
        let body = self.parse_statement_padded()?;
        let before = self.expect(TokenKind::While)?;
        let condition = self.parse_control_parentheses()?;
        Ok(DoWhileLoop {
            id: TreeId::next(),
            prefix,
            body,
            while_condition: LeftPadded::new(before, condition),
        }
        .into())
    }

    fn parse_for(&mut self) -> Result<J, ParseError> {
        let prefix = self.expect(TokenKind::For)?;
        if self.at_for_each() {
            let control = self.parse_for_each_control()?;
            let body = self.parse_statement_padded()?;
            return Ok(ForEachLoop {
                id: TreeId::next(),
                prefix,
                control,
                body,
            }
            .into());
        }
        let control = self.parse_for_control()?;
        let body = self.parse_statement_padded()?;
        Ok(ForLoop {
            id: TreeId::next(),
            prefix,
            control,
            body,
        }
        .into())
    }

    fn parse_for_each_control(&mut self) -> Result<J, ParseError> {
        let prefix = self.expect(TokenKind::LParen)?;
        let variable = self.parse_member()?;
        let variable = RightPadded::new(variable, self.whitespace());
        self.expect(TokenKind::Colon)?;
        let iterable = self.parse_expression()?;
        let iterable = RightPadded::new(iterable, self.whitespace());
        self.expect(TokenKind::RParen)?;
        Ok(ForEachControl {
            id: TreeId::next(),
            prefix,
            variable,
            iterable,
        }
        .into())
    }

    /// `(init; condition; update)`; an omitted part is a single [`Empty`]
    /// holding the space before the delimiter that ends it.
    fn parse_for_control(&mut self) -> Result<J, ParseError> {
        let prefix = self.expect(TokenKind::LParen)?;

        let init = if self.at(TokenKind::Semicolon) {
            vec![RightPadded::build(Empty::build(self.whitespace()).into())]
        } else if self.at_local_variable() || self.at(TokenKind::Final) {
            let declarations = self.parse_member()?;
            vec![RightPadded::new(declarations, self.whitespace())]
        } else {
            self.expression_list()?
        };
        self.expect(TokenKind::Semicolon)?;

        let condition = if self.at(TokenKind::Semicolon) {
            RightPadded::build(Empty::build(self.whitespace()).into())
        } else {
            let condition = self.parse_expression()?;
            RightPadded::new(condition, self.whitespace())
        };
        self.expect(TokenKind::Semicolon)?;

        let update = if self.at(TokenKind::RParen) {
            vec![RightPadded::build(Empty::build(self.whitespace()).into())]
        } else {
            self.expression_list()?
        };
        self.expect(TokenKind::RParen)?;

        Ok(ForControl {
            id: TreeId::next(),
            prefix,
            init,
            condition,
            update,
        }
        .into())
    }

    /// Comma separated expressions, each padded with the space before the
    /// token that follows it.
    fn expression_list(&mut self) -> Result<Vec<RightPadded<J>>, ParseError> {
        let mut list = Vec::new();
        loop {
            let expression = self.parse_expression()?;
            list.push(RightPadded::new(expression, self.whitespace()));
            if !self.at(TokenKind::Comma) {
                return Ok(list);
            }
            self.bump();
        }
    }

    fn parse_try(&mut self) -> Result<J, ParseError> {
        let prefix = self.expect(TokenKind::Try)?;
        let body = self.parse_block()?;
        let mut catches = Vec::new();
        while self.at(TokenKind::Catch) {
            catches.push(self.parse_catch()?);
        }
        let finally = if self.at(TokenKind::Finally) {
            let before = self.bump();
            Some(LeftPadded::new(before, self.parse_block()?))
        } else {
            None
        };
        if catches.is_empty() && finally.is_none() {
            return Err(self.cursor.error("`catch` or `finally`"));
        }
        Ok(Try {
            id: TreeId::next(),
            prefix,
            body,
            catches,
            finally,
        }
        .into())
    }

    fn parse_catch(&mut self) -> Result<J, ParseError> {
        let prefix = self.expect(TokenKind::Catch)?;
        let open = self.expect(TokenKind::LParen)?;

        let declaration_prefix = self.whitespace();
        let mut modifiers = Vec::new();
        while self.at(TokenKind::Final) {
            modifiers.push(self.parse_modifier(ModifierKind::Final));
        }
        let mut type_expr = self.parse_type()?;
        if self.at(TokenKind::Pipe) {
            let (multi_prefix, first) = lift(type_expr);
            let mut alternatives = Vec::new();
            let mut current = first;
            while self.at(TokenKind::Pipe) {
                let after = self.bump();
                alternatives.push(RightPadded::new(current, after));
                current = self.parse_type()?;
            }
            alternatives.push(RightPadded::build(current));
            type_expr = MultiCatch {
                id: TreeId::next(),
                prefix: multi_prefix,
                alternatives,
            }
            .into();
        }
        let variable = self.parse_named_variable(false)?;
        let parameter = VariableDeclarations {
            id: TreeId::next(),
            prefix: declaration_prefix,
            leading_annotations: Vec::new(),
            modifiers,
            type_expr: Some(type_expr),
            varargs: None,
            variables: vec![RightPadded::build(variable)],
        };

        let after = self.whitespace();
        self.expect(TokenKind::RParen)?;
        let body = self.parse_block()?;
        Ok(Catch {
            id: TreeId::next(),
            prefix,
            parameter: ControlParentheses {
                id: TreeId::next(),
                prefix: open,
                tree: RightPadded::new(parameter.into(), after),
            }
            .into(),
            body,
        }
        .into())
    }

    fn parse_switch(&mut self) -> Result<J, ParseError> {
        let prefix = self.expect(TokenKind::Switch)?;
        let selector = self.parse_control_parentheses()?;

        let block_prefix = self.expect(TokenKind::LBrace)?;
        let mut cases = Vec::new();
        while self.at(TokenKind::Case) || self.at(TokenKind::Default) {
            cases.push(RightPadded::build(self.parse_case()?));
        }
        let end = self.expect(TokenKind::RBrace)?;

        Ok(Switch {
            id: TreeId::next(),
            prefix,
            selector,
            cases: Block::build(block_prefix, cases, end).into(),
        }
        .into())
    }

    fn parse_case(&mut self) -> Result<J, ParseError> {
        let prefix = self.whitespace();
        let expression = if self.at(TokenKind::Default) {
            self.bump();
            None
        } else {
            self.expect(TokenKind::Case)?;
            Some(self.parse_expression()?)
        };
        let before = self.expect(TokenKind::Colon)?;
        let mut statements = Vec::new();
        while !matches!(
            self.peek(),
            TokenKind::Case | TokenKind::Default | TokenKind::RBrace | TokenKind::Eof
        ) {
            statements.push(self.parse_statement_padded()?);
        }
        Ok(Case {
            id: TreeId::next(),
            prefix,
            expression,
            statements: Container::new(before, statements),
        }
        .into())
    }
}

