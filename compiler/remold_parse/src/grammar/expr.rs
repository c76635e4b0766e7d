//! Expressions.
//!
//! Precedence climbing over [`BinaryOperator::precedence`], with assignment,
//! lambda and ternary handled above it and unary, cast and postfix forms
//! below. `>` arrives from the lexer as single tokens; adjacent ones are
//! joined here into `>=`, `>>`, `>>>` and the shift assignments.

use remold_stack::ensure_sufficient_stack;
use remold_tree::{
    ArrayAccess, ArrayDimension, Assignment, AssignmentOperation, AssignmentOperator, Binary,
    BinaryOperator, Container, ControlParentheses, Empty, FieldAccess, Identifier, Lambda,
    LambdaParameters, LeftPadded, Literal, MethodInvocation, NamedVariable, NewArray, NewClass,
    Parentheses, RightPadded, Space, Ternary, TreeId, TypeCast, Unary, UnaryOperator, J,
};
use remold_types::Primitive;

use super::lift;
use crate::lexer::TokenKind;
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_expression(&mut self) -> Result<J, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    fn parse_assignment(&mut self) -> Result<J, ParseError> {
        if self.at_lambda() {
            return self.parse_lambda();
        }
        let variable = self.parse_ternary()?;
        let Some((operator, width)) = self.peek_assignment() else {
            return Ok(variable);
        };
        let before = self.whitespace();
        for _ in 0..width {
            self.bump();
        }
        let value = self.parse_expression()?;
        let (prefix, variable) = lift(variable);
        let tree = match operator {
            None => Assignment {
                id: TreeId::next(),
                prefix,
                variable,
                assignment: LeftPadded::new(before, value),
            }
            .into(),
            Some(operator) => AssignmentOperation {
                id: TreeId::next(),
                prefix,
                variable,
                operator: LeftPadded::new(before, operator),
                assignment: value,
            }
            .into(),
        };
        Ok(tree)
    }

    /// Assignment operator ahead: `None` for plain `=`, with the number of
    /// tokens it spans.
    fn peek_assignment(&self) -> Option<(Option<AssignmentOperator>, usize)> {
        let operator = match self.peek() {
            TokenKind::Assign => None,
            TokenKind::PlusAssign => Some(AssignmentOperator::Addition),
            TokenKind::MinusAssign => Some(AssignmentOperator::Subtraction),
            TokenKind::StarAssign => Some(AssignmentOperator::Multiplication),
            TokenKind::SlashAssign => Some(AssignmentOperator::Division),
            TokenKind::PercentAssign => Some(AssignmentOperator::Modulo),
            TokenKind::AmpAssign => Some(AssignmentOperator::BitAnd),
            TokenKind::PipeAssign => Some(AssignmentOperator::BitOr),
            TokenKind::CaretAssign => Some(AssignmentOperator::BitXor),
            TokenKind::ShlAssign => Some(AssignmentOperator::LeftShift),
            TokenKind::Gt => return self.peek_shift_assignment(),
            _ => return None,
        };
        Some((operator, 1))
    }

    fn peek_shift_assignment(&self) -> Option<(Option<AssignmentOperator>, usize)> {
        let joined = |n: usize, kind: TokenKind| self.peek_nth(n) == kind && self.cursor.adjacent(n);
        if !joined(1, TokenKind::Gt) {
            return None;
        }
        if joined(2, TokenKind::Assign) {
            return Some((Some(AssignmentOperator::RightShift), 3));
        }
        if joined(2, TokenKind::Gt) && joined(3, TokenKind::Assign) {
            return Some((Some(AssignmentOperator::UnsignedRightShift), 4));
        }
        None
    }

    fn parse_ternary(&mut self) -> Result<J, ParseError> {
        let condition = self.parse_binary(1)?;
        if !self.at(TokenKind::Question) {
            return Ok(condition);
        }
        let question = self.bump();
        let true_part = self.parse_expression()?;
        let colon = self.expect(TokenKind::Colon)?;
        let false_part = if self.at_lambda() {
            self.parse_lambda()?
        } else {
            self.parse_ternary()?
        };
        let (prefix, condition) = lift(condition);
        Ok(Ternary {
            id: TreeId::next(),
            prefix,
            condition,
            true_part: LeftPadded::new(question, true_part),
            false_part: LeftPadded::new(colon, false_part),
        }
        .into())
    }

    fn parse_binary(&mut self, min_precedence: u8) -> Result<J, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some((operator, width)) = self.peek_binary() {
            if operator.precedence() < min_precedence {
                break;
            }
            let before = self.whitespace();
            for _ in 0..width {
                self.bump();
            }
            let right = ensure_sufficient_stack(|| self.parse_binary(operator.precedence() + 1))?;
            let (prefix, operand) = lift(left);
            left = Binary {
                id: TreeId::next(),
                prefix,
                left: operand,
                operator: LeftPadded::new(before, operator),
                right,
                ty: None,
            }
            .into();
        }
        Ok(left)
    }

    fn peek_binary(&self) -> Option<(BinaryOperator, usize)> {
        let operator = match self.peek() {
            TokenKind::Plus => BinaryOperator::Addition,
            TokenKind::Minus => BinaryOperator::Subtraction,
            TokenKind::Star => BinaryOperator::Multiplication,
            TokenKind::Slash => BinaryOperator::Division,
            TokenKind::Percent => BinaryOperator::Modulo,
            TokenKind::Lt => BinaryOperator::LessThan,
            TokenKind::LtEq => BinaryOperator::LessThanOrEqual,
            TokenKind::Shl => BinaryOperator::LeftShift,
            TokenKind::EqEq => BinaryOperator::Equal,
            TokenKind::NotEq => BinaryOperator::NotEqual,
            TokenKind::Amp => BinaryOperator::BitAnd,
            TokenKind::Pipe => BinaryOperator::BitOr,
            TokenKind::Caret => BinaryOperator::BitXor,
            TokenKind::AmpAmp => BinaryOperator::And,
            TokenKind::PipePipe => BinaryOperator::Or,
            TokenKind::Gt => return self.peek_greater(),
            _ => return None,
        };
        Some((operator, 1))
    }

    /// `>`, `>=`, `>>` or `>>>`; `None` when the `>`s start a shift
    /// assignment.
    fn peek_greater(&self) -> Option<(BinaryOperator, usize)> {
        let joined = |n: usize, kind: TokenKind| self.peek_nth(n) == kind && self.cursor.adjacent(n);
        if joined(1, TokenKind::Gt) {
            if joined(2, TokenKind::Gt) {
                if joined(3, TokenKind::Assign) {
                    return None;
                }
                return Some((BinaryOperator::UnsignedRightShift, 3));
            }
            if joined(2, TokenKind::Assign) {
                return None;
            }
            return Some((BinaryOperator::RightShift, 2));
        }
        if joined(1, TokenKind::Assign) {
            return Some((BinaryOperator::GreaterThanOrEqual, 2));
        }
        Some((BinaryOperator::GreaterThan, 1))
    }

    fn parse_unary(&mut self) -> Result<J, ParseError> {
        let operator = match self.peek() {
            TokenKind::PlusPlus => UnaryOperator::PreIncrement,
            TokenKind::MinusMinus => UnaryOperator::PreDecrement,
            TokenKind::Plus => UnaryOperator::Positive,
            TokenKind::Minus => UnaryOperator::Negative,
            TokenKind::Tilde => UnaryOperator::Complement,
            TokenKind::Bang => UnaryOperator::Not,
            TokenKind::LParen if self.at_cast() => return self.parse_cast(),
            _ => return self.parse_postfix(),
        };
        let prefix = self.bump();
        let expression = ensure_sufficient_stack(|| self.parse_unary())?;
        Ok(Unary {
            id: TreeId::next(),
            prefix,
            operator: LeftPadded::build(operator),
            expression,
        }
        .into())
    }

    fn parse_cast(&mut self) -> Result<J, ParseError> {
        let prefix = self.expect(TokenKind::LParen)?;
        let ty = self.parse_type()?;
        let after = self.whitespace();
        self.expect(TokenKind::RParen)?;
        let expression = ensure_sufficient_stack(|| self.parse_unary())?;
        Ok(TypeCast {
            id: TreeId::next(),
            prefix,
            clazz: ControlParentheses {
                id: TreeId::next(),
                prefix: Space::EMPTY,
                tree: RightPadded::new(ty, after),
            }
            .into(),
            expression,
        }
        .into())
    }

    fn parse_postfix(&mut self) -> Result<J, ParseError> {
        let mut expression = self.parse_primary()?;
        loop {
            expression = match self.peek() {
                TokenKind::Dot => self.parse_select(expression)?,
                TokenKind::LBracket => {
                    let dimension = self.parse_array_dimension()?;
                    let (prefix, indexed) = lift(expression);
                    ArrayAccess {
                        id: TreeId::next(),
                        prefix,
                        indexed,
                        dimension,
                    }
                    .into()
                }
                TokenKind::PlusPlus | TokenKind::MinusMinus => {
                    let operator = if self.at(TokenKind::PlusPlus) {
                        UnaryOperator::PostIncrement
                    } else {
                        UnaryOperator::PostDecrement
                    };
                    let before = self.bump();
                    let (prefix, operand) = lift(expression);
                    Unary {
                        id: TreeId::next(),
                        prefix,
                        operator: LeftPadded::new(before, operator),
                        expression: operand,
                    }
                    .into()
                }
                _ => return Ok(expression),
            };
        }
    }

    /// `.name`, `.name(args)` or `.<T>name(args)` on `target`.
    fn parse_select(&mut self, target: J) -> Result<J, ParseError> {
        let before = self.expect(TokenKind::Dot)?;
        let type_parameters = if self.at(TokenKind::Lt) {
            Some(self.parse_type_arguments()?)
        } else {
            None
        };
        let name = match self.peek() {
            TokenKind::Identifier | TokenKind::This | TokenKind::Class | TokenKind::Super => {
                self.name_token()
            }
            _ => return Err(self.cursor.error("member name")),
        };
        let (prefix, target) = lift(target);
        if type_parameters.is_some() || self.at(TokenKind::LParen) {
            let arguments = self.parse_arguments()?;
            return Ok(MethodInvocation {
                id: TreeId::next(),
                prefix,
                select: Some(RightPadded::new(target, before)),
                type_parameters,
                name,
                arguments,
                method_type: None,
            }
            .into());
        }
        Ok(FieldAccess {
            id: TreeId::next(),
            prefix,
            target,
            name: LeftPadded::new(before, name),
            ty: None,
        }
        .into())
    }

    pub(crate) fn parse_arguments(&mut self) -> Result<Container<J>, ParseError> {
        self.delimited(TokenKind::LParen, TokenKind::RParen, Self::parse_expression)
    }

    /// `[index]`, or `[]` in an array creation.
    fn parse_array_dimension(&mut self) -> Result<J, ParseError> {
        let prefix = self.expect(TokenKind::LBracket)?;
        let index = if self.at(TokenKind::RBracket) {
            RightPadded::build(Empty::build(self.whitespace()).into())
        } else {
            let index = self.parse_expression()?;
            RightPadded::new(index, self.whitespace())
        };
        self.expect(TokenKind::RBracket)?;
        Ok(ArrayDimension {
            id: TreeId::next(),
            prefix,
            index,
        }
        .into())
    }

    fn parse_primary(&mut self) -> Result<J, ParseError> {
        let literal = match self.peek() {
            TokenKind::IntLiteral => Some(if self.cursor.text().ends_with(['l', 'L']) {
                Primitive::Long
            } else {
                Primitive::Int
            }),
            TokenKind::FloatLiteral => Some(if self.cursor.text().ends_with(['f', 'F']) {
                Primitive::Float
            } else {
                Primitive::Double
            }),
            TokenKind::StringLiteral => Some(Primitive::String),
            TokenKind::CharLiteral => Some(Primitive::Char),
            TokenKind::True | TokenKind::False => Some(Primitive::Boolean),
            TokenKind::Null => Some(Primitive::Null),
            _ => None,
        };
        if let Some(kind) = literal {
            let prefix = self.whitespace();
            let source = self.cursor.text().to_string();
            self.bump();
            return Ok(Literal::build(prefix, source, kind).into());
        }

        match self.peek() {
            TokenKind::Identifier | TokenKind::This | TokenKind::Super => {
                let name = self.name_token();
                if !self.at(TokenKind::LParen) {
                    return Ok(name);
                }
                let (prefix, name) = lift(name);
                let arguments = self.parse_arguments()?;
                Ok(MethodInvocation {
                    id: TreeId::next(),
                    prefix,
                    select: None,
                    type_parameters: None,
                    name,
                    arguments,
                    method_type: None,
                }
                .into())
            }
            TokenKind::LParen => {
                let prefix = self.bump();
                let tree = self.parse_expression()?;
                let after = self.whitespace();
                self.expect(TokenKind::RParen)?;
                Ok(Parentheses {
                    id: TreeId::next(),
                    prefix,
                    tree: RightPadded::new(tree, after),
                }
                .into())
            }
            TokenKind::New => self.parse_new(),
            TokenKind::LBrace => self.parse_array_initializer(),
            kind if kind.primitive().is_some() => self.parse_type(),
            _ => Err(self.cursor.error("expression")),
        }
    }

    /// `new T(args) { body }`, `new T[n][]` or `new T[] { ... }`.
    fn parse_new(&mut self) -> Result<J, ParseError> {
        let prefix = self.expect(TokenKind::New)?;
        let clazz = self.parse_type_without_dimensions()?;

        if self.at(TokenKind::LBracket) {
            let mut dimensions = Vec::new();
            while self.at(TokenKind::LBracket) {
                dimensions.push(self.parse_array_dimension()?);
            }
            let initializer = if self.at(TokenKind::LBrace) {
                Some(self.parse_initializer_elements()?)
            } else {
                None
            };
            return Ok(NewArray {
                id: TreeId::next(),
                prefix,
                type_expr: Some(clazz),
                dimensions,
                initializer,
            }
            .into());
        }

        let arguments = self.parse_arguments()?;
        let body = if self.at(TokenKind::LBrace) {
            Some(self.parse_class_body()?)
        } else {
            None
        };
        Ok(NewClass {
            id: TreeId::next(),
            prefix,
            clazz,
            arguments,
            body,
            constructor_type: None,
        }
        .into())
    }

    /// `{a, b}` where an expression is expected.
    pub(crate) fn parse_array_initializer(&mut self) -> Result<J, ParseError> {
        let prefix = self.whitespace();
        let initializer = self.parse_initializer_elements()?;
        Ok(NewArray {
            id: TreeId::next(),
            prefix,
            type_expr: None,
            dimensions: Vec::new(),
            initializer: Some(initializer),
        }
        .into())
    }

    fn parse_initializer_elements(&mut self) -> Result<Container<J>, ParseError> {
        self.delimited(TokenKind::LBrace, TokenKind::RBrace, |p| {
            if p.at(TokenKind::LBrace) {
                p.parse_array_initializer()
            } else {
                p.parse_expression()
            }
        })
    }

    /// `x -> body`, `(x, y) -> body`, `(int x) -> { ... }`.
    fn parse_lambda(&mut self) -> Result<J, ParseError> {
        let prefix = self.whitespace();
        let parameters = if self.at(TokenKind::Identifier) {
            LambdaParameters {
                prefix: Space::EMPTY,
                parenthesized: false,
                parameters: vec![RightPadded::build(self.ident()?)],
            }
        } else {
            let container =
                self.delimited(TokenKind::LParen, TokenKind::RParen, Self::parse_lambda_parameter)?;
            LambdaParameters {
                prefix: container.before,
                parenthesized: true,
                parameters: container.elements,
            }
        };
        let arrow = self.expect(TokenKind::Arrow)?;
        let body = if self.at(TokenKind::LBrace) {
            self.parse_block()?
        } else {
            self.parse_expression()?
        };
        Ok(Lambda {
            id: TreeId::next(),
            prefix,
            parameters,
            arrow,
            body,
        }
        .into())
    }

    fn parse_lambda_parameter(&mut self) -> Result<J, ParseError> {
        if self.at_local_variable() || self.at(TokenKind::Final) {
            self.parse_parameter()
        } else {
            self.ident()
        }
    }

    /// `name` or `name = initializer`. The variable owns the space before
    /// the name.
    pub(crate) fn parse_named_variable(&mut self, initializer: bool) -> Result<J, ParseError> {
        if !self.at(TokenKind::Identifier) {
            return Err(self.cursor.error("variable name"));
        }
        let prefix = self.whitespace();
        let name = Identifier::build(Space::EMPTY, self.cursor.text());
        self.bump();
        let initializer = if initializer && self.at(TokenKind::Assign) {
            let before = self.bump();
            let value = if self.at(TokenKind::LBrace) {
                self.parse_array_initializer()?
            } else {
                self.parse_expression()?
            };
            Some(LeftPadded::new(before, value))
        } else {
            None
        };
        Ok(NamedVariable {
            id: TreeId::next(),
            prefix,
            name: name.into(),
            initializer,
            variable_type: None,
        }
        .into())
    }
}
