//! Statements and their control parts.

use crate::{Container, LeftPadded, RightPadded, Space, TreeId, J};

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub id: TreeId,
    pub prefix: Space,
    /// Static initializer: space between `static` and `{`.
    pub is_static: Option<Space>,
    pub statements: Vec<RightPadded<J>>,
    /// Space before the closing `}`.
    pub end: Space,
}

impl Block {
    pub fn build(prefix: Space, statements: Vec<RightPadded<J>>, end: Space) -> Self {
        Self {
            id: TreeId::next(),
            prefix,
            is_static: None,
            statements,
            end,
        }
    }
}

/// `( tree )` around an `if`/`while`/`switch` condition or a cast type.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlParentheses {
    pub id: TreeId,
    pub prefix: Space,
    pub tree: RightPadded<J>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct If {
    pub id: TreeId,
    pub prefix: Space,
    pub condition: J,
    pub then_part: RightPadded<J>,
    pub else_part: Option<J>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Else {
    pub id: TreeId,
    pub prefix: Space,
    pub body: RightPadded<J>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WhileLoop {
    pub id: TreeId,
    pub prefix: Space,
    pub condition: J,
    pub body: RightPadded<J>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DoWhileLoop {
    pub id: TreeId,
    pub prefix: Space,
    pub body: RightPadded<J>,
    /// `while` keyword with the space before it, then the condition.
    pub while_condition: LeftPadded<J>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForLoop {
    pub id: TreeId,
    pub prefix: Space,
    pub control: J,
    pub body: RightPadded<J>,
}

/// `(init; condition; update)`. Omitted sections hold a single [`Empty`].
#[derive(Clone, Debug, PartialEq)]
pub struct ForControl {
    pub id: TreeId,
    pub prefix: Space,
    pub init: Vec<RightPadded<J>>,
    pub condition: RightPadded<J>,
    pub update: Vec<RightPadded<J>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForEachLoop {
    pub id: TreeId,
    pub prefix: Space,
    pub control: J,
    pub body: RightPadded<J>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForEachControl {
    pub id: TreeId,
    pub prefix: Space,
    pub variable: RightPadded<J>,
    pub iterable: RightPadded<J>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Try {
    pub id: TreeId,
    pub prefix: Space,
    pub body: J,
    pub catches: Vec<J>,
    /// `finally` keyword with the space before it, then its block.
    pub finally: Option<LeftPadded<J>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Catch {
    pub id: TreeId,
    pub prefix: Space,
    pub parameter: J,
    pub body: J,
}

/// `A | B` in a catch parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiCatch {
    pub id: TreeId,
    pub prefix: Space,
    pub alternatives: Vec<RightPadded<J>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Return {
    pub id: TreeId,
    pub prefix: Space,
    pub expression: Option<J>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Throw {
    pub id: TreeId,
    pub prefix: Space,
    pub exception: J,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Break {
    pub id: TreeId,
    pub prefix: Space,
    pub label: Option<J>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Continue {
    pub id: TreeId,
    pub prefix: Space,
    pub label: Option<J>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub id: TreeId,
    pub prefix: Space,
    /// The label name with the space before its `:`.
    pub label: RightPadded<J>,
    pub statement: J,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Switch {
    pub id: TreeId,
    pub prefix: Space,
    pub selector: J,
    /// A [`Block`] of [`Case`]s.
    pub cases: J,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Case {
    pub id: TreeId,
    pub prefix: Space,
    /// `None` for `default`.
    pub expression: Option<J>,
    /// Statements after the `:`; `before` is the space before the `:`.
    pub statements: Container<J>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Empty {
    pub id: TreeId,
    pub prefix: Space,
}

impl Empty {
    pub fn build(prefix: Space) -> Self {
        Self {
            id: TreeId::next(),
            prefix,
        }
    }
}
