//! Keyword and operator enums carried by tree nodes.

use remold_types::Flags;

/// Declaration modifier keywords.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModifierKind {
    Default,
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Native,
    Strictfp,
    Synchronized,
    Transient,
    Volatile,
}

impl ModifierKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            ModifierKind::Default => "default",
            ModifierKind::Public => "public",
            ModifierKind::Protected => "protected",
            ModifierKind::Private => "private",
            ModifierKind::Abstract => "abstract",
            ModifierKind::Static => "static",
            ModifierKind::Final => "final",
            ModifierKind::Native => "native",
            ModifierKind::Strictfp => "strictfp",
            ModifierKind::Synchronized => "synchronized",
            ModifierKind::Transient => "transient",
            ModifierKind::Volatile => "volatile",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<ModifierKind> {
        let kind = match keyword {
            "default" => ModifierKind::Default,
            "public" => ModifierKind::Public,
            "protected" => ModifierKind::Protected,
            "private" => ModifierKind::Private,
            "abstract" => ModifierKind::Abstract,
            "static" => ModifierKind::Static,
            "final" => ModifierKind::Final,
            "native" => ModifierKind::Native,
            "strictfp" => ModifierKind::Strictfp,
            "synchronized" => ModifierKind::Synchronized,
            "transient" => ModifierKind::Transient,
            "volatile" => ModifierKind::Volatile,
            _ => return None,
        };
        Some(kind)
    }

    /// The type-model flag this keyword sets, if it has one.
    pub const fn flag(self) -> Option<Flags> {
        match self {
            ModifierKind::Public => Some(Flags::PUBLIC),
            ModifierKind::Protected => Some(Flags::PROTECTED),
            ModifierKind::Private => Some(Flags::PRIVATE),
            ModifierKind::Abstract => Some(Flags::ABSTRACT),
            ModifierKind::Static => Some(Flags::STATIC),
            ModifierKind::Final => Some(Flags::FINAL),
            ModifierKind::Synchronized => Some(Flags::SYNCHRONIZED),
            ModifierKind::Transient => Some(Flags::TRANSIENT),
            ModifierKind::Volatile => Some(Flags::VOLATILE),
            ModifierKind::Default | ModifierKind::Native | ModifierKind::Strictfp => None,
        }
    }
}

/// Operator groups used by spacing rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Additive,
    Multiplicative,
    Shift,
    Relational,
    Equality,
    Bitwise,
    Logical,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulo,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    Equal,
    NotEqual,
    BitAnd,
    BitOr,
    BitXor,
    LeftShift,
    RightShift,
    UnsignedRightShift,
    Or,
    And,
}

impl BinaryOperator {
    pub const fn keyword(self) -> &'static str {
        match self {
            BinaryOperator::Addition => "+",
            BinaryOperator::Subtraction => "-",
            BinaryOperator::Multiplication => "*",
            BinaryOperator::Division => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::LeftShift => "<<",
            BinaryOperator::RightShift => ">>",
            BinaryOperator::UnsignedRightShift => ">>>",
            BinaryOperator::Or => "||",
            BinaryOperator::And => "&&",
        }
    }

    pub const fn category(self) -> OperatorCategory {
        match self {
            BinaryOperator::Addition | BinaryOperator::Subtraction => OperatorCategory::Additive,
            BinaryOperator::Multiplication | BinaryOperator::Division | BinaryOperator::Modulo => {
                OperatorCategory::Multiplicative
            }
            BinaryOperator::LeftShift
            | BinaryOperator::RightShift
            | BinaryOperator::UnsignedRightShift => OperatorCategory::Shift,
            BinaryOperator::LessThan
            | BinaryOperator::GreaterThan
            | BinaryOperator::LessThanOrEqual
            | BinaryOperator::GreaterThanOrEqual => OperatorCategory::Relational,
            BinaryOperator::Equal | BinaryOperator::NotEqual => OperatorCategory::Equality,
            BinaryOperator::BitAnd | BinaryOperator::BitOr | BinaryOperator::BitXor => {
                OperatorCategory::Bitwise
            }
            BinaryOperator::Or | BinaryOperator::And => OperatorCategory::Logical,
        }
    }

    /// Binding strength; higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Or => 1,
            BinaryOperator::And => 2,
            BinaryOperator::BitOr => 3,
            BinaryOperator::BitXor => 4,
            BinaryOperator::BitAnd => 5,
            BinaryOperator::Equal | BinaryOperator::NotEqual => 6,
            BinaryOperator::LessThan
            | BinaryOperator::GreaterThan
            | BinaryOperator::LessThanOrEqual
            | BinaryOperator::GreaterThanOrEqual => 7,
            BinaryOperator::LeftShift
            | BinaryOperator::RightShift
            | BinaryOperator::UnsignedRightShift => 8,
            BinaryOperator::Addition | BinaryOperator::Subtraction => 9,
            BinaryOperator::Multiplication | BinaryOperator::Division | BinaryOperator::Modulo => {
                10
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
    Positive,
    Negative,
    Complement,
    Not,
}

impl UnaryOperator {
    pub const fn keyword(self) -> &'static str {
        match self {
            UnaryOperator::PreIncrement | UnaryOperator::PostIncrement => "++",
            UnaryOperator::PreDecrement | UnaryOperator::PostDecrement => "--",
            UnaryOperator::Positive => "+",
            UnaryOperator::Negative => "-",
            UnaryOperator::Complement => "~",
            UnaryOperator::Not => "!",
        }
    }

    /// Operator printed after its operand.
    pub const fn is_postfix(self) -> bool {
        matches!(
            self,
            UnaryOperator::PostIncrement | UnaryOperator::PostDecrement
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Modulo,
    BitAnd,
    BitOr,
    BitXor,
    LeftShift,
    RightShift,
    UnsignedRightShift,
}

impl AssignmentOperator {
    pub const fn keyword(self) -> &'static str {
        match self {
            AssignmentOperator::Addition => "+=",
            AssignmentOperator::Subtraction => "-=",
            AssignmentOperator::Multiplication => "*=",
            AssignmentOperator::Division => "/=",
            AssignmentOperator::Modulo => "%=",
            AssignmentOperator::BitAnd => "&=",
            AssignmentOperator::BitOr => "|=",
            AssignmentOperator::BitXor => "^=",
            AssignmentOperator::LeftShift => "<<=",
            AssignmentOperator::RightShift => ">>=",
            AssignmentOperator::UnsignedRightShift => ">>>=",
        }
    }
}

/// `? extends T` or `? super T`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WildcardBound {
    Extends,
    Super,
}

impl WildcardBound {
    pub const fn keyword(self) -> &'static str {
        match self {
            WildcardBound::Extends => "extends",
            WildcardBound::Super => "super",
        }
    }
}
