//! Structural slots a [`Space`](crate::Space) can occupy.
//!
//! Formatting passes decide what to do with a space by where it sits, not by
//! its content, so every space handed to a visitor is tagged with one of
//! these. Padded wrappers and containers have their own location enums that
//! map onto the space locations of their `after`/`before` spaces.

/// Where a space sits in the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpaceLocation {
    AnnotationArguments,
    AnnotationArgumentSuffix,
    AnnotationPrefix,
    ArrayAccessPrefix,
    ArrayIndexSuffix,
    ArrayTypePrefix,
    Assignment,
    AssignmentOperationOperator,
    AssignmentOperationPrefix,
    AssignmentPrefix,
    BinaryOperator,
    BinaryPrefix,
    BlockEnd,
    BlockPrefix,
    BlockStatementSuffix,
    BreakPrefix,
    Case,
    CasePrefix,
    CaseSuffix,
    CatchAlternativeSuffix,
    CatchPrefix,
    ClassDeclarationPrefix,
    ClassKind,
    CompilationUnitEof,
    CompilationUnitPrefix,
    ContinuePrefix,
    ControlParenthesesPrefix,
    DimensionPrefix,
    DimensionSuffix,
    DoWhilePrefix,
    ElsePrefix,
    EmptyPrefix,
    EnumValuePrefix,
    EnumValueSetPrefix,
    EnumValueSuffix,
    Extends,
    FieldAccessName,
    FieldAccessPrefix,
    ForBodySuffix,
    ForConditionSuffix,
    ForControlPrefix,
    ForEachControlPrefix,
    ForEachIterableSuffix,
    ForEachLoopPrefix,
    ForEachVariableSuffix,
    ForInitSuffix,
    ForPrefix,
    ForUpdateSuffix,
    IdentifierPrefix,
    IfElseSuffix,
    IfPrefix,
    IfThenSuffix,
    Implements,
    ImplementsSuffix,
    ImportPrefix,
    ImportSuffix,
    LabelPrefix,
    LabelSuffix,
    LambdaArrowPrefix,
    LambdaParameterSuffix,
    LambdaParametersPrefix,
    LambdaPrefix,
    LiteralPrefix,
    MethodDeclarationParameters,
    MethodDeclarationParameterSuffix,
    MethodDeclarationPrefix,
    MethodInvocationArguments,
    MethodInvocationArgumentSuffix,
    MethodInvocationPrefix,
    MethodSelectSuffix,
    ModifierPrefix,
    MultiCatchPrefix,
    NamedVariableSuffix,
    NewArrayInitializer,
    NewArrayInitializerSuffix,
    NewArrayPrefix,
    NewClassArguments,
    NewClassArgumentsSuffix,
    NewClassPrefix,
    PackagePrefix,
    PackageSuffix,
    ParameterizedTypePrefix,
    ParenthesesPrefix,
    ParenthesesSuffix,
    PrimitivePrefix,
    ReturnPrefix,
    StaticImport,
    StaticInitSuffix,
    SwitchPrefix,
    TernaryFalse,
    TernaryPrefix,
    TernaryTrue,
    ThrowPrefix,
    Throws,
    ThrowsSuffix,
    TryFinally,
    TryPrefix,
    TypeBounds,
    TypeBoundSuffix,
    TypeCastPrefix,
    TypeParameterPrefix,
    TypeParameters,
    TypeParameterSuffix,
    UnaryOperator,
    UnaryPrefix,
    Varargs,
    VariableDeclarationsPrefix,
    VariableInitializer,
    VariablePrefix,
    WhileBodySuffix,
    WhileCondition,
    WhilePrefix,
    WildcardBound,
    WildcardPrefix,
}

/// Slot of a [`RightPadded`](crate::RightPadded) element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RightPaddedLocation {
    AnnotationArgument,
    ArrayIndex,
    BlockStatement,
    Case,
    CatchAlternative,
    Dimension,
    EnumValue,
    ForBody,
    ForCondition,
    ForEachIterable,
    ForEachVariable,
    ForInit,
    ForUpdate,
    IfElse,
    IfThen,
    Implements,
    Import,
    Label,
    LambdaParameter,
    MethodDeclarationParameter,
    MethodInvocationArgument,
    MethodSelect,
    NamedVariable,
    NewArrayInitializer,
    NewClassArguments,
    Package,
    Parentheses,
    Throws,
    TypeBound,
    TypeParameter,
    WhileBody,
}

impl RightPaddedLocation {
    /// Location of the space after the element.
    pub const fn after_location(self) -> SpaceLocation {
        match self {
            RightPaddedLocation::AnnotationArgument => SpaceLocation::AnnotationArgumentSuffix,
            RightPaddedLocation::ArrayIndex => SpaceLocation::ArrayIndexSuffix,
            RightPaddedLocation::BlockStatement => SpaceLocation::BlockStatementSuffix,
            RightPaddedLocation::Case => SpaceLocation::CaseSuffix,
            RightPaddedLocation::CatchAlternative => SpaceLocation::CatchAlternativeSuffix,
            RightPaddedLocation::Dimension => SpaceLocation::DimensionSuffix,
            RightPaddedLocation::EnumValue => SpaceLocation::EnumValueSuffix,
            RightPaddedLocation::ForBody => SpaceLocation::ForBodySuffix,
            RightPaddedLocation::ForCondition => SpaceLocation::ForConditionSuffix,
            RightPaddedLocation::ForEachIterable => SpaceLocation::ForEachIterableSuffix,
            RightPaddedLocation::ForEachVariable => SpaceLocation::ForEachVariableSuffix,
            RightPaddedLocation::ForInit => SpaceLocation::ForInitSuffix,
            RightPaddedLocation::ForUpdate => SpaceLocation::ForUpdateSuffix,
            RightPaddedLocation::IfElse => SpaceLocation::IfElseSuffix,
            RightPaddedLocation::IfThen => SpaceLocation::IfThenSuffix,
            RightPaddedLocation::Implements => SpaceLocation::ImplementsSuffix,
            RightPaddedLocation::Import => SpaceLocation::ImportSuffix,
            RightPaddedLocation::Label => SpaceLocation::LabelSuffix,
            RightPaddedLocation::LambdaParameter => SpaceLocation::LambdaParameterSuffix,
            RightPaddedLocation::MethodDeclarationParameter => {
                SpaceLocation::MethodDeclarationParameterSuffix
            }
            RightPaddedLocation::MethodInvocationArgument => {
                SpaceLocation::MethodInvocationArgumentSuffix
            }
            RightPaddedLocation::MethodSelect => SpaceLocation::MethodSelectSuffix,
            RightPaddedLocation::NamedVariable => SpaceLocation::NamedVariableSuffix,
            RightPaddedLocation::NewArrayInitializer => SpaceLocation::NewArrayInitializerSuffix,
            RightPaddedLocation::NewClassArguments => SpaceLocation::NewClassArgumentsSuffix,
            RightPaddedLocation::Package => SpaceLocation::PackageSuffix,
            RightPaddedLocation::Parentheses => SpaceLocation::ParenthesesSuffix,
            RightPaddedLocation::Throws => SpaceLocation::ThrowsSuffix,
            RightPaddedLocation::TypeBound => SpaceLocation::TypeBoundSuffix,
            RightPaddedLocation::TypeParameter => SpaceLocation::TypeParameterSuffix,
            RightPaddedLocation::WhileBody => SpaceLocation::WhileBodySuffix,
        }
    }
}

/// Slot of a [`LeftPadded`](crate::LeftPadded) element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LeftPaddedLocation {
    Assignment,
    AssignmentOperationOperator,
    BinaryOperator,
    Extends,
    FieldAccessName,
    StaticImport,
    TernaryFalse,
    TernaryTrue,
    TryFinally,
    UnaryOperator,
    VariableInitializer,
    WhileCondition,
    WildcardBound,
}

impl LeftPaddedLocation {
    /// Location of the space before the element.
    pub const fn before_location(self) -> SpaceLocation {
        match self {
            LeftPaddedLocation::Assignment => SpaceLocation::Assignment,
            LeftPaddedLocation::AssignmentOperationOperator => {
                SpaceLocation::AssignmentOperationOperator
            }
            LeftPaddedLocation::BinaryOperator => SpaceLocation::BinaryOperator,
            LeftPaddedLocation::Extends => SpaceLocation::Extends,
            LeftPaddedLocation::FieldAccessName => SpaceLocation::FieldAccessName,
            LeftPaddedLocation::StaticImport => SpaceLocation::StaticImport,
            LeftPaddedLocation::TernaryFalse => SpaceLocation::TernaryFalse,
            LeftPaddedLocation::TernaryTrue => SpaceLocation::TernaryTrue,
            LeftPaddedLocation::TryFinally => SpaceLocation::TryFinally,
            LeftPaddedLocation::UnaryOperator => SpaceLocation::UnaryOperator,
            LeftPaddedLocation::VariableInitializer => SpaceLocation::VariableInitializer,
            LeftPaddedLocation::WhileCondition => SpaceLocation::WhileCondition,
            LeftPaddedLocation::WildcardBound => SpaceLocation::WildcardBound,
        }
    }
}

/// Slot of a [`Container`](crate::Container).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContainerLocation {
    AnnotationArguments,
    Case,
    Implements,
    MethodDeclarationParameters,
    MethodInvocationArguments,
    NewArrayInitializer,
    NewClassArguments,
    Throws,
    TypeBounds,
    TypeParameters,
}

impl ContainerLocation {
    /// Location of the space before the opening delimiter.
    pub const fn before_location(self) -> SpaceLocation {
        match self {
            ContainerLocation::AnnotationArguments => SpaceLocation::AnnotationArguments,
            ContainerLocation::Case => SpaceLocation::Case,
            ContainerLocation::Implements => SpaceLocation::Implements,
            ContainerLocation::MethodDeclarationParameters => {
                SpaceLocation::MethodDeclarationParameters
            }
            ContainerLocation::MethodInvocationArguments => {
                SpaceLocation::MethodInvocationArguments
            }
            ContainerLocation::NewArrayInitializer => SpaceLocation::NewArrayInitializer,
            ContainerLocation::NewClassArguments => SpaceLocation::NewClassArguments,
            ContainerLocation::Throws => SpaceLocation::Throws,
            ContainerLocation::TypeBounds => SpaceLocation::TypeBounds,
            ContainerLocation::TypeParameters => SpaceLocation::TypeParameters,
        }
    }

    /// Location of each padded element.
    pub const fn element_location(self) -> RightPaddedLocation {
        match self {
            ContainerLocation::AnnotationArguments => RightPaddedLocation::AnnotationArgument,
            ContainerLocation::Case => RightPaddedLocation::Case,
            ContainerLocation::Implements => RightPaddedLocation::Implements,
            ContainerLocation::MethodDeclarationParameters => {
                RightPaddedLocation::MethodDeclarationParameter
            }
            ContainerLocation::MethodInvocationArguments => {
                RightPaddedLocation::MethodInvocationArgument
            }
            ContainerLocation::NewArrayInitializer => RightPaddedLocation::NewArrayInitializer,
            ContainerLocation::NewClassArguments => RightPaddedLocation::NewClassArguments,
            ContainerLocation::Throws => RightPaddedLocation::Throws,
            ContainerLocation::TypeBounds => RightPaddedLocation::TypeBound,
            ContainerLocation::TypeParameters => RightPaddedLocation::TypeParameter,
        }
    }
}
