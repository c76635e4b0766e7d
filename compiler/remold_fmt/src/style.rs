//! Style settings read by the format passes.
//!
//! Every style is a plain struct whose `Default` is the IntelliJ preset.
//! Builders take `self` by value so a variation reads as one expression:
//!
//! ```text
//! let styles = Styles::default()
//!     .with_tabs_and_indents(TabsAndIndentsStyle::default().with_indent_size(2));
//! ```

#![allow(
    clippy::struct_excessive_bools,
    reason = "one flag per IntelliJ checkbox"
)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Indentation widths and the tab policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TabsAndIndentsStyle {
    pub use_tab_character: bool,
    /// Columns a tab character advances.
    pub tab_size: usize,
    /// Columns added for each nested block.
    pub indent_size: usize,
    /// Columns added when a statement or expression wraps onto a new line.
    pub continuation_indent: usize,
}

impl Default for TabsAndIndentsStyle {
    fn default() -> Self {
        Self {
            use_tab_character: false,
            tab_size: 4,
            indent_size: 4,
            continuation_indent: 8,
        }
    }
}

impl TabsAndIndentsStyle {
    #[must_use]
    pub fn with_use_tab_character(mut self, use_tab_character: bool) -> Self {
        self.use_tab_character = use_tab_character;
        self
    }

    #[must_use]
    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    #[must_use]
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    #[must_use]
    pub fn with_continuation_indent(mut self, continuation_indent: usize) -> Self {
        self.continuation_indent = continuation_indent;
        self
    }
}

/// Space before an opening parenthesis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BeforeParentheses {
    pub method_declaration: bool,
    pub method_call: bool,
    pub if_parentheses: bool,
    pub for_parentheses: bool,
    pub while_parentheses: bool,
    pub switch_parentheses: bool,
    pub try_parentheses: bool,
    pub catch_parentheses: bool,
    pub synchronized_parentheses: bool,
    pub annotation_parameters: bool,
}

impl Default for BeforeParentheses {
    fn default() -> Self {
        Self {
            method_declaration: false,
            method_call: false,
            if_parentheses: true,
            for_parentheses: true,
            while_parentheses: true,
            switch_parentheses: true,
            try_parentheses: true,
            catch_parentheses: true,
            synchronized_parentheses: true,
            annotation_parameters: false,
        }
    }
}

/// Spaces on both sides of an operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AroundOperators {
    pub assignment: bool,
    pub logical: bool,
    pub equality: bool,
    pub relational: bool,
    pub bitwise: bool,
    pub additive: bool,
    pub multiplicative: bool,
    pub shift: bool,
    pub unary: bool,
    pub lambda_arrow: bool,
}

impl Default for AroundOperators {
    fn default() -> Self {
        Self {
            assignment: true,
            logical: true,
            equality: true,
            relational: true,
            bitwise: true,
            additive: true,
            multiplicative: true,
            shift: true,
            unary: false,
            lambda_arrow: true,
        }
    }
}

/// Space before an opening brace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BeforeLeftBrace {
    pub class_left_brace: bool,
    pub method_left_brace: bool,
    pub if_left_brace: bool,
    pub else_left_brace: bool,
    pub for_left_brace: bool,
    pub while_left_brace: bool,
    pub do_left_brace: bool,
    pub switch_left_brace: bool,
    pub try_left_brace: bool,
    pub catch_left_brace: bool,
    pub finally_left_brace: bool,
    pub synchronized_left_brace: bool,
    pub array_initializer_left_brace: bool,
    pub annotation_array_initializer_left_brace: bool,
}

impl Default for BeforeLeftBrace {
    fn default() -> Self {
        Self {
            class_left_brace: true,
            method_left_brace: true,
            if_left_brace: true,
            else_left_brace: true,
            for_left_brace: true,
            while_left_brace: true,
            do_left_brace: true,
            switch_left_brace: true,
            try_left_brace: true,
            catch_left_brace: true,
            finally_left_brace: true,
            synchronized_left_brace: true,
            array_initializer_left_brace: false,
            annotation_array_initializer_left_brace: false,
        }
    }
}

/// Space before a keyword that continues a statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BeforeKeywords {
    pub else_keyword: bool,
    pub while_keyword: bool,
    pub catch_keyword: bool,
    pub finally_keyword: bool,
}

impl Default for BeforeKeywords {
    fn default() -> Self {
        Self {
            else_keyword: true,
            while_keyword: true,
            catch_keyword: true,
            finally_keyword: true,
        }
    }
}

/// Space just inside a pair of delimiters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Within {
    pub code_braces: bool,
    pub brackets: bool,
    pub array_initializer_braces: bool,
    pub empty_array_initializer_braces: bool,
    pub grouping_parentheses: bool,
    pub method_declaration_parentheses: bool,
    pub empty_method_declaration_parentheses: bool,
    pub method_call_parentheses: bool,
    pub empty_method_call_parentheses: bool,
    pub if_parentheses: bool,
    pub for_parentheses: bool,
    pub while_parentheses: bool,
    pub switch_parentheses: bool,
    pub try_parentheses: bool,
    pub catch_parentheses: bool,
    pub synchronized_parentheses: bool,
    pub type_cast_parentheses: bool,
    pub annotation_parentheses: bool,
    pub angle_brackets: bool,
}

/// Spaces around `?` and `:` of a conditional expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TernaryOperator {
    pub before_question_mark: bool,
    pub after_question_mark: bool,
    pub before_colon: bool,
    pub after_colon: bool,
}

impl Default for TernaryOperator {
    fn default() -> Self {
        Self {
            before_question_mark: true,
            after_question_mark: true,
            before_colon: true,
            after_colon: true,
        }
    }
}

/// Type arguments at a use site: `List<String>`, `foo.<T>bar()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeArguments {
    pub after_comma: bool,
    pub before_opening_angle_bracket: bool,
    pub after_closing_angle_bracket: bool,
}

impl Default for TypeArguments {
    fn default() -> Self {
        Self {
            after_comma: true,
            before_opening_angle_bracket: false,
            after_closing_angle_bracket: false,
        }
    }
}

/// Type parameters at a declaration: `class Box<T extends A & B>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeParameters {
    pub before_opening_angle_bracket: bool,
    pub around_type_bounds: bool,
}

impl Default for TypeParameters {
    fn default() -> Self {
        Self {
            before_opening_angle_bracket: false,
            around_type_bounds: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Other {
    pub before_comma: bool,
    pub after_comma: bool,
    pub before_for_semicolon: bool,
    pub after_for_semicolon: bool,
    pub after_type_cast: bool,
    pub before_colon_in_for_each: bool,
    pub inside_one_line_enum_braces: bool,
}

impl Default for Other {
    fn default() -> Self {
        Self {
            before_comma: false,
            after_comma: true,
            before_for_semicolon: false,
            after_for_semicolon: true,
            after_type_cast: true,
            before_colon_in_for_each: true,
            inside_one_line_enum_braces: false,
        }
    }
}

/// Same-line spacing between tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpacesStyle {
    pub before_parentheses: BeforeParentheses,
    pub around_operators: AroundOperators,
    pub before_left_brace: BeforeLeftBrace,
    pub before_keywords: BeforeKeywords,
    pub within: Within,
    pub ternary_operator: TernaryOperator,
    pub type_arguments: TypeArguments,
    pub type_parameters: TypeParameters,
    pub other: Other,
}

impl SpacesStyle {
    #[must_use]
    pub fn with_before_parentheses(mut self, before_parentheses: BeforeParentheses) -> Self {
        self.before_parentheses = before_parentheses;
        self
    }

    #[must_use]
    pub fn with_around_operators(mut self, around_operators: AroundOperators) -> Self {
        self.around_operators = around_operators;
        self
    }

    #[must_use]
    pub fn with_before_left_brace(mut self, before_left_brace: BeforeLeftBrace) -> Self {
        self.before_left_brace = before_left_brace;
        self
    }

    #[must_use]
    pub fn with_before_keywords(mut self, before_keywords: BeforeKeywords) -> Self {
        self.before_keywords = before_keywords;
        self
    }

    #[must_use]
    pub fn with_within(mut self, within: Within) -> Self {
        self.within = within;
        self
    }

    #[must_use]
    pub fn with_ternary_operator(mut self, ternary_operator: TernaryOperator) -> Self {
        self.ternary_operator = ternary_operator;
        self
    }

    #[must_use]
    pub fn with_type_arguments(mut self, type_arguments: TypeArguments) -> Self {
        self.type_arguments = type_arguments;
        self
    }

    #[must_use]
    pub fn with_type_parameters(mut self, type_parameters: TypeParameters) -> Self {
        self.type_parameters = type_parameters;
        self
    }

    #[must_use]
    pub fn with_other(mut self, other: Other) -> Self {
        self.other = other;
        self
    }
}

/// Space inside an empty `for` initializer: `for ( ; ...`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmptyForInitializerPadStyle {
    pub space: bool,
}

/// Space inside an empty `for` update: `for (...; ; )`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmptyForIteratorPadStyle {
    pub space: bool,
}

/// How many blank lines to keep, and where to require them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlankLinesStyle {
    pub keep_maximum_in_code: usize,
    pub keep_maximum_in_declarations: usize,
    pub keep_maximum_before_end_of_block: usize,
    pub minimum_after_package: usize,
    pub minimum_after_imports: usize,
    pub minimum_around_class: usize,
    pub minimum_around_method: usize,
    pub minimum_before_method_body: usize,
}

impl Default for BlankLinesStyle {
    fn default() -> Self {
        Self {
            keep_maximum_in_code: 2,
            keep_maximum_in_declarations: 2,
            keep_maximum_before_end_of_block: 2,
            minimum_after_package: 1,
            minimum_after_imports: 1,
            minimum_around_class: 1,
            minimum_around_method: 1,
            minimum_before_method_body: 0,
        }
    }
}

impl BlankLinesStyle {
    #[must_use]
    pub fn with_keep_maximum_in_code(mut self, keep_maximum_in_code: usize) -> Self {
        self.keep_maximum_in_code = keep_maximum_in_code;
        self
    }

    #[must_use]
    pub fn with_keep_maximum_in_declarations(mut self, keep_maximum: usize) -> Self {
        self.keep_maximum_in_declarations = keep_maximum;
        self
    }

    #[must_use]
    pub fn with_keep_maximum_before_end_of_block(mut self, keep_maximum: usize) -> Self {
        self.keep_maximum_before_end_of_block = keep_maximum;
        self
    }

    #[must_use]
    pub fn with_minimum_around_method(mut self, minimum_around_method: usize) -> Self {
        self.minimum_around_method = minimum_around_method;
        self
    }

    #[must_use]
    pub fn with_minimum_around_class(mut self, minimum_around_class: usize) -> Self {
        self.minimum_around_class = minimum_around_class;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneralFormatStyle {
    /// Write `\r\n` line breaks instead of `\n`.
    pub use_crlf_new_lines: bool,
}

impl GeneralFormatStyle {
    pub const fn line_break(self) -> &'static str {
        if self.use_crlf_new_lines {
            "\r\n"
        } else {
            "\n"
        }
    }
}

/// One of each style, as a session carries them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Styles {
    pub tabs_and_indents: TabsAndIndentsStyle,
    pub spaces: SpacesStyle,
    pub blank_lines: BlankLinesStyle,
    pub general: GeneralFormatStyle,
    pub empty_for_initializer_pad: Option<EmptyForInitializerPadStyle>,
    pub empty_for_iterator_pad: Option<EmptyForIteratorPadStyle>,
}

impl Styles {
    #[must_use]
    pub fn with_tabs_and_indents(mut self, style: TabsAndIndentsStyle) -> Self {
        self.tabs_and_indents = style;
        self
    }

    #[must_use]
    pub fn with_spaces(mut self, style: SpacesStyle) -> Self {
        self.spaces = style;
        self
    }

    #[must_use]
    pub fn with_blank_lines(mut self, style: BlankLinesStyle) -> Self {
        self.blank_lines = style;
        self
    }

    #[must_use]
    pub fn with_general(mut self, style: GeneralFormatStyle) -> Self {
        self.general = style;
        self
    }

    #[must_use]
    pub fn with_empty_for_initializer_pad(
        mut self,
        style: Option<EmptyForInitializerPadStyle>,
    ) -> Self {
        self.empty_for_initializer_pad = style;
        self
    }

    #[must_use]
    pub fn with_empty_for_iterator_pad(mut self, style: Option<EmptyForIteratorPadStyle>) -> Self {
        self.empty_for_iterator_pad = style;
        self
    }
}

#[cfg(test)]
mod tests;
