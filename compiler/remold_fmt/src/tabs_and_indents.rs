//! Indentation.
//!
//! Re-indents every space that starts a new line, and every comment, to the
//! column its position calls for. The column is tracked as a cursor message:
//! each frame whose space starts a line records the column it was indented
//! to (`last_indent`), and children add one of three increments to the
//! nearest recorded column:
//!
//! - `Align`: same column (declarations, `do`, closing braces)
//! - `Indent`: one `indent_size` deeper (block bodies, `if`/loop bodies, cases)
//! - `ContinuationIndent`: one `continuation_indent` deeper (wrapped expressions)
//!
//! Argument lists, method chains and `for` headers override the increment
//! for their elements so that wrapped parts line up with their siblings.
//!
//! Spaces that do not start a line and carry no comments are never touched,
//! so running the pass twice changes nothing the second time.

use remold_tree::{
    Comment, Container, ContainerLocation, RightPadded, RightPaddedLocation, Space,
    SpaceLocation, TreeId, J,
};
use remold_visit::{Cursor, CursorValue, JavaVisitor, VisitError, VisitResult};

use crate::style::TabsAndIndentsStyle;

const LAST_INDENT: &str = "last_indent";
const INDENT_TYPE: &str = "indent_type";
const LAST_LOCATION: &str = "last_location";
const AFTER_ANNOTATION: &str = "after_annotation";

/// Increment a node's children get relative to the nearest recorded column.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum IndentType {
    Align,
    Indent,
    ContinuationIndent,
}

fn column(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

fn count(n: i32) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// Elements of the container a cursor frame points at.
fn container_elements(cursor: &Cursor) -> &[RightPadded<J>] {
    match cursor.value() {
        CursorValue::Container { container, .. } => &container.elements,
        _ => &[],
    }
}

/// The indentation pass.
#[derive(Clone, Debug)]
pub struct TabsAndIndentsVisitor {
    style: TabsAndIndentsStyle,
    stop_after: Option<TreeId>,
}

impl TabsAndIndentsVisitor {
    pub fn new(style: TabsAndIndentsStyle) -> Self {
        Self {
            style,
            stop_after: None,
        }
    }

    /// Leave everything after `id` as it is.
    #[must_use]
    pub fn with_stop_after(mut self, stop_after: Option<TreeId>) -> Self {
        self.stop_after = stop_after;
        self
    }

    /// Indent `tree` as a subtree sitting at `parent`.
    ///
    /// The columns of the enclosing frames are recovered from their own
    /// prefixes first, so a node formatted in place lines up with the code
    /// around it.
    ///
    /// # Errors
    ///
    /// Fails when the cursor chain is missing a frame a wrapped construct
    /// needs, e.g. the `for` loop around a wrapped loop condition.
    #[tracing::instrument(level = "debug", skip_all, fields(node = tree.variant_name()))]
    pub fn visit_at(&mut self, tree: J, parent: &Cursor) -> VisitResult<J> {
        for frame in parent.path() {
            let space = match frame.value() {
                CursorValue::Tree(tree) => Some(tree.prefix()),
                CursorValue::Container { container, .. } => Some(&container.before),
                CursorValue::Root
                | CursorValue::RightPadded { .. }
                | CursorValue::LeftPadded { .. } => None,
            };
            if let Some(space) = space.filter(|space| space.has_newline()) {
                let indent = self.find_indent(space);
                if indent != 0 {
                    frame.put_message(LAST_INDENT, indent);
                }
            }
        }

        if let Some(enclosing) = parent.first_enclosing_cursor(|_| true) {
            if let Some(tree) = enclosing.tree() {
                self.pre_visit(tree.clone(), enclosing)?;
            }
        }
        self.visit(tree, parent)
    }

    fn tab_size(&self) -> i32 {
        column(self.style.tab_size).max(1)
    }

    fn indent_size(&self) -> i32 {
        column(self.style.indent_size)
    }

    fn continuation_indent(&self) -> i32 {
        column(self.style.continuation_indent)
    }

    /// Column reached by `whitespace`, counting from its last line break.
    fn width(&self, whitespace: &str) -> i32 {
        let tab = self.tab_size();
        whitespace.chars().fold(0, |size, c| match c {
            '\n' | '\r' => 0,
            '\t' => size + tab,
            _ => size + 1,
        })
    }

    /// Column the token after `space` starts at, if it starts a line.
    fn find_indent(&self, space: &Space) -> i32 {
        self.width(space.indent())
    }

    /// Indentation characters spanning `width` columns: tabs then spaces
    /// when tabs are on, spaces otherwise. Nothing for a negative width.
    fn indentation(&self, width: i32) -> String {
        let width = width.max(0);
        let (tabs, spaces) = if self.style.use_tab_character {
            (width / self.tab_size(), width % self.tab_size())
        } else {
            (0, width)
        };
        let mut indentation = "\t".repeat(count(tabs));
        indentation.push_str(&" ".repeat(count(spaces)));
        indentation
    }

    /// Replace the run after the last line break of `text` with exactly
    /// `column` columns of indentation.
    fn reindent(&self, text: &str, column: i32) -> String {
        let line_start = text.rfind('\n').map_or(0, |newline| newline + 1);
        let mut text = text[..line_start].to_string();
        text.push_str(&self.indentation(column));
        text
    }

    /// Move `space` (and its comments) so that the next token starts at
    /// `column`.
    fn indent_to(&self, space: Space, column: i32, loc: SpaceLocation) -> Space {
        let original = space.clone();
        let mut space = space;
        if loc == SpaceLocation::CompilationUnitPrefix && !original.whitespace.is_empty() {
            space.whitespace = String::new();
        } else if space.comments.is_empty() && !space.has_newline() {
            return space;
        }

        if space.comments.is_empty() {
            let indent = self.find_indent(&space);
            if indent != column {
                space.whitespace = self.reindent(&original.whitespace, column);
            }
            return space;
        }

        let has_file_leading_comment = loc == SpaceLocation::CompilationUnitPrefix
            || (loc == SpaceLocation::ClassDeclarationPrefix
                && original.comments[0].is_multiline());
        let final_column = if loc == SpaceLocation::BlockEnd {
            column + self.indent_size()
        } else {
            column
        };

        let whitespace = &original.whitespace;
        let line_start = whitespace.rfind('\n').map_or(0, |newline| newline + 1);
        let last_indent = &whitespace[line_start..];
        let indent = self.width(last_indent);
        // The first comment already sits at the target column; suffixes after
        // it are left as written.
        if indent == final_column {
            return space;
        }

        if whitespace.contains('\n') || has_file_leading_comment {
            space.whitespace = self.reindent(whitespace, final_column);
        }

        let last = original.comments.len() - 1;
        space.comments = original
            .comments
            .iter()
            .enumerate()
            .map(|(i, comment)| {
                let prior_suffix = if i == 0 {
                    whitespace
                } else {
                    &original.comments[i - 1].suffix
                };
                // Comments before a closing brace belong to the block body.
                let to_column = if loc == SpaceLocation::BlockEnd && i != last {
                    column + self.indent_size()
                } else {
                    column
                };

                let mut comment = comment.clone();
                if prior_suffix.contains('\n') || has_file_leading_comment {
                    comment = self.indent_comment(comment, prior_suffix, to_column);
                }
                if comment.suffix.contains('\n') {
                    comment.suffix = self.reindent(&comment.suffix, to_column);
                }
                comment
            })
            .collect();
        space
    }

    /// Shift the continuation lines of a multi-line comment by as much as
    /// its first line moves.
    fn indent_comment(&self, comment: Comment, prior_suffix: &str, column: i32) -> Comment {
        if !comment.text.contains('\n') {
            return comment;
        }
        let margin = &prior_suffix[prior_suffix.rfind('\n').map_or(0, |newline| newline + 1)..];
        let shift = column - self.width(margin);
        if shift == 0 {
            return comment;
        }

        let margin_len = margin.chars().count();
        let pad = self.indentation(shift);
        let mut lines = comment.text.split('\n');
        let mut text = String::with_capacity(comment.text.len());
        text.push_str(lines.next().unwrap_or_default());
        for line in lines {
            text.push('\n');
            let is_indent = |c: &char| matches!(c, ' ' | '\t');
            if shift > 0 {
                let kept: usize = line
                    .chars()
                    .take(margin_len)
                    .take_while(is_indent)
                    .map(char::len_utf8)
                    .sum();
                text.push_str(&line[..kept]);
                text.push_str(&pad);
                text.push_str(&line[kept..]);
            } else {
                let dropped: usize = line
                    .chars()
                    .take(count(-shift))
                    .take_while(is_indent)
                    .map(char::len_utf8)
                    .sum();
                text.push_str(&line[dropped..]);
            }
        }
        comment.with_text(text)
    }

    /// Column of the first `for` initializer, so wrapped conditions and
    /// updates can line up with it.
    fn for_init_column(&self, cursor: &Cursor) -> VisitResult<i32> {
        let for_cursor = cursor
            .first_enclosing_cursor(|tree| matches!(tree, J::ForLoop(_)))
            .ok_or(VisitError::MissingForControl)?;
        let Some(J::ForLoop(for_loop)) = for_cursor.tree() else {
            return Err(VisitError::MissingForControl);
        };

        let mut header = (**for_loop).clone();
        header.body = RightPadded::build(J::empty());
        let (anchor, header): (&Cursor, J) = match for_cursor
            .parent_tree_cursor()
            .filter(|parent| matches!(parent.tree(), Some(J::Label(_))))
        {
            Some(label_cursor) => {
                let Some(J::Label(label)) = label_cursor.tree() else {
                    return Err(VisitError::MissingForControl);
                };
                let mut label = (**label).clone();
                label.prefix = Space::EMPTY;
                label.statement = header.into();
                (label_cursor, label.into())
            }
            None => {
                header.prefix = Space::EMPTY;
                (for_cursor, header.into())
            }
        };

        let mut line_start = anchor.nearest_message::<i32>(LAST_INDENT).unwrap_or(0);
        let mut offset = 0;
        let mut after_paren = false;
        for c in header.print().chars() {
            if c == '\n' {
                line_start = 0;
                offset = 0;
                continue;
            }
            if after_paren && !c.is_whitespace() {
                return Ok(line_start + offset);
            }
            if c == '(' {
                after_paren = true;
            }
            offset += 1;
        }
        Err(VisitError::MissingForControl)
    }
}

impl JavaVisitor for TabsAndIndentsVisitor {
    fn stop_after(&self) -> Option<TreeId> {
        self.stop_after
    }

    fn pre_visit(&mut self, tree: J, cursor: &Cursor) -> VisitResult<J> {
        let indent_type = match &tree {
            J::CompilationUnit(_)
            | J::Package(_)
            | J::Import(_)
            | J::Label(_)
            | J::DoWhileLoop(_)
            | J::ArrayDimension(_)
            | J::ClassDeclaration(_) => IndentType::Align,
            J::Block(_)
            | J::If(_)
            | J::Else(_)
            | J::ForLoop(_)
            | J::ForEachLoop(_)
            | J::WhileLoop(_)
            | J::Case(_)
            | J::EnumValueSet(_) => IndentType::Indent,
            _ => IndentType::ContinuationIndent,
        };
        cursor.put_message(INDENT_TYPE, indent_type);
        Ok(tree)
    }

    fn visit_space(
        &mut self,
        space: Space,
        loc: SpaceLocation,
        cursor: &Cursor,
    ) -> VisitResult<Space> {
        cursor.put_message(LAST_LOCATION, loc);
        let Some(parent) = cursor.parent() else {
            return Ok(space);
        };

        // Whatever follows an annotation lines up with the annotation.
        let mut align_to_annotation = false;
        if matches!(parent.tree(), Some(J::Annotation(_))) {
            if let Some(annotated) = parent.parent() {
                annotated.put_message(AFTER_ANNOTATION, true);
            }
        } else if parent
            .first_enclosing(|tree| matches!(tree, J::Annotation(_)))
            .is_none()
        {
            align_to_annotation = cursor
                .poll_nearest_message::<bool>(AFTER_ANNOTATION)
                .is_some();
        }

        if space.comments.is_empty() && !space.last_whitespace().contains('\n') {
            return Ok(space);
        }

        let mut indent = cursor.nearest_message::<i32>(LAST_INDENT).unwrap_or(0);
        let mut indent_type = parent
            .nearest_message::<IndentType>(INDENT_TYPE)
            .unwrap_or(IndentType::Align);

        let align_block_prefix_to_parent = loc == SpaceLocation::BlockPrefix
            && space.whitespace.contains('\n')
            && matches!(cursor.tree(), Some(J::Block(_)))
            && !matches!(
                cursor.parent_tree_cursor().and_then(Cursor::tree),
                Some(J::Block(_))
            );
        let align_block_to_parent = matches!(
            loc,
            SpaceLocation::BlockEnd
                | SpaceLocation::NewArrayInitializerSuffix
                | SpaceLocation::CatchPrefix
                | SpaceLocation::TryFinally
                | SpaceLocation::ElsePrefix
        );

        if (loc == SpaceLocation::Extends && space.whitespace.contains('\n'))
            || parent.get_message::<SpaceLocation>(LAST_LOCATION) == Some(SpaceLocation::Extends)
        {
            indent_type = IndentType::ContinuationIndent;
        }
        if align_block_prefix_to_parent || align_block_to_parent || align_to_annotation {
            indent_type = IndentType::Align;
        }

        match indent_type {
            IndentType::Align => {}
            IndentType::Indent => indent += self.indent_size(),
            IndentType::ContinuationIndent => indent += self.continuation_indent(),
        }

        let space = self.indent_to(space, indent, loc);
        if !matches!(cursor.value(), CursorValue::LeftPadded { .. })
            && !matches!(cursor.tree(), Some(J::EnumValueSet(_)))
        {
            cursor.put_message(LAST_INDENT, indent);
        }
        Ok(space)
    }

    fn visit_right_padded(
        &mut self,
        right: RightPadded<J>,
        loc: RightPaddedLocation,
        cursor: &Cursor,
    ) -> VisitResult<RightPadded<J>> {
        let frame = cursor.push(CursorValue::RightPadded {
            location: loc,
            element: right.element.clone(),
        });
        let RightPadded { mut element, mut after } = right;
        let after_loc = loc.after_location();
        let id = element.id();
        let indent = frame.nearest_message::<i32>(LAST_INDENT).unwrap_or(0);
        let continuation = self.continuation_indent();

        if after.has_newline() || element.prefix().has_newline() {
            match loc {
                RightPaddedLocation::ForCondition | RightPaddedLocation::ForUpdate => {
                    let init_on_own_line = match cursor.tree() {
                        Some(J::ForControl(control)) => control
                            .init
                            .first()
                            .is_some_and(|init| init.element.prefix().has_newline()),
                        _ => false,
                    };
                    if init_on_own_line {
                        element = self.visit(element, &frame)?;
                        after = self.visit_space(after, after_loc, &frame)?;
                    } else {
                        let init_column = self.for_init_column(cursor)?;
                        cursor.put_message(LAST_INDENT, init_column - continuation);
                        element = self.visit(element, &frame)?;
                        cursor.put_message(LAST_INDENT, indent);
                        after = self.indent_to(after, init_column, after_loc);
                    }
                }
                RightPaddedLocation::MethodDeclarationParameter => {
                    let first = container_elements(cursor)
                        .first()
                        .map(|first| first.element.prefix().clone())
                        .ok_or(VisitError::MissingAncestor {
                            expected: "parameter list",
                        })?;
                    // Parameters hugging the `(` keep the author's alignment.
                    if first.has_newline() {
                        element = self.visit(element, &frame)?;
                        after = self.indent_to(after, indent, after_loc);
                    } else if !first.whitespace.is_empty() {
                        let first_indent = self.find_indent(&first);
                        cursor.put_message(LAST_INDENT, first_indent);
                        element = self.visit(element, &frame)?;
                        cursor.put_message(LAST_INDENT, indent);
                        after = self.indent_to(after, first_indent, after_loc);
                    }
                }
                RightPaddedLocation::MethodInvocationArgument => {
                    if !element.prefix().has_newline() {
                        if let J::Lambda(lambda) = &element {
                            if !matches!(lambda.body, J::Binary(_))
                                && !lambda.body.prefix().has_newline()
                            {
                                cursor.put_message(LAST_INDENT, indent + continuation);
                            }
                        }
                    }
                    element = self.visit(element, &frame)?;
                    after = self.indent_to(after, indent, after_loc);
                }
                RightPaddedLocation::NewClassArguments
                | RightPaddedLocation::ArrayIndex
                | RightPaddedLocation::Parentheses
                | RightPaddedLocation::TypeParameter => {
                    element = self.visit(element, &frame)?;
                    after = self.indent_to(after, indent, after_loc);
                }
                RightPaddedLocation::MethodSelect => {
                    // A chain lines up with the column of its outermost call.
                    let mut chain_indent = indent;
                    let mut current = Some(&frame);
                    while let Some(mut c) = current {
                        if matches!(c.value(), CursorValue::RightPadded { .. }) {
                            match c.parent() {
                                Some(parent) => c = parent,
                                None => break,
                            }
                        }
                        if !matches!(c.tree(), Some(J::MethodInvocation(_))) {
                            break;
                        }
                        if let Some(method_indent) = c.nearest_message::<i32>(LAST_INDENT) {
                            chain_indent = method_indent;
                        }
                        current = c.parent();
                    }
                    cursor.put_message(LAST_INDENT, chain_indent);
                    element = self.visit(element, &frame)?;
                    after = self.visit_space(after, after_loc, &frame)?;
                    cursor.put_message(LAST_INDENT, chain_indent + continuation);
                }
                RightPaddedLocation::AnnotationArgument => {
                    element = self.visit(element, &frame)?;
                    let is_last = container_elements(cursor)
                        .last()
                        .is_some_and(|last| last.element.id() == id);
                    if is_last {
                        cursor.put_message(INDENT_TYPE, IndentType::Align);
                    }
                    after = self.visit_space(after, after_loc, &frame)?;
                }
                _ => {
                    element = self.visit(element, &frame)?;
                    after = self.visit_space(after, after_loc, &frame)?;
                }
            }
        } else {
            match loc {
                RightPaddedLocation::NewClassArguments
                | RightPaddedLocation::MethodInvocationArgument => {
                    let later_argument_wraps = container_elements(cursor)
                        .iter()
                        .skip_while(|argument| argument.element.id() != id)
                        .skip(1)
                        .any(|argument| argument.element.prefix().has_newline());
                    if later_argument_wraps {
                        if !matches!(element, J::Binary(_)) {
                            let continues = match &element {
                                J::MethodInvocation(invocation) => {
                                    invocation.prefix.has_newline()
                                        || matches!(
                                            invocation.select.as_ref().map(|select| &select.element),
                                            Some(
                                                J::FieldAccess(_)
                                                    | J::Identifier(_)
                                                    | J::MethodInvocation(_)
                                            )
                                        )
                                }
                                _ => true,
                            };
                            if continues {
                                frame.put_message(LAST_INDENT, indent + continuation);
                            }
                        }
                        element = self.visit(element, &frame)?;
                        after = self.visit_space(after, after_loc, &frame)?;
                    } else {
                        element = self.visit(element, &frame)?;
                        after = self.indent_to(after, indent, after_loc);
                    }
                }
                _ => {
                    element = self.visit(element, &frame)?;
                }
            }
        }

        Ok(RightPadded::new(element, after))
    }

    fn visit_container(
        &mut self,
        container: Container<J>,
        loc: ContainerLocation,
        cursor: &Cursor,
    ) -> VisitResult<Container<J>> {
        let frame = cursor.push(CursorValue::Container {
            location: loc,
            container: container.clone(),
        });
        let indent = frame.nearest_message::<i32>(LAST_INDENT).unwrap_or(0);
        let Container { before, elements } = container;
        let before_loc = loc.before_location();

        let before = if before.last_whitespace().contains('\n') {
            match loc {
                ContainerLocation::TypeParameters
                | ContainerLocation::Implements
                | ContainerLocation::Throws
                | ContainerLocation::NewClassArguments => {
                    let wrapped = indent + self.continuation_indent();
                    let before = self.indent_to(before, wrapped, before_loc);
                    frame.put_message(INDENT_TYPE, IndentType::Align);
                    frame.put_message(LAST_INDENT, wrapped);
                    before
                }
                _ => self.visit_space(before, before_loc, &frame)?,
            }
        } else {
            if matches!(
                loc,
                ContainerLocation::Implements
                    | ContainerLocation::MethodInvocationArguments
                    | ContainerLocation::NewClassArguments
                    | ContainerLocation::TypeParameters
                    | ContainerLocation::Throws
            ) {
                frame.put_message(INDENT_TYPE, IndentType::ContinuationIndent);
            }
            self.visit_space(before, before_loc, &frame)?
        };

        let elements = elements
            .into_iter()
            .map(|padded| self.visit_right_padded(padded, loc.element_location(), &frame))
            .collect::<VisitResult<Vec<_>>>()?;
        Ok(Container::new(before, elements))
    }
}

#[cfg(test)]
mod tests;
