//! Blank line limits.
//!
//! Collapses runs of blank lines longer than the configured maximum and
//! inserts blank lines where the style asks for a minimum: after the
//! package and imports, and around classes and methods.

use remold_tree::{Block, CompilationUnit, Space, TreeId, J};
use remold_visit::{walk_block, walk_compilation_unit, Cursor, JavaVisitor, VisitResult};

use crate::style::BlankLinesStyle;

fn line_breaks(whitespace: &str) -> usize {
    whitespace.matches('\n').count()
}

/// Drop leading line breaks until at most `max` blank lines are left.
fn keep_maximum_lines(whitespace: &str, max: usize) -> String {
    let excess = line_breaks(whitespace).saturating_sub(max + 1);
    if excess == 0 {
        return whitespace.to_string();
    }
    match whitespace.match_indices('\n').nth(excess - 1) {
        Some((at, _)) => whitespace[at + 1..].to_string(),
        None => whitespace.to_string(),
    }
}

/// Prepend line breaks until there are at least `min` blank lines.
fn minimum_lines(whitespace: &str, min: usize) -> String {
    if min == 0 {
        return whitespace.to_string();
    }
    let missing = (min + 1).saturating_sub(line_breaks(whitespace));
    let mut lines = "\n".repeat(missing);
    lines.push_str(whitespace);
    lines
}

fn keep_maximum(space: &mut Space, max: usize) {
    space.whitespace = keep_maximum_lines(&space.whitespace, max);
    for comment in &mut space.comments {
        comment.suffix = keep_maximum_lines(&comment.suffix, max);
    }
}

fn minimum(space: &mut Space, min: usize) {
    match space.comments.first_mut() {
        // A comment trailing the previous line: the blank lines go after it.
        Some(first) if !space.whitespace.contains('\n') => {
            first.suffix = minimum_lines(&first.suffix, min);
        }
        _ => space.whitespace = minimum_lines(&space.whitespace, min),
    }
}

fn map_prefix(tree: &mut J, f: impl FnOnce(&mut Space)) {
    let mut prefix = tree.prefix().clone();
    f(&mut prefix);
    if prefix != *tree.prefix() {
        *tree = tree.clone().with_prefix(prefix);
    }
}

#[derive(Clone, Debug, Default)]
pub struct BlankLinesVisitor {
    style: BlankLinesStyle,
    stop_after: Option<TreeId>,
}

impl BlankLinesVisitor {
    pub fn new(style: BlankLinesStyle) -> Self {
        Self {
            style,
            stop_after: None,
        }
    }

    #[must_use]
    pub fn with_stop_after(mut self, stop_after: Option<TreeId>) -> Self {
        self.stop_after = stop_after;
        self
    }

    /// Required blank lines between two adjacent class members.
    fn between_members(&self, previous: &J, member: &J) -> usize {
        let style = &self.style;
        let around = |tree: &J| match tree {
            J::MethodDeclaration(_) => style.minimum_around_method,
            J::ClassDeclaration(_) => style.minimum_around_class,
            _ => 0,
        };
        around(previous).max(around(member))
    }
}

impl JavaVisitor for BlankLinesVisitor {
    fn stop_after(&self) -> Option<TreeId> {
        self.stop_after
    }

    fn visit_compilation_unit(
        &mut self,
        mut tree: CompilationUnit,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        let style = self.style;
        for import in &mut tree.imports {
            map_prefix(&mut import.element, |prefix| {
                keep_maximum(prefix, style.keep_maximum_in_declarations);
            });
        }
        for (i, class) in tree.classes.iter_mut().enumerate() {
            map_prefix(class, |prefix| {
                keep_maximum(prefix, style.keep_maximum_in_declarations);
                if i > 0 {
                    minimum(prefix, style.minimum_around_class);
                }
            });
        }

        if tree.package.is_some() {
            let first = match tree.imports.first_mut() {
                Some(import) => Some(&mut import.element),
                None => tree.classes.first_mut(),
            };
            if let Some(first) = first {
                map_prefix(first, |prefix| minimum(prefix, style.minimum_after_package));
            }
        }
        if !tree.imports.is_empty() {
            if let Some(class) = tree.classes.first_mut() {
                map_prefix(class, |prefix| minimum(prefix, style.minimum_after_imports));
            }
        }
        walk_compilation_unit(self, tree, cursor)
    }

    fn visit_block(&mut self, mut tree: Block, cursor: &Cursor) -> VisitResult<J> {
        let parent = cursor.parent_tree_cursor().and_then(Cursor::tree);
        let declarations = matches!(parent, Some(J::ClassDeclaration(_) | J::NewClass(_)));
        let max = if declarations {
            self.style.keep_maximum_in_declarations
        } else {
            self.style.keep_maximum_in_code
        };

        for i in 0..tree.statements.len() {
            let required = match i.checked_sub(1) {
                Some(previous) if declarations => self.between_members(
                    &tree.statements[previous].element,
                    &tree.statements[i].element,
                ),
                _ => 0,
            };
            map_prefix(&mut tree.statements[i].element, |prefix| {
                keep_maximum(prefix, max);
                minimum(prefix, required);
            });
        }

        if matches!(parent, Some(J::MethodDeclaration(_))) {
            if let Some(first) = tree.statements.first_mut() {
                let min = self.style.minimum_before_method_body;
                map_prefix(&mut first.element, |prefix| minimum(prefix, min));
            }
        }
        keep_maximum(&mut tree.end, self.style.keep_maximum_before_end_of_block);
        walk_block(self, tree, cursor)
    }
}
