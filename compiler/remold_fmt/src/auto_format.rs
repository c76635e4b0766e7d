//! The full formatting pipeline.

use remold_tree::{TreeId, J};
use remold_visit::{run_passes, Cursor, JavaVisitor, VisitResult};

use crate::blank_lines::BlankLinesVisitor;
use crate::line_breaks::NormalizeLineBreaksVisitor;
use crate::minimum_spacing::MinimumViableSpacingVisitor;
use crate::normalize::NormalizeFormatVisitor;
use crate::spaces::SpacesVisitor;
use crate::style::Styles;
use crate::tabs_and_indents::TabsAndIndentsVisitor;
use crate::tabs_or_spaces::NormalizeTabsOrSpacesVisitor;
use crate::trailing_whitespace::RemoveTrailingWhitespaceVisitor;
use crate::wrapping::WrappingAndBracesVisitor;
use crate::FormatResult;

/// Runs every format pass in order, each from a fresh fork of the cursor.
///
/// The order matters: spacing and wrapping decide where lines break before
/// indentation lines them up, and line break normalization runs last so no
/// later pass inserts a bare `\n`.
#[derive(Clone, Debug, Default)]
pub struct AutoFormatVisitor {
    styles: Styles,
    stop_after: Option<TreeId>,
}

impl AutoFormatVisitor {
    pub fn new(styles: Styles) -> Self {
        Self {
            styles,
            stop_after: None,
        }
    }

    #[must_use]
    pub fn with_stop_after(mut self, stop_after: Option<TreeId>) -> Self {
        self.stop_after = stop_after;
        self
    }
}

impl JavaVisitor for AutoFormatVisitor {
    /// Format `tree` as a subtree sitting at `cursor`.
    fn visit(&mut self, tree: J, cursor: &Cursor) -> VisitResult<J> {
        let styles = &self.styles;
        let stop_after = self.stop_after;

        let mut normalize = NormalizeFormatVisitor::new().with_stop_after(stop_after);
        let mut minimum = MinimumViableSpacingVisitor::new().with_stop_after(stop_after);
        let mut trailing = RemoveTrailingWhitespaceVisitor::new().with_stop_after(stop_after);
        let mut blank_lines =
            BlankLinesVisitor::new(styles.blank_lines).with_stop_after(stop_after);
        let mut spaces = SpacesVisitor::new(styles.spaces)
            .with_empty_for_initializer_pad(styles.empty_for_initializer_pad)
            .with_empty_for_iterator_pad(styles.empty_for_iterator_pad)
            .with_stop_after(stop_after);
        let mut wrapping = WrappingAndBracesVisitor::new().with_stop_after(stop_after);
        let mut tabs_or_spaces =
            NormalizeTabsOrSpacesVisitor::new(styles.tabs_and_indents).with_stop_after(stop_after);

        let tree = run_passes(
            tree,
            &mut [
                &mut normalize,
                &mut minimum,
                &mut trailing,
                &mut blank_lines,
                &mut spaces,
                &mut wrapping,
                &mut tabs_or_spaces,
            ],
            cursor,
        )?;

        let tree = TabsAndIndentsVisitor::new(styles.tabs_and_indents)
            .with_stop_after(stop_after)
            .visit_at(tree, &cursor.fork())?;

        NormalizeLineBreaksVisitor::new(styles.general)
            .with_stop_after(stop_after)
            .visit(tree, &cursor.fork())
    }
}

/// Format a whole tree, leaving everything after `stop_after` untouched.
///
/// # Errors
///
/// Fails when a pass finds the tree missing a part it requires, such as a
/// wrapped `for` condition outside any `for` loop.
#[tracing::instrument(level = "debug", skip_all, fields(node = tree.variant_name()))]
pub fn auto_format(tree: J, styles: &Styles, stop_after: Option<TreeId>) -> FormatResult<J> {
    let formatted = AutoFormatVisitor::new(*styles)
        .with_stop_after(stop_after)
        .visit_root(tree)?;
    Ok(formatted)
}

/// Format `tree` in place of a node at `parent`, lining it up with the code
/// around it.
///
/// # Errors
///
/// See [`auto_format`].
#[tracing::instrument(level = "debug", skip_all, fields(node = tree.variant_name()))]
pub fn auto_format_at(
    tree: J,
    parent: &Cursor,
    styles: &Styles,
    stop_after: Option<TreeId>,
) -> FormatResult<J> {
    let formatted = AutoFormatVisitor::new(*styles)
        .with_stop_after(stop_after)
        .visit(tree, parent)?;
    Ok(formatted)
}

#[cfg(test)]
mod tests;
