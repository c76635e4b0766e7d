//! Line break normalization.

use remold_tree::{Space, SpaceLocation, TreeId};
use remold_visit::{Cursor, JavaVisitor, VisitResult};

use crate::style::GeneralFormatStyle;

/// Rewrite every line break in `text` to `line_break`.
pub(crate) fn normalize_line_breaks(text: &str, line_break: &str) -> String {
    let unix = text.replace("\r\n", "\n");
    if line_break == "\n" {
        unix
    } else {
        unix.replace('\n', line_break)
    }
}

/// Rewrites line breaks in whitespace and comments to `\n` or `\r\n`.
#[derive(Clone, Debug, Default)]
pub struct NormalizeLineBreaksVisitor {
    style: GeneralFormatStyle,
    stop_after: Option<TreeId>,
}

impl NormalizeLineBreaksVisitor {
    pub fn new(style: GeneralFormatStyle) -> Self {
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
}

impl JavaVisitor for NormalizeLineBreaksVisitor {
    fn stop_after(&self) -> Option<TreeId> {
        self.stop_after
    }

    fn visit_space(
        &mut self,
        mut space: Space,
        _loc: SpaceLocation,
        _cursor: &Cursor,
    ) -> VisitResult<Space> {
        let line_break = self.style.line_break();
        if !space.whitespace.is_empty() {
            space.whitespace = normalize_line_breaks(&space.whitespace, line_break);
        }
        for comment in &mut space.comments {
            if comment.is_multiline() {
                comment.text = normalize_line_breaks(&comment.text, line_break);
            }
            comment.suffix = normalize_line_breaks(&comment.suffix, line_break);
        }
        Ok(space)
    }
}

#[cfg(test)]
mod tests;
