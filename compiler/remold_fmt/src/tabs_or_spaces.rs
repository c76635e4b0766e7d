//! Indentation character normalization.
//!
//! Rewrites the run of tabs and spaces at the start of every line to the
//! configured indentation character, keeping its width: with tabs on, a
//! width of 6 and a tab size of 4 becomes one tab and two spaces. Only the
//! characters change; columns are left to the indentation pass.

use remold_tree::{Space, SpaceLocation, TreeId};
use remold_visit::{Cursor, JavaVisitor, VisitResult};

use crate::style::TabsAndIndentsStyle;

#[derive(Clone, Debug, Default)]
pub struct NormalizeTabsOrSpacesVisitor {
    style: TabsAndIndentsStyle,
    stop_after: Option<TreeId>,
}

impl NormalizeTabsOrSpacesVisitor {
    pub fn new(style: TabsAndIndentsStyle) -> Self {
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

    fn indentation(&self, run: &str) -> String {
        let tab_size = self.style.tab_size.max(1);
        let width: usize = run
            .chars()
            .map(|c| if c == '\t' { tab_size } else { 1 })
            .sum();
        if self.style.use_tab_character {
            let mut out = "\t".repeat(width / tab_size);
            out.push_str(&" ".repeat(width % tab_size));
            out
        } else {
            " ".repeat(width)
        }
    }

    /// Normalize the indentation after each line break in `text`.
    fn normalize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for (i, line) in text.split('\n').enumerate() {
            if i == 0 {
                out.push_str(line);
                continue;
            }
            out.push('\n');
            let body = line.trim_start_matches([' ', '\t']);
            let run = &line[..line.len() - body.len()];
            out.push_str(&self.indentation(run));
            out.push_str(body);
        }
        out
    }
}

impl JavaVisitor for NormalizeTabsOrSpacesVisitor {
    fn stop_after(&self) -> Option<TreeId> {
        self.stop_after
    }

    fn visit_space(
        &mut self,
        mut space: Space,
        _loc: SpaceLocation,
        _cursor: &Cursor,
    ) -> VisitResult<Space> {
        if space.whitespace.contains('\n') {
            space.whitespace = self.normalize(&space.whitespace);
        }
        for comment in &mut space.comments {
            if comment.is_multiline() && comment.text.contains('\n') {
                comment.text = self.normalize(&comment.text);
            }
            if comment.suffix.contains('\n') {
                comment.suffix = self.normalize(&comment.suffix);
            }
        }
        Ok(space)
    }
}

#[cfg(test)]
mod tests;
