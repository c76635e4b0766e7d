//! Trailing whitespace removal.

use remold_tree::{Space, SpaceLocation, TreeId};
use remold_visit::{Cursor, JavaVisitor, VisitResult};

/// Drop spaces and tabs that end a line. The text after the last line
/// break is the next token's indentation and stays.
fn strip_line_ends(whitespace: &str) -> String {
    let mut lines = whitespace.split('\n').peekable();
    let mut out = String::with_capacity(whitespace.len());
    while let Some(line) = lines.next() {
        if lines.peek().is_none() {
            out.push_str(line);
            break;
        }
        let (line, cr) = match line.strip_suffix('\r') {
            Some(line) => (line, "\r"),
            None => (line, ""),
        };
        out.push_str(line.trim_end_matches([' ', '\t']));
        out.push_str(cr);
        out.push('\n');
    }
    out
}

fn line_breaks_only(whitespace: &str) -> String {
    whitespace
        .chars()
        .filter(|c| matches!(c, '\n' | '\r'))
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct RemoveTrailingWhitespaceVisitor {
    stop_after: Option<TreeId>,
}

impl RemoveTrailingWhitespaceVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_stop_after(mut self, stop_after: Option<TreeId>) -> Self {
        self.stop_after = stop_after;
        self
    }
}

impl JavaVisitor for RemoveTrailingWhitespaceVisitor {
    fn stop_after(&self) -> Option<TreeId> {
        self.stop_after
    }

    fn visit_space(
        &mut self,
        mut space: Space,
        loc: SpaceLocation,
        _cursor: &Cursor,
    ) -> VisitResult<Space> {
        space.whitespace = strip_line_ends(&space.whitespace);
        for comment in &mut space.comments {
            comment.text = if comment.is_multiline() {
                strip_line_ends(&comment.text)
            } else {
                comment.text.trim_end_matches([' ', '\t']).to_string()
            };
            comment.suffix = strip_line_ends(&comment.suffix);
        }
        if loc == SpaceLocation::CompilationUnitEof {
            match space.comments.last_mut() {
                Some(last) => last.suffix = line_breaks_only(&last.suffix),
                None => space.whitespace = line_breaks_only(&space.whitespace),
            }
        }
        Ok(space)
    }
}

#[cfg(test)]
mod tests;
