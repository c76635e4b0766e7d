//! Whitespace and comments between tokens.
//!
//! Every tree element owns the formatting that precedes it as a [`Space`]:
//! the whitespace up to the first comment, then each comment with the
//! whitespace that follows it (its suffix). Printing a `Space` reproduces the
//! original bytes exactly.

use std::fmt;

/// Comment delimiters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CommentStyle {
    /// `// text`
    Line,
    /// `/* text */`
    Block,
    /// `/** text */`
    Javadoc,
}

impl CommentStyle {
    /// Opening delimiter.
    pub const fn open(self) -> &'static str {
        match self {
            CommentStyle::Line => "//",
            CommentStyle::Block => "/*",
            CommentStyle::Javadoc => "/**",
        }
    }

    /// Closing delimiter; line comments end at the line break.
    pub const fn close(self) -> &'static str {
        match self {
            CommentStyle::Line => "",
            CommentStyle::Block | CommentStyle::Javadoc => "*/",
        }
    }
}

/// A comment and the whitespace after it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Comment {
    pub style: CommentStyle,
    /// Text between the delimiters.
    pub text: String,
    /// Whitespace up to the next comment or token.
    pub suffix: String,
}

impl Comment {
    pub fn new(style: CommentStyle, text: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
            suffix: suffix.into(),
        }
    }

    /// Block and doc comments may span lines; line comments never do.
    pub fn is_multiline(&self) -> bool {
        !matches!(self.style, CommentStyle::Line)
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Write the comment with its delimiters, without the suffix.
    pub fn write_delimited(&self, out: &mut String) {
        out.push_str(self.style.open());
        out.push_str(&self.text);
        out.push_str(self.style.close());
    }
}

/// Whitespace and comments preceding (or following) a tree element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Space {
    /// Whitespace before the first comment, or all of it when there are none.
    pub whitespace: String,
    pub comments: Vec<Comment>,
}

impl Space {
    pub const EMPTY: Space = Space {
        whitespace: String::new(),
        comments: Vec::new(),
    };

    pub fn build(whitespace: impl Into<String>, comments: Vec<Comment>) -> Self {
        Self {
            whitespace: whitespace.into(),
            comments,
        }
    }

    /// A single space and no comments.
    pub fn single_space() -> Self {
        Self::build(" ", Vec::new())
    }

    /// Split raw trivia (whitespace and comments) into a `Space`.
    ///
    /// Input is assumed to contain only whitespace and complete comments; an
    /// unterminated block comment swallows the rest of the input.
    pub fn format(formatting: &str) -> Self {
        if formatting.is_empty() {
            return Space::EMPTY;
        }

        let mut space = Space::EMPTY;
        let mut pending = 0;
        let mut i = 0;
        while i < formatting.len() {
            let rest = &formatting[i..];
            let comment = if rest.starts_with("//") {
                let end = rest.find(['\n', '\r']).unwrap_or(rest.len());
                Some((CommentStyle::Line, &rest[2..end], end))
            } else if rest.starts_with("/*") {
                let javadoc = rest.starts_with("/**") && !rest.starts_with("/**/");
                let open = if javadoc { 3 } else { 2 };
                let (text_end, end) = match rest[open..].find("*/") {
                    Some(close) => (open + close, open + close + 2),
                    None => (rest.len(), rest.len()),
                };
                let style = if javadoc {
                    CommentStyle::Javadoc
                } else {
                    CommentStyle::Block
                };
                Some((style, &rest[open..text_end], end))
            } else {
                None
            };

            match comment {
                Some((style, text, len)) => {
                    space.push_whitespace(&formatting[pending..i]);
                    space.comments.push(Comment::new(style, text, ""));
                    i += len;
                    pending = i;
                }
                None => {
                    i += rest.chars().next().map_or(1, char::len_utf8);
                }
            }
        }
        space.push_whitespace(&formatting[pending..]);
        space
    }

    fn push_whitespace(&mut self, whitespace: &str) {
        match self.comments.last_mut() {
            Some(comment) => comment.suffix.push_str(whitespace),
            None => self.whitespace.push_str(whitespace),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.whitespace.is_empty() && self.comments.is_empty()
    }

    /// Whitespace immediately before the next token: the last comment's
    /// suffix, or the whole whitespace when there are no comments.
    pub fn last_whitespace(&self) -> &str {
        self.comments
            .last()
            .map_or(self.whitespace.as_str(), |comment| comment.suffix.as_str())
    }

    /// `true` when the next token starts a new line.
    pub fn has_newline(&self) -> bool {
        self.last_whitespace().contains('\n')
    }

    /// Whitespace after the last line break of [`last_whitespace`](Self::last_whitespace).
    pub fn indent(&self) -> &str {
        let last = self.last_whitespace();
        last.rfind('\n').map_or(last, |newline| &last[newline + 1..])
    }

    #[must_use]
    pub fn with_whitespace(mut self, whitespace: impl Into<String>) -> Self {
        self.whitespace = whitespace.into();
        self
    }

    #[must_use]
    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    /// Write the exact source text of this space.
    pub fn write_to(&self, out: &mut String) {
        out.push_str(&self.whitespace);
        for comment in &self.comments {
            comment.write_delimited(out);
            out.push_str(&comment.suffix);
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out);
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests;
