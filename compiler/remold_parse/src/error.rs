//! Parse errors.
//!
//! Every error carries a byte offset into the source. [`ParseError::render`]
//! turns one into a labelled snippet with `ariadne` for test failure output
//! and command-line tools.

use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Failure to tokenize or parse a source file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        offset: usize,
    },

    #[error("expected {expected}, found end of file")]
    UnexpectedEof { expected: &'static str },

    #[error("unterminated block comment")]
    UnterminatedComment { offset: usize },

    #[error("invalid token")]
    InvalidToken { offset: usize },
}

impl ParseError {
    /// Byte offset the error points at; end of file for [`ParseError::UnexpectedEof`].
    pub fn offset(&self, source_len: usize) -> usize {
        match self {
            ParseError::UnexpectedToken { offset, .. }
            | ParseError::UnterminatedComment { offset }
            | ParseError::InvalidToken { offset } => *offset,
            ParseError::UnexpectedEof { .. } => source_len,
        }
    }

    /// Render as a labelled source snippet, without colors.
    pub fn render(&self, path: &str, source: &str) -> String {
        let offset = self.offset(source.len()).min(source.len());
        let span: Range<usize> = offset..(offset + 1).min(source.len()).max(offset);

        let mut out = Vec::new();
        let written = Report::build(ReportKind::Error, path, offset)
            .with_config(Config::default().with_color(false))
            .with_message(self.to_string())
            .with_label(Label::new((path, span)).with_message(self.label()))
            .finish()
            .write((path, Source::from(source.to_string())), &mut out);
        match written {
            Ok(()) => String::from_utf8_lossy(&out).into_owned(),
            Err(_) => self.to_string(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { expected, .. }
            | ParseError::UnexpectedEof { expected } => expected,
            ParseError::UnterminatedComment { .. } => "comment starts here",
            ParseError::InvalidToken { .. } => "not part of the supported syntax",
        }
    }
}
