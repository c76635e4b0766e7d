//! Output sink for the printer.
//!
//! The printer writes through an [`Emitter`] so callers can print into a
//! string, measure columns, or stream elsewhere without an intermediate
//! buffer.

use crate::Space;

/// Destination for printed source text.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit the exact text of a space.
    fn emit_space(&mut self, space: &Space) {
        self.emit(&space.whitespace);
        for comment in &space.comments {
            self.emit(comment.style.open());
            self.emit(&comment.text);
            self.emit(comment.style.close());
            self.emit(&comment.suffix);
        }
    }
}

/// In-memory emitter.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Take the printed text.
    pub fn output(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}
