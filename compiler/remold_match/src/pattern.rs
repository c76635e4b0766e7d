//! Scanner for AspectJ-style type patterns.
//!
//! Type patterns name classes the way they are written in source, with two
//! wildcards: `*` stands for any run of characters inside one name segment
//! and `..` for any number of intermediate package segments. Both compile to
//! a regex fragment matched against a fully-qualified name:
//!
//! ```text
//! java.util.*       java\.util\.[^.]*
//! com..Service      com\.(.+\.)?Service
//! String[]          java\.lang\.String\[\]
//! ```
//!
//! A name without a dot that is one of the well-known `java.lang` classes is
//! qualified with `java.lang.`; primitive keywords are left alone.

use crate::MatcherError;

/// Simple names resolved against `java.lang` when written without a package.
const JAVA_LANG: &[&str] = &[
    "AutoCloseable",
    "Boolean",
    "Byte",
    "CharSequence",
    "Character",
    "Class",
    "Cloneable",
    "Comparable",
    "Deprecated",
    "Double",
    "Enum",
    "Error",
    "Exception",
    "Float",
    "FunctionalInterface",
    "IllegalArgumentException",
    "IllegalStateException",
    "Integer",
    "Iterable",
    "Long",
    "Math",
    "Number",
    "NullPointerException",
    "Object",
    "Override",
    "Record",
    "Runnable",
    "RuntimeException",
    "SafeVarargs",
    "Short",
    "String",
    "StringBuilder",
    "SuppressWarnings",
    "System",
    "Thread",
    "Throwable",
    "UnsupportedOperationException",
    "Void",
];

const PRIMITIVES: &[&str] = &[
    "boolean", "byte", "char", "double", "float", "int", "long", "short", "void",
];

/// Position-tracking reader over a pattern string.
pub(crate) struct Scanner<'a> {
    pattern: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(pattern: &'a str) -> Self {
        Self { pattern, pos: 0 }
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn rest(&self) -> &'a str {
        &self.pattern[self.pos..]
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.pattern.len()
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skip whitespace, returning whether any was skipped.
    pub(crate) fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
        self.pos > start
    }

    /// Consume `expected` or fail at the current character.
    pub(crate) fn expect(&mut self, expected: char) -> Result<(), MatcherError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            _ => Err(self.unexpected()),
        }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Error for the character at the current position.
    pub(crate) fn unexpected(&self) -> MatcherError {
        self.unexpected_at(self.pos)
    }

    /// Error for the character at byte `position`.
    pub(crate) fn unexpected_at(&self, position: usize) -> MatcherError {
        match self.pattern.get(position..).and_then(|rest| rest.chars().next()) {
            Some(found) => MatcherError::UnexpectedChar {
                pattern: self.pattern.to_string(),
                position,
                found,
            },
            None => MatcherError::UnexpectedEnd,
        }
    }

    /// Consume the longest run of characters satisfying `accept`.
    pub(crate) fn take_while(&mut self, accept: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&accept) {
            self.bump();
        }
        &self.pattern[start..self.pos]
    }

    /// A type pattern; fails when none starts here.
    pub(crate) fn type_pattern(&mut self) -> Result<&'a str, MatcherError> {
        let text = self.take_while(is_type_pattern_char);
        if text.is_empty() {
            return Err(self.unexpected());
        }
        Ok(text)
    }
}

pub(crate) fn is_type_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '$' | '.' | '*' | '[' | ']')
}

/// Regex fragment for a type pattern, unanchored.
///
/// A lone `*` matches any one type, packages included.
pub(crate) fn type_regex(pattern: &str) -> String {
    if pattern == "*" {
        return "[^,]+".to_string();
    }
    let qualified;
    let pattern = if needs_java_lang(pattern) {
        qualified = format!("java.lang.{pattern}");
        qualified.as_str()
    } else {
        pattern
    };

    let mut regex = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '.' if chars.peek() == Some(&'.') => {
                chars.next();
                regex.push_str(r"\.(.+\.)?");
            }
            '*' => regex.push_str("[^.]*"),
            other => regex.push_str(&regex::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    regex
}

fn needs_java_lang(pattern: &str) -> bool {
    if pattern.contains('.') {
        return false;
    }
    let base = pattern.trim_end_matches("[]");
    !PRIMITIVES.contains(&base) && JAVA_LANG.contains(&base)
}

#[cfg(test)]
mod tests;
