//! Annotation patterns.
//!
//! A pattern is an `@` followed by a type pattern and, optionally, the
//! arguments the annotation must carry:
//!
//! ```text
//! @java.lang.Deprecated
//! @Deprecated                          java.lang names need no package
//! @org.junit..*                        any annotation under org.junit
//! @java.lang.SuppressWarnings("all")   the `value` argument is "all"
//! @a.Retry(times = 3, delay = 10)      named arguments, in any order
//! ```
//!
//! Argument values are compared by their source text, with surrounding
//! whitespace ignored. An annotation may carry more arguments than the
//! pattern names.

use regex::Regex;
use remold_tree::{Annotation, J};
use remold_types::TypeRegistry;

use crate::pattern::{type_regex, Scanner};
use crate::MatcherError;

/// Name of the argument an unnamed annotation argument binds to.
const VALUE: &str = "value";

#[derive(Clone, Debug, PartialEq, Eq)]
struct ArgumentPattern {
    name: String,
    value: String,
}

/// A compiled annotation pattern.
#[derive(Clone, Debug)]
pub struct AnnotationMatcher {
    signature: String,
    annotation_type: Regex,
    arguments: Vec<ArgumentPattern>,
}

impl AnnotationMatcher {
    /// Compile `signature`.
    ///
    /// # Errors
    ///
    /// Returns a [`MatcherError`] when the pattern does not start with `@`
    /// and a type pattern, or its argument list is malformed.
    pub fn new(signature: &str) -> Result<Self, MatcherError> {
        let mut scanner = Scanner::new(signature);
        scanner.skip_whitespace();
        scanner.expect('@')?;
        let type_pattern = scanner.type_pattern()?;
        scanner.skip_whitespace();

        let mut arguments = Vec::new();
        if scanner.peek() == Some('(') {
            scanner.bump();
            arguments = parse_arguments(&mut scanner)?;
            scanner.skip_whitespace();
        }
        if !scanner.is_at_end() {
            return Err(scanner.unexpected());
        }

        let annotation_type = Regex::new(&format!("^(?:{})$", type_regex(type_pattern)))?;
        tracing::trace!(signature, "compiled annotation pattern");
        Ok(Self {
            signature: signature.to_string(),
            annotation_type,
            arguments,
        })
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Match an annotation node; any other node is a miss.
    pub fn matches(&self, registry: &TypeRegistry, tree: &J) -> bool {
        match tree {
            J::Annotation(annotation) => self.matches_annotation(registry, annotation),
            _ => false,
        }
    }

    /// `true` when the annotation's attached type matches and every argument
    /// the pattern names is present with the same value.
    pub fn matches_annotation(&self, registry: &TypeRegistry, annotation: &Annotation) -> bool {
        let ty = match &annotation.annotation_type {
            J::Identifier(ident) => ident.ty,
            J::FieldAccess(access) => access.ty,
            _ => None,
        };
        let Some(name) = ty.and_then(|ty| registry.fully_qualified_name(ty)) else {
            return false;
        };
        if !self.annotation_type.is_match(&name) {
            return false;
        }
        if self.arguments.is_empty() {
            return true;
        }

        let present = annotation_arguments(annotation);
        self.arguments.iter().all(|expected| {
            present
                .iter()
                .any(|(name, value)| *name == expected.name && *value == expected.value)
        })
    }
}

fn parse_arguments(scanner: &mut Scanner<'_>) -> Result<Vec<ArgumentPattern>, MatcherError> {
    let mut arguments = Vec::new();
    scanner.skip_whitespace();
    if scanner.peek() == Some(')') {
        scanner.bump();
        return Ok(arguments);
    }
    loop {
        scanner.skip_whitespace();
        let first = argument_text(scanner)?;
        scanner.skip_whitespace();
        let argument = if scanner.peek() == Some('=') {
            scanner.bump();
            scanner.skip_whitespace();
            let value = argument_text(scanner)?;
            ArgumentPattern {
                name: first,
                value,
            }
        } else {
            ArgumentPattern {
                name: VALUE.to_string(),
                value: first,
            }
        };
        arguments.push(argument);

        scanner.skip_whitespace();
        match scanner.peek() {
            Some(',') => {
                scanner.bump();
            }
            Some(')') => {
                scanner.bump();
                return Ok(arguments);
            }
            _ => return Err(scanner.unexpected()),
        }
    }
}

/// A quoted literal, kept with its quotes, or a bare run up to the next
/// `=`, `,` or `)`.
fn argument_text(scanner: &mut Scanner<'_>) -> Result<String, MatcherError> {
    match scanner.peek() {
        Some(quote @ ('"' | '\'')) => {
            let mut text = String::new();
            if let Some(c) = scanner.bump() {
                text.push(c);
            }
            loop {
                match scanner.bump() {
                    None => return Err(MatcherError::UnexpectedEnd),
                    Some('\\') => {
                        text.push('\\');
                        let escaped = scanner.bump().ok_or(MatcherError::UnexpectedEnd)?;
                        text.push(escaped);
                    }
                    Some(c) => {
                        text.push(c);
                        if c == quote {
                            return Ok(text);
                        }
                    }
                }
            }
        }
        _ => {
            let text = scanner
                .take_while(|c| !matches!(c, '=' | ',' | ')'))
                .trim_end();
            if text.is_empty() {
                return Err(scanner.unexpected());
            }
            Ok(text.to_string())
        }
    }
}

/// `(name, value source)` for each argument of `annotation`.
fn annotation_arguments(annotation: &Annotation) -> Vec<(String, String)> {
    let Some(arguments) = &annotation.arguments else {
        return Vec::new();
    };
    arguments
        .elements
        .iter()
        .filter_map(|padded| match &padded.element {
            J::Empty(_) => None,
            J::Assignment(assignment) => {
                let J::Identifier(name) = &assignment.variable else {
                    return None;
                };
                Some((
                    name.simple_name.clone(),
                    assignment.assignment.element.print().trim().to_string(),
                ))
            }
            value => Some((VALUE.to_string(), value.print().trim().to_string())),
        })
        .collect()
}

#[cfg(test)]
mod tests;
