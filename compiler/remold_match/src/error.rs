//! Matcher construction errors.

use thiserror::Error;

/// A pattern that could not be compiled.
///
/// Only construction fails; matching a compiled pattern against a tree never
/// errors.
#[derive(Debug, Clone, Error)]
pub enum MatcherError {
    #[error("pattern ends early")]
    UnexpectedEnd,

    #[error("unexpected `{found}` at {position} in `{pattern}`")]
    UnexpectedChar {
        pattern: String,
        position: usize,
        found: char,
    },

    #[error("method pattern has no method name")]
    MissingMethodName,

    #[error("pattern compiles to an invalid regex: {0}")]
    InvalidRegex(#[from] regex::Error),
}
