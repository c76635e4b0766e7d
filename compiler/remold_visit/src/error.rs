//! Traversal errors.

use thiserror::Error;

/// Failure raised by a visitor.
///
/// Traversal never recovers from these; they surface from the top-level
/// `visit` call unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisitError {
    /// A visitor needed an ancestor the cursor chain does not have.
    #[error("no enclosing {expected} in the cursor chain")]
    MissingAncestor { expected: &'static str },

    /// A `for` loop without a `(init; condition; update)` control.
    #[error("`for` loop has no control section")]
    MissingForControl,

    #[error("{0}")]
    Custom(String),
}

pub type VisitResult<T> = Result<T, VisitError>;
