//! Formatting errors.

use remold_visit::VisitError;
use thiserror::Error;

/// Failure of a format pass.
///
/// Passes only fail on trees whose shape breaks an assumption the pass
/// relies on; the failing pass produces no partial tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error(transparent)]
    Visit(#[from] VisitError),
}

pub type FormatResult<T> = Result<T, FormatError>;
