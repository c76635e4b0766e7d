//! Session errors.

use remold_fmt::FormatError;
use remold_match::MatcherError;
use remold_parse::ParseError;
use remold_types::TypeError;
use remold_visit::VisitError;
use thiserror::Error;

/// Anything a [`Session`](crate::Session) operation can fail with.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Visit(#[from] VisitError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Matcher(#[from] MatcherError),

    #[error(transparent)]
    Type(#[from] TypeError),
}

pub type Result<T> = std::result::Result<T, Error>;
