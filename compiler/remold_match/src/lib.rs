//! Pattern matchers over typed remold trees.
//!
//! Rewrite passes use these to decide whether a node is one they care about:
//! [`MethodMatcher`] for invocations, constructor calls and declarations,
//! [`AnnotationMatcher`] for annotations. Both are compiled once from a
//! pattern string and consult the [`TypeRegistry`](remold_types::TypeRegistry)
//! for the types attached to the tree.
//!
//! Compilation fails fast on a malformed pattern. Matching is best-effort:
//! a node with no attached type simply does not match.

mod annotation;
mod error;
mod method;
mod pattern;

pub use annotation::AnnotationMatcher;
pub use error::MatcherError;
pub use method::MethodMatcher;
