//! Cursor chain and visitor traversal for remold trees.
//!
//! A [`JavaVisitor`] rewrites a tree by returning a new one: every `visit_*`
//! method takes its node by value and hands back the (possibly different)
//! replacement. The [`Cursor`] passed alongside is the chain of ancestors
//! from the node being visited up to the root, each frame carrying a small
//! message bag for state that flows down (or sideways) during one pass.
//!
//! # Design
//!
//! - Default `visit_*` methods call the matching `walk_*` function, which
//!   visits every child slot in source order. Override a `visit_*` method and
//!   call its `walk_*` to keep descending.
//! - Spaces are visited through [`JavaVisitor::visit_space`] with the
//!   [`SpaceLocation`](remold_tree::SpaceLocation) of their slot; padded
//!   elements and containers push their own cursor frame first.
//! - Errors propagate with `?`. The traversal never catches a failure, so a
//!   rewrite that fails mid-tree yields no tree at all.
//! - A visitor with a [`stop_after`](JavaVisitor::stop_after) target leaves
//!   everything after that node untouched.

mod cursor;
mod error;
mod visitor;
mod walk;

pub use cursor::{Cursor, CursorValue};
pub use error::{VisitError, VisitResult};
pub use visitor::{run_passes, walk_tree, JavaVisitor};
pub use walk::*;
