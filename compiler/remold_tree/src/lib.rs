//! Lossless Java source tree for remold.
//!
//! The tree keeps every byte of the source: each node owns the whitespace and
//! comments before it as a [`Space`], and the spaces that are not a node's
//! prefix (before a `,`, after an operator, before a closing brace) live in
//! [`RightPadded`], [`LeftPadded`] and [`Container`] wrappers. Printing a
//! tree therefore reproduces its source exactly.
//!
//! # Modules
//!
//! - [`space`]: whitespace and comments
//! - [`padding`]: padded wrappers and delimited lists
//! - [`location`]: the structural slot of every space
//! - [`tree`]: the [`J`] node enum and node structs
//! - [`print`]: the printer
//!
//! Nodes are immutable once shared; edits go through `Arc::make_mut` on a
//! cloned [`J`], which keeps the node's [`TreeId`].

mod emitter;
mod id;
pub mod location;
mod operator;
pub mod padding;
pub mod print;
pub mod space;
pub mod tree;

pub use emitter::{Emitter, StringEmitter};
pub use id::TreeId;
pub use location::{ContainerLocation, LeftPaddedLocation, RightPaddedLocation, SpaceLocation};
pub use operator::{
    AssignmentOperator, BinaryOperator, ModifierKind, OperatorCategory, UnaryOperator,
    WildcardBound,
};
pub use padding::{Container, LeftPadded, RightPadded};
pub use print::{needs_semicolon, trim_indent};
pub use space::{Comment, CommentStyle, Space};
pub use tree::*;
