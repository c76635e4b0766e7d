//! The cursor: a parent-linked chain of visit frames.
//!
//! Each frame holds the value being visited (a tree node, a padded element,
//! a container) and a message bag. The chain itself is immutable and shared;
//! pushing a frame allocates one node that points at its parent. Messages
//! are the only mutable part and stay scoped to the frame they were put on,
//! so they vanish when the traversal leaves that frame.
//!
//! Messages are keyed by `&'static str` and typed at the call site:
//! reading a message with a different type than it was stored with returns
//! `None`.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use remold_tree::{Container, ContainerLocation, LeftPaddedLocation, RightPaddedLocation, J};
use rustc_hash::FxHashMap;

use crate::{VisitError, VisitResult};

/// What a cursor frame points at.
#[derive(Clone, Debug, PartialEq)]
pub enum CursorValue {
    /// Outermost frame of a traversal.
    Root,
    Tree(J),
    /// A right-padded element; `element` is the node before visiting.
    RightPadded {
        location: RightPaddedLocation,
        element: J,
    },
    LeftPadded {
        location: LeftPaddedLocation,
    },
    /// A container as it was before visiting.
    Container {
        location: ContainerLocation,
        container: Container<J>,
    },
}

struct Frame {
    value: CursorValue,
    parent: Option<Cursor>,
    /// `RefCell` because frames are shared through `Rc` while a pass writes
    /// messages into them.
    messages: RefCell<FxHashMap<&'static str, Box<dyn Any>>>,
}

/// A position in a traversal: the current frame and its ancestors.
///
/// Cloning a cursor is cheap and shares the frames, messages included.
/// [`fork`](Cursor::fork) copies the chain without the messages.
#[derive(Clone)]
pub struct Cursor(Rc<Frame>);

impl Cursor {
    fn new(parent: Option<Cursor>, value: CursorValue) -> Self {
        Cursor(Rc::new(Frame {
            value,
            parent,
            messages: RefCell::new(FxHashMap::default()),
        }))
    }

    /// A fresh chain with a single root frame.
    pub fn root() -> Self {
        Self::new(None, CursorValue::Root)
    }

    /// A child frame of this cursor.
    #[must_use]
    pub fn push(&self, value: CursorValue) -> Cursor {
        Self::new(Some(self.clone()), value)
    }

    /// A child frame for a tree node.
    #[must_use]
    pub fn push_tree(&self, tree: &J) -> Cursor {
        self.push(CursorValue::Tree(tree.clone()))
    }

    #[inline]
    pub fn value(&self) -> &CursorValue {
        &self.0.value
    }

    /// The tree node of this frame, if it is a tree frame.
    #[inline]
    pub fn tree(&self) -> Option<&J> {
        match &self.0.value {
            CursorValue::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    #[inline]
    pub fn parent(&self) -> Option<&Cursor> {
        self.0.parent.as_ref()
    }

    pub fn parent_or_err(&self) -> VisitResult<&Cursor> {
        self.parent()
            .ok_or(VisitError::MissingAncestor { expected: "parent" })
    }

    /// This frame, then each ancestor up to the root.
    pub fn path(&self) -> impl Iterator<Item = &Cursor> {
        std::iter::successors(Some(self), |cursor| cursor.parent())
    }

    /// Nearest strict ancestor that is a tree frame.
    pub fn parent_tree_cursor(&self) -> Option<&Cursor> {
        self.parent()?.path().find(|cursor| cursor.tree().is_some())
    }

    /// Nearest tree, this frame included, matching `predicate`.
    pub fn first_enclosing(&self, predicate: impl Fn(&J) -> bool) -> Option<&J> {
        self.path()
            .filter_map(Cursor::tree)
            .find(|tree| predicate(tree))
    }

    /// Like [`first_enclosing`](Self::first_enclosing), failing with
    /// [`VisitError::MissingAncestor`] named after `expected`.
    pub fn first_enclosing_or_err(
        &self,
        expected: &'static str,
        predicate: impl Fn(&J) -> bool,
    ) -> VisitResult<&J> {
        self.first_enclosing(predicate)
            .ok_or(VisitError::MissingAncestor { expected })
    }

    /// Frame of the nearest tree, this frame included, matching `predicate`.
    pub fn first_enclosing_cursor(&self, predicate: impl Fn(&J) -> bool) -> Option<&Cursor> {
        self.path()
            .find(|cursor| cursor.tree().is_some_and(|tree| predicate(tree)))
    }

    // === Messages ===

    pub fn put_message<T: Any>(&self, key: &'static str, value: T) {
        self.0.messages.borrow_mut().insert(key, Box::new(value));
    }

    /// Message on this frame only.
    pub fn get_message<T: Any + Clone>(&self, key: &'static str) -> Option<T> {
        self.0
            .messages
            .borrow()
            .get(key)
            .and_then(|value| value.downcast_ref::<T>())
            .cloned()
    }

    /// Remove and return a message on this frame.
    pub fn poll_message<T: Any>(&self, key: &'static str) -> Option<T> {
        let mut messages = self.0.messages.borrow_mut();
        if !messages.get(key).is_some_and(|value| value.is::<T>()) {
            return None;
        }
        let value = messages.remove(key)?;
        value.downcast::<T>().ok().map(|value| *value)
    }

    /// Message on this frame or the nearest ancestor that has one.
    pub fn nearest_message<T: Any + Clone>(&self, key: &'static str) -> Option<T> {
        self.path().find_map(|cursor| cursor.get_message(key))
    }

    /// Remove and return the nearest message, searching from this frame up.
    pub fn poll_nearest_message<T: Any>(&self, key: &'static str) -> Option<T> {
        self.path().find_map(|cursor| cursor.poll_message(key))
    }

    /// Put a message on the nearest tree frame matching `predicate`.
    ///
    /// Returns `false` when no frame in the chain matches.
    pub fn put_message_on_first_enclosing<T: Any>(
        &self,
        predicate: impl Fn(&J) -> bool,
        key: &'static str,
        value: T,
    ) -> bool {
        match self.first_enclosing_cursor(predicate) {
            Some(cursor) => {
                cursor.put_message(key, value);
                true
            }
            None => false,
        }
    }

    /// Outermost frame of the chain.
    pub fn root_cursor(&self) -> &Cursor {
        self.path().last().unwrap_or(self)
    }

    /// The same chain of values with empty message bags.
    ///
    /// Passes that run one after another over the same position start from
    /// a fork so they never read each other's messages.
    #[must_use]
    pub fn fork(&self) -> Cursor {
        Self::new(self.parent().map(Cursor::fork), self.0.value.clone())
    }

    /// `true` when both cursors are the same frame.
    pub fn same_frame(&self, other: &Cursor) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of frames from the root to this one, both included.
    pub fn depth(&self) -> usize {
        self.path().count()
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for cursor in self.path() {
            match cursor.value() {
                CursorValue::Root => list.entry(&"root"),
                CursorValue::Tree(tree) => list.entry(&tree.variant_name()),
                CursorValue::RightPadded { location, .. } => list.entry(location),
                CursorValue::LeftPadded { location } => list.entry(location),
                CursorValue::Container { location, .. } => list.entry(location),
            };
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests;
