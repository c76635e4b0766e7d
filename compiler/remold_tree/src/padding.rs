//! Padding wrappers for elements whose surrounding whitespace is not a prefix.
//!
//! A [`RightPadded`] element carries the space *after* it (before a `,`, `;`
//! or closing delimiter); a [`LeftPadded`] element carries the space before an
//! operator or keyword that introduces it; a [`Container`] is a delimited list
//! with the space before its opening delimiter.

use crate::Space;

#[derive(Clone, Debug, PartialEq)]
pub struct RightPadded<T> {
    pub element: T,
    pub after: Space,
}

impl<T> RightPadded<T> {
    pub fn new(element: T, after: Space) -> Self {
        Self { element, after }
    }

    /// Element with nothing after it.
    pub fn build(element: T) -> Self {
        Self::new(element, Space::EMPTY)
    }

    #[must_use]
    pub fn with_element(self, element: T) -> Self {
        Self::new(element, self.after)
    }

    #[must_use]
    pub fn with_after(self, after: Space) -> Self {
        Self::new(self.element, after)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeftPadded<T> {
    pub before: Space,
    pub element: T,
}

impl<T> LeftPadded<T> {
    pub fn new(before: Space, element: T) -> Self {
        Self { before, element }
    }

    pub fn build(element: T) -> Self {
        Self::new(Space::EMPTY, element)
    }

    #[must_use]
    pub fn with_element(self, element: T) -> Self {
        Self::new(self.before, element)
    }

    #[must_use]
    pub fn with_before(self, before: Space) -> Self {
        Self::new(before, self.element)
    }
}

/// A delimited, separated list: `(a, b)`, `<T, U>`, `implements A, B`.
#[derive(Clone, Debug, PartialEq)]
pub struct Container<T> {
    /// Space before the opening delimiter or keyword.
    pub before: Space,
    pub elements: Vec<RightPadded<T>>,
}

impl<T> Container<T> {
    pub fn new(before: Space, elements: Vec<RightPadded<T>>) -> Self {
        Self { before, elements }
    }

    pub fn build(elements: Vec<RightPadded<T>>) -> Self {
        Self::new(Space::EMPTY, elements)
    }

    /// The unpadded elements.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.elements.iter().map(|padded| &padded.element)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn with_before(self, before: Space) -> Self {
        Self::new(before, self.elements)
    }

    #[must_use]
    pub fn with_elements(self, elements: Vec<RightPadded<T>>) -> Self {
        Self::new(self.before, elements)
    }
}
