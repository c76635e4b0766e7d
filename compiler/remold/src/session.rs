//! One configured unit of work over Java trees.

use rayon::prelude::*;
use remold_fmt::{auto_format, auto_format_at, Styles};
use remold_tree::{TreeId, J};
use remold_types::SharedTypeRegistry;
use remold_visit::{Cursor, JavaVisitor};
use tracing::{debug, instrument};

use crate::Result;

/// Styles and type caches shared by every tree a caller works on.
///
/// Cloning a session is cheap; clones share the registry, so types built
/// while attributing one tree resolve to the same handles in another.
#[derive(Clone, Debug, Default)]
pub struct Session {
    styles: Styles,
    registry: SharedTypeRegistry,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Share `registry` instead of starting from an empty one.
    #[must_use]
    pub fn with_registry(mut self, registry: SharedTypeRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn registry(&self) -> &SharedTypeRegistry {
        &self.registry
    }

    /// Parse one compilation unit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`](crate::Error::Parse) on a syntax error.
    pub fn parse(&self, source: &str) -> Result<J> {
        Ok(remold_parse::parse(source)?)
    }

    /// Run `visitor` over a whole tree.
    ///
    /// # Errors
    ///
    /// The visitor's first error, with no partially rewritten tree.
    #[instrument(level = "debug", skip_all, fields(node = tree.variant_name()))]
    pub fn apply<V: JavaVisitor + ?Sized>(&self, tree: J, visitor: &mut V) -> Result<J> {
        Ok(visitor.visit_root(tree)?)
    }

    /// Format a whole tree, leaving everything after `stop_after` as it was.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`](crate::Error::Format) when a pass meets a
    /// tree shape it cannot handle.
    pub fn auto_format(&self, tree: J, stop_after: Option<TreeId>) -> Result<J> {
        Ok(auto_format(tree, &self.styles, stop_after)?)
    }

    /// Format a subtree about to replace a node at `parent`.
    ///
    /// This is how a rewrite formats only what it changed.
    ///
    /// # Errors
    ///
    /// See [`Session::auto_format`].
    pub fn auto_format_at(&self, tree: J, parent: &Cursor, stop_after: Option<TreeId>) -> Result<J> {
        Ok(auto_format_at(tree, parent, &self.styles, stop_after)?)
    }

    /// Parse, format and print one source file.
    ///
    /// # Errors
    ///
    /// The parse or format error.
    pub fn format_source(&self, source: &str) -> Result<String> {
        let tree = self.parse(source)?;
        Ok(self.auto_format(tree, None)?.print())
    }

    /// [`Session::format_source`] over many files in parallel.
    ///
    /// Results come back in input order; one file failing does not stop the
    /// others.
    #[instrument(level = "debug", skip_all, fields(files = sources.len()))]
    pub fn format_sources<S: AsRef<str> + Sync>(&self, sources: &[S]) -> Vec<Result<String>> {
        sources
            .par_iter()
            .map(|source| self.format_source(source.as_ref()))
            .collect()
    }

    /// Drop every cached type descriptor.
    ///
    /// Handles taken before the call are stale afterwards; the registry's
    /// generation tells them apart.
    pub fn clear_caches(&self) {
        self.registry.clear();
        debug!(generation = self.registry.generation(), "session caches cleared");
    }
}

#[cfg(test)]
mod tests;
