//! Shared registry handle.

use std::ops::Deref;
use std::sync::Arc;

use crate::TypeRegistry;

/// Thread-safe shared registry.
///
/// Resolver threads and format passes hold clones of this handle instead of
/// reaching for a process-wide table, so each session can own its caches.
#[derive(Clone)]
pub struct SharedTypeRegistry(Arc<TypeRegistry>);

impl SharedTypeRegistry {
    pub fn new(registry: TypeRegistry) -> Self {
        Self(Arc::new(registry))
    }

    /// `true` when both handles point at the same registry.
    pub fn same_registry(&self, other: &SharedTypeRegistry) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SharedTypeRegistry {
    type Target = TypeRegistry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for SharedTypeRegistry {
    fn default() -> Self {
        Self::new(TypeRegistry::new())
    }
}

impl std::fmt::Debug for SharedTypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedTypeRegistry")
            .field(&self.0.len())
            .finish()
    }
}
