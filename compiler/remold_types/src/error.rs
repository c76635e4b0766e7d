//! Registry errors.

use thiserror::Error;

/// Error raised while allocating a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// The arena ran out of 32-bit handles.
    #[error("type arena exceeded u32::MAX descriptors (generation {generation})")]
    ArenaOverflow { generation: u64 },
}
