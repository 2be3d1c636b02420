//! Error types for the PBC engine.

use thiserror::Error;

/// Result type alias for PBC operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or applying periodic boundary
/// conditions.
#[derive(Debug, Error)]
pub enum Error {
    /// A matcher already exists under this name.
    #[error("A periodic boundary condition named '{0}' already exists")]
    DuplicateName(String),

    /// No matcher exists under this name.
    #[error("No periodic boundary condition named '{0}' exists")]
    UnknownName(String),

    /// A positional lookup supplied by the host was out of range.
    #[error("{kind} index {index} is out of range ({len} available)")]
    IndexOutOfRange {
        /// What kind of collection was indexed (model, part, surface, set).
        kind: &'static str,
        /// The requested index.
        index: usize,
        /// Current size of the collection.
        len: usize,
    },

    /// Invalid match plane selector.
    #[error("Invalid match plane selector {0} (expected 0, 1 or 2)")]
    InvalidPlane(usize),

    /// The external model rejected an operation.
    #[error("Model error: {0}")]
    Model(String),
}
