//! Error types for pattern lock configuration and layout.

use thiserror::Error;

/// Errors raised while validating configuration or laying out the grid.
///
/// Gesture handling itself never fails: pointer events over empty space or
/// already-selected nodes are ordinary no-ops, not errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternLockError {
    /// An explicit node size was combined with padding or spacing
    #[error("node size cannot be combined with padding or spacing")]
    ConflictingSizing,

    /// A configured dimension is negative or not finite
    #[error("invalid {name}: {value}")]
    InvalidDimension { name: &'static str, value: f32 },

    /// The container has no usable area
    #[error("degenerate container {width}x{height}")]
    DegenerateContainer { width: f32, height: f32 },

    /// A fixed node size does not fit inside its grid cell
    #[error("node size {node_size} exceeds cell size {cell_size}")]
    NodeTooLarge { node_size: f32, cell_size: f32 },

    /// Padding and spacing leave no room for the nodes
    #[error("padding and spacing leave a node size of {node_size}")]
    DegenerateNodeSize { node_size: f32 },
}

/// Result alias for pattern lock operations
pub type Result<T> = std::result::Result<T, PatternLockError>;
