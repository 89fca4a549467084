//! Errors reported by the checked evaluation paths.
//!
//! The default paths (`assign`, compound assignment, indexing) report
//! nothing; these errors only come from the opt-in `try_*` APIs.

use thiserror::Error;

/// Errors that can occur when validating or allocating arrays.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FastArrayError {
    /// An array operand is shorter than the destination it is assigned to.
    #[error("expression operand holds {available} elements but {required} are required")]
    ExtentMismatch {
        /// Number of elements the destination will read.
        required: usize,
        /// Number of elements the shortest operand provides.
        available: usize,
    },

    /// The expression contains no array operand, so it has no length.
    #[error("expression has no array operand to determine its length")]
    Unbounded,

    /// The allocator refused a buffer of the requested size.
    #[error("failed to allocate {requested} elements")]
    Allocation {
        /// Number of elements requested.
        requested: usize,
    },
}

/// Result type for fallible array operations.
pub type Result<T, E = FastArrayError> = std::result::Result<T, E>;
