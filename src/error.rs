use thiserror::Error;

/// The error type for operations that change a vector's capacity.
///
/// The vector is left exactly as it was whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReserveError {
    /// The requested capacity cannot hold the current elements.
    #[error("requested capacity {requested} is below the current length {len}")]
    BelowLength {
        /// The requested capacity.
        requested: usize,
        /// The number of elements in the vector.
        len: usize,
    },

    /// The request exceeds the largest capacity the vector supports.
    #[error("requested capacity {requested} exceeds the maximum of {max}")]
    ExceedsMax {
        /// The requested capacity or length.
        requested: usize,
        /// The largest supported capacity.
        max: usize,
    },

    /// The allocator could not provide the memory.
    #[error("memory allocation of {bytes} bytes failed")]
    AllocFailed {
        /// The size of the refused request.
        bytes: usize,
    },
}
