//! Error types for sortrank operations.

use thiserror::Error;

/// Result type for sortrank operations.
pub type Result<T> = std::result::Result<T, SortRankError>;

/// Errors that can occur while building or validating run metrics.
///
/// Ranking and comparison never fail: unmeasured or invalid data is left out
/// of their output instead. These errors only surface at the boundaries where
/// external data enters the crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SortRankError {
    /// A record carries negative counts, a negative time, or a non-finite time.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// The algorithm name is not part of the catalogue.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The input pattern name is not recognised.
    #[error("Unknown input pattern: {0}")]
    UnknownPattern(String),

    /// The requested input has more elements than generated values can index.
    #[error("Input too large: {requested} elements requested, at most {max} supported")]
    InputTooLarge {
        /// Requested element count
        requested: usize,
        /// Largest supported element count
        max: usize,
    },

    /// A record was measured over a different input size than the rest of its set.
    #[error("Input size mismatch: expected {expected} elements, got {actual}")]
    InputSizeMismatch {
        /// Size established by the set
        expected: usize,
        /// Size carried by the rejected record
        actual: usize,
    },
}
