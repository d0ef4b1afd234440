//! Error types for sequence validation.

/// Errors raised while validating input sequences for DTW.
///
/// Alignment itself is infallible once both sequences are validated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DtwError {
    /// Returned when an empty slice is provided as a sequence.
    #[error("sequence must contain at least one value")]
    EmptySeries,

    /// Returned when a sequence contains NaN, infinity, or negative infinity.
    #[error("sequence contains non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the first non-finite value found.
        index: usize,
    },
}
