/// Errors from random walk configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WalkError {
    /// Returned when the requested walk has no points.
    #[error("walk length must be at least 1, got {length}")]
    InvalidLength {
        /// The invalid length provided.
        length: usize,
    },

    /// Returned when the step scale is not a finite positive number.
    #[error("step scale must be finite and positive, got {scale}")]
    InvalidScale {
        /// The invalid scale provided.
        scale: f64,
    },
}
