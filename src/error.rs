use thiserror::Error;

/// Errors returned by the clustering strategies in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// An input value is NaN or infinite.
    #[error("non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the offending value in the input.
        index: usize,
    },

    /// A partition failed one of the checks in [`crate::cluster::validate_partition`].
    #[error("invalid partition: {0}")]
    InvalidPartition(String),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
