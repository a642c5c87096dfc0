use thiserror::Error;

/// Errors raised by checked vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("vector length mismatch: {left} != {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("index {index} out of range for vector of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("end index {end} precedes start index {start}")]
    InvalidRange { start: usize, end: usize },

    #[error("invalid argument: {0}")]
    InvalidDomainArgument(String),
}

pub type Result<T> = std::result::Result<T, VectorError>;
