//! Error types for the workshare crates
//!
//! Provides a unified error type shared by the kernel and runner layers.

use thiserror::Error;

/// Core error type for workshare operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a zero stride
    pub fn zero_stride(operand: &str) -> Self {
        Self::InvalidParameter(format!("Stride of {operand} must be at least 1"))
    }

    /// Create an error for an undersized buffer
    pub fn buffer_too_short(operand: &str, required: usize, actual: usize) -> Self {
        Self::InvalidInput(format!(
            "Buffer {operand} too short: need at least {required} elements, got {actual}"
        ))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }
}
