//! Error types for the recurrence kernels.
//!
//! All precondition failures are reported before any output buffer is
//! allocated; a kernel either returns a fully computed tensor or no tensor
//! at all.

use std::fmt;

/// Error type for Fock-tensor kernel operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FockError {
    /// Coupling matrix is not square
    NotSquare {
        operation: String,
        rows: usize,
        cols: usize,
    },

    /// Input size does not match what the operation requires
    DimensionMismatch {
        operation: String,
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Bra/ket dimension must split evenly into two mode halves
    OddDimension { operation: String, dim: usize },

    /// Photon-number cutoff must be at least 1
    InvalidResolution { operation: String },
}

impl fmt::Display for FockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FockError::NotSquare {
                operation,
                rows,
                cols,
            } => write!(
                f,
                "{}: coupling matrix must be square, got {}x{}",
                operation, rows, cols
            ),

            FockError::DimensionMismatch {
                operation,
                expected,
                actual,
                context,
            } => write!(
                f,
                "{}: dimension mismatch - expected {}, got {}. {}",
                operation, expected, actual, context
            ),

            FockError::OddDimension { operation, dim } => write!(
                f,
                "{}: dimension {} cannot be split into bra and ket halves",
                operation, dim
            ),

            FockError::InvalidResolution { operation } => {
                write!(f, "{}: resolution must be at least 1", operation)
            }
        }
    }
}

impl std::error::Error for FockError {}

/// Result type for Fock-tensor kernel operations
pub type FockResult<T> = Result<T, FockError>;

impl FockError {
    /// Create a non-square coupling matrix error
    pub fn not_square(operation: impl Into<String>, rows: usize, cols: usize) -> Self {
        FockError::NotSquare {
            operation: operation.into(),
            rows,
            cols,
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(
        operation: impl Into<String>,
        expected: usize,
        actual: usize,
        context: impl Into<String>,
    ) -> Self {
        FockError::DimensionMismatch {
            operation: operation.into(),
            expected,
            actual,
            context: context.into(),
        }
    }

    /// Create an odd-dimension error
    pub fn odd_dimension(operation: impl Into<String>, dim: usize) -> Self {
        FockError::OddDimension {
            operation: operation.into(),
            dim,
        }
    }

    /// Create an invalid resolution error
    pub fn invalid_resolution(operation: impl Into<String>) -> Self {
        FockError::InvalidResolution {
            operation: operation.into(),
        }
    }
}
