//! Error types for image statistics
//!
//! Provides a unified error type for all ndimage-stats crates. Every variant
//! describes a violated calling contract; none of them are transient.

use crate::element::ElementType;
use thiserror::Error;

/// Core error type for image statistics operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A buffer has the wrong number of dimensions for its role
    #[error("Shape error: {name} must be a {expected} dimensional buffer, got {actual} dimensions")]
    Dimensionality {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A buffer has the wrong number of elements for its role
    #[error("Length error: {name} must contain {expected} elements, got {actual}")]
    Length {
        name: &'static str,
        expected: String,
        actual: usize,
    },

    /// Two buffers that must share an element type do not
    #[error("Type mismatch: {left} ({left_type}) and {right} ({right_type}) must have the same element type")]
    TypeMismatch {
        left: &'static str,
        left_type: ElementType,
        right: &'static str,
        right_type: ElementType,
    },

    /// A buffer role requires one specific element type
    #[error("Type error: {name} must be {expected}, got {actual}")]
    UnexpectedType {
        name: &'static str,
        expected: ElementType,
        actual: ElementType,
    },

    /// Element type or format outside what the operation supports
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Strides, offsets or alignment do not describe a valid view of the data
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Mask windows or bitmap do not fit the image
    #[error("Invalid mask: {0}")]
    InvalidMask(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a buffer with the wrong dimensionality
    pub fn dimensionality(name: &'static str, expected: usize, actual: usize) -> Self {
        Self::Dimensionality {
            name,
            expected,
            actual,
        }
    }

    /// Create an error for a buffer that must hold exactly `expected` elements
    pub fn exact_length(name: &'static str, expected: usize, actual: usize) -> Self {
        Self::Length {
            name,
            expected: format!("exactly {expected}"),
            actual,
        }
    }

    /// Create an error for a buffer that must hold at least `expected` elements
    pub fn min_length(name: &'static str, expected: usize, actual: usize) -> Self {
        Self::Length {
            name,
            expected: format!("at least {expected}"),
            actual,
        }
    }

    /// Create an error for two buffers whose element types disagree
    pub fn type_mismatch(
        left: &'static str,
        left_type: ElementType,
        right: &'static str,
        right_type: ElementType,
    ) -> Self {
        Self::TypeMismatch {
            left,
            left_type,
            right,
            right_type,
        }
    }

    /// Create an error for a strided view that leaves its backing storage
    pub fn out_of_bounds(lowest: isize, highest: isize, len: usize) -> Self {
        Self::InvalidLayout(format!(
            "view addresses elements {lowest}..={highest} of a buffer holding {len}"
        ))
    }
}
