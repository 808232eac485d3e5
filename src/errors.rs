//! Error types for the sorting engine
//!
//! This module defines [`SortError`], which covers every failure the catalog,
//! the array source and the algorithms can report. None of them is transient:
//! each is returned to the caller as soon as it is detected.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SortError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The id is not registered in the catalog
    #[error("unknown algorithm '{id}'")]
    UnknownAlgorithm { id: String },

    /// Requested array length is outside the supported range
    #[error("invalid array size {size}: must be between {min} and {max}")]
    InvalidArraySize { size: usize, min: usize, max: usize },

    /// A loaded value lies outside the range the visualizer draws
    #[error("value {value} at index {index} is outside [{min}, {max}]")]
    ValueOutOfRange {
        index: usize,
        value: i32,
        min: i32,
        max: i32,
    },

    /// A non-negative-only algorithm was handed a negative value
    #[error("{algorithm} requires non-negative values, got {value} at index {index}")]
    NegativeValue {
        algorithm: &'static str,
        index: usize,
        value: i32,
    },
}

impl SortError {
    pub fn unknown(id: impl Into<String>) -> Self {
        SortError::UnknownAlgorithm { id: id.into() }
    }
}

/// Reject the first negative element of `values`
pub(crate) fn ensure_non_negative(algorithm: &'static str, values: &[i32]) -> Result<()> {
    match values.iter().position(|&v| v < 0) {
        Some(index) => Err(SortError::NegativeValue {
            algorithm,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}
