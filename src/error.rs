// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KnnError {
    /// Input array is not one-dimensional.
    #[error("expected 1-D array, found {ndim} dimensions")]
    Shape { ndim: usize },

    /// Input array holds the wrong element type.
    #[error("expected {expected} array elements, found {found}")]
    Type {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{what} must not be NULL")]
    NullElement { what: String },

    #[error("{name} must be positive (got {value})")]
    InvalidParameter { name: &'static str, value: i64 },

    /// A dimension above [`crate::config::MAX_DIMENSION`]. Reported as an invalid parameter.
    #[error("{what} ({found}) exceeds the maximum dimension {max}")]
    DimensionTooLarge {
        what: &'static str,
        found: usize,
        max: usize,
    },

    #[error("{what} length ({found}) must equal {expected}")]
    LengthMismatch {
        what: String,
        expected: usize,
        found: usize,
    },

    /// The search produced a position outside the dataset. Engine defect, never bad input.
    #[error("search returned invalid position {position} for dataset of {len} rows")]
    InternalConsistency { position: usize, len: usize },

    #[error("row source error: {0}")]
    DataSource(String),
}

/// Stable tag for each error family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Shape,
    Type,
    NullElement,
    InvalidParameter,
    LengthMismatch,
    InternalConsistency,
    DataSource,
}

impl KnnError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KnnError::Shape { .. } => ErrorKind::Shape,
            KnnError::Type { .. } => ErrorKind::Type,
            KnnError::NullElement { .. } => ErrorKind::NullElement,
            KnnError::InvalidParameter { .. } | KnnError::DimensionTooLarge { .. } => {
                ErrorKind::InvalidParameter
            }
            KnnError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            KnnError::InternalConsistency { .. } => ErrorKind::InternalConsistency,
            KnnError::DataSource(_) => ErrorKind::DataSource,
        }
    }
}

impl From<std::io::Error> for KnnError {
    fn from(e: std::io::Error) -> Self {
        KnnError::DataSource(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, KnnError>;
