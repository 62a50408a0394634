//! Descriptor primitives for R2D2 features in a bag of visual words pipeline.
//!
//! Feature extraction happens upstream and vocabulary/database code lives downstream;
//! this crate only defines how descriptors are averaged, compared, packed into matrices
//! and written to/read from text.
//!
//! ```
//! use r2d2_descriptors::{distance, mean_value, Descriptor};
//!
//! let mut a = Descriptor::zeros();
//! a[0] = 1.0;
//! let mut b = Descriptor::zeros();
//! b[1] = 1.0;
//!
//! assert_eq!(distance(&a, &b), 2.0);
//! assert_eq!(mean_value(&[&a, &b]).unwrap()[0], 0.5);
//! assert!(mean_value(&[]).is_none());
//! ```

use std::num::ParseFloatError;

pub mod descriptor;

pub use descriptor::{
    matrix::{cast_matrix, pack_sequence, unpack_rows, DescriptorMatrix},
    metric::SquaredEuclidean,
    r2d2::{distance, mean_value, Descriptor, L},
    text::{from_string, to_string},
    DescriptorClass, R2d2,
};

#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("invalid descriptor length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("descriptor matrix has {actual_cols} columns, expected {expected_cols}")]
    ShapeMismatch {
        expected_cols: usize,
        actual_cols: usize,
    },

    #[error("descriptor parse error: expected {expected} values, found {found}")]
    MissingTokens { expected: usize, found: usize },

    #[error("descriptor parse error: value {index} ({token:?}) is not a number")]
    InvalidToken {
        index: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("descriptor parse error: value {index} ({token:?}) is not finite")]
    NonFiniteValue { index: usize, token: String },
}

pub type Result<T> = std::result::Result<T, DescriptorError>;
