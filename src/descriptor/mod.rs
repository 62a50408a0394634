//! Descriptor manipulation used by bag of visual words vocabularies.
//!
//! Vocabulary construction and scoring are written against [`DescriptorClass`],
//! so they only need the handful of operations defined here: averaging a cluster,
//! comparing two descriptors, and moving descriptors in and out of text and matrices.

pub mod matrix;
pub mod metric;
pub mod r2d2;
pub mod text;

use crate::Result;

/// The operations a descriptor family exposes to a bag of words vocabulary.
pub trait DescriptorClass {
    type Descriptor;
    /// Dense `N x LEN` form of a set of descriptors.
    type Matrix;

    /// Number of values in one descriptor.
    const LEN: usize;

    /// Centroid of `descriptors`, `None` when there are none.
    fn mean_value(descriptors: &[&Self::Descriptor]) -> Option<Self::Descriptor>;

    /// Distance used for nearest centroid search. Lower is closer.
    fn distance(a: &Self::Descriptor, b: &Self::Descriptor) -> f64;

    fn to_string(a: &Self::Descriptor) -> String;

    fn from_string(s: &str) -> Result<Self::Descriptor>;

    fn pack_sequence(descriptors: &[Self::Descriptor]) -> Self::Matrix;

    fn unpack_rows(matrix: &Self::Matrix) -> Vec<Self::Descriptor>;
}

/// R2D2 descriptors: 128 floats compared with the squared Euclidean distance.
#[derive(Debug, Default, Clone, Copy)]
pub struct R2d2;

impl DescriptorClass for R2d2 {
    type Descriptor = r2d2::Descriptor;
    type Matrix = matrix::DescriptorMatrix;

    const LEN: usize = r2d2::L;

    #[inline]
    fn mean_value(descriptors: &[&Self::Descriptor]) -> Option<Self::Descriptor> {
        r2d2::mean_value(descriptors)
    }

    #[inline]
    fn distance(a: &Self::Descriptor, b: &Self::Descriptor) -> f64 {
        r2d2::distance(a, b)
    }

    fn to_string(a: &Self::Descriptor) -> String {
        text::to_string(a)
    }

    fn from_string(s: &str) -> Result<Self::Descriptor> {
        text::from_string(s)
    }

    fn pack_sequence(descriptors: &[Self::Descriptor]) -> Self::Matrix {
        matrix::pack_sequence(descriptors)
    }

    fn unpack_rows(matrix: &Self::Matrix) -> Vec<Self::Descriptor> {
        matrix::unpack_rows(matrix)
    }
}
