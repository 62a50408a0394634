//! Dense matrix form of a descriptor set, one descriptor per row.

use nalgebra::{Const, DMatrix, Dynamic, OMatrix, SVector, Scalar};
use num_traits::AsPrimitive;
use tracing::trace;

use super::r2d2::{Descriptor, L};
use crate::{DescriptorError, Result};

/// `N x 128` single precision matrix, row `i` holding descriptor `i`.
pub type DescriptorMatrix = OMatrix<f32, Dynamic, Const<L>>;

/// Packs a sequence of descriptors into a new matrix, keeping their order.
/// An empty sequence gives a matrix with no rows.
pub fn pack_sequence(descriptors: &[Descriptor]) -> DescriptorMatrix {
    trace!(rows = descriptors.len(), "packing descriptors");

    DescriptorMatrix::from_fn(descriptors.len(), |i, j| descriptors[i][j])
}

/// Splits a matrix back into owned descriptors, row `i` becoming descriptor `i`.
pub fn unpack_rows(matrix: &DescriptorMatrix) -> Vec<Descriptor> {
    (0..matrix.nrows())
        .map(|i| Descriptor::from(SVector::<f32, L>::from_fn(|j, _| matrix[(i, j)])))
        .collect()
}

/// Converts a descriptor matrix of another element type (typically `u8`) into
/// a [`DescriptorMatrix`], casting every value numerically.
///
/// A matrix without rows converts to an empty matrix whatever its column count,
/// as extractors that found nothing tend to hand out `0 x 0` matrices.
///
/// ### Errors
/// [`DescriptorError::ShapeMismatch`] if a non-empty matrix does not have [`L`] columns.
pub fn cast_matrix<T>(descriptors: &DMatrix<T>) -> Result<DescriptorMatrix>
where
    T: Scalar + AsPrimitive<f32>,
{
    let (rows, cols) = descriptors.shape();
    if rows > 0 && cols != L {
        return Err(DescriptorError::ShapeMismatch {
            expected_cols: L,
            actual_cols: cols,
        });
    }

    trace!(rows, "casting descriptor matrix to f32");

    Ok(DescriptorMatrix::from_fn(rows, |i, j| descriptors[(i, j)].as_()))
}
