use std::ops::{Index, IndexMut};

use nalgebra::SVector;

use crate::{DescriptorError, Result};

/// Descriptor length of R2D2 features.
pub const L: usize = 128;

// distance() walks the descriptor in blocks of four
const _: () = assert!(L % 4 == 0);

/// A single R2D2 feature descriptor: 128 single precision values.
///
/// The length lives in the type, so every operation on a `Descriptor`
/// can rely on it without checking. Untyped data coming from upstream
/// feature extraction goes through [`Descriptor::from_slice`].
#[derive(Clone, Debug, PartialEq)]
pub struct Descriptor(SVector<f32, L>);

impl Descriptor {
    /// Descriptor with all values set to zero.
    pub fn zeros() -> Self {
        Self(SVector::zeros())
    }

    /// Copies `values` into a new descriptor.
    ///
    /// ### Errors
    /// [`DescriptorError::InvalidLength`] when `values` does not hold exactly [`L`] elements.
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        if values.len() != L {
            return Err(DescriptorError::InvalidLength {
                expected: L,
                actual: values.len(),
            });
        }

        Ok(Self(SVector::from_column_slice(values)))
    }

    pub fn as_slice(&self) -> &[f32] {
        self.0.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        self.0.as_mut_slice()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.0.iter()
    }

    pub fn as_vector(&self) -> &SVector<f32, L> {
        &self.0
    }
}

impl Default for Descriptor {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<SVector<f32, L>> for Descriptor {
    fn from(vector: SVector<f32, L>) -> Self {
        Self(vector)
    }
}

impl From<[f32; L]> for Descriptor {
    fn from(values: [f32; L]) -> Self {
        Self(SVector::from(values))
    }
}

impl TryFrom<&[f32]> for Descriptor {
    type Error = DescriptorError;

    fn try_from(values: &[f32]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl Index<usize> for Descriptor {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

impl IndexMut<usize> for Descriptor {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.0[index]
    }
}

/// Element-wise mean of a set of descriptors, i.e. the centroid of a cluster.
///
/// Returns `None` for an empty set, which is not the same thing as the zero descriptor.
/// A single descriptor is cloned as is. Otherwise the values are summed in input order
/// in double precision and divided by the number of descriptors, so the sum of large
/// values cannot overflow before the division.
pub fn mean_value(descriptors: &[&Descriptor]) -> Option<Descriptor> {
    match descriptors {
        [] => None,
        [only] => Some((*only).clone()),
        _ => {
            let mut sum = SVector::<f64, L>::zeros();
            for descriptor in descriptors {
                for (acc, &value) in sum.iter_mut().zip(descriptor.iter()) {
                    *acc += f64::from(value);
                }
            }

            let n = descriptors.len() as f64;
            Some(Descriptor(SVector::from_fn(|j, _| (sum[j] / n) as f32)))
        }
    }
}

/// Squared Euclidean distance between two descriptors.
///
/// The square root is left out since this sits on the nearest-centroid path where only
/// the ordering matters. Differences are taken and accumulated in double precision,
/// so two descriptors are at distance `0` only when they are element-wise equal.
#[inline]
pub fn distance(a: &Descriptor, b: &Descriptor) -> f64 {
    let mut sqd = 0.0f64;
    for (p, q) in a.as_slice().chunks_exact(4).zip(b.as_slice().chunks_exact(4)) {
        let d0 = f64::from(p[0]) - f64::from(q[0]);
        let d1 = f64::from(p[1]) - f64::from(q[1]);
        let d2 = f64::from(p[2]) - f64::from(q[2]);
        let d3 = f64::from(p[3]) - f64::from(q[3]);
        sqd += d0 * d0 + d1 * d1 + d2 * d2 + d3 * d3;
    }

    sqd
}
