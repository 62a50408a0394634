use space::Metric;

use super::r2d2::{self, Descriptor};

/// Squared Euclidean distance as a [`space::Metric`], for plugging descriptors
/// into `space` based nearest neighbour structures.
///
/// `Metric` wants an unsigned, totally ordered unit. The squared distance is never
/// negative, so its IEEE bit pattern orders the same way the float does.
/// NaN values in a descriptor break that ordering.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SquaredEuclidean;

impl Metric<Descriptor> for SquaredEuclidean {
    type Unit = u64;

    fn distance(&self, a: &Descriptor, b: &Descriptor) -> u64 {
        r2d2::distance(a, b).to_bits()
    }
}
