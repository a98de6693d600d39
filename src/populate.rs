//! Random matrix population.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::matrix::Matrix;

/// Anything that can fill a matrix with input data.
pub trait MatrixSource {
    /// Overwrite every entry of `matrix`.
    fn populate(&mut self, matrix: &mut Matrix);
}

/// Independent draws from the uniform distribution over [-1.0, 1.0).
pub struct UniformSource {
    rng: StdRng,
    dist: Uniform<f64>,
}

impl UniformSource {
    /// Seeded from OS entropy; every run sees different data.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Fixed seed for reproducibility.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            dist: Uniform::new(-1.0, 1.0),
        }
    }
}

impl Default for UniformSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl MatrixSource for UniformSource {
    fn populate(&mut self, matrix: &mut Matrix) {
        for x in matrix.as_mut_slice() {
            *x = self.dist.sample(&mut self.rng);
        }
    }
}

/// Fill `matrix` from a freshly seeded [`UniformSource`].
pub fn populate(matrix: &mut Matrix) {
    UniformSource::from_entropy().populate(matrix);
}
