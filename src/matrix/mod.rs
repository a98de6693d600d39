//! Dense square matrix storage and the naive baseline kernel.
//!
//! [`Matrix`] owns an N×N block of `f64` in row-major order. The kernels
//! themselves work on plain slices so they can be benchmarked without the
//! wrapper; the checked entry points in the crate root validate dimensions
//! before handing the slices over.

pub mod naive_ijk;

use std::ops::{Index, IndexMut};

use crate::error::{MatmulError, Result};

/// Square, row-major, dense matrix of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// All-zero N×N matrix.
    ///
    /// # Panics
    ///
    /// Panics if N×N `f64` can't be addressed; see [`Matrix::try_zeros`].
    pub fn zeros(n: usize) -> Self {
        match Self::try_zeros(n) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }

    /// All-zero N×N matrix, or [`MatmulError::SizeOutOfRange`] when N² or
    /// its byte size overflows.
    pub fn try_zeros(n: usize) -> Result<Self> {
        let len = checked_len(n)?;
        Ok(Self {
            n,
            data: vec![0.0; len],
        })
    }

    /// N×N identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Wrap row-major data. Fails unless `data.len() == n * n`.
    pub fn from_vec(n: usize, data: Vec<f64>) -> Result<Self> {
        let expected = checked_len(n)?;
        if data.len() != expected {
            return Err(MatmulError::ShapeMismatch {
                n,
                expected,
                got: data.len(),
            });
        }
        Ok(Self { n, data })
    }

    /// Build a matrix by evaluating `f(row, col)` for every entry.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`Matrix::zeros`].
    pub fn from_fn<F>(n: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let len = match checked_len(n) {
            Ok(len) => len,
            Err(e) => panic!("{}", e),
        };
        let mut data = Vec::with_capacity(len);
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Self { n, data }
    }

    /// Dimension N.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Number of stored elements (N²).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= dim()`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Zero every entry.
    ///
    /// The multipliers accumulate into C and never clear it themselves, so
    /// call this before reusing an accumulator for a fresh product.
    pub fn clear(&mut self) {
        self.fill(0.0);
    }

    /// Largest absolute element-wise difference.
    pub fn max_abs_diff(&self, other: &Matrix) -> Result<f64> {
        self.check_same_dim(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max))
    }

    /// Largest element-wise difference scaled by `max(1, |x|, |y|)`.
    ///
    /// The floor of 1 keeps entries that sum to almost zero from reporting
    /// huge relative errors for a few ULPs of cancellation.
    pub fn max_relative_diff(&self, other: &Matrix) -> Result<f64> {
        self.check_same_dim(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(x, y)| (x - y).abs() / 1.0_f64.max(x.abs()).max(y.abs()))
            .fold(0.0, f64::max))
    }

    fn check_same_dim(&self, other: &Matrix) -> Result<()> {
        if other.n != self.n {
            return Err(MatmulError::DimensionMismatch {
                operand: "other",
                expected: self.n,
                got: other.n,
            });
        }
        Ok(())
    }
}

/// N², provided N² `f64` stay within `isize::MAX` bytes.
pub(crate) fn checked_len(n: usize) -> Result<usize> {
    n.checked_mul(n)
        .filter(|len| {
            len.checked_mul(std::mem::size_of::<f64>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(MatmulError::SizeOutOfRange(n))
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(j < self.n, "column {} out of bounds for {}x{}", j, self.n, self.n);
        &self.data[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(j < self.n, "column {} out of bounds for {}x{}", j, self.n, self.n);
        &mut self.data[i * self.n + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_layout() {
        let id = Matrix::identity(3);
        assert_eq!(id.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_from_vec_rejects_wrong_length() {
        let err = Matrix::from_vec(3, vec![0.0; 8]).unwrap_err();
        assert_eq!(
            err,
            MatmulError::ShapeMismatch {
                n: 3,
                expected: 9,
                got: 8
            }
        );
    }

    #[test]
    fn test_oversized_dimension_rejected() {
        let n = 1usize << 32;
        assert_eq!(Matrix::try_zeros(n).unwrap_err(), MatmulError::SizeOutOfRange(n));
        // n * n wraps to 0 without the check, which would accept an empty vec
        assert_eq!(
            Matrix::from_vec(n, Vec::new()).unwrap_err(),
            MatmulError::SizeOutOfRange(n)
        );
        assert!(Matrix::try_zeros(1 << 30).is_err());
        assert_eq!(Matrix::try_zeros(3).unwrap().len(), 9);
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_zeros_panics_on_oversized_dimension() {
        let _ = Matrix::zeros(usize::MAX);
    }

    #[test]
    fn test_index_is_row_major() {
        let m = Matrix::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m.row(1), &[3.0, 4.0]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_column_past_end_panics() {
        let m = Matrix::zeros(2);
        let _ = m[(0, 2)];
    }

    #[test]
    fn test_clear_zeroes_everything() {
        let mut m = Matrix::from_fn(4, |i, j| (i * 4 + j) as f64);
        m.clear();
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
        assert_eq!(m.len(), 16);
    }

    #[test]
    fn test_relative_diff_floors_small_values() {
        let a = Matrix::from_vec(1, vec![1e-12]).unwrap();
        let b = Matrix::from_vec(1, vec![-1e-12]).unwrap();
        assert!(a.max_relative_diff(&b).unwrap() < 1e-11);

        let c = Matrix::from_vec(1, vec![200.0]).unwrap();
        let d = Matrix::from_vec(1, vec![202.0]).unwrap();
        assert!((c.max_relative_diff(&d).unwrap() - 2.0 / 202.0).abs() < 1e-15);
        assert_eq!(c.max_abs_diff(&d).unwrap(), 2.0);
    }

    #[test]
    fn test_diff_rejects_mismatched_dims() {
        let a = Matrix::zeros(2);
        let b = Matrix::zeros(3);
        assert!(matches!(
            a.max_abs_diff(&b),
            Err(MatmulError::DimensionMismatch { expected: 2, got: 3, .. })
        ));
    }
}
