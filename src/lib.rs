//! Naive vs cache-blocked dense matrix multiplication.
//!
//! Both multipliers compute the same thing, C += A * B over N×N `f64`
//! matrices. The naive one is the textbook i-j-k triple loop. The blocked
//! one tiles the output columns and the inner dimension so a small block
//! of B stays in cache while every row of A streams past it. Same
//! instruction count, very different miss rate.
//!
//! ## Usage
//!
//! ```
//! use blocked_matmul::{Matrix, TileSize, block_multiply, multiply};
//!
//! let a = Matrix::from_fn(64, |i, j| (i + j) as f64);
//! let b = Matrix::identity(64);
//!
//! let mut c = Matrix::zeros(64);
//! multiply(&mut c, &a, &b).unwrap();
//! assert_eq!(c, a);
//!
//! let mut c = Matrix::zeros(64);
//! block_multiply(TileSize::new(16).unwrap(), &mut c, &a, &b).unwrap();
//! assert_eq!(c, a);
//! ```
//!
//! Neither multiplier clears C. Calling one twice on the same accumulator
//! adds the product twice; use [`Matrix::clear`] in between for a fresh
//! result.

pub mod blocked;
pub mod config;
pub mod error;
pub mod matrix;
pub mod populate;
pub mod runner;

pub use blocked::gemm_tiled::matmul_blocked;
pub use config::{Algorithm, DEFAULT_SIZE, RunConfig, TileSize};
pub use error::{MatmulError, Result};
pub use matrix::Matrix;
pub use matrix::naive_ijk::matmul_naive_ijk;
pub use populate::{MatrixSource, UniformSource, populate};
pub use runner::{Report, run};

use tracing::debug;

/// Naive matrix multiply: C += A * B, i-j-k order.
///
/// # Errors
///
/// [`MatmulError::DimensionMismatch`] if A, B and C don't share one
/// dimension. C is left untouched in that case.
pub fn multiply(c: &mut Matrix, a: &Matrix, b: &Matrix) -> Result<()> {
    let n = check_dims(c, a, b)?;
    debug!(n, "naive multiply");
    matmul_naive_ijk(a.as_slice(), b.as_slice(), c.as_mut_slice(), n);
    Ok(())
}

/// Blocked matrix multiply: C += A * B with `tile × tile` tiles.
///
/// The tile doesn't need to divide N; a tile of N or more is valid but
/// gives up the cache benefit.
///
/// # Errors
///
/// [`MatmulError::DimensionMismatch`] if A, B and C don't share one
/// dimension. C is left untouched in that case.
pub fn block_multiply(tile: TileSize, c: &mut Matrix, a: &Matrix, b: &Matrix) -> Result<()> {
    let n = check_dims(c, a, b)?;
    debug!(n, tile = tile.get(), "blocked multiply");
    matmul_blocked(a.as_slice(), b.as_slice(), c.as_mut_slice(), n, tile.get());
    Ok(())
}

fn check_dims(c: &Matrix, a: &Matrix, b: &Matrix) -> Result<usize> {
    let n = c.dim();
    for (operand, m) in [("A", a), ("B", b)] {
        if m.dim() != n {
            return Err(MatmulError::DimensionMismatch {
                operand,
                expected: n,
                got: m.dim(),
            });
        }
    }
    Ok(n)
}
