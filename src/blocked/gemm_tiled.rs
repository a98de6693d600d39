//! Two-dimensional tiled GEMM.

/// Cache-blocked matrix multiplication with square `tile × tile` blocks.
///
/// The output columns and the shared inner dimension are cut into tiles;
/// the output rows are not. For each (column tile, inner tile) pair every
/// row of A is swept once, so the `tile × tile` block of B touched by that
/// pair is loaded once and reused `n` times.
///
/// Loop nest, outer to inner:
///
/// ```text
/// jj   output-column tile start   (step tile)
/// kk   inner-dimension tile start (step tile)
/// i    output row                 (0..n, not tiled)
/// j    column inside the tile     (jj..min(jj+tile, n))
/// p    inner index inside tile    (kk..min(kk+tile, n))  -> acc
/// ```
///
/// `acc` collects one tile's contribution to `c[i][j]` and is added to C
/// once per inner tile, so C sees `ceil(n / tile)` adds per entry instead of
/// `n`. The sum is the same as the naive order up to floating-point
/// reassociation.
///
/// The last tile in each dimension is truncated when `tile` doesn't divide
/// `n`; a `tile >= n` degenerates to a single tile per dimension.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into (C += A * B)
/// * `n` - Dimension shared by all three matrices
/// * `tile` - Tile extent
///
/// # Panics
///
/// Panics if `tile == 0`.
pub fn matmul_blocked(a: &[f64], b: &[f64], c: &mut [f64], n: usize, tile: usize) {
    assert!(tile > 0, "tile size must be positive");
    debug_assert_eq!(a.len(), n * n);
    debug_assert_eq!(b.len(), n * n);
    debug_assert_eq!(c.len(), n * n);

    for jj in (0..n).step_by(tile) {
        let j_end = jj.saturating_add(tile).min(n);

        for kk in (0..n).step_by(tile) {
            let k_end = kk.saturating_add(tile).min(n);

            for i in 0..n {
                let a_tile = &a[i * n + kk..i * n + k_end];
                let c_row = &mut c[i * n..(i + 1) * n];

                for j in jj..j_end {
                    let mut acc = 0.0;
                    for (p, &a_ip) in (kk..k_end).zip(a_tile) {
                        acc += a_ip * b[p * n + j];
                    }
                    c_row[j] += acc;
                }
            }
        }
    }
}
