/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop. For each output entry the whole inner
/// sum is accumulated straight into `c[i][j]`, one add per `p`, in ascending
/// `p`. The innermost loop walks B with stride `n` (column-wise), so every
/// step on a large matrix is a cache miss.
///
/// Use this as the correctness and performance baseline.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into (C += A * B)
/// * `n` - Dimension shared by all three matrices
pub fn matmul_naive_ijk(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    debug_assert_eq!(a.len(), n * n);
    debug_assert_eq!(b.len(), n * n);
    debug_assert_eq!(c.len(), n * n);

    for i in 0..n {
        for j in 0..n {
            for p in 0..n {
                c[i * n + j] += a[i * n + p] * b[p * n + j];
            }
        }
    }
}
