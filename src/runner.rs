//! Benchmark driver: populate, time one multiply, optionally verify.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use crate::config::{Algorithm, RunConfig};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::populate::MatrixSource;

/// Outcome of one run.
#[derive(Debug, Clone)]
pub struct Report {
    pub algorithm: Algorithm,
    pub size: usize,
    /// Wall-clock time spent inside the multiply call only.
    pub elapsed: Duration,
    /// Max relative deviation from the naive result, when verified.
    pub max_deviation: Option<f64>,
    /// Final contents of C.
    pub product: Matrix,
}

impl Report {
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// Effective throughput, counting 2·N³ flops.
    pub fn gflops(&self) -> f64 {
        let n = self.size as f64;
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        2.0 * n * n * n / secs / 1e9
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wall Time: {} ms ({:.2} GFLOPS)", self.elapsed_ms(), self.gflops())?;
        if let Some(dev) = self.max_deviation {
            write!(f, "\nMax relative deviation from naive: {:e}", dev)?;
        }
        Ok(())
    }
}

/// Run one benchmark.
///
/// A and B come from `source`; C starts zeroed. Only the multiply is timed,
/// by wall clock.
#[instrument(skip_all, fields(size = config.size, algorithm = %config.algorithm))]
pub fn run<S: MatrixSource>(config: &RunConfig, source: &mut S) -> Result<Report> {
    config.validate()?;
    let n = config.size;

    let mut a = Matrix::try_zeros(n)?;
    let mut b = Matrix::try_zeros(n)?;
    source.populate(&mut a);
    source.populate(&mut b);
    let mut c = Matrix::try_zeros(n)?;
    debug!("populated operands");

    let start = Instant::now();
    config.algorithm.apply(&mut c, &a, &b)?;
    let elapsed = start.elapsed();
    info!(elapsed_ms = elapsed.as_millis() as u64, "multiply finished");

    let max_deviation = if config.verify {
        let mut baseline = Matrix::try_zeros(n)?;
        Algorithm::Naive.apply(&mut baseline, &a, &b)?;
        let dev = c.max_relative_diff(&baseline)?;
        info!(max_deviation = dev, "verified against naive");
        Some(dev)
    } else {
        None
    };

    Ok(Report {
        algorithm: config.algorithm,
        size: n,
        elapsed,
        max_deviation,
        product: c,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TileSize;
    use crate::error::MatmulError;
    use crate::populate::UniformSource;

    struct Constant(f64);

    impl MatrixSource for Constant {
        fn populate(&mut self, matrix: &mut Matrix) {
            matrix.fill(self.0);
        }
    }

    #[test]
    fn test_run_uses_source_and_zeroed_c() {
        let config = RunConfig::new(6, Algorithm::from_tile(4));
        let report = run(&config, &mut Constant(2.0)).unwrap();
        // Every entry is sum over 6 of 2*2.
        assert!(report.product.as_slice().iter().all(|&x| x == 24.0));
        assert_eq!(report.size, 6);
        assert!(report.max_deviation.is_none());
    }

    #[test]
    fn test_verify_reports_small_deviation() {
        let tile = TileSize::new(7).unwrap();
        let config = RunConfig::new(40, Algorithm::Blocked(tile)).with_verify(true);
        let report = run(&config, &mut UniformSource::seeded(1)).unwrap();
        let dev = report.max_deviation.unwrap();
        assert!(dev < 1e-12, "deviation {}", dev);
        assert!(report.to_string().contains("Max relative deviation"));
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = RunConfig::new(0, Algorithm::Naive);
        let err = run(&config, &mut Constant(1.0)).unwrap_err();
        assert_eq!(err, MatmulError::InvalidSize(0));
    }

    #[test]
    fn test_oversized_size_returns_error() {
        for algorithm in [Algorithm::Naive, Algorithm::from_tile(8)] {
            let config = RunConfig::new(1 << 32, algorithm);
            let err = run(&config, &mut UniformSource::seeded(1)).unwrap_err();
            assert_eq!(err, MatmulError::SizeOutOfRange(1 << 32));
        }
    }

    #[test]
    fn test_report_display() {
        let report = Report {
            algorithm: Algorithm::Naive,
            size: 2,
            elapsed: Duration::from_millis(1234),
            max_deviation: None,
            product: Matrix::zeros(2),
        };
        // 2 * 2^3 flops in 1.234 s
        assert_eq!(report.to_string(), "Wall Time: 1234 ms (0.00 GFLOPS)");
        assert!(report.gflops() > 0.0);

        let report = Report {
            size: 1000,
            elapsed: Duration::from_millis(500),
            ..report
        };
        assert!(report.to_string().starts_with("Wall Time: 500 ms (4.00 GFLOPS)"));
    }
}
