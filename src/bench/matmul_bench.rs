use std::hint::black_box;

use blocked_matmul::{Matrix, MatrixSource, TileSize, UniformSource, block_multiply, multiply};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

const SIZES: [usize; 2] = [128, 256];
const TILES: [usize; 4] = [8, 16, 32, 64];

fn operands(n: usize) -> (Matrix, Matrix) {
    let mut source = UniformSource::seeded(0x5eed);
    let mut a = Matrix::zeros(n);
    let mut b = Matrix::zeros(n);
    source.populate(&mut a);
    source.populate(&mut b);
    (a, b)
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    for n in SIZES {
        let (a, b) = operands(n);

        group.bench_with_input(BenchmarkId::new("naive", n), &n, |bench, &n| {
            let mut out = Matrix::zeros(n);
            bench.iter(|| {
                out.clear();
                multiply(&mut out, black_box(&a), black_box(&b)).unwrap();
            })
        });

        for tile in TILES {
            let tile = TileSize::new(tile).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("blocked_{}", tile), n),
                &n,
                |bench, &n| {
                    let mut out = Matrix::zeros(n);
                    bench.iter(|| {
                        out.clear();
                        block_multiply(tile, &mut out, black_box(&a), black_box(&b)).unwrap();
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_matmul);
criterion_main!(benches);
