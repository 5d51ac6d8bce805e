//! Criterion benchmarks for the 2-D transform engine.
//!
//! Run with: cargo bench --bench txfm_benchmark
//! Run with native: RUSTFLAGS="-C target-cpu=native" cargo bench --bench txfm_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use zentxfm::{fwd_txfm2d, inv_txfm2d_add, TxSize, TxType};

const SIZES: [TxSize; 4] = [TxSize::X4, TxSize::X8, TxSize::X16, TxSize::X32];

/// Deterministic 10-bit residual block so runs stay comparable.
fn residual_block(n: usize) -> Vec<i16> {
    let mut seed = 0x2545F4914F6CDD1Du64;
    (0..n * n)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((seed >> 33) % 2047) as i16 - 1023
        })
        .collect()
}

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("fwd_txfm2d");
    for tx_size in SIZES {
        let n = tx_size.size();
        let input = residual_block(n);
        group.throughput(Throughput::Elements((n * n) as u64));
        for (label, tx_type) in [
            ("dct_dct", TxType::DctDct),
            ("adst_adst", TxType::AdstAdst),
            ("flipadst_dct", TxType::FlipadstDct),
        ] {
            group.bench_with_input(BenchmarkId::new(label, n), &input, |b, input| {
                let mut coeffs = vec![0i32; n * n];
                b.iter(|| {
                    fwd_txfm2d(black_box(input), n, &mut coeffs, tx_type, tx_size);
                    black_box(coeffs[0])
                })
            });
        }
    }
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inv_txfm2d_add");
    for tx_size in SIZES {
        let n = tx_size.size();
        let input = residual_block(n);
        let mut coeffs = vec![0i32; n * n];
        group.throughput(Throughput::Elements((n * n) as u64));
        for (label, tx_type) in [
            ("dct_dct", TxType::DctDct),
            ("adst_adst", TxType::AdstAdst),
        ] {
            fwd_txfm2d(&input, n, &mut coeffs, tx_type, tx_size);
            group.bench_with_input(BenchmarkId::new(label, n), &coeffs, |b, coeffs| {
                let mut recon = vec![0i16; n * n];
                b.iter(|| {
                    recon.fill(0);
                    inv_txfm2d_add(black_box(coeffs), &mut recon, n, tx_type, tx_size);
                    black_box(recon[0])
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_forward, bench_inverse);
criterion_main!(benches);
