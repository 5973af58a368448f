//! Hamming (7,4) simulation benchmarks
//!
//! Run with: cargo bench --bench hamming

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hamming_sim::cs::ecc::{BitVector, BlockCode, LinearCode};
use hamming_sim::math::monte_carlo::{ExperimentConfig, ExperimentRunner, TrialState};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Benchmark encoding and decoding of a single block
fn bench_block(c: &mut Criterion) {
    let code = LinearCode::hamming_7_4().unwrap();
    let message = BitVector::from_bits(&[true, false, true, true]);
    let mut received = code.encode(&message).unwrap();
    received.flip(2).unwrap();

    c.bench_function("encode_7_4", |b| {
        b.iter(|| code.encode(black_box(&message)).unwrap())
    });
    c.bench_function("decode_7_4", |b| {
        b.iter(|| code.decode(black_box(&received)).unwrap())
    });
}

/// Benchmark one full trial at several crossover probabilities
fn bench_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("trial");
    let code = LinearCode::hamming_7_4().unwrap();
    let runner = ExperimentRunner::new(&code, ExperimentConfig::default()).unwrap();
    let mut state = TrialState::new(&code);
    let mut rng = ChaCha20Rng::seed_from_u64(1);

    group.throughput(Throughput::Elements(1));
    for probability in [0.001, 0.1, 0.5].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(probability),
            probability,
            |b, &p| b.iter(|| runner.run_trial(p, &mut rng, &mut state).unwrap()),
        );
    }
    group.finish();
}

/// Benchmark a reduced sweep over the default probabilities
fn bench_sweep(c: &mut Criterion) {
    let code = LinearCode::hamming_7_4().unwrap();
    let config = ExperimentConfig::default()
        .with_iterations(2_500)
        .with_num_of_bits(10_000);
    let runner = ExperimentRunner::new(&code, config).unwrap();

    c.bench_function("sweep_2500", |b| b.iter(|| runner.run().unwrap()));
}

criterion_group!(benches, bench_block, bench_trial, bench_sweep);
criterion_main!(benches);
