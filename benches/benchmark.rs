use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use sparseline::{Closest, SampleSeries, Timestamp};

const SAMPLE_COUNT: usize = 2048;

fn sorted_batch() -> (Vec<Timestamp>, Vec<f64>) {
    let timestamps: Vec<Timestamp> = (0..SAMPLE_COUNT).map(|i| i as f64 * 10.0).collect();
    let values: Vec<f64> = timestamps
        .iter()
        .map(|t| 500.0 + 40.0 * (t / 20.0).sin())
        .collect();
    (timestamps, values)
}

fn shuffled_batch() -> (Vec<Timestamp>, Vec<f64>) {
    let (timestamps, values) = sorted_batch();
    let mut pairs: Vec<(Timestamp, f64)> = timestamps.into_iter().zip(values).collect();
    pairs.shuffle(&mut StdRng::seed_from_u64(7));
    (
        pairs.iter().map(|p| p.0).collect(),
        pairs.iter().map(|p| p.1).collect(),
    )
}

fn insert_batch(timestamps: Vec<Timestamp>, values: Vec<f64>) -> SampleSeries<f64> {
    let mut series = SampleSeries::new();
    series.insert_many(timestamps, values).unwrap();
    series
}

fn criterion_benchmark(c: &mut Criterion) {
    let (sorted_timestamps, sorted_values) = sorted_batch();
    let (shuffled_timestamps, shuffled_values) = shuffled_batch();

    c.bench_function("insert_many sorted", |b| {
        b.iter(|| insert_batch(sorted_timestamps.clone(), sorted_values.clone()))
    });
    c.bench_function("insert_many shuffled", |b| {
        b.iter(|| insert_batch(shuffled_timestamps.clone(), shuffled_values.clone()))
    });

    let series = insert_batch(sorted_timestamps.clone(), sorted_values.clone());
    let closest = Closest::new(std::f64::INFINITY, std::f64::INFINITY, true).unwrap();
    c.bench_function("get_value interpolated", |b| {
        b.iter(|| series.get_value(black_box(10245.5), &closest))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
