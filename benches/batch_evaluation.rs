use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hmpi_scorer_rust::{summarize, ConcentrationReading, Sample, SampleEvaluator};

fn make_samples(n: usize) -> Vec<Sample> {
    (0..n)
        .map(|i| {
            let f = (i % 97) as f64 / 97.0;
            let reading: ConcentrationReading = [
                ("Pb", 0.03 * f),
                ("Cd", 0.008 * f),
                ("Cr", 0.1 * (1.0 - f)),
                ("Cu", 1.5 * f),
                ("Zn", 4.0),
                ("Ni", 0.02 * f),
                ("As", 0.015 * (1.0 - f)),
                ("Hg", 0.001),
            ]
            .iter()
            .map(|(s, v)| (s.to_string(), *v))
            .collect();
            Sample::new(format!("S{}", i), reading)
        })
        .collect()
}

fn bench_batch(c: &mut Criterion) {
    let evaluator = SampleEvaluator::default();
    let mut group = c.benchmark_group("batch_evaluation");

    for n in [100, 10_000] {
        let samples = make_samples(n);
        group.bench_with_input(BenchmarkId::new("sequential", n), &samples, |b, s| {
            b.iter(|| summarize(&evaluator.evaluate_batch_sequential(black_box(s))))
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &samples, |b, s| {
            b.iter(|| summarize(&evaluator.evaluate_batch(black_box(s))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_batch);
criterion_main!(benches);
