use criterion::{criterion_group, criterion_main, Criterion};
use lexichain::{BenchmarkCalculator, BoardAnalysis};
use std::hint::black_box;

fn sample_boards() -> Vec<(u32, u32, BoardAnalysis)> {
    (0..256u32)
        .map(|i| {
            let expected = 8 + (i % 24);
            let words = i * 3 % 120;
            let analysis = BoardAnalysis {
                rarity_score_potential: 400.0 + (i as f64) * 9.0,
                avg_word_length: 3.5 + (i % 7) as f64 * 0.5,
                connectivity_score: 0.6 + (i % 10) as f64 * 0.1,
                max_score_potential: 3000.0 + (i as f64) * 50.0,
                ..Default::default()
            };
            (words, expected, analysis)
        })
        .collect()
}

fn bench_benchmarks(c: &mut Criterion) {
    let calc = BenchmarkCalculator::default();
    let boards = sample_boards();

    c.bench_function("basic_256_boards", |b| {
        b.iter(|| {
            for (words, expected, _) in &boards {
                black_box(calc.basic(black_box(*words), black_box(*expected)));
            }
        })
    });

    c.bench_function("enhanced_256_boards", |b| {
        b.iter(|| {
            for (words, expected, analysis) in &boards {
                black_box(calc.enhanced(black_box(*words), black_box(*expected), analysis));
            }
        })
    });
}

criterion_group!(benches, bench_benchmarks);
criterion_main!(benches);
