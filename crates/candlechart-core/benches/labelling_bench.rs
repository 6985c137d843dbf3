use candlechart_core::{optimal_labels, Containment, LabelParams, Ticker, ValueTicker};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_labelling(c: &mut Criterion) {
    let params = LabelParams::default();
    let mut group = c.benchmark_group("optimal_labels");
    for &(lo, hi, want) in &[(0.0, 100.0, 5usize), (231.17, 248.93, 15), (-0.0042, 0.0173, 8), (1.0e6, 5.3e6, 10)] {
        group.bench_function(format!("{lo}_{hi}_{want}"), |b| {
            b.iter(|| optimal_labels(black_box(lo), black_box(hi), want, Containment::Free, &params))
        });
    }
    group.finish();

    let ticker = ValueTicker::default();
    c.bench_function("value_ticks_15", |b| b.iter(|| ticker.ticks(black_box(231.17), black_box(248.93))));
}

criterion_group!(benches, bench_labelling);
criterion_main!(benches);
