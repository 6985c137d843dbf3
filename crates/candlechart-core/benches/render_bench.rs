use candlechart_core::{render, RenderConfig, Sample, Series};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_series(n: usize) -> Series {
    let mut samples = Vec::with_capacity(n);
    let mut price = 100.0;
    for i in 0..n {
        let open = price;
        let close = (price + (i as f64 * 0.13).sin()).max(1.0);
        samples.push(Sample {
            timestamp: 1_600_000_000 + i as i64 * 60,
            open,
            high: open.max(close) + 0.25,
            low: open.min(close) - 0.25,
            close,
            volume: 500.0 + (i % 11) as f64 * 25.0,
        });
        price = close;
    }
    Series::new("BENCH", "Bench", "USD", "1m", samples)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[60usize, 600, 6_000] {
        let series = build_series(n);
        let config = RenderConfig::default().with_volume_panel(0.25);
        group.bench_function(format!("candles_{n}"), |b| {
            b.iter(|| black_box(render(&series, &config)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
