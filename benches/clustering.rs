use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion,
    PlotConfiguration,
};
use stride::cluster::{AdaptiveClustering, LinearClusterer, QuadraticClusterer};
use stride::synth;

const STEP: f64 = 2.0;

fn bench_singletons(c: &mut Criterion) {
    // Every value is its own cluster: the quadratic strategy's worst case.
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    let mut group = c.benchmark_group("singletons");
    group.plot_config(plot_config);
    group.sample_size(10);

    for n in [1_000usize, 5_000, 10_000, 20_000].iter() {
        let data = synth::arithmetic(*n, 3);
        group.bench_with_input(BenchmarkId::new("quadratic", n), &data, |b, data| {
            let model = QuadraticClusterer::new(STEP);
            b.iter(|| model.run(black_box(data)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("linear", n), &data, |b, data| {
            let model = LinearClusterer::new(STEP);
            b.iter(|| model.run(black_box(data)).unwrap());
        });
    }
    group.finish();
}

fn bench_gapped(c: &mut Criterion) {
    let mut group = c.benchmark_group("gapped");
    group.sample_size(10);

    for n in [1_000usize, 5_000, 20_000].iter() {
        let data = synth::gapped(*n, STEP, 42);
        group.bench_with_input(BenchmarkId::new("quadratic", n), &data, |b, data| {
            let model = QuadraticClusterer::new(STEP);
            b.iter(|| model.run(black_box(data)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("linear", n), &data, |b, data| {
            let model = LinearClusterer::new(STEP);
            b.iter(|| model.run(black_box(data)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_singletons, bench_gapped);
criterion_main!(benches);
