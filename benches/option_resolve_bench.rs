use chart_options::core::TickItem;
use chart_options::engine::dataset_context;
use chart_options::native::NativeValue;
use chart_options::scriptable::{AxisItem, DatasetContext};
use chart_options::{Chart, Engine, HasLineOptions};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_proxy_resolution(c: &mut Criterion) {
    let mut chart = Chart::new("line").expect("chart");
    let id = chart.id().clone();
    let dataset = chart.add_dataset("bench").expect("dataset");
    dataset
        .border_width()
        .set_callback(|context: &DatasetContext| Some(context.index as f64 * 0.5));
    let args = [dataset_context(&id, 0, Some(42))];

    c.bench_function("scriptable_proxy_resolve", |b| {
        b.iter(|| {
            let _ = black_box(
                dataset
                    .border_width()
                    .resolve(&NativeValue::Undefined, black_box(&args)),
            );
        })
    });
}

fn bench_tick_pass_1k(c: &mut Criterion) {
    let mut chart = Chart::new("line").expect("chart");
    chart
        .add_axis("y", "linear")
        .expect("axis")
        .set_linear_tick_callback(|_: &AxisItem, value: &f64, _: usize, _: &[TickItem]| {
            (value.fract() == 0.0).then(|| format!("{value}"))
        })
        .expect("tick callback");
    let ticks: Vec<TickItem> = (0..1_000).map(|i| TickItem::new(f64::from(i) * 0.5)).collect();
    let engine = Engine::new(&chart);

    c.bench_function("tick_pass_1k", |b| {
        b.iter(|| {
            let _ = engine
                .build_ticks("y", black_box(ticks.clone()))
                .expect("tick pass");
        })
    });
}

criterion_group!(benches, bench_proxy_resolution, bench_tick_pass_1k);
criterion_main!(benches);
