//! Benchmarks for sample window and plot rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use telemetry_inspector::backend::{MockHost, MockPattern, MockSource};
use telemetry_inspector::config::{InspectorConfig, PlotConfig};
use telemetry_inspector::frontend::{CommandRecorder, PlotRect, PlotRenderer};
use telemetry_inspector::inspector::{Inspector, SampleWindow};
use telemetry_inspector::types::{MemberValue, ValueType};

fn filled_window(capacity: usize) -> SampleWindow {
    let mut window = SampleWindow::new(capacity);
    window.reset(3);
    for i in 0..capacity {
        let v = i as f32;
        window.push(&MemberValue::Vec3([v.sin(), v.cos(), v * 0.01]));
    }
    window
}

fn bench_window_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_push");

    for capacity in [256, 1920, 8192].iter() {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("vec3_at_capacity", capacity), capacity, |b, &capacity| {
            let mut window = filled_window(capacity);
            let value = MemberValue::Vec3([1.0, 2.0, 3.0]);
            b.iter(|| black_box(window.push(black_box(&value))));
        });
    }

    group.finish();
}

fn bench_zero_padded_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("zero_padded_view");

    for capacity in [256, 1920, 8192].iter() {
        let mut window = SampleWindow::new(*capacity);
        window.reset(3);
        for i in 0..capacity / 2 {
            window.push(&MemberValue::Vec3([i as f32, 0.0, 0.0]));
        }
        group.throughput(Throughput::Elements(*capacity as u64));
        group.bench_with_input(BenchmarkId::new("collect", capacity), &window, |b, window| {
            b.iter(|| black_box(window.zero_padded().count()));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let mut host = MockHost::new();
    let obj = host.add_object("Player");
    let body = host.add_component(obj, "Rigidbody");
    host.add_property(
        body,
        "velocity",
        ValueType::Vector(3),
        MockSource::Vector(vec![
            MockPattern::Sine { period: 90.0, amplitude: 3.0, offset: 0.0 },
            MockPattern::Sawtooth { period: 60.0, amplitude: 2.0 },
            MockPattern::Counter { start: 0.0, step: 0.1 },
        ]),
    );

    for width in [640.0f32, 1920.0].iter() {
        let mut inspector = Inspector::new(&InspectorConfig::default(), *width);
        inspector.on_target_changed(&host, Some(obj));
        inspector.on_component_chosen(&host, "Rigidbody");
        inspector.on_member_chosen("velocity");
        for _ in 0..*width as usize {
            inspector.tick(&host);
            host.advance();
        }

        let renderer = PlotRenderer::new(PlotConfig::default());
        group.bench_with_input(BenchmarkId::new("vec3_full_window", width), width, |b, &width| {
            b.iter(|| {
                let mut recorder = CommandRecorder::new();
                renderer.render(&inspector.plot_frame(&host), PlotRect::new(width, 480.0), &mut recorder);
                black_box(recorder.commands.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_window_push, bench_zero_padded_view, bench_render);
criterion_main!(benches);
