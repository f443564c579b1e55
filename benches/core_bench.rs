use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use curve_editor_engine::core::hit_test_with_samples;
use curve_editor_engine::{
    evaluate_curve, sample_curve, CurveData, Keyframe, TangentMode, Viewport,
};
use glam::DVec2;
use std::hint::black_box;

fn build_synthetic_curve(keyframe_count: usize) -> CurveData {
    let modes = [
        TangentMode::Auto,
        TangentMode::Free,
        TangentMode::Mirrored,
        TangentMode::Linear,
    ];
    let step = 1.0 / (keyframe_count - 1) as f64;
    let keyframes = (0..keyframe_count)
        .map(|i| {
            let x = i as f64 * step;
            let y = 0.5 + 0.4 * (x * 12.0).sin();
            Keyframe::new(i as u64 + 1, x, y, modes[i % modes.len()])
                .with_handles(DVec2::new(-step / 3.0, 0.05), DVec2::new(step / 3.0, -0.05))
        })
        .collect();
    CurveData::new(keyframes, [0.0, 1.0], [0.0, 1.0]).normalize()
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");

    for &keyframe_count in &[4usize, 64usize] {
        let curve = build_synthetic_curve(keyframe_count);

        group.bench_with_input(
            BenchmarkId::new("evaluate_1024", keyframe_count),
            &curve,
            |b, curve| {
                b.iter(|| {
                    let mut sum = 0.0;
                    for i in 0..1024 {
                        sum += evaluate_curve(curve, black_box(i as f64 / 1023.0));
                    }
                    black_box(sum)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("sample_200", keyframe_count),
            &curve,
            |b, curve| b.iter(|| black_box(sample_curve(curve, black_box(200)).len())),
        );
    }

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let curve = build_synthetic_curve(64);
    let viewport = Viewport::default();
    let canvas = DVec2::new(800.0, 400.0);

    c.bench_function("hit_test_curve_line", |b| {
        b.iter(|| {
            hit_test_with_samples(
                black_box(DVec2::new(401.0, 200.0)),
                &curve,
                &viewport,
                canvas,
                10.0,
                200,
            )
        })
    });
}

criterion_group!(core_benches, bench_evaluation, bench_hit_test);
criterion_main!(core_benches);
