use criterion::{Criterion, black_box, criterion_group, criterion_main};
use stella_aspects::{AspectOptions, ChartLayer, aspects_within, find_aspects};
use stella_core::{ALL_BODIES, AnglePoint, CelestialPoint, PointId};

fn twelve_points(phase_deg: f64) -> Vec<CelestialPoint> {
    let mut points: Vec<CelestialPoint> = ALL_BODIES
        .iter()
        .enumerate()
        .map(|(i, &body)| {
            CelestialPoint::new(PointId::Body(body), phase_deg + 37.0 * i as f64, false)
        })
        .collect();
    points.push(CelestialPoint::new(
        PointId::Angle(AnglePoint::Ascendant),
        phase_deg + 5.0,
        false,
    ));
    points.push(CelestialPoint::new(
        PointId::Angle(AnglePoint::Midheaven),
        phase_deg + 275.0,
        false,
    ));
    points
}

fn within_bench(c: &mut Criterion) {
    let chart = twelve_points(10.0);

    let mut group = c.benchmark_group("aspects_within");
    group.bench_function("natal_majors", |b| {
        b.iter(|| {
            aspects_within(
                black_box(&chart),
                ChartLayer::Natal,
                &AspectOptions::natal(false),
            )
        })
    });
    group.bench_function("natal_with_minors", |b| {
        b.iter(|| {
            aspects_within(
                black_box(&chart),
                ChartLayer::Natal,
                &AspectOptions::natal(true),
            )
        })
    });
    group.finish();
}

fn synastry_bench(c: &mut Criterion) {
    let a = twelve_points(10.0);
    let b_chart = twelve_points(123.5);

    c.bench_function("find_aspects_synastry", |b| {
        b.iter(|| {
            find_aspects(
                black_box(&a),
                ChartLayer::Natal,
                black_box(&b_chart),
                ChartLayer::Partner,
                &AspectOptions::synastry(true),
            )
        })
    });
}

criterion_group!(benches, within_bench, synastry_bench);
criterion_main!(benches);
