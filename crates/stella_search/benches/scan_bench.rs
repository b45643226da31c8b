use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use stella_core::{
    ALL_BODIES, Body, CelestialPoint, EphemerisError, EphemerisProvider, EquatorialCoord, PointId,
};
use stella_frames::ecliptic_to_equatorial_rad;
use stella_search::{ScanConfig, build_windows, scan_windows, select_diverse};

struct MeanMotion;

impl EphemerisProvider for MeanMotion {
    fn position(&self, body: Body, jd_ut: f64) -> Result<EquatorialCoord, EphemerisError> {
        let phase = 17.0 + 23.0 * body.index() as f64;
        let days = jd_ut - 2_461_100.5;
        let lon = (phase + body.mean_daily_speed_deg() * days).rem_euclid(360.0);
        let (ra_rad, dec_rad) =
            ecliptic_to_equatorial_rad(lon.to_radians(), 23.4392911_f64.to_radians());
        Ok(EquatorialCoord {
            right_ascension_deg: ra_rad.to_degrees(),
            declination_deg: dec_rad.to_degrees(),
        })
    }
}

fn natal_chart(base_deg: f64) -> Vec<CelestialPoint> {
    ALL_BODIES
        .iter()
        .enumerate()
        .map(|(i, &body)| {
            CelestialPoint::new(PointId::Body(body), base_deg + 31.0 * i as f64, false)
        })
        .collect()
}

fn scan_bench(c: &mut Criterion) {
    let natal_a = natal_chart(12.0);
    let natal_b = natal_chart(201.0);
    let start = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");

    let mut group = c.benchmark_group("scan_windows");
    group.sample_size(20);
    group.bench_function("45_days", |b| {
        b.iter(|| {
            scan_windows(
                &MeanMotion,
                black_box(&natal_a),
                black_box(&natal_b),
                start,
                &ScanConfig::new(45),
            )
        })
    });
    group.bench_function("90_days", |b| {
        b.iter(|| {
            scan_windows(
                &MeanMotion,
                black_box(&natal_a),
                black_box(&natal_b),
                start,
                &ScanConfig::new(90),
            )
        })
    });
    group.finish();
}

fn window_bench(c: &mut Criterion) {
    let natal_a = natal_chart(12.0);
    let natal_b = natal_chart(201.0);
    let start = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");
    let config = ScanConfig::new(45);
    let days = scan_windows(&MeanMotion, &natal_a, &natal_b, start, &config)
        .expect("scan succeeds")
        .days;

    c.bench_function("build_and_select_windows", |b| {
        b.iter(|| {
            let candidates = build_windows(black_box(&days), &config);
            select_diverse(candidates, &config)
        })
    });
}

criterion_group!(benches, scan_bench, window_bench);
criterion_main!(benches);
