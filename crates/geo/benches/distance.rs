//! Benchmarks for great-circle distance calculations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use servicesearch_geo::{distance_km, GeoPoint};

fn create_test_points(count: usize) -> Vec<GeoPoint> {
    (0..count)
        .map(|i| {
            // Generate points in a grid around Stockholm
            let lat = 59.0 + (i as f64 * 0.01) % 2.0;
            let lng = 17.0 + (i as f64 * 0.01) % 2.0;
            GeoPoint::new(lat, lng)
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let stockholm = GeoPoint::new(59.3293, 18.0686);
    let gothenburg = GeoPoint::new(57.7089, 11.9746);

    c.bench_function("distance_km_single", |b| {
        b.iter(|| distance_km(black_box(&stockholm), black_box(&gothenburg)))
    });
}

fn bench_many_distances(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_km_many");
    let origin = GeoPoint::new(59.0, 18.0);

    for size in [10, 100, 1000, 10000].iter() {
        let points = create_test_points(*size);

        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            b.iter(|| {
                points
                    .iter()
                    .map(|p| distance_km(black_box(&origin), p))
                    .sum::<f64>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_many_distances);
criterion_main!(benches);
