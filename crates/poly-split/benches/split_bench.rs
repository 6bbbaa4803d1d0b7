//! Criterion benchmarks for polygon splitting and subdivision.
//! Focus sizes: star polygons with n in {8, 32, 128} spikes.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nalgebra::{Point2, Vector2};
use poly_split::{Line2D, Polygon};

/// A star polygon with `spikes` points: every split line crosses it
/// many times, exercising the chord stitching path.
fn star_polygon(spikes: usize, inner: f32, outer: f32) -> Polygon {
    let path = (0..spikes * 2)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::PI / spikes as f32;
            let radius = if i % 2 == 0 { outer } else { inner };
            Point2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    Polygon::new(path).expect("star polygon has at least 6 vertices")
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    for &spikes in &[8usize, 32, 128] {
        let polygon = star_polygon(spikes, 0.4, 1.0);
        let line = Line2D::new(Point2::new(0.1, 0.0), Point2::new(0.13, 1.0))
            .expect("distinct points");
        group.bench_with_input(BenchmarkId::new("star", spikes), &polygon, |b, polygon| {
            b.iter(|| polygon.split(&line))
        });
    }
    group.finish();
}

fn bench_subdivide(c: &mut Criterion) {
    let mut group = c.benchmark_group("subdivide");
    for &spikes in &[8usize, 32] {
        let polygon = star_polygon(spikes, 0.4, 1.0);
        group.bench_with_input(BenchmarkId::new("star", spikes), &polygon, |b, polygon| {
            b.iter(|| polygon.subdivide(Vector2::new(0.25, 0.25)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_split, bench_subdivide);
criterion_main!(benches);
