use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strand_algebra::*;
use strand_path::*;

fn zigzag(count: usize, seed: f64) -> Trail<Vec2<f64>> {
  Trail::from_offsets((0..count).map(|i| {
    let t = f64::by_usize(i) + seed;
    vec2(t.cos(), (t * 0.7).sin())
  }))
}

fn scattered_path(trails: usize, segments: usize) -> Path2<f64> {
  (0..trails)
    .map(|i| {
      let s = f64::by_usize(i);
      Located::new(zigzag(segments, s), point2(s * 3., -s))
    })
    .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
  let trail = zigzag(black_box(10000), 0.);
  let path = scattered_path(black_box(200), black_box(200));
  let direction = vec2(0.6, 0.8);

  c.bench_function("trail extent build and query", |b| {
    b.iter(|| {
      let e: strand_geometry::Extent<f64, Vec2<f64>> = trail.bounding_extent(Point::origin());
      e.query(direction)
    })
  });

  c.bench_function("path bounding box", |b| {
    b.iter(|| path.bounding_extent::<f64>().bounding_box())
  });

  c.bench_function("path union dedup", |b| {
    b.iter(|| path.clone() + path.clone())
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
