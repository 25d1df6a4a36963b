// Shared proptest strategies for points and polygons.
use crate::data::{Point, Polygon};

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub fn any_pt() -> impl Strategy<Value = Point<f64>> {
  ((-1000.0..1000.0f64), (-1000.0..1000.0f64)).prop_map(|(x, y)| Point::new([x, y]))
}

/// Strictly convex polygons: vertices on a circle at strictly increasing
/// angles, counter-clockwise. Derived from an `(n, seed)` pair so failures
/// print a small reproducible case.
pub fn convex_polygon() -> impl Strategy<Value = Polygon<f64>> {
  (3usize..12, any::<u64>()).prop_map(|(n, seed)| {
    let mut rng = SmallRng::seed_from_u64(seed);
    let radius: f64 = rng.gen_range(50.0..150.0);
    let step = std::f64::consts::TAU / n as f64;
    let points = (0..n)
      .map(|i| {
        // Jitter below 0.9 of a step keeps the angles strictly increasing.
        let angle = (i as f64 + rng.gen::<f64>() * 0.9) * step;
        Point::new([radius * angle.cos(), radius * angle.sin()])
      })
      .collect();
    Polygon::new_unchecked(points)
  })
}
