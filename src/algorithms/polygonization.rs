use num_traits::*;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::data::{Point, Polygon};
use crate::Error;

/// Sample a random simple polygon around `origin` by walking a full turn in
/// randomized angular steps and placing each vertex at a randomized radius.
///
/// `irregularity` in [0, 1] scales the variance of the angular spacing (up to
/// `2*pi/vertices`); `spikeyness` in [0, 1] scales the variance of the radius
/// (up to `avg_radius`). Out-of-range values are clamped. Coordinates are
/// rounded to whole units. Vertices come out in counter-clockwise order.
///
/// Fewer than 3 vertices is rejected with `Error::InsufficientVertices`.
pub fn random_polygon<T, R>(
  origin: Point<T>,
  vertices: usize,
  avg_radius: T,
  irregularity: T,
  spikeyness: T,
  rng: &mut R,
) -> Result<Polygon<T>, Error>
where
  T: Float,
  R: Rng + ?Sized,
  Standard: Distribution<T>,
{
  if vertices < 3 {
    return Err(Error::InsufficientVertices);
  }
  let tau = T::from(std::f64::consts::TAU).unwrap();
  let step = tau / T::from(vertices).unwrap();
  let irregularity = clip(irregularity, T::zero(), T::one()) * step;
  let spikeyness = clip(spikeyness, T::zero(), T::one()) * avg_radius;

  let lower = step - irregularity;
  let upper = step + irregularity;
  let mut angle_steps = Vec::with_capacity(vertices);
  let mut sum = T::zero();
  for _ in 0..vertices {
    let tmp = random_float(rng, lower, upper);
    angle_steps.push(tmp);
    sum = sum + tmp;
  }
  // Normalize the steps so the walk closes after exactly one full turn.
  let k = sum / tau;

  let two = T::one() + T::one();
  let mut angle = random_float(rng, T::zero(), tau);
  let mut points = Vec::with_capacity(vertices);
  for angle_step in angle_steps {
    // The bounds land here in (avg_radius, spikeyness) order, so with
    // spikeyness below the average radius the draw runs downwards from
    // avg_radius rather than around it. Preserved as observed upstream.
    let r = clip(
      random_float(rng, avg_radius, spikeyness),
      T::zero(),
      two * avg_radius,
    );
    points.push(Point::new([
      (origin.x_coord() + r * angle.cos()).round(),
      (origin.y_coord() + r * angle.sin()).round(),
    ]));
    angle = angle + angle_step / k;
  }

  Polygon::new(points)
}

/// Produce between 20 and 50 copies of `rect`, the i-th rotated `20 * i`
/// degrees about the rectangle's center and shifted diagonally by a random
/// whole-unit offset bounded by half the center-to-corner distance.
pub fn concentric_rectangles<T, R>(rect: [Point<T>; 4], rng: &mut R) -> Vec<Polygon<T>>
where
  T: Float,
  R: Rng + ?Sized,
{
  let center = Point::new([
    (rect[0].x_coord() + rect[1].x_coord()) / (T::one() + T::one()),
    (rect[0].y_coord() + rect[2].y_coord()) / (T::one() + T::one()),
  ]);
  let half_hypot = (center.x_coord() - rect[0].x_coord())
    .hypot(center.y_coord() - rect[0].y_coord())
    / (T::one() + T::one());
  let max_shift = half_hypot.floor().to_u64().unwrap_or(0);

  let count = rng.gen_range(20..=50);
  let twenty = T::from(20).unwrap();
  (1..=count)
    .map(|i| {
      let degrees = twenty * T::from(i).unwrap();
      let shift = T::from(rng.gen_range(0..=max_shift)).unwrap();
      let corners = rect
        .iter()
        .map(|corner| {
          let rotated = corner.rotate_around(&center, degrees);
          Point::new([rotated.x_coord() + shift, rotated.y_coord() + shift])
        })
        .collect();
      Polygon::new_unchecked(corners)
    })
    .collect()
}

// Uniform in [min, max). Callers may pass an inverted range on purpose; the
// sample then runs from min down to max.
fn random_float<T, R>(rng: &mut R, min: T, max: T) -> T
where
  T: Float,
  R: Rng + ?Sized,
  Standard: Distribution<T>,
{
  rng.gen::<T>() * (max - min) + min
}

// Clamp, with a quirk kept from the source: an inverted range passes `x`
// through untouched.
fn clip<T: Float>(x: T, min: T, max: T) -> T {
  if min > max {
    x
  } else if x < min {
    min
  } else if x > max {
    max
  } else {
    x
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_err, assert_ok};
  use proptest::prelude::*;
  use rand::rngs::SmallRng;
  use rand::SeedableRng;
  use test_strategy::proptest;

  #[test]
  fn rejects_degenerate_vertex_counts() {
    let mut rng = SmallRng::seed_from_u64(0);
    let origin = Point::new([0.0, 0.0]);
    assert_err!(random_polygon(origin, 0, 250.0, 0.5, 0.5, &mut rng));
    assert_err!(random_polygon(origin, 2, 250.0, 0.5, 0.5, &mut rng));
    assert_ok!(random_polygon(origin, 3, 250.0, 0.5, 0.5, &mut rng));
  }

  #[proptest]
  fn vertex_count_is_exact(#[strategy(3usize..40)] n: usize, seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let poly = random_polygon(Point::new([0.0, 0.0]), n, 250.0, 0.5, 0.5, &mut rng).unwrap();
    prop_assert_eq!(poly.points().len(), n);
  }

  #[proptest]
  fn vertices_stay_within_twice_the_radius(#[strategy(3usize..40)] n: usize, seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let origin = Point::new([400.0, 300.0]);
    let poly = random_polygon(origin, n, 250.0, 1.0, 1.0, &mut rng).unwrap();
    for pt in poly.iter() {
      let dist = (pt.x_coord() - origin.x_coord()).hypot(pt.y_coord() - origin.y_coord());
      // 2 * avg_radius plus rounding slack.
      prop_assert!(dist <= 2.0 * 250.0 + 1.0);
    }
  }

  #[proptest]
  fn output_is_counter_clockwise(seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let poly = random_polygon(Point::new([0.0, 0.0]), 12, 250.0, 0.2, 0.2, &mut rng).unwrap();
    prop_assert!(poly.signed_area() > 0.0);
  }

  #[proptest]
  fn rectangle_count_is_bounded(seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let rect = [
      Point::new([100.0, 100.0]),
      Point::new([300.0, 100.0]),
      Point::new([300.0, 200.0]),
      Point::new([100.0, 200.0]),
    ];
    let rects = concentric_rectangles(rect, &mut rng);
    prop_assert!((20..=50).contains(&rects.len()));
    for quad in &rects {
      prop_assert_eq!(quad.points().len(), 4);
    }
  }

  #[test]
  fn clip_passes_through_on_inverted_range() {
    assert_eq!(clip(7.0, 5.0, 1.0), 7.0);
    assert_eq!(clip(7.0, 1.0, 5.0), 5.0);
    assert_eq!(clip(-7.0, 1.0, 5.0), 1.0);
    assert_eq!(clip(3.0, 1.0, 5.0), 3.0);
  }

  #[test]
  fn radius_draw_keeps_the_observed_bound_order() {
    // With spikeyness 0 the radius samples the whole (0, avg] span instead
    // of collapsing onto the average radius.
    let mut rng = SmallRng::seed_from_u64(7);
    let samples: Vec<f64> = (0..64)
      .map(|_| random_float(&mut rng, 250.0, 0.0))
      .collect();
    assert!(samples.iter().all(|&r| 0.0 < r && r <= 250.0));
    assert!(samples.iter().any(|&r| r < 125.0));
  }
}
