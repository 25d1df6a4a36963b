use num_traits::Float;

use crate::data::polygon::ring_contains;
use crate::data::{LineSegment, Point, Polygon, Triangle};

/// Find the smallest index `i` such that the diagonal from `ring[i]` to
/// `ring[(i + 2) % n]` is a valid ear of the ring: it properly crosses no
/// edge, and its midpoint lies inside the ring.
///
/// A ring of exactly three vertices is its own ear; index 0 qualifies without
/// running the predicates (the diagonal's midpoint would sit exactly on the
/// boundary, where the parity test is unreliable).
///
/// `None` means no ear exists. For simple rings that does not happen; for
/// malformed input it is the terminal condition of the clipping loop, not an
/// error.
pub fn find_ear<T: Float>(ring: &[Point<T>]) -> Option<usize> {
  match ring.len() {
    0..=2 => None,
    3 => Some(0),
    n => (0..n).find(|&i| is_ear(ring, i)),
  }
}

// O(n) per candidate: the diagonal is checked against every ring edge.
fn is_ear<T: Float>(ring: &[Point<T>], i: usize) -> bool {
  let n = ring.len();
  let a = ring[i];
  let c = ring[(i + 2) % n];
  let diagonal = LineSegment::new(a, c);
  for j in 0..n {
    let p = ring[j];
    let q = ring[(j + 1) % n];
    // An edge incident to the diagonal shares an endpoint with it and can
    // only touch, never properly cross. The shared endpoint must still be
    // skipped explicitly: with fractional coordinates the parameter solve
    // rounds to values like 0.9999999999999999, which pass the strict
    // open-interval test and would veto every candidate.
    if p == a || p == c || q == a || q == c {
      continue;
    }
    if diagonal.crosses(&LineSegment::new(p, q)) {
      return false;
    }
  }
  ring_contains(ring, &diagonal.midpoint())
}

/// Clip ears off a working copy of the polygon's ring, yielding one triangle
/// per extracted ear. A simple ring with `n` vertices yields exactly `n - 2`
/// triangles tiling the polygon. If no ear can be found (self-intersecting or
/// otherwise malformed input), the iterator simply ends early with a partial
/// tiling.
pub fn earclip<T: Float>(poly: &Polygon<T>) -> impl Iterator<Item = Triangle<T>> {
  let mut ring: Vec<Point<T>> = poly.points().to_vec();
  std::iter::from_fn(move || {
    if ring.len() < 3 {
      return None;
    }
    let ear = find_ear(&ring)?;
    let n = ring.len();
    let trig = Triangle::new([ring[ear], ring[(ear + 1) % n], ring[(ear + 2) % n]]);
    // Remove the ear's middle vertex. The last two positions wrap: their
    // middle vertex is the ring's first, respectively last, entry.
    if ear == n - 1 {
      ring.remove(0);
    } else if ear == n - 2 {
      ring.remove(n - 1);
    } else {
      ring.remove(ear + 1);
    }
    Some(trig)
  })
}
