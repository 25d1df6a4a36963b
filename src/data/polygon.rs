use num_traits::Float;

use crate::data::{LineSegment, Point};
use crate::Error;

/// An ordered ring of at least three points, implicitly closed: the last
/// vertex connects back to the first without a duplicated closing point.
///
/// Simplicity and winding order are not validated. Feeding a self-intersecting
/// ring to the triangulator silently produces a partial result.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T> {
  pub(crate) points: Vec<Point<T>>,
}

impl<T: Float> Polygon<T> {
  pub fn new(points: Vec<Point<T>>) -> Result<Polygon<T>, Error> {
    let p = Self::new_unchecked(points);
    p.validate()?;
    Ok(p)
  }

  pub fn new_unchecked(points: Vec<Point<T>>) -> Polygon<T> {
    Polygon { points }
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.points.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    Ok(())
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  pub fn iter(&self) -> impl Iterator<Item = &Point<T>> {
    self.points.iter()
  }

  // O(n), wrapping from the last vertex back to the first.
  pub fn iter_boundary_edges(&self) -> impl Iterator<Item = LineSegment<T>> + '_ {
    let n = self.points.len();
    (0..n).map(move |i| LineSegment::new(self.points[i], self.points[(i + 1) % n]))
  }

  pub fn signed_area(&self) -> T {
    let two = T::one() + T::one();
    self
      .iter_boundary_edges()
      .fold(T::zero(), |acc, LineSegment([p, q])| {
        acc + p.x_coord() * q.y_coord() - q.x_coord() * p.y_coord()
      })
      / two
  }

  pub fn area(&self) -> T {
    self.signed_area().abs()
  }

  /// Ray-casting parity test. Points exactly on an edge or vertex resolve
  /// to whichever side the floating-point thresholds land on.
  pub fn contains(&self, pt: &Point<T>) -> bool {
    ring_contains(&self.points, pt)
  }
}

// The parity test over a raw vertex slice. The ear finder runs this against
// the shrinking working ring, which never materializes as a Polygon.
pub(crate) fn ring_contains<T: Float>(ring: &[Point<T>], pt: &Point<T>) -> bool {
  let x = pt.x_coord();
  let y = pt.y_coord();
  let mut inside = false;
  let mut j = match ring.len() {
    0 => return false,
    n => n - 1,
  };
  for i in 0..ring.len() {
    let (xi, yi) = (ring[i].x_coord(), ring[i].y_coord());
    let (xj, yj) = (ring[j].x_coord(), ring[j].y_coord());
    if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
      inside = !inside;
    }
    j = i;
  }
  inside
}
