use num_traits::Float;

use super::Point;
use crate::Intersects;

/// An unordered pair of points; an edge or a diagonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment<T>(pub [Point<T>; 2]);

/// Witness that two open segments properly cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossing;

impl<T> LineSegment<T> {
  pub fn new(a: Point<T>, b: Point<T>) -> LineSegment<T> {
    LineSegment([a, b])
  }
}

impl<T: Float> LineSegment<T> {
  pub fn midpoint(&self) -> Point<T> {
    self.0[0].midpoint(&self.0[1])
  }

  pub fn crosses(&self, other: &LineSegment<T>) -> bool {
    self.intersect(other).is_some()
  }
}

impl<'a, T> Intersects for &'a LineSegment<T>
where
  T: Float,
{
  type Result = Crossing;

  /// Solve the 2x2 system for the line parameters of the crossing point and
  /// demand that both fall strictly between the endpoints. A determinant of
  /// exactly zero (parallel or collinear segments) is reported as no
  /// intersection; collinear overlap deliberately does not count.
  fn intersect(self, other: &'a LineSegment<T>) -> Option<Crossing> {
    let [p1, p2] = self.0;
    let [q1, q2] = other.0;
    let (a, b) = (p1.x_coord(), p1.y_coord());
    let (c, d) = (p2.x_coord(), p2.y_coord());
    let (p, q) = (q1.x_coord(), q1.y_coord());
    let (r, s) = (q2.x_coord(), q2.y_coord());

    let det = (c - a) * (s - q) - (r - p) * (d - b);
    if det == T::zero() {
      return None;
    }
    let lambda = ((s - q) * (r - a) + (p - r) * (s - b)) / det;
    let gamma = ((b - d) * (r - a) + (c - a) * (s - b)) / det;

    if T::zero() < lambda && lambda < T::one() && T::zero() < gamma && gamma < T::one() {
      Some(Crossing)
    } else {
      None
    }
  }
}
