use num_traits::Float;

use super::Point;

/// Three points, emitted one per clipped ear. Carries no identity beyond its
/// vertices and inherits the winding of the ring it was cut from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T>(pub [Point<T>; 3]);

impl<T: Float> Triangle<T> {
  pub fn new(pts: [Point<T>; 3]) -> Triangle<T> {
    Triangle(pts)
  }

  pub fn points(&self) -> &[Point<T>; 3] {
    &self.0
  }

  pub fn signed_area(&self) -> T {
    let [a, b, c] = &self.0;
    let two = T::one() + T::one();
    (a.x_coord() * b.y_coord() - b.x_coord() * a.y_coord()
      + b.x_coord() * c.y_coord()
      - c.x_coord() * b.y_coord()
      + c.x_coord() * a.y_coord()
      - a.x_coord() * c.y_coord())
      / two
  }

  pub fn area(&self) -> T {
    self.signed_area().abs()
  }
}
