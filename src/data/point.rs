use array_init::array_init;
use num_traits::Float;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Index;

/// A location on the drawing plane. Equality is exact coordinate equality;
/// there is no tolerance.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl<T: Float> Point<T> {
  pub fn x_coord(&self) -> T {
    self.array[0]
  }

  pub fn y_coord(&self) -> T {
    self.array[1]
  }

  pub fn midpoint(&self, other: &Point<T>) -> Point<T> {
    let two = T::one() + T::one();
    Point::new([
      (self.x_coord() + other.x_coord()) / two,
      (self.y_coord() + other.y_coord()) / two,
    ])
  }

  /// Rotate `self` around `pivot` by `degrees`, counter-clockwise for
  /// positive angles in a y-up coordinate system.
  pub fn rotate_around(&self, pivot: &Point<T>, degrees: T) -> Point<T> {
    let rad = degrees.to_radians();
    let x = self.x_coord() - pivot.x_coord();
    let y = self.y_coord() - pivot.y_coord();
    Point::new([
      x * rad.cos() - y * rad.sin() + pivot.x_coord(),
      x * rad.sin() + y * rad.cos() + pivot.y_coord(),
    ])
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::any_pt;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[proptest]
  fn midpoint_is_symmetric(#[strategy(any_pt())] a: Point<f64>, #[strategy(any_pt())] b: Point<f64>) {
    prop_assert_eq!(a.midpoint(&b), b.midpoint(&a));
  }

  #[proptest]
  fn full_turn_is_identity(
    #[strategy(any_pt())] p: Point<f64>,
    #[strategy(any_pt())] pivot: Point<f64>,
  ) {
    let q = p.rotate_around(&pivot, 360.0);
    prop_assert!((q.x_coord() - p.x_coord()).abs() < 1e-6);
    prop_assert!((q.y_coord() - p.y_coord()).abs() < 1e-6);
  }

  #[test]
  fn quarter_turn() {
    let p = Point::new([1.0, 0.0]);
    let q = p.rotate_around(&Point::new([0.0, 0.0]), 90.0);
    assert!((q.x_coord() - 0.0).abs() < 1e-12);
    assert!((q.y_coord() - 1.0).abs() < 1e-12);
  }
}
