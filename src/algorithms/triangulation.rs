use num_traits::Float;

use crate::data::{Polygon, Triangle};

pub mod earclip;

pub trait Triangulate<T> {
  type Iter: Iterator<Item = Triangle<T>>;
  fn triangulate(self) -> Self::Iter;
}

impl<'a, T: Float + 'a> Triangulate<T> for &'a Polygon<T> {
  type Iter = Box<dyn Iterator<Item = Triangle<T>> + 'a>;
  fn triangulate(self) -> Self::Iter {
    Box::new(earclip::earclip(self))
  }
}
