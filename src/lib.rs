//! Ear-clipping triangulation for simple 2D polygons.
//!
//! The input is an ordered ring of at least three points, implicitly closed,
//! in either winding order. The output is a stream of triangles whose union
//! tiles the polygon. Predicates are plain floating-point math: parallel and
//! collinear segments never count as crossing, and points exactly on a
//! polygon's boundary resolve however the parity test lands.
#![deny(clippy::cast_lossless)]

pub mod algorithms;
pub mod data;
mod intersection;

pub use intersection::Intersects;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
