mod line_segment;
pub(crate) mod point;
pub mod polygon;
mod triangle;

pub use line_segment::*;
pub use point::Point;
pub use triangle::Triangle;

#[doc(inline)]
pub use crate::data::polygon::Polygon;
