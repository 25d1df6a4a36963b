pub mod polygonization;
pub mod triangulation;

#[doc(inline)]
pub use polygonization::{concentric_rectangles, random_polygon};

#[doc(inline)]
pub use triangulation::earclip::{earclip, find_ear};
pub use triangulation::Triangulate;
