//! 2D polygon engine: vertex loops with winding-number containment,
//! half-plane splitting and cutting, miter offsetting, grid
//! subdivision, and ear-clipping triangulation.

mod error;
mod line;
mod polygon;
mod rect;
mod triangulate;

pub use error::{GeometryError, Result};
pub use line::Line2D;
pub use polygon::{COPLANAR_EPSILON, LineSplit, Polygon};
pub use rect::Rect;
pub use triangulate::triangulate;
