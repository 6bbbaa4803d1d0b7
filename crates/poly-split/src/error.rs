//! Error types for polygon and line construction.

use thiserror::Error;

/// Errors produced by line and polygon constructors and operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A line needs two distinct points.
    #[error("a line requires two distinct points")]
    IdenticalPoints,

    /// A polygon needs at least a triangle's worth of vertices.
    #[error("polygon requires at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// A lifted 3D vertex loop must share one plane.
    #[error("vertex at z = {got} does not lie on the polygon plane z = {expected}")]
    NotCoplanar { expected: f32, got: f32 },

    /// Grid subdivision needs strictly positive cell dimensions.
    #[error("subdivision cell size must be positive, got ({x}, {y})")]
    InvalidCellSize { x: f32, y: f32 },
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
