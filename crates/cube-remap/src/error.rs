//! Error types for cubemap assembly and layout detection.

use thiserror::Error;

/// Errors produced when assembling or remapping cubemaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CubemapError {
    /// Faces need at least one pixel.
    #[error("cubemap faces must be at least 1x1")]
    EmptyFace,

    /// Every face must be as wide as it is tall.
    #[error("cubemap face is {width}x{height}, but faces must be square")]
    NonSquareFace { width: u32, height: u32 },

    /// All six faces must share one size.
    #[error("cubemap face size mismatch: expected {expected}, got {got}")]
    FaceSizeMismatch { expected: u32, got: u32 },

    /// The image dimensions fit none of the known layouts.
    #[error("{width}x{height} does not match any known cubemap layout")]
    UnrecognizedLayout { width: u32, height: u32 },
}

/// Convenience type alias for results using [`CubemapError`].
pub type Result<T> = std::result::Result<T, CubemapError>;
