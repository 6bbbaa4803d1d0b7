//! Cubemap pixel sources and directional color lookup.

use image::{Rgba, RgbaImage};
use nalgebra::Vector3;

use crate::{CubemapError, CubemapFace, Result};

/// A pixel source for the six faces of a cubemap.
///
/// Faces are square (`size` × `size`, with `size` at least 1).
/// Implementations only provide raw pixel access; directional sampling
/// is derived.
pub trait CubemapSampler {
    /// Edge length of each face in pixels.
    fn size(&self) -> u32;

    /// Reads one pixel from a face.
    fn pixel(&self, face: CubemapFace, x: u32, y: u32) -> Rgba<u8>;

    /// Samples the color seen looking along `dir` from the cube
    /// center.
    ///
    /// The face is chosen by the dominant axis, the view ray is
    /// projected onto that face's unit plane, and a per-face (u, v)
    /// mapping locates the pixel. Each face uses its own axis pairing
    /// and mirror signs; together they orient all six images
    /// consistently along the cube seams. A degenerate ray with no
    /// plane hit samples the face center.
    fn color_in_direction(&self, dir: Vector3<f32>) -> Rgba<u8> {
        let face = CubemapFace::for_direction(dir);
        let pos = face.intersection_point(dir).unwrap_or_else(Vector3::zeros);
        let (u, v) = match face {
            CubemapFace::PositiveX => (-0.5 * pos.z + 0.5, -0.5 * pos.y + 0.5),
            CubemapFace::NegativeX => (0.5 * pos.z + 0.5, -0.5 * pos.y + 0.5),
            CubemapFace::PositiveY => (0.5 * pos.x + 0.5, 0.5 * pos.z + 0.5),
            CubemapFace::NegativeY => (0.5 * pos.x + 0.5, -0.5 * pos.z + 0.5),
            CubemapFace::PositiveZ => (0.5 * pos.x + 0.5, -0.5 * pos.y + 0.5),
            CubemapFace::NegativeZ => (-0.5 * pos.x + 0.5, -0.5 * pos.y + 0.5),
        };
        let size = self.size();
        let x = ((u * size as f32) as u32).min(size - 1);
        let y = ((v * size as f32) as u32).min(size - 1);
        self.pixel(face, x, y)
    }
}

/// An in-memory cubemap: six square RGBA face images of equal size.
#[derive(Debug, Clone, PartialEq)]
pub struct Cubemap {
    size: u32,
    faces: [RgbaImage; 6],
}

impl Cubemap {
    /// Builds a cubemap from six face images in [`CubemapFace::ALL`]
    /// order.
    ///
    /// All faces must be square, non-empty, and the same size.
    pub fn from_faces(faces: [RgbaImage; 6]) -> Result<Self> {
        let size = faces[0].width();
        if size == 0 {
            return Err(CubemapError::EmptyFace);
        }
        for face in &faces {
            if face.width() != face.height() {
                return Err(CubemapError::NonSquareFace {
                    width: face.width(),
                    height: face.height(),
                });
            }
            if face.width() != size {
                return Err(CubemapError::FaceSizeMismatch {
                    expected: size,
                    got: face.width(),
                });
            }
        }
        Ok(Self { size, faces })
    }

    /// Builds a cubemap with one solid color per face, in
    /// [`CubemapFace::ALL`] order.
    pub fn solid(size: u32, colors: [Rgba<u8>; 6]) -> Result<Self> {
        if size == 0 {
            return Err(CubemapError::EmptyFace);
        }
        let faces = colors.map(|color| RgbaImage::from_pixel(size, size, color));
        Ok(Self { size, faces })
    }

    /// Returns the image for one face.
    pub fn face(&self, face: CubemapFace) -> &RgbaImage {
        &self.faces[face.index()]
    }
}

impl CubemapSampler for Cubemap {
    fn size(&self) -> u32 {
        self.size
    }

    fn pixel(&self, face: CubemapFace, x: u32, y: u32) -> Rgba<u8> {
        *self.faces[face.index()].get_pixel(x, y)
    }
}
