//! Remapping a cubemap's six faces into single 2D image layouts.

use image::{RgbaImage, imageops};
use nalgebra::{Unit, Vector3};

use crate::{CubemapError, CubemapFace, CubemapSampler, Result};

/// The 2D layouts a cubemap can be flattened into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeMappingType {
    /// Fisheye disk on a square canvas (1:1).
    Spherical,
    /// Equirectangular panorama (2:1).
    Cylindrical,
    /// Horizontal cross (4:3).
    Faces4x3,
    /// Vertical cross (3:4).
    Faces3x4,
    /// Horizontal strip (6:1).
    Faces6x1,
    /// Vertical strip (1:6).
    Faces1x6,
}

impl CubeMappingType {
    /// All layouts, in detection order.
    pub const ALL: [CubeMappingType; 6] = [
        CubeMappingType::Spherical,
        CubeMappingType::Cylindrical,
        CubeMappingType::Faces4x3,
        CubeMappingType::Faces3x4,
        CubeMappingType::Faces6x1,
        CubeMappingType::Faces1x6,
    ];

    /// Detects the layout an image's dimensions correspond to.
    ///
    /// Aspect ratios are tested in order: 1 (spherical), 2
    /// (cylindrical), 4:3, 3:4, 6:1, 1:6. Anything else is
    /// [`CubemapError::UnrecognizedLayout`].
    pub fn for_dimensions(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CubemapError::UnrecognizedLayout { width, height });
        }
        if width == height {
            Ok(CubeMappingType::Spherical)
        } else if width == 2 * height {
            Ok(CubeMappingType::Cylindrical)
        } else if 3 * width == 4 * height {
            Ok(CubeMappingType::Faces4x3)
        } else if 4 * width == 3 * height {
            Ok(CubeMappingType::Faces3x4)
        } else if width == 6 * height {
            Ok(CubeMappingType::Faces6x1)
        } else if height == 6 * width {
            Ok(CubeMappingType::Faces1x6)
        } else {
            Err(CubemapError::UnrecognizedLayout { width, height })
        }
    }
}

/// Renders a cubemap into the given 2D layout.
pub fn remap<S: CubemapSampler>(cubemap: &S, mapping: CubeMappingType) -> RgbaImage {
    match mapping {
        CubeMappingType::Spherical => spherical(cubemap),
        CubeMappingType::Cylindrical => cylindrical(cubemap),
        CubeMappingType::Faces4x3 => faces_4x3(cubemap),
        CubeMappingType::Faces3x4 => faces_3x4(cubemap),
        CubeMappingType::Faces6x1 => faces_6x1(cubemap),
        CubeMappingType::Faces1x6 => faces_1x6(cubemap),
    }
}

/// Horizontal-cross layout, 4s × 3s.
///
/// Tile positions in face-size units, before the final whole-canvas
/// 180° rotation: `+Y` at (2, 0); `-Z`, `-X`, `+Z`, `+X` across the
/// middle row; `-Y` at (2, 2).
pub fn faces_4x3<S: CubemapSampler>(cubemap: &S) -> RgbaImage {
    let s = cubemap.size();
    let mut canvas = RgbaImage::new(s * 4, s * 3);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::PositiveY), s * 2, 0);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::NegativeX), s, s);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::PositiveZ), s * 2, s);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::PositiveX), s * 3, s);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::NegativeZ), 0, s);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::NegativeY), s * 2, s * 2);
    imageops::rotate180(&canvas)
}

/// Vertical-cross layout, 3s × 4s. The `-Z` tile is mirrored.
pub fn faces_3x4<S: CubemapSampler>(cubemap: &S) -> RgbaImage {
    let s = cubemap.size();
    let mut canvas = RgbaImage::new(s * 3, s * 4);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::PositiveY), s, 0);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::NegativeX), 0, s);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::PositiveZ), s, s);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::PositiveX), s * 2, s);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::NegativeY), s, s * 2);
    blit(&mut canvas, &mirrored(&face_image(cubemap, CubemapFace::NegativeZ)), s, s * 3);
    imageops::rotate180(&canvas)
}

/// Horizontal-strip layout, 6s × s. The `-Y` and `+Y` tiles are
/// mirrored.
pub fn faces_6x1<S: CubemapSampler>(cubemap: &S) -> RgbaImage {
    let s = cubemap.size();
    let mut canvas = RgbaImage::new(s * 6, s);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::PositiveZ), 0, 0);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::NegativeZ), s, 0);
    blit(&mut canvas, &mirrored(&face_image(cubemap, CubemapFace::NegativeY)), s * 2, 0);
    blit(&mut canvas, &mirrored(&face_image(cubemap, CubemapFace::PositiveY)), s * 3, 0);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::NegativeX), s * 4, 0);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::PositiveX), s * 5, 0);
    imageops::rotate180(&canvas)
}

/// Vertical-strip layout, s × 6s. The `+Y` and `-Y` tiles are
/// mirrored.
pub fn faces_1x6<S: CubemapSampler>(cubemap: &S) -> RgbaImage {
    let s = cubemap.size();
    let mut canvas = RgbaImage::new(s, s * 6);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::PositiveX), 0, 0);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::NegativeX), 0, s);
    blit(&mut canvas, &mirrored(&face_image(cubemap, CubemapFace::PositiveY)), 0, s * 2);
    blit(&mut canvas, &mirrored(&face_image(cubemap, CubemapFace::NegativeY)), 0, s * 3);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::NegativeZ), 0, s * 4);
    blit(&mut canvas, &face_image(cubemap, CubemapFace::PositiveZ), 0, s * 5);
    imageops::rotate180(&canvas)
}

/// Equirectangular panorama, 4s × 2s: columns sweep the azimuth, rows
/// sweep elevation from straight down to straight up.
pub fn cylindrical<S: CubemapSampler>(cubemap: &S) -> RgbaImage {
    let width = cubemap.size() * 4;
    let height = cubemap.size() * 2;
    let mut canvas = RgbaImage::new(width, height);
    for j in 0..height {
        for i in 0..width {
            let azimuth = (i as f32 / width as f32 - 0.25) * std::f32::consts::TAU;
            let base = Vector3::new(-azimuth.cos(), 0.0, azimuth.sin());
            let elevation = j as f32 / height as f32;
            let dir = if elevation > 0.5 {
                slerp(base, Vector3::y(), (elevation - 0.5) * 2.0)
            } else {
                slerp(base, -Vector3::y(), 1.0 - elevation * 2.0)
            };
            // j sweeps bottom-up, image rows count top-down
            canvas.put_pixel(i, height - 1 - j, cubemap.color_in_direction(dir));
        }
    }
    canvas
}

/// Fisheye layout, 2s × 2s: the forward hemisphere fills a centered
/// disk, and everything outside the disk takes the straight-backward
/// color.
pub fn spherical<S: CubemapSampler>(cubemap: &S) -> RgbaImage {
    let width = cubemap.size() * 2;
    let height = cubemap.size() * 2;
    let mut canvas = RgbaImage::new(width, height);
    let back = cubemap.color_in_direction(-Vector3::z());
    for j in 0..height {
        for i in 0..width {
            let x = i as f32 / width as f32;
            let y = j as f32 / height as f32;
            let dist = ((x - 0.5).powi(2) + (y - 0.5).powi(2)).sqrt();
            let color = if dist <= 0.5 {
                let r = 2.0
                    * (-4.0 * x * x + 4.0 * x - 1.0 - 4.0 * y * y + 4.0 * y)
                        .max(0.0)
                        .sqrt();
                let dir = Vector3::new(
                    r * (2.0 * x - 1.0),
                    r * (2.0 * y - 1.0),
                    -8.0 * x * x + 8.0 * x - 8.0 * y * y + 8.0 * y - 3.0,
                );
                cubemap.color_in_direction(dir)
            } else {
                back
            };
            canvas.put_pixel(i, height - 1 - j, color);
        }
    }
    canvas
}

/// Copies one face out of a sampler into its own image.
fn face_image<S: CubemapSampler>(cubemap: &S, face: CubemapFace) -> RgbaImage {
    let size = cubemap.size();
    RgbaImage::from_fn(size, size, |x, y| cubemap.pixel(face, x, y))
}

/// 180° rotation of a face tile. Flattened layouts mirror specific
/// faces so adjacent tiles meet along matching seams.
fn mirrored(tile: &RgbaImage) -> RgbaImage {
    imageops::rotate180(tile)
}

fn blit(canvas: &mut RgbaImage, tile: &RgbaImage, x: u32, y: u32) {
    imageops::replace(canvas, tile, i64::from(x), i64::from(y));
}

fn slerp(from: Vector3<f32>, to: Vector3<f32>, t: f32) -> Vector3<f32> {
    Unit::new_normalize(from)
        .slerp(&Unit::new_normalize(to), t)
        .into_inner()
}
