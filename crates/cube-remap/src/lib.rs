//! Cubemap face addressing, directional color sampling, and remapping
//! of six-face cubemaps into single 2D image layouts (crosses, strips,
//! equirectangular panoramas, and fisheye disks).

mod error;
mod face;
mod layout;
mod plane;
mod sampler;

pub use error::{CubemapError, Result};
pub use face::CubemapFace;
pub use layout::{
    CubeMappingType, cylindrical, faces_1x6, faces_3x4, faces_4x3, faces_6x1, remap, spherical,
};
pub use plane::Plane3;
pub use sampler::{Cubemap, CubemapSampler};
