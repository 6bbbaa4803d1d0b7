//! Plane representation for cube-face ray projection.

use nalgebra::Vector3;

/// A plane in 3D space, represented as `normal · p = offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane3 {
    normal: Vector3<f32>,
    offset: f32,
}

impl Plane3 {
    /// Creates a new plane from a normal vector and offset.
    /// The normal will be normalized automatically.
    ///
    /// # Panics
    /// Panics if the normal vector has zero length.
    pub fn new(normal: Vector3<f32>, offset: f32) -> Self {
        let norm = normal.norm();
        assert!(norm > f32::EPSILON, "Plane normal cannot be zero");
        Self {
            normal: normal / norm,
            offset: offset / norm,
        }
    }

    /// Returns the unit normal vector of the plane.
    #[inline]
    pub fn normal(&self) -> Vector3<f32> {
        self.normal
    }

    /// Returns the signed distance from the origin to the plane along
    /// the normal.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Intersects the ray from the origin along `dir` with the plane.
    ///
    /// Returns `None` when the ray is parallel to the plane or the
    /// plane lies behind the ray.
    pub fn intersect_ray(&self, dir: Vector3<f32>) -> Option<Vector3<f32>> {
        let denom = self.normal.dot(&dir);
        if denom.abs() < f32::EPSILON {
            return None;
        }
        let t = self.offset / denom;
        if t < 0.0 {
            return None;
        }
        Some(dir * t)
    }
}
