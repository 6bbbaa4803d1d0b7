//! The six cubemap faces and direction-to-face addressing.

use nalgebra::Vector3;

use crate::Plane3;

/// One of the six faces of a cubemap, named by the axis its outward
/// normal points along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubemapFace {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
    PositiveZ,
    NegativeZ,
}

impl CubemapFace {
    /// All six faces in canonical order.
    pub const ALL: [CubemapFace; 6] = [
        CubemapFace::PositiveX,
        CubemapFace::NegativeX,
        CubemapFace::PositiveY,
        CubemapFace::NegativeY,
        CubemapFace::PositiveZ,
        CubemapFace::NegativeZ,
    ];

    /// Index of this face in canonical order, used for face storage.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            CubemapFace::PositiveX => 0,
            CubemapFace::NegativeX => 1,
            CubemapFace::PositiveY => 2,
            CubemapFace::NegativeY => 3,
            CubemapFace::PositiveZ => 4,
            CubemapFace::NegativeZ => 5,
        }
    }

    /// Outward unit normal of the face.
    pub fn normal(self) -> Vector3<f32> {
        match self {
            CubemapFace::PositiveX => Vector3::x(),
            CubemapFace::NegativeX => -Vector3::x(),
            CubemapFace::PositiveY => Vector3::y(),
            CubemapFace::NegativeY => -Vector3::y(),
            CubemapFace::PositiveZ => Vector3::z(),
            CubemapFace::NegativeZ => -Vector3::z(),
        }
    }

    /// The face on the opposite side of the cube.
    pub fn opposite(self) -> CubemapFace {
        match self {
            CubemapFace::PositiveX => CubemapFace::NegativeX,
            CubemapFace::NegativeX => CubemapFace::PositiveX,
            CubemapFace::PositiveY => CubemapFace::NegativeY,
            CubemapFace::NegativeY => CubemapFace::PositiveY,
            CubemapFace::PositiveZ => CubemapFace::NegativeZ,
            CubemapFace::NegativeZ => CubemapFace::PositiveZ,
        }
    }

    /// Selects the face a direction vector points into.
    ///
    /// The winning axis is the one with the strictly largest absolute
    /// component, tested x, then y, then z, so exact ties fall to the
    /// later axis. The zero vector falls all the way through to
    /// `NegativeZ`.
    pub fn for_direction(dir: Vector3<f32>) -> CubemapFace {
        if dir.x.abs() > dir.y.abs() && dir.x.abs() > dir.z.abs() {
            if dir.x > 0.0 {
                CubemapFace::PositiveX
            } else {
                CubemapFace::NegativeX
            }
        } else if dir.y.abs() > dir.z.abs() {
            if dir.y > 0.0 {
                CubemapFace::PositiveY
            } else {
                CubemapFace::NegativeY
            }
        } else if dir.z > 0.0 {
            CubemapFace::PositiveZ
        } else {
            CubemapFace::NegativeZ
        }
    }

    /// The unit plane this face's image sits on.
    ///
    /// The plane faces back toward the cube center: the `PositiveX`
    /// face plane has normal `(-1, 0, 0)` and sits at `x = 1`.
    pub fn plane(self) -> Plane3 {
        Plane3::new(-self.normal(), -1.0)
    }

    /// Projects a view ray from the cube center onto this face's
    /// plane.
    ///
    /// Returns `None` when `dir` is parallel to the face or points
    /// away from it.
    pub fn intersection_point(self, dir: Vector3<f32>) -> Option<Vector3<f32>> {
        self.plane().intersect_ray(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn axis_vectors_map_to_their_faces() {
        assert_eq!(
            CubemapFace::for_direction(Vector3::new(1.0, 0.0, 0.0)),
            CubemapFace::PositiveX
        );
        assert_eq!(
            CubemapFace::for_direction(Vector3::new(-1.0, 0.0, 0.0)),
            CubemapFace::NegativeX
        );
        assert_eq!(
            CubemapFace::for_direction(Vector3::new(0.0, 1.0, 0.0)),
            CubemapFace::PositiveY
        );
        assert_eq!(
            CubemapFace::for_direction(Vector3::new(0.0, -1.0, 0.0)),
            CubemapFace::NegativeY
        );
        assert_eq!(
            CubemapFace::for_direction(Vector3::new(0.0, 0.0, 1.0)),
            CubemapFace::PositiveZ
        );
        assert_eq!(
            CubemapFace::for_direction(Vector3::new(0.0, 0.0, -1.0)),
            CubemapFace::NegativeZ
        );
    }

    #[test]
    fn dominant_axis_wins_for_slanted_directions() {
        assert_eq!(
            CubemapFace::for_direction(Vector3::new(2.0, 1.0, -1.5)),
            CubemapFace::PositiveX
        );
        assert_eq!(
            CubemapFace::for_direction(Vector3::new(0.5, -3.0, 1.0)),
            CubemapFace::NegativeY
        );
    }

    #[test]
    fn exact_ties_fall_to_the_later_axis() {
        // |x| == |y|: x's strict comparison fails, y wins
        assert_eq!(
            CubemapFace::for_direction(Vector3::new(1.0, 1.0, 0.0)),
            CubemapFace::PositiveY
        );
        // |y| == |z|: y's strict comparison fails, z wins
        assert_eq!(
            CubemapFace::for_direction(Vector3::new(0.0, 1.0, -1.0)),
            CubemapFace::NegativeZ
        );
        // the zero vector falls through every branch
        assert_eq!(
            CubemapFace::for_direction(Vector3::zeros()),
            CubemapFace::NegativeZ
        );
    }

    #[test]
    fn opposite_is_an_involution() {
        for face in CubemapFace::ALL {
            assert_eq!(face.opposite().opposite(), face);
        }
    }

    #[test]
    fn planes_sit_one_unit_out() {
        for face in CubemapFace::ALL {
            let plane = face.plane();
            assert_relative_eq!(plane.normal().dot(&face.normal()), -1.0);
            assert_relative_eq!(plane.offset(), -1.0);
        }
    }

    #[test]
    fn intersection_point_lands_on_the_face() {
        let hit = CubemapFace::PositiveX
            .intersection_point(Vector3::new(2.0, 1.0, -0.5))
            .unwrap();
        assert_relative_eq!(hit.x, 1.0);
        assert_relative_eq!(hit.y, 0.5);
        assert_relative_eq!(hit.z, -0.25);

        assert!(
            CubemapFace::PositiveX
                .intersection_point(Vector3::new(-1.0, 0.0, 0.0))
                .is_none()
        );
    }
}
