//! Infinite 2D lines in slope/intercept form.

use std::fmt;

use nalgebra::Point2;

use crate::{GeometryError, Result};

/// An infinite line in the 2D plane.
///
/// Stored in slope/intercept form with a vertical flag: vertical lines
/// have no finite slope and `point.x` is authoritative for them. The
/// reference `point` is always the first of the two construction points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2D {
    point: Point2<f32>,
    slope: f32,
    intercept: f32,
    vertical: bool,
}

impl Line2D {
    /// Creates the line through two distinct points.
    ///
    /// Returns [`GeometryError::IdenticalPoints`] when `p1 == p2`.
    pub fn new(p1: Point2<f32>, p2: Point2<f32>) -> Result<Self> {
        if p1 == p2 {
            return Err(GeometryError::IdenticalPoints);
        }
        let vertical = p1.x == p2.x;
        let (slope, intercept) = if vertical {
            (f32::INFINITY, 0.0)
        } else {
            let slope = (p2.y - p1.y) / (p2.x - p1.x);
            (slope, p1.y - slope * p1.x)
        };
        Ok(Self {
            point: p1,
            slope,
            intercept,
            vertical,
        })
    }

    /// Returns `true` if the line is vertical.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.vertical
    }

    /// Returns the point on the line with the given x coordinate.
    ///
    /// Vertical lines have no such point in general; they answer
    /// `(x, point.y)` using the stored reference point instead.
    pub fn point_with_x(&self, x: f32) -> Point2<f32> {
        if self.vertical {
            Point2::new(x, self.point.y)
        } else {
            Point2::new(x, self.slope * x + self.intercept)
        }
    }

    /// Returns the point on the line with the given y coordinate.
    ///
    /// Vertical lines answer `(point.x, y)`.
    pub fn point_with_y(&self, y: f32) -> Point2<f32> {
        if self.vertical {
            Point2::new(self.point.x, y)
        } else {
            Point2::new((y - self.intercept) / self.slope, y)
        }
    }

    /// Perpendicular Euclidean distance from `p` to the line.
    pub fn distance(&self, p: Point2<f32>) -> f32 {
        if self.vertical {
            (p.x - self.point.x).abs()
        } else {
            (self.slope * p.x - p.y + self.intercept).abs()
                / (self.slope * self.slope + 1.0).sqrt()
        }
    }

    /// Classifies which half-plane `p` lies in: `-1`, `0`, or `1`.
    ///
    /// Returns `0` only when reconstructing `p` through
    /// [`Line2D::point_with_x`] and [`Line2D::point_with_y`] agrees
    /// under exact floating-point equality (on vertical lines that is
    /// just the reference point itself); any rounding yields `±1`
    /// instead. Callers that need a robust on-line test should compare
    /// [`Line2D::distance`] against a tolerance.
    pub fn side(&self, p: Point2<f32>) -> i32 {
        if self.point_with_x(p.x) == self.point_with_y(p.y) {
            return 0;
        }
        if self.vertical {
            sign(p.x - self.point.x)
        } else {
            sign(p.x - self.point_with_y(p.y).x)
        }
    }

    /// Computes the intersection point of two lines.
    ///
    /// Returns `None` for parallel lines: equal slopes, or both lines
    /// vertical.
    pub fn intersect(&self, other: &Line2D) -> Option<Point2<f32>> {
        if self.slope == other.slope || (self.vertical && other.vertical) {
            return None;
        }
        if self.vertical {
            return Some(other.point_with_x(self.point.x));
        }
        if other.vertical {
            return Some(self.point_with_x(other.point.x));
        }
        let x = (other.intercept - self.intercept) / (self.slope - other.slope);
        Some(Point2::new(x, self.slope * x + self.intercept))
    }
}

/// Sign with zero mapping to `1`.
fn sign(value: f32) -> i32 {
    if value >= 0.0 { 1 } else { -1 }
}

impl fmt::Display for Line2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vertical {
            write!(f, "vertical, x = {}", self.point.x)
        } else {
            write!(f, "y = {}x + {}", self.slope, self.intercept)
        }
    }
}
