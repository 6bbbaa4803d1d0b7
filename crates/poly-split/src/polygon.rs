//! 2D polygons stored as ordered vertex loops.
//!
//! A [`Polygon`] supports winding-number containment, half-plane
//! splitting and cutting, miter offsetting, and grid subdivision. The
//! vertex loop is implicitly closed: the last vertex connects back to
//! the first.

use nalgebra::{Point2, Point3, Vector2};

use crate::{GeometryError, Line2D, Rect, Result, triangulate};

/// Maximum z-spread tolerated when lifting 3D vertex loops into 2D.
pub const COPLANAR_EPSILON: f32 = 1e-4;

/// Result of splitting a polygon by an infinite line.
///
/// `negative` holds the sub-polygons on the `side < 0` half-plane and
/// `positive` those on `side >= 0`. Either list may be empty when the
/// polygon lies entirely on one side.
#[derive(Debug, Clone, Default)]
pub struct LineSplit {
    pub negative: Vec<Polygon>,
    pub positive: Vec<Polygon>,
}

/// A 2D polygon: an ordered vertex loop with a cached bounding
/// rectangle.
///
/// The cached rectangle equals the tight bounding box of the current
/// path at every public-method boundary. Construction requires at
/// least 3 vertices; a path later reduced below that by [`Polygon::cut`]
/// or [`Polygon::set_path`] is treated as empty by every query.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    path: Vec<Point2<f32>>,
    z: f32,
    rect: Rect,
}

impl Polygon {
    /// Creates a polygon from an ordered vertex loop.
    ///
    /// Returns [`GeometryError::TooFewVertices`] for fewer than 3
    /// vertices.
    pub fn new(path: Vec<Point2<f32>>) -> Result<Self> {
        if path.len() < 3 {
            return Err(GeometryError::TooFewVertices(path.len()));
        }
        let rect = Rect::from_points(&path);
        Ok(Self { path, z: 0.0, rect })
    }

    /// Lifts a coplanar 3D vertex loop into a 2D polygon.
    ///
    /// The polygon's plane height is taken from the first vertex; every
    /// other vertex must agree within [`COPLANAR_EPSILON`] or
    /// [`GeometryError::NotCoplanar`] is returned.
    pub fn from_coplanar(points: &[Point3<f32>]) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewVertices(points.len()));
        }
        let z = points[0].z;
        for point in points {
            if (point.z - z).abs() > COPLANAR_EPSILON {
                return Err(GeometryError::NotCoplanar {
                    expected: z,
                    got: point.z,
                });
            }
        }
        let path: Vec<Point2<f32>> = points.iter().map(|p| Point2::new(p.x, p.y)).collect();
        let rect = Rect::from_points(&path);
        Ok(Self { path, z, rect })
    }

    /// Returns the vertex loop.
    #[inline]
    pub fn path(&self) -> &[Point2<f32>] {
        &self.path
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if the polygon has no usable area (fewer than 3
    /// vertices).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.len() < 3
    }

    /// Returns the plane height this polygon was lifted from (0 for
    /// polygons built directly in 2D).
    #[inline]
    pub fn z(&self) -> f32 {
        self.z
    }

    /// Returns the cached bounding rectangle.
    #[inline]
    pub fn bounding_rect(&self) -> Rect {
        self.rect
    }

    /// Replaces the vertex loop and recomputes the bounding rectangle.
    ///
    /// Any length is accepted, including empty; paths with fewer than 3
    /// vertices make every query treat the polygon as empty.
    pub fn set_path(&mut self, path: Vec<Point2<f32>>) {
        self.path = path;
        self.rect = Rect::from_points(&self.path);
    }

    /// Appends a vertex to the loop, growing the bounding rectangle if
    /// the new vertex falls outside it.
    pub fn push_point(&mut self, point: Point2<f32>) {
        self.path.push(point);
        self.rect.expand(point);
    }

    /// Computes the winding number of the loop around `point`.
    ///
    /// Signed angles between consecutive vertices as seen from `point`
    /// are accumulated and normalized by 2π, then rounded to the
    /// nearest integer (half away from zero). Simple polygons yield
    /// `±1` inside and `0` outside. Degenerate polygons yield `0`.
    pub fn winding_number(&self, point: Point2<f32>) -> i32 {
        let n = self.path.len();
        if n < 3 {
            return 0;
        }
        let mut total = 0.0f32;
        for i in 0..n {
            let a = self.path[(i + n - 1) % n] - point;
            let b = self.path[i] - point;
            total += (a.x * b.y - a.y * b.x).atan2(a.x * b.x + a.y * b.y);
        }
        (total / std::f32::consts::TAU).round() as i32
    }

    /// Returns `true` if `point` lies inside the polygon.
    ///
    /// Points outside the cached bounding rectangle are rejected
    /// without a winding computation.
    pub fn contains(&self, point: Point2<f32>) -> bool {
        self.rect.contains(point) && self.winding_number(point) != 0
    }

    /// Detects the loop's orientation from its accumulated turn angles:
    /// `1` for counter-clockwise, `-1` for clockwise, `0` for
    /// degenerate input.
    ///
    /// This is the self-winding of the loop, not the point containment
    /// winding of [`Polygon::winding_number`].
    pub fn winding_order(&self) -> i32 {
        let n = self.path.len();
        if n < 3 {
            return 0;
        }
        let mut total = 0.0f32;
        for i in 0..n {
            let before = self.path[i] - self.path[(i + n - 1) % n];
            let after = self.path[(i + 1) % n] - self.path[i];
            let cross = before.x * after.y - before.y * after.x;
            let dot = before.x * after.x + before.y * after.y;
            total += cross.atan2(dot);
        }
        (total / std::f32::consts::TAU).round() as i32
    }

    /// Signed area of the loop: positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f32 {
        signed_area(&self.path)
    }

    /// Absolute area of the loop.
    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    /// Produces a parallel vertex loop, offset by the miter rule.
    ///
    /// For each vertex the two adjacent edge lines are shifted by their
    /// unit perpendiculars and intersected; the vertex moves toward
    /// that intersection scaled by `offset`. `offset_path(0.0)` returns
    /// the original vertices, and positive offsets grow
    /// counter-clockwise loops. There is no miter limit: nearly
    /// parallel adjacent edges throw the intersection far out, so sharp
    /// concave corners overshoot.
    pub fn offset_path(&self, offset: f32) -> Vec<Point2<f32>> {
        let n = self.path.len();
        let mut offset_points = Vec::with_capacity(n);
        for i in 0..n {
            let prev = self.path[(i + n - 1) % n];
            let curr = self.path[i];
            let next = self.path[(i + 1) % n];
            let (normal_before, normal_after) =
                match (unit_perpendicular(curr - prev), unit_perpendicular(next - curr)) {
                    (Some(a), Some(b)) => (a, b),
                    (Some(a), None) => (a, a),
                    (None, Some(b)) => (b, b),
                    (None, None) => {
                        offset_points.push(curr);
                        continue;
                    }
                };
            let miter = Line2D::new(prev + normal_before, curr + normal_before)
                .ok()
                .zip(Line2D::new(curr + normal_after, next + normal_after).ok())
                .and_then(|(before, after)| before.intersect(&after))
                .unwrap_or(curr + normal_before);
            offset_points.push(curr + (miter - curr) * offset);
        }
        offset_points
    }

    /// Cuts away the half-plane facing `normal`, in place.
    ///
    /// The cutting line runs through `point` perpendicular to `normal`.
    /// Vertices with `dot(v - point, normal) <= 0` are kept, and a
    /// crossing vertex is inserted wherever the loop crosses the line
    /// with a strict sign change. No-op for paths with at most one
    /// vertex or a zero `normal`. The result may drop below 3 vertices,
    /// in which case the polygon becomes empty for all queries.
    pub fn cut(&mut self, point: Point2<f32>, normal: Vector2<f32>) {
        let n = self.path.len();
        if n <= 1 || normal == Vector2::zeros() {
            return;
        }
        let Ok(cut_line) = Line2D::new(point, point + perpendicular(normal)) else {
            return;
        };

        let mut kept: Vec<Point2<f32>> = Vec::with_capacity(n + 2);
        let mut last = self.path[n - 1];
        let mut last_dot = (last - point).dot(&normal);
        for i in 0..n {
            let vertex = self.path[i];
            let dot = (vertex - point).dot(&normal);
            if last_dot * dot < 0.0 {
                let crossing = Line2D::new(last, vertex)
                    .ok()
                    .and_then(|edge| edge.intersect(&cut_line))
                    .unwrap_or_else(|| nalgebra::center(&last, &vertex));
                kept.push(crossing);
            }
            if dot <= 0.0 {
                kept.push(vertex);
            }
            last = vertex;
            last_dot = dot;
        }

        self.path = kept;
        self.rect = Rect::from_points(&self.path);
    }

    /// Splits the polygon by an infinite line into closed sub-polygons
    /// per side.
    ///
    /// Vertices are classified with [`Line2D::side`]; a crossing opens
    /// on every edge whose endpoint classifications flip sign, and each
    /// crossing point becomes a synthetic vertex shared by the two
    /// adjacent sub-polygons. Crossings are paired into chords by their
    /// order along the line, which stitches the pieces of loops that
    /// cross the line more than twice back into single sub-polygons.
    ///
    /// A polygon entirely on one side comes back whole on that side.
    /// Vertices lying exactly on the line (side `0`) never open a
    /// crossing, so a line passing only through vertices returns the
    /// polygon whole as well. Degenerate polygons return two empty
    /// lists.
    pub fn split(&self, line: &Line2D) -> LineSplit {
        let n = self.path.len();
        let mut result = LineSplit::default();
        if n < 3 {
            return result;
        }

        let sides: Vec<i32> = self.path.iter().map(|p| line.side(*p)).collect();

        // A crossing lives on the edge into vertex i when the
        // classification flips between -1 and 1; run k starts at the
        // vertex just after crossing k.
        let mut crossings: Vec<Point2<f32>> = Vec::new();
        let mut run_starts: Vec<usize> = Vec::new();
        for i in 0..n {
            let prev = (i + n - 1) % n;
            if (sides[prev] - sides[i]).abs() == 2 {
                let a = self.path[prev];
                let b = self.path[i];
                let crossing = Line2D::new(a, b)
                    .ok()
                    .and_then(|edge| edge.intersect(line))
                    .unwrap_or_else(|| nalgebra::center(&a, &b));
                crossings.push(crossing);
                run_starts.push(i);
            }
        }

        if crossings.is_empty() {
            let side = sides.iter().copied().find(|&s| s != 0).unwrap_or(1);
            if side < 0 {
                result.negative.push(self.clone());
            } else {
                result.positive.push(self.clone());
            }
            return result;
        }

        // Pair crossings into chords by their order along the line:
        // between the (2k)-th and (2k+1)-th crossing the line runs
        // through the polygon's interior, so each such chord closes the
        // sub-polygons on both of its sides.
        let m = crossings.len();
        let mut order: Vec<usize> = (0..m).collect();
        order.sort_by(|&a, &b| {
            let ta = line_coordinate(line, crossings[a]);
            let tb = line_coordinate(line, crossings[b]);
            ta.partial_cmp(&tb).unwrap_or(std::cmp::Ordering::Equal)
        });
        let mut partner: Vec<usize> = (0..m).collect();
        for pair in order.chunks(2) {
            if let [a, b] = *pair {
                partner[a] = b;
                partner[b] = a;
            }
        }

        let mut visited = vec![false; m];
        for first in 0..m {
            if visited[first] {
                continue;
            }
            let side = self.run_side(&sides, &run_starts, first);
            let mut loop_path: Vec<Point2<f32>> = Vec::new();
            let mut run = first;
            loop {
                visited[run] = true;
                loop_path.push(crossings[run]);
                let start = run_starts[run];
                let end = run_starts[(run + 1) % m];
                let mut i = start;
                loop {
                    loop_path.push(self.path[i]);
                    i = (i + 1) % n;
                    if i == end {
                        break;
                    }
                }
                let exit = (run + 1) % m;
                loop_path.push(crossings[exit]);
                run = partner[exit];
                if run == first {
                    break;
                }
            }
            if let Ok(polygon) = Polygon::new(loop_path) {
                if side < 0 {
                    result.negative.push(polygon);
                } else {
                    result.positive.push(polygon);
                }
            }
        }
        result
    }

    /// Side of the run starting at crossing `run`: the first non-zero
    /// vertex classification, or positive for all-zero runs.
    fn run_side(&self, sides: &[i32], run_starts: &[usize], run: usize) -> i32 {
        let n = self.path.len();
        let m = run_starts.len();
        let start = run_starts[run];
        let end = run_starts[(run + 1) % m];
        let mut i = start;
        loop {
            if sides[i] != 0 {
                return sides[i];
            }
            i = (i + 1) % n;
            if i == end {
                return 1;
            }
        }
    }

    /// Cuts the polygon into grid cells of at most `cell` size.
    ///
    /// The polygon is split repeatedly along vertical grid lines
    /// spanning the bounding rectangle, then along horizontal ones,
    /// accumulating every resulting cell. Deterministic and fully
    /// materialized. Returns [`GeometryError::InvalidCellSize`] unless
    /// both cell dimensions are strictly positive.
    pub fn subdivide(&self, cell: Vector2<f32>) -> Result<Vec<Polygon>> {
        if !(cell.x > 0.0) || !(cell.y > 0.0) {
            return Err(GeometryError::InvalidCellSize {
                x: cell.x,
                y: cell.y,
            });
        }
        if self.path.len() < 3 {
            return Ok(Vec::new());
        }

        let rect = self.rect;
        let mut cells = vec![self.clone()];

        let mut x = rect.min().x + cell.x;
        while x < rect.max().x {
            let line = Line2D::new(Point2::new(x, 0.0), Point2::new(x, 1.0))?;
            cells = split_all(cells, &line);
            x += cell.x;
        }

        let mut y = rect.min().y + cell.y;
        while y < rect.max().y {
            let line = Line2D::new(Point2::new(0.0, y), Point2::new(1.0, y))?;
            cells = split_all(cells, &line);
            y += cell.y;
        }

        Ok(cells)
    }

    /// Triangulates the polygon by ear clipping.
    ///
    /// Returns index triples into [`Polygon::path`], wound
    /// counter-clockwise.
    pub fn triangulate(&self) -> Vec<[usize; 3]> {
        triangulate(&self.path)
    }
}

/// Shoelace signed area of a vertex loop: positive for
/// counter-clockwise winding.
pub(crate) fn signed_area(points: &[Point2<f32>]) -> f32 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    let mut p = n - 1;
    for q in 0..n {
        area += points[p].x * points[q].y - points[q].x * points[p].y;
        p = q;
    }
    area * 0.5
}

fn split_all(polygons: Vec<Polygon>, line: &Line2D) -> Vec<Polygon> {
    let mut out = Vec::with_capacity(polygons.len() + 1);
    for polygon in polygons {
        let split = polygon.split(line);
        out.extend(split.negative);
        out.extend(split.positive);
    }
    out
}

/// Coordinate of a point along a line's own direction, used to order
/// crossing points.
fn line_coordinate(line: &Line2D, point: Point2<f32>) -> f32 {
    if line.is_vertical() { point.y } else { point.x }
}

fn perpendicular(v: Vector2<f32>) -> Vector2<f32> {
    Vector2::new(v.y, -v.x)
}

fn unit_perpendicular(v: Vector2<f32>) -> Option<Vector2<f32>> {
    let norm = v.norm();
    if norm > f32::EPSILON {
        Some(perpendicular(v) / norm)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn p(x: f32, y: f32) -> Point2<f32> {
        Point2::new(x, y)
    }

    fn unit_square() -> Polygon {
        Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]).unwrap()
    }

    /// A U shape opening upward: crosses a horizontal line through its
    /// prongs four times.
    fn u_shape() -> Polygon {
        Polygon::new(vec![
            p(0.0, 0.0),
            p(3.0, 0.0),
            p(3.0, 2.0),
            p(2.0, 2.0),
            p(2.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 2.0),
            p(0.0, 2.0),
        ])
        .unwrap()
    }

    fn regular_polygon(sides: usize, radius: f32) -> Polygon {
        let path = (0..sides)
            .map(|i| {
                let angle = i as f32 / sides as f32 * std::f32::consts::TAU;
                p(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        Polygon::new(path).unwrap()
    }

    fn total_area(split: &LineSplit) -> f32 {
        split
            .negative
            .iter()
            .chain(split.positive.iter())
            .map(Polygon::area)
            .sum()
    }

    #[test]
    fn too_few_vertices_are_rejected() {
        assert_eq!(
            Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0)]),
            Err(GeometryError::TooFewVertices(2))
        );
    }

    #[test]
    fn from_coplanar_lifts_and_validates() {
        let polygon = Polygon::from_coplanar(&[
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(1.0, 0.0, 2.0),
            Point3::new(0.0, 1.0, 2.0),
        ])
        .unwrap();
        assert_eq!(polygon.z(), 2.0);
        assert_eq!(polygon.path()[1], p(1.0, 0.0));

        let err = Polygon::from_coplanar(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.5),
        ]);
        assert!(matches!(err, Err(GeometryError::NotCoplanar { .. })));
    }

    #[test]
    fn set_path_accepts_empty_input() {
        let mut polygon = unit_square();
        polygon.set_path(Vec::new());
        assert!(polygon.is_empty());
        assert!(polygon.bounding_rect().is_empty());
        assert!(!polygon.contains(p(0.5, 0.5)));
    }

    #[test]
    fn push_point_grows_the_rect() {
        let mut polygon = unit_square();
        polygon.push_point(p(5.0, -2.0));
        let rect = polygon.bounding_rect();
        assert_eq!(rect.max().x, 5.0);
        assert_eq!(rect.min().y, -2.0);
    }

    #[test]
    fn contains_inside_and_outside() {
        let square = unit_square();
        assert!(square.contains(p(0.5, 0.5)));
        assert!(square.contains(p(0.01, 0.99)));
        assert!(!square.contains(p(1.5, 0.5)));
        assert!(!square.contains(p(-0.5, 0.5)));
    }

    #[test]
    fn contains_rejects_outside_the_bounding_rect() {
        let square = unit_square();
        assert!(!square.contains(p(100.0, 100.0)));
        assert!(!square.contains(p(0.5, -0.0001)));
    }

    #[test]
    fn contains_respects_concavity() {
        let u = u_shape();
        assert!(u.contains(p(0.5, 0.5)));
        assert!(u.contains(p(0.5, 1.5)));
        // the notch between the prongs is outside
        assert!(!u.contains(p(1.5, 1.5)));
    }

    #[test]
    fn winding_number_signs() {
        let ccw = unit_square();
        assert_eq!(ccw.winding_number(p(0.5, 0.5)), 1);
        assert_eq!(ccw.winding_number(p(2.0, 2.0)), 0);

        let cw = Polygon::new(vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)]).unwrap();
        assert_eq!(cw.winding_number(p(0.5, 0.5)), -1);
    }

    #[test]
    fn winding_order_detects_orientation() {
        assert_eq!(unit_square().winding_order(), 1);
        let cw = Polygon::new(vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)]).unwrap();
        assert_eq!(cw.winding_order(), -1);
    }

    #[test]
    fn areas() {
        assert_relative_eq!(unit_square().area(), 1.0);
        assert_relative_eq!(unit_square().signed_area(), 1.0);
        assert_relative_eq!(u_shape().area(), 5.0);
    }

    #[test]
    fn split_unit_square_down_the_middle() {
        let square = unit_square();
        let line = Line2D::new(p(0.5, 0.0), p(0.5, 1.0)).unwrap();
        let split = square.split(&line);

        assert_eq!(split.negative.len(), 1);
        assert_eq!(split.positive.len(), 1);
        let left = &split.negative[0];
        let right = &split.positive[0];
        assert_eq!(left.len(), 4);
        assert_eq!(right.len(), 4);
        assert_relative_eq!(left.area(), 0.5);
        assert_relative_eq!(right.area(), 0.5);
    }

    #[test]
    fn split_partitions_the_original_vertices() {
        let square = unit_square();
        let line = Line2D::new(p(0.5, 0.0), p(0.5, 1.0)).unwrap();
        let split = square.split(&line);

        for vertex in square.path() {
            let appearances: usize = split
                .negative
                .iter()
                .chain(split.positive.iter())
                .map(|poly| poly.path().iter().filter(|v| *v == vertex).count())
                .sum();
            assert_eq!(appearances, 1, "vertex {vertex} should appear exactly once");
        }
    }

    #[test]
    fn split_misses_the_polygon() {
        let square = unit_square();
        let line = Line2D::new(p(5.0, 0.0), p(5.0, 1.0)).unwrap();
        let split = square.split(&line);
        assert_eq!(split.negative.len(), 1);
        assert!(split.positive.is_empty());
        assert_relative_eq!(split.negative[0].area(), 1.0);
    }

    #[test]
    fn split_stitches_multiply_crossed_loops() {
        // a horizontal line through the prongs crosses four times: the
        // two prong tops stay separate, the base comes back as one
        let u = u_shape();
        let line = Line2D::new(p(0.0, 1.5), p(1.0, 1.5)).unwrap();
        let split = u.split(&line);

        let (base, prongs) = if split.negative.len() == 1 {
            (&split.negative, &split.positive)
        } else {
            (&split.positive, &split.negative)
        };
        assert_eq!(base.len(), 1);
        assert_eq!(prongs.len(), 2);
        assert_eq!(base[0].len(), 8);
        assert_relative_eq!(base[0].area(), 4.0, epsilon = 1e-5);
        assert_relative_eq!(prongs[0].area() + prongs[1].area(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(total_area(&split), u.area(), epsilon = 1e-5);
    }

    #[test]
    fn split_through_vertices_only_returns_the_polygon_whole() {
        // the diagonal passes exactly through two corners; on-line
        // vertices never open a crossing
        let square = unit_square();
        let line = Line2D::new(p(0.0, 0.0), p(1.0, 1.0)).unwrap();
        let split = square.split(&line);
        assert_eq!(split.negative.len() + split.positive.len(), 1);
        assert_relative_eq!(total_area(&split), 1.0);
    }

    #[test]
    fn split_degenerate_polygon_is_empty() {
        let mut polygon = unit_square();
        polygon.set_path(vec![p(0.0, 0.0), p(1.0, 0.0)]);
        let line = Line2D::new(p(0.5, 0.0), p(0.5, 1.0)).unwrap();
        let split = polygon.split(&line);
        assert!(split.negative.is_empty());
        assert!(split.positive.is_empty());
    }

    #[test]
    fn cut_keeps_the_back_half() {
        let mut square = unit_square();
        square.cut(p(0.5, 0.5), Vector2::new(1.0, 0.0));
        assert_eq!(
            square.path(),
            &[p(0.0, 0.0), p(0.5, 0.0), p(0.5, 1.0), p(0.0, 1.0)]
        );
        assert_relative_eq!(square.area(), 0.5);
        assert_eq!(square.bounding_rect().max().x, 0.5);
    }

    #[test]
    fn cut_discarding_everything_empties_the_polygon() {
        let mut square = unit_square();
        square.cut(p(-1.0, 0.0), Vector2::new(1.0, 0.0));
        assert!(square.is_empty());
        assert!(!square.contains(p(0.5, 0.5)));
    }

    #[test]
    fn cut_is_a_noop_on_tiny_paths_and_zero_normals() {
        let mut polygon = unit_square();
        polygon.set_path(vec![p(0.0, 0.0)]);
        polygon.cut(p(0.5, 0.5), Vector2::new(1.0, 0.0));
        assert_eq!(polygon.len(), 1);

        let mut square = unit_square();
        square.cut(p(0.5, 0.5), Vector2::zeros());
        assert_eq!(square.len(), 4);
    }

    #[test]
    fn offset_by_zero_is_identity() {
        let square = unit_square();
        assert_eq!(square.offset_path(0.0), square.path());
    }

    #[test]
    fn offset_grows_ccw_loops_outward() {
        let square = unit_square();
        let grown = Polygon::new(square.offset_path(0.5)).unwrap();
        assert_relative_eq!(grown.area(), 4.0, epsilon = 1e-4);
        let shrunk = Polygon::new(square.offset_path(-0.25)).unwrap();
        assert_relative_eq!(shrunk.area(), 0.25, epsilon = 1e-4);
    }

    #[test]
    fn subdivide_square_into_quadrants() {
        let square = unit_square();
        let cells = square.subdivide(Vector2::new(0.5, 0.5)).unwrap();
        assert_eq!(cells.len(), 4);
        let total: f32 = cells.iter().map(Polygon::area).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-5);
        for cell in &cells {
            assert_relative_eq!(cell.area(), 0.25, epsilon = 1e-5);
        }
    }

    #[test]
    fn subdivide_covers_concave_shapes() {
        let u = u_shape();
        let cells = u.subdivide(Vector2::new(1.0, 1.0)).unwrap();
        let total: f32 = cells.iter().map(Polygon::area).sum();
        assert_relative_eq!(total, u.area(), epsilon = 1e-4);
    }

    #[test]
    fn subdivide_rejects_bad_cell_sizes() {
        let square = unit_square();
        assert!(matches!(
            square.subdivide(Vector2::new(0.0, 1.0)),
            Err(GeometryError::InvalidCellSize { .. })
        ));
        assert!(matches!(
            square.subdivide(Vector2::new(1.0, -1.0)),
            Err(GeometryError::InvalidCellSize { .. })
        ));
    }

    proptest! {
        #[test]
        fn split_conserves_area_of_regular_polygons(
            sides in 3usize..12,
            radius in 0.5f32..10.0,
            through in -0.4f32..0.4,
            angle in 0.01f32..3.1,
        ) {
            let polygon = regular_polygon(sides, radius);
            let origin = p(through * radius, through * radius / 2.0);
            let direction = Vector2::new(angle.cos(), angle.sin());
            let line = Line2D::new(origin, origin + direction).unwrap();

            let split = polygon.split(&line);
            let total = total_area(&split);
            prop_assert!(
                (total - polygon.area()).abs() < 1e-3 * polygon.area().max(1.0),
                "area {} != {}",
                total,
                polygon.area(),
            );
        }

        #[test]
        fn contains_is_false_outside_the_bounding_rect(
            sides in 3usize..12,
            radius in 0.5f32..10.0,
            x in -100.0f32..100.0,
            y in -100.0f32..100.0,
        ) {
            let polygon = regular_polygon(sides, radius);
            let point = p(x, y);
            if !polygon.bounding_rect().contains(point) {
                prop_assert!(!polygon.contains(point));
            }
        }

        #[test]
        fn regular_polygons_wind_counter_clockwise(sides in 3usize..16, radius in 0.5f32..10.0) {
            let polygon = regular_polygon(sides, radius);
            prop_assert_eq!(polygon.winding_order(), 1);
            prop_assert_eq!(polygon.winding_number(p(0.0, 0.0)), 1);
        }
    }
}
