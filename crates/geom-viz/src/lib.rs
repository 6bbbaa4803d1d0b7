//! Shared drawing helpers for the geometry demos.

use std::hash::{Hash, Hasher};

use macroquad::prelude::*;
use nalgebra::Point2;
use poly_split::Polygon;

/// Generates a deterministic color from a polygon's vertices using hashing.
/// This keeps split pieces at stable colors across frames.
pub fn polygon_color(polygon: &Polygon) -> Color {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    for vertex in polygon.path() {
        vertex.x.to_bits().hash(&mut hasher);
        vertex.y.to_bits().hash(&mut hasher);
    }
    let hash = hasher.finish();

    // Extract RGB from hash bytes
    let r = ((hash >> 16) & 0xFF) as u8;
    let g = ((hash >> 8) & 0xFF) as u8;
    let b = (hash & 0xFF) as u8;

    // Ensure colors aren't too dark by adding a minimum brightness
    let r = r.max(40);
    let g = g.max(40);
    let b = b.max(40);

    Color::from_rgba(r, g, b, 255)
}

/// Draws a filled polygon using its ear-clipping triangulation.
///
/// Fan triangulation is not enough here: split and cut output is
/// routinely non-convex.
pub fn draw_polygon(polygon: &Polygon, color: Color) {
    let path = polygon.path();
    for [a, b, c] in polygon.triangulate() {
        draw_triangle(
            vec2(path[a].x, path[a].y),
            vec2(path[b].x, path[b].y),
            vec2(path[c].x, path[c].y),
            color,
        );
    }
}

/// Draws a polygon's outline.
pub fn draw_polygon_outline(polygon: &Polygon, thickness: f32, color: Color) {
    let path = polygon.path();
    let n = path.len();
    for i in 0..n {
        let a = path[i];
        let b = path[(i + 1) % n];
        draw_line(a.x, a.y, b.x, b.y, thickness, color);
    }
}

/// Builds a star-shaped test polygon centered on `center`.
///
/// Stars are deliberately non-convex: any line through the middle
/// crosses the outline many times.
pub fn star_polygon(center: Vec2, spikes: usize, inner: f32, outer: f32) -> Polygon {
    let path = (0..spikes * 2)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::PI / spikes as f32;
            let radius = if i % 2 == 0 { outer } else { inner };
            Point2::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect();
    Polygon::new(path).expect("star polygon has at least 6 vertices")
}
