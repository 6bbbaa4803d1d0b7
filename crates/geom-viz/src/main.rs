//! Interactive polygon splitting demo.
//!
//! Move the mouse to sweep the cut line across a star polygon, scroll
//! to rotate the line, and hold space to preview grid subdivision.

use geom_viz::{draw_polygon, draw_polygon_outline, polygon_color, star_polygon};
use macroquad::prelude::*;
use nalgebra::{Point2, Vector2};
use poly_split::Line2D;

#[macroquad::main("Polygon splitting")]
async fn main() {
    let mut angle: f32 = 1.2;

    loop {
        clear_background(BLACK);

        let center = vec2(screen_width() / 2.0, screen_height() / 2.0);
        let polygon = star_polygon(center, 7, 110.0, 250.0);

        if is_key_down(KeyCode::Space) {
            if let Ok(cells) = polygon.subdivide(Vector2::new(60.0, 60.0)) {
                for cell in &cells {
                    draw_polygon(cell, polygon_color(cell));
                    draw_polygon_outline(cell, 1.0, DARKGRAY);
                }
            }
        } else {
            angle += mouse_wheel().1 * 0.05;
            let (mouse_x, mouse_y) = mouse_position();
            let through = Point2::new(mouse_x, mouse_y);
            let direction = Vector2::new(angle.cos(), angle.sin());

            if let Ok(line) = Line2D::new(through, through + direction) {
                let split = polygon.split(&line);
                for piece in split.negative.iter().chain(split.positive.iter()) {
                    draw_polygon(piece, polygon_color(piece));
                    draw_polygon_outline(piece, 1.0, DARKGRAY);
                }

                let a = through - direction * 2000.0;
                let b = through + direction * 2000.0;
                draw_line(a.x, a.y, b.x, b.y, 1.0, RED);
            }
        }

        draw_text(
            "mouse: move cut line   scroll: rotate   space: subdivide",
            20.0,
            30.0,
            24.0,
            WHITE,
        );

        next_frame().await
    }
}
