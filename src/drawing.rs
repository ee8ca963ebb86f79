//! Rendering of traced outlines for visual inspection.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_line_segment_mut;

use crate::colors::outline_color;
use crate::outline::Outline;
use crate::rect::union_bounding_box;

/// Draws every outline onto `canvas` as a closed polyline.
///
/// Each outline gets its own hue; holes are drawn in a darker shade.
/// Vertices are used as pixel coordinates, and anything outside the canvas
/// is clipped.
pub fn draw_outlines_mut(canvas: &mut RgbaImage, outlines: &[Outline]) {
    for (index, outline) in outlines.iter().enumerate() {
        let color = outline_color(index, outlines.len(), outline.is_hole(), u8::MAX);
        draw_closed_polyline(canvas, outline, color);
    }
}

/// Renders `outlines` onto a transparent canvas just large enough to hold
/// every vertex with non-negative coordinates.
pub fn render_outlines(outlines: &[Outline]) -> RgbaImage {
    let bounds = union_bounding_box(outlines.iter().map(|o| o.points.as_slice()));
    let (width, height) = bounds.map_or((0, 0), |r| (r.x + r.width + 1, r.y + r.height + 1));

    let mut canvas = RgbaImage::new(width, height);
    draw_outlines_mut(&mut canvas, outlines);
    canvas
}

fn draw_closed_polyline(canvas: &mut RgbaImage, outline: &Outline, color: Rgba<u8>) {
    let points = &outline.points;
    for (a, b) in points.iter().zip(points.iter().cycle().skip(1)) {
        draw_line_segment_mut(
            canvas,
            (a.x as f32, a.y as f32),
            (b.x as f32, b.y as f32),
            color,
        );
    }
}
