//! Shape generation for overlay primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Aabb;

/// Two triangles covering the box from `min` to `max`
fn quad(min: Vec2, max: Vec2, color: [f32; 4], out: &mut Vec<Vertex>) {
    let tl = min;
    let tr = Vec2::new(max.x, min.y);
    let br = max;
    let bl = Vec2::new(min.x, max.y);

    out.push(Vertex::at(tl, color));
    out.push(Vertex::at(tr, color));
    out.push(Vertex::at(bl, color));

    out.push(Vertex::at(bl, color));
    out.push(Vertex::at(tr, color));
    out.push(Vertex::at(br, color));
}

/// Filled rectangle
pub fn rect(bounds: &Aabb, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    quad(bounds.min, bounds.max, color, &mut vertices);
    vertices
}

/// Stroked rectangle outline, centred on the box edges like a canvas stroke
///
/// Emits four bars (top, bottom, left, right) of `stroke` thickness; the side
/// bars skip the corners the horizontal bars already cover.
pub fn rect_outline(bounds: &Aabb, stroke: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(24);
    if stroke <= 0.0 {
        return vertices;
    }

    let h = stroke * 0.5;
    let min = bounds.min;
    let max = bounds.max;

    // Top and bottom span the full width including the corners
    quad(Vec2::new(min.x - h, min.y - h), Vec2::new(max.x + h, min.y + h), color, &mut vertices);
    quad(Vec2::new(min.x - h, max.y - h), Vec2::new(max.x + h, max.y + h), color, &mut vertices);
    // Sides
    quad(Vec2::new(min.x - h, min.y + h), Vec2::new(min.x + h, max.y - h), color, &mut vertices);
    quad(Vec2::new(max.x - h, min.y + h), Vec2::new(max.x + h, max.y - h), color, &mut vertices);

    vertices
}
