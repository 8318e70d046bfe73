//! Shape generation for 2D primitives
//!
//! All coordinates are surface pixels, y growing downward.

use glam::Vec2;

use super::vertex::Vertex;

/// Append two triangles covering the rectangle `min..min + size`
pub fn push_rect(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, color: [f32; 4]) {
    let max = min + size;

    out.push(Vertex::new(min.x, min.y, color));
    out.push(Vertex::new(max.x, min.y, color));
    out.push(Vertex::new(min.x, max.y, color));

    out.push(Vertex::new(min.x, max.y, color));
    out.push(Vertex::new(max.x, min.y, color));
    out.push(Vertex::new(max.x, max.y, color));
}

/// Vertical dashed line centred on `x`
pub fn dashed_line(
    x: f32,
    height: f32,
    dash: f32,
    period: f32,
    thickness: f32,
    color: [f32; 4],
) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    if period <= 0.0 {
        return vertices;
    }

    let mut y = 0.0;
    while y < height {
        push_rect(
            &mut vertices,
            Vec2::new(x - thickness / 2.0, y),
            Vec2::new(thickness, dash),
            color,
        );
        y += period;
    }
    vertices
}

/// Lit segments (a, b, c, d, e, f, g) for each decimal digit
const SEGMENTS: [[bool; 7]; 10] = [
    [true, true, true, true, true, true, false],
    [false, true, true, false, false, false, false],
    [true, true, false, true, true, false, true],
    [true, true, true, true, false, false, true],
    [false, true, true, false, false, true, true],
    [true, false, true, true, false, true, true],
    [true, false, true, true, true, true, true],
    [true, true, true, false, false, false, false],
    [true, true, true, true, true, true, true],
    [true, true, true, true, false, true, true],
];

/// Width of a glyph of the given height
#[inline]
pub fn glyph_width(height: f32) -> f32 {
    height * 0.55
}

/// Seven-segment glyph for `digit` with its top-left corner at `origin`
pub fn digit(out: &mut Vec<Vertex>, digit: u8, origin: Vec2, height: f32, color: [f32; 4]) {
    let Some(lit) = SEGMENTS.get(digit as usize) else {
        return;
    };

    let w = glyph_width(height);
    let t = (height * 0.125).max(1.0);
    let half = (height - t) / 2.0;

    // (offset, size) per segment, in a..g order
    let rects = [
        (Vec2::new(0.0, 0.0), Vec2::new(w, t)),
        (Vec2::new(w - t, 0.0), Vec2::new(t, half + t)),
        (Vec2::new(w - t, half), Vec2::new(t, half + t)),
        (Vec2::new(0.0, height - t), Vec2::new(w, t)),
        (Vec2::new(0.0, half), Vec2::new(t, half + t)),
        (Vec2::new(0.0, 0.0), Vec2::new(t, half + t)),
        (Vec2::new(0.0, half), Vec2::new(w, t)),
    ];

    for (on, (offset, size)) in lit.iter().zip(rects) {
        if *on {
            push_rect(out, origin + offset, size, color);
        }
    }
}

/// Decimal number, left-aligned at `origin`
pub fn number(out: &mut Vec<Vertex>, value: u32, origin: Vec2, height: f32, color: [f32; 4]) {
    let advance = glyph_width(height) + height * 0.2;
    for (i, ch) in value.to_string().bytes().enumerate() {
        let x = origin.x + i as f32 * advance;
        digit(out, ch - b'0', Vec2::new(x, origin.y), height, color);
    }
}
