//! GPU-ready vertex data for projected quads.

use crate::FaceQuad;
use cubist_facelets::Color;

/// Display RGB for each sticker color.
pub const fn palette(color: Color) -> [u8; 3] {
    match color {
        Color::White => [255, 255, 255],
        Color::Yellow => [255, 213, 0],
        Color::Red => [196, 30, 58],
        Color::Orange => [255, 88, 0],
        Color::Blue => [0, 81, 186],
        Color::Green => [0, 158, 96],
    }
}

/// Pack a color as RGBA8 in a little-endian `u32` (red in the low byte).
pub const fn pack_rgba(color: Color) -> u32 {
    let [r, g, b] = palette(color);
    let a = 255u32;
    (a << 24) | ((b as u32) << 16) | ((g as u32) << 8) | r as u32
}

/// GPU vertex data for one corner of a sticker.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    /// World position (x, y, z)
    pub position: [f32; 3],
    /// Packed RGBA color
    pub color: u32,
}

/// Flatten quads into a triangle list, two triangles per sticker.
pub fn quad_vertices(quads: &[FaceQuad]) -> Vec<QuadVertex> {
    let mut vertices = Vec::with_capacity(quads.len() * 6);
    for quad in quads {
        let color = pack_rgba(quad.color);
        for corner in [0, 1, 2, 0, 2, 3] {
            vertices.push(QuadVertex {
                position: quad.vertices[corner].to_array(),
                color,
            });
        }
    }
    vertices
}
