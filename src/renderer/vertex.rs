//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// #444
    pub const NET: [f32; 4] = [68.0 / 255.0, 68.0 / 255.0, 68.0 / 255.0, 1.0];
    pub const SCORE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PADDLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// #0ff
    pub const BALL: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
}

/// Convert an sRGB-encoded color to linear. Alpha is already linear.
///
/// An `*Srgb` surface format encodes on write, so colors given as CSS hex
/// values must be linearized first or they come out too bright.
pub fn srgb_to_linear(color: [f32; 4]) -> [f32; 4] {
    let channel = |c: f32| {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(color[0]), channel(color[1]), channel(color[2]), color[3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_gray_linearizes() {
        let linear = srgb_to_linear(colors::NET);
        for c in &linear[..3] {
            assert!((c - 0.0578).abs() < 1e-3, "got {}", c);
        }
        assert_eq!(linear[3], 1.0);
    }

    #[test]
    fn test_black_and_white_are_fixed_points() {
        assert_eq!(srgb_to_linear(colors::BACKGROUND), colors::BACKGROUND);
        let white = srgb_to_linear(colors::PADDLE);
        assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-6));
        let ball = srgb_to_linear(colors::BALL);
        assert_eq!(ball[0], 0.0);
        assert!((ball[1] - 1.0).abs() < 1e-6);
    }
}
