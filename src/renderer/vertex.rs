//! Vertex type for overlay geometry

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// 2D vertex with position and color
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

    #[inline]
    pub fn at(point: Vec2, color: [f32; 4]) -> Self {
        Self::new(point.x, point.y, color)
    }

    /// Buffer layout for the host's overlay pipeline: position at location 0,
    /// color at location 1
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

/// Overlay colors
pub mod colors {
    /// Collider bounds (`#F00`)
    pub const COLLIDER: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    /// Sprite borders (`#0F0`)
    pub const BORDER: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout_is_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let v = Vertex::at(Vec2::new(1.0, 2.0), colors::BORDER);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 24);
        assert_eq!(Vertex::desc().array_stride, 24);
    }
}
