//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex with position (viewport pixels until uploaded) and color
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

/// Fixed colors for scene elements
pub mod colors {
    pub const SKY_TOP: [f32; 4] = [0.529, 0.808, 0.922, 1.0]; // #87CEEB
    pub const SKY_BOTTOM: [f32; 4] = [0.596, 0.984, 0.596, 1.0]; // #98FB98
    pub const CLOUD: [f32; 4] = [1.0, 1.0, 1.0, 0.7];
    pub const STRING: [f32; 4] = [0.4, 0.4, 0.4, 1.0]; // #666
    pub const KNOT: [f32; 4] = [0.2, 0.2, 0.2, 1.0]; // #333
    pub const HIGHLIGHT: [f32; 4] = [1.0, 1.0, 1.0, 0.4];
    pub const SHINE: [f32; 4] = [1.0, 1.0, 1.0, 0.3];
    pub const STAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
