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

/// Convert an 8-bit RGB triple to an opaque float color
pub fn rgb(c: [u8; 3]) -> [f32; 4] {
    [
        c[0] as f32 / 255.0,
        c[1] as f32 / 255.0,
        c[2] as f32 / 255.0,
        1.0,
    ]
}

/// Colors for game elements
pub mod colors {
    pub const SKY_TOP: [f32; 4] = [0.02, 0.05, 0.16, 1.0];
    pub const SKY_BOTTOM: [f32; 4] = [0.05, 0.25, 0.35, 1.0];
    pub const SKYLINE: [f32; 4] = [0.03, 0.12, 0.2, 1.0];
    pub const SKYLINE_WINDOW: [f32; 4] = [0.9, 0.8, 0.3, 0.6];
    pub const PIPE: [f32; 4] = [0.78, 0.16, 0.12, 1.0];
    pub const PIPE_SHADE: [f32; 4] = [0.55, 0.08, 0.06, 1.0];
    pub const PIPE_LIP: [f32; 4] = [0.85, 0.25, 0.2, 1.0];
    pub const GROUND: [f32; 4] = [0.86, 0.78, 0.55, 1.0];
    pub const GROUND_STRIPE: [f32; 4] = [0.8, 0.7, 0.45, 1.0];
    pub const GRASS: [f32; 4] = [0.45, 0.75, 0.2, 1.0];
    pub const BIRD_BODY: [f32; 4] = [0.9, 0.2, 0.15, 1.0];
    pub const BIRD_WING: [f32; 4] = [1.0, 0.9, 0.85, 1.0];
    pub const BIRD_BEAK: [f32; 4] = [1.0, 0.6, 0.1, 1.0];
    pub const EYE_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const EYE_PUPIL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const DIM: [f32; 4] = [0.0, 0.0, 0.0, 0.35];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];
}
