//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
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

/// Colors for game elements (linear space; the surface is sRGB)
pub mod colors {
    /// Sky blue clear color
    pub const SKY: [f32; 4] = [0.24, 0.60, 0.83, 1.0];
    /// Bird body yellow
    pub const BIRD: [f32; 4] = [1.0, 0.73, 0.0, 1.0];
    /// Bird eye
    pub const EYE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// Pipe green
    pub const PIPE: [f32; 4] = [0.015, 0.26, 0.015, 1.0];
    /// Ground tan
    pub const GROUND: [f32; 4] = [0.73, 0.48, 0.24, 1.0];
    /// HUD text
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Game over crimson
    pub const GAME_OVER: [f32; 4] = [0.71, 0.005, 0.045, 1.0];
}
