//! Vertex definition for model rendering.
//!
//! This module provides the [`Vertex`] struct, which describes the layout of vertex data for the
//! renderer, and the matching [`wgpu::VertexBufferLayout`].

use crate::math::{Vec2, Vec3};

/// Vertex data for rendering a loaded model.
///
/// Each vertex contains:
/// - `pos`: 3D position in model space.
/// - `color`: RGB color as normalized floats.
/// - `tex_coord`: texture coordinate `(s, t)`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// 3D position in model space.
    pub pos: Vec3,
    /// RGB color.
    pub color: Vec3,
    /// Texture coordinate.
    pub tex_coord: Vec2,
}

impl Vertex {
    /// Returns the vertex buffer layout for use in a wgpu pipeline.
    ///
    /// This describes the memory layout of [`Vertex`] for the GPU.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position (3 floats)
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Color (3 floats)
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Texture coordinate (2 floats)
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}
