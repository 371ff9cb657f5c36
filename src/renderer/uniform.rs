//! Uniform buffer utilities for wgpu rendering.
//!
//! This module provides the [`UniformBufferObject`] struct holding the model, view and
//! projection matrices, along with helpers for buffer and bind group creation.
//!
//! # Layout
//!
//! The struct is read by the vertex shader's uniform block at binding 0:
//!
//! | Field   | Offset | Size |
//! |---------|--------|------|
//! | `model` | 0      | 64   |
//! | `view`  | 64     | 64   |
//! | `proj`  | 128    | 64   |
//!
//! Each matrix is 16 column-major `f32`s. Reordering the fields or changing the
//! matrix convention silently breaks the rendered transform.

use wgpu::util::DeviceExt;

use crate::math::Mat4;

/// Size in bytes of [`UniformBufferObject`] as seen by the shader.
pub const UNIFORM_BUFFER_SIZE: u64 = std::mem::size_of::<UniformBufferObject>() as u64;

/// Per-frame transform uniforms for the model pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct UniformBufferObject {
    /// Object space to world space.
    pub model: Mat4,
    /// World space to camera space.
    pub view: Mat4,
    /// Camera space to clip space.
    pub proj: Mat4,
}

impl Default for UniformBufferObject {
    /// Returns a [`UniformBufferObject`] with every matrix set to zero.
    fn default() -> Self {
        Self::new(Mat4::zero(), Mat4::zero(), Mat4::zero())
    }
}

impl UniformBufferObject {
    pub fn new(model: Mat4, view: Mat4, proj: Mat4) -> Self {
        Self { model, view, proj }
    }

    /// Returns the raw bytes of the uniform struct for uploading to the GPU.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Creates a GPU buffer containing the uniform data.
    ///
    /// # Arguments
    /// * `device` - The wgpu device to create the buffer with.
    ///
    /// # Returns
    /// A [`wgpu::Buffer`] with the uniform data, ready for use as a uniform buffer.
    pub fn create_buffer(&self, device: &wgpu::Device) -> wgpu::Buffer {
        log::debug!("Creating uniform buffer ({} bytes)", UNIFORM_BUFFER_SIZE);
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Uniform Buffer"),
            contents: self.as_bytes(),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        })
    }

    /// Describes binding 0 as a vertex-stage uniform buffer of exactly this struct's size.
    pub fn bind_group_layout_entry() -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(UNIFORM_BUFFER_SIZE),
            },
            count: None,
        }
    }

    /// Creates a bind group and layout for the uniform buffer.
    ///
    /// # Arguments
    /// * `buffer` - The uniform buffer to bind.
    /// * `device` - The wgpu device to create the bind group and layout.
    ///
    /// # Returns
    /// A tuple of (`wgpu::BindGroup`, `wgpu::BindGroupLayout`) for binding the uniform buffer in a pipeline.
    pub fn create_bind_group(
        &self,
        buffer: &wgpu::Buffer,
        device: &wgpu::Device,
    ) -> (wgpu::BindGroup, wgpu::BindGroupLayout) {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[Self::bind_group_layout_entry()],
            label: Some("uniform_bind_group_layout"),
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("uniform_bind_group"),
        });
        (bind_group, layout)
    }

    /// Uploads this frame's matrices into an existing uniform buffer.
    pub fn write(&self, queue: &wgpu::Queue, buffer: &wgpu::Buffer) {
        queue.write_buffer(buffer, 0, self.as_bytes());
    }
}
