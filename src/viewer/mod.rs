//! Viewer state and per-frame transform computation.
//!
//! This module defines [`ViewerConfig`], the tunables of the viewer, and
//! [`ViewerState`], which tracks what the user has changed at runtime and
//! turns it into the model, view and projection matrices for each frame.
//!
//! # Overview
//!
//! Each frame the host application:
//! - advances the clock with [`ViewerState::advance`],
//! - applies input through [`keys::KeyState::update`],
//! - uploads [`ViewerState::uniforms`] to the uniform buffer,
//! - draws with the pipeline at [`ViewerState::pipeline_index`].
//!
//! The model spins around the up axis at a constant rate; on top of that the
//! user can roll it, scale it and move the camera.

pub mod keys;

use crate::math::{Mat4, Vec3, radians};
use crate::renderer::uniform::UniformBufferObject;

/// Tunable parameters of the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Where the camera starts.
    pub camera_position: Vec3,
    /// The point the camera looks at.
    pub target: Vec3,
    /// World up direction; also the spin axis of the model.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// Automatic spin around [`up`](Self::up), in degrees per second.
    pub spin_degrees_per_second: f32,
    /// Manual roll around the z axis, in degrees per second while held.
    pub roll_degrees_per_second: f32,
    /// Camera movement speed in world units per second.
    pub camera_speed: f32,
    /// Uniform scale applied to the model at startup.
    pub initial_model_scale: f32,
    /// Scale change per zoom step; also the smallest allowed scale.
    pub scale_step: f32,
    /// Number of pipelines to cycle through.
    pub pipeline_count: usize,
    /// Negate the projection's Y scale for clip spaces with Y pointing down.
    pub flip_y: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            camera_position: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: 45.0,
            z_near: 0.1,
            z_far: 10.0,
            spin_degrees_per_second: 90.0,
            roll_degrees_per_second: 90.0,
            camera_speed: 2.5,
            initial_model_scale: 0.01,
            scale_step: 0.01,
            pipeline_count: 3,
            flip_y: false,
        }
    }
}

/// Runtime state of the viewer.
#[derive(Debug, Clone)]
pub struct ViewerState {
    pub config: ViewerConfig,
    /// Seconds since the viewer started.
    pub elapsed: f32,
    pub camera_position: Vec3,
    pub model_scale: f32,
    /// Manual roll in radians.
    pub roll_angle: f32,
    pub pipeline_index: usize,
    pub quit_requested: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl ViewerState {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            elapsed: 0.0,
            camera_position: config.camera_position,
            model_scale: config.initial_model_scale,
            roll_angle: 0.0,
            pipeline_index: 0,
            quit_requested: false,
            config,
        }
    }

    /// Advances the clock by `delta_time` seconds.
    pub fn advance(&mut self, delta_time: f32) {
        self.elapsed += delta_time;
    }

    /// Spin, then roll, then uniform scale.
    pub fn model_matrix(&self) -> Mat4 {
        let spin = self.elapsed * radians(self.config.spin_degrees_per_second);
        let model = Mat4::rotate(&Mat4::identity(), spin, self.config.up);
        let model = Mat4::rotate(&model, self.roll_angle, Vec3::Z);
        Mat4::scale(&model, Vec3::new(self.model_scale, self.model_scale, self.model_scale))
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.camera_position, self.config.target, self.config.up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        let mut proj = Mat4::perspective(
            radians(self.config.fov_degrees),
            aspect,
            self.config.z_near,
            self.config.z_far,
        );
        if self.config.flip_y {
            proj[1][1] *= -1.0;
        }
        proj
    }

    /// Packs this frame's matrices for upload.
    pub fn uniforms(&self, aspect: f32) -> UniformBufferObject {
        UniformBufferObject::new(
            self.model_matrix(),
            self.view_matrix(),
            self.projection_matrix(aspect),
        )
    }

    /// Grows (positive `steps`) or shrinks the model, never below one scale step.
    pub fn zoom(&mut self, steps: f32) {
        let step = self.config.scale_step;
        self.model_scale = (self.model_scale + steps * step).max(step);
    }

    /// Moves the camera along `direction` at the configured speed.
    pub fn move_camera(&mut self, direction: Vec3, delta_time: f32) {
        self.camera_position += direction.normalize() * (self.config.camera_speed * delta_time);
    }

    /// Rolls the model; positive `direction` is counter-clockwise seen from +z.
    pub fn roll(&mut self, direction: f32, delta_time: f32) {
        self.roll_angle += direction * radians(self.config.roll_degrees_per_second) * delta_time;
    }

    /// Switches to the next pipeline, wrapping around.
    pub fn cycle_pipeline(&mut self) {
        if self.config.pipeline_count == 0 {
            return;
        }
        self.pipeline_index = (self.pipeline_index + 1) % self.config.pipeline_count;
        log::info!(
            "Switched to pipeline {}/{}",
            self.pipeline_index + 1,
            self.config.pipeline_count
        );
    }
}

/// Width over height of a surface, falling back to 1 for a zero height
/// (minimized windows report 0x0).
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if height == 0 {
        log::warn!("Surface height is zero; using aspect ratio 1.0");
        return 1.0;
    }
    width as f32 / height as f32
}
