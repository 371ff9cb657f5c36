//! Scop - a small 3D model viewer core
//!
//! This crate holds everything the viewer computes on the CPU: the linear
//! algebra used to place, orient and project a model, the byte layouts shared
//! with the shaders, and the loaders that turn OBJ and bitmap files into GPU
//! ready data.
//!
//! # Architecture
//! - `math/`: vectors, 4x4 matrices and the transform builders
//! - `renderer/`: uniform and vertex layouts with wgpu buffer helpers
//! - `mesh/`: OBJ parsing, recentering and vertex deduplication
//! - `texture`: bitmap decoding to RGBA8
//! - `viewer/`: runtime state, per-frame uniforms and keyboard input
//!
//! Window and device setup are left to the host application.

pub mod math;
pub mod mesh;
pub mod renderer;
pub mod texture;
pub mod viewer;
