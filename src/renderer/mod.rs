//! Main renderer module.
//!
//! This module contains the byte layouts shared with the shaders: the per-frame
//! uniform block and the model vertex format, each with its wgpu helpers.

/// Uniform buffer layout and upload helpers.
pub mod uniform;
/// Vertex layout for loaded models.
pub mod vertex;
