//! Math utilities and types for 3D graphics.
//!
//! This module provides vector and matrix types and the transform builders
//! used to produce the model, view and projection matrices each frame. All
//! types are plain `Copy` values with a `#[repr(C)]` layout so they can be
//! cast straight into GPU buffers.
//!
//! # Module Organization
//!
//! - [`vec2`] and [`vec3`] contain the vector types (re-exported at root level)
//! - [`mat`] contains the 4x4 matrix and its core operations
//! - [`transform`] adds translate/rotate/scale/look-at/perspective builders to [`Mat4`]
//! - Angle conversions are provided at root level
//!
//! # Conventions
//!
//! Matrices are column-major and indexed column first: `m[column][row]`.
//! Multiplication composes right to left, so `a * b` applies `b` first.

pub mod mat;
pub mod transform;
pub mod vec2;
pub mod vec3;

pub use mat::Mat4;
pub use vec2::Vec2;
pub use vec3::Vec3;

/// Lengths at or below this are treated as zero by [`Vec3::normalize`].
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// Converts degrees to radians.
///
/// The input is not wrapped, so `540.0` becomes `3π`.
///
/// # Example
/// ```
/// use scop::math::radians;
///
/// assert!((radians(180.0) - std::f32::consts::PI).abs() < 1e-6);
/// ```
pub fn radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Converts radians to degrees.
///
/// # Example
/// ```
/// use scop::math::degrees;
///
/// assert!((degrees(std::f32::consts::PI) - 180.0).abs() < 1e-4);
/// ```
pub fn degrees(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}
