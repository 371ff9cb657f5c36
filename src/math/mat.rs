use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use super::Vec3;

/// A 4x4 matrix stored column-major and indexed column first: `m[column][row]`.
///
/// The layout is exactly 16 consecutive `f32`s, the form the vertex shader
/// expects in its uniform block.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat4(pub [[f32; 4]; 4]);

impl Mat4 {
    /// The all-zero matrix.
    pub fn zero() -> Mat4 {
        Mat4([[0.0; 4]; 4])
    }

    /// A matrix with `value` on the diagonal and zero elsewhere.
    pub fn diagonal(value: f32) -> Mat4 {
        let mut result = Mat4::zero();
        for i in 0..4 {
            result.0[i][i] = value;
        }
        result
    }

    pub fn identity() -> Mat4 {
        Mat4::diagonal(1.0)
    }

    pub fn transpose(&self) -> Mat4 {
        let mut result = Mat4::zero();
        for (col, column) in result.0.iter_mut().enumerate() {
            for (row, cell) in column.iter_mut().enumerate() {
                *cell = self.0[row][col];
            }
        }
        result
    }

    pub fn as_array(&self) -> &[[f32; 4]; 4] {
        &self.0
    }
}

impl Default for Mat4 {
    /// Returns the zero matrix, not the identity.
    fn default() -> Self {
        Mat4::zero()
    }
}

impl From<[[f32; 4]; 4]> for Mat4 {
    fn from(matrix: [[f32; 4]; 4]) -> Self {
        Mat4(matrix)
    }
}

// Convert from Mat4 to array
impl From<Mat4> for [[f32; 4]; 4] {
    fn from(matrix: Mat4) -> Self {
        matrix.0
    }
}

/// Composition: `a * b` applies `b` first, then `a`.
impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, b: Mat4) -> Mat4 {
        let mut result = [[0.0; 4]; 4];
        for (i, column) in result.iter_mut().enumerate() {
            for (j, cell) in column.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.0[k][j] * b.0[i][k]).sum();
            }
        }
        Mat4(result)
    }
}

/// Transforms `vec` as a homogeneous point with `w = 1`.
///
/// The resulting `w` is dropped without a perspective divide, so this is only
/// meaningful for affine matrices.
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    fn mul(self, vec: Vec3) -> Vec3 {
        let m = &self.0;
        Vec3::new(
            m[0][0] * vec.x + m[1][0] * vec.y + m[2][0] * vec.z + m[3][0],
            m[0][1] * vec.x + m[1][1] * vec.y + m[2][1] * vec.z + m[3][1],
            m[0][2] * vec.x + m[1][2] * vec.y + m[2][2] * vec.z + m[3][2],
        )
    }
}

impl Index<usize> for Mat4 {
    type Output = [f32; 4];

    fn index(&self, column: usize) -> &[f32; 4] {
        &self.0[column]
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, column: usize) -> &mut [f32; 4] {
        &mut self.0[column]
    }
}

/// Prints one matrix row per line, in reading order.
impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            writeln!(
                f,
                "[{:>10.4} {:>10.4} {:>10.4} {:>10.4}]",
                self.0[0][row], self.0[1][row], self.0[2][row], self.0[3][row]
            )?;
        }
        Ok(())
    }
}
