//! Transform builders producing model, view and projection matrices.
//!
//! Every builder is a pure function returning a new [`Mat4`]. The
//! translate/rotate/scale builders right-multiply their input, so the new
//! transform is applied before `mat` (in `mat`'s local frame).
//!
//! All angles are in radians; use [`radians`](super::radians) to convert.

use super::{Mat4, Vec3};

impl Mat4 {
    /// Returns `mat * T(v)`.
    pub fn translate(mat: &Mat4, v: Vec3) -> Mat4 {
        let m = &mat.0;
        let mut result = *mat;
        for i in 0..3 {
            result.0[3][i] = m[0][i] * v.x + m[1][i] * v.y + m[2][i] * v.z + m[3][i];
        }
        result
    }

    /// Returns `mat * R`, where `R` rotates by `angle` around `axis`.
    ///
    /// `axis` is normalized first. A zero axis normalizes to the zero vector,
    /// which leaves `R` as `diag(cos, cos, cos, 1)`.
    pub fn rotate(mat: &Mat4, angle: f32, axis: Vec3) -> Mat4 {
        let axis = axis.normalize();
        let (sin, cos) = angle.sin_cos();
        let one_minus_cos = 1.0 - cos;

        let (xx, yy, zz) = (axis.x * axis.x, axis.y * axis.y, axis.z * axis.z);
        let (xy, xz, yz) = (axis.x * axis.y, axis.x * axis.z, axis.y * axis.z);
        let (x_sin, y_sin, z_sin) = (axis.x * sin, axis.y * sin, axis.z * sin);

        let rotation = Mat4([
            [
                xx * one_minus_cos + cos,
                xy * one_minus_cos + z_sin,
                xz * one_minus_cos - y_sin,
                0.0,
            ],
            [
                xy * one_minus_cos - z_sin,
                yy * one_minus_cos + cos,
                yz * one_minus_cos + x_sin,
                0.0,
            ],
            [
                xz * one_minus_cos + y_sin,
                yz * one_minus_cos - x_sin,
                zz * one_minus_cos + cos,
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        *mat * rotation
    }

    /// Returns `mat * S`, where `S` scales each axis by the matching factor.
    pub fn scale(mat: &Mat4, factors: Vec3) -> Mat4 {
        let mut scaling = Mat4::identity();
        scaling.0[0][0] = factors.x;
        scaling.0[1][1] = factors.y;
        scaling.0[2][2] = factors.z;

        *mat * scaling
    }

    /// Right-handed view matrix looking from `eye` towards `center`.
    ///
    /// Not guarded against `up` being parallel to the view direction; that
    /// case collapses the right vector to zero.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
        let forward = (center - eye).normalize();
        let right = forward.cross(&up).normalize();
        let true_up = right.cross(&forward);

        Mat4([
            [right.x, true_up.x, -forward.x, 0.0],
            [right.y, true_up.y, -forward.y, 0.0],
            [right.z, true_up.z, -forward.z, 0.0],
            [-right.dot(&eye), -true_up.dot(&eye), forward.dot(&eye), 1.0],
        ])
    }

    /// Right-handed perspective projection with a `[0, 1]` depth range.
    ///
    /// The Y axis is not flipped here; callers targeting a Y-down clip space
    /// negate `[1][1]` themselves.
    pub fn perspective(
        field_of_view_y_in_radians: f32,
        aspect: f32,
        z_near: f32,
        z_far: f32,
    ) -> Mat4 {
        let tan_half_fov = (field_of_view_y_in_radians / 2.0).tan();

        let mut result = Mat4::zero();
        result.0[0][0] = 1.0 / (aspect * tan_half_fov);
        result.0[1][1] = 1.0 / tan_half_fov;
        result.0[2][2] = z_far / (z_near - z_far);
        result.0[2][3] = -1.0;
        result.0[3][2] = -(z_far * z_near) / (z_far - z_near);
        result
    }
}
