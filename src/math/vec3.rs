use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::NORMALIZE_EPSILON;

/*
Requirements for Memory Compatibility with WGPU:
   1. Standard layout (like C structs).
   2. No padding between components.
   3. Can be safely cast to [f32; 3] or bytes.
*/

/// A point, direction, normal or color in 3D space.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// Vectors whose length is at most [`NORMALIZE_EPSILON`] normalize to
    /// [`Vec3::ZERO`] instead of blowing up into NaN.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length <= NORMALIZE_EPSILON {
            return Self::ZERO;
        }
        *self / length
    }

    /// Angle between the two vectors in radians.
    ///
    /// The cosine is not clamped, so a zero-length operand or rounding past
    /// `[-1, 1]` yields NaN.
    pub fn angle(&self, other: &Self) -> f32 {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    /// Projects `self` onto `other`.
    pub fn project(&self, other: &Self) -> Self {
        *other * (self.dot(other) / other.dot(other))
    }

    /// `self` minus twice its projection onto `other`.
    pub fn reflect(&self, other: &Self) -> Self {
        *self - self.project(other) * 2.0
    }

    /// The component of `self` orthogonal to `other`.
    pub fn reject(&self, other: &Self) -> Self {
        *self - self.project(other)
    }

    /// Linear interpolation; `t` is not clamped.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        *self * (1.0 - t) + *other * t
    }

    /// Spherical interpolation along the arc between the two vectors.
    ///
    /// Degenerate when the vectors are parallel or anti-parallel, where
    /// `sin(theta)` is zero.
    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        let theta = self.angle(other);
        let start = *self * ((1.0 - t) * theta).sin();
        let end = *other * (t * theta).sin();
        (start + end) / theta.sin()
    }

    /// Checked component access: 0, 1 and 2 map to x, y and z.
    pub fn get(&self, index: usize) -> Option<f32> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut f32> {
        match index {
            0 => Some(&mut self.x),
            1 => Some(&mut self.y),
            2 => Some(&mut self.z),
            _ => None,
        }
    }

    pub fn as_array(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(vec: Vec3) -> Self {
        [vec.x, vec.y, vec.z]
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

// Division by zero is not trapped; infinities and NaN flow through.
impl Div<f32> for Vec3 {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl DivAssign<f32> for Vec3 {
    fn div_assign(&mut self, scalar: f32) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of range: {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

    fn assert_close(actual: Vec3, expected: Vec3, epsilon: f32) {
        assert!(
            (actual - expected).length() <= epsilon,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    fn random_vec3(rng: &mut StdRng) -> Vec3 {
        Vec3::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        )
    }

    #[test]
    fn test_cross_of_x_and_y_is_z() {
        assert_eq!(Vec3::X.cross(&Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(&Vec3::X), -Vec3::Z);
    }

    #[test]
    fn test_length_of_3_4_0_is_5() {
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
    }

    #[test]
    fn test_adding_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let v = random_vec3(&mut rng);
            assert_eq!(v + Vec3::ZERO, v);
        }
    }

    #[test]
    fn test_normalize_produces_unit_length() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let v = random_vec3(&mut rng);
            if v.length() < 1e-3 {
                continue;
            }
            assert!((v.normalize().length() - 1.0).abs() < 1e-5, "{:?}", v);
        }
    }

    #[test]
    fn test_normalize_zero_vector_stays_zero() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
        assert_eq!(Vec3::new(1e-7, 0.0, 0.0).normalize(), Vec3::ZERO);
    }

    #[test]
    fn test_cross_is_orthogonal_to_operands() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let a = random_vec3(&mut rng);
            let b = random_vec3(&mut rng);
            let c = a.cross(&b);
            let tolerance = 1e-4 * a.length() * b.length() * (a.length() + b.length());
            assert!(a.dot(&c).abs() <= tolerance, "{:?} x {:?}", a, b);
            assert!(b.dot(&c).abs() <= tolerance, "{:?} x {:?}", a, b);
        }
    }

    #[test]
    fn test_lerp_hits_endpoints() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let a = random_vec3(&mut rng);
            let b = random_vec3(&mut rng);
            assert_eq!(a.lerp(&b, 0.0), a);
            assert_eq!(a.lerp(&b, 1.0), b);
        }
    }

    #[test]
    fn test_lerp_is_unclamped() {
        let a = Vec3::ZERO;
        let b = Vec3::new(2.0, 0.0, 0.0);
        assert_eq!(a.lerp(&b, 1.5), Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(a.lerp(&b, -0.5), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_angle_between_axes() {
        assert!((Vec3::X.angle(&Vec3::Y) - FRAC_PI_2).abs() < 1e-6);
        assert!(Vec3::ZERO.angle(&Vec3::X).is_nan());
    }

    #[test]
    fn test_project_reflect_reject() {
        let v = Vec3::new(2.0, 3.0, 4.0);
        let onto = Vec3::new(0.0, 2.0, 0.0);
        assert_eq!(v.project(&onto), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(v.reject(&onto), Vec3::new(2.0, 0.0, 4.0));
        assert_eq!(v.reflect(&onto), Vec3::new(2.0, -3.0, 4.0));
    }

    #[test]
    fn test_project_onto_zero_is_nan() {
        let projected = Vec3::X.project(&Vec3::ZERO);
        assert!(projected.x.is_nan() && projected.y.is_nan() && projected.z.is_nan());
    }

    #[test]
    fn test_slerp_halfway_between_axes() {
        let halfway = Vec3::X.slerp(&Vec3::Y, 0.5);
        assert_close(halfway, Vec3::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0), 1e-6);
        assert_close(Vec3::X.slerp(&Vec3::Y, 0.0), Vec3::X, 1e-6);
        assert_close(Vec3::X.slerp(&Vec3::Y, 1.0), Vec3::Y, 1e-6);
    }

    #[test]
    fn test_slerp_of_parallel_vectors_is_degenerate() {
        let result = Vec3::X.slerp(&Vec3::X, 0.5);
        assert!(!result.x.is_finite());
    }

    #[test]
    fn test_compound_assignment_mutates_receiver() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v += Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
        v -= Vec3::new(2.0, 2.0, 2.0);
        assert_eq!(v, Vec3::new(0.0, 1.0, 2.0));
        v *= 4.0;
        assert_eq!(v, Vec3::new(0.0, 4.0, 8.0));
        v /= 2.0;
        assert_eq!(v, Vec3::new(0.0, 2.0, 4.0));
    }

    #[test]
    fn test_divide_by_zero_propagates_infinity() {
        let v = Vec3::new(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!(v.z.is_nan());
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Vec3::new(0.1, 0.2, 0.3);
        assert_eq!(a, Vec3::new(0.1, 0.2, 0.3));
        assert_ne!(a, Vec3::new(0.1, 0.2, 0.3 + 1e-6));
    }

    #[test]
    fn test_index_reads_and_writes_components() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!([v[0], v[1], v[2]], [1.0, 2.0, 3.0]);
        v[1] = 7.0;
        assert_eq!(v.y, 7.0);
        assert_eq!(v.get(2), Some(3.0));
        assert_eq!(v.get(3), None);
        if let Some(z) = v.get_mut(2) {
            *z = -1.0;
        }
        assert_eq!(v.z, -1.0);
        assert!(v.get_mut(5).is_none());
    }

    #[test]
    #[should_panic(expected = "Vec3 index out of range")]
    fn test_index_out_of_range_panics() {
        let v = Vec3::ZERO;
        let _ = v[3];
    }

    #[test]
    fn test_array_conversions() {
        let v = Vec3::from([1.0, 2.0, 3.0]);
        assert_eq!(v.as_array(), &[1.0, 2.0, 3.0]);
        let back: [f32; 3] = v.into();
        assert_eq!(back, [1.0, 2.0, 3.0]);
    }
}
