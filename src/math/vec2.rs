use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// A 2D vector, used for texture coordinates.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec2 {
    pub s: f32,
    pub t: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(s: f32, t: f32) -> Self {
        Self { s, t }
    }

    pub fn dot(&self, other: &Self) -> f32 {
        self.s * other.s + self.t * other.t
    }

    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Divides by [`length`](Self::length) with no zero-length guard: the
    /// zero vector normalizes to NaN. See [`Vec3::normalize`](super::Vec3::normalize)
    /// for the guarded variant.
    pub fn normalize(&self) -> Self {
        *self / self.length()
    }

    /// The z component of the 3D cross product of the two vectors.
    pub fn cross(&self, other: &Self) -> f32 {
        self.s * other.t - self.t * other.s
    }

    pub fn angle(&self, other: &Self) -> f32 {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    pub fn project(&self, other: &Self) -> Self {
        *other * (self.dot(other) / other.dot(other))
    }

    pub fn reflect(&self, other: &Self) -> Self {
        *self - self.project(other) * 2.0
    }

    pub fn reject(&self, other: &Self) -> Self {
        *self - self.project(other)
    }

    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        *self * (1.0 - t) + *other * t
    }

    pub fn slerp(&self, other: &Self, t: f32) -> Self {
        let theta = self.angle(other);
        let start = *self * ((1.0 - t) * theta).sin();
        let end = *other * (t * theta).sin();
        (start + end) / theta.sin()
    }

    pub fn as_array(&self) -> &[f32; 2] {
        bytemuck::cast_ref(self)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from([s, t]: [f32; 2]) -> Self {
        Self::new(s, t)
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(vec: Vec2) -> Self {
        [vec.s, vec.t]
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.s + other.s, self.t + other.t)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        self.s += other.s;
        self.t += other.t;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.s - other.s, self.t - other.t)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, other: Self) {
        self.s -= other.s;
        self.t -= other.t;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self::new(self.s * scalar, self.t * scalar)
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, scalar: f32) {
        self.s *= scalar;
        self.t *= scalar;
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self::new(self.s / scalar, self.t / scalar)
    }
}

impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, scalar: f32) {
        self.s /= scalar;
        self.t /= scalar;
    }
}
