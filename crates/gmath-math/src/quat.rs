//! Rotation quaternion.
//!
//! [`Quat`] stores the vector part in `x, y, z` and the scalar part in `w`.
//! Multiplication is the Hamilton product, so `a * b` applies `b` first.
//!
//! ```rust
//! use gmath_math::{Quat, Vec3};
//! use std::f32::consts::FRAC_PI_2;
//!
//! let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
//! let v = q * Vec3::X;
//! assert!((v - Vec3::Y).length() < 1e-6);
//! ```

use std::ops::{Add, Mul, Neg};

use gmath_core::constants::EPSILON;

use crate::{Mat3, Mat4, Vec3, Vec4};

/// A quaternion `w + xi + yj + zk`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat {
    /// i component
    pub x: f32,
    /// j component
    pub y: f32,
    /// k component
    pub z: f32,
    /// Scalar part
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// No rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from its components (scalar part last).
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians around `axis`.
    ///
    /// `axis` is normalized here; a zero axis gives the identity.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let axis = axis.normalize();
        let (s, c) = (angle * 0.5).sin_cos();
        if axis == Vec3::ZERO {
            return Self::IDENTITY;
        }
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Extracts the rotation from an orthonormal 3x3 matrix.
    pub fn from_mat3(m: &Mat3) -> Self {
        let m = &m.m;
        let trace = m[0][0] + m[1][1] + m[2][2];

        // Pick the largest diagonal term to keep the divisor away from zero
        let q = if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new(
                (m[2][1] - m[1][2]) / s,
                (m[0][2] - m[2][0]) / s,
                (m[1][0] - m[0][1]) / s,
                0.25 * s,
            )
        } else if m[0][0] > m[1][1] && m[0][0] > m[2][2] {
            let s = (1.0 + m[0][0] - m[1][1] - m[2][2]).sqrt() * 2.0;
            Self::new(
                0.25 * s,
                (m[0][1] + m[1][0]) / s,
                (m[0][2] + m[2][0]) / s,
                (m[2][1] - m[1][2]) / s,
            )
        } else if m[1][1] > m[2][2] {
            let s = (1.0 + m[1][1] - m[0][0] - m[2][2]).sqrt() * 2.0;
            Self::new(
                (m[0][1] + m[1][0]) / s,
                0.25 * s,
                (m[1][2] + m[2][1]) / s,
                (m[0][2] - m[2][0]) / s,
            )
        } else {
            let s = (1.0 + m[2][2] - m[0][0] - m[1][1]).sqrt() * 2.0;
            Self::new(
                (m[0][2] + m[2][0]) / s,
                (m[1][2] + m[2][1]) / s,
                0.25 * s,
                (m[1][0] - m[0][1]) / s,
            )
        };
        q.normalize()
    }

    /// Rotation matrix equivalent to this (unit) quaternion.
    pub fn to_mat3(self) -> Mat3 {
        let Self { x, y, z, w } = self;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        Mat3::from_rows([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy)],
            [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx)],
            [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy)],
        ])
    }

    /// 4x4 rotation matrix.
    #[inline]
    pub fn to_mat4(self) -> Mat4 {
        Mat4::from_mat3(&self.to_mat3())
    }

    /// Vector part.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Norm.
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit quaternion. A zero quaternion becomes the identity.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len <= 0.0 {
            return Self::IDENTITY;
        }
        self * (1.0 / len)
    }

    /// Conjugate: vector part negated, `(-x, -y, -z, w)`.
    ///
    /// ```rust
    /// use gmath_math::Quat;
    ///
    /// let q = Quat::new(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(q.conjugate(), Quat::new(-1.0, -2.0, -3.0, 4.0));
    /// assert_eq!(q.conjugate().conjugate(), q);
    /// ```
    #[inline]
    pub const fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Multiplicative inverse, `conjugate / |q|²`.
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate() * (1.0 / self.dot(self))
    }

    /// Hamilton product `self * rhs`.
    pub fn mul_quat(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }

    /// Rotates `v` by this quaternion, `q * v * q⁻¹` for unit `q`.
    #[inline]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let u = self.xyz();
        let uv = u.cross(v);
        let uuv = u.cross(uv);
        v + (uv * self.w + uuv) * 2.0
    }

    /// Normalized linear interpolation.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        (self * (1.0 - t) + other * t).normalize()
    }

    /// Spherical linear interpolation along the shortest arc.
    ///
    /// Falls back to [`Quat::lerp`] when the inputs are nearly parallel.
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let mut cos_theta = self.dot(other);
        let mut other = other;
        if cos_theta < 0.0 {
            other = -other;
            cos_theta = -cos_theta;
        }
        if cos_theta > 1.0 - EPSILON {
            return self.lerp(other, t);
        }
        let angle = cos_theta.acos();
        let sin_angle = angle.sin();
        let a = ((1.0 - t) * angle).sin() / sin_angle;
        let b = (t * angle).sin() / sin_angle;
        self * a + other * b
    }

    /// Rotation angle in radians, in `[0, 2π]`.
    #[inline]
    pub fn angle(self) -> f32 {
        2.0 * self.w.clamp(-1.0, 1.0).acos()
    }

    /// Rotation axis. Returns `Vec3::Z` for the identity rotation.
    pub fn axis(self) -> Vec3 {
        let s2 = 1.0 - self.w * self.w;
        if s2 <= 0.0 {
            return Vec3::Z;
        }
        self.xyz() / s2.sqrt()
    }

    /// Components as `[x, y, z, w]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Components as a [`Vec4`] (`w` last).
    #[inline]
    pub const fn to_vec4(self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, self.w)
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_vec4().is_finite()
    }

    /// Converts to [`glam::Quat`].
    #[inline]
    pub fn to_glam(self) -> glam::Quat {
        glam::Quat::from_xyzw(self.x, self.y, self.z, self.w)
    }

    /// Creates from [`glam::Quat`].
    #[inline]
    pub fn from_glam(q: glam::Quat) -> Self {
        let [x, y, z, w] = q.to_array();
        Self::new(x, y, z, w)
    }
}

impl Mul for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_quat(rhs)
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(rhs)
    }
}

impl Mul<f32> for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Add for Quat {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Neg for Quat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl From<glam::Quat> for Quat {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::from_glam(q)
    }
}

impl From<Quat> for glam::Quat {
    #[inline]
    fn from(q: Quat) -> Self {
        q.to_glam()
    }
}

/// Free-function form of [`Quat::conjugate`].
#[inline]
pub const fn conjugate(q: Quat) -> Quat {
    q.conjugate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn test_identity_rotation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Quat::IDENTITY * v, v);
        assert_eq!(Quat::default(), Quat::IDENTITY);
    }

    #[test]
    fn test_axis_angle_rotation() {
        let q = Quat::from_axis_angle(Vec3::Y, FRAC_PI_2);
        assert_vec3_eq(q * Vec3::Z, Vec3::X);
        assert_vec3_eq(q * Vec3::X, -Vec3::Z);
    }

    #[test]
    fn test_conjugate_is_involution() {
        let q = Quat::new(0.1, -0.2, 0.3, 0.9);
        assert_eq!(q.conjugate().conjugate(), q);
        assert_eq!(conjugate(q), q.conjugate());
    }

    #[test]
    fn test_unit_times_conjugate_is_real() {
        let q = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 1.2);
        let r = q * q.conjugate();
        assert_abs_diff_eq!(r.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.z, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.w, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_inverse() {
        let q = Quat::new(1.0, 2.0, 3.0, 4.0);
        let r = q * q.inverse();
        assert_abs_diff_eq!(r.w, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.xyz().length(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_hamilton_product_basis() {
        let i = Quat::new(1.0, 0.0, 0.0, 0.0);
        let j = Quat::new(0.0, 1.0, 0.0, 0.0);
        let k = Quat::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, Quat::new(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn test_mat3_roundtrip() {
        let q = Quat::from_axis_angle(Vec3::new(0.3, -0.5, 0.8), 2.0);
        let m = q.to_mat3();
        let v = Vec3::new(0.5, 1.0, -2.0);
        assert_vec3_eq(m * v, q * v);

        let back = Quat::from_mat3(&m);
        // q and -q encode the same rotation
        assert_abs_diff_eq!(back.dot(q).abs(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_from_mat3_half_turn() {
        // trace < 0 branch
        let q = Quat::from_axis_angle(Vec3::X, PI);
        let back = Quat::from_mat3(&q.to_mat3());
        assert_vec3_eq(back * Vec3::Y, -Vec3::Y);
    }

    #[test]
    fn test_slerp_endpoints_and_midpoint() {
        let a = Quat::IDENTITY;
        let b = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
        assert_abs_diff_eq!(a.slerp(b, 0.0).dot(a), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(a.slerp(b, 1.0).dot(b), 1.0, epsilon = 1e-6);
        let mid = a.slerp(b, 0.5);
        assert_abs_diff_eq!(mid.angle(), FRAC_PI_2 / 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_angle_axis() {
        let q = Quat::from_axis_angle(Vec3::new(0.0, 0.0, 2.0), 1.0);
        assert_abs_diff_eq!(q.angle(), 1.0, epsilon = 1e-6);
        assert_vec3_eq(q.axis(), Vec3::Z);
        assert_eq!(Quat::IDENTITY.axis(), Vec3::Z);
    }

    #[test]
    fn test_glam_agrees() {
        let q = Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 0.7);
        let v = Vec3::new(-1.0, 0.5, 2.0);
        let g = q.to_glam() * v.to_glam();
        assert_vec3_eq(Vec3::from_glam(g), q * v);
        assert_eq!(Quat::from_glam(q.to_glam()), q);
    }
}
