//! Geometric queries and products.
//!
//! The `cross` family covers every pairing GLM names "cross":
//!
//! | Function            | Operands       | Result |
//! |---------------------|----------------|--------|
//! | [`cross`]           | `Vec3 × Vec3`  | `Vec3` |
//! | [`cross_2d`]        | `Vec2 × Vec2`  | `f32` (z of the 3D cross product) |
//! | [`cross_quat`]      | `Quat × Quat`  | Hamilton product |
//! | [`cross_quat_vec`]  | `Quat × Vec3`  | `q * v` |
//! | [`cross_vec_quat`]  | `Vec3 × Quat`  | `q⁻¹ * v` |

use crate::vector::Vector;
use crate::{Quat, Vec2, Vec3};

/// Closest point to `point` on the segment `[a, b]`.
///
/// The projection onto the line through `a` and `b` is clamped to the
/// segment ends. A degenerate segment (`a == b`) returns `a`.
///
/// ```rust
/// use gmath_math::{closest_point_on_line, Vec2};
///
/// let a = Vec2::new(0.0, 0.0);
/// let b = Vec2::new(10.0, 0.0);
/// assert_eq!(closest_point_on_line(Vec2::new(3.0, 5.0), a, b), Vec2::new(3.0, 0.0));
/// assert_eq!(closest_point_on_line(Vec2::new(-3.0, 5.0), a, b), a);
/// assert_eq!(closest_point_on_line(Vec2::new(13.0, -1.0), a, b), b);
/// ```
pub fn closest_point_on_line<V: Vector>(point: V, a: V, b: V) -> V {
    let line = b - a;
    let length = line.length_squared().sqrt();
    if length == 0.0 {
        return a;
    }
    let dir = line / length;
    let distance = (point - a).dot(dir);
    if distance <= 0.0 {
        a
    } else if distance >= length {
        b
    } else {
        a + dir * distance
    }
}

/// Cross product of two 3D vectors.
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// 2D cross product, `v.x * u.y - u.x * v.y`.
///
/// Equals the z component of the 3D cross product of the vectors extended
/// with `z = 0`. Positive when `u` is counter-clockwise from `v`.
///
/// ```rust
/// use gmath_math::{cross_2d, Vec2};
///
/// assert_eq!(cross_2d(Vec2::X, Vec2::Y), 1.0);
/// assert_eq!(cross_2d(Vec2::Y, Vec2::X), -1.0);
/// ```
#[inline]
pub fn cross_2d(v: Vec2, u: Vec2) -> f32 {
    v.x * u.y - u.x * v.y
}

/// Quaternion cross product: the Hamilton product `q1 * q2`.
#[inline]
pub fn cross_quat(q1: Quat, q2: Quat) -> Quat {
    q1.mul_quat(q2)
}

/// `v` rotated by `q`.
#[inline]
pub fn cross_quat_vec(q: Quat, v: Vec3) -> Vec3 {
    q.rotate(v)
}

/// `v` rotated by the inverse of `q`.
#[inline]
pub fn cross_vec_quat(v: Vec3, q: Quat) -> Vec3 {
    q.inverse().rotate(v)
}

/// Reflects incident direction `i` about normal `n` (`n` must be unit length).
#[inline]
pub fn reflect<V: Vector>(i: V, n: V) -> V {
    i - n * (2.0 * n.dot(i))
}

/// Refraction direction for incident `i`, unit normal `n` and index ratio
/// `eta`. Returns the zero vector on total internal reflection.
pub fn refract<V: Vector>(i: V, n: V, eta: f32) -> V {
    let d = n.dot(i);
    let k = 1.0 - eta * eta * (1.0 - d * d);
    if k < 0.0 {
        return V::splat(0.0);
    }
    i * eta - n * (eta * d + k.sqrt())
}

/// Returns `n` if it faces against `i` (as judged by `n_ref`), else `-n`.
#[inline]
pub fn face_forward<V: Vector>(n: V, i: V, n_ref: V) -> V {
    if n_ref.dot(i) < 0.0 { n } else { n * -1.0 }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance<V: Vector>(a: V, b: V) -> f32 {
    (a - b).length_squared().sqrt()
}

/// Unit normal of the triangle `p1, p2, p3`.
#[inline]
pub fn triangle_normal(p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    (p1 - p2).cross(p1 - p3).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_closest_point_interior_3d() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 0.0, 4.0);
        let p = closest_point_on_line(Vec3::new(1.0, 1.0, 1.5), a, b);
        assert_abs_diff_eq!(p.z, 1.5, epsilon = 1e-6);
        assert_abs_diff_eq!(p.x, 0.0);
        assert_abs_diff_eq!(p.y, 0.0);
    }

    #[test]
    fn test_closest_point_clamps_to_ends() {
        let a = Vec3::new(1.0, 1.0, 1.0);
        let b = Vec3::new(2.0, 2.0, 2.0);
        assert_eq!(closest_point_on_line(Vec3::ZERO, a, b), a);
        assert_eq!(closest_point_on_line(Vec3::splat(5.0), a, b), b);
        let at_end = closest_point_on_line(b, a, b);
        assert_abs_diff_eq!((at_end - b).length(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_closest_point_degenerate_segment() {
        let a = Vec2::new(1.0, 2.0);
        assert_eq!(closest_point_on_line(Vec2::new(5.0, 5.0), a, a), a);
    }

    #[test]
    fn test_cross_orthogonal() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 4.0);
        let c = cross(a, b);
        assert_abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-5);
        assert_eq!(cross(Vec3::X, Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_cross_2d_antisymmetric() {
        let a = Vec2::new(1.5, -2.0);
        let b = Vec2::new(0.25, 3.0);
        assert_eq!(cross_2d(a, b), -cross_2d(b, a));
        assert_eq!(cross_2d(a, b), cross(a.extend(0.0), b.extend(0.0)).z);
    }

    #[test]
    fn test_cross_quat_forms() {
        let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
        let v = cross_quat_vec(q, Vec3::X);
        assert_abs_diff_eq!((v - Vec3::Y).length(), 0.0, epsilon = 1e-6);
        let back = cross_vec_quat(v, q);
        assert_abs_diff_eq!((back - Vec3::X).length(), 0.0, epsilon = 1e-6);
        assert_eq!(cross_quat(q, Quat::IDENTITY), q);
    }

    #[test]
    fn test_reflect_refract() {
        let i = Vec2::new(1.0, -1.0);
        assert_eq!(reflect(i, Vec2::Y), Vec2::new(1.0, 1.0));
        // eta = 1 passes straight through
        let i = Vec3::new(0.6, -0.8, 0.0);
        let r = refract(i, Vec3::Y, 1.0);
        assert_abs_diff_eq!((r - i).length(), 0.0, epsilon = 1e-6);
        // grazing ray from dense medium: total internal reflection
        let g = Vec3::new(0.99, -0.141, 0.0).normalize();
        assert_eq!(refract(g, Vec3::Y, 1.5), Vec3::ZERO);
    }

    #[test]
    fn test_face_forward_and_normal() {
        let n = Vec3::Y;
        assert_eq!(face_forward(n, -Vec3::Y, n), n);
        assert_eq!(face_forward(n, Vec3::Y, n), -n);
        let tn = triangle_normal(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert_abs_diff_eq!(tn.z.abs(), 1.0, epsilon = 1e-6);
        assert_eq!(distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0);
    }
}
