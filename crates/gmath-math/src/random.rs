//! Random sampling of scalars, vectors and points on simple shapes.
//!
//! Every function takes the generator explicitly, so results are
//! reproducible with a seeded generator.
//!
//! ```rust
//! use gmath_math::random::{circular_rand, linear_rand};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let x = linear_rand(&mut rng, 2.0, 3.0);
//! assert!((2.0..=3.0).contains(&x));
//!
//! let p = circular_rand(&mut rng, 4.0);
//! assert!((p.length() - 4.0).abs() < 1e-5);
//! ```

use std::f32::consts::TAU;

use rand::Rng;
use tracing::trace;

use crate::vector::Vector;
use crate::{Vec2, Vec3};

/// Uniform value in `[min, max]`.
///
/// `min > max` is allowed and samples the same interval.
#[inline]
pub fn linear_rand<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.r#gen::<f32>()
}

/// Component-wise [`linear_rand`].
pub fn linear_rand_vec<V: Vector, R: Rng + ?Sized>(rng: &mut R, min: V, max: V) -> V {
    V::from_fn(|i| linear_rand(rng, min[i], max[i]))
}

/// Normally distributed value (Marsaglia polar method).
pub fn gauss_rand<R: Rng + ?Sized>(rng: &mut R, mean: f32, deviation: f32) -> f32 {
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let x1 = linear_rand(rng, -1.0, 1.0);
        let x2 = linear_rand(rng, -1.0, 1.0);
        let w = x1 * x1 + x2 * x2;
        if w > 0.0 && w < 1.0 {
            if attempts > 1 {
                trace!(attempts, "gauss_rand rejection");
            }
            return mean + deviation * x2 * ((-2.0 * w.ln()) / w).sqrt();
        }
    }
}

/// Component-wise [`gauss_rand`].
pub fn gauss_rand_vec<V: Vector, R: Rng + ?Sized>(rng: &mut R, mean: V, deviation: V) -> V {
    V::from_fn(|i| gauss_rand(rng, mean[i], deviation[i]))
}

/// Uniform point on a circle of the given radius, centred on the origin.
///
/// The result always has length `radius`.
pub fn circular_rand<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec2 {
    let a = linear_rand(rng, 0.0, TAU);
    Vec2::new(a.cos(), a.sin()) * radius
}

/// Uniform point on the surface of a sphere of the given radius.
pub fn spherical_rand<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let z = linear_rand(rng, -1.0, 1.0);
    let a = linear_rand(rng, 0.0, TAU);
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r * a.cos(), r * a.sin(), z) * radius
}

/// Uniform point inside a disk of the given radius.
pub fn disk_rand<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec2 {
    rejection_sample(rng, radius, "disk_rand")
}

/// Uniform point inside a ball of the given radius.
pub fn ball_rand<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    rejection_sample(rng, radius, "ball_rand")
}

/// Samples the bounding cube until the point falls inside the radius.
fn rejection_sample<V: Vector, R: Rng + ?Sized>(rng: &mut R, radius: f32, name: &str) -> V {
    let lo = V::from_fn(|_| -radius);
    let hi = V::from_fn(|_| radius);
    let limit = radius * radius;
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let p = linear_rand_vec(rng, lo, hi);
        if p.length_squared() <= limit {
            if attempts > 1 {
                trace!(attempts, sampler = name, "rejection sampling retries");
            }
            return p;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec4;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn test_linear_rand_range() {
        let mut rng = rng(1);
        for _ in 0..1000 {
            let v = linear_rand(&mut rng, -2.0, 5.0);
            assert!((-2.0..=5.0).contains(&v));
        }
        assert_eq!(linear_rand(&mut rng, 3.0, 3.0), 3.0);
    }

    #[test]
    fn test_linear_rand_vec_per_component() {
        let mut rng = rng(2);
        let lo = Vec4::new(0.0, 10.0, -1.0, 100.0);
        let hi = Vec4::new(1.0, 11.0, 1.0, 100.0);
        for _ in 0..200 {
            let v = linear_rand_vec(&mut rng, lo, hi);
            assert!((0.0..=1.0).contains(&v.x));
            assert!((10.0..=11.0).contains(&v.y));
            assert!((-1.0..=1.0).contains(&v.z));
            assert_eq!(v.w, 100.0);
        }
    }

    #[test]
    fn test_gauss_rand_moments() {
        let mut rng = rng(3);
        let n = 20_000;
        let samples: Vec<f32> = (0..n).map(|_| gauss_rand(&mut rng, 5.0, 2.0)).collect();
        let mean = samples.iter().sum::<f32>() / n as f32;
        let var = samples.iter().map(|s| (s - mean) * (s - mean)).sum::<f32>() / n as f32;
        assert_abs_diff_eq!(mean, 5.0, epsilon = 0.1);
        assert_abs_diff_eq!(var.sqrt(), 2.0, epsilon = 0.1);
    }

    #[test]
    fn test_gauss_rand_zero_deviation() {
        let mut rng = rng(4);
        let v = gauss_rand_vec(&mut rng, Vec2::new(1.0, -1.0), Vec2::ZERO);
        assert_eq!(v, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_circular_rand_length() {
        let mut rng = rng(5);
        for _ in 0..500 {
            let p = circular_rand(&mut rng, 3.5);
            assert_abs_diff_eq!(p.length(), 3.5, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_spherical_rand_length() {
        let mut rng = rng(6);
        for _ in 0..500 {
            let p = spherical_rand(&mut rng, 2.0);
            assert_abs_diff_eq!(p.length(), 2.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_disk_and_ball_inside() {
        let mut rng = rng(7);
        for _ in 0..500 {
            assert!(disk_rand(&mut rng, 1.5).length() <= 1.5 + 1e-6);
            assert!(ball_rand(&mut rng, 0.5).length() <= 0.5 + 1e-6);
        }
        assert_eq!(disk_rand(&mut rng, 0.0), Vec2::ZERO);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = ball_rand(&mut rng(42), 1.0);
        let b = ball_rand(&mut rng(42), 1.0);
        assert_eq!(a, b);
    }
}
