//! Rand command - samples points on or in circles and spheres

use anyhow::{Result, bail};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

use gmath_math::{ball_rand, circular_rand, disk_rand, spherical_rand};

use super::{Output, format_row};
use crate::{RandArgs, Shape};

#[derive(Debug, Serialize)]
pub struct RandReport {
    pub seed: u64,
    pub points: Vec<Vec<f32>>,
}

pub fn run(args: RandArgs, out: Output) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let report = sample(args.shape, args.radius, args.count, seed)?;
    out.emit(&report, |r| {
        r.points.iter().map(|p| format_row(p)).collect::<Vec<_>>().join("\n")
    })
}

/// Draws `count` points from a ChaCha8 stream seeded with `seed`.
pub fn sample(shape: Shape, radius: f32, count: usize, seed: u64) -> Result<RandReport> {
    if !radius.is_finite() || radius <= 0.0 {
        bail!("radius must be a positive number, got {}", radius);
    }
    debug!(?shape, radius, count, seed, "sampling");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points = (0..count).map(|_| point(shape, radius, &mut rng)).collect();
    Ok(RandReport { seed, points })
}

fn point<R: Rng + ?Sized>(shape: Shape, radius: f32, rng: &mut R) -> Vec<f32> {
    match shape {
        Shape::Circle => circular_rand(rng, radius).to_array().to_vec(),
        Shape::Disk => disk_rand(rng, radius).to_array().to_vec(),
        Shape::Sphere => spherical_rand(rng, radius).to_array().to_vec(),
        Shape::Ball => ball_rand(rng, radius).to_array().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(p: &[f32]) -> f32 {
        p.iter().map(|v| v * v).sum::<f32>().sqrt()
    }

    #[test]
    fn test_shapes() {
        for (shape, dim, on_surface) in [
            (Shape::Circle, 2, true),
            (Shape::Disk, 2, false),
            (Shape::Sphere, 3, true),
            (Shape::Ball, 3, false),
        ] {
            let r = sample(shape, 2.0, 50, 11).unwrap();
            assert_eq!(r.points.len(), 50);
            for p in &r.points {
                assert_eq!(p.len(), dim);
                if on_surface {
                    assert!((norm(p) - 2.0).abs() < 1e-4, "{shape:?} {p:?}");
                } else {
                    assert!(norm(p) <= 2.0 + 1e-5, "{shape:?} {p:?}");
                }
            }
        }
    }

    #[test]
    fn test_seed_reproducible() {
        let a = sample(Shape::Ball, 1.0, 5, 42).unwrap();
        let b = sample(Shape::Ball, 1.0, 5, 42).unwrap();
        assert_eq!(a.points, b.points);
        assert_eq!(a.seed, 42);
    }

    #[test]
    fn test_bad_radius() {
        assert!(sample(Shape::Disk, 0.0, 1, 0).is_err());
        assert!(sample(Shape::Disk, f32::NAN, 1, 0).is_err());
    }
}
