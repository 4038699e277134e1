//! Reference value validation.
//!
//! Checks the function families against values computed from the GLM
//! formulas at double precision.
//!
//! # Reference
//!
//! - glm/gtx/easing.inl
//! - glm/gtx/reciprocal.inl
//! - glm/gtx/pca.inl
//! - glm/gtc/round.inl

use gmath_math::constants::COS_ONE_OVER_TWO;
use gmath_math::*;

// ============================================================================
// Easing
// ============================================================================
// Columns: t, quadratic in-out, circular in-out, sine in,
// elastic out, back in, bounce out

const EASING_REFERENCE: &[(f32, [f32; 6])] = &[
    (0.25, [0.125, 0.0669873, 0.0761205, 0.9323505, -0.0641366, 0.4726563]),
    (0.5, [0.5, 0.5, 0.2928932, 1.0220971, -0.0876975, 0.71875]),
    (0.75, [0.875, 0.9330127, 0.6173166, 1.0051038, 0.1825903, 0.9588643]),
];

#[test]
fn test_easing_reference_values() {
    for &(t, expected) in EASING_REFERENCE {
        let actual = [
            quadratic_ease_in_out(t),
            circular_ease_in_out(t),
            sine_ease_in(t),
            elastic_ease_out(t),
            back_ease_in(t),
            bounce_ease_out(t),
        ];
        for (i, (a, e)) in actual.iter().zip(&expected).enumerate() {
            assert!(
                (a - e).abs() < 1e-5,
                "easing column {} at t={}: {} (expected {}, diff={})",
                i,
                t,
                a,
                e,
                (a - e).abs()
            );
        }
    }
}

#[test]
fn test_easing_enum_agrees_with_functions() {
    for t in [0.1_f32, 0.3, 0.6, 0.9] {
        assert_eq!(Easing::Bounce.apply(EaseMode::Out, t), bounce_ease_out(t));
        assert_eq!(Easing::Circular.apply(EaseMode::InOut, t), circular_ease_in_out(t));
        assert_eq!(Easing::Back.apply(EaseMode::In, t), back_ease_in(t));
    }
}

#[test]
fn test_easing_endpoints_all_families() {
    for easing in Easing::ALL {
        for mode in [EaseMode::In, EaseMode::Out, EaseMode::InOut] {
            let f = easing.function(mode);
            assert!(f(0.0).abs() < 1e-5, "{easing} {mode} at 0: {}", f(0.0));
            assert!((f(1.0) - 1.0).abs() < 1e-5, "{easing} {mode} at 1: {}", f(1.0));
        }
    }
}

// ============================================================================
// Reciprocal trigonometry
// ============================================================================

const RECIPROCAL_AT_0_7: &[(&str, fn(f32) -> f32, f32)] = &[
    ("sec", sec::<f32>, 1.3074593),
    ("csc", csc::<f32>, 1.5522703),
    ("cot", cot::<f32>, 1.1872418),
    ("sech", sech::<f32>, 0.7967055),
    ("csch", csch::<f32>, 1.3182461),
    ("coth", coth::<f32>, 1.6546216),
];

#[test]
fn test_reciprocal_reference_values() {
    for &(name, f, expected) in RECIPROCAL_AT_0_7 {
        let actual = f(0.7);
        assert!(
            (actual - expected).abs() < 1e-5,
            "{}(0.7) = {} (expected {})",
            name,
            actual,
            expected
        );
    }
}

#[test]
fn test_inverse_reciprocal_reference_values() {
    assert!((asec(2.0_f32) - 1.0471976).abs() < 1e-5);
    assert!((acsc(2.0_f32) - 0.5235988).abs() < 1e-5);
    assert!((acot(2.0_f32) - 0.4636476).abs() < 1e-5);
    assert!((asech(0.5_f32) - 1.3169579).abs() < 1e-5);
    assert!((acsch(2.0_f32) - 0.4812118).abs() < 1e-5);
    assert!((acoth(2.0_f32) - 0.5493061).abs() < 1e-5);
}

#[test]
fn test_cos_one_over_two() {
    assert!((COS_ONE_OVER_TWO - 0.87758255).abs() < 1e-7);
    assert!((cos(0.5_f32) - COS_ONE_OVER_TWO).abs() < 1e-6);
}

// ============================================================================
// Rounding
// ============================================================================

#[test]
fn test_power_of_two_table() {
    let table: &[(u32, u32, u32, u32)] = &[
        // (value, ceil, floor, round)
        (1, 1, 1, 1),
        (3, 4, 2, 2),
        (5, 8, 4, 4),
        (6, 8, 4, 4),
        (7, 8, 4, 8),
        (100, 128, 64, 128),
        (1024, 1024, 1024, 1024),
    ];
    for &(v, c, f, r) in table {
        assert_eq!(ceil_power_of_two(v), c, "ceil_power_of_two({v})");
        assert_eq!(floor_power_of_two(v), f, "floor_power_of_two({v})");
        assert_eq!(round_power_of_two(v), r, "round_power_of_two({v})");
    }
}

#[test]
fn test_ceil_multiple_invariant() {
    for v in -50i32..=50 {
        for m in 1..=9 {
            let c = ceil_multiple(v, m);
            assert!(c >= v && c % m == 0, "ceil_multiple({v}, {m}) = {c}");
        }
    }
}

// ============================================================================
// Splines
// ============================================================================

#[test]
fn test_catmull_rom_midpoint() {
    // Control points 0, 1, 4, 9 (squares): midpoint of the 1..4 span
    let r = catmull_rom(0.0_f32, 1.0, 4.0, 9.0, 0.5);
    assert!((r - 2.25).abs() < 1e-6, "catmull_rom = {r}");
}

// ============================================================================
// PCA
// ============================================================================

#[test]
fn test_pca_recovers_principal_axis() {
    // Points on an elongated ellipse rotated by 30 degrees
    let angle = 30.0_f32.to_radians();
    let axis = Vec3::new(angle.cos(), angle.sin(), 0.0);
    let minor = Vec3::new(-angle.sin(), angle.cos(), 0.0);
    let points: Vec<Vec3> = (0..64)
        .map(|i| {
            let t = i as f32 / 64.0 * std::f32::consts::TAU;
            axis * (t.cos() * 4.0) + minor * t.sin() + Vec3::new(1.0, 2.0, 3.0)
        })
        .collect();

    let cov = compute_covariance_matrix(&points).unwrap();
    let mut eigen = symmetric_eigen(&cov).unwrap();
    sort_eigen(&mut eigen);

    // Population variance of 4cos(t) over a full period is 8, of sin(t) is 0.5
    assert!((eigen.values.x - 8.0).abs() < 1e-3, "{:?}", eigen.values);
    assert!((eigen.values.y - 0.5).abs() < 1e-3, "{:?}", eigen.values);
    assert!(eigen.values.z.abs() < 1e-4, "{:?}", eigen.values);
    assert!(eigen.vector(0).dot(axis).abs() > 0.9999);
    assert!(eigen.vector(1).dot(minor).abs() > 0.9999);
}
