//! Mathematical constants.
//!
//! The top level of this module holds `f32` values. The same constants at
//! `f64` precision live in [`f64`](self::f64).
//!
//! ```rust
//! use gmath_core::constants::{COS_ONE_OVER_TWO, HALF_PI};
//!
//! assert!((COS_ONE_OVER_TWO - 0.5_f32.cos()).abs() < 1e-7);
//! assert!((HALF_PI * 2.0 - std::f32::consts::PI).abs() < 1e-7);
//! ```

macro_rules! define_constants {
    ($($(#[$doc:meta])* $name:ident = $value:literal;)+) => {
        $(
            $(#[$doc])*
            pub const $name: f32 = $value as f32;
        )+

        /// Double precision variants of the parent module's constants.
        pub mod f64 {
            $(
                $(#[$doc])*
                pub const $name: f64 = $value;
            )+
        }
    };
}

define_constants! {
    /// π
    PI = 3.14159265358979323846264338327950288;
    /// 2π
    TWO_PI = 6.28318530717958647692528676655900576;
    /// π / 2
    HALF_PI = 1.57079632679489661923132169163975144;
    /// π / 4
    QUARTER_PI = 0.785398163397448309615660845819875721;
    /// 1 / π
    ONE_OVER_PI = 0.318309886183790671537767526745028724;
    /// 1 / (2π)
    ONE_OVER_TWO_PI = 0.159154943091895335768883763372514362;
    /// 2 / π
    TWO_OVER_PI = 0.636619772367581343075535053490057448;
    /// 4 / π
    FOUR_OVER_PI = 1.27323954473516268615107010698011490;
    /// 2 / √π
    TWO_OVER_ROOT_PI = 1.12837916709551257389615890312154517;
    /// 1 / √2
    ONE_OVER_ROOT_TWO = 0.707106781186547524400844362104849039;
    /// √2
    ROOT_TWO = 1.41421356237309504880168872420969808;
    /// √3
    ROOT_THREE = 1.73205080756887729352744634150587236;
    /// √5
    ROOT_FIVE = 2.23606797749978969640917366873127624;
    /// √π
    ROOT_PI = 1.77245385090551602729816748334114518;
    /// √(π / 2)
    ROOT_HALF_PI = 1.25331413731550025120788264240552262;
    /// √(2π)
    ROOT_TWO_PI = 2.50662827463100050241576528481104525;
    /// √(ln 4)
    ROOT_LN_FOUR = 1.17741002251547469101156932645969963;
    /// Euler's number e
    E = 2.71828182845904523536028747135266250;
    /// Euler-Mascheroni constant γ
    EULER = 0.577215664901532860606512090082402431;
    /// ln 2
    LN_TWO = 0.693147180559945309417232121458176568;
    /// ln 10
    LN_TEN = 2.30258509299404568401799145468436421;
    /// ln(ln 2)
    LN_LN_TWO = -0.366512920581664327012439158232669469;
    /// 1 / 3
    THIRD = 0.333333333333333333333333333333333333;
    /// 2 / 3
    TWO_THIRDS = 0.666666666666666666666666666666666667;
    /// Golden ratio φ
    GOLDEN_RATIO = 1.61803398874989484820458683436563811;
    /// cos(1/2)
    COS_ONE_OVER_TWO = 0.877582561890372716130286068203503191;
}

/// Machine epsilon for `f32`.
pub const EPSILON: f32 = f32::EPSILON;

/// Tolerance used by near-zero tests (singular matrices, degenerate segments).
pub const NEAR_ZERO: f32 = 1e-10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pi_family() {
        assert!((PI - std::f32::consts::PI).abs() <= EPSILON);
        assert!((HALF_PI - std::f32::consts::FRAC_PI_2).abs() <= EPSILON);
        assert!((QUARTER_PI - std::f32::consts::FRAC_PI_4).abs() <= EPSILON);
        assert!((ONE_OVER_PI - std::f32::consts::FRAC_1_PI).abs() <= EPSILON);
        assert!((f64::TWO_PI - std::f64::consts::TAU).abs() < 1e-15);
    }

    #[test]
    fn test_cos_one_over_two() {
        assert!((COS_ONE_OVER_TWO - 0.5_f32.cos()).abs() < 1e-7);
        assert!((f64::COS_ONE_OVER_TWO - 0.5_f64.cos()).abs() < 1e-15);
    }

    #[test]
    fn test_roots() {
        assert!((ROOT_TWO * ROOT_TWO - 2.0).abs() < 1e-6);
        assert!((ROOT_PI * ROOT_PI - PI).abs() < 1e-6);
        assert!((GOLDEN_RATIO * GOLDEN_RATIO - GOLDEN_RATIO - 1.0).abs() < 1e-6);
    }
}
