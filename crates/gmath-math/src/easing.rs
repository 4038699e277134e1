//! Easing curves.
//!
//! Each family has `_ease_in`, `_ease_out` and `_ease_in_out` variants that
//! map `a ∈ [0, 1]` to progress. Inputs outside `[0, 1]` are a caller error,
//! checked in debug builds.
//!
//! For runtime selection (the CLI, animation data) use [`Easing`] together
//! with [`EaseMode`]:
//!
//! ```rust
//! use gmath_math::{cubic_ease_in_out, EaseMode, Easing};
//!
//! let family: Easing = "cubic".parse().unwrap();
//! let mode: EaseMode = "in-out".parse().unwrap();
//! assert_eq!(family.apply(mode, 0.25), cubic_ease_in_out(0.25));
//! ```
//!
//! # Curve Shapes
//!
//! | Family      | Endpoints exact | Monotonic | Overshoots |
//! |-------------|-----------------|-----------|------------|
//! | linear .. quintic, sine, circular, exponential | yes | yes | no |
//! | bounce      | yes             | no        | no         |
//! | back        | yes             | no        | yes        |
//! | elastic     | no              | no        | yes        |

use std::fmt;
use std::str::FromStr;

use gmath_core::constants::{HALF_PI, PI};
use gmath_core::Error;

/// Default overshoot of the back curves (about 10% overshoot).
pub const BACK_OVERSHOOT: f32 = 1.70158;

#[inline]
fn check_unit(a: f32) {
    debug_assert!((0.0..=1.0).contains(&a), "easing input {a} outside [0, 1]");
}

// ============================================================================
// Linear
// ============================================================================

/// Identity curve.
#[inline]
pub fn linear_interpolation(a: f32) -> f32 {
    check_unit(a);
    a
}

// ============================================================================
// Polynomial
// ============================================================================

/// `a²`
#[inline]
pub fn quadratic_ease_in(a: f32) -> f32 {
    check_unit(a);
    a * a
}

/// `-a (a - 2)`
#[inline]
pub fn quadratic_ease_out(a: f32) -> f32 {
    check_unit(a);
    -(a * (a - 2.0))
}

/// Piecewise quadratic: `2a²` below 0.5, `-2a² + 4a - 1` above.
#[inline]
pub fn quadratic_ease_in_out(a: f32) -> f32 {
    check_unit(a);
    if a < 0.5 {
        2.0 * a * a
    } else {
        (-2.0 * a * a) + (4.0 * a) - 1.0
    }
}

/// `a³`
///
/// ```rust
/// use gmath_math::cubic_ease_in;
///
/// assert_eq!(cubic_ease_in(0.5), 0.125);
/// ```
#[inline]
pub fn cubic_ease_in(a: f32) -> f32 {
    check_unit(a);
    a * a * a
}

/// `(a - 1)³ + 1`
#[inline]
pub fn cubic_ease_out(a: f32) -> f32 {
    check_unit(a);
    let f = a - 1.0;
    f * f * f + 1.0
}

/// Piecewise cubic: `4a³` below 0.5, `0.5 (2a - 2)³ + 1` above.
#[inline]
pub fn cubic_ease_in_out(a: f32) -> f32 {
    check_unit(a);
    if a < 0.5 {
        4.0 * a * a * a
    } else {
        let f = 2.0 * a - 2.0;
        0.5 * f * f * f + 1.0
    }
}

/// `a⁴`
#[inline]
pub fn quartic_ease_in(a: f32) -> f32 {
    check_unit(a);
    a * a * a * a
}

/// `(a - 1)³ (1 - a) + 1`
#[inline]
pub fn quartic_ease_out(a: f32) -> f32 {
    check_unit(a);
    let f = a - 1.0;
    f * f * f * (1.0 - a) + 1.0
}

/// Piecewise quartic: `8a⁴` below 0.5, `-8 (a - 1)⁴ + 1` above.
#[inline]
pub fn quartic_ease_in_out(a: f32) -> f32 {
    check_unit(a);
    if a < 0.5 {
        8.0 * a * a * a * a
    } else {
        let f = a - 1.0;
        -8.0 * f * f * f * f + 1.0
    }
}

/// `a⁵`
#[inline]
pub fn quintic_ease_in(a: f32) -> f32 {
    check_unit(a);
    a * a * a * a * a
}

/// `(a - 1)⁵ + 1`
#[inline]
pub fn quintic_ease_out(a: f32) -> f32 {
    check_unit(a);
    let f = a - 1.0;
    f * f * f * f * f + 1.0
}

/// Piecewise quintic: `16a⁵` below 0.5, `0.5 (2a - 2)⁵ + 1` above.
#[inline]
pub fn quintic_ease_in_out(a: f32) -> f32 {
    check_unit(a);
    if a < 0.5 {
        16.0 * a * a * a * a * a
    } else {
        let f = 2.0 * a - 2.0;
        0.5 * f * f * f * f * f + 1.0
    }
}

// ============================================================================
// Sine
// ============================================================================

/// Quarter sine wave, starting flat.
#[inline]
pub fn sine_ease_in(a: f32) -> f32 {
    check_unit(a);
    ((a - 1.0) * HALF_PI).sin() + 1.0
}

/// Quarter sine wave, ending flat.
#[inline]
pub fn sine_ease_out(a: f32) -> f32 {
    check_unit(a);
    (a * HALF_PI).sin()
}

/// Half cosine wave.
#[inline]
pub fn sine_ease_in_out(a: f32) -> f32 {
    check_unit(a);
    0.5 * (1.0 - (a * PI).cos())
}

// ============================================================================
// Circular
// ============================================================================

/// Quarter circle, `1 - sqrt(1 - a²)`.
#[inline]
pub fn circular_ease_in(a: f32) -> f32 {
    check_unit(a);
    1.0 - (1.0 - a * a).sqrt()
}

/// Quarter circle, `sqrt((2 - a) a)`.
#[inline]
pub fn circular_ease_out(a: f32) -> f32 {
    check_unit(a);
    ((2.0 - a) * a).sqrt()
}

/// Two quarter circles joined at `(0.5, 0.5)`.
///
/// ```rust
/// use gmath_math::circular_ease_in_out;
///
/// assert_eq!(circular_ease_in_out(0.0), 0.0);
/// assert_eq!(circular_ease_in_out(0.5), 0.5);
/// assert_eq!(circular_ease_in_out(1.0), 1.0);
/// ```
#[inline]
pub fn circular_ease_in_out(a: f32) -> f32 {
    check_unit(a);
    if a < 0.5 {
        0.5 * (1.0 - (1.0 - 4.0 * (a * a)).sqrt())
    } else {
        0.5 * ((-((2.0 * a) - 3.0) * ((2.0 * a) - 1.0)).sqrt() + 1.0)
    }
}

// ============================================================================
// Exponential
// ============================================================================

/// `2^(10 (a - 1))`, pinned to 0 at `a = 0`.
#[inline]
pub fn exponential_ease_in(a: f32) -> f32 {
    check_unit(a);
    if a <= 0.0 {
        a
    } else {
        2.0_f32.powf(10.0 * (a - 1.0))
    }
}

/// `1 - 2^(-10a)`, pinned to 1 at `a = 1`.
#[inline]
pub fn exponential_ease_out(a: f32) -> f32 {
    check_unit(a);
    if a >= 1.0 {
        a
    } else {
        1.0 - 2.0_f32.powf(-10.0 * a)
    }
}

/// Piecewise exponential, pinned to 0 and 1 at the ends.
#[inline]
pub fn exponential_ease_in_out(a: f32) -> f32 {
    check_unit(a);
    if a <= 0.0 || a >= 1.0 {
        a
    } else if a < 0.5 {
        0.5 * 2.0_f32.powf(20.0 * a - 10.0)
    } else {
        -0.5 * 2.0_f32.powf(-20.0 * a + 10.0) + 1.0
    }
}

// ============================================================================
// Elastic
// ============================================================================

/// Damped sine wave growing toward 1.
#[inline]
pub fn elastic_ease_in(a: f32) -> f32 {
    check_unit(a);
    (13.0 * HALF_PI * a).sin() * 2.0_f32.powf(10.0 * (a - 1.0))
}

/// Damped sine wave settling at 1.
#[inline]
pub fn elastic_ease_out(a: f32) -> f32 {
    check_unit(a);
    (-13.0 * HALF_PI * (a + 1.0)).sin() * 2.0_f32.powf(-10.0 * a) + 1.0
}

/// Elastic in for the first half, elastic out for the second.
#[inline]
pub fn elastic_ease_in_out(a: f32) -> f32 {
    check_unit(a);
    if a < 0.5 {
        0.5 * (13.0 * HALF_PI * (2.0 * a)).sin() * 2.0_f32.powf(10.0 * ((2.0 * a) - 1.0))
    } else {
        0.5 * ((-13.0 * HALF_PI * ((2.0 * a - 1.0) + 1.0)).sin()
            * 2.0_f32.powf(-10.0 * (2.0 * a - 1.0))
            + 2.0)
    }
}

// ============================================================================
// Back
// ============================================================================

/// Pulls back below 0 before accelerating, with the default overshoot.
#[inline]
pub fn back_ease_in(a: f32) -> f32 {
    back_ease_in_with(a, BACK_OVERSHOOT)
}

/// Overshoots past 1 before settling, with the default overshoot.
#[inline]
pub fn back_ease_out(a: f32) -> f32 {
    back_ease_out_with(a, BACK_OVERSHOOT)
}

/// Back in, then back out, with the default overshoot.
#[inline]
pub fn back_ease_in_out(a: f32) -> f32 {
    back_ease_in_out_with(a, BACK_OVERSHOOT)
}

/// [`back_ease_in`] with a custom overshoot `o`.
#[inline]
pub fn back_ease_in_with(a: f32, o: f32) -> f32 {
    check_unit(a);
    let z = ((o + 1.0) * a) - o;
    a * a * z
}

/// [`back_ease_out`] with a custom overshoot `o`.
#[inline]
pub fn back_ease_out_with(a: f32, o: f32) -> f32 {
    check_unit(a);
    let n = a - 1.0;
    let z = ((o + 1.0) * n) + o;
    (n * n * z) + 1.0
}

/// [`back_ease_in_out`] with a custom overshoot `o`.
#[inline]
pub fn back_ease_in_out_with(a: f32, o: f32) -> f32 {
    check_unit(a);
    let s = o * 1.525;
    if a < 0.5 {
        let n = 2.0 * a;
        let z = ((s + 1.0) * n) - s;
        n * n * z * 0.5
    } else {
        let n = 2.0 * a - 2.0;
        let z = ((s + 1.0) * n) + s;
        0.5 * (n * n * z + 2.0)
    }
}

// ============================================================================
// Bounce
// ============================================================================

/// Bouncing ball landing at 1.
pub fn bounce_ease_out(a: f32) -> f32 {
    check_unit(a);
    if a < 4.0 / 11.0 {
        (121.0 * a * a) / 16.0
    } else if a < 8.0 / 11.0 {
        (363.0 / 40.0 * a * a) - (99.0 / 10.0 * a) + 17.0 / 5.0
    } else if a < 9.0 / 10.0 {
        (4356.0 / 361.0 * a * a) - (35442.0 / 1805.0 * a) + 16061.0 / 1805.0
    } else {
        (54.0 / 5.0 * a * a) - (513.0 / 25.0 * a) + 268.0 / 25.0
    }
}

/// Mirror image of [`bounce_ease_out`].
#[inline]
pub fn bounce_ease_in(a: f32) -> f32 {
    check_unit(a);
    1.0 - bounce_ease_out(1.0 - a)
}

/// Bounce in for the first half, bounce out for the second.
#[inline]
pub fn bounce_ease_in_out(a: f32) -> f32 {
    check_unit(a);
    if a < 0.5 {
        0.5 * bounce_ease_in(a * 2.0)
    } else {
        0.5 * bounce_ease_out(a * 2.0 - 1.0) + 0.5
    }
}

// ============================================================================
// Runtime selection
// ============================================================================

/// Which end of the curve is eased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EaseMode {
    /// Slow start.
    In,
    /// Slow end.
    Out,
    /// Slow start and end.
    #[default]
    InOut,
}

/// An easing curve family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// `a`
    Linear,
    /// Powers of two
    Quadratic,
    /// Powers of three
    #[default]
    Cubic,
    /// Powers of four
    Quartic,
    /// Powers of five
    Quintic,
    /// Sine wave
    Sine,
    /// Quarter circles
    Circular,
    /// Powers of two with exponent `10a`
    Exponential,
    /// Damped oscillation
    Elastic,
    /// Overshoot by [`BACK_OVERSHOOT`]
    Back,
    /// Bouncing ball
    Bounce,
}

impl Easing {
    /// Every family, in declaration order.
    pub const ALL: [Easing; 11] = [
        Easing::Linear,
        Easing::Quadratic,
        Easing::Cubic,
        Easing::Quartic,
        Easing::Quintic,
        Easing::Sine,
        Easing::Circular,
        Easing::Exponential,
        Easing::Elastic,
        Easing::Back,
        Easing::Bounce,
    ];

    /// Evaluates this family in `mode` at `a`.
    pub fn apply(self, mode: EaseMode, a: f32) -> f32 {
        self.function(mode)(a)
    }

    /// The plain function for this family and mode.
    pub fn function(self, mode: EaseMode) -> fn(f32) -> f32 {
        use EaseMode::*;
        match (self, mode) {
            (Easing::Linear, _) => linear_interpolation,
            (Easing::Quadratic, In) => quadratic_ease_in,
            (Easing::Quadratic, Out) => quadratic_ease_out,
            (Easing::Quadratic, InOut) => quadratic_ease_in_out,
            (Easing::Cubic, In) => cubic_ease_in,
            (Easing::Cubic, Out) => cubic_ease_out,
            (Easing::Cubic, InOut) => cubic_ease_in_out,
            (Easing::Quartic, In) => quartic_ease_in,
            (Easing::Quartic, Out) => quartic_ease_out,
            (Easing::Quartic, InOut) => quartic_ease_in_out,
            (Easing::Quintic, In) => quintic_ease_in,
            (Easing::Quintic, Out) => quintic_ease_out,
            (Easing::Quintic, InOut) => quintic_ease_in_out,
            (Easing::Sine, In) => sine_ease_in,
            (Easing::Sine, Out) => sine_ease_out,
            (Easing::Sine, InOut) => sine_ease_in_out,
            (Easing::Circular, In) => circular_ease_in,
            (Easing::Circular, Out) => circular_ease_out,
            (Easing::Circular, InOut) => circular_ease_in_out,
            (Easing::Exponential, In) => exponential_ease_in,
            (Easing::Exponential, Out) => exponential_ease_out,
            (Easing::Exponential, InOut) => exponential_ease_in_out,
            (Easing::Elastic, In) => elastic_ease_in,
            (Easing::Elastic, Out) => elastic_ease_out,
            (Easing::Elastic, InOut) => elastic_ease_in_out,
            (Easing::Back, In) => back_ease_in,
            (Easing::Back, Out) => back_ease_out,
            (Easing::Back, InOut) => back_ease_in_out,
            (Easing::Bounce, In) => bounce_ease_in,
            (Easing::Bounce, Out) => bounce_ease_out,
            (Easing::Bounce, InOut) => bounce_ease_in_out,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Quadratic => "quadratic",
            Easing::Cubic => "cubic",
            Easing::Quartic => "quartic",
            Easing::Quintic => "quintic",
            Easing::Sine => "sine",
            Easing::Circular => "circular",
            Easing::Exponential => "exponential",
            Easing::Elastic => "elastic",
            Easing::Back => "back",
            Easing::Bounce => "bounce",
        }
    }

    /// True for families whose output leaves `[0, 1]`.
    pub fn overshoots(self) -> bool {
        matches!(self, Easing::Back | Easing::Elastic)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(Easing::Linear),
            "quadratic" | "quad" => Ok(Easing::Quadratic),
            "cubic" => Ok(Easing::Cubic),
            "quartic" | "quart" => Ok(Easing::Quartic),
            "quintic" | "quint" => Ok(Easing::Quintic),
            "sine" | "sin" => Ok(Easing::Sine),
            "circular" | "circ" => Ok(Easing::Circular),
            "exponential" | "expo" => Ok(Easing::Exponential),
            "elastic" => Ok(Easing::Elastic),
            "back" => Ok(Easing::Back),
            "bounce" => Ok(Easing::Bounce),
            _ => Err(Error::parse(format!("unknown easing family '{s}'"))),
        }
    }
}

impl fmt::Display for EaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EaseMode::In => "in",
            EaseMode::Out => "out",
            EaseMode::InOut => "in-out",
        })
    }
}

impl FromStr for EaseMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "in" => Ok(EaseMode::In),
            "out" => Ok(EaseMode::Out),
            "in-out" | "inout" | "in_out" => Ok(EaseMode::InOut),
            _ => Err(Error::parse(format!("unknown ease mode '{s}'"))),
        }
    }
}
