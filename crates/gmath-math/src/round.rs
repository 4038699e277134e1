//! Rounding to multiples and powers of two.
//!
//! Two traits cover the integer and float cases:
//!
//! - [`RoundMultiple`]: `ceil`/`floor`/`round` to a multiple of `m`,
//!   implemented for every primitive integer, `f32`, the vector types and
//!   `[T; N]` arrays of those.
//! - [`PowerOfTwo`]: `ceil`/`floor`/`round` to a power of two, implemented
//!   for every primitive integer and `[T; N]` arrays of integers.
//!
//! The free functions ([`ceil_multiple`], [`ceil_power_of_two`], ...) are thin
//! wrappers that read like the shader-style API.
//!
//! # Conventions
//!
//! - Multiples are taken of `|m|`. A zero multiple leaves the value unchanged.
//! - Signed values round toward +∞ for `ceil` and toward -∞ for `floor`,
//!   so `ceil_multiple(-5, 4) == -4`.
//! - Negative powers of two mirror the positive ones: `ceil_power_of_two(-5)
//!   == -8`. `0` maps to `0`.
//! - Integer results that do not fit the type wrap to `0`, for multiples
//!   and powers of two alike: `ceil_multiple(u8::MAX, 4) == 0`.
//!
//! ```rust
//! use gmath_math::{ceil_multiple, ceil_power_of_two, round_power_of_two};
//!
//! assert_eq!(ceil_multiple(17u32, 8), 24);
//! assert_eq!(ceil_multiple(-5i32, 4), -4);
//! assert_eq!(ceil_power_of_two(100u32), 128);
//! assert_eq!(ceil_power_of_two(200u8), 0); // 256 does not fit
//! assert_eq!(round_power_of_two(40u32), 32);
//! ```

use crate::{Vec2, Vec3, Vec4};

/// Rounding to a multiple of another value.
pub trait RoundMultiple: Copy {
    /// Result of [`RoundMultiple::is_multiple`]: `bool` for scalars, one
    /// flag per component otherwise.
    type Mask;

    /// Smallest multiple of `multiple` that is `>= self`.
    fn ceil_multiple(self, multiple: Self) -> Self;

    /// Largest multiple of `multiple` that is `<= self`.
    fn floor_multiple(self, multiple: Self) -> Self;

    /// Nearest multiple of `multiple`; ties go toward +∞.
    fn round_multiple(self, multiple: Self) -> Self;

    /// Whether `self` is an exact multiple of `multiple`.
    fn is_multiple(self, multiple: Self) -> Self::Mask;
}

/// Rounding to powers of two. Integer types only.
pub trait PowerOfTwo: Copy {
    /// Result of [`PowerOfTwo::is_power_of_two`].
    type Mask;

    /// Whether `|self|` is a power of two. Zero is not.
    fn is_power_of_two(self) -> Self::Mask;

    /// `self` if it is a power of two, otherwise the next one away from zero.
    fn ceil_power_of_two(self) -> Self;

    /// `self` if it is a power of two, otherwise the previous one toward zero.
    fn floor_power_of_two(self) -> Self;

    /// The nearer of [`floor_power_of_two`](PowerOfTwo::floor_power_of_two)
    /// and [`ceil_power_of_two`](PowerOfTwo::ceil_power_of_two); ties go to
    /// the smaller magnitude.
    fn round_power_of_two(self) -> Self;
}

// ============================================================================
// Integers
// ============================================================================

macro_rules! impl_unsigned {
    ($($t:ty),+) => {
        $(
            impl RoundMultiple for $t {
                type Mask = bool;

                #[inline]
                fn ceil_multiple(self, multiple: Self) -> Self {
                    if multiple == 0 {
                        return self;
                    }
                    match self % multiple {
                        0 => self,
                        r => self.checked_add(multiple - r).unwrap_or(0),
                    }
                }

                #[inline]
                fn floor_multiple(self, multiple: Self) -> Self {
                    if multiple == 0 {
                        return self;
                    }
                    self - self % multiple
                }

                #[inline]
                fn round_multiple(self, multiple: Self) -> Self {
                    if multiple == 0 {
                        return self;
                    }
                    let r = self % multiple;
                    if r >= multiple - r {
                        self.ceil_multiple(multiple)
                    } else {
                        self - r
                    }
                }

                #[inline]
                fn is_multiple(self, multiple: Self) -> bool {
                    if multiple == 0 {
                        return self == 0;
                    }
                    self % multiple == 0
                }
            }

            impl PowerOfTwo for $t {
                type Mask = bool;

                #[inline]
                fn is_power_of_two(self) -> bool {
                    <$t>::is_power_of_two(self)
                }

                #[inline]
                fn ceil_power_of_two(self) -> Self {
                    if self == 0 {
                        return 0;
                    }
                    self.checked_next_power_of_two().unwrap_or(0)
                }

                #[inline]
                fn floor_power_of_two(self) -> Self {
                    if self == 0 {
                        return 0;
                    }
                    1 << (<$t>::BITS - 1 - self.leading_zeros())
                }

                #[inline]
                fn round_power_of_two(self) -> Self {
                    if self == 0 || <$t>::is_power_of_two(self) {
                        return self;
                    }
                    let prev = self.floor_power_of_two();
                    match prev.checked_mul(2) {
                        Some(next) if next - self < self - prev => next,
                        _ => prev,
                    }
                }
            }
        )+
    };
}

macro_rules! impl_signed {
    ($($t:ty => $u:ty),+) => {
        $(
            impl RoundMultiple for $t {
                type Mask = bool;

                #[inline]
                fn ceil_multiple(self, multiple: Self) -> Self {
                    if multiple == 0 {
                        return self;
                    }
                    // |multiple| may not fit the signed type, the step always does
                    match self.wrapping_rem_euclid(multiple) as $u {
                        0 => self,
                        r => self
                            .checked_add_unsigned(multiple.unsigned_abs() - r)
                            .unwrap_or(0),
                    }
                }

                #[inline]
                fn floor_multiple(self, multiple: Self) -> Self {
                    if multiple == 0 {
                        return self;
                    }
                    self.checked_sub(self.wrapping_rem_euclid(multiple)).unwrap_or(0)
                }

                #[inline]
                fn round_multiple(self, multiple: Self) -> Self {
                    if multiple == 0 {
                        return self;
                    }
                    let r = self.wrapping_rem_euclid(multiple);
                    if (r as $u) >= multiple.unsigned_abs() - r as $u {
                        self.ceil_multiple(multiple)
                    } else {
                        self.checked_sub(r).unwrap_or(0)
                    }
                }

                #[inline]
                fn is_multiple(self, multiple: Self) -> bool {
                    if multiple == 0 {
                        return self == 0;
                    }
                    self.wrapping_rem_euclid(multiple) == 0
                }
            }

            impl PowerOfTwo for $t {
                type Mask = bool;

                #[inline]
                fn is_power_of_two(self) -> bool {
                    self.unsigned_abs().is_power_of_two()
                }

                #[inline]
                fn ceil_power_of_two(self) -> Self {
                    mirror_signed::<$t, $u>(self, self.unsigned_abs().ceil_power_of_two())
                }

                #[inline]
                fn floor_power_of_two(self) -> Self {
                    mirror_signed::<$t, $u>(self, self.unsigned_abs().floor_power_of_two())
                }

                #[inline]
                fn round_power_of_two(self) -> Self {
                    mirror_signed::<$t, $u>(self, self.unsigned_abs().round_power_of_two())
                }
            }

            impl MirrorSigned<$u> for $t {
                #[inline]
                fn from_magnitude(value: Self, magnitude: $u) -> Self {
                    let m = magnitude as $t;
                    if value < 0 {
                        // 2^(BITS-1) casts to MIN, whose negation is itself
                        m.wrapping_neg()
                    } else if m < 0 {
                        0
                    } else {
                        m
                    }
                }
            }
        )+
    };
}

/// Rebuilds a signed result from the rounded magnitude of `value`.
trait MirrorSigned<U>: Sized {
    fn from_magnitude(value: Self, magnitude: U) -> Self;
}

#[inline]
fn mirror_signed<S: MirrorSigned<U>, U>(value: S, magnitude: U) -> S {
    S::from_magnitude(value, magnitude)
}

impl_unsigned!(u8, u16, u32, u64, usize);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => usize);

// ============================================================================
// Floats
// ============================================================================

impl RoundMultiple for f32 {
    type Mask = bool;

    #[inline]
    fn ceil_multiple(self, multiple: Self) -> Self {
        if multiple == 0.0 {
            return self;
        }
        let m = multiple.abs();
        (self / m).ceil() * m
    }

    #[inline]
    fn floor_multiple(self, multiple: Self) -> Self {
        if multiple == 0.0 {
            return self;
        }
        let m = multiple.abs();
        (self / m).floor() * m
    }

    #[inline]
    fn round_multiple(self, multiple: Self) -> Self {
        if multiple == 0.0 {
            return self;
        }
        let m = multiple.abs();
        (self / m + 0.5).floor() * m
    }

    #[inline]
    fn is_multiple(self, multiple: Self) -> bool {
        if multiple == 0.0 {
            return self == 0.0;
        }
        self % multiple == 0.0
    }
}

macro_rules! impl_round_multiple_vec {
    ($($v:ident => $n:literal),+) => {
        $(
            impl RoundMultiple for $v {
                type Mask = [bool; $n];

                #[inline]
                fn ceil_multiple(self, multiple: Self) -> Self {
                    self.zip_map(multiple, <f32 as RoundMultiple>::ceil_multiple)
                }

                #[inline]
                fn floor_multiple(self, multiple: Self) -> Self {
                    self.zip_map(multiple, <f32 as RoundMultiple>::floor_multiple)
                }

                #[inline]
                fn round_multiple(self, multiple: Self) -> Self {
                    self.zip_map(multiple, <f32 as RoundMultiple>::round_multiple)
                }

                #[inline]
                fn is_multiple(self, multiple: Self) -> [bool; $n] {
                    self.to_array().is_multiple(multiple.to_array())
                }
            }
        )+
    };
}

impl_round_multiple_vec!(Vec2 => 2, Vec3 => 3, Vec4 => 4);

// ============================================================================
// Arrays
// ============================================================================

impl<T: RoundMultiple<Mask = bool>, const N: usize> RoundMultiple for [T; N] {
    type Mask = [bool; N];

    #[inline]
    fn ceil_multiple(self, multiple: Self) -> Self {
        std::array::from_fn(|i| self[i].ceil_multiple(multiple[i]))
    }

    #[inline]
    fn floor_multiple(self, multiple: Self) -> Self {
        std::array::from_fn(|i| self[i].floor_multiple(multiple[i]))
    }

    #[inline]
    fn round_multiple(self, multiple: Self) -> Self {
        std::array::from_fn(|i| self[i].round_multiple(multiple[i]))
    }

    #[inline]
    fn is_multiple(self, multiple: Self) -> [bool; N] {
        std::array::from_fn(|i| self[i].is_multiple(multiple[i]))
    }
}

impl<T: PowerOfTwo<Mask = bool>, const N: usize> PowerOfTwo for [T; N] {
    type Mask = [bool; N];

    #[inline]
    fn is_power_of_two(self) -> [bool; N] {
        self.map(T::is_power_of_two)
    }

    #[inline]
    fn ceil_power_of_two(self) -> Self {
        self.map(T::ceil_power_of_two)
    }

    #[inline]
    fn floor_power_of_two(self) -> Self {
        self.map(T::floor_power_of_two)
    }

    #[inline]
    fn round_power_of_two(self) -> Self {
        self.map(T::round_power_of_two)
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Smallest multiple of `multiple` that is `>= v`.
///
/// ```rust
/// use gmath_math::ceil_multiple;
///
/// assert_eq!(ceil_multiple(16u32, 8), 16);
/// assert_eq!(ceil_multiple(3.2_f32, 0.5), 3.5);
/// assert_eq!(ceil_multiple([1u8, 9], [4, 4]), [4, 12]);
/// ```
#[inline]
pub fn ceil_multiple<T: RoundMultiple>(v: T, multiple: T) -> T {
    v.ceil_multiple(multiple)
}

/// Largest multiple of `multiple` that is `<= v`.
#[inline]
pub fn floor_multiple<T: RoundMultiple>(v: T, multiple: T) -> T {
    v.floor_multiple(multiple)
}

/// Nearest multiple of `multiple`; ties go toward +∞.
#[inline]
pub fn round_multiple<T: RoundMultiple>(v: T, multiple: T) -> T {
    v.round_multiple(multiple)
}

/// Whether `v` is an exact multiple of `multiple`.
#[inline]
pub fn is_multiple<T: RoundMultiple>(v: T, multiple: T) -> T::Mask {
    v.is_multiple(multiple)
}

/// Whether `|v|` is a power of two.
///
/// ```rust
/// use gmath_math::is_power_of_two;
///
/// assert!(is_power_of_two(64u32));
/// assert!(is_power_of_two(-8i32));
/// assert!(!is_power_of_two(0u32));
/// assert_eq!(is_power_of_two([1u16, 3, 4]), [true, false, true]);
/// ```
#[inline]
pub fn is_power_of_two<T: PowerOfTwo>(v: T) -> T::Mask {
    v.is_power_of_two()
}

/// `v` if it is a power of two, otherwise the next power of two.
///
/// ```rust
/// use gmath_math::ceil_power_of_two;
///
/// assert_eq!(ceil_power_of_two(5u32), 8);
/// assert_eq!(ceil_power_of_two(8u32), 8);
/// assert_eq!(ceil_power_of_two(-5i32), -8);
/// assert_eq!(ceil_power_of_two(0u32), 0);
/// ```
#[inline]
pub fn ceil_power_of_two<T: PowerOfTwo>(v: T) -> T {
    v.ceil_power_of_two()
}

/// `v` if it is a power of two, otherwise the previous power of two.
#[inline]
pub fn floor_power_of_two<T: PowerOfTwo>(v: T) -> T {
    v.floor_power_of_two()
}

/// The nearer power of two; ties go to the smaller magnitude.
#[inline]
pub fn round_power_of_two<T: PowerOfTwo>(v: T) -> T {
    v.round_power_of_two()
}
