//! Integer abstraction.
//!
//! [`Integer`] exposes the range and float conversion of the primitive
//! integer types. It backs component normalization (`comp_normalize`,
//! `comp_scale`) in `gmath-math`, which maps integer channels to and from
//! normalized floats.
//!
//! ```rust
//! use gmath_core::Integer;
//!
//! assert_eq!(<u8 as Integer>::MAX.to_f32(), 255.0);
//! assert!(<i16 as Integer>::SIGNED);
//! assert_eq!(u8::from_f32(300.0), 255); // saturating
//! ```

use std::fmt::Debug;

/// A primitive integer type.
pub trait Integer: Copy + PartialOrd + Debug + Default + Send + Sync + 'static {
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;
    /// `true` for two's complement signed types.
    const SIGNED: bool;
    /// Width of the type in bits.
    const BITS: u32;

    /// Converts to `f32` (rounding to nearest for wide types).
    fn to_f32(self) -> f32;

    /// Converts from `f32`, truncating toward zero and saturating at the
    /// type bounds. NaN maps to zero.
    fn from_f32(v: f32) -> Self;
}

macro_rules! impl_integer {
    ($($t:ty => $signed:literal),+ $(,)?) => {
        $(
            impl Integer for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const SIGNED: bool = $signed;
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn to_f32(self) -> f32 {
                    self as f32
                }

                #[inline]
                fn from_f32(v: f32) -> Self {
                    v as $t
                }
            }
        )+
    };
}

impl_integer! {
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
    usize => false,
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    isize => true,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(<u8 as Integer>::MAX, 255);
        assert_eq!(<i8 as Integer>::MIN, -128);
        assert_eq!(<u16 as Integer>::BITS, 16);
        assert!(!<u32 as Integer>::SIGNED);
        assert!(<i64 as Integer>::SIGNED);
    }

    #[test]
    fn test_from_f32_saturates() {
        assert_eq!(u8::from_f32(-4.0), 0);
        assert_eq!(u8::from_f32(1e9), 255);
        assert_eq!(i8::from_f32(-1e9), -128);
        assert_eq!(i32::from_f32(f32::NAN), 0);
        assert_eq!(i16::from_f32(12.9), 12);
    }
}
