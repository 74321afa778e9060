use crate::error::Error;
use crate::str::{fmt_fixed_point, parse_decimal_str};

use num_traits::{FromPrimitive, One, Zero};

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};
use core::str::FromStr;

/// `FixedDecimal` represents a fixed-point decimal number as a signed 64 bit
/// mantissa (the digits with the decimal point removed) and a count of
/// decimal places (how many of those digits sit right of the point).
/// `(12345, 2)` is `123.45`.
///
/// The arithmetic on this type intentionally reproduces the reference
/// benchmark generator rather than textbook decimal arithmetic:
///
/// * addition and subtraction combine raw mantissas at the larger places
///   count with **no rescaling** when the operands' places differ;
/// * multiplication truncates the raw product one digit at a time;
/// * division runs through single-precision floats, extra scaling included;
/// * mantissa overflow wraps silently, exactly like the reference's fixed
///   width integers.
///
/// Downstream consumers diff generated output textually against the
/// reference, so matching these quirks is the whole point of the type. Do
/// not "fix" them; a mathematically correct decimal belongs in a different
/// type.
///
/// `places` is stored verbatim and never validated. The reference leaves a
/// negative count unchecked, so this type does too; scaling loops simply
/// run zero times for it.
///
/// Equality and ordering are raw field comparisons (mantissa first, then
/// places): nothing in this arithmetic ever normalizes a value, so
/// comparison does not either. `(15, 1)` and `(150, 2)` render the same but
/// are distinct values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedDecimal {
    mantissa: i64,
    places: i32,
}

impl FixedDecimal {
    /// Zero at the canonical two places used by money columns (`0.00`).
    pub const ZERO: FixedDecimal = FixedDecimal::new(0, 2);
    /// One half (`0.50`).
    pub const ONE_HALF: FixedDecimal = FixedDecimal::new(50, 2);
    /// Nine percent (`0.09`), the reference's hard-coded tax rate.
    pub const NINE_PERCENT: FixedDecimal = FixedDecimal::new(9, 2);
    /// One hundred, pre-scaled: mantissa 10000 at 2 places (`100.00`).
    pub const ONE_HUNDRED: FixedDecimal = FixedDecimal::new(10_000, 2);
    /// One, pre-scaled: mantissa 100 at 2 places (`1.00`).
    pub const ONE: FixedDecimal = FixedDecimal::new(100, 2);

    /// Returns a `FixedDecimal` storing both fields verbatim. No
    /// validation, no normalization: the mantissa may overflow its nominal
    /// digit count and a negative places count is kept as-is.
    #[inline]
    #[must_use]
    pub const fn new(mantissa: i64, places: i32) -> FixedDecimal {
        FixedDecimal { mantissa, places }
    }

    /// Returns the integer `n` as a decimal with zero places.
    #[inline]
    #[must_use]
    pub const fn from_integer(n: i64) -> FixedDecimal {
        FixedDecimal::new(n, 0)
    }

    /// Returns the raw mantissa.
    #[inline]
    #[must_use]
    pub const fn mantissa(&self) -> i64 {
        self.mantissa
    }

    /// Returns the number of decimal places.
    #[inline]
    #[must_use]
    pub const fn places(&self) -> i32 {
        self.places
    }

    /// Multiplication with the reference's truncating rescale.
    ///
    /// The raw mantissa product (wrapping on overflow) lands at
    /// `a.places + b.places`; the excess over `max(a.places, b.places)` is
    /// shaved off with one truncating division by 10 per digit, matching
    /// the reference's loop rather than a single combined division.
    ///
    /// ```
    /// use rowgen_decimal::FixedDecimal;
    ///
    /// let a: FixedDecimal = "1.5".parse().unwrap();
    /// let b: FixedDecimal = "2.00".parse().unwrap();
    /// assert_eq!(a.truncating_mul(b).to_string(), "3.00");
    /// ```
    #[must_use]
    pub fn truncating_mul(self, other: FixedDecimal) -> FixedDecimal {
        let places = self.places.max(other.places);
        let mut mantissa = self.mantissa.wrapping_mul(other.mantissa);
        let excess = self.places + other.places - places;
        for _ in 0..excess {
            mantissa /= 10;
        }
        FixedDecimal { mantissa, places }
    }

    /// Division through single-precision floats, exactly as the reference
    /// does it.
    ///
    /// Both mantissas are taken to `f32`. The dividend is scaled up by a
    /// factor of 10 per place needed to reach the common places count,
    /// then by another factor of 10 per unit of the result's places count;
    /// the divisor is only scaled to the common count. The `f32` quotient
    /// is truncated through a 32 bit integer and becomes the result
    /// mantissa.
    ///
    /// A zero divisor mantissa is not special-cased: the quotient is
    /// infinity or NaN and the float-to-int conversion clamps it (to
    /// `i32::MAX`/`i32::MIN`) or zeroes it, which is what the reference's
    /// conversion does as well.
    #[must_use]
    pub fn float_mediated_div(self, other: FixedDecimal) -> FixedDecimal {
        let places = self.places.max(other.places);
        let mut dividend = self.mantissa as f32;
        for _ in 0..(places - self.places) {
            dividend *= 10.0;
        }
        for _ in 0..places {
            dividend *= 10.0;
        }
        let mut divisor = other.mantissa as f32;
        for _ in 0..(places - other.places) {
            divisor *= 10.0;
        }
        let quotient = (dividend / divisor) as i32;
        FixedDecimal {
            mantissa: quotient as i64,
            places,
        }
    }
}

macro_rules! impl_from {
    ($T:ty, $from_ty:path) => {
        impl From<$T> for FixedDecimal {
            #[inline]
            fn from(t: $T) -> FixedDecimal {
                $from_ty(t).unwrap()
            }
        }
    };
}

impl_from!(i8, FromPrimitive::from_i8);
impl_from!(i16, FromPrimitive::from_i16);
impl_from!(i32, FromPrimitive::from_i32);
impl_from!(i64, FromPrimitive::from_i64);
impl_from!(u8, FromPrimitive::from_u8);
impl_from!(u16, FromPrimitive::from_u16);
impl_from!(u32, FromPrimitive::from_u32);

macro_rules! forward_val_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                (&self).$method(&other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<$res> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                self.$method(&other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<&'a $res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: &$res) -> $res {
                (&self).$method(other)
            }
        }
    };
}

macro_rules! forward_all_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        forward_val_val_binop!(impl $imp for $res, $method);
        forward_ref_val_binop!(impl $imp for $res, $method);
        forward_val_ref_binop!(impl $imp for $res, $method);
    };
}

forward_all_binop!(impl Add for FixedDecimal, add);

impl<'a, 'b> Add<&'b FixedDecimal> for &'a FixedDecimal {
    type Output = FixedDecimal;

    // Raw mantissa addition at the larger places count. Operands with
    // mismatched places are NOT brought to a common scale first; the
    // reference never rescales and conformance depends on that.
    #[inline]
    fn add(self, other: &FixedDecimal) -> FixedDecimal {
        FixedDecimal {
            mantissa: self.mantissa.wrapping_add(other.mantissa),
            places: self.places.max(other.places),
        }
    }
}

forward_all_binop!(impl Sub for FixedDecimal, sub);

impl<'a, 'b> Sub<&'b FixedDecimal> for &'a FixedDecimal {
    type Output = FixedDecimal;

    #[inline]
    fn sub(self, other: &FixedDecimal) -> FixedDecimal {
        FixedDecimal {
            mantissa: self.mantissa.wrapping_sub(other.mantissa),
            places: self.places.max(other.places),
        }
    }
}

forward_all_binop!(impl Mul for FixedDecimal, mul);

impl<'a, 'b> Mul<&'b FixedDecimal> for &'a FixedDecimal {
    type Output = FixedDecimal;

    #[inline]
    fn mul(self, other: &FixedDecimal) -> FixedDecimal {
        self.truncating_mul(*other)
    }
}

forward_all_binop!(impl Div for FixedDecimal, div);

impl<'a, 'b> Div<&'b FixedDecimal> for &'a FixedDecimal {
    type Output = FixedDecimal;

    #[inline]
    fn div(self, other: &FixedDecimal) -> FixedDecimal {
        self.float_mediated_div(*other)
    }
}

impl Neg for FixedDecimal {
    type Output = FixedDecimal;

    #[inline]
    fn neg(self) -> FixedDecimal {
        FixedDecimal {
            mantissa: self.mantissa.wrapping_neg(),
            places: self.places,
        }
    }
}

impl<'a> Neg for &'a FixedDecimal {
    type Output = FixedDecimal;

    #[inline]
    fn neg(self) -> FixedDecimal {
        -*self
    }
}

impl Zero for FixedDecimal {
    // The additive identity under raw mantissa arithmetic is zero at zero
    // places, not the pre-scaled `ZERO` constant.
    #[inline]
    fn zero() -> FixedDecimal {
        FixedDecimal::new(0, 0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.mantissa == 0
    }
}

impl One for FixedDecimal {
    #[inline]
    fn one() -> FixedDecimal {
        FixedDecimal::new(1, 0)
    }
}

impl FromPrimitive for FixedDecimal {
    #[inline]
    fn from_i64(n: i64) -> Option<FixedDecimal> {
        Some(FixedDecimal::from_integer(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<FixedDecimal> {
        i64::try_from(n).ok().map(FixedDecimal::from_integer)
    }
}

impl Default for FixedDecimal {
    #[inline]
    fn default() -> FixedDecimal {
        Zero::zero()
    }
}

impl FromStr for FixedDecimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<FixedDecimal, Error> {
        parse_decimal_str(s)
    }
}

impl fmt::Display for FixedDecimal {
    /// Stringifies the way the reference does: the mantissa as `f64`,
    /// divided by `10.0` once per place, rendered with exactly `places`
    /// fractional digits and a `.` separator regardless of locale. Lossy
    /// by design; see [`FixedDecimal`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_fixed_point(self, f)
    }
}
