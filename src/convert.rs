/*!
Conversions to/from built-in numeric types.

Construction from a machine integer is exact and infallible. Construction
from a float is documented as lossy: a binary float is reduced to a
coefficient by repeated multiplication by ten until its fractional part
vanishes or a double's ~17-significant-digit budget is exhausted,
whichever comes first — an unbounded version of this loop would spin
forever on an irrational-looking binary fraction, so the iteration count
is capped at the precision a double can actually carry.

Conversion to a machine integer rounds to the nearest integer under the
Hook's rounding mode (the same Rounder used everywhere else), then range-
checks against the target type; it raises [`DecimalError::ConversionLoss`]
only for NaN, infinity, or an out-of-range magnitude.
*/

use crate::decimal::Kind;
use crate::hook::DecimalError;
use crate::round::RoundingMode;
use crate::{BigNat, Decimal, Hook};

impl<H: Hook> From<i64> for Decimal<H> {
    fn from(val: i64) -> Self {
        let sign = val < 0;
        let coefficient = BigNat::from_u64(val.unsigned_abs());
        Decimal::<H>::finite_raw(sign, coefficient, 0)
    }
}

impl<H: Hook> From<u64> for Decimal<H> {
    fn from(val: u64) -> Self {
        Decimal::<H>::finite_raw(false, BigNat::from_u64(val), 0)
    }
}

impl<H: Hook> From<i32> for Decimal<H> {
    fn from(val: i32) -> Self {
        Decimal::<H>::from(val as i64)
    }
}

impl<H: Hook> From<u32> for Decimal<H> {
    fn from(val: u32) -> Self {
        Decimal::<H>::from(val as u64)
    }
}

impl<H: Hook> From<f64> for Decimal<H> {
    fn from(val: f64) -> Self {
        if val.is_nan() {
            return Decimal::nan();
        }
        if val.is_infinite() {
            return Decimal::infinity(val.is_sign_negative());
        }
        let sign = val.is_sign_negative();
        let mut magnitude = val.abs();
        let mut exponent: i32 = 0;
        // Bounded at a double's significant-digit budget: most binary
        // fractions never reach an exact zero fractional part.
        for _ in 0..17 {
            if magnitude.fract() == 0.0 {
                break;
            }
            magnitude *= 10.0;
            exponent -= 1;
        }
        let coefficient = BigNat::from_u64(magnitude as u64);
        Decimal::<H>::finite_raw(sign, coefficient, exponent)
    }
}

impl<H: Hook> From<f32> for Decimal<H> {
    fn from(val: f32) -> Self {
        Decimal::<H>::from(val as f64)
    }
}

/// Rounds `coefficient * 10^exponent` to the nearest multiple of
/// `10^target_exponent` under `mode`, treating `shift` digit positions as
/// discarded even when the coefficient itself has fewer actual digits than
/// `shift` (the missing high positions are implicit zeros). Used only for
/// integer conversion, where rounding is positional rather than
/// significant-digit-based.
fn round_to_exponent(
    coefficient: &BigNat,
    exponent: i32,
    sign: bool,
    target_exponent: i32,
    mode: RoundingMode,
) -> BigNat {
    if exponent >= target_exponent {
        return coefficient.mul_pow10((exponent - target_exponent) as u32);
    }
    let shift = (target_exponent - exponent) as u32;
    let digits = coefficient.digits();

    let (mut keep, discarded) = if shift >= digits {
        (BigNat::zero(), coefficient.clone())
    } else {
        coefficient.split_pow10(shift)
    };

    let discarded_nonzero = !discarded.is_zero();
    let discarded_digits = discarded.digits();

    let (leading_digit, trailing_nonzero) = if discarded.is_zero() {
        (0u32, false)
    } else if discarded_digits == shift {
        let (lead, rest) = discarded.split_pow10(shift - 1);
        (lead.as_integer().to_u32_wrapping() % 10, !rest.is_zero())
    } else {
        // `discarded`'s own leading digit sits below position `shift - 1`;
        // the true leading digit of the shift-wide window is an implicit 0.
        (0u32, true)
    };

    let increment = match mode {
        RoundingMode::Down => false,
        RoundingMode::Up => discarded_nonzero,
        RoundingMode::Ceiling => discarded_nonzero && !sign,
        RoundingMode::Floor => discarded_nonzero && sign,
        RoundingMode::HalfUp => leading_digit >= 5,
        RoundingMode::HalfDown => leading_digit > 5 || (leading_digit == 5 && trailing_nonzero),
        RoundingMode::HalfEven => {
            if leading_digit > 5 || (leading_digit == 5 && trailing_nonzero) {
                true
            } else if leading_digit == 5 {
                keep.last_digit_is_odd()
            } else {
                false
            }
        }
        RoundingMode::ZeroFiveUp => {
            let last = keep.as_integer().to_u32_wrapping() % 10;
            discarded_nonzero && (last == 0 || last == 5)
        }
    };

    if increment {
        keep = keep.add(&BigNat::one());
    }
    keep
}

fn to_integer_magnitude<H: Hook>(d: &Decimal<H>) -> Option<rug::Integer> {
    if d.kind != Kind::Finite {
        return None;
    }
    let rounded = round_to_exponent(&d.coefficient, d.exponent, d.sign, 0, H::ROUNDING_MODE);
    Some(rounded.as_integer().clone())
}

macro_rules! impl_try_into_signed {
    ($t:ty, $to_method:ident) => {
        impl<H: Hook> TryFrom<&Decimal<H>> for $t {
            type Error = DecimalError;
            fn try_from(d: &Decimal<H>) -> Result<$t, DecimalError> {
                let magnitude = to_integer_magnitude(d).ok_or(DecimalError::ConversionLoss)?;
                let signed = if d.sign { -magnitude } else { magnitude };
                signed.$to_method().ok_or(DecimalError::ConversionLoss)
            }
        }
    };
}

macro_rules! impl_try_into_unsigned {
    ($t:ty, $to_method:ident) => {
        impl<H: Hook> TryFrom<&Decimal<H>> for $t {
            type Error = DecimalError;
            fn try_from(d: &Decimal<H>) -> Result<$t, DecimalError> {
                if d.sign && d.kind == Kind::Finite && !d.coefficient.is_zero() {
                    return Err(DecimalError::ConversionLoss);
                }
                let magnitude = to_integer_magnitude(d).ok_or(DecimalError::ConversionLoss)?;
                magnitude.$to_method().ok_or(DecimalError::ConversionLoss)
            }
        }
    };
}

impl_try_into_signed!(i64, to_i64);
impl_try_into_signed!(i32, to_i32);
impl_try_into_unsigned!(u64, to_u64);
impl_try_into_unsigned!(u32, to_u32);

impl<H: Hook> Decimal<H> {
    /// Best-effort conversion to `f64`. NaN and infinity map to their IEEE
    /// counterparts; finite values may lose precision once `coefficient`
    /// exceeds a double's ~17 significant digits.
    pub fn to_f64(&self) -> f64 {
        match self.kind {
            Kind::Nan => f64::NAN,
            Kind::Infinity => {
                if self.sign {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            }
            Kind::Finite => {
                let magnitude = self.coefficient.as_integer().to_f64() * 10f64.powi(self.exponent);
                if self.sign {
                    -magnitude
                } else {
                    magnitude
                }
            }
        }
    }

    /// Best-effort conversion to `f32`, via [`Decimal::to_f64`].
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// `true` iff `|x| >= 1`, or `x` is NaN or infinite.
    pub fn to_bool(&self) -> bool {
        if self.kind != Kind::Finite {
            return true;
        }
        self.abs() >= Decimal::<H>::one()
    }
}
