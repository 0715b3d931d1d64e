/*!
The rounding engine.

Reduces a coefficient to at most `P` significant decimal digits under one
of eight rounding modes, the way [`rfloat::RFloatContext::round_finalize`]
reduces a binary significand to a target precision: split off the digits
that will be discarded, decide from the rounding mode whether the kept
digits should be incremented, then renormalize if that increment produced
a carry into an extra digit.
*/

use crate::BigNat;

/// Rounding modes for [`Decimal`][crate::Decimal] coefficients.
///
/// Unlike the binary nearest/directed modes used elsewhere in this crate's
/// ancestry, these eight modes are exactly the ones the General Decimal
/// Arithmetic specification defines over decimal digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundingMode {
    /// Truncate: never increment the kept digits.
    Down,
    /// Away from zero: increment if any discarded digit is nonzero.
    Up,
    /// Increment (away from zero) only when the number is positive.
    Ceiling,
    /// Increment (away from zero) only when the number is negative.
    Floor,
    /// Increment if the leading discarded digit is `>= 5`.
    HalfUp,
    /// Increment if the leading discarded digit is `> 5`, or exactly `5`
    /// with further nonzero discarded digits.
    HalfDown,
    /// As `Up`, but only applied when the kept value's last digit would
    /// become `0` or `5`; otherwise truncates.
    ZeroFiveUp,
    /// As `HalfDown`, but an exact half increments toward an even last
    /// kept digit.
    HalfEven,
}

/// The outcome of reducing a coefficient to a target precision.
pub(crate) struct Rounded {
    pub coefficient: BigNat,
    pub exponent: i32,
    pub rounded: bool,
    pub inexact: bool,
}

/// Reduces `coefficient` (with the given `exponent` and `sign`) to at most
/// `precision` significant digits under `mode`.
///
/// If the coefficient already fits within `precision` digits, this is a
/// no-op; otherwise the low `digits(coefficient) - precision` digits are
/// discarded, the rounding mode decides whether to increment the kept
/// digits, and a carry out of the top digit (e.g. rounding `999` up at
/// precision 2) is renormalized by discarding one further digit and
/// bumping the exponent again.
pub(crate) fn round(
    coefficient: &BigNat,
    exponent: i32,
    sign: bool,
    precision: u32,
    mode: RoundingMode,
) -> Rounded {
    let d = coefficient.digits();
    if d <= precision {
        return Rounded {
            coefficient: coefficient.clone(),
            exponent,
            rounded: false,
            inexact: false,
        };
    }

    let k = d - precision;
    let (mut keep, discarded) = coefficient.split_pow10(k);
    let discarded_nonzero = !discarded.is_zero();

    // Leading discarded digit and whether anything follows it.
    let (leading_digit, trailing_nonzero) = if k == 0 {
        (0u32, false)
    } else {
        let (lead, rest) = discarded.split_pow10(k - 1);
        let lead_digit = lead.as_integer().to_u32().unwrap_or(0) % 10;
        (lead_digit, !rest.is_zero())
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

    let mut exp = exponent + k as i32;
    if increment {
        keep = keep.add(&BigNat::one());
        if keep.digits() > precision {
            // Carry propagated into an extra digit (e.g. 999 -> 1000 at
            // precision 2): shift once more and bump the exponent again.
            let (reduced, _) = keep.split_pow10(1);
            keep = reduced;
            exp += 1;
        }
    }

    Rounded {
        coefficient: keep,
        exponent: exp,
        rounded: true,
        inexact: discarded_nonzero,
    }
}
