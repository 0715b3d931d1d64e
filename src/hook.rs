/*!
The Hook policy.

A [`Hook`] is a compile-time policy bundle: precision, rounding mode,
exponent bounds, and an optional callback per exceptional condition. It
generalizes the teacher's [`RoundingContext`][crate::round] trait — a
runtime policy object parameterizing a number format — into a marker type
parameter on [`Decimal`][crate::Decimal]; either a runtime context or a
compile-time marker is a valid way to carry this policy, as long as an
operation consults exactly one Hook (the left operand's) and the result
carries that same Hook.
*/

use std::fmt;

use crate::{Decimal, RoundingMode};

/// Compile-time policy for a [`Decimal`].
///
/// Implementors are zero-sized marker types; all state lives in associated
/// constants and default-implemented callback methods, so `Decimal<H>` for
/// different `H` are distinct, monomorphized types with no runtime
/// indirection.
pub trait Hook: Clone + fmt::Debug + Default + 'static {
    /// Maximum number of significant decimal digits in a result
    /// coefficient. Must satisfy `2 <= PRECISION`.
    const PRECISION: u32;

    /// The rounding mode applied after every arithmetic operation.
    const ROUNDING_MODE: RoundingMode;

    /// Smallest exponent a finite, non-zero result may carry before
    /// `underflow`/`subnormal` handling applies.
    const MIN_EXPONENT: i32 = -999;

    /// Largest exponent a finite, non-zero result may carry before
    /// `overflow`/`clamped` handling applies.
    const MAX_EXPONENT: i32 = 999;

    /// Invoked when an operation clamps an exponent to fit
    /// `[MIN_EXPONENT, MAX_EXPONENT]` without losing significant digits.
    fn on_clamped(_result: &Decimal<Self>) {}

    /// Invoked when a division has a zero divisor.
    fn on_division_by_zero(_result: &Decimal<Self>) {}

    /// Invoked when rounding discarded a nonzero digit.
    fn on_inexact(_result: &Decimal<Self>) {}

    /// Invoked on a malformed parse, `Inf - Inf`, `0 * Inf`, `Inf / Inf`,
    /// or any operation touching a NaN.
    fn on_invalid_operation(_result: &Decimal<Self>) {}

    /// Invoked when a result's exponent would exceed `MAX_EXPONENT`.
    fn on_overflow(_result: &Decimal<Self>) {}

    /// Invoked when rounding discarded any digit (zero or not).
    fn on_rounded(_result: &Decimal<Self>) {}

    /// Invoked when a result's coefficient has fewer than `PRECISION`
    /// digits because its exponent was clamped to `MIN_EXPONENT`.
    fn on_subnormal(_result: &Decimal<Self>) {}

    /// Invoked when a result's exponent would fall below `MIN_EXPONENT`
    /// and the result loses significance as a consequence.
    fn on_underflow(_result: &Decimal<Self>) {}
}

/// Only sets flags; no hook fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoOp;

impl Hook for NoOp {
    const PRECISION: u32 = 9;
    const ROUNDING_MODE: RoundingMode = RoundingMode::HalfUp;
}

/// Halts the program on any exceptional condition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Abort;

impl Hook for Abort {
    const PRECISION: u32 = 9;
    const ROUNDING_MODE: RoundingMode = RoundingMode::HalfUp;

    fn on_clamped(result: &Decimal<Self>) {
        panic!("clamped: {result}");
    }
    fn on_division_by_zero(result: &Decimal<Self>) {
        panic!("division-by-zero: {result}");
    }
    fn on_invalid_operation(result: &Decimal<Self>) {
        panic!("invalid-operation: {result}");
    }
    fn on_overflow(result: &Decimal<Self>) {
        panic!("overflow: {result}");
    }
    fn on_subnormal(result: &Decimal<Self>) {
        panic!("subnormal: {result}");
    }
    fn on_underflow(result: &Decimal<Self>) {
        panic!("underflow: {result}");
    }
}

/// `Abort`'s precision (9) raised to 64 significant digits; otherwise
/// identical semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HighPrecision;

impl Hook for HighPrecision {
    const PRECISION: u32 = 64;
    const ROUNDING_MODE: RoundingMode = RoundingMode::HalfUp;

    fn on_clamped(result: &Decimal<Self>) {
        panic!("clamped: {result}");
    }
    fn on_division_by_zero(result: &Decimal<Self>) {
        panic!("division-by-zero: {result}");
    }
    fn on_invalid_operation(result: &Decimal<Self>) {
        panic!("invalid-operation: {result}");
    }
    fn on_overflow(result: &Decimal<Self>) {
        panic!("overflow: {result}");
    }
    fn on_subnormal(result: &Decimal<Self>) {
        panic!("subnormal: {result}");
    }
    fn on_underflow(result: &Decimal<Self>) {
        panic!("underflow: {result}");
    }
}

/// Raises a typed [`DecimalError`] on any exceptional condition.
///
/// Because arithmetic operators must return a plain `Decimal` rather than
/// a `Result` (`+`/`-`/`*`/`/` would otherwise be unusable through
/// `std::ops`), a `Throw` callback reports its error the same way Rust
/// reports any other unrecoverable control-flow exit from the middle of a
/// call: it unwinds, carrying a typed payload via [`std::panic::panic_any`]
/// rather than a plain string, so callers that wrap a `Throw` computation
/// in `std::panic::catch_unwind` can downcast the payload back to a
/// [`DecimalError`]. See DESIGN.md for this decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Throw;

impl Hook for Throw {
    const PRECISION: u32 = 9;
    const ROUNDING_MODE: RoundingMode = RoundingMode::HalfUp;

    fn on_division_by_zero(_result: &Decimal<Self>) {
        std::panic::panic_any(DecimalError::DivisionByZero);
    }
    fn on_invalid_operation(_result: &Decimal<Self>) {
        std::panic::panic_any(DecimalError::InvalidOperation);
    }
    fn on_overflow(_result: &Decimal<Self>) {
        std::panic::panic_any(DecimalError::Overflow);
    }
    fn on_underflow(_result: &Decimal<Self>) {
        std::panic::panic_any(DecimalError::Underflow);
    }
}

/// Typed errors raised by the [`Throw`] hook and by checked integer
/// conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecimalError {
    /// A division had a zero divisor.
    DivisionByZero,
    /// A malformed parse, an indeterminate operation (`Inf - Inf`, `0 *
    /// Inf`, `Inf / Inf`), or an operation touching a NaN.
    InvalidOperation,
    /// A result's exponent exceeded the Hook's `MAX_EXPONENT`.
    Overflow,
    /// A result's exponent fell below the Hook's `MIN_EXPONENT`.
    Underflow,
    /// A conversion to a machine integer lost information (NaN, infinite,
    /// fractional, or out of the target type's range).
    ConversionLoss,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::DivisionByZero => write!(f, "division by zero"),
            DecimalError::InvalidOperation => write!(f, "invalid operation"),
            DecimalError::Overflow => write!(f, "overflow"),
            DecimalError::Underflow => write!(f, "underflow"),
            DecimalError::ConversionLoss => write!(f, "lossy conversion to integer"),
        }
    }
}

impl std::error::Error for DecimalError {}
