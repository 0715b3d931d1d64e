// number.rs
//
// Number trait
//

use crate::BigNat;

/// The "digital" number representing a (projective) real number format.
///
/// All computer number systems share some characteristics. They all can be
/// represented by a finite-precision number in scientific notation:
/// `(-1)^s * c * b^exp` where `s` is the sign, `c` is the integer
/// significand, `b` is the radix, and `exp` is the exponent. Specifically,
/// `s` is either `0` or `1`, `c` is non-negative, and `b` is positive.
/// Number systems may encode non-real numbers, notably infinity or NaN.
///
/// This crate has exactly one number format, so `radix` is always `10` and
/// every implementor is a single-format `Decimal<H>`; the trait is kept
/// general in shape so the rest of the crate (and any future format) reads
/// against one small vocabulary of accessors rather than `Decimal`'s own
/// fields directly.
pub trait Number {
    /// Returns the radix of a number. It must be strictly positive.
    fn radix() -> usize;

    /// Returns true if the number's sign bit is true. For number formats
    /// with no notion of sign bit, the result will always be false.
    fn sign(&self) -> bool;

    /// Viewing this number as `(-1)^s * c * b^exp` where `c` is an integer,
    /// returns `exp`. Only well-defined for finite numbers.
    fn exp(&self) -> Option<i32>;

    /// Viewing this number as `(-1)^s * f * b^e` where `f` is a radix-`b`
    /// fraction between 1 and `b`, returns the exponent `e`. Only
    /// well-defined for finite, non-zero numbers.
    fn e(&self) -> Option<i32>;

    /// The "least absolute exponent", the place below the least significant
    /// digit of the significand. Always equal to `self.exp()`. Only
    /// well-defined for finite numbers.
    fn n(&self) -> Option<i32>;

    /// Viewing this number as `(-1)^s * c * b^exp` where `c` is an integer,
    /// returns `c`. Only well-defined for finite numbers.
    fn c(&self) -> Option<BigNat>;

    /// Viewing this number as `(-1)^s * c * b^exp` where `c` is an integer,
    /// returns `(-1)^s * c`, the signed significand. Only well-defined for
    /// finite numbers.
    fn m(&self) -> Option<rug::Integer>;

    /// Precision of the significand: the number of radix digits needed to
    /// encode `c`. For values that do not encode a finite number, the
    /// result is 0.
    fn p(&self) -> usize;

    /// Returns true if this number is not a real number: NaN or +/-Infinity.
    fn is_nar(&self) -> bool;

    /// Returns true if this number is finite.
    fn is_finite(&self) -> bool;

    /// Returns true if this number is infinite.
    fn is_infinite(&self) -> bool;

    /// Returns true if this number is zero.
    fn is_zero(&self) -> bool;

    /// Returns true if this number is negative. Not always well-defined, so
    /// the result is an `Option`; not necessarily the same as the sign bit
    /// (`-0` and `+0` both answer `None` here).
    fn is_negative(&self) -> Option<bool>;

    /// Returns true if this number represents a numerical value: any
    /// finite number or infinity, but not NaN.
    fn is_numerical(&self) -> bool;
}
