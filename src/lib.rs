/*!
`decnum` is an exact base-10 arithmetic library implementing the General
Decimal Arithmetic Specification (IBM/Speleotrove): a **Decimal** value type
representing `(-1)^sign * coefficient * 10^exponent` together with signed
zero, signed infinity, and NaN, with arithmetic, comparison, parsing, and
formatting semantics suited to financial and accounting work where binary
floating point is unacceptable.

This is the API documentation.

[`Decimal`] is generic over a compile-time [`Hook`]: a policy bundling
precision, rounding mode, exponent bounds, and an optional callback per
exceptional condition. Four Hooks are built in — [`hook::NoOp`] (the
default), [`hook::Abort`], [`hook::Throw`], and [`hook::HighPrecision`] —
and users may define their own by implementing [`Hook`].

Arithmetic (`+ - * /`), comparison (a total order extending numeric
comparison to NaN and infinity), unary negation, and conversions to/from
built-in integers, floats, and strings are all implemented directly on
[`Decimal`]; see the [`ops`], [`cmp`], and [`convert`] modules.
*/

pub mod bignat;
pub mod cmp;
pub mod convert;
pub(crate) mod decimal;
pub mod flags;
pub mod format;
pub mod hook;
pub mod number;
pub mod ops;
pub mod parse;
pub mod round;

pub use crate::bignat::BigNat;
pub use crate::decimal::Decimal;
pub use crate::flags::Flags;
pub use crate::hook::{Abort, DecimalError, HighPrecision, Hook, NoOp, Throw};
pub use crate::number::Number;
pub use crate::round::RoundingMode;
