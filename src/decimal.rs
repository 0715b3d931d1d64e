// decimal.rs
//
// The Decimal type: (-1)^sign * coefficient * 10^exponent, plus the
// special values +/-Infinity and NaN.
//

use std::marker::PhantomData;

use crate::hook::NoOp;
use crate::round::{self, RoundingMode};
use crate::{BigNat, Flags, Hook, Number};

/// Which of the three classes a [`Decimal`] belongs to.
///
/// NaN and infinity ignore `coefficient`/`exponent` for value but retain
/// `sign`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    Finite,
    Infinity,
    Nan,
}

/// An exact base-10 number: `(-1)^sign * coefficient * 10^exponent`, or one
/// of the special values `+/-Infinity`, `NaN`.
///
/// `H` is the compile-time [`Hook`] policy parameterizing precision,
/// rounding mode, exponent bounds, and exceptional-condition callbacks.
/// Most code can use the crate-level [`Decimal`] alias for the default
/// [`NoOp`] hook, which rounds to 9 significant digits under `HalfUp` and
/// fires no callbacks.
///
/// Following `rfloat::RFloat`'s lead (the teacher's closest analogue),
/// `Decimal` canonicalizes nothing implicitly: `+0` and `-0` remain
/// distinct representations, even though they compare numerically equal.
#[derive(Clone, Debug)]
pub struct Decimal<H: Hook = NoOp> {
    pub(crate) sign: bool,
    pub(crate) kind: Kind,
    pub(crate) coefficient: BigNat,
    pub(crate) exponent: i32,
    /// The eight condition flags raised by the operation that produced
    /// this value. Not propagated from operands onto a result.
    pub flags: Flags,
    pub(crate) _hook: PhantomData<H>,
}

/// Outcome of clamping a rounded coefficient into a Hook's exponent bounds.
pub(crate) enum Clamped {
    Finite(BigNat, i32),
    Infinite,
}

impl<H: Hook> Decimal<H> {
    /// Constructs the canonical positive zero.
    pub fn zero() -> Self {
        Self::finite_raw(false, BigNat::zero(), 0)
    }

    /// Constructs the canonical one.
    pub fn one() -> Self {
        Self::finite_raw(false, BigNat::one(), 0)
    }

    /// Constructs a quiet NaN.
    pub fn nan() -> Self {
        Decimal {
            sign: false,
            kind: Kind::Nan,
            coefficient: BigNat::zero(),
            exponent: 0,
            flags: Flags::new(),
            _hook: PhantomData,
        }
    }

    /// Constructs a signed infinity.
    pub fn infinity(sign: bool) -> Self {
        Decimal {
            sign,
            kind: Kind::Infinity,
            coefficient: BigNat::zero(),
            exponent: 0,
            flags: Flags::new(),
            _hook: PhantomData,
        }
    }

    /// The largest finite value representable under this Hook:
    /// `(10^P - 1) * 10^maxExponent`.
    pub fn max_value() -> Self {
        let nines = "9".repeat(H::PRECISION as usize);
        let coefficient: BigNat = nines.parse().expect("digit string always parses");
        Decimal {
            sign: false,
            kind: Kind::Finite,
            coefficient,
            exponent: H::MAX_EXPONENT,
            flags: Flags::new(),
            _hook: PhantomData,
        }
    }

    /// The smallest (most negative) finite value representable under this
    /// Hook: `-1 * 10^minExponent`.
    pub fn min_value() -> Self {
        Decimal {
            sign: true,
            kind: Kind::Finite,
            coefficient: BigNat::one(),
            exponent: H::MIN_EXPONENT,
            flags: Flags::new(),
            _hook: PhantomData,
        }
    }

    /// Constructs a finite `Decimal` from a raw, possibly over-precision
    /// sign/coefficient/exponent triple, applying the Rounder and the
    /// Hook's exponent bounds exactly as every arithmetic operation and
    /// the parser do.
    pub(crate) fn finite_raw(sign: bool, coefficient: BigNat, exponent: i32) -> Self {
        let r = round::round(
            &coefficient,
            exponent,
            sign,
            H::PRECISION,
            H::ROUNDING_MODE,
        );
        let mut flags = Flags::new();
        flags.rounded = r.rounded;
        flags.inexact = r.inexact;

        let clamped = Self::clamp_exponent(sign, r.coefficient, r.exponent, &mut flags);

        let result = match clamped {
            Clamped::Infinite => Decimal {
                sign,
                kind: Kind::Infinity,
                coefficient: BigNat::zero(),
                exponent: 0,
                flags,
                _hook: PhantomData,
            },
            Clamped::Finite(coefficient, exponent) => Decimal {
                sign,
                kind: Kind::Finite,
                coefficient,
                exponent,
                flags,
                _hook: PhantomData,
            },
        };

        // Inexact takes precedence, in ordering, over Rounded.
        if result.flags.inexact {
            H::on_inexact(&result);
        }
        if result.flags.rounded {
            H::on_rounded(&result);
        }
        if result.flags.overflow {
            H::on_overflow(&result);
        }
        if result.flags.underflow {
            H::on_underflow(&result);
        }
        if result.flags.subnormal {
            H::on_subnormal(&result);
        }
        if result.flags.clamped {
            H::on_clamped(&result);
        }
        result
    }

    /// Enforces `[MIN_EXPONENT, MAX_EXPONENT]` on an already-rounded
    /// coefficient, per the Open Question resolution in DESIGN.md: these
    /// flags are not left as stubs.
    fn clamp_exponent(sign: bool, coefficient: BigNat, exponent: i32, flags: &mut Flags) -> Clamped {
        if coefficient.is_zero() {
            let mut exp = exponent;
            if exp > H::MAX_EXPONENT {
                exp = H::MAX_EXPONENT;
                flags.clamped = true;
            } else if exp < H::MIN_EXPONENT {
                exp = H::MIN_EXPONENT;
                flags.clamped = true;
            }
            return Clamped::Finite(coefficient, exp);
        }

        if exponent > H::MAX_EXPONENT {
            flags.overflow = true;
            flags.inexact = true;
            flags.rounded = true;
            let to_infinity = match H::ROUNDING_MODE {
                RoundingMode::Down => false,
                RoundingMode::Ceiling => !sign,
                RoundingMode::Floor => sign,
                _ => true,
            };
            return if to_infinity {
                Clamped::Infinite
            } else {
                let nines = "9".repeat(H::PRECISION as usize);
                let max_coeff: BigNat = nines.parse().expect("digit string always parses");
                Clamped::Finite(max_coeff, H::MAX_EXPONENT)
            };
        }

        if exponent < H::MIN_EXPONENT {
            let shift = (H::MIN_EXPONENT - exponent) as u32;
            let digits = coefficient.digits();
            flags.subnormal = true;
            if shift >= digits {
                flags.underflow = true;
                flags.inexact = true;
                flags.rounded = true;
                return Clamped::Finite(BigNat::zero(), H::MIN_EXPONENT);
            }
            let target_precision = digits - shift;
            let r = round::round(&coefficient, exponent, sign, target_precision, H::ROUNDING_MODE);
            flags.rounded = flags.rounded || r.rounded;
            if r.inexact {
                flags.inexact = true;
                flags.underflow = true;
            }
            return Clamped::Finite(r.coefficient, r.exponent);
        }

        Clamped::Finite(coefficient, exponent)
    }

    /// True if this value is NaN.
    pub fn is_nan(&self) -> bool {
        self.kind == Kind::Nan
    }

    /// True if this value is `+Infinity` or `-Infinity`.
    pub fn is_infinity(&self) -> bool {
        self.kind == Kind::Infinity
    }

    /// The absolute value. NaN maps to NaN; `-0` maps to `+0`.
    pub fn abs(&self) -> Self {
        let mut out = self.clone();
        out.sign = false;
        out.flags = Flags::new();
        out
    }

    /// A mutable copy preserving flags.
    pub fn dup(&self) -> Self {
        self.clone()
    }

    /// An immutable copy preserving flags.
    pub fn idup(&self) -> Self {
        self.clone()
    }

    /// Clears every condition flag.
    pub fn reset_flags(&mut self) {
        self.flags.reset();
    }
}

impl<H: Hook> Default for Decimal<H> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<H: Hook> Number for Decimal<H> {
    fn radix() -> usize {
        10
    }

    fn sign(&self) -> bool {
        self.sign
    }

    fn exp(&self) -> Option<i32> {
        match self.kind {
            Kind::Finite => Some(self.exponent),
            _ => None,
        }
    }

    fn e(&self) -> Option<i32> {
        match self.kind {
            Kind::Finite if !self.coefficient.is_zero() => {
                Some(self.exponent + self.coefficient.digits() as i32 - 1)
            }
            _ => None,
        }
    }

    fn n(&self) -> Option<i32> {
        self.exp()
    }

    fn c(&self) -> Option<BigNat> {
        match self.kind {
            Kind::Finite => Some(self.coefficient.clone()),
            _ => None,
        }
    }

    fn m(&self) -> Option<rug::Integer> {
        match self.kind {
            Kind::Finite => {
                let c = self.coefficient.as_integer().clone();
                Some(if self.sign { -c } else { c })
            }
            _ => None,
        }
    }

    fn p(&self) -> usize {
        match self.kind {
            Kind::Finite => self.coefficient.digits() as usize,
            _ => 0,
        }
    }

    fn is_nar(&self) -> bool {
        !matches!(self.kind, Kind::Finite)
    }

    fn is_finite(&self) -> bool {
        self.kind == Kind::Finite
    }

    fn is_infinite(&self) -> bool {
        self.is_infinity()
    }

    fn is_zero(&self) -> bool {
        self.kind == Kind::Finite && self.coefficient.is_zero()
    }

    fn is_negative(&self) -> Option<bool> {
        match self.kind {
            Kind::Nan => None,
            Kind::Finite if self.coefficient.is_zero() => None,
            _ => Some(self.sign),
        }
    }

    fn is_numerical(&self) -> bool {
        self.kind != Kind::Nan
    }
}
