/*!
Total-order comparison, grounded on `rfloat::RFloat`'s
`PartialOrd` impl — the teacher's only number format that, like this one,
has to rank special values alongside ordinary magnitudes rather than treat
them as incomparable.

Ordinary IEEE-754 comparison is a partial order: NaN compares unequal and
unordered to everything, including itself. This component instead imposes
`-Infinity < -NaN < NaN < every finite number < +Infinity`, with `-NaN =
-NaN` and `NaN = NaN`, so a slice of `Decimal` can be sorted with a plain
`Ord` rather than a fallible comparator.
*/

use std::cmp::Ordering;

use crate::decimal::Kind;
use crate::{BigNat, Decimal, Hook};

use crate::ops::align;

fn rank<H: Hook>(d: &Decimal<H>) -> u8 {
    match d.kind {
        Kind::Infinity => {
            if d.sign {
                0
            } else {
                4
            }
        }
        Kind::Nan => {
            if d.sign {
                1
            } else {
                2
            }
        }
        Kind::Finite => 3,
    }
}

/// Compares two finite sign/coefficient/exponent triples by computing
/// `lhs - rhs` without a final rounding step and inspecting its sign and
/// zero-ness, rather than calling into the Rounder.
fn finite_cmp(ls: bool, lc: &BigNat, le: i32, rs: bool, rc: &BigNat, re: i32) -> Ordering {
    let (cl, cr, _) = align(lc, le, rc, re);
    if ls != rs {
        if cl.is_zero() && cr.is_zero() {
            return Ordering::Equal;
        }
        return if ls { Ordering::Less } else { Ordering::Greater };
    }
    let magnitude = cl.cmp(&cr);
    if ls {
        magnitude.reverse()
    } else {
        magnitude
    }
}

/// The total order over signed zero, finite magnitudes, signed infinity,
/// and NaN, usable across two different Hooks — comparison, unlike
/// arithmetic, does not privilege either operand's policy.
pub fn total_cmp<H1: Hook, H2: Hook>(lhs: &Decimal<H1>, rhs: &Decimal<H2>) -> Ordering {
    match rank(lhs).cmp(&rank(rhs)) {
        Ordering::Equal if rank(lhs) == 3 => {
            finite_cmp(lhs.sign, &lhs.coefficient, lhs.exponent, rhs.sign, &rhs.coefficient, rhs.exponent)
        }
        Ordering::Equal => Ordering::Equal,
        other => other,
    }
}

impl<H: Hook> Decimal<H> {
    /// Compares against a `Decimal` carrying a possibly different Hook,
    /// under this type's total order.
    pub fn compare<H2: Hook>(&self, other: &Decimal<H2>) -> Ordering {
        total_cmp(self, other)
    }
}

impl<H: Hook> PartialEq for Decimal<H> {
    fn eq(&self, other: &Self) -> bool {
        total_cmp(self, other) == Ordering::Equal
    }
}

impl<H: Hook> Eq for Decimal<H> {}

impl<H: Hook> PartialOrd for Decimal<H> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(total_cmp(self, other))
    }
}

impl<H: Hook> Ord for Decimal<H> {
    fn cmp(&self, other: &Self) -> Ordering {
        total_cmp(self, other)
    }
}

macro_rules! impl_cmp_with_builtin {
    ($t:ty) => {
        impl<H: Hook> PartialEq<$t> for Decimal<H> {
            fn eq(&self, other: &$t) -> bool {
                PartialEq::eq(self, &Decimal::<H>::from(*other))
            }
        }

        impl<H: Hook> PartialOrd<$t> for Decimal<H> {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                PartialOrd::partial_cmp(self, &Decimal::<H>::from(*other))
            }
        }
    };
}

impl_cmp_with_builtin!(i64);
impl_cmp_with_builtin!(u64);
impl_cmp_with_builtin!(i32);
impl_cmp_with_builtin!(u32);
