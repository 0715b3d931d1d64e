/*!
The arithmetic core and the rounded-operation traits that front it.

The trait shapes below — one trait per binary operator, each a thin,
nameable front door onto a free function that does the actual work — follow
the `rounded_2ary!`-generated traits of the teacher's own `ops.rs`; the
macro itself doesn't transfer, since a [`Hook`] is a stateless compile-time
marker rather than a `&self` rounding context carrying runtime state, so
there is nothing left to generate four nearly-identical trait bodies from.
*/

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::decimal::Kind;
use crate::round::RoundingMode;
use crate::{BigNat, Decimal, Hook, Number};

/// Rounded addition, fronting [`core_add`].
pub trait RoundedAdd<Rhs = Self> {
    type Output;
    fn rounded_add(&self, rhs: &Rhs) -> Self::Output;
}

/// Rounded subtraction, fronting [`core_add`] with a negated right operand.
pub trait RoundedSub<Rhs = Self> {
    type Output;
    fn rounded_sub(&self, rhs: &Rhs) -> Self::Output;
}

/// Rounded multiplication, fronting [`core_mul`].
pub trait RoundedMul<Rhs = Self> {
    type Output;
    fn rounded_mul(&self, rhs: &Rhs) -> Self::Output;
}

/// Rounded division, fronting [`core_div`].
pub trait RoundedDiv<Rhs = Self> {
    type Output;
    fn rounded_div(&self, rhs: &Rhs) -> Self::Output;
}

/// NaN propagation shared by all four operators: the result is NaN, with
/// the sign of the left operand if it is the NaN, else the right's. Neither
/// operand's NaN-ness is itself flagged (this format models a single quiet
/// NaN kind; see DESIGN.md).
fn propagate_nan<H1: Hook, H2: Hook>(lhs: &Decimal<H1>, rhs: &Decimal<H2>) -> Decimal<H1> {
    let mut result = Decimal::nan();
    result.sign = if lhs.is_nan() { lhs.sign } else { rhs.sign };
    result
}

fn invalid<H: Hook>() -> Decimal<H> {
    let mut result = Decimal::nan();
    result.flags.invalid_operation = true;
    H::on_invalid_operation(&result);
    result
}

/// Aligns two finite coefficients to the smaller of the two exponents,
/// scaling the larger-exponent operand's coefficient up by `10^delta`.
pub(crate) fn align(cl: &BigNat, el: i32, cr: &BigNat, er: i32) -> (BigNat, BigNat, i32) {
    match el.cmp(&er) {
        Ordering::Equal => (cl.clone(), cr.clone(), el),
        Ordering::Greater => {
            let delta = (el - er) as u32;
            (cl.mul_pow10(delta), cr.clone(), er)
        }
        Ordering::Less => {
            let delta = (er - el) as u32;
            (cl.clone(), cr.mul_pow10(delta), el)
        }
    }
}

/// `lhs + rhs`, consulting only `lhs`'s Hook; the result carries it
/// (mixed-Hook operations use the left operand's policy throughout).
pub(crate) fn core_add<H1: Hook, H2: Hook>(lhs: &Decimal<H1>, rhs: &Decimal<H2>) -> Decimal<H1> {
    if lhs.is_nan() || rhs.is_nan() {
        return propagate_nan(lhs, rhs);
    }
    if lhs.is_infinity() && rhs.is_infinity() {
        return if lhs.sign == rhs.sign {
            Decimal::infinity(lhs.sign)
        } else {
            invalid()
        };
    }
    if lhs.is_infinity() {
        return Decimal::infinity(lhs.sign);
    }
    if rhs.is_infinity() {
        return Decimal::infinity(rhs.sign);
    }

    let (cl, cr, exp) = align(&lhs.coefficient, lhs.exponent, &rhs.coefficient, rhs.exponent);

    let (mut sign, coefficient) = if lhs.sign == rhs.sign {
        (lhs.sign, cl.add(&cr))
    } else {
        match cl.cmp(&cr) {
            Ordering::Greater => (lhs.sign, cl.sub(&cr)),
            Ordering::Less => (rhs.sign, cr.sub(&cl)),
            Ordering::Equal => (false, BigNat::zero()),
        }
    };

    if coefficient.is_zero() {
        sign = if lhs.sign && rhs.sign {
            true
        } else if H1::ROUNDING_MODE == RoundingMode::Floor && lhs.sign != rhs.sign {
            true
        } else {
            false
        };
    }

    Decimal::<H1>::finite_raw(sign, coefficient, exp)
}

/// `lhs - rhs`: addition with the right operand's sign flipped.
pub(crate) fn core_sub<H1: Hook, H2: Hook>(lhs: &Decimal<H1>, rhs: &Decimal<H2>) -> Decimal<H1> {
    let mut negated = rhs.clone();
    negated.sign = !negated.sign;
    core_add(lhs, &negated)
}

/// `lhs * rhs`.
pub(crate) fn core_mul<H1: Hook, H2: Hook>(lhs: &Decimal<H1>, rhs: &Decimal<H2>) -> Decimal<H1> {
    if lhs.is_nan() || rhs.is_nan() {
        return propagate_nan(lhs, rhs);
    }
    let sign = lhs.sign ^ rhs.sign;
    let lhs_inf = lhs.is_infinity();
    let rhs_inf = rhs.is_infinity();
    if (lhs_inf && rhs.is_zero()) || (rhs_inf && lhs.is_zero()) {
        return invalid();
    }
    if lhs_inf || rhs_inf {
        return Decimal::infinity(sign);
    }

    let coefficient = lhs.coefficient.mul(&rhs.coefficient);
    let exponent = lhs.exponent + rhs.exponent;
    Decimal::<H1>::finite_raw(sign, coefficient, exponent)
}

/// The long-division algorithm, producing a quotient coefficient of at
/// most `precision + 1` digits and the adjustment needed to recover the
/// true exponent.
fn long_divide(dividend0: &BigNat, divisor0: &BigNat, precision: u32) -> (BigNat, i32) {
    let mut dividend = dividend0.clone();
    let mut divisor = divisor0.clone();
    let mut adjust: i32 = 0;

    while dividend < divisor {
        dividend = dividend.mul_pow10(1);
        adjust += 1;
    }
    while dividend >= divisor.mul_pow10(1) {
        divisor = divisor.mul_pow10(1);
        adjust -= 1;
    }

    let mut q = BigNat::zero();
    loop {
        while divisor <= dividend {
            dividend = dividend.sub(&divisor);
            q = q.add(&BigNat::one());
        }
        if dividend.is_zero() && adjust >= 0 {
            break;
        }
        if q.digits() == precision + 1 {
            break;
        }
        q = q.mul_pow10(1);
        dividend = dividend.mul_pow10(1);
        adjust += 1;
    }

    (q, adjust)
}

/// `lhs / rhs`.
pub(crate) fn core_div<H1: Hook, H2: Hook>(lhs: &Decimal<H1>, rhs: &Decimal<H2>) -> Decimal<H1> {
    if lhs.is_nan() || rhs.is_nan() {
        return propagate_nan(lhs, rhs);
    }
    let sign = lhs.sign ^ rhs.sign;

    if lhs.is_infinity() && rhs.is_infinity() {
        return invalid();
    }
    if lhs.is_zero() && rhs.is_zero() {
        let mut result = Decimal::nan();
        result.flags.division_by_zero = true;
        H1::on_division_by_zero(&result);
        return result;
    }
    if rhs.is_zero() {
        let mut result = Decimal::infinity(sign);
        result.flags.division_by_zero = true;
        result.flags.invalid_operation = true;
        H1::on_division_by_zero(&result);
        H1::on_invalid_operation(&result);
        return result;
    }
    if lhs.is_infinity() {
        return Decimal::infinity(sign);
    }
    if rhs.is_infinity() {
        return Decimal::<H1>::finite_raw(sign, BigNat::zero(), 0);
    }
    if lhs.is_zero() {
        return Decimal::<H1>::finite_raw(sign, BigNat::zero(), lhs.exponent - rhs.exponent);
    }

    let (q, adjust) = long_divide(&lhs.coefficient, &rhs.coefficient, H1::PRECISION);
    let exponent = lhs.exponent - (rhs.exponent + adjust);
    Decimal::<H1>::finite_raw(sign, q, exponent)
}

impl<H1: Hook, H2: Hook> RoundedAdd<Decimal<H2>> for Decimal<H1> {
    type Output = Decimal<H1>;
    fn rounded_add(&self, rhs: &Decimal<H2>) -> Decimal<H1> {
        core_add(self, rhs)
    }
}

impl<H1: Hook, H2: Hook> RoundedSub<Decimal<H2>> for Decimal<H1> {
    type Output = Decimal<H1>;
    fn rounded_sub(&self, rhs: &Decimal<H2>) -> Decimal<H1> {
        core_sub(self, rhs)
    }
}

impl<H1: Hook, H2: Hook> RoundedMul<Decimal<H2>> for Decimal<H1> {
    type Output = Decimal<H1>;
    fn rounded_mul(&self, rhs: &Decimal<H2>) -> Decimal<H1> {
        core_mul(self, rhs)
    }
}

impl<H1: Hook, H2: Hook> RoundedDiv<Decimal<H2>> for Decimal<H1> {
    type Output = Decimal<H1>;
    fn rounded_div(&self, rhs: &Decimal<H2>) -> Decimal<H1> {
        core_div(self, rhs)
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $core:ident) => {
        impl<H1: Hook, H2: Hook> $trait<Decimal<H2>> for Decimal<H1> {
            type Output = Decimal<H1>;
            fn $method(self, rhs: Decimal<H2>) -> Decimal<H1> {
                $core(&self, &rhs)
            }
        }

        impl<H1: Hook, H2: Hook> $trait<&Decimal<H2>> for &Decimal<H1> {
            type Output = Decimal<H1>;
            fn $method(self, rhs: &Decimal<H2>) -> Decimal<H1> {
                $core(self, rhs)
            }
        }
    };
}

impl_binop!(Add, add, core_add);
impl_binop!(Sub, sub, core_sub);
impl_binop!(Mul, mul, core_mul);
impl_binop!(Div, div, core_div);

impl<H: Hook> AddAssign<Decimal<H>> for Decimal<H> {
    fn add_assign(&mut self, rhs: Decimal<H>) {
        *self = core_add(self, &rhs);
    }
}

impl<H: Hook> SubAssign<Decimal<H>> for Decimal<H> {
    fn sub_assign(&mut self, rhs: Decimal<H>) {
        *self = core_sub(self, &rhs);
    }
}

impl<H: Hook> MulAssign<Decimal<H>> for Decimal<H> {
    fn mul_assign(&mut self, rhs: Decimal<H>) {
        *self = core_mul(self, &rhs);
    }
}

impl<H: Hook> DivAssign<Decimal<H>> for Decimal<H> {
    fn div_assign(&mut self, rhs: Decimal<H>) {
        *self = core_div(self, &rhs);
    }
}

/// `-x`: flips the sign of a finite-nonzero value or an infinity; a NaN or
/// a zero keeps its sign.
impl<H: Hook> Neg for Decimal<H> {
    type Output = Decimal<H>;
    fn neg(self) -> Decimal<H> {
        let mut out = self;
        match out.kind {
            Kind::Nan => {}
            Kind::Finite if out.coefficient.is_zero() => {}
            _ => out.sign = !out.sign,
        }
        out
    }
}

impl<H: Hook> Neg for &Decimal<H> {
    type Output = Decimal<H>;
    fn neg(self) -> Decimal<H> {
        -self.clone()
    }
}

impl<H: Hook> Decimal<H> {
    /// `+x`: a plain copy. Rust has no overloadable unary `+`, so this is a
    /// named method rather than an operator impl.
    pub fn plus(&self) -> Self {
        self.clone()
    }

    /// `++x`: adds one to this value in place.
    pub fn increment(&mut self) {
        *self = core_add(self, &Decimal::<H>::one());
    }

    /// `--x`: subtracts one from this value in place.
    pub fn decrement(&mut self) {
        *self = core_sub(self, &Decimal::<H>::one());
    }
}
