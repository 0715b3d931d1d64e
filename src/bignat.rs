// bignat.rs
//
// BigNat: arbitrary-precision non-negative integer coefficient storage.
//

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rug::Integer;

/// An arbitrary-precision non-negative integer.
///
/// This is the coefficient storage backing [`Decimal`][crate::Decimal]'s
/// significand. It is a thin, non-negative-only wrapper around
/// [`rug::Integer`] exposing exactly the operations a decimal coefficient
/// needs: addition, subtraction (of a smaller value from a larger one),
/// multiplication, long division with remainder, multiply-by-`10^n`,
/// digit counting, and decimal string conversion.
///
/// Machine-word fast paths for small precisions (`P <= 9` or `P <= 19`)
/// are not implemented; `rug::Integer` is used uniformly regardless of
/// magnitude, the same way the teacher's `rfloat`/`ieee754` formats use it
/// for their own unbounded coefficients.
#[derive(Clone, Debug, Eq)]
pub struct BigNat(Integer);

impl BigNat {
    /// The value zero.
    pub fn zero() -> Self {
        BigNat(Integer::from(0))
    }

    /// The value one.
    pub fn one() -> Self {
        BigNat(Integer::from(1))
    }

    /// Constructs a `BigNat` from a non-negative machine integer.
    pub fn from_u64(val: u64) -> Self {
        BigNat(Integer::from(val))
    }

    /// Returns true if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the least significant decimal digit is odd.
    /// Used by the `HalfEven` rounding mode. (The last decimal digit's
    /// parity equals the whole number's parity, since 10 is even.)
    pub fn last_digit_is_odd(&self) -> bool {
        self.0.is_odd()
    }

    /// Number of decimal digits, treating zero as having one digit.
    pub fn digits(&self) -> u32 {
        if self.is_zero() {
            1
        } else {
            self.0.to_string_radix(10).len() as u32
        }
    }

    /// `self * 10^n`.
    pub fn mul_pow10(&self, n: u32) -> Self {
        if n == 0 {
            self.clone()
        } else {
            BigNat(Integer::from(&self.0 * Integer::from(10).pow(n)))
        }
    }

    /// `self / 10^n` (floor division), discarding the low `n` digits.
    pub fn div_pow10(&self, n: u32) -> Self {
        if n == 0 {
            self.clone()
        } else {
            BigNat(Integer::from(&self.0 / Integer::from(10).pow(n)))
        }
    }

    /// Splits `self` into `(self / 10^n, self % 10^n)`.
    pub fn split_pow10(&self, n: u32) -> (Self, Self) {
        if n == 0 {
            (self.clone(), BigNat::zero())
        } else {
            let base = Integer::from(10).pow(n);
            let q = Integer::from(&self.0 / &base);
            let r = Integer::from(&self.0 % &base);
            (BigNat(q), BigNat(r))
        }
    }

    /// `self + rhs`.
    pub fn add(&self, rhs: &Self) -> Self {
        BigNat(Integer::from(&self.0 + &rhs.0))
    }

    /// `self - rhs`. Panics if `rhs > self`; callers are expected to
    /// compare magnitudes first, as the arithmetic core always does.
    pub fn sub(&self, rhs: &Self) -> Self {
        assert!(self.0 >= rhs.0, "BigNat subtraction would underflow");
        BigNat(Integer::from(&self.0 - &rhs.0))
    }

    /// `self * rhs`.
    pub fn mul(&self, rhs: &Self) -> Self {
        BigNat(Integer::from(&self.0 * &rhs.0))
    }

    /// `self / rhs` truncated toward zero, requires `rhs != 0`.
    pub fn div(&self, rhs: &Self) -> Self {
        BigNat(Integer::from(&self.0 / &rhs.0))
    }

    /// `self % rhs`, requires `rhs != 0`.
    pub fn rem(&self, rhs: &Self) -> Self {
        BigNat(Integer::from(&self.0 % &rhs.0))
    }

    /// The inner `rug::Integer`, for code that needs raw GMP access.
    pub fn as_integer(&self) -> &Integer {
        &self.0
    }
}

impl fmt::Display for BigNat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BigNat {
    type Err = rug::integer::ParseIntegerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BigNat(Integer::from_str(s)?))
    }
}

impl PartialEq for BigNat {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for BigNat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigNat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl From<u64> for BigNat {
    fn from(val: u64) -> Self {
        BigNat::from_u64(val)
    }
}

impl num_traits::Zero for BigNat {
    fn zero() -> Self {
        BigNat::zero()
    }

    fn is_zero(&self) -> bool {
        BigNat::is_zero(self)
    }
}

impl num_traits::One for BigNat {
    fn one() -> Self {
        BigNat::one()
    }
}

impl std::ops::Add for BigNat {
    type Output = BigNat;
    fn add(self, rhs: BigNat) -> BigNat {
        BigNat::add(&self, &rhs)
    }
}

impl std::ops::Mul for BigNat {
    type Output = BigNat;
    fn mul(self, rhs: BigNat) -> BigNat {
        BigNat::mul(&self, &rhs)
    }
}
