/*!
The General Decimal Arithmetic Specification's `to-number` parser.

Grounded on the byte-slice sign/digit-extraction idiom of
`other_examples/yashan-technologies-decimal-rs/src/parse.rs` (the teacher
has no string parser for any of its number formats to draw from directly).
*/

use std::str::FromStr;

use crate::decimal::Kind;
use crate::{BigNat, Decimal, Hook};

/// The three shapes a successfully parsed `numeric-string` can take.
enum Parsed {
    Finite(bool, BigNat, i32),
    Infinity(bool),
    Nan(bool),
}

/// Splits a leading `sign` off a string, per the `to-number` grammar.
fn extract_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'+') => (false, &s[1..]),
        Some(b'-') => (true, &s[1..]),
        _ => (false, s),
    }
}

/// Parses a `decimal-part [exponent-part]` (the `to-number` grammar),
/// assuming `sign` has already been consumed.
fn parse_finite(s: &str) -> Option<(BigNat, i32)> {
    let bytes = s.as_bytes();
    let n = bytes.len();
    let mut i = 0;

    let int_start = i;
    while i < n && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = &s[int_start..i];

    let mut frac_digits = "";
    if i < n && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < n && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = &s[frac_start..i];
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        // neither `digits '.' [digits]` nor `['.'] digits` was satisfied
        return None;
    }

    let mut exp_part: i64 = 0;
    if i < n && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        let (exp_sign, rest_start) = match bytes.get(i) {
            Some(b'+') => (1i64, i + 1),
            Some(b'-') => (-1i64, i + 1),
            _ => (1i64, i),
        };
        i = rest_start;
        let digit_start = i;
        while i < n && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == digit_start {
            // indicator present with no exponent digits
            return None;
        }
        let magnitude: i64 = s[digit_start..i].parse().ok()?;
        exp_part = exp_sign * magnitude;
    }

    if i != n {
        // trailing, unconsumed characters
        return None;
    }

    let mut coeff_str = String::with_capacity(int_digits.len() + frac_digits.len());
    coeff_str.push_str(int_digits);
    coeff_str.push_str(frac_digits);
    if coeff_str.is_empty() {
        coeff_str.push('0');
    }
    let coefficient: BigNat = coeff_str.parse().ok()?;

    let exponent = exp_part - frac_digits.len() as i64;
    let exponent = exponent.clamp(i32::MIN as i64, i32::MAX as i64) as i32;

    Some((coefficient, exponent))
}

/// Parses a `numeric-string` (the `to-number` grammar), returning `None`
/// for any malformed input.
fn parse(input: &str) -> Option<Parsed> {
    if input.is_empty() {
        return None;
    }
    let (sign, rest) = extract_sign(input);
    if rest.is_empty() {
        // a lone sign
        return None;
    }

    if rest.eq_ignore_ascii_case("infinity") || rest.eq_ignore_ascii_case("inf") {
        return Some(Parsed::Infinity(sign));
    }

    if rest.len() >= 3 && rest[..3].eq_ignore_ascii_case("nan") {
        let payload = &rest[3..];
        if payload.is_empty() || payload.bytes().all(|b| b.is_ascii_digit()) {
            return Some(Parsed::Nan(sign));
        }
        return None;
    }

    parse_finite(rest).map(|(coefficient, exponent)| Parsed::Finite(sign, coefficient, exponent))
}

impl<H: Hook> Decimal<H> {
    /// Parses a `Decimal` from a sequence of characters, for streaming
    /// parse of non-string inputs. Equivalent to collecting the sequence
    /// into a `String` and calling [`str::parse`].
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let s: String = chars.into_iter().collect();
        s.parse().unwrap_or_else(|_| unreachable!("FromStr for Decimal is infallible"))
    }

    fn invalid(sign: bool) -> Self {
        let mut result = Self::nan();
        result.sign = sign;
        result.flags.invalid_operation = true;
        H::on_invalid_operation(&result);
        result
    }
}

impl<H: Hook> FromStr for Decimal<H> {
    /// Malformed input never fails to parse in the `Result` sense: it
    /// produces a quiet NaN with `invalid-operation` set. The `Err` type
    /// exists only to satisfy `FromStr`'s signature.
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match parse(s) {
            None => Self::invalid(false),
            Some(Parsed::Infinity(sign)) => Self::infinity(sign),
            Some(Parsed::Nan(sign)) => {
                let mut n = Self::nan();
                n.sign = sign;
                n
            }
            Some(Parsed::Finite(sign, coefficient, exponent)) => {
                let mut result = Self::finite_raw(sign, coefficient, exponent);
                if !matches!(result.kind, Kind::Finite) {
                    // only possible via exponent clamping to +/-Infinity
                    result.sign = sign;
                }
                result
            }
        })
    }
}
