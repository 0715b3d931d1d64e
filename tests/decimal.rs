// decimal.rs
//
// Tests for the decnum crate

use decnum::{Decimal, Hook, NoOp, RoundingMode};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Prec3HalfUp;
impl Hook for Prec3HalfUp {
    const PRECISION: u32 = 3;
    const ROUNDING_MODE: RoundingMode = RoundingMode::HalfUp;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Prec64HalfUp;
impl Hook for Prec64HalfUp {
    const PRECISION: u32 = 64;
    const ROUNDING_MODE: RoundingMode = RoundingMode::HalfUp;
}

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn d3(s: &str) -> Decimal<Prec3HalfUp> {
    s.parse().unwrap()
}

fn d64(s: &str) -> Decimal<Prec64HalfUp> {
    s.parse().unwrap()
}

/// Testing all the required methods from [`decnum::Number`].
#[test]
fn traits() {
    use decnum::Number;

    assert_eq!(Decimal::<NoOp>::radix(), 10, "Decimal is a base-10 format");

    let zero = Decimal::<NoOp>::zero();
    let one = Decimal::<NoOp>::one();
    let finite: Decimal<NoOp> = d("-1.25");
    let pos_inf = Decimal::<NoOp>::infinity(false);
    let neg_inf = Decimal::<NoOp>::infinity(true);
    let nan = Decimal::<NoOp>::nan();

    assert!(!zero.is_nar());
    assert!(!one.is_nar());
    assert!(!finite.is_nar());
    assert!(pos_inf.is_nar());
    assert!(neg_inf.is_nar());
    assert!(nan.is_nar());

    assert!(zero.is_finite());
    assert!(finite.is_finite());
    assert!(!pos_inf.is_finite());
    assert!(!nan.is_finite());

    assert!(pos_inf.is_infinite());
    assert!(neg_inf.is_infinite());
    assert!(!finite.is_infinite());

    assert!(zero.is_zero());
    assert!(!one.is_zero());
    assert!(!finite.is_zero());

    assert_eq!(zero.is_negative(), None);
    assert_eq!(one.is_negative(), Some(false));
    assert_eq!(finite.is_negative(), Some(true));
    assert_eq!(nan.is_negative(), None);

    assert!(!nan.is_numerical());
    assert!(pos_inf.is_numerical());
    assert!(finite.is_numerical());

    assert_eq!(finite.c().unwrap().to_string(), "125");
    assert_eq!(finite.exp(), Some(-2));
    assert_eq!(finite.e(), Some(0));
}

#[test]
fn seed_1_subtraction_alignment() {
    let a = d("1.23E-10");
    let b = d("2.00E-10");
    assert_eq!((a - b).to_string(), "-0.000000000077");
}

#[test]
fn seed_2_addition_rounds_with_carry() {
    let a = d3("0.999E-2");
    let b = d3("0.1E-2");
    let sum = a + b;
    assert_eq!(sum.to_string(), "0.0110");
    assert!(sum.flags.inexact);
    assert!(sum.flags.rounded);
}

#[test]
fn seed_3_division_repeating() {
    let a = d("1");
    let b = d("3");
    let q = a / b;
    assert_eq!(q.to_string(), "0.333333333");
    assert!(q.flags.inexact);
    assert!(q.flags.rounded);
}

#[test]
fn seed_4_addition_high_precision() {
    let a = d64("1e-50");
    let b = d64("4e-50");
    assert_eq!(
        (a + b).to_string(),
        "0.00000000000000000000000000000000000000000000000005"
    );
}

#[test]
fn seed_5_subtraction_high_precision() {
    let a = d64("10000e+9");
    let b = d64("7");
    assert_eq!((a - b).to_string(), "9999999999993");
}

#[test]
fn seed_6_nan_plus_infinity() {
    let a = d("NaN");
    let b = d("Inf");
    assert_eq!((a + b).to_string(), "NaN");
}

#[test]
fn seed_7_infinity_minus_infinity() {
    let a = d("Inf");
    let b = d("Inf");
    let result = a - b;
    assert!(result.is_nan());
    assert!(result.flags.invalid_operation);
}

#[test]
fn seed_8_trailing_zeros_compare_equal() {
    assert_eq!(d("22.000"), d("22"));
}

#[test]
fn seed_9_total_order_neg_inf_neg_nan() {
    use std::cmp::Ordering;
    let neg_inf = d("-Inf");
    let neg_nan = d("-NaN");
    assert_eq!(neg_inf.compare(&neg_nan), Ordering::Less);
}

#[test]
fn seed_10_parse_scientific() {
    use decnum::Number;
    let v = d("1.2345678E-7");
    // exponent = exp_part - fractional digit count = -7 - 7 = -14; the
    // coefficient "12345678" at 10^-14 is 1.2345678E-7, as expected.
    assert_eq!(v.c().unwrap().to_string(), "12345678");
    assert_eq!(v.exp(), Some(-14));
}

#[test]
fn rounding_mode_down_truncates() {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    struct Down;
    impl Hook for Down {
        const PRECISION: u32 = 2;
        const ROUNDING_MODE: RoundingMode = RoundingMode::Down;
    }
    let v: Decimal<Down> = "1.99".parse().unwrap();
    assert_eq!(v.to_string(), "1.9");
}

#[test]
fn rounding_mode_up_away_from_zero() {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    struct Up;
    impl Hook for Up {
        const PRECISION: u32 = 2;
        const ROUNDING_MODE: RoundingMode = RoundingMode::Up;
    }
    let pos: Decimal<Up> = "1.91".parse().unwrap();
    let neg: Decimal<Up> = "-1.91".parse().unwrap();
    assert_eq!(pos.to_string(), "2.0");
    assert_eq!(neg.to_string(), "-2.0");
}

#[test]
fn rounding_mode_ceiling_and_floor() {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    struct Ceil;
    impl Hook for Ceil {
        const PRECISION: u32 = 2;
        const ROUNDING_MODE: RoundingMode = RoundingMode::Ceiling;
    }
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    struct Floor;
    impl Hook for Floor {
        const PRECISION: u32 = 2;
        const ROUNDING_MODE: RoundingMode = RoundingMode::Floor;
    }
    let pos: Decimal<Ceil> = "1.91".parse().unwrap();
    let neg: Decimal<Ceil> = "-1.91".parse().unwrap();
    assert_eq!(pos.to_string(), "2.0");
    assert_eq!(neg.to_string(), "-1.9");

    let pos: Decimal<Floor> = "1.91".parse().unwrap();
    let neg: Decimal<Floor> = "-1.91".parse().unwrap();
    assert_eq!(pos.to_string(), "1.9");
    assert_eq!(neg.to_string(), "-2.0");
}

#[test]
fn rounding_mode_half_even_ties_to_even() {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    struct HalfEven;
    impl Hook for HalfEven {
        const PRECISION: u32 = 2;
        const ROUNDING_MODE: RoundingMode = RoundingMode::HalfEven;
    }
    let tie_even: Decimal<HalfEven> = "1.25".parse().unwrap();
    let tie_odd: Decimal<HalfEven> = "1.35".parse().unwrap();
    assert_eq!(tie_even.to_string(), "1.2");
    assert_eq!(tie_odd.to_string(), "1.4");
}

#[test]
fn rounding_mode_zero_five_up() {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    struct ZeroFive;
    impl Hook for ZeroFive {
        const PRECISION: u32 = 2;
        const ROUNDING_MODE: RoundingMode = RoundingMode::ZeroFiveUp;
    }
    // kept value's last digit is 0 -> increments when anything is discarded
    let a: Decimal<ZeroFive> = "10.1".parse().unwrap();
    assert_eq!(a.to_string(), "11");
    // kept value's last digit is neither 0 nor 5 -> truncates
    let b: Decimal<ZeroFive> = "11.1".parse().unwrap();
    assert_eq!(b.to_string(), "11");
}

#[test]
fn parse_boundary_behaviors_are_invalid_operation() {
    for input in ["", "+", "-", "++1", "1.2.3", "1e1e1", "1x"] {
        let v = d(input);
        assert!(v.is_nan(), "{input:?} should parse to NaN");
        assert!(v.flags.invalid_operation, "{input:?} should set invalid-operation");
    }
}

#[test]
fn division_by_zero_cases() {
    let five = d("5");
    let zero = d("0");

    let nonzero_over_zero = &five / &zero;
    assert!(nonzero_over_zero.is_infinity());
    assert!(nonzero_over_zero.flags.division_by_zero);
    assert!(nonzero_over_zero.flags.invalid_operation);

    let zero_over_zero = &zero / &zero;
    assert!(zero_over_zero.is_nan());
    assert!(zero_over_zero.flags.division_by_zero);
    assert!(!zero_over_zero.flags.invalid_operation);
}

#[test]
fn zero_sign_is_preserved_but_numerically_equal() {
    let pos_zero = Decimal::<NoOp>::zero();
    let neg_zero = -Decimal::<NoOp>::zero();
    assert_eq!(pos_zero, neg_zero);
    assert_eq!(pos_zero.to_string(), "0");
    assert_eq!(neg_zero.to_string(), "-0");
}

#[test]
fn format_parse_round_trip() {
    for input in ["0", "1", "-1", "3.14159", "-0.001", "123456789", "-0"] {
        let v = d(input);
        let round_tripped: Decimal = v.to_string().parse().unwrap();
        assert_eq!(v, round_tripped);
        assert_eq!(v.to_string(), round_tripped.to_string());
    }
}

#[test]
fn digit_count_never_exceeds_precision() {
    use decnum::Number;
    let values = [
        d3("123456"),
        d3("1") / d3("7"),
        d3("999.9") + d3("0.09"),
    ];
    for v in values {
        assert!(v.p() <= 3, "{v} has more than 3 significant digits");
    }
}

#[test]
fn total_order_matches_invariants() {
    use std::cmp::Ordering;
    let neg_inf = d("-Inf");
    let neg_nan = d("-NaN");
    let nan = d("NaN");
    let finite = d("0");
    let pos_inf = d("Inf");

    let ordered = [&neg_inf, &neg_nan, &nan, &finite, &pos_inf];
    for w in ordered.windows(2) {
        assert_ne!(w[0].compare(w[1]), Ordering::Greater);
    }
}

#[test]
fn commutativity_of_addition_and_multiplication() {
    let a = d("3.25");
    let b = d("-7.1");
    assert_eq!(&a + &b, &b + &a);
    assert_eq!(&a * &b, &b * &a);
    assert_eq!(a.clone() * Decimal::<NoOp>::one(), a);
}

#[test]
fn integer_conversion_round_trips() {
    let v = d("42");
    let back: i64 = (&v).try_into().unwrap();
    assert_eq!(back, 42);

    let neg = d("-7");
    let back: i64 = (&neg).try_into().unwrap();
    assert_eq!(back, -7);

    let out_of_range: Result<u64, _> = (&neg).try_into();
    assert!(out_of_range.is_err());
}

#[test]
fn to_bool_threshold() {
    assert!(!d("0.5").to_bool());
    assert!(d("1").to_bool());
    assert!(d("-1.5").to_bool());
    assert!(d("NaN").to_bool());
    assert!(d("Inf").to_bool());
}
