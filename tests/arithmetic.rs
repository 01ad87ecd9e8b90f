#![allow(clippy::eq_op, clippy::neg_multiply)]

use decimal_bigint::{BigInt, ErrorCode, Sign, LIMB_DIGITS, MAX_LIMBS};

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

// Largest magnitude that still fits the ceiling: every limb is 99999.
fn ceiling_value() -> BigInt {
    big(&"9".repeat(MAX_LIMBS * LIMB_DIGITS))
}

#[test]
fn test_add_mixed_signs() {
    assert_eq!(big("123") + big("-23"), big("100"));
    assert_eq!(big("-123") + big("23"), big("-100"));
    assert_eq!(big("23") + big("-123"), big("-100"));
    assert_eq!(big("-23") + big("123"), big("100"));
    assert_eq!(big("-23") + big("-123"), big("-146"));
}

#[test]
fn test_add_carry() {
    assert_eq!(big("99999") + big("1"), big("100000"));
    assert_eq!(big("9999999999") + big("1"), big("10000000000"));
    assert_eq!(big("1") + big("99999999999999999999"), big("100000000000000000000"));
    assert_eq!((big("99999") + big("1")).limbs(), [1, 0]);
}

#[test]
fn test_sub_borrow() {
    assert_eq!(big("100000") - big("1"), big("99999"));
    assert_eq!(big("1000000000000000") - big("1"), big("999999999999999"));
    assert_eq!(big("123456789000000000000") - big("1"), big("123456788999999999999"));
    assert_eq!((big("100000") - big("1")).limbs(), [99999]);
}

#[test]
fn test_sub_swaps_operands() {
    assert_eq!(big("3") - big("5"), big("-2"));
    assert_eq!(big("-3") - big("-5"), big("2"));
    assert_eq!(big("-5") - big("-3"), big("-2"));
    assert_eq!(big("1") - big("100000000000"), big("-99999999999"));
}

#[test]
fn test_sub_mixed_signs() {
    assert_eq!(big("5") - big("-3"), big("8"));
    assert_eq!(big("-5") - big("3"), big("-8"));
    assert_eq!(big("-99999") - big("1"), big("-100000"));
}

#[test]
fn test_zero_results_are_positive() {
    let zero = big("0") - big("0");
    assert_eq!(zero, BigInt::from(0));
    assert_eq!(zero.sign(), Sign::Positive);
    assert_eq!(zero.limbs(), [0]);

    let a = big("-123456789012345");
    let sum = &a + &(-&a);
    assert_eq!(sum.sign(), Sign::Positive);
    assert_eq!(sum.limbs(), [0]);

    let diff = &a - &a;
    assert_eq!(diff.sign(), Sign::Positive);
    assert_eq!(diff.limbs(), [0]);

    let product = big("-5") * big("0");
    assert_eq!(product.sign(), Sign::Positive);
    assert_eq!(product.limbs(), [0]);
}

#[test]
fn test_mul() {
    assert_eq!(big("999999999999") * big("-1"), big("-999999999999"));
    assert_eq!(
        big("12345678901234567890") * big("98765432109876543210"),
        big("1219326311370217952237463801111263526900"),
    );
    assert_eq!(
        big("-99999999999") * big("99999999999"),
        big("-9999999999800000000001"),
    );
    assert_eq!(
        BigInt::from(u64::MAX) * BigInt::from(u64::MAX) + BigInt::from(u64::MAX) * big("2") + big("1"),
        big("340282366920938463463374607431768211456"),
    );
}

#[test]
fn test_mul_sign_rule() {
    let values = ["-7", "7"];
    for lhs in values {
        for rhs in values {
            let product = big(lhs) * big(rhs);
            let negative = lhs.starts_with('-') != rhs.starts_with('-');
            assert_eq!(product.is_negative(), negative, "{} * {}", lhs, rhs);
            assert_eq!(product.limbs(), [49]);
        }
    }
}

#[test]
fn test_commutative() {
    let values = [
        "0",
        "1",
        "-1",
        "99999",
        "-100000",
        "123456789012345678901234567890",
        "-98765432109876543210",
    ];
    for a in values {
        for b in values {
            let (a, b) = (big(a), big(b));
            assert_eq!(&a + &b, &b + &a);
            assert_eq!(&a * &b, &b * &a);
            assert_eq!(&a - &b, -(&b - &a));
        }
    }
}

#[test]
fn test_compound_assign() {
    let mut value = big("10");
    value += big("99990");
    assert_eq!(value, big("100000"));
    value -= &big("100001");
    assert_eq!(value, big("-1"));
    value *= big("-123456789012");
    assert_eq!(value, big("123456789012"));
    value *= &BigInt::zero();
    assert_eq!(value, BigInt::zero());
}

#[test]
fn test_neg() {
    assert_eq!(-big("5"), big("-5"));
    assert_eq!(-big("-5"), big("5"));

    let zero = -BigInt::zero();
    assert_eq!(zero.sign(), Sign::Positive);
    assert!(!zero.is_negative());
}

#[test]
fn test_increment_decrement() {
    let mut value = big("-1");
    value.increment().unwrap();
    assert_eq!(value, big("0"));
    assert_eq!(value.sign(), Sign::Positive);

    value.decrement().unwrap();
    assert_eq!(value, big("-1"));

    let mut value = big("99999");
    assert_eq!(*value.increment().unwrap(), big("100000"));
    assert_eq!(*value.decrement().unwrap(), big("99999"));

    let mut value = big("0");
    assert_eq!(value.post_decrement().unwrap(), big("0"));
    assert_eq!(value, big("-1"));
    assert_eq!(value.post_increment().unwrap(), big("-1"));
    assert_eq!(value, big("0"));
}

#[test]
fn test_division_is_unsupported() {
    let err = big("10").checked_div(&big("0")).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::DivisionByZero);
    assert!(err.is_arithmetic());
    assert_eq!(err.to_string(), "BigInt division by zero");

    let err = big("10").checked_div(&big("3")).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::DivisionUnsupported);

    let err = big("10").checked_rem(&big("-0")).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::DivisionByZero);

    let err = big("0").checked_rem(&big("7")).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::DivisionUnsupported);
}

#[test]
fn test_ceiling_exact_fits() {
    let max = ceiling_value();
    assert_eq!(max.limb_count(), MAX_LIMBS);
    assert!(max.limbs().iter().all(|&limb| limb == 99999));

    assert_eq!(max.checked_add(&BigInt::zero()).unwrap(), max);
    assert_eq!(max.checked_sub(&BigInt::one()).unwrap().limb_count(), MAX_LIMBS);
    assert_eq!(max.checked_mul(&BigInt::one()).unwrap(), max);
    assert_eq!((-&max).checked_add(&max).unwrap(), BigInt::zero());
}

#[test]
fn test_ceiling_add_overflow() {
    let max = ceiling_value();
    let err = max.checked_add(&BigInt::one()).unwrap_err();
    assert!(err.is_overflow());
    assert_eq!(err.to_string(), "BigInt overflow");
    assert_eq!(err.line(), 0);

    let err = (-&max).checked_sub(&BigInt::one()).unwrap_err();
    assert!(err.is_overflow());

    let err = max.checked_sub(&BigInt::from(-1)).unwrap_err();
    assert!(err.is_overflow());

    let mut value = max;
    assert!(value.increment().unwrap_err().is_overflow());
}

#[test]
fn test_ceiling_mul_overflow() {
    let max = ceiling_value();
    let err = max.checked_mul(&BigInt::from(100000)).unwrap_err();
    assert!(err.is_overflow());

    // The negative side is checked the same way.
    let err = max.checked_mul(&BigInt::from(-2)).unwrap_err();
    assert!(err.is_overflow());
}

#[test]
#[should_panic(expected = "attempt to add with overflow")]
fn test_add_operator_panics_on_overflow() {
    let _ = ceiling_value() + BigInt::one();
}

#[test]
#[should_panic(expected = "attempt to subtract with overflow")]
fn test_sub_operator_panics_on_overflow() {
    let _ = -ceiling_value() - BigInt::one();
}

#[test]
#[should_panic(expected = "attempt to multiply with overflow")]
fn test_mul_assign_panics_on_overflow() {
    let mut value = ceiling_value();
    value *= BigInt::from(10);
}

#[test]
fn test_native_conversions() {
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(BigInt::from(i64::MIN).as_i64(), Some(i64::MIN));
    assert_eq!(BigInt::from(i64::MAX).as_i64(), Some(i64::MAX));
    assert_eq!(BigInt::from(u64::MAX).as_u64(), Some(u64::MAX));
    assert_eq!(BigInt::from(u64::MAX).as_i64(), None);
    assert_eq!(BigInt::from(-1i8).as_u64(), None);
    assert!(BigInt::from(i128::MIN).is_negative());
    assert_eq!(BigInt::from(u128::MAX).to_string(), "340282366920938463463374607431768211455");
    assert!(!BigInt::from(u128::MAX).is_u64());
    assert!(BigInt::from(0u8).is_i64());
    assert_eq!(BigInt::from(123456789012u64).limbs(), [12, 34567, 89012]);
}

#[test]
fn test_truthiness() {
    assert!(!bool::from(&BigInt::zero()));
    assert!(!bool::from(BigInt::default()));
    assert!(bool::from(&big("-1")));
    assert!(bool::from(big("100000")));
    assert!(BigInt::zero().is_zero());
    assert!(!BigInt::one().is_zero());
}
