use decimal_bigint::{BigInt, Sign};

#[test]
fn test() {
    for text in ["-0", "-00000", "-0000000000000"] {
        let zero: BigInt = text.parse().unwrap();
        assert_eq!(zero.sign(), Sign::Positive);
        assert_eq!(zero.limbs(), [0]);
        assert_eq!(zero.to_string(), "0");
    }

    let zero = BigInt::from(-5) + BigInt::from(5);
    assert_eq!(zero.to_string(), "0");
    assert_eq!(-zero, BigInt::zero());
}
