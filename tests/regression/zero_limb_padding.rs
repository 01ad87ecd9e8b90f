use decimal_bigint::BigInt;

#[test]
fn test() {
    // Internal zero limbs must be printed in full.
    let value = BigInt::from(100000) * BigInt::from(100000) + BigInt::from(7);
    assert_eq!(value.limbs(), [1, 0, 7]);
    assert_eq!(value.to_string(), "10000000007");

    let value: BigInt = "-50000000000000000001".parse().unwrap();
    assert_eq!(value.to_string(), "-50000000000000000001");
}
