use decimal_bigint::BigInt;

#[test]
fn test() {
    let nines: BigInt = "999999999999999".parse().unwrap();
    let sum = nines + BigInt::one();
    assert_eq!(sum.limbs(), [1, 0, 0, 0]);
    assert_eq!(sum.to_string(), "1000000000000000");

    let negative: BigInt = "-99999".parse().unwrap();
    let sum = negative - BigInt::one();
    assert_eq!(sum.limbs(), [1, 0]);
    assert_eq!(sum.to_string(), "-100000");
}
