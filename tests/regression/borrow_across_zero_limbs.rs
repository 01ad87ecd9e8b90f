use decimal_bigint::BigInt;

#[test]
fn test() {
    let x: BigInt = "100000000000000000000".parse().unwrap();
    let y: BigInt = "99999999999999999999".parse().unwrap();
    assert_eq!((&x - &y).limbs(), [1]);
    assert_eq!((&y - &x).to_string(), "-1");
    assert_eq!((x - BigInt::from(7)).to_string(), "99999999999999999993");
}
