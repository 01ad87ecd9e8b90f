//! Decimal digits to limbs.

use crate::bigint::{BigInt, Limb, Sign, LIMB_DIGITS, MAX_LIMBS};
use crate::error::{Error, ErrorCode, Result};
use alloc::vec::Vec;
use core::str::FromStr;

/// Group ASCII decimal digits into limbs of five digits, counting from the
/// least significant end. The most significant limb may hold fewer digits.
///
/// The caller guarantees that `digits` is nonempty and all ASCII digits.
pub(crate) fn limbs_from_digits(digits: &[u8]) -> Vec<Limb> {
    let mut limbs: Vec<Limb> = digits
        .rchunks(LIMB_DIGITS)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0, |acc, &digit| acc * 10 + Limb::from(digit - b'0'))
        })
        .collect();
    limbs.reverse();
    limbs
}

/// Build a value from its sign and the ASCII digits of its magnitude.
///
/// The ceiling is checked against the number of limbs the digits group into,
/// before redundant leading zero limbs are stripped.
pub(crate) fn from_digits(sign: Sign, digits: &[u8]) -> Result<BigInt> {
    let limb_count = (digits.len() + LIMB_DIGITS - 1) / LIMB_DIGITS;
    if limb_count > MAX_LIMBS {
        return Err(Error::arithmetic(ErrorCode::Overflow));
    }
    Ok(BigInt::from_parts(sign, limbs_from_digits(digits)))
}

/// Parse a complete token: an optional `+` or `-` followed by one or more
/// decimal digits, and nothing else.
fn parse_decimal(bytes: &[u8]) -> Result<BigInt> {
    let (sign, digits) = match bytes.first() {
        Some(b'-') => (Sign::Negative, &bytes[1..]),
        Some(b'+') => (Sign::Positive, &bytes[1..]),
        _ => (Sign::Positive, bytes),
    };
    let offset = bytes.len() - digits.len();

    if digits.is_empty() {
        return Err(Error::syntax(ErrorCode::InvalidNumber, 1, bytes.len() + 1));
    }
    if let Some(index) = digits.iter().position(|digit| !digit.is_ascii_digit()) {
        return Err(Error::syntax(ErrorCode::InvalidNumber, 1, offset + index + 1));
    }

    from_digits(sign, digits)
}

/// Parses the whole string as one decimal integer.
///
/// Surrounding whitespace is rejected; use [`from_str`](crate::from_str) to
/// read a whitespace-delimited token instead.
///
/// ```
/// # use decimal_bigint::BigInt;
/// let value: BigInt = "+00042".parse().unwrap();
/// assert_eq!(value, BigInt::from(42));
///
/// let err = "12a".parse::<BigInt>().unwrap_err();
/// assert!(err.is_syntax());
/// assert_eq!(err.column(), 3);
/// ```
impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<BigInt> {
        parse_decimal(s.as_bytes())
    }
}

// Native integers never come close to the ceiling, so these conversions are
// infallible. The magnitude is decomposed from its decimal text.
macro_rules! from_signed {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(n: $ty) -> Self {
                    let sign = if n < 0 { Sign::Negative } else { Sign::Positive };
                    let mut buffer = itoa::Buffer::new();
                    let digits = buffer.format(n.unsigned_abs());
                    BigInt::from_parts(sign, limbs_from_digits(digits.as_bytes()))
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(n: $ty) -> Self {
                    let mut buffer = itoa::Buffer::new();
                    let digits = buffer.format(n);
                    BigInt::from_parts(Sign::Positive, limbs_from_digits(digits.as_bytes()))
                }
            }
        )*
    };
}

from_signed!(i8 i16 i32 i64 i128 isize);
from_unsigned!(u8 u16 u32 u64 u128 usize);
