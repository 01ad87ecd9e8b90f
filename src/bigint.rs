//! The `BigInt` value type.

use crate::error::{Error, ErrorCode, Result};
use crate::math;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// Type for a single limb of the magnitude.
///
/// A limb is analogous to a digit in base 10, except it stores a value in
/// `[0, LIMB_BASE)`, i.e. five decimal digits.
pub type Limb = u32;

/// Radix of one limb.
pub const LIMB_BASE: Limb = 100_000;

/// Number of decimal digits held by one full limb.
pub const LIMB_DIGITS: usize = 5;

/// Maximum number of limbs in a magnitude.
///
/// The ceiling counts limbs, not decimal digits: a value may hold up to
/// `MAX_LIMBS * LIMB_DIGITS` digits.
pub const MAX_LIMBS: usize = 10_000;

/// Longest text token accepted by the readers in [`de`](crate::de): every
/// digit of a ceiling-sized magnitude plus one sign character. Longer tokens
/// fail with [`ErrorCode::Overflow`] before any limb is built.
pub const MAX_TOKEN_LEN: usize = MAX_LIMBS * LIMB_DIGITS + 1;

/// Sign of a [`BigInt`]. Zero is always `Positive`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Zero or greater.
    Positive,
    /// Less than zero.
    Negative,
}

impl Sign {
    /// The opposite sign.
    #[inline]
    pub fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Sign of a product of values with signs `self` and `other`.
    #[inline]
    pub fn product(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Sign-magnitude arbitrary-precision integer.
///
/// The magnitude is a sequence of base-100000 limbs, most significant limb
/// first, with no leading zero limb. The value zero is the single limb `0`
/// with a `Positive` sign, so equality and hashing can compare the
/// representation directly.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) sign: Sign,
    pub(crate) limbs: Vec<Limb>,
}

impl BigInt {
    /// The value `0`.
    #[inline]
    pub fn zero() -> BigInt {
        BigInt {
            sign: Sign::Positive,
            limbs: vec![0],
        }
    }

    /// The value `1`.
    #[inline]
    pub fn one() -> BigInt {
        BigInt {
            sign: Sign::Positive,
            limbs: vec![1],
        }
    }

    /// Build a value from a sign and a most-significant-first limb buffer,
    /// restoring the representation invariants. The ceiling is not checked.
    pub(crate) fn from_parts(sign: Sign, mut limbs: Vec<Limb>) -> BigInt {
        math::normalize(&mut limbs);
        let sign = if math::is_zero(&limbs) {
            Sign::Positive
        } else {
            sign
        };
        BigInt { sign, limbs }
    }

    /// Like `from_parts`, but fails if the magnitude exceeds the ceiling.
    pub(crate) fn checked_from_parts(sign: Sign, limbs: Vec<Limb>) -> Result<BigInt> {
        let value = BigInt::from_parts(sign, limbs);
        tri!(value.check_ceiling());
        Ok(value)
    }

    fn check_ceiling(&self) -> Result<()> {
        if self.limbs.len() > MAX_LIMBS {
            Err(Error::arithmetic(ErrorCode::Overflow))
        } else {
            Ok(())
        }
    }

    /// Sign of the value. Zero reports `Sign::Positive`.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Limbs of the magnitude, most significant first.
    ///
    /// ```
    /// # use decimal_bigint::BigInt;
    /// let value: BigInt = "-1234567890123".parse().unwrap();
    /// assert_eq!(value.limbs(), [123, 45678, 90123]);
    /// ```
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Number of limbs in the magnitude. Zero has one limb.
    #[inline]
    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    /// Returns true if the value is less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Returns true if the magnitude is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        math::is_zero(&self.limbs)
    }

    /// Returns true if the value can be represented by i64.
    #[inline]
    pub fn is_i64(&self) -> bool {
        self.as_i64().is_some()
    }

    /// Returns true if the value can be represented by u64.
    #[inline]
    pub fn is_u64(&self) -> bool {
        self.as_u64().is_some()
    }

    /// Returns the value as i64 if it fits, or else None.
    pub fn as_i64(&self) -> Option<i64> {
        let magnitude = i128::try_from(self.magnitude_u128()?).ok()?;
        let value = match self.sign {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        };
        i64::try_from(value).ok()
    }

    /// Returns the value as u64 if it fits, or else None.
    pub fn as_u64(&self) -> Option<u64> {
        if self.is_negative() {
            return None;
        }
        u64::try_from(self.magnitude_u128()?).ok()
    }

    fn magnitude_u128(&self) -> Option<u128> {
        self.limbs.iter().try_fold(0u128, |acc, &limb| {
            acc.checked_mul(u128::from(LIMB_BASE))?
                .checked_add(u128::from(limb))
        })
    }

    // ARITHMETIC

    /// Checked addition.
    ///
    /// Fails with [`ErrorCode::Overflow`] if an operand or the sum needs more
    /// than [`MAX_LIMBS`] limbs.
    ///
    /// ```
    /// # use decimal_bigint::BigInt;
    /// let a = BigInt::from(123);
    /// let b = BigInt::from(-23);
    /// assert_eq!(a.checked_add(&b).unwrap(), BigInt::from(100));
    /// ```
    pub fn checked_add(&self, rhs: &BigInt) -> Result<BigInt> {
        tri!(self.check_ceiling());
        tri!(rhs.check_ceiling());
        if self.sign == rhs.sign {
            add_magnitudes(self.sign, &self.limbs, &rhs.limbs)
        } else {
            // a + (-b) is a - b
            Ok(sub_magnitudes(self.sign, &self.limbs, &rhs.limbs))
        }
    }

    /// Checked subtraction.
    ///
    /// Fails with [`ErrorCode::Overflow`] if the operands have different
    /// signs and the combined magnitude needs more than [`MAX_LIMBS`] limbs.
    pub fn checked_sub(&self, rhs: &BigInt) -> Result<BigInt> {
        if self.sign != rhs.sign {
            // a - (-b) is a + b
            tri!(self.check_ceiling());
            tri!(rhs.check_ceiling());
            add_magnitudes(self.sign, &self.limbs, &rhs.limbs)
        } else {
            Ok(sub_magnitudes(self.sign, &self.limbs, &rhs.limbs))
        }
    }

    /// Checked multiplication.
    ///
    /// Fails with [`ErrorCode::Overflow`] if an operand or the product needs
    /// more than [`MAX_LIMBS`] limbs.
    pub fn checked_mul(&self, rhs: &BigInt) -> Result<BigInt> {
        tri!(self.check_ceiling());
        tri!(rhs.check_ceiling());
        let sign = self.sign.product(rhs.sign);
        BigInt::checked_from_parts(sign, math::mul(&self.limbs, &rhs.limbs))
    }

    /// Division is not implemented.
    ///
    /// Always fails: with [`ErrorCode::DivisionByZero`] if `rhs` is zero,
    /// otherwise with [`ErrorCode::DivisionUnsupported`].
    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt> {
        if rhs.is_zero() {
            return Err(Error::arithmetic(ErrorCode::DivisionByZero));
        }
        Err(Error::arithmetic(ErrorCode::DivisionUnsupported))
    }

    /// Remainder is not implemented. Fails the same way as
    /// [`checked_div`](BigInt::checked_div).
    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt> {
        self.checked_div(rhs)
    }

    /// Add one in place and return the updated value.
    pub fn increment(&mut self) -> Result<&mut BigInt> {
        *self = tri!(self.checked_add(&BigInt::one()));
        Ok(self)
    }

    /// Subtract one in place and return the updated value.
    pub fn decrement(&mut self) -> Result<&mut BigInt> {
        *self = tri!(self.checked_sub(&BigInt::one()));
        Ok(self)
    }

    /// Add one in place and return the value from before the update.
    ///
    /// ```
    /// # use decimal_bigint::BigInt;
    /// let mut counter = BigInt::from(-1);
    /// let before = counter.post_increment().unwrap();
    /// assert_eq!(before, BigInt::from(-1));
    /// assert_eq!(counter, BigInt::from(0));
    /// ```
    pub fn post_increment(&mut self) -> Result<BigInt> {
        let before = self.clone();
        tri!(self.increment());
        Ok(before)
    }

    /// Subtract one in place and return the value from before the update.
    pub fn post_decrement(&mut self) -> Result<BigInt> {
        let before = self.clone();
        tri!(self.decrement());
        Ok(before)
    }
}

// Same-sign addition of magnitudes. The result carries `sign` unless it is
// zero.
fn add_magnitudes(sign: Sign, x: &[Limb], y: &[Limb]) -> Result<BigInt> {
    BigInt::checked_from_parts(sign, math::add(x, y))
}

// Same-sign subtraction of magnitudes, `x - y` for values whose sign is
// `sign`. When `y` is at least as large as `x` the operands swap and the
// result takes the opposite sign, so the kernel never sees a negative
// difference. Never grows the magnitude.
fn sub_magnitudes(sign: Sign, x: &[Limb], y: &[Limb]) -> BigInt {
    if math::compare(y, x) != Ordering::Less {
        BigInt::from_parts(sign.flip(), math::sub(y, x))
    } else {
        BigInt::from_parts(sign, math::sub(x, y))
    }
}

impl Default for BigInt {
    #[inline]
    fn default() -> Self {
        BigInt::zero()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Positive, Sign::Positive) => math::compare(&self.limbs, &other.limbs),
            // The larger magnitude is the smaller negative value.
            (Sign::Negative, Sign::Negative) => math::compare(&other.limbs, &self.limbs),
        }
    }
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Truthiness: a value is `true` iff its magnitude is nonzero.
impl<'a> From<&'a BigInt> for bool {
    #[inline]
    fn from(value: &'a BigInt) -> bool {
        !value.is_zero()
    }
}

impl From<BigInt> for bool {
    #[inline]
    fn from(value: BigInt) -> bool {
        !value.is_zero()
    }
}
