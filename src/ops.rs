//! Operator overloads for `BigInt`.
//!
//! Every binary operator is implemented for the four combinations of owned
//! and borrowed operands and delegates to the matching `checked_*` method.
//! A result beyond the limb ceiling panics, the way `+` on a primitive
//! integer panics on overflow in debug builds.
//!
//! ```
//! # use decimal_bigint::BigInt;
//! let a = BigInt::from(99999);
//! let b = BigInt::from(1);
//! assert_eq!(&a + &b, BigInt::from(100000));
//! assert_eq!(&b - &a, BigInt::from(-99998));
//! assert_eq!(-&a * b, BigInt::from(-99999));
//! ```

use crate::bigint::BigInt;
use crate::error::Error;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cold]
#[track_caller]
fn overflow(verb: &str, err: Error) -> ! {
    panic!("attempt to {} with overflow: {}", verb, err)
}

macro_rules! impl_binop {
    ($trait:ident $method:ident, $assign_trait:ident $assign_method:ident, $checked:ident, $verb:expr) => {
        impl<'a, 'b> $trait<&'b BigInt> for &'a BigInt {
            type Output = BigInt;

            #[track_caller]
            fn $method(self, rhs: &'b BigInt) -> BigInt {
                match self.$checked(rhs) {
                    Ok(value) => value,
                    Err(err) => overflow($verb, err),
                }
            }
        }

        impl<'a> $trait<BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            #[track_caller]
            fn $method(self, rhs: BigInt) -> BigInt {
                $trait::$method(self, &rhs)
            }
        }

        impl<'b> $trait<&'b BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            #[track_caller]
            fn $method(self, rhs: &'b BigInt) -> BigInt {
                $trait::$method(&self, rhs)
            }
        }

        impl $trait<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            #[track_caller]
            fn $method(self, rhs: BigInt) -> BigInt {
                $trait::$method(&self, &rhs)
            }
        }

        impl<'b> $assign_trait<&'b BigInt> for BigInt {
            #[inline]
            #[track_caller]
            fn $assign_method(&mut self, rhs: &'b BigInt) {
                *self = $trait::$method(&*self, rhs);
            }
        }

        impl $assign_trait<BigInt> for BigInt {
            #[inline]
            #[track_caller]
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = $trait::$method(&*self, &rhs);
            }
        }
    };
}

impl_binop!(Add add, AddAssign add_assign, checked_add, "add");
impl_binop!(Sub sub, SubAssign sub_assign, checked_sub, "subtract");
impl_binop!(Mul mul, MulAssign mul_assign, checked_mul, "multiply");

/// Negation flips the sign. Zero stays positive.
impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(self.sign.flip(), self.limbs.clone())
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(self.sign.flip(), self.limbs)
    }
}
