//! # decimal_bigint
//!
//! Sign-magnitude arbitrary-precision integers.
//!
//! A [`BigInt`] stores its magnitude as a sequence of base-100000 limbs, most
//! significant limb first, together with a separate [`Sign`]. Values are
//! plain owned data: cloning a `BigInt` copies its limbs and no two values
//! ever share storage.
//!
//! ```
//! use decimal_bigint::BigInt;
//!
//! # fn main() -> decimal_bigint::Result<()> {
//! let a: BigInt = "123".parse()?;
//! let b: BigInt = "-23".parse()?;
//! assert_eq!(a.checked_add(&b)?, BigInt::from(100));
//!
//! let big: BigInt = "999999999999".parse()?;
//! assert_eq!((&big * &BigInt::from(-1)).to_string(), "-999999999999");
//! # Ok(())
//! # }
//! ```
//!
//! # Limits
//!
//! The magnitude may hold at most [`MAX_LIMBS`] limbs. Parsing text, adding
//! or multiplying values whose result would need more limbs fails with an
//! [`ErrorCode::Overflow`] error. The `checked_*` methods report this as an
//! [`Error`]; the operator overloads (`+`, `-`, `*` and their compound
//! forms) panic instead, the same way primitive integers do on overflow.
//!
//! # Reading and writing text
//!
//! Besides [`FromStr`](core::str::FromStr) and [`Display`](core::fmt::Display),
//! whitespace separated values can be read from any byte source:
//!
//! ```
//! use decimal_bigint::{BigInt, Parser};
//!
//! let input = "12 -7\n+100000";
//! let values: Vec<BigInt> = Parser::from_str(input)
//!     .into_iter()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(values, [BigInt::from(12), BigInt::from(-7), BigInt::from(100000)]);
//! ```
//!
//! # Division
//!
//! Division and remainder are part of the interface but are not implemented.
//! [`BigInt::checked_div`] and [`BigInt::checked_rem`] always fail, with
//! [`ErrorCode::DivisionByZero`] for a zero divisor and
//! [`ErrorCode::DivisionUnsupported`] otherwise.

#![doc(html_root_url = "https://docs.rs/decimal_bigint/0.1.0")]
// Ignored clippy lints
#![allow(
    clippy::comparison_chain,
    clippy::len_without_is_empty,
    clippy::manual_range_contains,
    clippy::match_like_matches_macro,
)]
// Ignored clippy_pedantic lints
#![allow(
    clippy::cast_possible_truncation,
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
)]
#![deny(missing_docs)]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error! {
    "decimal_bigint requires that either `std` (default) or `alloc` feature is enabled"
}

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Not public API. Used by the derive-free serde impls in `ser` and `de`.
extern crate serde_core as serde;

#[macro_use]
mod macros;

pub mod bigint;
pub mod de;
pub mod error;
pub mod read;
pub mod ser;

mod io;
#[cfg(feature = "std")]
mod iter;
mod math;
mod ops;
mod parse;

#[doc(inline)]
pub use crate::bigint::{BigInt, Limb, Sign, LIMB_BASE, LIMB_DIGITS, MAX_LIMBS, MAX_TOKEN_LEN};
#[cfg(feature = "std")]
#[doc(inline)]
pub use crate::de::from_reader;
#[doc(inline)]
pub use crate::de::{from_slice, from_str, Parser, StreamParser};
#[doc(inline)]
pub use crate::error::{Error, ErrorCode, Result};
#[cfg(feature = "std")]
#[doc(inline)]
pub use crate::ser::to_writer;
#[doc(inline)]
pub use crate::ser::{to_string, to_vec};
