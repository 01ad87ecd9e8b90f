//! Writing `BigInt` values as decimal text.

use crate::bigint::{BigInt, LIMB_DIGITS};
use crate::error::{Error, Result};
use crate::io;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};
use core::result;
use serde::ser::{Serialize, Serializer};

const ZEROS: &str = "00000";

/// Feed the decimal text of `value` to `emit` one piece at a time: the sign,
/// then the magnitude.
pub(crate) fn format_pieces<E, F>(value: &BigInt, mut emit: F) -> result::Result<(), E>
where
    F: FnMut(&str) -> result::Result<(), E>,
{
    if value.is_negative() {
        tri!(emit("-"));
    }
    format_magnitude(value, emit)
}

// The most significant limb without padding, then every further limb
// zero-padded to five digits.
fn format_magnitude<E, F>(value: &BigInt, mut emit: F) -> result::Result<(), E>
where
    F: FnMut(&str) -> result::Result<(), E>,
{
    let mut buffer = itoa::Buffer::new();
    let mut limbs = value.limbs().iter();
    if let Some(&first) = limbs.next() {
        tri!(emit(buffer.format(first)));
    }
    for &limb in limbs {
        let digits = buffer.format(limb);
        tri!(emit(&ZEROS[..LIMB_DIGITS - digits.len()]));
        tri!(emit(digits));
    }
    Ok(())
}

fn write_bigint<W>(writer: &mut W, value: &BigInt) -> Result<()>
where
    W: ?Sized + io::Write,
{
    format_pieces(value, |piece| writer.write_all(piece.as_bytes())).map_err(Error::io)
}

/// Formats the value in base 10 with a leading `-` when negative and no
/// redundant leading zeros. Width, fill, alignment, `+` and `0` flags behave
/// as they do for primitive integers.
///
/// ```
/// # use decimal_bigint::BigInt;
/// let value: BigInt = "-000100000000007".parse().unwrap();
/// assert_eq!(value.to_string(), "-100000000007");
/// assert_eq!(format!("[{:>8}]", BigInt::from(42)), "[      42]");
/// ```
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.width().is_none() && !f.sign_plus() {
            return format_pieces(self, |piece| f.write_str(piece));
        }

        let mut digits = String::with_capacity(self.limb_count() * LIMB_DIGITS);
        tri!(format_magnitude(self, |piece| {
            digits.push_str(piece);
            Ok::<(), fmt::Error>(())
        }));
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl Debug for BigInt {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("BigInt(")?;
        Display::fmt(self, formatter)?;
        formatter.write_str(")")
    }
}

/// Serializes as a decimal string, which every data format can carry
/// regardless of the magnitude.
impl Serialize for BigInt {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Write the decimal text of a `BigInt` into the IO stream.
///
/// # Errors
///
/// Fails if the writer fails.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[inline]
pub fn to_writer<W>(mut writer: W, value: &BigInt) -> Result<()>
where
    W: io::Write,
{
    write_bigint(&mut writer, value)
}

/// Write the decimal text of a `BigInt` into a byte vector.
#[inline]
pub fn to_vec(value: &BigInt) -> Result<Vec<u8>> {
    // Upper bound on the text: one sign byte and five digits per limb.
    let mut writer = Vec::with_capacity(1 + value.limb_count() * LIMB_DIGITS);
    tri!(write_bigint(&mut writer, value));
    Ok(writer)
}

/// Write the decimal text of a `BigInt` into a `String`.
///
/// Equivalent to `value.to_string()`, but reports failure through `Result`
/// like the other writers in this module.
#[inline]
pub fn to_string(value: &BigInt) -> Result<String> {
    let vec = tri!(to_vec(value));
    let string = unsafe {
        // We do not emit invalid UTF-8.
        String::from_utf8_unchecked(vec)
    };
    Ok(string)
}
