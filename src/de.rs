//! Reading `BigInt` values from whitespace-delimited text.
//!
//! A token is an optional `+` or `-` followed by one or more decimal digits.
//! Tokens are separated by ASCII whitespace (space, `\t`, `\n`, `\v`, `\f`,
//! `\r`).

use crate::bigint::{BigInt, Sign, MAX_TOKEN_LEN};
use crate::error::{Error, ErrorCode, Result};
use crate::parse;
use crate::read::{self, Read};
use alloc::vec::Vec;
use core::fmt;
use core::result;
use serde::de::{self, Deserialize, Deserializer, Visitor};

#[cfg(feature = "std")]
use std::io;

//////////////////////////////////////////////////////////////////////////////

/// A structure that reads `BigInt` tokens from a byte source.
pub struct Parser<R> {
    read: R,
    scratch: Vec<u8>,
}

impl<R> Parser<R>
where
    R: Read,
{
    /// Create a parser from one of the possible decimal_bigint input
    /// sources.
    ///
    /// Typically it is more convenient to use one of these methods instead:
    ///
    ///   - Parser::from_str
    ///   - Parser::from_slice
    ///   - Parser::from_reader
    pub fn new(read: R) -> Self {
        Parser {
            read,
            scratch: Vec::new(),
        }
    }
}

#[cfg(feature = "std")]
impl<R> Parser<read::IoRead<R>>
where
    R: io::Read,
{
    /// Creates a parser from an `io::Read`.
    ///
    /// The reader is consumed one byte at a time. Wrap it in a
    /// [`BufReader`](std::io::BufReader) if short reads are expensive.
    pub fn from_reader(reader: R) -> Self {
        Parser::new(read::IoRead::new(reader))
    }
}

impl<'a> Parser<read::SliceRead<'a>> {
    /// Creates a parser from a `&[u8]`.
    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Parser::new(read::SliceRead::new(bytes))
    }
}

impl<'a> Parser<read::StrRead<'a>> {
    /// Creates a parser from a `&str`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &'a str) -> Self {
        Parser::new(read::StrRead::new(s))
    }
}

impl<R: Read> Parser<R> {
    /// The `Parser::end` method should be called after a value has been fully
    /// read. This allows the `Parser` to validate that the input stream is at
    /// the end or that it only has trailing whitespace.
    pub fn end(&mut self) -> Result<()> {
        match tri!(self.parse_whitespace()) {
            Some(_) => Err(self.peek_error(ErrorCode::TrailingCharacters)),
            None => Ok(()),
        }
    }

    /// Turn a parser into an iterator over all tokens of the input.
    #[allow(clippy::should_implement_trait)]
    pub fn into_iter(self) -> StreamParser<R> {
        StreamParser {
            de: self,
            failed: false,
        }
    }

    /// Skip whitespace and read the next token.
    ///
    /// Fails with `EofWhileParsingValue` if the input holds no further token,
    /// with `InvalidNumber` if the token is not a decimal integer, and with
    /// `Overflow` if it is longer than [`MAX_TOKEN_LEN`] bytes or needs more
    /// than [`MAX_LIMBS`](crate::MAX_LIMBS) limbs.
    pub fn parse_bigint(&mut self) -> Result<BigInt> {
        let sign = match tri!(self.parse_whitespace()) {
            Some(b'-') => {
                self.read.discard();
                Some(Sign::Negative)
            }
            Some(b'+') => {
                self.read.discard();
                Some(Sign::Positive)
            }
            Some(_) => None,
            None => return Err(self.peek_error(ErrorCode::EofWhileParsingValue)),
        };

        self.scratch.clear();
        let mut token_len = usize::from(sign.is_some());
        loop {
            match tri!(self.read.peek()) {
                Some(ch @ b'0'..=b'9') => {
                    if token_len == MAX_TOKEN_LEN {
                        return Err(self.peek_error(ErrorCode::Overflow));
                    }
                    self.scratch.push(ch);
                    self.read.discard();
                    token_len += 1;
                }
                Some(ch) if !is_whitespace(ch) => {
                    return Err(self.peek_error(ErrorCode::InvalidNumber));
                }
                _ => break,
            }
        }

        if self.scratch.is_empty() {
            return Err(self.peek_error(ErrorCode::InvalidNumber));
        }

        match parse::from_digits(sign.unwrap_or(Sign::Positive), &self.scratch) {
            Ok(value) => Ok(value),
            Err(err) => Err(err.fix_position(|code| self.error(code))),
        }
    }

    /// Returns the first non-whitespace byte without consuming it, or `None`
    /// if EOF is encountered.
    fn parse_whitespace(&mut self) -> Result<Option<u8>> {
        loop {
            match tri!(self.read.peek()) {
                Some(ch) if is_whitespace(ch) => {
                    self.read.discard();
                }
                other => {
                    return Ok(other);
                }
            }
        }
    }

    /// Error caused by a byte from the input, at the position of the last
    /// consumed byte.
    #[cold]
    fn error(&self, reason: ErrorCode) -> Error {
        let position = self.read.position();
        Error::syntax(reason, position.line, position.column)
    }

    /// Error caused by the byte returned by the most recent peek().
    #[cold]
    fn peek_error(&self, reason: ErrorCode) -> Error {
        let position = self.read.peek_position();
        Error::syntax(reason, position.line, position.column)
    }
}

// Whitespace as classified by C's `isspace` in the "C" locale.
fn is_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

//////////////////////////////////////////////////////////////////////////////

/// Iterator that reads every whitespace-delimited `BigInt` from an input.
///
/// A stream parser can be created from any parser using the
/// `Parser::into_iter` method. Iteration stops at the end of the input, or
/// after the first error has been returned.
///
/// ```
/// use decimal_bigint::{BigInt, Parser};
///
/// let data = "1 -20\n  300  ";
/// let stream = Parser::from_str(data).into_iter();
///
/// let values: Vec<String> = stream.map(|value| value.unwrap().to_string()).collect();
/// assert_eq!(values, ["1", "-20", "300"]);
/// ```
pub struct StreamParser<R> {
    de: Parser<R>,
    failed: bool,
}

impl<R> StreamParser<R>
where
    R: Read,
{
    /// Create a stream parser from one of the possible decimal_bigint input
    /// sources.
    pub fn new(read: R) -> Self {
        Parser::new(read).into_iter()
    }

    /// Returns the number of bytes so far read from the input. The count
    /// includes the whitespace skipped before a value but not the whitespace
    /// after it.
    ///
    /// ```
    /// use decimal_bigint::{BigInt, StreamParser};
    /// use decimal_bigint::read::SliceRead;
    ///
    /// let data = b"  12 -3x";
    /// let mut stream = StreamParser::new(SliceRead::new(data));
    /// assert_eq!(stream.next().unwrap().unwrap(), BigInt::from(12));
    /// assert_eq!(stream.byte_offset(), 4);
    /// assert!(stream.next().unwrap().is_err());
    /// assert_eq!(stream.byte_offset(), 7);
    /// assert!(stream.next().is_none());
    /// ```
    pub fn byte_offset(&self) -> usize {
        self.de.read.byte_offset()
    }
}

impl<R> Iterator for StreamParser<R>
where
    R: Read,
{
    type Item = Result<BigInt>;

    fn next(&mut self) -> Option<Result<BigInt>> {
        if self.failed {
            return None;
        }

        // Skip whitespace first so that trailing whitespace ends the stream
        // instead of producing an EOF error.
        match self.de.parse_whitespace() {
            Ok(None) => None,
            Ok(Some(_)) => {
                let result = self.de.parse_bigint();
                self.failed = result.is_err();
                Some(result)
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

//////////////////////////////////////////////////////////////////////////////

fn from_trait<R>(read: R) -> Result<BigInt>
where
    R: Read,
{
    let mut de = Parser::new(read);
    let value = tri!(de.parse_bigint());

    // Make sure the whole stream has been consumed.
    tri!(de.end());
    Ok(value)
}

/// Read a single `BigInt` from an IO stream.
///
/// The content of the stream must be exactly one token, optionally
/// surrounded by whitespace.
///
/// ```
/// use std::io::Cursor;
///
/// let reader = Cursor::new("\n  -12345678901234567890\n");
/// let value = decimal_bigint::from_reader(reader).unwrap();
/// assert_eq!(value.to_string(), "-12345678901234567890");
/// ```
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn from_reader<R>(rdr: R) -> Result<BigInt>
where
    R: io::Read,
{
    from_trait(read::IoRead::new(rdr))
}

/// Read a single `BigInt` from bytes.
pub fn from_slice(v: &[u8]) -> Result<BigInt> {
    from_trait(read::SliceRead::new(v))
}

/// Read a single `BigInt` from a string, allowing surrounding whitespace.
///
/// ```
/// let value = decimal_bigint::from_str(" +7 ").unwrap();
/// assert_eq!(value, decimal_bigint::BigInt::from(7));
///
/// let err = decimal_bigint::from_str("7 8").unwrap_err();
/// assert_eq!(err.to_string(), "trailing characters at line 1 column 3");
/// ```
pub fn from_str(s: &str) -> Result<BigInt> {
    from_trait(read::StrRead::new(s))
}

//////////////////////////////////////////////////////////////////////////////

struct BigIntVisitor;

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal integer")
    }

    #[inline]
    fn visit_i64<E>(self, value: i64) -> result::Result<BigInt, E> {
        Ok(BigInt::from(value))
    }

    #[inline]
    fn visit_i128<E>(self, value: i128) -> result::Result<BigInt, E> {
        Ok(BigInt::from(value))
    }

    #[inline]
    fn visit_u64<E>(self, value: u64) -> result::Result<BigInt, E> {
        Ok(BigInt::from(value))
    }

    #[inline]
    fn visit_u128<E>(self, value: u128) -> result::Result<BigInt, E> {
        Ok(BigInt::from(value))
    }

    fn visit_str<E>(self, value: &str) -> result::Result<BigInt, E>
    where
        E: de::Error,
    {
        // Only the code: the position inside `value` means nothing to the
        // outer format's error.
        value.parse().map_err(|err: Error| E::custom(err.code()))
    }
}

/// Accepts a decimal string or any native integer.
impl<'de> Deserialize<'de> for BigInt {
    #[inline]
    fn deserialize<D>(deserializer: D) -> result::Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntVisitor)
    }
}
