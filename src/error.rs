//! When parsing, formatting or computing a `BigInt` goes wrong.

use crate::io;
use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display};
use core::result;
#[cfg(feature = "std")]
use std::error;

/// This type represents all possible errors that can occur when reading,
/// writing or computing with a [`BigInt`](crate::BigInt).
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible. A
    /// larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `decimal_bigint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based line number at which the error was detected.
    ///
    /// Arithmetic errors are not tied to a position in any input and report
    /// line 0.
    pub fn line(&self) -> usize {
        self.err.line
    }

    /// One-based column number at which the error was detected.
    ///
    /// Arithmetic errors report column 0.
    pub fn column(&self) -> usize {
        self.err.column
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Io` - failure to read or write bytes on an IO stream
    /// - `Category::Syntax` - input that is not a decimal integer token
    /// - `Category::Eof` - end of input before any token was found
    /// - `Category::Arithmetic` - limb ceiling exceeded or unsupported division
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::Io(_) => Category::Io,
            ErrorCode::EofWhileParsingValue => Category::Eof,
            ErrorCode::InvalidNumber | ErrorCode::TrailingCharacters => Category::Syntax,
            ErrorCode::Overflow | ErrorCode::DivisionByZero | ErrorCode::DivisionUnsupported => {
                Category::Arithmetic
            }
        }
    }

    /// Returns true if this error was caused by a failure to read or write
    /// bytes on an IO stream.
    pub fn is_io(&self) -> bool {
        self.classify() == Category::Io
    }

    /// Returns true if this error was caused by input that was not a
    /// syntactically valid decimal integer.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by reaching the end of the input
    /// before a value was found.
    pub fn is_eof(&self) -> bool {
        self.classify() == Category::Eof
    }

    /// Returns true if this error was caused by an operation whose result
    /// cannot be represented, or which is not supported.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }

    /// Returns true if a magnitude exceeded [`MAX_LIMBS`](crate::MAX_LIMBS).
    pub fn is_overflow(&self) -> bool {
        self.err.code == ErrorCode::Overflow
    }
}

/// Categorizes the cause of a `decimal_bigint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by a failure to read or write bytes on an IO
    /// stream.
    Io,

    /// The error was caused by input that was not a decimal integer.
    Syntax,

    /// The error was caused by reaching the end of the input data before a
    /// value started.
    Eof,

    /// The error was caused by an arithmetic operation: a result too large
    /// for the limb ceiling, or a division.
    Arithmetic,
}

#[cfg(feature = "std")]
#[allow(clippy::fallible_impl_from)]
impl From<Error> for io::Error {
    /// Convert a `decimal_bigint::Error` into an `io::Error`.
    ///
    /// Syntax and arithmetic errors are turned into `InvalidData` IO
    /// errors. EOF errors are turned into `UnexpectedEof` IO errors.
    fn from(j: Error) -> Self {
        if let ErrorCode::Io(err) = j.err.code {
            err
        } else {
            match j.classify() {
                Category::Io => unreachable!(),
                Category::Syntax | Category::Arithmetic => {
                    io::Error::new(io::ErrorKind::InvalidData, j)
                }
                Category::Eof => io::Error::new(io::ErrorKind::UnexpectedEof, j),
            }
        }
    }
}

struct ErrorImpl {
    code: ErrorCode,
    line: usize,
    column: usize,
}

/// This type describes all possible errors that can occur when reading,
/// writing or computing with a `BigInt`.
pub enum ErrorCode {
    /// Some IO error occurred while reading or writing.
    Io(io::Error),

    /// EOF while looking for the start of a value.
    EofWhileParsingValue,

    /// Input is not an optional sign followed by one or more decimal digits.
    InvalidNumber,

    /// Input has non-whitespace trailing characters after the value.
    TrailingCharacters,

    /// The magnitude needs more limbs than the ceiling allows.
    Overflow,

    /// Division or remainder with a zero divisor.
    DivisionByZero,

    /// Division or remainder with a non-zero divisor, which is not
    /// implemented.
    DivisionUnsupported,
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Io(_) => f.debug_tuple("Io").finish(),
            ErrorCode::EofWhileParsingValue => f.write_str("EofWhileParsingValue"),
            ErrorCode::InvalidNumber => f.write_str("InvalidNumber"),
            ErrorCode::TrailingCharacters => f.write_str("TrailingCharacters"),
            ErrorCode::Overflow => f.write_str("Overflow"),
            ErrorCode::DivisionByZero => f.write_str("DivisionByZero"),
            ErrorCode::DivisionUnsupported => f.write_str("DivisionUnsupported"),
        }
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ErrorCode::Io(_), ErrorCode::Io(_)) => true,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl Error {
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, line: usize, column: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, line, column }),
        }
    }

    #[cold]
    pub(crate) fn arithmetic(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code,
                line: 0,
                column: 0,
            }),
        }
    }

    #[cold]
    pub(crate) fn io(error: io::Error) -> Self {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::Io(error),
                line: 0,
                column: 0,
            }),
        }
    }

    #[cold]
    pub(crate) fn fix_position<F>(self, f: F) -> Self
    where
        F: FnOnce(ErrorCode) -> Error,
    {
        if self.err.line == 0 {
            f(self.err.code)
        } else {
            self
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Io(err) => Display::fmt(err, f),
            ErrorCode::EofWhileParsingValue => f.write_str("EOF while parsing a value"),
            ErrorCode::InvalidNumber => f.write_str("invalid number"),
            ErrorCode::TrailingCharacters => f.write_str("trailing characters"),
            ErrorCode::Overflow => f.write_str("BigInt overflow"),
            ErrorCode::DivisionByZero => f.write_str("BigInt division by zero"),
            ErrorCode::DivisionUnsupported => f.write_str("BigInt division is not supported"),
        }
    }
}

impl serde::de::StdError for Error {
    #[cfg(feature = "std")]
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.err.code {
            ErrorCode::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.line == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(
                f,
                "{} at line {} column {}",
                self.code, self.line, self.column
            )
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, line: {}, column: {})",
            self.err.code.to_string(),
            self.err.line,
            self.err.column
        )
    }
}
