//! A tiny, `no_std`-friendly facade around `std::io`.
//! Reexports types from `std` when available; otherwise reimplements and
//! provides some of the core logic.
//!
//! The decimal writer in `ser` targets `io::Write` so that the same code
//! serves `to_writer` and `to_vec`. Without `std`, only the `Vec<u8>` sink is
//! available.

#[cfg(not(feature = "std"))]
mod core;

#[cfg(feature = "std")]
pub use std::io::{Error, ErrorKind, Result, Write};

#[cfg(not(feature = "std"))]
pub use self::core::{Error, ErrorKind, Result, Write};
