#![no_std]

pub use decimal_bigint::*;
