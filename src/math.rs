//! Building-blocks for arbitrary-precision decimal math.
//!
//! These algorithms assume big-endian order for the limb buffers, so for a
//! `vec![3, 2, 1, 0]`, `3` is the most significant limb, and `0` is the least
//! significant limb. Every limb is a base-100000 digit in `[0, 100000)`.
//!
//! The kernels work on magnitudes only. Signs are resolved by the caller in
//! `bigint.rs` before a kernel runs.

use crate::bigint::{Limb, LIMB_BASE};
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

// Accumulator for limb products. A single product is below 10^10, and a
// result slot of a ceiling-sized multiplication sums at most 10^4 of them,
// so 64 bits leave plenty of headroom for the carries.
type Wide = u64;

const WIDE_BASE: Wide = LIMB_BASE as Wide;

// RELATIVE OPERATORS

/// Compare the magnitudes `x` and `y`.
///
/// Both buffers must be normalized: the longer buffer is the larger value,
/// and buffers of equal length compare limb by limb from the most
/// significant end.
pub(crate) fn compare(x: &[Limb], y: &[Limb]) -> Ordering {
    if x.len() > y.len() {
        return Ordering::Greater;
    } else if x.len() < y.len() {
        return Ordering::Less;
    }
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        if xi > yi {
            return Ordering::Greater;
        } else if xi < yi {
            return Ordering::Less;
        }
    }
    Ordering::Equal
}

/// Check if the magnitude is zero. An empty buffer counts as zero.
#[inline]
pub(crate) fn is_zero(x: &[Limb]) -> bool {
    x.iter().all(|&xi| xi == 0)
}

// NORMALIZE

/// Normalize the buffer by removing leading zero limbs.
///
/// A buffer holding the value zero, including an empty one, becomes the
/// single limb `[0]`.
pub(crate) fn normalize(x: &mut Vec<Limb>) {
    match x.iter().position(|&xi| xi != 0) {
        Some(0) => {}
        Some(start) => {
            x.drain(..start);
        }
        None => {
            x.clear();
            x.push(0);
        }
    }
}

// ADDITION

/// Add two magnitudes.
///
/// The shorter buffer is aligned on the least significant limb. A carry out
/// of the most significant limb adds a new limb to the result.
pub(crate) fn add(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };

    // Built least significant first, reversed once at the end.
    let mut z = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;
    let mut short_iter = short.iter().rev();
    for &li in long.iter().rev() {
        let si = short_iter.next().copied().unwrap_or(0);
        let mut sum = li + si + carry;
        if sum >= LIMB_BASE {
            sum -= LIMB_BASE;
            carry = 1;
        } else {
            carry = 0;
        }
        z.push(sum);
    }
    if carry != 0 {
        z.push(carry);
    }

    z.reverse();
    normalize(&mut z);
    z
}

// SUBTRACTION

/// Subtract magnitude `y` from magnitude `x`.
///
/// Requires `x >= y`. A limb that goes negative borrows one `LIMB_BASE` from
/// the next more significant limb.
pub(crate) fn sub(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    debug_assert!(compare(x, y) != Ordering::Less);

    let mut z = Vec::with_capacity(x.len());
    let mut borrow = 0;
    let mut y_iter = y.iter().rev();
    for &xi in x.iter().rev() {
        let yi = y_iter.next().copied().unwrap_or(0) + borrow;
        if xi >= yi {
            z.push(xi - yi);
            borrow = 0;
        } else {
            z.push(xi + LIMB_BASE - yi);
            borrow = 1;
        }
    }
    debug_assert!(borrow == 0);

    z.reverse();
    normalize(&mut z);
    z
}

// MULTIPLICATION

/// Grade-school multiplication of two magnitudes.
///
/// Every limb product is accumulated into the slot `i + j`, counting
/// positions from the least significant limb, and the carries are
/// propagated in a single pass afterwards.
pub(crate) fn mul(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
    let mut slots: Vec<Wide> = vec![0; x.len() + y.len()];
    for (i, &xi) in x.iter().rev().enumerate() {
        if xi == 0 {
            continue;
        }
        for (j, &yj) in y.iter().rev().enumerate() {
            slots[i + j] += Wide::from(xi) * Wide::from(yj);
        }
    }

    for k in 0..slots.len() - 1 {
        slots[k + 1] += slots[k] / WIDE_BASE;
        slots[k] %= WIDE_BASE;
    }

    // Trim zero high slots, keeping at least one.
    while slots.len() > 1 && slots[slots.len() - 1] == 0 {
        slots.pop();
    }

    slots.iter().rev().map(|&slot| slot as Limb).collect()
}

// TESTS
// -----
