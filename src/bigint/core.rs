//! Big-integer storage and canonical form.
//!
//! This module defines the [`BigInt`] type itself: a growable
//! little-endian byte buffer with an explicit logical length, plus the
//! small set of storage operations everything else is built on.
//!
//! The representation is **not** required to stay normalized at all
//! times. Intermediate arithmetic may leave zero bytes at the most
//! significant end; [`BigInt::normalize`] trims them back to the
//! canonical significant length. Operations that depend on significant
//! length (comparison, division, hex export) normalize first.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Variable-length unsigned integer.
///
/// The value is stored as a sequence of base-256 digits in
/// **little-endian** order: index 0 holds the least significant byte.
/// `size` counts the bytes currently in use; bytes at or above `size`
/// are not guaranteed to be zero unless explicitly wiped with
/// [`BigInt::zeroize`].
///
/// The empty sequence (`size == 0`) is the canonical zero.
#[derive(Clone, Debug, Default)]
pub struct BigInt {
    pub(crate) bytes: Vec<u8>,
    pub(crate) size: usize,
}

/// Errors reported by big-integer operations.
///
/// Allocation failure is deliberately absent: buffer growth follows the
/// standard library's allocate-or-abort behavior, so an out-of-memory
/// condition never surfaces as a recoverable error.
#[derive(Debug)]
pub enum BigIntError {
    /// The divisor (or modulus) normalizes to zero.
    DivisionByZero,

    /// Hexadecimal input has an odd number of characters.
    InvalidEncoding,

    /// A caller-supplied output buffer is too small.
    ///
    /// `required` is the exact number of bytes the operation needs;
    /// nothing has been written to the buffer.
    BufferTooSmall { required: usize },
}

impl BigInt {
    /// The value zero.
    pub const ZERO: Self = BigInt {
        bytes: Vec::new(),
        size: 0,
    };

    /// Creates an empty integer with no backing storage.
    ///
    /// An empty integer is the canonical zero. Storage is allocated on
    /// demand as bytes are appended.
    pub const fn new() -> Self {
        BigInt {
            bytes: Vec::new(),
            size: 0,
        }
    }

    /// Grows the backing buffer to at least `capacity` bytes.
    ///
    /// Newly added bytes are zero-initialized; existing bytes and the
    /// logical length are preserved. Shrinking is a no-op.
    pub fn reserve(&mut self, capacity: usize) {
        if self.bytes.len() < capacity {
            self.bytes.resize(capacity, 0);
        }
    }

    /// Appends one byte at the most significant end, growing storage as
    /// needed.
    pub fn push_byte(&mut self, v: u8) {
        self.reserve(self.size + 1);
        self.bytes[self.size] = v;
        self.size += 1;
    }

    /// Resets the logical length to zero without touching the bytes.
    ///
    /// Stale bytes remain in the buffer but are logically ignored. Use
    /// [`BigInt::zeroize`] when the buffer is about to be accumulated
    /// into positionally.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Resets the logical length to zero and zero-fills the entire
    /// allocated capacity.
    ///
    /// Required before accumulating a result via positional addition,
    /// so stale bytes cannot leak into it.
    pub fn zeroize(&mut self) {
        self.size = 0;
        self.bytes.fill(0);
    }

    /// Trims zero bytes from the most significant end until the top
    /// byte is nonzero or the value is the canonical zero.
    ///
    /// Idempotent.
    pub fn normalize(&mut self) {
        while self.size > 0 && self.bytes[self.size - 1] == 0 {
            self.size -= 1;
        }
    }

    /// Returns `true` if the value is numerically zero.
    ///
    /// A buffer of all-zero bytes with a nonzero logical length is
    /// still zero; this test does not require normalization.
    pub fn is_zero(&self) -> bool {
        self.bytes[..self.size].iter().all(|&b| b == 0)
    }

    /// Returns `true` if the value is odd.
    ///
    /// The canonical zero (empty sequence) is even.
    pub fn is_odd(&self) -> bool {
        self.size > 0 && self.bytes[0] & 1 == 1
    }

    /// Significant length in bytes, ignoring most-significant zero
    /// bytes, without mutating the value.
    pub(crate) fn significant_len(&self) -> usize {
        let mut len = self.size;
        while len > 0 && self.bytes[len - 1] == 0 {
            len -= 1;
        }
        len
    }

    /// The significant digits, least significant first.
    pub(crate) fn digits(&self) -> &[u8] {
        &self.bytes[..self.significant_len()]
    }

    /// The digit at position `i`, treating positions beyond the logical
    /// length as zero.
    pub(crate) fn digit(&self, i: usize) -> u8 {
        if i < self.size { self.bytes[i] } else { 0 }
    }

    /// The digit `offset` positions below the most significant one.
    ///
    /// Only meaningful on a normalized, nonzero value.
    pub(crate) fn top_digit(&self, offset: usize) -> u32 {
        self.bytes[self.size - 1 - offset] as u32
    }
}

/// Compares two little-endian digit slices by numeric value.
///
/// Trailing (most significant) zero bytes are ignored, so callers may
/// pass unnormalized slices. Longer significant length wins; equal
/// lengths are decided by the first byte difference from the most
/// significant end.
pub(crate) fn cmp_digits(a: &[u8], b: &[u8]) -> Ordering {
    let mut a_len = a.len();
    while a_len > 0 && a[a_len - 1] == 0 {
        a_len -= 1;
    }
    let mut b_len = b.len();
    while b_len > 0 && b[b_len - 1] == 0 {
        b_len -= 1;
    }

    if a_len != b_len {
        return a_len.cmp(&b_len);
    }

    for i in (0..a_len).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }

    Ordering::Equal
}

impl Display for BigInt {
    /// Formats the value as uppercase big-endian hexadecimal.
    ///
    /// Zero renders as `"0"`; every other value renders with its
    /// leading zero bytes suppressed, two characters per byte.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_zero() {
            return f.write_str("0");
        }
        f.write_str(&self.to_hex())
    }
}
