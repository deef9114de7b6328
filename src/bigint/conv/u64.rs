//! Conversions between `BigInt` and `u64`.
//!
//! This is the primary fixed-width boundary of the crate: an 8-byte
//! little-endian quantity maps directly onto the low digits of a
//! `BigInt`.

use crate::bigint::core::BigInt;

/// Converts a `u64` into a `BigInt`.
///
/// The value occupies the least significant bytes; the result is
/// normalized, so high zero bytes are trimmed away.
impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        let mut n = BigInt::new();
        n.reserve(8);

        for byte in value.to_le_bytes() {
            n.push_byte(byte);
        }

        n.normalize();
        n
    }
}

/// Attempts to convert a `BigInt` into a `u64`.
///
/// Fails if the significant length exceeds 8 bytes.
impl TryFrom<&BigInt> for u64 {
    type Error = ();

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        if value.significant_len() > 8 {
            return Err(());
        }

        Ok(value.to_u64())
    }
}

impl BigInt {
    /// Truncating conversion to `u64`.
    ///
    /// Folds the significant bytes from the most significant end down,
    /// so a value wider than 8 bytes wraps to its low 64 bits. Callers
    /// must not rely on correctness above `2^64 - 1`; use
    /// `u64::try_from` for the checked form.
    pub fn to_u64(&self) -> u64 {
        let mut v = 0u64;

        for &byte in self.digits().iter().rev() {
            v = (v << 8) | byte as u64;
        }

        v
    }
}
