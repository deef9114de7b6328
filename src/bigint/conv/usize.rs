//! Conversions between `BigInt` and `usize`.
//!
//! Width follows the target platform; both impls go through the
//! platform byte width rather than assuming 64 bits.

use crate::bigint::core::BigInt;

/// Converts a `usize` into a `BigInt`.
impl From<usize> for BigInt {
    fn from(value: usize) -> Self {
        let mut n = BigInt::new();
        n.reserve(size_of::<usize>());

        for byte in value.to_le_bytes() {
            n.push_byte(byte);
        }

        n.normalize();
        n
    }
}

/// Attempts to convert a `BigInt` into a `usize`.
///
/// Fails if the significant length exceeds the platform word width.
impl TryFrom<&BigInt> for usize {
    type Error = ();

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        if value.significant_len() > size_of::<usize>() {
            return Err(());
        }

        let mut v = 0usize;
        for &byte in value.digits().iter().rev() {
            v = (v << 8) | byte as usize;
        }

        Ok(v)
    }
}
