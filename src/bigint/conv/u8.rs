//! Conversions between `BigInt` and `u8`.
//!
//! Single-byte values are the digits of the representation itself; the
//! division routine relies on this conversion to lift a candidate
//! quotient digit into a one-digit `BigInt`.

use crate::bigint::core::BigInt;

/// Converts a `u8` into a `BigInt` of at most one digit.
impl From<u8> for BigInt {
    fn from(value: u8) -> Self {
        let mut n = BigInt::new();
        n.push_byte(value);
        n.normalize();
        n
    }
}

/// Attempts to convert a `BigInt` into a `u8`.
///
/// Fails if the significant length exceeds one byte.
impl TryFrom<&BigInt> for u8 {
    type Error = ();

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        if value.significant_len() > 1 {
            return Err(());
        }

        Ok(value.digits().first().copied().unwrap_or(0))
    }
}
