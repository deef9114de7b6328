//! Conversions between `BigInt` and `u128`.

use crate::bigint::core::BigInt;

/// Converts a `u128` into a `BigInt`.
impl From<u128> for BigInt {
    fn from(value: u128) -> Self {
        let mut n = BigInt::new();
        n.reserve(16);

        for byte in value.to_le_bytes() {
            n.push_byte(byte);
        }

        n.normalize();
        n
    }
}

/// Attempts to convert a `BigInt` into a `u128`.
///
/// Fails if the significant length exceeds 16 bytes.
impl TryFrom<&BigInt> for u128 {
    type Error = ();

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        if value.significant_len() > 16 {
            return Err(());
        }

        let mut v = 0u128;
        for &byte in value.digits().iter().rev() {
            v = (v << 8) | byte as u128;
        }

        Ok(v)
    }
}
