//! Conversions between `BigInt` and `u32`.

use crate::bigint::core::BigInt;

/// Converts a `u32` into a `BigInt`.
impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        let mut n = BigInt::new();
        n.reserve(4);

        for byte in value.to_le_bytes() {
            n.push_byte(byte);
        }

        n.normalize();
        n
    }
}

/// Attempts to convert a `BigInt` into a `u32`.
///
/// Fails if the significant length exceeds 4 bytes.
impl TryFrom<&BigInt> for u32 {
    type Error = ();

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        if value.significant_len() > 4 {
            return Err(());
        }

        Ok(value.to_u64() as u32)
    }
}
