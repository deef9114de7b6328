//! Hexadecimal codec.
//!
//! Text form is big-endian, uppercase, two characters per byte, no
//! prefix or separators, leading zero bytes suppressed. The canonical
//! zero therefore encodes as the **empty string**; callers wanting a
//! visible `"0"` get it from the `Display` impl instead.
//!
//! Decoding is deliberately lenient: any character outside
//! `0-9a-fA-F` contributes the nibble value `0`. This mirrors the
//! permissive behavior the format was defined with and is part of the
//! contract, not an accident — only an odd character count is an
//! error.

use crate::bigint::core::{BigInt, BigIntError};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Decodes one character to its nibble value.
///
/// Unrecognized characters decode as zero by design.
fn from_hex_digit(ch: u8) -> u8 {
    match ch {
        b'0'..=b'9' => ch - b'0',
        b'a'..=b'f' => ch - b'a' + 10,
        b'A'..=b'F' => ch - b'A' + 10,
        _ => 0,
    }
}

impl BigInt {
    /// Parses big-endian hexadecimal text.
    ///
    /// Pairs of characters are consumed from the end of the string
    /// toward the start, so the result's least significant byte comes
    /// from the last two characters. Both cases are accepted;
    /// unrecognized characters decode as the nibble `0` (lenient by
    /// design). The empty string parses to zero.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::InvalidEncoding`] if the text has an odd
    /// number of characters.
    pub fn from_hex(text: &str) -> Result<BigInt, BigIntError> {
        let raw = text.as_bytes();
        if raw.len() % 2 != 0 {
            return Err(BigIntError::InvalidEncoding);
        }

        let mut n = BigInt::new();
        n.reserve(raw.len() / 2);

        for pair in raw.rchunks(2) {
            let hi = from_hex_digit(pair[0]);
            let lo = from_hex_digit(pair[1]);
            n.push_byte((hi << 4) | lo);
        }

        n.normalize();
        Ok(n)
    }

    /// Renders the value as uppercase big-endian hexadecimal.
    ///
    /// Leading zero bytes are suppressed; zero renders as the empty
    /// string.
    pub fn to_hex(&self) -> String {
        let len = self.significant_len();
        let mut out = String::with_capacity(len * 2);

        for &byte in self.bytes[..len].iter().rev() {
            out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
            out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
        }

        out
    }

    /// Exact number of characters [`BigInt::to_hex`] would produce.
    ///
    /// This is the size-query mode for callers encoding into their own
    /// buffers: reserve this many bytes and
    /// [`BigInt::encode_hex_into`] cannot fail.
    pub fn hex_len(&self) -> usize {
        self.significant_len() * 2
    }

    /// Encodes into a caller-supplied buffer, returning the number of
    /// bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::BufferTooSmall`] with the required size
    /// if `out` cannot hold the full encoding; nothing is written in
    /// that case.
    pub fn encode_hex_into(&self, out: &mut [u8]) -> Result<usize, BigIntError> {
        let required = self.hex_len();
        if out.len() < required {
            return Err(BigIntError::BufferTooSmall { required });
        }

        let len = self.significant_len();
        for (i, &byte) in self.bytes[..len].iter().rev().enumerate() {
            out[2 * i] = HEX_DIGITS[(byte >> 4) as usize];
            out[2 * i + 1] = HEX_DIGITS[(byte & 0x0F) as usize];
        }

        Ok(required)
    }
}
