//! Base-256 long division.
//!
//! This is the heart of the crate: Knuth-style long division over byte
//! digits, producing quotient and remainder in one pass.
//!
//! The algorithm walks a [`Window`] — a non-owning view over the most
//! significant bytes of a working copy of the numerator — from the top
//! of the buffer down to its start. At each position it estimates one
//! quotient digit from the leading bytes, corrects the estimate
//! downward until `candidate * divisor <= window`, then subtracts the
//! product from the window **in place** through a borrow-chain
//! subtraction. Quotient digits come out most significant first and are
//! reversed at the end.
//!
//! Exactly one window exists per division call, it never outlives the
//! call, and every access goes through a bounds-checked slice into the
//! working remainder.

use crate::bigint::core::{BigInt, BigIntError, cmp_digits};

use std::cmp::Ordering;

/// A transient view over the most significant bytes of the working
/// remainder.
///
/// The window does not own memory: `bytes` borrows the remainder's
/// significant digits for the duration of the division, and
/// `start..start + len` marks the slice of them still being processed.
/// Mutating through the window mutates the remainder directly.
struct Window<'a> {
    bytes: &'a mut [u8],
    start: usize,
    len: usize,
}

impl Window<'_> {
    /// The bytes currently inside the window, least significant first.
    fn view(&self) -> &[u8] {
        &self.bytes[self.start..self.start + self.len]
    }

    /// Drops zero bytes from the most significant edge so the window's
    /// length reflects its significant digits.
    fn trim(&mut self) {
        while self.len > 0 && self.bytes[self.start + self.len - 1] == 0 {
            self.len -= 1;
        }
    }

    /// The byte `offset` positions below the window's most significant
    /// byte, widened for digit estimation.
    fn top_byte(&self, offset: usize) -> u32 {
        self.bytes[self.start + self.len - 1 - offset] as u32
    }

    /// Subtracts `subtrahend` from the window in place.
    ///
    /// Precondition: `window >= subtrahend`, guaranteed by the digit
    /// correction loop. A position that underflows borrows from the
    /// next more significant byte through a cascading decrement: each
    /// `0x00` on the way up wraps to `0xFF` until a nonzero byte
    /// absorbs the borrow. The precondition bounds the chain inside the
    /// window, so the slice indexing stays in range.
    fn subtract(&mut self, subtrahend: &BigInt) {
        for i in 0..subtrahend.size {
            let idx = self.start + i;
            let minuend = self.bytes[idx];
            let sub = subtrahend.bytes[i];

            if minuend >= sub {
                self.bytes[idx] = minuend - sub;
            } else {
                let mut k = idx + 1;
                while self.bytes[k] == 0 {
                    self.bytes[k] = 0xFF;
                    k += 1;
                }
                self.bytes[k] -= 1;
                self.bytes[idx] = (0x100 + minuend as u16 - sub as u16) as u8;
            }
        }
    }
}

impl BigInt {
    /// Divides `self` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// The result satisfies `quotient * divisor + remainder == self`
    /// with `remainder < divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::DivisionByZero`] if `divisor` normalizes
    /// to zero.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        let mut divisor = divisor.clone();
        divisor.normalize();
        if divisor.size == 0 {
            return Err(BigIntError::DivisionByZero);
        }

        let mut remainder = self.clone();
        remainder.normalize();

        // Divisor longer than the numerator: nothing to estimate.
        if cmp_digits(remainder.digits(), divisor.digits()) == Ordering::Less {
            return Ok((BigInt::new(), remainder));
        }

        // Quotient digits, most significant first.
        let mut emitted: Vec<u8> = Vec::with_capacity(remainder.size - divisor.size + 1);

        {
            let remainder_len = remainder.size;
            let mut window = Window {
                bytes: &mut remainder.bytes[..remainder_len],
                start: remainder_len - divisor.size,
                len: divisor.size,
            };

            loop {
                let mut candidate: u32 = 0;

                if cmp_digits(window.view(), divisor.digits()) != Ordering::Less {
                    candidate = if window.len == divisor.size {
                        window.top_byte(0) / divisor.top_digit(0)
                    } else if window.len == divisor.size + 1 {
                        ((window.top_byte(0) << 8) + window.top_byte(1)) / divisor.top_digit(0)
                    } else {
                        // Window wider than the divisor by more than one
                        // byte; fall back to the largest single digit.
                        0xFF
                    };

                    // A base-256 digit can never exceed 0xFF.
                    if candidate > 0xFF {
                        candidate = 0xFF;
                    }

                    // The estimate only ever overshoots; walk it down
                    // until the product fits under the window. Candidate
                    // zero trivially fits, so this terminates.
                    loop {
                        let product = &BigInt::from(candidate as u8) * &divisor;
                        if cmp_digits(product.digits(), window.view()) != Ordering::Greater {
                            window.subtract(&product);
                            break;
                        }
                        candidate -= 1;
                    }
                }

                emitted.push(candidate as u8);

                if window.start == 0 {
                    break;
                }

                // Slide one byte toward the least significant end, then
                // re-trim so the length branches above stay correct.
                window.start -= 1;
                window.len += 1;
                window.trim();
            }
        }

        let mut quotient = BigInt::new();
        quotient.reserve(emitted.len());
        for &digit in emitted.iter().rev() {
            quotient.push_byte(digit);
        }
        quotient.normalize();

        remainder.normalize();
        Ok((quotient, remainder))
    }
}
