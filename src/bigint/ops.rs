//! Value semantics and operator implementations.
//!
//! Equality and ordering compare numeric values, not buffers: stale
//! bytes above the logical length and zero bytes at the most
//! significant end never influence the result. This keeps the derived
//! representation flexible (operations may leave values unnormalized)
//! while the observable semantics stay canonical.
//!
//! Addition and multiplication allocate a fresh result; division and
//! remainder are thin panicking wrappers over the checked
//! [`BigInt::div_rem`](crate::bigint::BigInt::div_rem) for callers that
//! have already ruled out a zero divisor.

use crate::bigint::core::{BigInt, cmp_digits};

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Rem};

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    /// Total order consistent with numeric value.
    ///
    /// The longer significant length wins; equal lengths are decided by
    /// the first byte difference from the most significant end.
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_digits(&self.bytes[..self.size], &other.bytes[..other.size])
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Positional addition with carry.
    ///
    /// Iterates from the least significant byte over the longer
    /// operand's length plus one, so a final carry-out always has a
    /// digit to land in.
    fn add(self, rhs: &BigInt) -> BigInt {
        let longest = self.size.max(rhs.size);

        let mut sum = BigInt::new();
        sum.reserve(longest + 1);

        let mut carry = 0u16;
        for i in 0..=longest {
            let total = self.digit(i) as u16 + rhs.digit(i) as u16 + carry;
            sum.bytes[i] = (total & 0xFF) as u8;
            carry = total >> 8;
        }

        sum.size = longest + 1;
        sum.normalize();
        sum
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Schoolbook multiplication.
    ///
    /// Each partial product `a[i] * b[j]` adds its low byte into
    /// position `i + j`; the high byte plus any resulting carry then
    /// propagates upward through an **unbounded** carry loop. A chain
    /// of `0xFF` bytes can push a carry several positions past
    /// `i + j + 1`, so the propagation must run until the carry dies,
    /// not a fixed number of steps.
    fn mul(self, rhs: &BigInt) -> BigInt {
        let mut product = BigInt::new();
        product.reserve(self.size + rhs.size + 1);
        product.zeroize();

        for i in 0..self.size {
            let d1 = self.bytes[i] as u32;
            if d1 == 0 {
                continue;
            }

            for j in 0..rhs.size {
                let d2 = rhs.bytes[j] as u32;
                if d2 == 0 {
                    continue;
                }

                let partial = d1 * d2;
                let low = product.bytes[i + j] as u32 + (partial & 0xFF);
                product.bytes[i + j] = (low & 0xFF) as u8;

                let mut carry = (partial >> 8) + (low >> 8);
                let mut k = i + j + 1;
                while carry != 0 {
                    let total = product.bytes[k] as u32 + carry;
                    product.bytes[k] = (total & 0xFF) as u8;
                    carry = total >> 8;
                    k += 1;
                }
            }
        }

        product.size = self.size + rhs.size + 1;
        product.normalize();
        product
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Quotient of `self / rhs`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero. Use
    /// [`BigInt::div_rem`](crate::bigint::BigInt::div_rem) for the
    /// checked form.
    fn div(self, rhs: &BigInt) -> BigInt {
        match self.div_rem(rhs) {
            Ok((quotient, _)) => quotient,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Remainder of `self / rhs`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero. Use
    /// [`BigInt::div_rem`](crate::bigint::BigInt::div_rem) for the
    /// checked form.
    fn rem(self, rhs: &BigInt) -> BigInt {
        match self.div_rem(rhs) {
            Ok((_, remainder)) => remainder,
            Err(_) => panic!("division by zero"),
        }
    }
}
