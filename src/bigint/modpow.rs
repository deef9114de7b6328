//! Modular exponentiation.
//!
//! Right-to-left square-and-multiply built entirely from the division
//! and multiplication primitives. The exponent is halved through the
//! division routine rather than a dedicated bit shift, keeping a single
//! source of arithmetic truth; every intermediate value is a locally
//! scoped temporary.

use crate::bigint::core::{BigInt, BigIntError};

impl BigInt {
    /// Computes `self ^ exponent mod modulus`.
    ///
    /// The exponent is consumed bit by bit from the least significant
    /// end: on an odd exponent the running result picks up the current
    /// base, then the base squares and the exponent halves. All
    /// reductions go through [`BigInt::div_rem`].
    ///
    /// A zero exponent yields one, regardless of the base.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::DivisionByZero`] if `modulus` normalizes
    /// to zero.
    pub fn pow_mod(&self, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt, BigIntError> {
        let mut result = BigInt::new();
        result.push_byte(1);

        let (_, mut base) = self.div_rem(modulus)?;

        let mut exponent = exponent.clone();
        exponent.normalize();

        let two = BigInt::from(2u8);

        while !exponent.is_zero() {
            if exponent.is_odd() {
                let product = &result * &base;
                let (_, reduced) = product.div_rem(modulus)?;
                result = reduced;
            }

            let (halved, _) = exponent.div_rem(&two)?;
            exponent = halved;

            let squared = &base * &base;
            let (_, reduced) = squared.div_rem(modulus)?;
            base = reduced;
        }

        Ok(result)
    }
}
