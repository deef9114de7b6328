//! Growable unsigned big-integer engine.
//!
//! This module implements [`BigInt`], a variable-length unsigned integer
//! stored as a little-endian byte sequence, together with the arithmetic
//! required for modular exponentiation.
//!
//! The implementation is deliberately split into focused submodules:
//!
//! - `core`
//!   The storage type itself: reservation, byte appends, logical and
//!   physical clearing, normalization, parity and zero tests, and the
//!   [`BigIntError`] taxonomy.
//!
//! - `ops`
//!   Value semantics and operator sugar: ordering consistent with
//!   numeric value, carry-safe addition, schoolbook multiplication, and
//!   panicking `/` and `%` operators on top of the checked division.
//!
//! - `div`
//!   Base-256 long division with quotient-digit estimation and
//!   correction, built around a scoped window view into the working
//!   remainder and an in-place borrow-chain subtraction.
//!
//! - `modpow`
//!   Right-to-left square-and-multiply modular exponentiation,
//!   orchestrating multiplication and division.
//!
//! - `hex`
//!   Conversion between integers and big-endian hexadecimal text,
//!   including a size-query mode for caller-supplied buffers.
//!
//! - `conv`
//!   Conversions to and from fixed-width native integers.
//!
//! ## Representation notes
//!
//! A value's logical length (`size`) and its allocated capacity are
//! distinct: bytes above the logical length may hold stale data and are
//! ignored by every operation. The empty sequence is the canonical
//! zero, but an all-zero buffer with a nonzero length is numerically
//! equal to it and is treated so by comparison and parity tests.
//!
//! ## Resource model
//!
//! Everything here is single-threaded and synchronous. Allocation
//! failure follows the standard library's allocate-or-abort behavior;
//! there is no recovery path, matching the crate's embedded-primitive
//! scope.

mod conv;
mod core;
mod div;
mod hex;
mod modpow;
mod ops;

pub use self::core::{BigInt, BigIntError};
