//! Conversions between `BigInt` and fixed-width native integers.
//!
//! Widening conversions are provided as `From` impls: the native value
//! lands in the least significant bytes and the result is normalized.
//! Narrowing conversions come in two flavors, following the crate's
//! preference for explicit semantics:
//!
//! - checked `TryFrom<&BigInt>` impls that fail when the value does not
//!   fit the target width, and
//! - the truncating [`BigInt::to_u64`](crate::bigint::BigInt::to_u64),
//!   which wraps values above `2^64 - 1` and is documented as such.

mod u8;
mod u32;
mod u64;
mod u128;
mod usize;
