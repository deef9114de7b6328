//! Arbitrary-precision unsigned integer arithmetic for modular
//! exponentiation.
//!
//! This crate provides a single growable big-integer type, [`BigInt`],
//! with just enough arithmetic to perform RSA-style public-key
//! operations (`c = m^e mod n`): addition, schoolbook multiplication,
//! base-256 long division, and square-and-multiply modular
//! exponentiation, plus a hexadecimal codec and fixed-width integer
//! conversions as the I/O boundary.
//!
//! The focus is on **clarity, predictability, and auditability**. The
//! crate is dependency-free and intended to be embedded as a minimal
//! numeric primitive, not to replace a full big-integer library.
//!
//! # Module overview
//!
//! - `bigint`
//!   The big-integer engine: storage, normalization, elementary
//!   arithmetic, long division, modular exponentiation, and the hex
//!   codec.
//!
//! # Design goals
//!
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Schoolbook-grade algorithms only (no Karatsuba, no Montgomery
//!   reduction)
//! - No global state, no randomness, fully deterministic results
//!
//! # Security scope
//!
//! This crate is **not** a hardened cryptographic library. No attempt
//! is made to resist timing attacks or other side channels; operand
//! values directly influence execution time. Use it for tooling,
//! testing, and embedded arithmetic where those properties are
//! acceptable.

pub mod bigint;

pub use bigint::{BigInt, BigIntError};
