//! A P-256 (secp256r1) ECDSA signature verifier.
//!
//! The crate is organized bottom-up: [`field`] provides 256-bit modular
//! arithmetic over an arbitrary prime modulus, [`curve`] fixes the P-256
//! parameters, [`point`] implements affine and XYZZ point arithmetic,
//! [`joint_mul`] computes the double-scalar multiplication the verification
//! equation needs, and [`verify`] wires all of it into the ECDSA check
//! itself. [`dispatch`] adapts that check to a fixed-width byte-blob calling
//! convention for callers that don't want to work with [`field::U256`]
//! directly.
//!
//! Every layer is pure: no I/O, no allocation beyond what the caller
//! supplies, and no panics on attacker-controlled input. `verify` itself
//! never fails loudly — an invalid signature, an invalid public key, and a
//! malformed scalar are all just `false`.
#![forbid(unsafe_code)]

pub mod curve;
pub mod dispatch;
pub mod errors;
pub mod field;
pub mod joint_mul;
pub mod point;
pub mod verify;

pub use dispatch::verify_packed;
pub use errors::Secp256r1Error;
pub use verify::{verify, verify_bytes};
