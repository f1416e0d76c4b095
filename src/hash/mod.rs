//! Hash primitives consumed by the key-derivation functions.
//!
//! Argon2 only ever needs one capability from its underlying digest:
//! "hash these bytes to exactly N bytes", with N between 1 and 64. That
//! capability is expressed by the [`HashToLength`] trait and provided by
//! [`Blake2b`]. On top of it, [`long`] builds the variable-length hash H′
//! used to seed and finalize the Argon2 memory matrix.

pub mod blake2b;
pub mod long;

pub use blake2b::{Blake2b, HashToLength, MAX_DIGEST_LEN};
pub use long::{blake2b_long, hash_long};
