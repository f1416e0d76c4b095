//! Key-derivation functions.
//!
//! Currently provides Argon2 (d, i and id variants, versions 0x10 and 0x13).

pub mod argon2;

pub use argon2::{Algorithm, Argon2, Params, Version};
