//! BLAKE2b (RFC 7693) as a fixed "hash-to-length" capability.
//!
//! The compression rounds are provided by the `blake2` crate. This module
//! only adapts its variable-output API to the single operation the
//! derivation code relies on.

use blake2::Blake2bVar;
use blake2::digest::{Update, VariableOutput};

/// Largest digest BLAKE2b can produce in a single invocation, in bytes.
pub const MAX_DIGEST_LEN: usize = 64;

/// A digest that can hash a message to any length in `1..=MAX_DIGEST_LEN`.
///
/// The message is given as a list of parts which are hashed as if they had
/// been concatenated. This lets callers feed length prefixes and payloads
/// without first copying them into a single buffer.
pub trait HashToLength {
    /// Hashes the concatenation of `parts` into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len()` is not in `1..=MAX_DIGEST_LEN`.
    fn hash_to_length(parts: &[&[u8]], out: &mut [u8]);
}

/// Unkeyed BLAKE2b.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake2b;

impl HashToLength for Blake2b {
    fn hash_to_length(parts: &[&[u8]], out: &mut [u8]) {
        assert!(
            (1..=MAX_DIGEST_LEN).contains(&out.len()),
            "BLAKE2b output length must be in 1..=64, got {}",
            out.len()
        );

        let mut hasher = Blake2bVar::new(out.len()).unwrap();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize_variable(out).unwrap();
    }
}
