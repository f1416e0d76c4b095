//! Variable-length hash H′ (RFC 9106 §3.3).
//!
//! H′ stretches a digest with at most 64 bytes of output into one of any
//! length. Outputs of up to 64 bytes are a single digest call. Longer
//! outputs are produced as a chain of 64-byte digests, of which only the
//! first 32 bytes are emitted, followed by one last digest sized to cover
//! the remainder:
//!
//! ```text
//! V1     = H^64(LE32(T) || X)
//! Vi     = H^64(V(i-1))           for 2 <= i <= r,  r = ceil(T/32) - 2
//! V(r+1) = H^(T-32r)(Vr)
//! H'(X)  = V1[..32] || V2[..32] || ... || Vr[..32] || V(r+1)
//! ```

use zeroize::Zeroizing;

use super::blake2b::{Blake2b, HashToLength, MAX_DIGEST_LEN};

/// Bytes emitted from each intermediate digest of the chain.
const HALF_DIGEST_LEN: usize = MAX_DIGEST_LEN / 2;

/// Computes H′ of the concatenation of `parts`, filling all of `out`.
///
/// # Panics
///
/// Panics if `out` is empty or longer than `u32::MAX` bytes; the length is
/// hashed as a 32-bit prefix.
pub fn hash_long<H: HashToLength>(parts: &[&[u8]], out: &mut [u8]) {
    assert!(!out.is_empty(), "H' output must not be empty");
    let out_len = u32::try_from(out.len()).expect("H' output length must fit in 32 bits");
    let prefix = out_len.to_le_bytes();

    let mut prefixed: Vec<&[u8]> = Vec::with_capacity(parts.len() + 1);
    prefixed.push(&prefix);
    prefixed.extend_from_slice(parts);

    if out.len() <= MAX_DIGEST_LEN {
        H::hash_to_length(&prefixed, out);
        return;
    }

    let mut previous = Zeroizing::new([0u8; MAX_DIGEST_LEN]);
    let mut current = Zeroizing::new([0u8; MAX_DIGEST_LEN]);

    H::hash_to_length(&prefixed, &mut current[..]);
    out[..HALF_DIGEST_LEN].copy_from_slice(&current[..HALF_DIGEST_LEN]);

    let full_rounds = out.len().div_ceil(HALF_DIGEST_LEN) - 2;
    let mut written = HALF_DIGEST_LEN;

    for _ in 1..full_rounds {
        core::mem::swap(&mut previous, &mut current);
        H::hash_to_length(&[&previous[..]], &mut current[..]);
        out[written..written + HALF_DIGEST_LEN].copy_from_slice(&current[..HALF_DIGEST_LEN]);
        written += HALF_DIGEST_LEN;
    }

    // Last digest is emitted whole and covers 33..=64 remaining bytes.
    H::hash_to_length(&[&current[..]], &mut out[written..]);
}

/// Computes H′ with BLAKE2b, returning a freshly allocated `out_len`-byte tag.
///
/// # Panics
///
/// Panics if `out_len` is zero or does not fit in 32 bits.
pub fn blake2b_long(out_len: usize, input: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; out_len];
    hash_long::<Blake2b>(&[input], &mut out);
    out
}
