//! Compression function of Argon2 (RFC 9106 §3.5–3.6).
//!
//! The compression function combines two blocks into one. It is built from
//! the BLAKE2b round function, with BLAKE2b's plain additions replaced by
//! the BlaMka multiply-add so that every step mixes in a 32×32-bit product.

use super::block::Block;

/// Number of 16-word groups the permutation is applied to in each pass.
const GROUPS: usize = 8;

/// BlaMka: `a + b + 2 × lo32(a) × lo32(b)`, all modulo 2⁶⁴.
#[inline(always)]
fn blamka(a: u64, b: u64) -> u64 {
    let product = (a & 0xFFFF_FFFF).wrapping_mul(b & 0xFFFF_FFFF);
    a.wrapping_add(b).wrapping_add(product.wrapping_mul(2))
}

/// GB mixing function (Argon2 variant of BLAKE2b's G).
///
/// Unlike BLAKE2b's G, no message words are added; the diffusion comes from
/// the BlaMka product instead. The rotation amounts are 32, 24, 16 and 63.
#[inline(always)]
fn gb(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize) {
    v[a] = blamka(v[a], v[b]);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = blamka(v[c], v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);
    v[a] = blamka(v[a], v[b]);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = blamka(v[c], v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}

/// P permutation: one BLAKE2b round over a 4×4 matrix of words,
/// first along columns, then along diagonals.
#[inline(always)]
fn permute_p(v: &mut [u64; 16]) {
    gb(v, 0, 4, 8, 12);
    gb(v, 1, 5, 9, 13);
    gb(v, 2, 6, 10, 14);
    gb(v, 3, 7, 11, 15);

    gb(v, 0, 5, 10, 15);
    gb(v, 1, 6, 11, 12);
    gb(v, 2, 7, 8, 13);
    gb(v, 3, 4, 9, 14);
}

/// Gathers the 16 words at `indices`, permutes them and scatters them back.
#[inline(always)]
fn permute_group(z: &mut Block, indices: &[usize; 16]) {
    let mut v: [u64; 16] = core::array::from_fn(|k| z[indices[k]]);
    permute_p(&mut v);
    indices
        .iter()
        .zip(v.iter())
        .for_each(|(&i, &word)| z[i] = word);
}

/// Words of row `i`: 16 consecutive words starting at `16 i`.
#[inline(always)]
fn row(i: usize) -> [usize; 16] {
    core::array::from_fn(|k| 16 * i + k)
}

/// Words of column `i`: the word pairs `(2i, 2i + 1)` of every row.
#[inline(always)]
fn column(i: usize) -> [usize; 16] {
    core::array::from_fn(|k| 2 * i + 16 * (k / 2) + (k % 2))
}

/// Compression function F (RFC 9106 §3.5).
///
/// Computes `F(X, Y) = P(P(X ⊕ Y)) ⊕ X ⊕ Y`, where the inner P is applied
/// to the 8 rows of 16 words and the outer P to the 8 interleaved columns.
/// The final XOR with `X ⊕ Y` is Argon2's own feed-forward and differs from
/// BLAKE2b's finalization.
pub(crate) fn compress(x: &Block, y: &Block) -> Block {
    let r = if x.is_zero() { y.clone() } else { x.xor(y) };
    let mut z = r.clone();

    for i in 0..GROUPS {
        permute_group(&mut z, &row(i));
    }

    for i in 0..GROUPS {
        permute_group(&mut z, &column(i));
    }

    z ^= &r;
    z
}

/// Writes `F(memory[previous], memory[reference])` into `memory[current]`.
///
/// Blocks are addressed by offset into the matrix so that both inputs are
/// read before the destination is touched. With `with_xor` the result is
/// XORed into the destination's previous contents instead of replacing
/// them (version 0x13, passes after the first).
pub(crate) fn fill_block(
    memory: &mut [Block],
    previous: usize,
    reference: usize,
    current: usize,
    with_xor: bool,
) {
    let mixed = compress(&memory[previous], &memory[reference]);
    if with_xor {
        memory[current] ^= &mixed;
    } else {
        memory[current] = mixed;
    }
}
