//! The 1024-byte memory cell of the Argon2 matrix.

use core::ops::{BitXorAssign, Index, IndexMut};

use zeroize::Zeroize;

/// Size of a memory block in bytes.
pub const BLOCK_SIZE: usize = 1024;

/// Number of 64-bit words in a memory block.
pub const QWORDS_IN_BLOCK: usize = BLOCK_SIZE / 8;

/// A 1024-byte memory block (128 × 64-bit words).
///
/// Blocks are the fundamental unit of memory in Argon2. They have no
/// identity beyond their position in the matrix, are mixed with the
/// compression function and are zeroed on drop so that key material does
/// not outlive the derivation that produced it.
///
/// Callers only handle blocks directly when they supply their own memory
/// to [`Argon2::derive_into_with_memory`](super::Argon2::derive_into_with_memory).
#[derive(Clone, PartialEq, Eq)]
#[repr(align(64))]
pub struct Block(pub(crate) [u64; QWORDS_IN_BLOCK]);

impl Block {
    /// The all-zero block.
    pub const ZERO: Self = Self([0u64; QWORDS_IN_BLOCK]);

    /// Loads a block from its little-endian byte representation.
    pub fn from_bytes(bytes: &[u8; BLOCK_SIZE]) -> Self {
        let mut block = Self::ZERO;
        block
            .0
            .iter_mut()
            .zip(bytes.chunks_exact(8))
            .for_each(|(word, chunk)| {
                let mut le = [0u8; 8];
                le.copy_from_slice(chunk);
                *word = u64::from_le_bytes(le);
            });
        block
    }

    /// Serializes the block as little-endian words.
    pub fn to_bytes(&self) -> [u8; BLOCK_SIZE] {
        let mut out = [0u8; BLOCK_SIZE];
        out.chunks_exact_mut(8)
            .zip(self.0.iter())
            .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));
        out
    }

    /// Returns `true` if every word of the block is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&word| word == 0)
    }

    /// Zeroes every word of the block.
    pub fn clear(&mut self) {
        self.0.zeroize();
    }

    /// Returns `self ⊕ other`.
    pub(crate) fn xor(&self, other: &Block) -> Block {
        let mut out = self.clone();
        out ^= other;
        out
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::ZERO
    }
}

impl core::fmt::Debug for Block {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Block").finish_non_exhaustive()
    }
}

impl BitXorAssign<&Block> for Block {
    fn bitxor_assign(&mut self, rhs: &Block) {
        self.0
            .iter_mut()
            .zip(rhs.0.iter())
            .for_each(|(a, b)| *a ^= b);
    }
}

impl Index<usize> for Block {
    type Output = u64;

    #[inline(always)]
    fn index(&self, index: usize) -> &u64 {
        &self.0[index]
    }
}

impl IndexMut<usize> for Block {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut u64 {
        &mut self.0[index]
    }
}

impl Zeroize for Block {
    fn zeroize(&mut self) {
        self.clear();
    }
}

impl Drop for Block {
    fn drop(&mut self) {
        self.clear();
    }
}
