//! Pseudo-random addresses for data-independent indexing.
//!
//! In data-independent mode (Argon2i, and the first half of the first pass
//! of Argon2id), reference blocks are not chosen from memory contents but
//! from address blocks derived from the current position and a counter.
//! Each address block yields 128 pseudo-random 64-bit values.

use super::block::{Block, QWORDS_IN_BLOCK};
use super::compress::compress;
use super::memory::Position;
use super::params::Algorithm;

/// Word index of the counter inside the input block.
const COUNTER_WORD: usize = 6;

/// Generates address blocks for one segment.
///
/// The input block is `(pass, lane, slice, blocks, passes, type, counter,
/// 0, ...)` and every address block is `G(0, G(0, input))`, computed after
/// incrementing the counter.
pub(crate) struct AddressGenerator {
    input: Block,
    addresses: Block,
}

impl AddressGenerator {
    pub(crate) fn new(
        position: &Position,
        block_count: u32,
        t_cost: u32,
        algorithm: Algorithm,
    ) -> Self {
        let mut input = Block::ZERO;
        input[0] = u64::from(position.pass);
        input[1] = u64::from(position.lane);
        input[2] = u64::from(position.slice);
        input[3] = u64::from(block_count);
        input[4] = u64::from(t_cost);
        input[5] = u64::from(algorithm.type_id());

        Self {
            input,
            addresses: Block::ZERO,
        }
    }

    /// Bumps the counter and regenerates the address block.
    pub(crate) fn advance(&mut self) {
        self.input[COUNTER_WORD] += 1;
        let first = compress(&Block::ZERO, &self.input);
        self.addresses = compress(&Block::ZERO, &first);
    }

    /// Pseudo-random value for the block at `index` within the segment.
    #[inline]
    pub(crate) fn pseudo_random(&self, index: u32) -> u64 {
        self.addresses[index as usize % QWORDS_IN_BLOCK]
    }
}
