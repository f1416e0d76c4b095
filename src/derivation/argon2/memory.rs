//! Memory organization and filling algorithm for Argon2.
//!
//! This module implements the core memory-filling loop of Argon2. Memory
//! is organized as a matrix of lanes (rows) and columns, with each cell
//! containing a 1024-byte block. The whole matrix is a single flat slice;
//! block `(lane, index)` lives at offset `lane × lane_length + index`.
//!
//! Within a slice, a lane only reads blocks from earlier slices (or from
//! its own current segment), so the segments of one slice are independent
//! of each other. They are filled here one after the other; the slice loop
//! is the synchronization point between them.

use core::ops::{Deref, DerefMut};

use zeroize::Zeroize;

use super::address::AddressGenerator;
use super::block::{Block, QWORDS_IN_BLOCK};
use super::compress::fill_block;
use super::params::{Algorithm, Params, SYNC_POINTS, Version};
use super::reference::reference_position;

/// Cursor over the matrix during the fill loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    pub pass: u32,
    pub lane: u32,
    pub slice: u32,
    /// Index within the current segment.
    pub index: u32,
}

/// Memory layout parameters for Argon2.
///
/// The memory is organized as follows:
/// - Total memory is divided into `lanes` independent rows.
/// - Each lane contains `lane_length` blocks.
/// - Each lane is divided into 4 slices (sync points).
/// - Each slice contains `segment_length` blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MemoryLayout {
    pub lanes: u32,
    pub lane_length: u32,
    pub segment_length: u32,
    pub block_count: u32,
}

impl MemoryLayout {
    /// Builds the layout for validated parameters.
    pub(crate) fn new(params: &Params) -> Self {
        let lanes = params.lanes;
        let block_count = params.block_count();
        let lane_length = block_count / lanes;
        let segment_length = lane_length / SYNC_POINTS;

        Self {
            lanes,
            lane_length,
            segment_length,
            block_count,
        }
    }

    #[inline]
    pub(crate) fn offset(&self, lane: u32, index_in_lane: u32) -> usize {
        lane as usize * self.lane_length as usize + index_in_lane as usize
    }

    /// Offset of the last block of `lane`.
    #[inline]
    pub(crate) fn last_in_lane(&self, lane: u32) -> usize {
        self.offset(lane, self.lane_length - 1)
    }

    /// Fills all memory blocks over `params.t_cost` passes.
    ///
    /// Each pass iterates through all 4 slices in order. Within each slice,
    /// all lanes are processed. A lane can only reference blocks from other
    /// lanes that were completed in previous slices.
    pub(crate) fn fill(&self, memory: &mut [Block], params: &Params) {
        for pass in 0..params.t_cost {
            for slice in 0..SYNC_POINTS {
                for lane in 0..self.lanes {
                    let position = Position {
                        pass,
                        lane,
                        slice,
                        index: 0,
                    };
                    self.fill_segment(memory, params, position);
                }
            }
            tracing::trace!(pass, "argon2 pass complete");
        }
    }

    /// Fills one segment (portion of a lane within a slice).
    ///
    /// For each block position, this function:
    /// 1. Takes a pseudo-random value from the address block or from the
    ///    previous block
    /// 2. Maps it to a reference block
    /// 3. Computes the new block as G(previous, reference), XORed into the
    ///    existing block on later passes of version 0x13
    fn fill_segment(&self, memory: &mut [Block], params: &Params, mut position: Position) {
        let data_independent = match params.algorithm {
            Algorithm::Argon2d => false,
            Algorithm::Argon2i => true,
            Algorithm::Argon2id => position.pass == 0 && position.slice < SYNC_POINTS / 2,
        };

        let mut addresses = data_independent.then(|| {
            AddressGenerator::new(&position, self.block_count, params.t_cost, params.algorithm)
        });

        // The first two blocks of each lane are seeded from H0.
        let start = if position.pass == 0 && position.slice == 0 {
            if let Some(generator) = addresses.as_mut() {
                generator.advance();
            }
            2
        } else {
            0
        };

        let with_xor = position.pass != 0 && params.version == Version::V0x13;

        for index in start..self.segment_length {
            position.index = index;

            let column = position.slice * self.segment_length + index;
            let current = self.offset(position.lane, column);
            let previous = if column == 0 {
                self.last_in_lane(position.lane)
            } else {
                current - 1
            };

            let pseudo_rand = match addresses.as_mut() {
                Some(generator) => {
                    if index as usize % QWORDS_IN_BLOCK == 0 {
                        generator.advance();
                    }
                    generator.pseudo_random(index)
                }
                None => memory[previous][0],
            };

            let (ref_lane, ref_index) = reference_position(self, &position, pseudo_rand);
            let reference = self.offset(ref_lane, ref_index);

            fill_block(memory, previous, reference, current, with_xor);
        }
    }
}

/// Exclusive view over the matrix that zeroes every block when dropped,
/// including on unwinding.
pub(crate) struct WipeOnDrop<'a>(&'a mut [Block]);

impl<'a> WipeOnDrop<'a> {
    pub(crate) fn new(blocks: &'a mut [Block]) -> Self {
        Self(blocks)
    }
}

impl Deref for WipeOnDrop<'_> {
    type Target = [Block];

    fn deref(&self) -> &[Block] {
        self.0
    }
}

impl DerefMut for WipeOnDrop<'_> {
    fn deref_mut(&mut self) -> &mut [Block] {
        self.0
    }
}

impl Drop for WipeOnDrop<'_> {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(Zeroize::zeroize);
    }
}
