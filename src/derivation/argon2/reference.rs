//! Reference block position computation for Argon2.
//!
//! When filling a block at position (lane, index), Argon2 needs to select
//! a reference block to mix with the previous block. The selection uses a
//! 64-bit pseudo-random value J, whose high half picks the lane and whose
//! low half picks the block, with constraints to ensure the referenced
//! block has already been computed in this pass or survives from the
//! previous one.

use super::memory::{MemoryLayout, Position};
use super::params::SYNC_POINTS;

/// Computes the reference block `(lane, index_in_lane)` (RFC 9106 §3.4.1.2).
///
/// The candidate area is:
/// - pass 0: every block finished in earlier slices of the pass, plus
///   earlier blocks of the current segment when referencing the own lane;
/// - later passes: the whole lane except the segment being filled, again
///   extended by the current segment's earlier blocks for the own lane.
///
/// The block immediately preceding the current one is always excluded
/// since it is already the first input of the compression function.
///
/// The low 32 bits are mapped onto the area with the quadratic function
/// `x = J1² / 2³²`, `pos = |W| - 1 - |W| x / 2³²`, which biases references
/// toward recently written blocks.
pub(crate) fn reference_position(
    layout: &MemoryLayout,
    position: &Position,
    pseudo_rand: u64,
) -> (u32, u32) {
    let j1 = pseudo_rand & 0xFFFF_FFFF;
    let j2 = pseudo_rand >> 32;

    // No other lane has been written yet.
    let ref_lane = if position.pass == 0 && position.slice == 0 {
        position.lane
    } else {
        (j2 % u64::from(layout.lanes)) as u32
    };

    let segment_length = u64::from(layout.segment_length);
    let lane_length = u64::from(layout.lane_length);
    let index = u64::from(position.index);

    let finished = if position.pass == 0 {
        u64::from(position.slice) * segment_length
    } else {
        lane_length - segment_length
    };

    let area_size = if ref_lane == position.lane {
        finished + index - 1
    } else if index == 0 {
        finished - 1
    } else {
        finished
    };

    let x = (j1 * j1) >> 32;
    let relative = area_size - 1 - ((area_size * x) >> 32);

    let start = if position.pass == 0 || position.slice == SYNC_POINTS - 1 {
        0
    } else {
        u64::from(position.slice + 1) * segment_length
    };

    (ref_lane, ((start + relative) % lane_length) as u32)
}
