//! Initialization and finalization for Argon2.
//!
//! This module handles the boundary operations of the Argon2 algorithm:
//! computing the initial hash H0 from all inputs, seeding the first two
//! blocks of every lane, and deriving the final tag from the filled memory.

use zeroize::Zeroizing;

use super::block::{BLOCK_SIZE, Block};
use super::memory::MemoryLayout;
use super::params::Params;
use crate::hash::{Blake2b, HashToLength, MAX_DIGEST_LEN, hash_long};

/// Length of the initial hash H0 in bytes.
pub(crate) const H0_LEN: usize = MAX_DIGEST_LEN;

/// Computes the initial hash H0 from all Argon2 inputs.
///
/// H0 is a 64-byte BLAKE2b hash of the parameters and of every
/// variable-length input prefixed with its 32-bit length (RFC 9106 §3.2):
/// ```text
/// H0 = BLAKE2b(p || T || m || t || v || y || |P| || P || |S| || S || |K| || K || |X| || X)
/// ```
/// `m` is the memory cost as configured, before rounding to the block
/// count actually used.
///
/// All lengths must have been validated to fit in 32 bits.
pub(crate) fn initial_hash(
    params: &Params,
    password: &[u8],
    tag_len: u32,
) -> Zeroizing<[u8; H0_LEN]> {
    let lanes = params.lanes.to_le_bytes();
    let tag_len = tag_len.to_le_bytes();
    let m_cost = params.m_cost.to_le_bytes();
    let t_cost = params.t_cost.to_le_bytes();
    let version = params.version.as_u32().to_le_bytes();
    let algorithm = params.algorithm.type_id().to_le_bytes();

    let password_len = length_prefix(password);
    let salt_len = length_prefix(params.salt.as_slice());
    let secret_len = length_prefix(params.secret.as_slice());
    let ad_len = length_prefix(params.associated_data.as_slice());

    let parts: [&[u8]; 14] = [
        &lanes,
        &tag_len,
        &m_cost,
        &t_cost,
        &version,
        &algorithm,
        &password_len,
        password,
        &salt_len,
        params.salt.as_slice(),
        &secret_len,
        params.secret.as_slice(),
        &ad_len,
        params.associated_data.as_slice(),
    ];

    let mut h0 = Zeroizing::new([0u8; H0_LEN]);
    Blake2b::hash_to_length(&parts, &mut h0[..]);
    h0
}

fn length_prefix(bytes: &[u8]) -> [u8; 4] {
    (bytes.len() as u32).to_le_bytes()
}

/// Initializes the first two blocks of each lane:
/// `B[i][j] = H'^(1024)(H0 || LE32(j) || LE32(i))`.
pub(crate) fn seed_lanes(memory: &mut [Block], layout: &MemoryLayout, h0: &[u8; H0_LEN]) {
    let mut bytes = Zeroizing::new([0u8; BLOCK_SIZE]);

    for lane in 0..layout.lanes {
        for column in 0..2u32 {
            hash_long::<Blake2b>(
                &[&h0[..], &column.to_le_bytes()[..], &lane.to_le_bytes()[..]],
                &mut bytes[..],
            );
            memory[layout.offset(lane, column)] = Block::from_bytes(&bytes);
        }
    }
}

/// Finalizes the Argon2 computation into `out`.
///
/// The last block of each lane is XORed into a single block, and the
/// variable-length hash H′ of that block is the tag. Every lane therefore
/// contributes to the output.
pub(crate) fn finalize(memory: &[Block], layout: &MemoryLayout, out: &mut [u8]) {
    let mut final_block = memory[layout.last_in_lane(0)].clone();

    for lane in 1..layout.lanes {
        final_block ^= &memory[layout.last_in_lane(lane)];
    }

    let bytes = Zeroizing::new(final_block.to_bytes());
    hash_long::<Blake2b>(&[&bytes[..]], out);
}
