//! Argon2 memory-hard key derivation (RFC 9106).
//!
//! Argon2 is a memory-hard function designed to make brute-force attacks
//! expensive on parallel hardware. It comes in three variants which differ
//! only in how reference blocks are addressed:
//!
//! - **Argon2d**: addresses depend on the memory contents. Strongest
//!   against time-memory trade-offs, but leaks through cache timing.
//! - **Argon2i**: addresses are derived from a counter and are independent
//!   of the password.
//! - **Argon2id**: data-independent for the first half of the first pass,
//!   data-dependent afterwards.
//!
//! Versions 0x10 and 0x13 are supported; they differ in whether blocks are
//! overwritten or XORed into on passes after the first.
//!
//! # Algorithm Overview
//!
//! 1. **Initialization**: compute H0 = BLAKE2b(params || password || salt || ...)
//! 2. **Lane initialization**: generate the first two blocks of each lane
//!    using H' (variable-length BLAKE2b).
//! 3. **Memory filling**: fill the remaining blocks using the compression
//!    function, based on the BLAKE2b round function with an additional
//!    multiplication for diffusion.
//! 4. **Finalization**: XOR the last block of each lane together and apply
//!    H' to produce the final tag.
//!
//! # Memory Organization
//!
//! Memory is organized as a matrix of 1024-byte blocks:
//! - **Lanes**: independent rows that could be processed in parallel.
//! - **Slices**: each lane is divided into 4 slices (sync points).
//! - **Segments**: blocks of one lane within one slice.
//!
//! The matrix is allocated per derivation and zeroed before returning.

mod address;
mod block;
mod boundary;
mod compress;
mod core;
mod error;
mod memory;
mod params;
mod reference;

pub use block::{BLOCK_SIZE, Block, QWORDS_IN_BLOCK};
pub use self::core::{Argon2, argon2d, argon2i, argon2id};
pub use error::{Error, Result};
pub use params::{
    Algorithm, MAX_LANES, MIN_BLOCKS_PER_LANE, MIN_OUTPUT_LEN, Params, SYNC_POINTS, Version,
};
