//! Parameter definitions and validation for Argon2.
//!
//! This module defines the configurable parameters for Argon2 and provides
//! validation to ensure they meet the algorithm's requirements.

use core::fmt;

use zeroize::Zeroizing;

use super::error::{Error, Result};

/// Number of synchronization points (slices) per lane and pass.
pub const SYNC_POINTS: u32 = 4;

/// Maximum degree of parallelism.
pub const MAX_LANES: u32 = 0x100_0000;

/// Minimum length of the output tag in bytes.
pub const MIN_OUTPUT_LEN: usize = 4;

/// Minimum number of memory blocks (KiB) per lane.
pub const MIN_BLOCKS_PER_LANE: u32 = 2 * SYNC_POINTS;

/// Argon2 variant, which selects the addressing discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum Algorithm {
    /// Data-dependent addressing.
    Argon2d = 0,
    /// Data-independent addressing.
    Argon2i = 1,
    /// Data-independent for the first half of the first pass,
    /// data-dependent afterwards.
    #[default]
    Argon2id = 2,
}

impl Algorithm {
    /// Numeric type identifier hashed into H0 and the address blocks.
    pub fn type_id(self) -> u32 {
        self as u32
    }

    /// Conventional lowercase name of the variant.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Argon2d => "argon2d",
            Algorithm::Argon2i => "argon2i",
            Algorithm::Argon2id => "argon2id",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Argon2 version.
///
/// The two versions differ only in how blocks are rewritten after the
/// first pass: 0x10 overwrites them, 0x13 XORs the new value into the old.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u32)]
pub enum Version {
    /// Version 1.0.
    V0x10 = 0x10,
    /// Version 1.3 (RFC 9106).
    #[default]
    V0x13 = 0x13,
}

impl Version {
    /// Numeric version identifier hashed into H0.
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

/// Configuration parameters for the Argon2 algorithm.
///
/// These parameters control the memory and time cost of the function,
/// allowing the security level to be tuned for the target hardware and
/// threat model. The byte-string fields are wiped when the parameters are
/// dropped; an empty `secret` or `associated_data` means "absent".
///
/// # Recommended Values
///
/// For password hashing, OWASP recommends Argon2id with:
/// - `m_cost`: 19456 (19 MiB) minimum, 47104 (46 MiB) for higher security
/// - `t_cost`: 2 passes minimum
/// - `lanes`: 1 (single-threaded) or number of available cores
#[derive(Clone, PartialEq, Eq)]
pub struct Params {
    /// Addressing variant.
    pub algorithm: Algorithm,
    /// Algorithm version.
    pub version: Version,
    /// Memory size in KiB (minimum 8 × lanes).
    pub m_cost: u32,
    /// Number of passes over memory (minimum 1).
    pub t_cost: u32,
    /// Degree of parallelism (number of lanes, 1..=`MAX_LANES`).
    pub lanes: u32,
    /// Salt.
    pub salt: Zeroizing<Vec<u8>>,
    /// Optional secret key for keyed hashing.
    pub secret: Zeroizing<Vec<u8>>,
    /// Optional associated data.
    pub associated_data: Zeroizing<Vec<u8>>,
}

impl Params {
    /// Creates parameters for `algorithm` at version 0x13 with no secret
    /// and no associated data.
    pub fn new(algorithm: Algorithm, m_cost: u32, t_cost: u32, lanes: u32, salt: &[u8]) -> Self {
        Self {
            algorithm,
            m_cost,
            t_cost,
            lanes,
            salt: salt.to_vec().into(),
            ..Self::default()
        }
    }

    /// Checks the parameters against the limits of the algorithm.
    pub fn validate(&self) -> Result<()> {
        if self.lanes < 1 {
            return Err(Error::LanesTooFew);
        }

        if self.lanes > MAX_LANES {
            return Err(Error::LanesTooMany {
                lanes: self.lanes,
                max: MAX_LANES,
            });
        }

        if self.t_cost < 1 {
            return Err(Error::TimeTooSmall);
        }

        let min = u64::from(MIN_BLOCKS_PER_LANE) * u64::from(self.lanes);
        if u64::from(self.m_cost) < min {
            return Err(Error::MemoryTooSmall {
                m_cost: self.m_cost,
                min,
            });
        }

        if !fits_u32(self.salt.len()) {
            return Err(Error::SaltTooLong);
        }

        if !fits_u32(self.secret.len()) {
            return Err(Error::SecretTooLong);
        }

        if !fits_u32(self.associated_data.len()) {
            return Err(Error::AssociatedDataTooLong);
        }

        Ok(())
    }

    /// Number of memory blocks actually used: `m_cost` rounded down to a
    /// multiple of `4 × lanes`.
    ///
    /// Only meaningful for parameters that pass [`Params::validate`].
    pub fn block_count(&self) -> u32 {
        let unit = SYNC_POINTS * self.lanes.max(1);
        (self.m_cost / unit) * unit
    }
}

pub(crate) fn fits_u32(len: usize) -> bool {
    u32::try_from(len).is_ok()
}

impl Default for Params {
    /// Argon2id v0x13 with 19 MiB, 2 passes, 1 lane and an empty salt.
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Argon2id,
            version: Version::V0x13,
            m_cost: 19 * 1024,
            t_cost: 2,
            lanes: 1,
            salt: Zeroizing::new(Vec::new()),
            secret: Zeroizing::new(Vec::new()),
            associated_data: Zeroizing::new(Vec::new()),
        }
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Params")
            .field("algorithm", &self.algorithm)
            .field("version", &self.version)
            .field("m_cost", &self.m_cost)
            .field("t_cost", &self.t_cost)
            .field("lanes", &self.lanes)
            .field("salt_len", &self.salt.len())
            .field("secret_len", &self.secret.len())
            .field("associated_data_len", &self.associated_data.len())
            .finish()
    }
}
