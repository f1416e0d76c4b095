//! Errors reported by Argon2 key derivation.

use thiserror::Error;

/// Errors that can occur during Argon2 computation.
///
/// Every variant except [`Error::AllocationFailed`] is a configuration
/// error, detected before any memory is allocated. None of them are
/// transient: the derivation is a pure function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Lanes must be at least 1.
    #[error("lanes must be at least 1")]
    LanesTooFew,

    /// Lanes must not exceed [`MAX_LANES`](super::MAX_LANES).
    #[error("lanes must be at most {max}, got {lanes}")]
    LanesTooMany { lanes: u32, max: u32 },

    /// Memory must be at least 8 × lanes KiB.
    #[error("memory cost must be at least {min} KiB, got {m_cost} KiB")]
    MemoryTooSmall { m_cost: u32, min: u64 },

    /// Time (passes) must be at least 1.
    #[error("time cost must be at least 1 pass")]
    TimeTooSmall,

    /// The requested output is shorter than [`MIN_OUTPUT_LEN`](super::MIN_OUTPUT_LEN).
    #[error("output length must be at least {min} bytes, got {len}")]
    OutputTooShort { len: usize, min: usize },

    /// The requested output does not fit in a 32-bit length.
    #[error("output length must fit in 32 bits, got {len}")]
    OutputTooLong { len: usize },

    /// The password does not fit in a 32-bit length prefix.
    #[error("password is longer than 2^32 - 1 bytes")]
    PasswordTooLong,

    /// The salt does not fit in a 32-bit length prefix.
    #[error("salt is longer than 2^32 - 1 bytes")]
    SaltTooLong,

    /// The secret does not fit in a 32-bit length prefix.
    #[error("secret is longer than 2^32 - 1 bytes")]
    SecretTooLong,

    /// The associated data does not fit in a 32-bit length prefix.
    #[error("associated data is longer than 2^32 - 1 bytes")]
    AssociatedDataTooLong,

    /// A caller-supplied memory buffer holds fewer blocks than required.
    #[error("memory buffer holds {provided} blocks, {needed} required")]
    MemoryBufferTooSmall { needed: usize, provided: usize },

    /// The memory matrix could not be allocated.
    #[error("failed to allocate {blocks} memory blocks")]
    AllocationFailed { blocks: usize },
}

/// Result type for Argon2 operations.
pub type Result<T> = core::result::Result<T, Error>;
