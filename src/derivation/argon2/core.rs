use super::block::Block;
use super::boundary::{finalize, initial_hash, seed_lanes};
use super::error::{Error, Result};
use super::memory::{MemoryLayout, WipeOnDrop};
use super::params::{Algorithm, MIN_OUTPUT_LEN, Params, fits_u32};

/// Argon2 key-derivation engine.
///
/// The engine owns an immutable copy of its [`Params`]; every derivation
/// allocates (or borrows) its own memory matrix and wipes it before
/// returning, so one engine can serve any number of derivations.
///
/// # Example
///
/// ```rust
/// use hashforge::derivation::argon2::{Algorithm, Argon2, Params};
///
/// let params = Params::new(Algorithm::Argon2id, 64, 2, 1, b"random_salt_16b!");
/// let key = Argon2::new(params).derive(b"my_password", 32).unwrap();
/// assert_eq!(key.len(), 32);
/// ```
#[derive(Debug, Clone)]
pub struct Argon2 {
    params: Params,
}

impl Argon2 {
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Derives `output_len` bytes from `password`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the parameters, the password or
    /// `output_len` are out of range, and [`Error::AllocationFailed`] if
    /// the memory matrix cannot be allocated.
    pub fn derive(&self, password: &[u8], output_len: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; output_len];
        self.derive_into(password, &mut out)?;
        Ok(out)
    }

    /// Derives `out.len()` bytes from `password` into `out`.
    pub fn derive_into(&self, password: &[u8], out: &mut [u8]) -> Result<()> {
        self.validate(password, out)?;

        let blocks = self.params.block_count() as usize;
        let mut memory: Vec<Block> = Vec::new();
        memory
            .try_reserve_exact(blocks)
            .map_err(|_| Error::AllocationFailed { blocks })?;
        memory.resize(blocks, Block::ZERO);

        self.run(password, out, &mut memory);
        Ok(())
    }

    /// Derives `out.len()` bytes from `password`, using `memory` as the
    /// memory matrix instead of allocating one.
    ///
    /// `memory` must hold at least [`Params::block_count`] blocks; only
    /// that many are used. Every used block is zeroed before this returns,
    /// whether or not the derivation succeeded.
    pub fn derive_into_with_memory(
        &self,
        password: &[u8],
        out: &mut [u8],
        memory: &mut [Block],
    ) -> Result<()> {
        self.validate(password, out)?;

        let needed = self.params.block_count() as usize;
        if memory.len() < needed {
            return Err(Error::MemoryBufferTooSmall {
                needed,
                provided: memory.len(),
            });
        }

        self.run(password, out, &mut memory[..needed]);
        Ok(())
    }

    fn validate(&self, password: &[u8], out: &[u8]) -> Result<()> {
        self.params.validate()?;

        if !fits_u32(password.len()) {
            return Err(Error::PasswordTooLong);
        }

        if out.len() < MIN_OUTPUT_LEN {
            return Err(Error::OutputTooShort {
                len: out.len(),
                min: MIN_OUTPUT_LEN,
            });
        }

        if !fits_u32(out.len()) {
            return Err(Error::OutputTooLong { len: out.len() });
        }

        Ok(())
    }

    /// Runs the derivation over a matrix of exactly `block_count` blocks.
    fn run(&self, password: &[u8], out: &mut [u8], memory: &mut [Block]) {
        let params = &self.params;
        let layout = MemoryLayout::new(params);
        let mut memory = WipeOnDrop::new(memory);

        tracing::debug!(
            algorithm = %params.algorithm,
            version = params.version.as_u32(),
            lanes = layout.lanes,
            blocks = layout.block_count,
            passes = params.t_cost,
            output_len = out.len(),
            "deriving argon2 key"
        );

        let h0 = initial_hash(params, password, out.len() as u32);
        seed_lanes(&mut memory, &layout, &h0);
        layout.fill(&mut memory, params);
        finalize(&memory, &layout, out);
    }
}

/// Computes an Argon2d (version 0x13) tag of `password`.
pub fn argon2d(
    password: &[u8],
    salt: &[u8],
    m_cost: u32,
    t_cost: u32,
    lanes: u32,
    output_len: usize,
) -> Result<Vec<u8>> {
    derive_with(Algorithm::Argon2d, password, salt, m_cost, t_cost, lanes, output_len)
}

/// Computes an Argon2i (version 0x13) tag of `password`.
pub fn argon2i(
    password: &[u8],
    salt: &[u8],
    m_cost: u32,
    t_cost: u32,
    lanes: u32,
    output_len: usize,
) -> Result<Vec<u8>> {
    derive_with(Algorithm::Argon2i, password, salt, m_cost, t_cost, lanes, output_len)
}

/// Computes an Argon2id (version 0x13) tag of `password`.
///
/// # Example
///
/// ```rust
/// use hashforge::derivation::argon2::argon2id;
///
/// let tag = argon2id(b"my_password", b"random_salt_16b!", 64, 2, 1, 32).unwrap();
/// assert_eq!(tag.len(), 32);
/// ```
pub fn argon2id(
    password: &[u8],
    salt: &[u8],
    m_cost: u32,
    t_cost: u32,
    lanes: u32,
    output_len: usize,
) -> Result<Vec<u8>> {
    derive_with(Algorithm::Argon2id, password, salt, m_cost, t_cost, lanes, output_len)
}

fn derive_with(
    algorithm: Algorithm,
    password: &[u8],
    salt: &[u8],
    m_cost: u32,
    t_cost: u32,
    lanes: u32,
    output_len: usize,
) -> Result<Vec<u8>> {
    Argon2::new(Params::new(algorithm, m_cost, t_cost, lanes, salt)).derive(password, output_len)
}
