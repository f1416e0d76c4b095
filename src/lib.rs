//! Memory-hard key derivation for the hashforge toolkit
//!
//! This crate provides the Argon2 family of password-hashing and
//! key-derivation functions, built on a small hashing layer.
//!
//! The focus is on **clarity, predictability, and auditability**: the
//! memory matrix is a single flat allocation addressed by index, every
//! step of the RFC 9106 construction lives in its own module, and all
//! intermediate key material is wiped once a derivation completes.
//!
//! # Module overview
//!
//! - `hash`
//!   The digest capability Argon2 consumes. BLAKE2b is exposed through a
//!   single "hash to N bytes" trait, and the variable-length hash H′ is
//!   built on top of it.
//!
//! - `derivation`
//!   Key-derivation functions. It currently provides Argon2d, Argon2i and
//!   Argon2id in versions 0x10 and 0x13, with parameter validation, a
//!   reusable engine and convenience functions.
//!
//! # Design goals
//!
//! - One contiguous memory matrix per derivation, zeroed on every exit path
//! - Minimal and explicit APIs
//! - Validation before allocation; no failure modes inside the fill loop
//! - A sequential reference fill that any parallel variant can be checked
//!   against
//!
//! Logging goes through `tracing`; the library never installs a
//! subscriber and never logs passwords, salts or secrets.

pub mod derivation;
pub mod hash;
