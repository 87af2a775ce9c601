//! Key derivation function interface

use core::fmt;

use crate::error::Result;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// A key derivation function expanding secret input into keying bytes
///
/// Implementations must be deterministic and must produce exactly
/// `output_len` bytes; the scheme layer treats any other length as a
/// backend failure.
pub trait KeyDerivationFunction: fmt::Debug {
    /// Derive `output_len` bytes of keying material from `input`
    fn derive_key(&self, input: &[u8], output_len: usize) -> Result<Vec<u8>>;
}
