//! Symmetric cipher mode interface for the data encapsulation mechanism

use crate::error::Result;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Transform direction a cipher mode instance is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CipherDirection {
    /// Plaintext in, ciphertext out
    Encryption,
    /// Ciphertext in, plaintext out
    Decryption,
}

/// A symmetric cipher mode operating over whole byte buffers
///
/// Instances come out of the registry already bound to one
/// [`CipherDirection`]. Padding or tagging internal to the mode may make
/// the output longer (encrypting) or shorter (decrypting) than the input;
/// the caller makes no assumption beyond determinism under `(key, iv)`.
pub trait CipherMode {
    /// Whether this mode needs an initialization vector
    fn requires_iv(&self) -> bool;

    /// Transform `data` under `key` and `iv` in the bound direction
    ///
    /// `iv` may be `None` only when [`CipherMode::requires_iv`] is false.
    fn process(&mut self, key: &[u8], iv: Option<&[u8]>, data: &[u8]) -> Result<Vec<u8>>;
}
