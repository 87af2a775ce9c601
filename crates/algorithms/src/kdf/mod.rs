//! Counter-mode key derivation functions from ISO 18033-2
//!
//! Both KDFs expand an input string by hashing `input || counter_be32` for
//! successive counter values and concatenating the digests. KDF1 counts
//! from 0, KDF2 from 1; they are otherwise identical.

use core::fmt;
use core::marker::PhantomData;

use sha2::Digest;

use ecrypt_api::error::{Error, Result};
use ecrypt_api::KeyDerivationFunction;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;


fn counter_kdf<D: Digest>(start: u32, input: &[u8], output_len: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(output_len);
    let mut counter = start;
    while out.len() < output_len {
        let mut hasher = D::new();
        hasher.update(input);
        hasher.update(counter.to_be_bytes());
        out.extend_from_slice(&hasher.finalize());
        counter = counter.checked_add(1).ok_or(Error::Processing {
            operation: "counter KDF",
            details: "counter space exhausted",
        })?;
    }
    out.truncate(output_len);
    Ok(out)
}

/// KDF1 from ISO 18033-2 over the digest `D`
pub struct Kdf1<D: Digest> {
    _digest: PhantomData<D>,
}

impl<D: Digest> Kdf1<D> {
    pub fn new() -> Self {
        Self {
            _digest: PhantomData,
        }
    }
}

impl<D: Digest> Default for Kdf1<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest> fmt::Debug for Kdf1<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kdf1").finish()
    }
}

impl<D: Digest> KeyDerivationFunction for Kdf1<D> {
    fn derive_key(&self, input: &[u8], output_len: usize) -> Result<Vec<u8>> {
        counter_kdf::<D>(0, input, output_len)
    }
}

/// KDF2 from ISO 18033-2 over the digest `D`
pub struct Kdf2<D: Digest> {
    _digest: PhantomData<D>,
}

impl<D: Digest> Kdf2<D> {
    pub fn new() -> Self {
        Self {
            _digest: PhantomData,
        }
    }
}

impl<D: Digest> Default for Kdf2<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest> fmt::Debug for Kdf2<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kdf2").finish()
    }
}

impl<D: Digest> KeyDerivationFunction for Kdf2<D> {
    fn derive_key(&self, input: &[u8], output_len: usize) -> Result<Vec<u8>> {
        counter_kdf::<D>(1, input, output_len)
    }
}
