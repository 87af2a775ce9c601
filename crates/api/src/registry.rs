//! Algorithm registry resolving specification strings to primitive instances
//!
//! Parameter objects hold algorithm names ("KDF2(SHA-256)", "AES-128/CBC",
//! "HMAC(SHA-256)", ...) rather than concrete types, and resolve them here
//! each time a fresh primitive instance is needed. A registry is populated
//! once, wrapped in an `Arc`, and shared read-only by every parameter
//! object built from it.

use core::fmt;

use crate::error::{Error, Result};
use crate::traits::{CipherDirection, CipherMode, KeyDerivationFunction, MessageAuthCode};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{
    boxed::Box,
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};
#[cfg(feature = "std")]
use std::collections::BTreeMap;

/// Factory producing a fresh KDF instance
pub type KdfFactory = Box<dyn Fn() -> Box<dyn KeyDerivationFunction> + Send + Sync>;

/// Factory producing a fresh MAC instance
pub type MacFactory = Box<dyn Fn() -> Box<dyn MessageAuthCode> + Send + Sync>;

/// Factory producing a fresh cipher mode bound to a direction
pub type CipherFactory = Box<dyn Fn(CipherDirection) -> Box<dyn CipherMode> + Send + Sync>;

/// Name-indexed collection of algorithm constructors
#[derive(Default)]
pub struct AlgorithmRegistry {
    kdfs: BTreeMap<String, KdfFactory>,
    macs: BTreeMap<String, MacFactory>,
    ciphers: BTreeMap<String, CipherFactory>,
}

impl AlgorithmRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a KDF under `name`, replacing any previous entry
    pub fn register_kdf<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn KeyDerivationFunction> + Send + Sync + 'static,
    {
        self.kdfs.insert(name.into(), Box::new(factory));
    }

    /// Register a MAC under `name`, replacing any previous entry
    pub fn register_mac<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn MessageAuthCode> + Send + Sync + 'static,
    {
        self.macs.insert(name.into(), Box::new(factory));
    }

    /// Register a cipher mode under `name`, replacing any previous entry
    ///
    /// The factory receives the direction the instance must be bound to.
    pub fn register_cipher<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(CipherDirection) -> Box<dyn CipherMode> + Send + Sync + 'static,
    {
        self.ciphers.insert(name.into(), Box::new(factory));
    }

    /// Instantiate the KDF registered under `name`
    pub fn create_kdf(&self, name: &str) -> Result<Box<dyn KeyDerivationFunction>> {
        match self.kdfs.get(name) {
            Some(factory) => Ok(factory()),
            None => Err(Error::UnknownAlgorithm {
                name: name.to_string(),
            }),
        }
    }

    /// Instantiate the MAC registered under `name`
    pub fn create_mac(&self, name: &str) -> Result<Box<dyn MessageAuthCode>> {
        match self.macs.get(name) {
            Some(factory) => Ok(factory()),
            None => Err(Error::UnknownAlgorithm {
                name: name.to_string(),
            }),
        }
    }

    /// Instantiate the cipher mode registered under `name`
    pub fn create_cipher(
        &self,
        name: &str,
        direction: CipherDirection,
    ) -> Result<Box<dyn CipherMode>> {
        match self.ciphers.get(name) {
            Some(factory) => Ok(factory(direction)),
            None => Err(Error::UnknownAlgorithm {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("kdfs", &self.kdfs.keys().collect::<Vec<_>>())
            .field("macs", &self.macs.keys().collect::<Vec<_>>())
            .field("ciphers", &self.ciphers.keys().collect::<Vec<_>>())
            .finish()
    }
}
