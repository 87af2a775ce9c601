//! Public API surface for the ecrypt library
//!
//! This crate defines the interfaces the ECIES composition in `ecrypt-ecies`
//! is written against: the elliptic-curve group abstraction, the KDF, cipher
//! mode and MAC traits, the registry that resolves algorithm specification
//! strings to instances of those traits, and the error vocabulary shared by
//! backends.
//!
//! Nothing in this crate performs cryptography itself; implementations live
//! in `ecrypt-algorithms` or in downstream crates.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod registry;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use registry::AlgorithmRegistry;
pub use types::DecryptionOutcome;

pub use traits::{
    CipherDirection, CipherMode, EcGroup, KeyDerivationFunction, MessageAuthCode, PointEncoding,
};
