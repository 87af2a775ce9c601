//! # ecrypt
//!
//! A modular implementation of the ECIES integrated encryption scheme from
//! ISO 18033-2.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecrypt = "0.3"
//! ```
//!
//! ```
//! use ecrypt::prelude::*;
//! use std::sync::Arc;
//!
//! # fn main() -> ecrypt::ecies::Result<()> {
//! let registry = Arc::new(ecrypt::algorithms::standard_registry());
//! let params = EciesSystemParams::new(
//!     P256Group::new(),
//!     KDF2_SHA256,
//!     AES_128_CBC,
//!     16,
//!     HMAC_SHA256,
//!     32,
//!     registry,
//! )?;
//!
//! let curve = P256Group::new();
//! let mut rng = rand::thread_rng();
//! let recipient_secret = curve.generate_scalar(&mut rng)?;
//! let recipient_public = curve.public_point(&recipient_secret)?;
//! let iv = [0u8; 16];
//!
//! let ciphertext = EciesEncryptor::new(params.clone(), &mut rng)?
//!     .encrypt(b"hello")
//!     .with_peer_key(&recipient_public)
//!     .with_iv(&iv)
//!     .seal()?;
//!
//! let decryptor = EciesDecryptor::new(params, recipient_secret);
//! let outcome = decryptor.decrypt(&ciphertext).with_iv(&iv).open()?;
//! assert_eq!(outcome.as_plaintext(), Some(&b"hello"[..]));
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `algorithms` (default): bundled KDF, MAC and cipher backends built on
//!   the RustCrypto crates
//! - `p256` (default): the NIST P-256 group backend
//! - `std` (default): standard library support; disable for `no_std` +
//!   `alloc` builds
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`ecrypt-api`](api): collaborator traits, the algorithm registry and
//!   shared error types
//! - [`ecrypt-algorithms`](algorithms): algorithm backends and the P-256
//!   group
//! - [`ecrypt-ecies`](ecies): the ECIES composition itself

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use ecrypt_api as api;
pub use ecrypt_ecies as ecies;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use ecrypt_algorithms as algorithms;

/// Common imports for ecrypt users
pub mod prelude {
    pub use crate::api::registry::AlgorithmRegistry;
    pub use crate::api::traits::{
        CipherDirection, CipherMode, EcGroup, KeyDerivationFunction, MessageAuthCode,
        PointEncoding,
    };
    pub use crate::api::types::DecryptionOutcome;

    // Re-export the scheme error types; the primitive-level ones stay
    // reachable through `api`.
    pub use crate::ecies::{
        EciesDecryptor, EciesEncryptor, EciesFlags, EciesKaParams, EciesKeyAgreement,
        EciesSystemParams, Error, Result,
    };

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::registry::{
        AES_128_CBC, AES_256_CBC, HMAC_SHA256, HMAC_SHA512, KDF1_SHA256, KDF2_SHA256, KDF2_SHA512,
    };
    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::standard_registry;

    #[cfg(feature = "p256")]
    pub use crate::algorithms::ec::p256::P256Group;
}
