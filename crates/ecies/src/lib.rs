//! Parameterized ECIES hybrid encryption for the ecrypt library
//!
//! Implements the integrated encryption scheme from ISO 18033-2: an
//! elliptic-curve key agreement feeding a KDF, whose output keys a data
//! encapsulation cipher and a MAC. Every collaborator is abstract; curves
//! come from [`EcGroup`](ecrypt_api::traits::EcGroup) backends and the
//! symmetric algorithms resolve by name through an
//! [`AlgorithmRegistry`](ecrypt_api::registry::AlgorithmRegistry).
//!
//! Messages travel as `encoded ephemeral key || DEM output || tag` with no
//! delimiters; both sides recover the section boundaries from their
//! parameters.
//!
//! ```
//! use ecrypt_algorithms::ec::p256::P256Group;
//! use ecrypt_algorithms::registry::{AES_128_CBC, HMAC_SHA256, KDF2_SHA256};
//! use ecrypt_api::traits::EcGroup;
//! use ecrypt_ecies::{EciesDecryptor, EciesEncryptor, EciesSystemParams};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), ecrypt_ecies::Error> {
//! let registry = Arc::new(ecrypt_algorithms::standard_registry());
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
//! let group = P256Group::new();
//! let mut rng = rand::thread_rng();
//! let recipient_secret = group.generate_scalar(&mut rng)?;
//! let recipient_public = group.public_point(&recipient_secret)?;
//! let iv = [0u8; 16];
//!
//! let encryptor = EciesEncryptor::new(params.clone(), &mut rng)?;
//! let ciphertext = encryptor
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

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc;

pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod flags;
pub mod ka;
pub mod params;

#[cfg(test)]
mod testutil;

pub use decryptor::{DecryptOp, EciesDecryptor};
pub use encryptor::{EciesEncryptor, EncryptOp};
pub use error::{Error, Result};
pub use flags::EciesFlags;
pub use ka::EciesKeyAgreement;
pub use params::{EciesKaParams, EciesSystemParams};

// The decryption outcome type lives in the API crate; re-exported so the
// common path needs only this crate.
pub use ecrypt_api::types::DecryptionOutcome;
