//! Algorithm backends for the ecrypt library
//!
//! Implements the `ecrypt-api` collaborator traits on top of the RustCrypto
//! primitive crates and exposes [`standard_registry`], which registers every
//! backend under its canonical specification string:
//!
//! | name | backend |
//! |---|---|
//! | `KDF1-18033(SHA-256)` | counter KDF, counter starts at 0 |
//! | `KDF2(SHA-256)`, `KDF2(SHA-512)` | counter KDF, counter starts at 1 |
//! | `HMAC(SHA-256)`, `HMAC(SHA-512)` | `hmac` over `sha2` |
//! | `AES-128/CBC`, `AES-256/CBC` | `cbc` over `aes`, PKCS#7 padding |
//!
//! The NIST P-256 group backend lives in [`ec::p256`] behind the `p256`
//! feature.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod cipher;
pub mod ec;
pub mod kdf;
pub mod mac;
pub mod registry;

pub use registry::standard_registry;
