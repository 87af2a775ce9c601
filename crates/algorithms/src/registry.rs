//! Canonical algorithm names and the standard registry

use ecrypt_api::registry::AlgorithmRegistry;
use sha2::{Sha256, Sha512};

use crate::cipher::{Aes128Cbc, Aes256Cbc};
use crate::kdf::{Kdf1, Kdf2};
use crate::mac::{HmacSha256, HmacSha512};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::boxed::Box;

/// KDF1 from ISO 18033-2 over SHA-256
pub const KDF1_SHA256: &str = "KDF1-18033(SHA-256)";
/// KDF2 from ISO 18033-2 over SHA-256
pub const KDF2_SHA256: &str = "KDF2(SHA-256)";
/// KDF2 from ISO 18033-2 over SHA-512
pub const KDF2_SHA512: &str = "KDF2(SHA-512)";
/// HMAC over SHA-256
pub const HMAC_SHA256: &str = "HMAC(SHA-256)";
/// HMAC over SHA-512
pub const HMAC_SHA512: &str = "HMAC(SHA-512)";
/// AES-128 in CBC mode with PKCS#7 padding
pub const AES_128_CBC: &str = "AES-128/CBC";
/// AES-256 in CBC mode with PKCS#7 padding
pub const AES_256_CBC: &str = "AES-256/CBC";

/// Build a registry holding every backend in this crate
///
/// Each backend is registered under its canonical name above. Callers that
/// need additional algorithms can keep registering on the returned value
/// before sharing it.
pub fn standard_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register_kdf(KDF1_SHA256, || Box::new(Kdf1::<Sha256>::new()));
    registry.register_kdf(KDF2_SHA256, || Box::new(Kdf2::<Sha256>::new()));
    registry.register_kdf(KDF2_SHA512, || Box::new(Kdf2::<Sha512>::new()));

    registry.register_mac(HMAC_SHA256, || Box::new(HmacSha256::new()));
    registry.register_mac(HMAC_SHA512, || Box::new(HmacSha512::new()));

    registry.register_cipher(AES_128_CBC, |direction| Box::new(Aes128Cbc::new(direction)));
    registry.register_cipher(AES_256_CBC, |direction| Box::new(Aes256Cbc::new(direction)));

    registry
}
