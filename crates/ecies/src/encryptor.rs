//! ECIES encryption
//!
//! An [`EciesEncryptor`] owns one ephemeral key and the system parameters;
//! a fresh encryptor therefore means a fresh ephemeral key. Everything that
//! varies per message is supplied on the operation itself:
//!
//! ```
//! # use ecrypt_ecies::{EciesEncryptor, EciesSystemParams};
//! # use ecrypt_api::traits::EcGroup;
//! # use ecrypt_algorithms::ec::p256::P256Group;
//! # use ecrypt_algorithms::registry::{AES_128_CBC, HMAC_SHA256, KDF2_SHA256};
//! # use std::sync::Arc;
//! # fn main() -> Result<(), ecrypt_ecies::Error> {
//! # let registry = Arc::new(ecrypt_algorithms::standard_registry());
//! # let params = EciesSystemParams::new(
//! #     P256Group::new(), KDF2_SHA256, AES_128_CBC, 16, HMAC_SHA256, 32, registry,
//! # )?;
//! # let group = P256Group::new();
//! # let mut rng = rand::thread_rng();
//! # let recipient_secret = group.generate_scalar(&mut rng)?;
//! # let recipient_public = group.public_point(&recipient_secret)?;
//! let encryptor = EciesEncryptor::new(params, &mut rng)?;
//! let ciphertext = encryptor
//!     .encrypt(b"confidential")
//!     .with_peer_key(&recipient_public)
//!     .with_iv(&[0u8; 16])
//!     .seal()?;
//! # Ok(())
//! # }
//! ```

use ecrypt_api::traits::{CipherDirection, EcGroup};
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};
use crate::ka::EciesKeyAgreement;
use crate::params::EciesSystemParams;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// ECIES encryption engine bound to one ephemeral key
///
/// Immutable after construction; one engine can seal any number of
/// messages, all under the same ephemeral key. Use a fresh engine per
/// message for the usual one-shot ECIES construction.
#[derive(Debug)]
pub struct EciesEncryptor<G: EcGroup> {
    params: EciesSystemParams<G>,
    ka: EciesKeyAgreement<G>,
    eph_public_key: Vec<u8>,
}

impl<G: EcGroup> EciesEncryptor<G> {
    /// Create an encryptor with a freshly generated ephemeral key
    pub fn new<R: CryptoRng + RngCore>(params: EciesSystemParams<G>, rng: &mut R) -> Result<Self>
    where
        G: Clone,
    {
        let ephemeral = params.domain().generate_scalar(rng)?;
        Self::from_private_key(params, ephemeral)
    }

    /// Create an encryptor around a caller-supplied private key
    ///
    /// Intended for deterministic tests and for protocols that reuse an
    /// agreed ephemeral key; everyday callers want [`EciesEncryptor::new`].
    pub fn from_private_key(params: EciesSystemParams<G>, private_key: G::Scalar) -> Result<Self>
    where
        G: Clone,
    {
        let group = params.domain();
        let public_point = group.public_point(&private_key)?;
        let eph_public_key = group.encode_point(&public_point, params.point_encoding())?;
        let ka = EciesKeyAgreement::new(params.ka_params().clone(), private_key, true);
        Ok(Self {
            params,
            ka,
            eph_public_key,
        })
    }

    /// The system parameters
    pub fn params(&self) -> &EciesSystemParams<G> {
        &self.params
    }

    /// The encoded ephemeral public key transmitted with every message
    pub fn ephemeral_public_key(&self) -> &[u8] {
        &self.eph_public_key
    }

    /// Begin encrypting `plaintext`
    pub fn encrypt<'a>(&'a self, plaintext: &'a [u8]) -> EncryptOp<'a, G> {
        EncryptOp {
            encryptor: self,
            plaintext,
            peer_key: None,
            iv: None,
            label: None,
        }
    }
}

/// One encryption in progress
///
/// Created by [`EciesEncryptor::encrypt`]; configured with the recipient's
/// public key and any per-message inputs, then executed with
/// [`EncryptOp::seal`].
#[must_use = "an encryption does nothing until sealed"]
pub struct EncryptOp<'a, G: EcGroup> {
    encryptor: &'a EciesEncryptor<G>,
    plaintext: &'a [u8],
    peer_key: Option<&'a G::Point>,
    iv: Option<&'a [u8]>,
    label: Option<&'a [u8]>,
}

impl<'a, G: EcGroup> EncryptOp<'a, G> {
    /// Set the recipient's public key
    pub fn with_peer_key(mut self, peer_key: &'a G::Point) -> Self {
        self.peer_key = Some(peer_key);
        self
    }

    /// Set the initialization vector for the DEM
    pub fn with_iv(mut self, iv: &'a [u8]) -> Self {
        self.iv = Some(iv);
        self
    }

    /// Set a label authenticated alongside the ciphertext
    pub fn with_label(mut self, label: &'a [u8]) -> Self {
        self.label = Some(label);
        self
    }

    /// Execute the encryption
    ///
    /// Produces `encoded ephemeral key || DEM output || tag` with no
    /// delimiters. Fails with [`Error::InvalidState`] when the recipient
    /// key is missing or the DEM requires an IV that was not supplied.
    pub fn seal(self) -> Result<Vec<u8>> {
        let params = &self.encryptor.params;
        let peer_key = self.peer_key.ok_or(Error::InvalidState {
            context: "no recipient public key set",
        })?;

        let mut cipher = params.create_cipher(CipherDirection::Encryption)?;
        let mut mac = params.create_mac()?;
        if cipher.requires_iv() && self.iv.is_none() {
            return Err(Error::InvalidState {
                context: "cipher requires an initialization vector",
            });
        }

        let secret = self
            .encryptor
            .ka
            .derive_secret(&self.encryptor.eph_public_key, peer_key)?;
        let (dem_key, mac_key) = secret.split_at(params.dem_key_len());

        let body = cipher.process(dem_key, self.iv, self.plaintext)?;

        mac.set_key(mac_key)?;
        mac.update(&body)?;
        if let Some(label) = self.label {
            mac.update(label)?;
        }
        let tag = mac.finalize()?;

        let ephemeral = self.encryptor.ephemeral_public_key();
        let mut out = Vec::with_capacity(ephemeral.len() + body.len() + tag.len());
        out.extend_from_slice(ephemeral);
        out.extend_from_slice(&body);
        out.extend_from_slice(&tag);
        Ok(out)
    }
}
