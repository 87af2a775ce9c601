//! ECIES decryption
//!
//! Decryption separates failures the sender could not have influenced
//! (missing IV, ciphertext shorter than its framing) from failures caused
//! by the ciphertext contents. The former are returned as errors; the
//! latter all collapse into [`DecryptionOutcome::Invalid`] so that a
//! caller relaying results cannot be used as a padding or point-validity
//! oracle. The authentication tag is compared in constant time before the
//! DEM runs.

use ecrypt_api::traits::{CipherDirection, CipherMode, EcGroup, MessageAuthCode};
use ecrypt_api::types::DecryptionOutcome;
use subtle::ConstantTimeEq;

use crate::error::{Error, Result};
use crate::ka::EciesKeyAgreement;
use crate::params::EciesSystemParams;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// ECIES decryption engine bound to the recipient's private key
///
/// Immutable after construction and shareable across threads; every
/// message carries its own ephemeral key, so one engine serves any number
/// of ciphertexts.
#[derive(Debug)]
pub struct EciesDecryptor<G: EcGroup> {
    params: EciesSystemParams<G>,
    ka: EciesKeyAgreement<G>,
}

impl<G: EcGroup> EciesDecryptor<G> {
    /// Create a decryptor around the recipient's private key
    pub fn new(params: EciesSystemParams<G>, private_key: G::Scalar) -> Self
    where
        G: Clone,
    {
        let ka = EciesKeyAgreement::new(params.ka_params().clone(), private_key, false);
        Self { params, ka }
    }

    /// The system parameters
    pub fn params(&self) -> &EciesSystemParams<G> {
        &self.params
    }

    /// Begin decrypting `ciphertext`
    pub fn decrypt<'a>(&'a self, ciphertext: &'a [u8]) -> DecryptOp<'a, G> {
        DecryptOp {
            decryptor: self,
            ciphertext,
            iv: None,
            label: None,
        }
    }
}

/// One decryption in progress
///
/// Created by [`EciesDecryptor::decrypt`]; the IV and label must match the
/// values used when the message was sealed.
#[must_use = "a decryption does nothing until opened"]
pub struct DecryptOp<'a, G: EcGroup> {
    decryptor: &'a EciesDecryptor<G>,
    ciphertext: &'a [u8],
    iv: Option<&'a [u8]>,
    label: Option<&'a [u8]>,
}

impl<'a, G: EcGroup> DecryptOp<'a, G> {
    /// Set the initialization vector for the DEM
    pub fn with_iv(mut self, iv: &'a [u8]) -> Self {
        self.iv = Some(iv);
        self
    }

    /// Set the label the sender authenticated
    pub fn with_label(mut self, label: &'a [u8]) -> Self {
        self.label = Some(label);
        self
    }

    /// Execute the decryption
    ///
    /// Fails with [`Error::InvalidState`] when the DEM requires an IV that
    /// was not supplied, and with [`Error::InvalidInput`] when the
    /// ciphertext is too short to contain an ephemeral key and a tag. Any
    /// failure beyond those checks produces
    /// [`DecryptionOutcome::Invalid`].
    pub fn open(self) -> Result<DecryptionOutcome> {
        let params = &self.decryptor.params;
        let mut cipher = params.create_cipher(CipherDirection::Decryption)?;
        let mut mac = params.create_mac()?;

        if cipher.requires_iv() && self.iv.is_none() {
            return Err(Error::InvalidState {
                context: "cipher requires an initialization vector",
            });
        }

        let point_len = params.encoded_point_len();
        let tag_len = mac.output_length();
        if self.ciphertext.len() < point_len + tag_len {
            return Err(Error::InvalidInput {
                context: "ciphertext shorter than its framing",
            });
        }
        let (ephemeral, rest) = self.ciphertext.split_at(point_len);
        let (body, tag) = rest.split_at(rest.len() - tag_len);

        Ok(
            match self.recover(cipher.as_mut(), mac.as_mut(), ephemeral, body, tag) {
                Ok(plaintext) => DecryptionOutcome::valid(plaintext),
                Err(_) => DecryptionOutcome::Invalid,
            },
        )
    }

    /// The fallible tail of a decryption; every error becomes `Invalid`
    fn recover(
        &self,
        cipher: &mut dyn CipherMode,
        mac: &mut dyn MessageAuthCode,
        ephemeral: &[u8],
        body: &[u8],
        tag: &[u8],
    ) -> Result<Vec<u8>> {
        let params = &self.decryptor.params;
        let group = params.domain();

        let point = group.decode_point(ephemeral)?;
        if params.flags().check_mode()
            && (group.is_identity(&point) || !group.is_on_curve(&point))
        {
            return Err(Error::InvalidInput {
                context: "ephemeral point rejected",
            });
        }

        let secret = self.decryptor.ka.derive_secret(ephemeral, &point)?;
        let (dem_key, mac_key) = secret.split_at(params.dem_key_len());

        mac.set_key(mac_key)?;
        mac.update(body)?;
        if let Some(label) = self.label {
            mac.update(label)?;
        }
        let expected = mac.finalize()?;
        if !bool::from(expected.ct_eq(tag)) {
            return Err(Error::InvalidInput {
                context: "authentication tag mismatch",
            });
        }

        Ok(cipher.process(dem_key, self.iv, body)?)
    }
}
