//! Key agreement and secret derivation
//!
//! [`EciesKeyAgreement`] binds a private scalar to key-agreement parameters
//! and derives the shared secret that the encryptor and decryptor split
//! into DEM and MAC keys. The same unit serves both directions: the
//! encryptor builds one around the ephemeral scalar, the decryptor around
//! the recipient's long-term scalar.

use core::fmt;

use ecrypt_api::error::Error as ApiError;
use ecrypt_api::traits::EcGroup;
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::params::EciesKaParams;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// One side of an ECIES key agreement
///
/// Cofactor handling is resolved at construction. Legacy cofactor mode
/// multiplies the peer point before agreement and applies in both
/// directions; it takes precedence over plain cofactor mode when both
/// flags are set. Plain cofactor mode multiplies the agreed point after
/// agreement and is only honored when the unit is built for decryption,
/// so that both sides of an exchange derive the same secret.
pub struct EciesKeyAgreement<G: EcGroup> {
    params: EciesKaParams<G>,
    private_key: G::Scalar,
    cofactor_mode: bool,
    old_cofactor_mode: bool,
}

impl<G: EcGroup> EciesKeyAgreement<G> {
    /// Bind `private_key` to `params` for one direction of an exchange
    pub fn new(params: EciesKaParams<G>, private_key: G::Scalar, for_encryption: bool) -> Self {
        let flags = params.flags();
        let old_cofactor_mode = flags.old_cofactor_mode();
        let cofactor_mode = flags.cofactor_mode() && !for_encryption && !old_cofactor_mode;
        Self {
            params,
            private_key,
            cofactor_mode,
            old_cofactor_mode,
        }
    }

    /// The key-agreement parameters
    pub fn params(&self) -> &EciesKaParams<G> {
        &self.params
    }

    /// Derive the shared secret for one message
    ///
    /// `ephemeral_encoding` is the transmitted encoding of the message's
    /// ephemeral public key, used verbatim as KDF prefix in single-hash
    /// mode. `peer` is the other side's public point: the recipient's
    /// long-term key during encryption, the decoded ephemeral key during
    /// decryption.
    ///
    /// The derivation is deterministic and yields exactly
    /// [`secret_length`](EciesKaParams::secret_length) bytes. Fails with
    /// [`Error::KeyAgreementFailure`] when the agreed point is the
    /// identity.
    pub fn derive_secret(
        &self,
        ephemeral_encoding: &[u8],
        peer: &G::Point,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let group = self.params.domain();

        let agreed = if self.old_cofactor_mode {
            let peer = group.multiply_by_cofactor(peer)?;
            group.agree(&self.private_key, &peer)?
        } else {
            let agreed = group.agree(&self.private_key, peer)?;
            if self.cofactor_mode {
                group.multiply_by_cofactor(&agreed)?
            } else {
                agreed
            }
        };

        if group.is_identity(&agreed) {
            return Err(Error::KeyAgreementFailure);
        }

        // Fixed-width x-coordinate, so secrets never depend on leading
        // zero bytes being dropped.
        let x = Zeroizing::new(group.x_coordinate(&agreed)?);

        let single_hash = self.params.flags().single_hash_mode();
        let mut kdf_input = Zeroizing::new(Vec::with_capacity(
            x.len() + if single_hash { ephemeral_encoding.len() } else { 0 },
        ));
        if single_hash {
            kdf_input.extend_from_slice(ephemeral_encoding);
        }
        kdf_input.extend_from_slice(&x);

        let kdf = self.params.create_kdf()?;
        let secret = kdf.derive_key(&kdf_input, self.params.secret_length())?;
        if secret.len() != self.params.secret_length() {
            return Err(Error::Primitive(ApiError::Processing {
                operation: "key derivation",
                details: "output length mismatch",
            }));
        }
        Ok(Zeroizing::new(secret))
    }
}

impl<G: EcGroup + fmt::Debug> fmt::Debug for EciesKeyAgreement<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EciesKeyAgreement")
            .field("params", &self.params)
            .field("private_key", &"[REDACTED]")
            .field("cofactor_mode", &self.cofactor_mode)
            .field("old_cofactor_mode", &self.old_cofactor_mode)
            .finish()
    }
}
