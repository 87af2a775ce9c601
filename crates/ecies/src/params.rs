//! Parameter objects binding a curve, algorithm names and operating flags
//!
//! Parameter objects are validated eagerly: algorithm names resolve against
//! the registry at construction, and the derived-secret split is checked
//! before any operation object can be built from the parameters. A
//! misconfigured parameter set therefore fails where it is assembled, not
//! in the middle of an encryption.

use ecrypt_api::registry::AlgorithmRegistry;
use ecrypt_api::traits::{
    CipherDirection, CipherMode, EcGroup, KeyDerivationFunction, MessageAuthCode, PointEncoding,
};

use crate::error::{Error, Result};
use crate::flags::EciesFlags;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{boxed::Box, string::String, sync::Arc};
#[cfg(feature = "std")]
use std::sync::Arc;

/// Key-agreement parameters: curve domain, KDF and operating flags
///
/// Shared by both sides of an exchange. The embedded registry resolves the
/// KDF name to a fresh instance per derivation, so a parameter object can be
/// cloned across threads without sharing primitive state.
#[derive(Clone, Debug)]
pub struct EciesKaParams<G: EcGroup> {
    domain: G,
    kdf_spec: String,
    secret_length: usize,
    point_encoding: PointEncoding,
    flags: EciesFlags,
    registry: Arc<AlgorithmRegistry>,
}

impl<G: EcGroup> EciesKaParams<G> {
    /// Create key-agreement parameters
    ///
    /// Fails with [`Error::UnknownAlgorithm`] when `kdf_spec` does not
    /// resolve in `registry`, and with [`Error::InvalidConfiguration`] when
    /// `secret_length` is zero.
    pub fn new(
        domain: G,
        kdf_spec: impl Into<String>,
        secret_length: usize,
        point_encoding: PointEncoding,
        flags: EciesFlags,
        registry: Arc<AlgorithmRegistry>,
    ) -> Result<Self> {
        if secret_length == 0 {
            return Err(Error::InvalidConfiguration {
                context: "derived secret length",
                expected: 1,
                actual: 0,
            });
        }
        let kdf_spec = kdf_spec.into();
        registry.create_kdf(&kdf_spec)?;

        Ok(Self {
            domain,
            kdf_spec,
            secret_length,
            point_encoding,
            flags,
            registry,
        })
    }

    /// The curve domain
    pub fn domain(&self) -> &G {
        &self.domain
    }

    /// The KDF specification string
    pub fn kdf_spec(&self) -> &str {
        &self.kdf_spec
    }

    /// Length in bytes of the derived secret
    pub fn secret_length(&self) -> usize {
        self.secret_length
    }

    /// The point format used for the transmitted ephemeral key
    pub fn point_encoding(&self) -> PointEncoding {
        self.point_encoding
    }

    /// The operating-mode flags
    pub fn flags(&self) -> EciesFlags {
        self.flags
    }

    /// The algorithm registry these parameters resolve against
    pub fn registry(&self) -> &Arc<AlgorithmRegistry> {
        &self.registry
    }

    /// Length in bytes of an encoded ephemeral public key
    pub fn encoded_point_len(&self) -> usize {
        self.domain.encoded_point_len(self.point_encoding)
    }

    /// Instantiate a fresh KDF
    pub fn create_kdf(&self) -> Result<Box<dyn KeyDerivationFunction>> {
        Ok(self.registry.create_kdf(&self.kdf_spec)?)
    }
}

/// Full ECIES system parameters: key agreement plus DEM and MAC
///
/// The derived secret is split into a DEM key of `dem_key_len` bytes
/// followed by a MAC key of `mac_key_len` bytes; their sum must equal the
/// key-agreement secret length exactly.
#[derive(Clone, Debug)]
pub struct EciesSystemParams<G: EcGroup> {
    ka: EciesKaParams<G>,
    dem_spec: String,
    dem_key_len: usize,
    mac_spec: String,
    mac_key_len: usize,
}

impl<G: EcGroup> EciesSystemParams<G> {
    /// Create system parameters with default key-agreement settings
    ///
    /// The KA secret length is computed as `dem_key_len + mac_key_len`, the
    /// ephemeral key is sent uncompressed and no flags are set. Use
    /// [`EciesSystemParams::with_ka_params`] to control those.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        domain: G,
        kdf_spec: impl Into<String>,
        dem_spec: impl Into<String>,
        dem_key_len: usize,
        mac_spec: impl Into<String>,
        mac_key_len: usize,
        registry: Arc<AlgorithmRegistry>,
    ) -> Result<Self> {
        let ka = EciesKaParams::new(
            domain,
            kdf_spec,
            dem_key_len + mac_key_len,
            PointEncoding::Uncompressed,
            EciesFlags::NONE,
            registry,
        )?;
        Self::with_ka_params(ka, dem_spec, dem_key_len, mac_spec, mac_key_len)
    }

    /// Create system parameters over explicit key-agreement parameters
    ///
    /// Fails with [`Error::InvalidConfiguration`] when the key split does
    /// not add up to the KA secret length, and with
    /// [`Error::UnknownAlgorithm`] when the DEM or MAC name does not
    /// resolve.
    pub fn with_ka_params(
        ka: EciesKaParams<G>,
        dem_spec: impl Into<String>,
        dem_key_len: usize,
        mac_spec: impl Into<String>,
        mac_key_len: usize,
    ) -> Result<Self> {
        if dem_key_len + mac_key_len != ka.secret_length() {
            return Err(Error::InvalidConfiguration {
                context: "derived secret split",
                expected: ka.secret_length(),
                actual: dem_key_len + mac_key_len,
            });
        }
        let dem_spec = dem_spec.into();
        let mac_spec = mac_spec.into();
        ka.registry()
            .create_cipher(&dem_spec, CipherDirection::Encryption)?;
        ka.registry().create_mac(&mac_spec)?;

        Ok(Self {
            ka,
            dem_spec,
            dem_key_len,
            mac_spec,
            mac_key_len,
        })
    }

    /// The key-agreement parameters
    pub fn ka_params(&self) -> &EciesKaParams<G> {
        &self.ka
    }

    /// The DEM specification string
    pub fn dem_spec(&self) -> &str {
        &self.dem_spec
    }

    /// Length in bytes of the DEM key slice
    pub fn dem_key_len(&self) -> usize {
        self.dem_key_len
    }

    /// The MAC specification string
    pub fn mac_spec(&self) -> &str {
        &self.mac_spec
    }

    /// Length in bytes of the MAC key slice
    pub fn mac_key_len(&self) -> usize {
        self.mac_key_len
    }

    /// The curve domain
    pub fn domain(&self) -> &G {
        self.ka.domain()
    }

    /// The operating-mode flags
    pub fn flags(&self) -> EciesFlags {
        self.ka.flags()
    }

    /// The point format used for the transmitted ephemeral key
    pub fn point_encoding(&self) -> PointEncoding {
        self.ka.point_encoding()
    }

    /// Length in bytes of the derived secret
    pub fn secret_length(&self) -> usize {
        self.ka.secret_length()
    }

    /// Length in bytes of an encoded ephemeral public key
    pub fn encoded_point_len(&self) -> usize {
        self.ka.encoded_point_len()
    }

    /// Instantiate a fresh KDF
    pub fn create_kdf(&self) -> Result<Box<dyn KeyDerivationFunction>> {
        self.ka.create_kdf()
    }

    /// Instantiate a fresh DEM cipher bound to `direction`
    pub fn create_cipher(&self, direction: CipherDirection) -> Result<Box<dyn CipherMode>> {
        Ok(self.ka.registry().create_cipher(&self.dem_spec, direction)?)
    }

    /// Instantiate a fresh MAC
    pub fn create_mac(&self) -> Result<Box<dyn MessageAuthCode>> {
        Ok(self.ka.registry().create_mac(&self.mac_spec)?)
    }
}
