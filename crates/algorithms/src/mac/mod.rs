//! HMAC message authentication codes
//!
//! Thin stateful wrappers over `hmac::Hmac`, keeping the key so the
//! instance re-keys itself after each `finalize` and can authenticate a
//! stream of messages, as the MAC trait requires.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroizing;

use ecrypt_api::error::{Error, Result};
use ecrypt_api::MessageAuthCode;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;


macro_rules! hmac_mac {
    ($name:ident, $digest:ty, $algo:literal) => {
        #[doc = concat!($algo, " message authentication code")]
        pub struct $name {
            key: Option<Zeroizing<Vec<u8>>>,
            state: Option<Hmac<$digest>>,
        }

        impl $name {
            pub fn new() -> Self {
                Self {
                    key: None,
                    state: None,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl MessageAuthCode for $name {
            fn output_length(&self) -> usize {
                <$digest as Digest>::output_size()
            }

            fn set_key(&mut self, key: &[u8]) -> Result<()> {
                let state = <Hmac<$digest> as Mac>::new_from_slice(key).map_err(|_| {
                    Error::Processing {
                        operation: $algo,
                        details: "invalid key length",
                    }
                })?;
                self.key = Some(Zeroizing::new(key.to_vec()));
                self.state = Some(state);
                Ok(())
            }

            fn update(&mut self, data: &[u8]) -> Result<()> {
                match self.state.as_mut() {
                    Some(state) => {
                        Mac::update(state, data);
                        Ok(())
                    }
                    None => Err(Error::Processing {
                        operation: $algo,
                        details: "update called before set_key",
                    }),
                }
            }

            fn finalize(&mut self) -> Result<Vec<u8>> {
                let state = self.state.take().ok_or(Error::Processing {
                    operation: $algo,
                    details: "finalize called before set_key",
                })?;
                let tag = state.finalize().into_bytes().to_vec();

                // Re-key for the next message.
                let key = self.key.as_ref().ok_or(Error::Processing {
                    operation: $algo,
                    details: "key state lost",
                })?;
                self.state = Some(<Hmac<$digest> as Mac>::new_from_slice(key).map_err(|_| {
                    Error::Processing {
                        operation: $algo,
                        details: "invalid key length",
                    }
                })?);
                Ok(tag)
            }
        }
    };
}

hmac_mac!(HmacSha256, Sha256, "HMAC(SHA-256)");
hmac_mac!(HmacSha512, Sha512, "HMAC(SHA-512)");
