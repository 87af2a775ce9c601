//! Block cipher modes for data encapsulation
//!
//! AES in CBC mode with PKCS#7 padding, wrapped as direction-bound
//! [`CipherMode`] instances. Output grows to the next block boundary when
//! encrypting; decrypting strips the padding and fails on any malformed
//! pad.

use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use ecrypt_api::error::{Error, Result};
use ecrypt_api::{CipherDirection, CipherMode};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;


/// AES block size in bytes, which is also the CBC IV size
pub const AES_BLOCK_SIZE: usize = 16;

macro_rules! aes_cbc {
    ($name:ident, $aes:ty, $key_len:expr, $algo:literal) => {
        #[doc = concat!($algo, " with PKCS#7 padding")]
        #[derive(Debug, Clone, Copy)]
        pub struct $name {
            direction: CipherDirection,
        }

        impl $name {
            /// Key length in bytes
            pub const KEY_LENGTH: usize = $key_len;

            pub fn new(direction: CipherDirection) -> Self {
                Self { direction }
            }
        }

        impl CipherMode for $name {
            fn requires_iv(&self) -> bool {
                true
            }

            fn process(&mut self, key: &[u8], iv: Option<&[u8]>, data: &[u8]) -> Result<Vec<u8>> {
                if key.len() != Self::KEY_LENGTH {
                    return Err(Error::InvalidLength {
                        context: concat!($algo, " key"),
                        expected: Self::KEY_LENGTH,
                        actual: key.len(),
                    });
                }
                let iv = iv.ok_or(Error::Processing {
                    operation: $algo,
                    details: "an initialization vector is required",
                })?;
                if iv.len() != AES_BLOCK_SIZE {
                    return Err(Error::InvalidLength {
                        context: concat!($algo, " IV"),
                        expected: AES_BLOCK_SIZE,
                        actual: iv.len(),
                    });
                }

                match self.direction {
                    CipherDirection::Encryption => {
                        let cipher = cbc::Encryptor::<$aes>::new_from_slices(key, iv).map_err(
                            |_| Error::Processing {
                                operation: $algo,
                                details: "cipher initialization failed",
                            },
                        )?;
                        Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(data))
                    }
                    CipherDirection::Decryption => {
                        let cipher = cbc::Decryptor::<$aes>::new_from_slices(key, iv).map_err(
                            |_| Error::Processing {
                                operation: $algo,
                                details: "cipher initialization failed",
                            },
                        )?;
                        cipher
                            .decrypt_padded_vec_mut::<Pkcs7>(data)
                            .map_err(|_| Error::Processing {
                                operation: $algo,
                                details: "invalid padding",
                            })
                    }
                }
            }
        }
    };
}

aes_cbc!(Aes128Cbc, aes::Aes128, 16, "AES-128/CBC");
aes_cbc!(Aes256Cbc, aes::Aes256, 32, "AES-256/CBC");
