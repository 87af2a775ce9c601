//! Shared types for scheme results

use core::fmt;

use zeroize::Zeroizing;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Result of a decryption that carries no failure reason
///
/// Every way a well-formed ciphertext can fail to decrypt (bad point, wrong
/// key, tampered data, wrong label or IV) produces the same [`Invalid`]
/// value, so callers cannot be used as an oracle for *why* a ciphertext was
/// rejected. Recovered plaintext is wiped on drop.
///
/// [`Invalid`]: DecryptionOutcome::Invalid
pub enum DecryptionOutcome {
    /// Authentication succeeded; the recovered plaintext
    Valid(Zeroizing<Vec<u8>>),
    /// Authentication failed
    Invalid,
}

impl DecryptionOutcome {
    /// Construct a valid outcome from recovered plaintext
    pub fn valid(plaintext: Vec<u8>) -> Self {
        DecryptionOutcome::Valid(Zeroizing::new(plaintext))
    }

    /// Whether decryption succeeded
    pub fn is_valid(&self) -> bool {
        matches!(self, DecryptionOutcome::Valid(_))
    }

    /// The recovered plaintext, if decryption succeeded
    pub fn as_plaintext(&self) -> Option<&[u8]> {
        match self {
            DecryptionOutcome::Valid(plaintext) => Some(plaintext),
            DecryptionOutcome::Invalid => None,
        }
    }

    /// Consume the outcome, returning the plaintext if decryption succeeded
    ///
    /// The returned buffer keeps its wipe-on-drop behavior.
    pub fn into_plaintext(self) -> Option<Zeroizing<Vec<u8>>> {
        match self {
            DecryptionOutcome::Valid(plaintext) => Some(plaintext),
            DecryptionOutcome::Invalid => None,
        }
    }
}

// Plaintext may be sensitive; show only its length.
impl fmt::Debug for DecryptionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecryptionOutcome::Valid(plaintext) => {
                write!(f, "DecryptionOutcome::Valid(<{} bytes>)", plaintext.len())
            }
            DecryptionOutcome::Invalid => write!(f, "DecryptionOutcome::Invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_validity() {
        let ok = DecryptionOutcome::valid(b"data".to_vec());
        assert!(ok.is_valid());
        assert_eq!(ok.as_plaintext(), Some(&b"data"[..]));
        let plaintext = ok.into_plaintext().expect("valid outcome");
        assert_eq!(&plaintext[..], b"data");

        let bad = DecryptionOutcome::Invalid;
        assert!(!bad.is_valid());
        assert_eq!(bad.as_plaintext(), None);
        assert!(bad.into_plaintext().is_none());
    }

    #[test]
    fn debug_redacts_plaintext() {
        let ok = DecryptionOutcome::valid(b"secret".to_vec());
        let rendered = format!("{:?}", ok);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("6 bytes"));
    }
}
