//! Operating-mode flags for the ECIES key agreement

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};

/// Flag set selecting ECIES operating modes
///
/// Flags combine with `|`; the empty set [`EciesFlags::NONE`] selects the
/// default behavior on every axis. The numeric values are fixed so that
/// serialized parameter sets stay interoperable.
///
/// ```
/// use ecrypt_ecies::EciesFlags;
///
/// let flags = EciesFlags::SINGLE_HASH_MODE | EciesFlags::CHECK_MODE;
/// assert!(flags.single_hash_mode());
/// assert!(!flags.cofactor_mode());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EciesFlags(u32);

impl EciesFlags {
    /// No flags set
    pub const NONE: Self = EciesFlags(0);

    /// Prepend the encoded ephemeral public key to the KDF input
    pub const SINGLE_HASH_MODE: Self = EciesFlags(1);

    /// Multiply the agreed point by the curve cofactor after agreement
    ///
    /// Only meaningful for decryption; key agreements built for encryption
    /// ignore it so both sides derive the same secret.
    pub const COFACTOR_MODE: Self = EciesFlags(2);

    /// Multiply the peer's point by the curve cofactor before agreement
    ///
    /// Legacy behavior, applied in both directions. Takes precedence over
    /// [`EciesFlags::COFACTOR_MODE`] when both are set.
    pub const OLD_COFACTOR_MODE: Self = EciesFlags(4);

    /// Validate received ephemeral points before use during decryption
    pub const CHECK_MODE: Self = EciesFlags(8);

    /// The raw flag bits
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Whether every flag in `other` is also set in `self`
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether single-hash mode is selected
    pub fn single_hash_mode(self) -> bool {
        self.contains(Self::SINGLE_HASH_MODE)
    }

    /// Whether cofactor mode is selected
    pub fn cofactor_mode(self) -> bool {
        self.contains(Self::COFACTOR_MODE)
    }

    /// Whether legacy cofactor mode is selected
    pub fn old_cofactor_mode(self) -> bool {
        self.contains(Self::OLD_COFACTOR_MODE)
    }

    /// Whether point validation at decryption is selected
    pub fn check_mode(self) -> bool {
        self.contains(Self::CHECK_MODE)
    }
}

impl BitOr for EciesFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        EciesFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for EciesFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for EciesFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        EciesFlags(self.0 & rhs.0)
    }
}

impl fmt::Debug for EciesFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("EciesFlags(NONE)");
        }
        let mut unseen = self.0;
        let mut first = true;
        f.write_str("EciesFlags(")?;
        for (flag, name) in [
            (Self::SINGLE_HASH_MODE, "SINGLE_HASH_MODE"),
            (Self::COFACTOR_MODE, "COFACTOR_MODE"),
            (Self::OLD_COFACTOR_MODE, "OLD_COFACTOR_MODE"),
            (Self::CHECK_MODE, "CHECK_MODE"),
        ] {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
                unseen &= !flag.0;
            }
        }
        if unseen != 0 {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "{:#x}", unseen)?;
        }
        f.write_str(")")
    }
}
