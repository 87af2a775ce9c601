//! Message authentication code interface

use crate::error::Result;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// A keyed message authentication code computed incrementally
///
/// One instance serves many messages: after [`MessageAuthCode::finalize`]
/// the internal state resets to freshly-keyed, ready for the next
/// `update` sequence. `update` and `finalize` fail if no key has been set.
pub trait MessageAuthCode {
    /// Tag length in bytes
    fn output_length(&self) -> usize;

    /// Key the MAC, discarding any partially absorbed message
    fn set_key(&mut self, key: &[u8]) -> Result<()>;

    /// Absorb `data` into the current message
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Produce the tag for the absorbed message and reset to freshly-keyed
    fn finalize(&mut self) -> Result<Vec<u8>>;
}
