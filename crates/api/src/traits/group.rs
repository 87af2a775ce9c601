//! Elliptic-curve group abstraction
//!
//! The ECIES composition never performs curve arithmetic itself; everything
//! it needs from a curve is expressed by [`EcGroup`]. Implementations are
//! expected to be cheap handles (curve parameters plus precomputed
//! constants), cloned freely into parameter objects.

use rand::{CryptoRng, RngCore};

use crate::error::Result;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Serialization format for curve points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointEncoding {
    /// x-coordinate with a parity prefix byte
    Compressed,
    /// Prefix byte `0x04` followed by both coordinates
    Uncompressed,
    /// Both coordinates with a parity prefix byte
    Hybrid,
}

/// Operations on an elliptic-curve group
///
/// `Point` and `Scalar` are backend-defined. Scalars are private-key
/// material; implementations decide how they are protected and wiped.
///
/// # Security Note
///
/// `decode_point` is a structural parse only: it must accept any byte
/// string that is well-formed for the encoding, without checking curve
/// membership. Curve membership is queried separately through
/// [`EcGroup::is_on_curve`], so callers control whether and when the check
/// runs. Backends whose codec inherently validates membership should
/// document that decoded points always pass `is_on_curve`.
pub trait EcGroup {
    /// A point on the curve (or off it, for structurally-valid decodes)
    type Point: Clone;
    /// A scalar modulo the group order
    type Scalar: Clone;

    /// Width in bytes of one encoded field element
    fn field_element_len(&self) -> usize;

    /// Length in bytes of a point encoded in the given format
    fn encoded_point_len(&self, encoding: PointEncoding) -> usize;

    /// The curve cofactor
    fn cofactor(&self) -> u64;

    /// Generate a uniformly random non-zero scalar
    fn generate_scalar<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::Scalar>;

    /// Multiply the group generator by `scalar`
    fn public_point(&self, scalar: &Self::Scalar) -> Result<Self::Point>;

    /// Raw key agreement: multiply `point` by `scalar`
    ///
    /// The result may be the identity; callers decide whether that is an
    /// error. Implementations may blind the computation internally.
    fn agree(&self, scalar: &Self::Scalar, point: &Self::Point) -> Result<Self::Point>;

    /// Multiply `point` by the curve cofactor
    fn multiply_by_cofactor(&self, point: &Self::Point) -> Result<Self::Point>;

    /// Whether `point` is the identity (point at infinity)
    fn is_identity(&self, point: &Self::Point) -> bool;

    /// Whether `point` satisfies the curve equation
    fn is_on_curve(&self, point: &Self::Point) -> bool;

    /// Serialize `point` in the given format
    fn encode_point(&self, point: &Self::Point, encoding: PointEncoding) -> Result<Vec<u8>>;

    /// Parse an encoded point without checking curve membership
    fn decode_point(&self, bytes: &[u8]) -> Result<Self::Point>;

    /// The x-coordinate of `point` as a fixed-width big-endian byte string
    ///
    /// The width is always [`EcGroup::field_element_len`], left-padded with
    /// zeros. Fails for the identity, which has no affine coordinates.
    fn x_coordinate(&self, point: &Self::Point) -> Result<Vec<u8>>;
}
