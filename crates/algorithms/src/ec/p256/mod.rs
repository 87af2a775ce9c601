//! NIST P-256 group backend
//!
//! Wraps the `p256` crate's arithmetic behind [`EcGroup`]. P-256 has
//! cofactor 1, so `multiply_by_cofactor` returns the point unchanged.
//!
//! The `p256` SEC1 codec rejects encodings whose coordinates do not satisfy
//! the curve equation, so every point produced by `decode_point` already
//! passes `is_on_curve`. Hybrid encoding is not implemented by the codec and
//! is reported as unsupported.

use ecrypt_api::error::{Error, Result};
use ecrypt_api::traits::{EcGroup, PointEncoding};
use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::{AffinePoint, EncodedPoint, NonZeroScalar, ProjectivePoint, Scalar};
use rand::{CryptoRng, RngCore};


#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// Width of a P-256 field element in bytes
pub const P256_FIELD_ELEMENT_SIZE: usize = 32;

/// Length of an uncompressed SEC1 point encoding
pub const P256_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * P256_FIELD_ELEMENT_SIZE;

/// Length of a compressed SEC1 point encoding
pub const P256_POINT_COMPRESSED_SIZE: usize = 1 + P256_FIELD_ELEMENT_SIZE;

/// The NIST P-256 (secp256r1) group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct P256Group;

impl P256Group {
    /// Create a handle to the P-256 group
    pub fn new() -> Self {
        P256Group
    }
}

impl EcGroup for P256Group {
    type Point = AffinePoint;
    type Scalar = Scalar;

    fn field_element_len(&self) -> usize {
        P256_FIELD_ELEMENT_SIZE
    }

    fn encoded_point_len(&self, encoding: PointEncoding) -> usize {
        match encoding {
            PointEncoding::Compressed => P256_POINT_COMPRESSED_SIZE,
            PointEncoding::Uncompressed | PointEncoding::Hybrid => P256_POINT_UNCOMPRESSED_SIZE,
        }
    }

    fn cofactor(&self) -> u64 {
        1
    }

    fn generate_scalar<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::Scalar> {
        Ok(*NonZeroScalar::random(rng))
    }

    fn public_point(&self, scalar: &Self::Scalar) -> Result<Self::Point> {
        Ok((ProjectivePoint::GENERATOR * scalar).to_affine())
    }

    fn agree(&self, scalar: &Self::Scalar, point: &Self::Point) -> Result<Self::Point> {
        Ok((ProjectivePoint::from(*point) * scalar).to_affine())
    }

    fn multiply_by_cofactor(&self, point: &Self::Point) -> Result<Self::Point> {
        Ok(*point)
    }

    fn is_identity(&self, point: &Self::Point) -> bool {
        *point == AffinePoint::IDENTITY
    }

    fn is_on_curve(&self, _point: &Self::Point) -> bool {
        // The codec never materializes off-curve points.
        true
    }

    fn encode_point(&self, point: &Self::Point, encoding: PointEncoding) -> Result<Vec<u8>> {
        let compress = match encoding {
            PointEncoding::Compressed => true,
            PointEncoding::Uncompressed => false,
            PointEncoding::Hybrid => {
                return Err(Error::Unsupported {
                    feature: "hybrid point encoding on P-256",
                })
            }
        };
        Ok(point.to_encoded_point(compress).as_bytes().to_vec())
    }

    fn decode_point(&self, bytes: &[u8]) -> Result<Self::Point> {
        let encoded = EncodedPoint::from_bytes(bytes).map_err(|_| Error::InvalidPoint {
            context: "malformed SEC1 encoding",
        })?;
        Option::from(AffinePoint::from_encoded_point(&encoded)).ok_or(Error::InvalidPoint {
            context: "coordinates not on P-256",
        })
    }

    fn x_coordinate(&self, point: &Self::Point) -> Result<Vec<u8>> {
        let encoded = point.to_encoded_point(false);
        let x = encoded.x().ok_or(Error::InvalidPoint {
            context: "identity point has no affine coordinates",
        })?;
        Ok(x.to_vec())
    }
}
