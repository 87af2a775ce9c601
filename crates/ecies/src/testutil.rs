//! Test-only curve and cipher backends
//!
//! `TestCurve` is a tiny curve (y^2 = x^3 + 2x + 1 over the Mersenne prime
//! 2^61 - 1) with a declarable cofactor, so cofactor handling can be
//! exercised without a real large-cofactor curve. Unlike the P-256 backend
//! its uncompressed decoder is purely structural, which lets tests feed
//! off-curve coordinates through the decryptor.
//!
//! The declared field-element width is 32 bytes, so encodings have the same
//! shape as P-256's.

use ecrypt_api::error::{Error, Result};
use ecrypt_api::registry::AlgorithmRegistry;
use ecrypt_api::traits::{CipherMode, EcGroup, PointEncoding};
use rand::{CryptoRng, RngCore};
use std::sync::Arc;

/// Field modulus 2^61 - 1
const P: u64 = (1 << 61) - 1;
/// Curve coefficient a
const A: u64 = 2;
/// Curve coefficient b
const B: u64 = 1;

/// Declared width of an encoded field element
const FIELD_LEN: usize = 32;

fn add_mod(a: u64, b: u64) -> u64 {
    ((a as u128 + b as u128) % P as u128) as u64
}

fn sub_mod(a: u64, b: u64) -> u64 {
    ((a as u128 + P as u128 - b as u128) % P as u128) as u64
}

fn mul_mod(a: u64, b: u64) -> u64 {
    ((a as u128 * b as u128) % P as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64) -> u64 {
    let mut acc = 1u64;
    base %= P;
    while exp != 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base);
        }
        base = mul_mod(base, base);
        exp >>= 1;
    }
    acc
}

fn inv_mod(a: u64) -> u64 {
    pow_mod(a, P - 2)
}

/// y^2 for a given x under the curve equation
fn curve_rhs(x: u64) -> u64 {
    add_mod(mul_mod(mul_mod(x, x), x), add_mod(mul_mod(A, x), B))
}

/// Square root modulo P, which is 3 mod 4
fn sqrt_mod(a: u64) -> Option<u64> {
    let candidate = pow_mod(a, (P + 1) / 4);
    if mul_mod(candidate, candidate) == a % P {
        Some(candidate)
    } else {
        None
    }
}

/// A point on (or off) the test curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestPoint {
    pub x: u64,
    pub y: u64,
    pub infinity: bool,
}

impl TestPoint {
    pub const IDENTITY: TestPoint = TestPoint {
        x: 0,
        y: 0,
        infinity: true,
    };

    pub fn new(x: u64, y: u64) -> Self {
        TestPoint {
            x,
            y,
            infinity: false,
        }
    }
}

fn point_add(lhs: TestPoint, rhs: TestPoint) -> TestPoint {
    if lhs.infinity {
        return rhs;
    }
    if rhs.infinity {
        return lhs;
    }
    if lhs.x == rhs.x {
        if add_mod(lhs.y, rhs.y) == 0 {
            return TestPoint::IDENTITY;
        }
        // Doubling
        let numerator = add_mod(mul_mod(3, mul_mod(lhs.x, lhs.x)), A);
        let lambda = mul_mod(numerator, inv_mod(mul_mod(2, lhs.y)));
        let x = sub_mod(mul_mod(lambda, lambda), mul_mod(2, lhs.x));
        let y = sub_mod(mul_mod(lambda, sub_mod(lhs.x, x)), lhs.y);
        return TestPoint::new(x, y);
    }
    let lambda = mul_mod(sub_mod(rhs.y, lhs.y), inv_mod(sub_mod(rhs.x, lhs.x)));
    let x = sub_mod(sub_mod(mul_mod(lambda, lambda), lhs.x), rhs.x);
    let y = sub_mod(mul_mod(lambda, sub_mod(lhs.x, x)), lhs.y);
    TestPoint::new(x, y)
}

fn scalar_mult(point: TestPoint, mut k: u64) -> TestPoint {
    let mut acc = TestPoint::IDENTITY;
    let mut addend = point;
    while k != 0 {
        if k & 1 == 1 {
            acc = point_add(acc, addend);
        }
        addend = point_add(addend, addend);
        k >>= 1;
    }
    acc
}

fn encode_coordinate(value: u64, out: &mut Vec<u8>) {
    out.extend_from_slice(&[0u8; FIELD_LEN - 8]);
    out.extend_from_slice(&value.to_be_bytes());
}

fn decode_coordinate(bytes: &[u8]) -> Result<u64> {
    if bytes[..FIELD_LEN - 8].iter().any(|&b| b != 0) {
        return Err(Error::InvalidPoint {
            context: "test coordinate out of range",
        });
    }
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[FIELD_LEN - 8..]);
    Ok(u64::from_be_bytes(word))
}

/// The test curve with a declarable cofactor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCurve {
    cofactor: u64,
}

impl TestCurve {
    /// Generator (1, 2)
    pub const GENERATOR: TestPoint = TestPoint {
        x: 1,
        y: 2,
        infinity: false,
    };

    pub fn new() -> Self {
        Self::with_cofactor(1)
    }

    pub fn with_cofactor(cofactor: u64) -> Self {
        TestCurve { cofactor }
    }
}

impl Default for TestCurve {
    fn default() -> Self {
        Self::new()
    }
}

impl EcGroup for TestCurve {
    type Point = TestPoint;
    type Scalar = u64;

    fn field_element_len(&self) -> usize {
        FIELD_LEN
    }

    fn encoded_point_len(&self, encoding: PointEncoding) -> usize {
        match encoding {
            PointEncoding::Compressed => 1 + FIELD_LEN,
            PointEncoding::Uncompressed | PointEncoding::Hybrid => 1 + 2 * FIELD_LEN,
        }
    }

    fn cofactor(&self) -> u64 {
        self.cofactor
    }

    fn generate_scalar<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<Self::Scalar> {
        loop {
            let scalar = rng.next_u64() >> 3;
            if scalar != 0 {
                return Ok(scalar);
            }
        }
    }

    fn public_point(&self, scalar: &Self::Scalar) -> Result<Self::Point> {
        Ok(scalar_mult(Self::GENERATOR, *scalar))
    }

    fn agree(&self, scalar: &Self::Scalar, point: &Self::Point) -> Result<Self::Point> {
        Ok(scalar_mult(*point, *scalar))
    }

    fn multiply_by_cofactor(&self, point: &Self::Point) -> Result<Self::Point> {
        Ok(scalar_mult(*point, self.cofactor))
    }

    fn is_identity(&self, point: &Self::Point) -> bool {
        point.infinity
    }

    fn is_on_curve(&self, point: &Self::Point) -> bool {
        point.infinity || mul_mod(point.y, point.y) == curve_rhs(point.x)
    }

    fn encode_point(&self, point: &Self::Point, encoding: PointEncoding) -> Result<Vec<u8>> {
        if point.infinity {
            return Ok(vec![0x00]);
        }
        let mut out = Vec::with_capacity(self.encoded_point_len(encoding));
        let parity = (point.y & 1) as u8;
        match encoding {
            PointEncoding::Compressed => {
                out.push(0x02 | parity);
                encode_coordinate(point.x, &mut out);
            }
            PointEncoding::Uncompressed => {
                out.push(0x04);
                encode_coordinate(point.x, &mut out);
                encode_coordinate(point.y, &mut out);
            }
            PointEncoding::Hybrid => {
                out.push(0x06 | parity);
                encode_coordinate(point.x, &mut out);
                encode_coordinate(point.y, &mut out);
            }
        }
        Ok(out)
    }

    fn decode_point(&self, bytes: &[u8]) -> Result<Self::Point> {
        match bytes {
            [0x00] => Ok(TestPoint::IDENTITY),
            [tag @ (0x02 | 0x03), rest @ ..] if rest.len() == FIELD_LEN => {
                let x = decode_coordinate(rest)?;
                let y = sqrt_mod(curve_rhs(x)).ok_or(Error::InvalidPoint {
                    context: "no square root for compressed x",
                })?;
                let y = if y & 1 == (tag & 1) as u64 {
                    y
                } else {
                    sub_mod(0, y)
                };
                Ok(TestPoint::new(x, y))
            }
            [0x04 | 0x06 | 0x07, rest @ ..] if rest.len() == 2 * FIELD_LEN => {
                // Structural parse only; coordinates may be off-curve.
                let x = decode_coordinate(&rest[..FIELD_LEN])?;
                let y = decode_coordinate(&rest[FIELD_LEN..])?;
                Ok(TestPoint::new(x, y))
            }
            _ => Err(Error::InvalidPoint {
                context: "malformed test encoding",
            }),
        }
    }

    fn x_coordinate(&self, point: &Self::Point) -> Result<Vec<u8>> {
        if point.infinity {
            return Err(Error::InvalidPoint {
                context: "identity point has no affine coordinates",
            });
        }
        let mut out = Vec::with_capacity(FIELD_LEN);
        encode_coordinate(point.x, &mut out);
        Ok(out)
    }
}

/// Registered name of the keystream test cipher
pub const XOR_STREAM: &str = "XOR-STREAM";

/// Keyed XOR keystream cipher, identical in both directions
///
/// Needs no IV, which makes it the counterpart of the block modes for
/// exercising the optional-IV paths.
#[derive(Debug, Default)]
pub struct XorCipher;

impl CipherMode for XorCipher {
    fn requires_iv(&self) -> bool {
        false
    }

    fn process(&mut self, key: &[u8], _iv: Option<&[u8]>, data: &[u8]) -> Result<Vec<u8>> {
        if key.is_empty() {
            return Err(Error::InvalidLength {
                context: "XOR keystream key",
                expected: 1,
                actual: 0,
            });
        }
        Ok(data
            .iter()
            .zip(key.iter().cycle())
            .map(|(byte, key_byte)| byte ^ key_byte)
            .collect())
    }
}

/// The standard registry extended with the test cipher
pub fn test_registry() -> Arc<AlgorithmRegistry> {
    let mut registry = ecrypt_algorithms::standard_registry();
    registry.register_cipher(XOR_STREAM, |_direction| Box::new(XorCipher));
    Arc::new(registry)
}

mod tests {
    use super::*;

    #[test]
    fn generator_is_on_curve() {
        let curve = TestCurve::new();
        assert!(curve.is_on_curve(&TestCurve::GENERATOR));
        assert!(!curve.is_on_curve(&TestPoint::new(1, 3)));
    }

    #[test]
    fn group_law_is_commutative_and_associative_enough() {
        let curve = TestCurve::new();
        let p = curve.public_point(&5).unwrap();
        let q = curve.public_point(&9).unwrap();
        assert!(curve.is_on_curve(&p));
        assert!(curve.is_on_curve(&q));
        assert_eq!(point_add(p, q), point_add(q, p));
        // 5G + 9G = 14G
        assert_eq!(point_add(p, q), curve.public_point(&14).unwrap());
    }

    #[test]
    fn agreement_commutes() {
        let curve = TestCurve::new();
        let pub_a = curve.public_point(&1234567).unwrap();
        let pub_b = curve.public_point(&7654321).unwrap();
        assert_eq!(
            curve.agree(&1234567, &pub_b).unwrap(),
            curve.agree(&7654321, &pub_a).unwrap()
        );
    }

    #[test]
    fn encodings_round_trip() {
        let curve = TestCurve::new();
        let point = curve.public_point(&99991).unwrap();
        for encoding in [
            PointEncoding::Compressed,
            PointEncoding::Uncompressed,
            PointEncoding::Hybrid,
        ] {
            let bytes = curve.encode_point(&point, encoding).unwrap();
            assert_eq!(bytes.len(), curve.encoded_point_len(encoding));
            assert_eq!(curve.decode_point(&bytes).unwrap(), point);
        }
    }

    #[test]
    fn uncompressed_decode_is_structural() {
        let curve = TestCurve::new();
        let off_curve = TestPoint::new(1, 3);
        let bytes = curve
            .encode_point(&off_curve, PointEncoding::Uncompressed)
            .unwrap();
        let decoded = curve.decode_point(&bytes).unwrap();
        assert_eq!(decoded, off_curve);
        assert!(!curve.is_on_curve(&decoded));
    }

    #[test]
    fn x_coordinate_is_left_padded() {
        let curve = TestCurve::new();
        let x = curve.x_coordinate(&TestCurve::GENERATOR).unwrap();
        assert_eq!(x.len(), 32);
        assert_eq!(&x[..31], &[0u8; 31]);
        assert_eq!(x[31], 1);
    }

    #[test]
    fn xor_cipher_is_an_involution() {
        let mut cipher = XorCipher;
        let masked = cipher.process(b"key-material", None, b"plaintext").unwrap();
        assert_ne!(masked, b"plaintext");
        let unmasked = cipher.process(b"key-material", None, &masked).unwrap();
        assert_eq!(unmasked, b"plaintext");
        assert!(cipher.process(b"", None, b"data").is_err());
    }
}
