//! Elliptic-curve group backends

#[cfg(feature = "p256")]
pub mod p256;
