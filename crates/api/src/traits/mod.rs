//! Trait definitions for the collaborators the ECIES composition consumes

pub mod cipher;
pub mod group;
pub mod kdf;
pub mod mac;

pub use cipher::{CipherDirection, CipherMode};
pub use group::{EcGroup, PointEncoding};
pub use kdf::KeyDerivationFunction;
pub use mac::MessageAuthCode;
