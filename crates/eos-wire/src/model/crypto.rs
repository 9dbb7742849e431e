//! Curve-tagged cryptographic blobs.
//!
//! Keys and signatures carry a one-byte curve discriminator followed by fixed
//! content: 33 bytes for a compressed public key, 65 bytes for a recoverable
//! signature. Content of any other length fails to encode; these types are
//! never zero-padded.

use crate::error::DecodeError;

/// Exact content length of a compressed public key.
pub const PUBLIC_KEY_CONTENT_LEN: usize = 33;

/// Exact content length of a recoverable signature.
pub const SIGNATURE_CONTENT_LEN: usize = 65;

/// Elliptic curve discriminator preceding key/signature content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Curve {
    #[default]
    K1 = 0,
    R1 = 1,
}

impl Curve {
    /// Creates a Curve from its wire tag.
    pub fn from_u8(tag: u8) -> Result<Curve, DecodeError> {
        match tag {
            0 => Ok(Curve::K1),
            1 => Ok(Curve::R1),
            _ => Err(DecodeError::InvalidCurve { tag }),
        }
    }
}

/// A compressed public key: curve tag + 33 content bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    pub curve: Curve,
    pub content: Vec<u8>,
}

impl PublicKey {
    pub fn new(curve: Curve, content: Vec<u8>) -> PublicKey {
        PublicKey { curve, content }
    }
}

/// A recoverable signature: curve tag + 65 content bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    pub curve: Curve,
    pub content: Vec<u8>,
}

impl Signature {
    pub fn new(curve: Curve, content: Vec<u8>) -> Signature {
        Signature { curve, content }
    }
}
