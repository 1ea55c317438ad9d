//! Typed key material.
//!
//! Each use of raw bytes gets its own newtype so that a MAC key cannot be
//! passed where an AES key is expected, and a public key cannot be signed
//! with. Secret types are zeroized on drop.

use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{CryptoError, Result};

/// Type byte prepended to serialized Curve25519 public keys.
pub const DJB_KEY_TYPE: u8 = 0x05;

/// Length of a Curve25519 scalar or u-coordinate.
pub const CURVE_KEY_LEN: usize = 32;

/// Length of an AES-CBC initialization vector.
pub const IV_LEN: usize = 16;

/// Length of an XEdDSA / Ed25519 signature.
pub const SIGNATURE_LEN: usize = 64;

// ── Symmetric keys ────────────────────────────────────────────────────────────

/// AES key of 16, 24 or 32 bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AesKey(Vec<u8>);

impl AesKey {
    /// Wrap raw key bytes, rejecting lengths AES does not accept.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            16 | 24 | 32 => Ok(Self(bytes.to_vec())),
            n => Err(CryptoError::InvalidKeyMaterial(format!(
                "AES key must be 16, 24 or 32 bytes, got {n}"
            ))),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AesKey(<{} bytes redacted>)", self.0.len())
    }
}

/// HMAC-SHA-256 key. Any length is valid; also used for HKDF salts and PRKs.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MacKey(Vec<u8>);

impl MacKey {
    pub fn new(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for MacKey {
    fn from(bytes: [u8; 32]) -> Self {
        let bytes = Zeroizing::new(bytes);
        Self(bytes.to_vec())
    }
}

impl fmt::Debug for MacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacKey(<{} bytes redacted>)", self.0.len())
    }
}

/// AES-CBC initialization vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Iv([u8; IV_LEN]);

impl Iv {
    pub fn new(bytes: [u8; IV_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; IV_LEN] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidInput(format!("IV must be {IV_LEN} bytes, got {}", bytes.len()))
        })?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; IV_LEN] {
        &self.0
    }
}

// ── Curve25519 keys ───────────────────────────────────────────────────────────

/// Curve25519 private scalar.
///
/// Key pairs produced by the curve engine hold the clamped form.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; CURVE_KEY_LEN]);

impl PrivateKey {
    pub fn from_bytes(bytes: [u8; CURVE_KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; CURVE_KEY_LEN] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidKeyMaterial(format!(
                "private key must be {CURVE_KEY_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    /// Return the raw scalar bytes. Caller must zeroize after use.
    pub fn to_bytes(&self) -> [u8; CURVE_KEY_LEN] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; CURVE_KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// Curve25519 public key (Montgomery u-coordinate).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; CURVE_KEY_LEN]);

impl PublicKey {
    pub fn from_bytes(bytes: [u8; CURVE_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse either 32 raw bytes or the 33-byte serialized form carrying the
    /// `0x05` type prefix.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw = match bytes.len() {
            CURVE_KEY_LEN => bytes,
            33 if bytes[0] == DJB_KEY_TYPE => &bytes[1..],
            33 => {
                return Err(CryptoError::InvalidPoint(format!(
                    "unknown public key type byte 0x{:02x}",
                    bytes[0]
                )))
            }
            n => {
                return Err(CryptoError::InvalidPoint(format!(
                    "public key must be 32 or 33 bytes, got {n}"
                )))
            }
        };
        let mut out = [0u8; CURVE_KEY_LEN];
        out.copy_from_slice(raw);
        Ok(Self(out))
    }

    /// Serialize with the `0x05` type prefix.
    pub fn serialize(&self) -> [u8; CURVE_KEY_LEN + 1] {
        let mut out = [0u8; CURVE_KEY_LEN + 1];
        out[0] = DJB_KEY_TYPE;
        out[1..].copy_from_slice(&self.0);
        out
    }

    pub fn as_bytes(&self) -> &[u8; CURVE_KEY_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

/// A Curve25519 key pair usable for both ECDH and XEdDSA signing.
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub public: PublicKey,
    pub private: PrivateKey,
}

/// 32-byte X25519 output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret([u8; CURVE_KEY_LEN]);

impl SharedSecret {
    pub(crate) fn from_bytes(bytes: [u8; CURVE_KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; CURVE_KEY_LEN] {
        &self.0
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}

/// 64-byte signature `R || s`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_LEN]);

impl Signature {
    pub fn from_bytes(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; SIGNATURE_LEN] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidInput(format!(
                "signature must be {SIGNATURE_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", hex::encode(self.0))
    }
}
