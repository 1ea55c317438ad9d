//! Curve Engine: Curve25519 key agreement and signatures.
//!
//! One Curve25519 key pair serves both X25519 Diffie-Hellman and signing.
//! Signatures are XEdDSA, i.e. Ed25519 signatures made with the Edwards form
//! of the Montgomery key, so any Ed25519 verifier accepts them against the
//! converted public key.

pub mod engine;
pub mod xeddsa;

use async_trait::async_trait;

use crate::error::Result;
use crate::keys::{KeyPair, PrivateKey, PublicKey, SharedSecret, Signature};

pub use engine::Curve25519Engine;

/// Curve arithmetic capability consumed by the facade.
#[async_trait]
pub trait CurveEngine: Send + Sync {
    /// Derive the key pair for `private_key`. Same input, same pair.
    async fn create_key_pair(&self, private_key: PrivateKey) -> Result<KeyPair>;

    /// X25519. Fails with `InvalidPoint` for a low-order public key.
    async fn ecdh(&self, public_key: &PublicKey, private_key: &PrivateKey)
        -> Result<SharedSecret>;

    async fn sign(&self, private_key: &PrivateKey, message: &[u8]) -> Result<Signature>;

    /// `Ok(false)` for a bad signature; `Err` only for malformed key material.
    async fn verify(
        &self,
        public_key: &PublicKey,
        message: &[u8],
        signature: &Signature,
    ) -> Result<bool>;
}
