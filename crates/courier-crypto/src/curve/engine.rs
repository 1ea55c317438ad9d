//! Curve25519 engine: X25519 key pairs and ECDH via `x25519-dalek`, XEdDSA
//! signatures via [`super::xeddsa`].

use async_trait::async_trait;
use curve25519_dalek::scalar::clamp_integer;
use log::debug;
use rand::rngs::OsRng;
use rand::RngCore;
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::Zeroizing;

use super::{xeddsa, CurveEngine};
use crate::error::{CryptoError, Result};
use crate::keys::{KeyPair, PrivateKey, PublicKey, SharedSecret, Signature};

/// Stateless Curve25519 engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct Curve25519Engine;

impl Curve25519Engine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CurveEngine for Curve25519Engine {
    async fn create_key_pair(&self, private_key: PrivateKey) -> Result<KeyPair> {
        let clamped = Zeroizing::new(clamp_integer(private_key.to_bytes()));
        let secret = StaticSecret::from(*clamped);
        let public = X25519PublicKey::from(&secret);
        Ok(KeyPair {
            public: PublicKey::from_bytes(public.to_bytes()),
            private: PrivateKey::from_bytes(*clamped),
        })
    }

    async fn ecdh(
        &self,
        public_key: &PublicKey,
        private_key: &PrivateKey,
    ) -> Result<SharedSecret> {
        let secret = StaticSecret::from(private_key.to_bytes());
        let shared = secret.diffie_hellman(&X25519PublicKey::from(*public_key.as_bytes()));
        if !shared.was_contributory() {
            debug!("rejected low-order public key {}", public_key.to_hex());
            return Err(CryptoError::InvalidPoint(
                "public key is a low-order point".into(),
            ));
        }
        Ok(SharedSecret::from_bytes(shared.to_bytes()))
    }

    async fn sign(&self, private_key: &PrivateKey, message: &[u8]) -> Result<Signature> {
        let mut random = Zeroizing::new([0u8; 64]);
        OsRng
            .try_fill_bytes(&mut *random)
            .map_err(|e| CryptoError::BackendFailure(format!("entropy source: {e}")))?;
        Ok(xeddsa::sign(private_key, message, &random))
    }

    async fn verify(
        &self,
        public_key: &PublicKey,
        message: &[u8],
        signature: &Signature,
    ) -> Result<bool> {
        xeddsa::verify(public_key, message, signature)
    }
}
