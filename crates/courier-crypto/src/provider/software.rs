//! In-process software provider backed by RustCrypto.

use async_trait::async_trait;
use log::{trace, warn};
use zeroize::Zeroizing;

use super::random::RngSource;
use super::{cipher, mac, PrimitiveProvider};
use crate::error::Result;
use crate::keys::{AesKey, Iv, MacKey};

/// Software implementation of [`PrimitiveProvider`].
///
/// Holds no state besides its random source, so one instance can serve any
/// number of concurrent callers.
#[derive(Debug, Default)]
pub struct SoftwareProvider {
    rng: RngSource,
}

impl SoftwareProvider {
    /// Provider backed by the OS entropy source.
    pub fn new() -> Self {
        Self { rng: RngSource::Os }
    }

    /// Provider with a deterministic random source. Tests only.
    pub fn seeded(seed: u64) -> Self {
        warn!("software provider using seeded rng; output is not secret");
        Self {
            rng: RngSource::seeded(seed),
        }
    }

    pub fn is_deterministic(&self) -> bool {
        self.rng.is_deterministic()
    }
}

#[async_trait]
impl PrimitiveProvider for SoftwareProvider {
    async fn random_bytes(&self, n: usize) -> Result<Vec<u8>> {
        trace!("random_bytes n={n}");
        self.rng.bytes(n)
    }

    async fn encrypt(&self, key: &AesKey, plaintext: &[u8], iv: &Iv) -> Result<Vec<u8>> {
        trace!("aes-cbc encrypt key_len={} len={}", key.len(), plaintext.len());
        cipher::encrypt(key, plaintext, iv)
    }

    async fn decrypt(
        &self,
        key: &AesKey,
        ciphertext: &[u8],
        iv: &Iv,
    ) -> Result<Zeroizing<Vec<u8>>> {
        trace!("aes-cbc decrypt key_len={} len={}", key.len(), ciphertext.len());
        cipher::decrypt(key, ciphertext, iv)
    }

    async fn sign(&self, key: &MacKey, data: &[u8]) -> Result<[u8; 32]> {
        trace!("hmac-sha256 len={}", data.len());
        mac::hmac_sha256(key, data)
    }

    async fn hash(&self, data: &[u8]) -> Result<[u8; 64]> {
        trace!("sha512 len={}", data.len());
        Ok(mac::sha512(data))
    }
}
