//! Primitive Provider: the capability every higher-level operation calls
//! through.
//!
//! Operations are `async` because a provider may hand work to a hardware
//! module or a platform crypto service. Callers await each result before
//! using it. [`SoftwareProvider`] is the in-process RustCrypto backend and
//! can replace any platform backend without callers noticing.
//!
//! # Modules
//!
//! - [`cipher`]: AES-CBC with PKCS#7 padding.
//! - [`mac`]: HMAC-SHA-256 and SHA-512.
//! - [`random`]: OS and seeded random sources.
//! - [`software`]: the software provider tying them together.

pub mod cipher;
pub mod mac;
pub mod random;
pub mod software;

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::error::Result;
use crate::keys::{AesKey, Iv, MacKey};

pub use software::SoftwareProvider;

/// Symmetric primitives, randomness and hashing.
#[async_trait]
pub trait PrimitiveProvider: Send + Sync {
    /// Return `n` cryptographically random bytes.
    async fn random_bytes(&self, n: usize) -> Result<Vec<u8>>;

    /// AES-CBC encrypt with PKCS#7 padding.
    async fn encrypt(&self, key: &AesKey, plaintext: &[u8], iv: &Iv) -> Result<Vec<u8>>;

    /// AES-CBC decrypt and strip PKCS#7 padding.
    async fn decrypt(&self, key: &AesKey, ciphertext: &[u8], iv: &Iv)
        -> Result<Zeroizing<Vec<u8>>>;

    /// HMAC-SHA-256.
    async fn sign(&self, key: &MacKey, data: &[u8]) -> Result<[u8; 32]>;

    /// SHA-512.
    async fn hash(&self, data: &[u8]) -> Result<[u8; 64]>;
}
