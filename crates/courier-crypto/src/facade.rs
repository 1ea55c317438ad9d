//! The `Crypto` facade: one explicitly constructed object holding a
//! [`PrimitiveProvider`] and a [`CurveEngine`].
//!
//! There is no global instance. Build one at startup and pass it (or an
//! `Arc` of it) down the call chain. All methods take `&self` and keep no
//! state between calls, so concurrent use needs no locking.

use log::{debug, warn};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::config::CryptoConfig;
use crate::curve::{Curve25519Engine, CurveEngine};
use crate::error::{CryptoError, Result};
use crate::kdf::{self, DerivedKeys};
use crate::keys::{
    AesKey, Iv, KeyPair, MacKey, PrivateKey, PublicKey, SharedSecret, Signature, CURVE_KEY_LEN,
    IV_LEN,
};
use crate::provider::mac::MAC_LEN;
use crate::provider::{PrimitiveProvider, SoftwareProvider};

/// Primitive provider plus curve engine behind one async API.
///
/// `Crypto::software()` gives the in-process backends; `Crypto::new` takes
/// any [`PrimitiveProvider`] and [`CurveEngine`] pair.
///
/// ```
/// # async fn demo() -> courier_crypto::Result<()> {
/// use courier_crypto::Crypto;
///
/// let crypto = Crypto::software();
/// let digest = crypto.hash(b"abc").await?;
/// assert_eq!(digest[0], 0xdd);
/// # Ok(())
/// # }
/// ```
pub struct Crypto<P = SoftwareProvider, C = Curve25519Engine> {
    provider: P,
    curve: C,
}

impl Crypto<SoftwareProvider, Curve25519Engine> {
    /// Software provider on OS entropy plus the Curve25519 engine.
    pub fn software() -> Self {
        Self::new(SoftwareProvider::new(), Curve25519Engine::new())
    }

    pub fn from_config(config: &CryptoConfig) -> Self {
        let provider = match config.rng_seed {
            Some(seed) => SoftwareProvider::seeded(seed),
            None => SoftwareProvider::new(),
        };
        Self::new(provider, Curve25519Engine::new())
    }
}

impl Default for Crypto<SoftwareProvider, Curve25519Engine> {
    fn default() -> Self {
        Self::software()
    }
}

impl<P, C> Crypto<P, C>
where
    P: PrimitiveProvider,
    C: CurveEngine,
{
    pub fn new(provider: P, curve: C) -> Self {
        Self { provider, curve }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }

    // ── Primitives ────────────────────────────────────────────────────────

    pub async fn random_bytes(&self, n: usize) -> Result<Vec<u8>> {
        self.provider.random_bytes(n).await
    }

    /// Fresh random IV for AES-CBC.
    pub async fn random_iv(&self) -> Result<Iv> {
        let bytes = self.provider.random_bytes(IV_LEN).await?;
        Iv::from_slice(&bytes)
    }

    pub async fn encrypt(&self, key: &AesKey, plaintext: &[u8], iv: &Iv) -> Result<Vec<u8>> {
        self.provider.encrypt(key, plaintext, iv).await
    }

    pub async fn decrypt(
        &self,
        key: &AesKey,
        ciphertext: &[u8],
        iv: &Iv,
    ) -> Result<Zeroizing<Vec<u8>>> {
        self.provider.decrypt(key, ciphertext, iv).await.map_err(|e| {
            if matches!(e, CryptoError::CipherFailure(_)) {
                warn!("aes-cbc decrypt rejected {} byte ciphertext", ciphertext.len());
            }
            e
        })
    }

    /// HMAC-SHA-256.
    pub async fn sign(&self, key: &MacKey, data: &[u8]) -> Result<[u8; MAC_LEN]> {
        self.provider.sign(key, data).await
    }

    /// Recompute the HMAC of `data` and compare its first `length` bytes
    /// with `expected` in constant time.
    ///
    /// `expected` must be exactly `length` bytes long. A mismatch is a
    /// `CipherFailure`.
    pub async fn verify_mac(
        &self,
        key: &MacKey,
        data: &[u8],
        expected: &[u8],
        length: usize,
    ) -> Result<()> {
        if length == 0 || length > MAC_LEN {
            return Err(CryptoError::InvalidInput(format!(
                "MAC length must be 1..={MAC_LEN}, got {length}"
            )));
        }
        if expected.len() != length {
            return Err(CryptoError::InvalidInput(format!(
                "expected MAC is {} bytes, declared length {length}",
                expected.len()
            )));
        }
        let computed = Zeroizing::new(self.provider.sign(key, data).await?);
        if bool::from(computed[..length].ct_eq(expected)) {
            Ok(())
        } else {
            warn!("MAC mismatch over {} bytes", data.len());
            Err(CryptoError::CipherFailure("bad MAC".into()))
        }
    }

    /// SHA-512.
    pub async fn hash(&self, data: &[u8]) -> Result<[u8; 64]> {
        self.provider.hash(data).await
    }

    // ── Key derivation ────────────────────────────────────────────────────

    /// Three-chunk HKDF; see [`kdf::hkdf`].
    pub async fn hkdf(&self, input: &[u8], salt: &[u8], info: &[u8]) -> Result<DerivedKeys> {
        kdf::hkdf(&self.provider, input, salt, info).await
    }

    // ── Curve25519 ────────────────────────────────────────────────────────

    /// Key pair for `private_key`, or for 32 fresh random bytes when `None`.
    pub async fn create_key_pair(&self, private_key: Option<PrivateKey>) -> Result<KeyPair> {
        let private_key = match private_key {
            Some(k) => k,
            None => {
                let seed = Zeroizing::new(self.provider.random_bytes(CURVE_KEY_LEN).await?);
                PrivateKey::from_slice(&seed)?
            }
        };
        let pair = self.curve.create_key_pair(private_key).await?;
        debug!("created key pair {}", pair.public.to_hex());
        Ok(pair)
    }

    pub async fn ecdhe(
        &self,
        public_key: &PublicKey,
        private_key: &PrivateKey,
    ) -> Result<SharedSecret> {
        self.curve.ecdh(public_key, private_key).await
    }

    pub async fn ed25519_sign(
        &self,
        private_key: &PrivateKey,
        message: &[u8],
    ) -> Result<Signature> {
        self.curve.sign(private_key, message).await
    }

    pub async fn ed25519_verify(
        &self,
        public_key: &PublicKey,
        message: &[u8],
        signature: &Signature,
    ) -> Result<bool> {
        let valid = self.curve.verify(public_key, message, signature).await?;
        if !valid {
            debug!("signature rejected for {}", public_key.to_hex());
        }
        Ok(valid)
    }
}
