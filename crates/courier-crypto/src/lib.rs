//! courier-crypto: cryptographic primitive layer for Courier end-to-end
//! messaging.
//!
//! Provides AES-CBC, HMAC-SHA-256, SHA-512, a three-chunk HKDF, and
//! Curve25519 key agreement with XEdDSA signatures, behind two injectable
//! capabilities ([`PrimitiveProvider`] and [`CurveEngine`]) composed by the
//! [`Crypto`] facade.
//!
//! ```no_run
//! # async fn demo() -> courier_crypto::Result<()> {
//! use courier_crypto::Crypto;
//!
//! let crypto = Crypto::software();
//! let alice = crypto.create_key_pair(None).await?;
//! let bob = crypto.create_key_pair(None).await?;
//! let shared = crypto.ecdhe(&bob.public, &alice.private).await?;
//! let keys = crypto.hkdf(shared.as_bytes(), &[0u8; 32], b"WhisperText").await?;
//! assert_eq!(keys.chunks().len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod convert;
pub mod curve;
pub mod error;
pub mod facade;
pub mod kdf;
pub mod keys;
pub mod provider;

// Re-export primary types
pub use config::CryptoConfig;
pub use convert::is_equal;
pub use curve::{Curve25519Engine, CurveEngine};
pub use error::{CryptoError, Result};
pub use facade::Crypto;
pub use kdf::DerivedKeys;
pub use keys::{AesKey, Iv, KeyPair, MacKey, PrivateKey, PublicKey, SharedSecret, Signature};
pub use provider::{PrimitiveProvider, SoftwareProvider};
