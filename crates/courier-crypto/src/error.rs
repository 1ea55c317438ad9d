//! Error types for courier-crypto.
//!
//! Every failure propagates to the immediate caller. Nothing here is retried:
//! a cryptographic failure that succeeds on retry is indistinguishable from an
//! active attack. Key material is never included in error messages.

/// Error taxonomy for the primitive layer.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// Malformed lengths or encodings supplied by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The backend rejected the key (wrong AES key size, wrong scalar size).
    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// Random source or crypto backend failure. Fatal.
    #[error("Crypto backend failure: {0}")]
    BackendFailure(String),

    /// Decrypt padding/length mismatch or MAC mismatch. Signals tampering or a
    /// wrong key.
    #[error("Cipher failure: {0}")]
    CipherFailure(String),

    /// An HMAC step failed while deriving keys. No partial output exists.
    #[error("Key derivation failed: {0}")]
    DerivationFailure(String),

    #[error("Invalid curve point: {0}")]
    InvalidPoint(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, CryptoError>;
