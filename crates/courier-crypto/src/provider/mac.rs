//! HMAC-SHA-256 and SHA-512.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};

use crate::error::{CryptoError, Result};
use crate::keys::MacKey;

pub type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA-256 tag length.
pub const MAC_LEN: usize = 32;

/// SHA-512 digest length.
pub const DIGEST_LEN: usize = 64;

/// Compute HMAC-SHA-256 of `data` under `key`.
pub fn hmac_sha256(key: &MacKey, data: &[u8]) -> Result<[u8; MAC_LEN]> {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::BackendFailure(format!("hmac init: {e}")))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().into())
}

/// Compute the SHA-512 digest of `data`.
pub fn sha512(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&Sha512::digest(data));
    out
}
