//! Byte-buffer conversions and comparison.
//!
//! "Binary strings" map every byte to exactly one `char` in `U+0000..=U+00FF`.
//! They are not text: never run them through UTF-8 decoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use subtle::ConstantTimeEq;

use crate::error::{CryptoError, Result};

/// Shortest input length [`is_equal`] accepts when both sides are short.
pub const MIN_COMPARE_LEN: usize = 5;

/// Map each byte to the `char` with the same code point.
pub fn to_binary_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Inverse of [`to_binary_string`]. Any `char` above `U+00FF` is rejected.
pub fn from_binary_string(s: &str) -> Result<Vec<u8>> {
    s.chars()
        .map(|c| {
            u8::try_from(c).map_err(|_| {
                CryptoError::InvalidInput(format!(
                    "char U+{:04X} does not fit in a binary string",
                    c as u32
                ))
            })
        })
        .collect()
}

/// Exact-length, constant-time equality.
///
/// Returns `InvalidInput` when both buffers are shorter than
/// [`MIN_COMPARE_LEN`] bytes: comparing values that short is almost always a
/// caller passing the wrong thing. Buffers of different lengths are unequal;
/// no prefix truncation ever happens.
pub fn is_equal(a: &[u8], b: &[u8]) -> Result<bool> {
    if a.len().max(b.len()) < MIN_COMPARE_LEN {
        return Err(CryptoError::InvalidInput(format!(
            "compared values too short ({} and {} bytes)",
            a.len(),
            b.len()
        )));
    }
    // ct_eq on slices returns false for a length mismatch without
    // inspecting contents.
    Ok(a.ct_eq(b).into())
}

pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

pub fn from_hex(s: &str) -> Result<Vec<u8>> {
    hex::decode(s.trim()).map_err(|e| CryptoError::InvalidInput(format!("hex: {e}")))
}

pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn from_base64(s: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(s.trim())
        .map_err(|e| CryptoError::InvalidInput(format!("base64: {e}")))
}
