//! Three-chunk HKDF-SHA-256 (RFC 5869).
//!
//! Always produces exactly three 32-byte chunks:
//!
//! ```text
//! PRK = HMAC(salt, input)
//! T1  = HMAC(PRK, info || 0x01)
//! T2  = HMAC(PRK, T1 || info || 0x02)
//! T3  = HMAC(PRK, T2 || info || 0x03)
//! ```
//!
//! The output equals the first 96 bytes of standard HKDF-SHA-256. Every HMAC
//! goes through the [`PrimitiveProvider`], so a platform backend computes the
//! whole derivation.

use log::debug;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{CryptoError, Result};
use crate::keys::MacKey;
use crate::provider::PrimitiveProvider;

/// Length of each derived chunk.
pub const CHUNK_LEN: usize = 32;

/// Number of chunks produced per derivation.
pub const CHUNK_COUNT: usize = 3;

/// The ordered output `(T1, T2, T3)` of one derivation.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKeys([[u8; CHUNK_LEN]; CHUNK_COUNT]);

impl DerivedKeys {
    pub fn t1(&self) -> &[u8; CHUNK_LEN] {
        &self.0[0]
    }

    pub fn t2(&self) -> &[u8; CHUNK_LEN] {
        &self.0[1]
    }

    pub fn t3(&self) -> &[u8; CHUNK_LEN] {
        &self.0[2]
    }

    /// All chunks in derivation order.
    pub fn chunks(&self) -> &[[u8; CHUNK_LEN]; CHUNK_COUNT] {
        &self.0
    }
}

impl PartialEq for DerivedKeys {
    fn eq(&self, other: &Self) -> bool {
        let mut equal = Choice::from(1);
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            equal &= a[..].ct_eq(&b[..]);
        }
        equal.into()
    }
}

impl Eq for DerivedKeys {}

impl std::fmt::Debug for DerivedKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKeys(<redacted>)")
    }
}

/// Derive `(T1, T2, T3)` from `input`, `salt` and `info`.
///
/// The expand steps share one scratch buffer laid out as
/// `[previous chunk (32) | info | counter (1)]`. T1 has no previous chunk and
/// signs only the suffix starting at offset 32. Steps run strictly in order;
/// a failure at any step returns `DerivationFailure` and discards everything
/// computed so far.
pub async fn hkdf<P>(provider: &P, input: &[u8], salt: &[u8], info: &[u8]) -> Result<DerivedKeys>
where
    P: PrimitiveProvider + ?Sized,
{
    let prk = provider
        .sign(&MacKey::new(salt), input)
        .await
        .map(MacKey::from)
        .map_err(step_failed("extract"))?;

    let mut scratch = Zeroizing::new(vec![0u8; CHUNK_LEN + info.len() + 1]);
    scratch[CHUNK_LEN..CHUNK_LEN + info.len()].copy_from_slice(info);
    let counter_at = scratch.len() - 1;

    let mut out = DerivedKeys([[0u8; CHUNK_LEN]; CHUNK_COUNT]);
    for (i, counter) in (1..=CHUNK_COUNT as u8).enumerate() {
        scratch[counter_at] = counter;
        let message = if i == 0 {
            &scratch[CHUNK_LEN..]
        } else {
            &scratch[..]
        };
        let mut chunk = provider
            .sign(&prk, message)
            .await
            .map_err(step_failed("expand"))?;
        scratch[..CHUNK_LEN].copy_from_slice(&chunk);
        out.0[i] = chunk;
        chunk.zeroize();
    }

    debug!("hkdf derived {CHUNK_COUNT} chunks (info_len={})", info.len());
    Ok(out)
}

fn step_failed(step: &'static str) -> impl Fn(CryptoError) -> CryptoError {
    move |e| CryptoError::DerivationFailure(format!("hmac {step} step: {e}"))
}
