//! XEdDSA signing and verification over Curve25519 keys.
//!
//! Signing converts the Montgomery private scalar `k` to an Edwards key pair
//! `(a, A)` whose public point has its sign bit cleared, then produces a
//! standard Ed25519 signature `R || s` with a nonce bound to 64 bytes of
//! caller-supplied randomness. Verification maps the u-coordinate back to
//! `A` and hands the rest to `ed25519-dalek`.

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::montgomery::MontgomeryPoint;
use curve25519_dalek::scalar::{clamp_integer, Scalar};
use ed25519_dalek::VerifyingKey;
use sha2::{Digest, Sha512};
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

use crate::error::{CryptoError, Result};
use crate::keys::{PrivateKey, PublicKey, Signature, CURVE_KEY_LEN, SIGNATURE_LEN};

/// Domain separator for the nonce hash: the little-endian encoding of
/// `2^256 - 2`.
const NONCE_PREFIX: [u8; 32] = {
    let mut prefix = [0xFF; 32];
    prefix[0] = 0xFE;
    prefix
};

/// Edwards key pair for `k`: scalar `a` and compressed `A` with sign bit 0.
fn edwards_key_pair(k: &[u8; CURVE_KEY_LEN]) -> (Scalar, [u8; CURVE_KEY_LEN]) {
    let mut k = Scalar::from_bytes_mod_order(clamp_integer(*k));
    let mut e = EdwardsPoint::mul_base(&k).compress().to_bytes();
    let negative = Choice::from(e[31] >> 7);
    let a = Scalar::conditional_select(&k, &-k, negative);
    e[31] &= 0x7F;
    k.zeroize();
    (a, e)
}

fn wide_scalar(hasher: Sha512) -> Scalar {
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&hasher.finalize());
    let s = Scalar::from_bytes_mod_order_wide(&wide);
    wide.zeroize();
    s
}

/// Sign `message` with the Curve25519 `private_key`.
pub fn sign(private_key: &PrivateKey, message: &[u8], random: &[u8; 64]) -> Signature {
    let (mut a, a_point) = edwards_key_pair(private_key.as_bytes());

    let mut nonce = Sha512::new();
    nonce.update(NONCE_PREFIX);
    nonce.update(a.as_bytes());
    nonce.update(message);
    nonce.update(random);
    let mut r = wide_scalar(nonce);
    let r_point = EdwardsPoint::mul_base(&r).compress();

    let mut challenge = Sha512::new();
    challenge.update(r_point.as_bytes());
    challenge.update(a_point);
    challenge.update(message);
    let h = wide_scalar(challenge);

    let s = r + h * a;
    a.zeroize();
    r.zeroize();

    let mut out = [0u8; SIGNATURE_LEN];
    out[..32].copy_from_slice(r_point.as_bytes());
    out[32..].copy_from_slice(s.as_bytes());
    Signature::from_bytes(out)
}

/// Verify an XEdDSA signature.
///
/// The top bit of `signature[63]` carries the sign bit of the signer's
/// Edwards point; it selects the lift of `u` and is cleared before the
/// Ed25519 check. Signatures from [`sign`] always have it at 0.
///
/// A u-coordinate that is not reduced mod p, has no Edwards counterpart, or
/// lifts to a low-order point is malformed key material and returns
/// `InvalidPoint`.
pub fn verify(public_key: &PublicKey, message: &[u8], signature: &Signature) -> Result<bool> {
    let u = public_key.as_bytes();
    if !is_reduced(u) {
        return Err(CryptoError::InvalidPoint(
            "u-coordinate is not reduced mod p".into(),
        ));
    }
    let mut sig = signature.to_bytes();
    let sign_bit = sig[SIGNATURE_LEN - 1] >> 7;
    sig[SIGNATURE_LEN - 1] &= 0x7F;

    let edwards = MontgomeryPoint(*u)
        .to_edwards(sign_bit)
        .ok_or_else(|| CryptoError::InvalidPoint("u-coordinate has no Edwards point".into()))?;
    let verifying_key = VerifyingKey::from_bytes(edwards.compress().as_bytes())
        .map_err(|e| CryptoError::InvalidPoint(format!("edwards key: {e}")))?;
    if verifying_key.is_weak() {
        return Err(CryptoError::InvalidPoint(
            "public key is a low-order point".into(),
        ));
    }

    let sig = ed25519_dalek::Signature::from_bytes(&sig);
    Ok(verifying_key.verify_strict(message, &sig).is_ok())
}

/// True when `u < 2^255 - 19`.
fn is_reduced(u: &[u8; CURVE_KEY_LEN]) -> bool {
    if u[31] & 0x80 != 0 {
        return false;
    }
    if u[31] != 0x7F || u[1..31].iter().any(|&b| b != 0xFF) {
        return true;
    }
    u[0] < 0xED
}
