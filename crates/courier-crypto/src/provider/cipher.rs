//! AES-CBC with PKCS#7 padding.
//!
//! The key length picks AES-128, AES-192 or AES-256. Ciphertext is the padded
//! block sequence only; the IV travels separately.

use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};
use zeroize::Zeroizing;

use crate::error::{CryptoError, Result};
use crate::keys::{AesKey, Iv};

/// AES block size in bytes.
pub const BLOCK_LEN: usize = 16;

/// Encrypt and pad `plaintext` under `key`.
pub fn encrypt(key: &AesKey, plaintext: &[u8], iv: &Iv) -> Result<Vec<u8>> {
    match key.len() {
        16 => cbc_encrypt::<Aes128>(key, plaintext, iv),
        24 => cbc_encrypt::<Aes192>(key, plaintext, iv),
        32 => cbc_encrypt::<Aes256>(key, plaintext, iv),
        n => Err(unsupported_key(n)),
    }
}

/// Decrypt and unpad `ciphertext` under `key`.
///
/// A ciphertext that is empty, not block-aligned, or carries bad padding is a
/// `CipherFailure`.
pub fn decrypt(key: &AesKey, ciphertext: &[u8], iv: &Iv) -> Result<Zeroizing<Vec<u8>>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(CryptoError::CipherFailure(format!(
            "ciphertext length {} is not a positive multiple of {BLOCK_LEN}",
            ciphertext.len()
        )));
    }
    match key.len() {
        16 => cbc_decrypt::<Aes128>(key, ciphertext, iv),
        24 => cbc_decrypt::<Aes192>(key, ciphertext, iv),
        32 => cbc_decrypt::<Aes256>(key, ciphertext, iv),
        n => Err(unsupported_key(n)),
    }
}

fn cbc_encrypt<C>(key: &AesKey, plaintext: &[u8], iv: &Iv) -> Result<Vec<u8>>
where
    C: BlockEncryptMut + BlockCipher + KeyInit,
{
    let cipher = cbc::Encryptor::<C>::new_from_slices(key.as_bytes(), iv.as_bytes())
        .map_err(|e| CryptoError::InvalidKeyMaterial(format!("cipher init: {e}")))?;
    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

fn cbc_decrypt<C>(key: &AesKey, ciphertext: &[u8], iv: &Iv) -> Result<Zeroizing<Vec<u8>>>
where
    C: BlockDecryptMut + BlockCipher + KeyInit,
{
    let cipher = cbc::Decryptor::<C>::new_from_slices(key.as_bytes(), iv.as_bytes())
        .map_err(|e| CryptoError::InvalidKeyMaterial(format!("cipher init: {e}")))?;
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map(Zeroizing::new)
        .map_err(|_| CryptoError::CipherFailure("bad padding".into()))
}

fn unsupported_key(len: usize) -> CryptoError {
    CryptoError::InvalidKeyMaterial(format!("unsupported AES key length {len}"))
}
