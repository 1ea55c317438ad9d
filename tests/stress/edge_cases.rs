//! Edge case tests: padding boundaries, large inputs, malformed keys, low-order
//! points, short comparisons.

use courier_crypto::convert::{from_binary_string, from_hex, to_binary_string};
use courier_crypto::{
    is_equal, AesKey, Crypto, CryptoError, Iv, MacKey, PrivateKey, PublicKey, Signature,
};

fn key256() -> AesKey {
    AesKey::from_slice(&[0x3c; 32]).unwrap()
}

// === AES-CBC ===

#[tokio::test]
async fn edge_empty_plaintext_is_one_pad_block() {
    let crypto = Crypto::software();
    let iv = Iv::new([0; 16]);
    let ct = crypto.encrypt(&key256(), b"", &iv).await.unwrap();
    assert_eq!(ct.len(), 16);
    assert!(crypto.decrypt(&key256(), &ct, &iv).await.unwrap().is_empty());
}

#[tokio::test]
async fn edge_padding_boundaries() {
    let crypto = Crypto::software();
    let iv = Iv::new([9; 16]);
    for len in [1usize, 15, 16, 17, 31, 32, 33] {
        let pt = vec![0xa5; len];
        let ct = crypto.encrypt(&key256(), &pt, &iv).await.unwrap();
        assert_eq!(ct.len(), (len / 16 + 1) * 16, "len {len}");
        assert_eq!(&*crypto.decrypt(&key256(), &ct, &iv).await.unwrap(), &pt[..]);
    }
}

#[tokio::test]
async fn edge_one_megabyte_roundtrip() {
    let crypto = Crypto::software();
    let iv = crypto.random_iv().await.unwrap();
    let pt: Vec<u8> = (0..1 << 20).map(|i| (i % 251) as u8).collect();
    let ct = crypto.encrypt(&key256(), &pt, &iv).await.unwrap();
    assert_eq!(&*crypto.decrypt(&key256(), &ct, &iv).await.unwrap(), &pt[..]);
}

#[tokio::test]
async fn edge_malformed_ciphertexts_rejected() {
    let crypto = Crypto::software();
    let iv = Iv::new([0; 16]);
    for len in [0usize, 1, 15, 17] {
        let err = crypto
            .decrypt(&key256(), &vec![0u8; len], &iv)
            .await
            .unwrap_err();
        assert!(matches!(err, CryptoError::CipherFailure(_)), "len {len}");
    }
}

#[test]
fn edge_bad_key_and_iv_lengths() {
    for len in [0usize, 8, 15, 20, 33, 64] {
        assert!(matches!(
            AesKey::from_slice(&vec![0u8; len]),
            Err(CryptoError::InvalidKeyMaterial(_))
        ));
    }
    assert!(matches!(
        Iv::from_slice(&[0u8; 12]),
        Err(CryptoError::InvalidInput(_))
    ));
}

// === HMAC / HKDF ===

#[tokio::test]
async fn edge_mac_key_longer_than_block() {
    let crypto = Crypto::software();
    let long = MacKey::new(&[0x61; 200]);
    let mac = crypto.sign(&long, b"data").await.unwrap();
    crypto.verify_mac(&long, b"data", &mac, 32).await.unwrap();
}

#[tokio::test]
async fn edge_hkdf_large_info() {
    let crypto = Crypto::software();
    let info = vec![0x42; 64 * 1024];
    let a = crypto.hkdf(b"ikm", b"salt", &info).await.unwrap();
    let b = crypto.hkdf(b"ikm", b"salt", &info).await.unwrap();
    assert_eq!(a, b);
    assert_ne!(a.t1(), a.t2());
    assert_ne!(a.t2(), a.t3());
}

#[tokio::test]
async fn edge_hkdf_empty_input() {
    let crypto = Crypto::software();
    let keys = crypto.hkdf(b"", b"", b"").await.unwrap();
    assert_eq!(keys.chunks().len(), 3);
}

// === Curve25519 ===

#[tokio::test]
async fn edge_low_order_points_rejected() {
    let crypto = Crypto::software();
    let pair = crypto.create_key_pair(None).await.unwrap();
    let low_order = [
        "0000000000000000000000000000000000000000000000000000000000000000",
        "0100000000000000000000000000000000000000000000000000000000000000",
        "e0eb7a7c3b41b8ae1656e3faf19fc46ada098deb9c32b1fd866205165f49b800",
        "5f9c95bca3508c24b1d0b1559c83ef5b04445cc4581c8e86d8224eddd09f1157",
        "ecffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f",
        "edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f",
        "eeffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f",
    ];
    for hex in low_order {
        let point = PublicKey::from_slice(&from_hex(hex).unwrap()).unwrap();
        let err = crypto.ecdhe(&point, &pair.private).await.unwrap_err();
        assert!(matches!(err, CryptoError::InvalidPoint(_)), "{hex}");
    }
}

#[tokio::test]
async fn edge_low_order_key_rejected_by_verify() {
    let crypto = Crypto::software();
    let sig = Signature::from_bytes([0; 64]);
    for hex in [
        "0000000000000000000000000000000000000000000000000000000000000000",
        "0100000000000000000000000000000000000000000000000000000000000000",
    ] {
        let point = PublicKey::from_slice(&from_hex(hex).unwrap()).unwrap();
        let err = crypto.ed25519_verify(&point, b"m", &sig).await.unwrap_err();
        assert!(matches!(err, CryptoError::InvalidPoint(_)), "{hex}");
    }
}

#[test]
fn edge_public_key_encodings() {
    assert!(PublicKey::from_slice(&[0u8; 32]).is_ok());

    let mut wire = [7u8; 33];
    wire[0] = 0x05;
    assert!(PublicKey::from_slice(&wire).is_ok());

    wire[0] = 0x06;
    assert!(matches!(
        PublicKey::from_slice(&wire),
        Err(CryptoError::InvalidPoint(_))
    ));
    for len in [0usize, 31, 34] {
        assert!(matches!(
            PublicKey::from_slice(&vec![5u8; len]),
            Err(CryptoError::InvalidPoint(_))
        ));
    }
    assert!(matches!(
        PrivateKey::from_slice(&[0u8; 31]),
        Err(CryptoError::InvalidKeyMaterial(_))
    ));
    assert!(matches!(
        Signature::from_slice(&[0u8; 63]),
        Err(CryptoError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn edge_sign_empty_and_large_messages() {
    let crypto = Crypto::software();
    let pair = crypto.create_key_pair(None).await.unwrap();
    let large = vec![0xee; 1 << 20];
    for msg in [&b""[..], &large[..]] {
        let sig = crypto.ed25519_sign(&pair.private, msg).await.unwrap();
        assert!(crypto.ed25519_verify(&pair.public, msg, &sig).await.unwrap());
    }
}

#[tokio::test]
async fn edge_zero_signature_is_invalid_not_error() {
    let crypto = Crypto::software();
    let pair = crypto.create_key_pair(None).await.unwrap();
    let valid = crypto
        .ed25519_verify(&pair.public, b"m", &Signature::from_bytes([0; 64]))
        .await
        .unwrap();
    assert!(!valid);
}

#[tokio::test]
async fn edge_unclamped_private_key_behaves_like_clamped() {
    let crypto = Crypto::software();
    let raw = crypto
        .create_key_pair(Some(PrivateKey::from_bytes([0xff; 32])))
        .await
        .unwrap();
    let again = crypto
        .create_key_pair(Some(PrivateKey::from_bytes(raw.private.to_bytes())))
        .await
        .unwrap();
    assert_eq!(raw.public, again.public);
    assert_eq!(raw.private.to_bytes(), again.private.to_bytes());
}

// === Conversions ===

#[test]
fn edge_is_equal_threshold() {
    assert!(is_equal(b"abcd", b"abcd").is_err());
    assert!(is_equal(b"abcde", b"abcde").unwrap());
    assert!(!is_equal(b"abcd", b"abcde").unwrap());
}

#[test]
fn edge_binary_string_high_bytes() {
    let bytes = [0x00, 0x7f, 0x80, 0xff];
    let s = to_binary_string(&bytes);
    assert_eq!(s.len(), 6, "chars above U+007F take two UTF-8 bytes");
    assert_eq!(from_binary_string(&s).unwrap(), bytes);
}
