//! Stress test: many tasks share one facade and run derivations, agreements
//! and signatures concurrently. Results must match the sequential ones.

use std::collections::HashSet;
use std::sync::Arc;

use courier_crypto::{Crypto, MacKey, PrivateKey};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn stress_500_concurrent_hkdf_identical() {
    let crypto = Arc::new(Crypto::software());
    let expected = crypto
        .hkdf(&[0x5a; 32], &[0u8; 32], b"WhisperRatchet")
        .await
        .unwrap();

    let mut handles = Vec::with_capacity(500);
    for _ in 0..500 {
        let crypto = Arc::clone(&crypto);
        handles.push(tokio::spawn(async move {
            crypto
                .hkdf(&[0x5a; 32], &[0u8; 32], b"WhisperRatchet")
                .await
                .expect("derivation should succeed")
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let keys = handle.await.unwrap();
        assert_eq!(keys, expected, "derivation {i} diverged");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn stress_concurrent_distinct_inputs_distinct_outputs() {
    let crypto = Arc::new(Crypto::software());

    let mut handles = Vec::with_capacity(256);
    for i in 0..=255u8 {
        let crypto = Arc::clone(&crypto);
        handles.push(tokio::spawn(async move {
            let keys = crypto.hkdf(&[i; 32], b"salt", b"info").await.unwrap();
            *keys.t1()
        }));
    }

    let mut seen = HashSet::new();
    for handle in handles {
        assert!(seen.insert(handle.await.unwrap()), "duplicate first chunk");
    }
    assert_eq!(seen.len(), 256);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn stress_100_concurrent_agreements() {
    let crypto = Arc::new(Crypto::software());
    let server = crypto.create_key_pair(None).await.unwrap();

    let mut handles = Vec::with_capacity(100);
    for _ in 0..100 {
        let crypto = Arc::clone(&crypto);
        let server = server.clone();
        handles.push(tokio::spawn(async move {
            let client = crypto.create_key_pair(None).await.unwrap();
            let a = crypto.ecdhe(&server.public, &client.private).await.unwrap();
            let b = crypto.ecdhe(&client.public, &server.private).await.unwrap();
            assert_eq!(a, b);
            client.public
        }));
    }

    let mut publics = HashSet::new();
    for handle in handles {
        publics.insert(handle.await.unwrap());
    }
    assert_eq!(publics.len(), 100, "key pairs must be unique");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn stress_1000_signatures_all_verify() {
    let crypto = Arc::new(Crypto::software());
    let pair = crypto
        .create_key_pair(Some(PrivateKey::from_bytes([0x11; 32])))
        .await
        .unwrap();

    let mut handles = Vec::with_capacity(1000);
    for i in 0..1000u32 {
        let crypto = Arc::clone(&crypto);
        let private = pair.private.clone();
        handles.push(tokio::spawn(async move {
            let msg = format!("message {i}").into_bytes();
            let sig = crypto.ed25519_sign(&private, &msg).await.unwrap();
            (msg, sig)
        }));
    }

    for handle in handles {
        let (msg, sig) = handle.await.unwrap();
        assert!(crypto.ed25519_verify(&pair.public, &msg, &sig).await.unwrap());
    }
}

#[tokio::test]
async fn stress_10000_sequential_macs() {
    let crypto = Crypto::software();
    let key = MacKey::new(&[0x77; 32]);
    let mut data = vec![0u8; 64];
    for i in 0..10_000u32 {
        data[..4].copy_from_slice(&i.to_le_bytes());
        let mac = crypto.sign(&key, &data).await.unwrap();
        crypto.verify_mac(&key, &data, &mac[..10], 10).await.unwrap();
    }
}
