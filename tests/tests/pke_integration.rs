//! Integration tests for SM2 public key encryption

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use smcrypt::prelude::*;
use smcrypt_tests::vectors::sm2 as kat;
use smcrypt_tests::{unhex, FixedRng};

fn known_keys() -> (Sm2PkePublicKey, Sm2PkeSecretKey) {
    let sk = <Sm2PkeSecretKey as SerializeSecret>::from_bytes(&unhex(kat::PRIVATE_KEY)).unwrap();
    let pk = sk.public_key().unwrap();
    (pk, sk)
}

#[test]
fn test_known_ciphertext_through_facade() {
    let (pk, sk) = known_keys();
    assert_eq!(hex::encode(pk.as_ref()), kat::PUBLIC_KEY);

    let mut rng = FixedRng::new(unhex(kat::ENCRYPT_EPHEMERAL));
    let ct = Sm2Pke::encrypt(&pk, kat::PLAINTEXT, &mut rng).unwrap();
    assert_eq!(hex::encode(&ct), kat::CIPHERTEXT);
    assert_eq!(rng.consumed(), 32);

    assert_eq!(Sm2Pke::decrypt(&sk, &ct).unwrap(), kat::PLAINTEXT);
}

#[test]
fn test_recorded_ciphertext_decrypts() {
    // A ciphertext produced elsewhere, decrypted with a key loaded from bytes
    let (_, sk) = known_keys();
    let ct = unhex(kat::CIPHERTEXT);
    assert_eq!(Sm2Pke::decrypt(&sk, &ct).unwrap(), kat::PLAINTEXT);
}

#[test]
fn test_key_from_compressed_encoding() {
    let (_, sk) = known_keys();
    let pk = <Sm2PkePublicKey as Serialize>::from_bytes(&unhex(kat::PUBLIC_KEY_COMPRESSED)).unwrap();
    assert_eq!(hex::encode(pk.as_ref()), kat::PUBLIC_KEY);

    let mut rng = ChaCha20Rng::seed_from_u64(100);
    let ct = Sm2Pke::encrypt(&pk, b"via compressed key", &mut rng).unwrap();
    assert_eq!(Sm2Pke::decrypt(&sk, &ct).unwrap(), b"via compressed key");
}

#[test]
fn test_round_trip_lengths() {
    let mut rng = ChaCha20Rng::seed_from_u64(101);
    let (pk, sk) = Sm2Pke::keypair(&mut rng).unwrap();

    for len in [0usize, 1, 31, 32, 33, 1000, 8192] {
        let msg: Vec<u8> = (0..len).map(|i| (i % 256) as u8).collect();
        let ct = Sm2Pke::encrypt(&pk, &msg, &mut rng).unwrap();
        assert_eq!(ct.len(), 97 + len);
        assert_eq!(Sm2Pke::decrypt(&sk, &ct).unwrap(), msg, "length {}", len);
    }
}

#[test]
fn test_every_tag_and_payload_byte_is_authenticated() {
    let (_, sk) = known_keys();
    let ct = unhex(kat::CIPHERTEXT);

    for idx in 65..ct.len() {
        let mut tampered = ct.clone();
        tampered[idx] ^= 0x80;
        match Sm2Pke::decrypt(&sk, &tampered) {
            Err(Error::Integrity { .. }) => {}
            other => panic!("byte {}: expected integrity error, got {:?}", idx, other),
        }
    }
}

#[test]
fn test_legacy_layout_interop() {
    let (pk, sk) = known_keys();
    let mut rng = ChaCha20Rng::seed_from_u64(102);

    let legacy =
        Sm2Pke::encrypt_with_layout(&pk, b"old peer", CiphertextLayout::C1C2C3, &mut rng).unwrap();
    assert_eq!(
        Sm2Pke::decrypt_with_layout(&sk, &legacy, CiphertextLayout::C1C2C3).unwrap(),
        b"old peer"
    );

    // Re-order into the current layout by hand
    let (c1, rest) = legacy.split_at(65);
    let (c2, c3) = rest.split_at(rest.len() - 32);
    let current = [c1, c3, c2].concat();
    assert_eq!(Sm2Pke::decrypt(&sk, &current).unwrap(), b"old peer");
}

#[test]
fn test_format_errors() {
    let (_, sk) = known_keys();
    let ct = unhex(kat::CIPHERTEXT);

    assert!(matches!(
        Sm2Pke::decrypt(&sk, &ct[..96].to_vec()),
        Err(Error::Format { .. })
    ));

    let mut off_curve = ct.clone();
    off_curve[64] ^= 0x01;
    assert!(matches!(
        Sm2Pke::decrypt(&sk, &off_curve),
        Err(Error::Format { .. })
    ));
}

#[test]
fn test_signing_key_decrypts() {
    // The same scalar serves both schemes
    let (_, pke_sk) = known_keys();
    let sign_sk =
        <Sm2SecretKey as SerializeSecret>::from_bytes(&pke_sk.to_bytes_zeroizing()).unwrap();
    let sign_pk = sign_sk.public_key().unwrap();
    let pke_pk = <Sm2PkePublicKey as Serialize>::from_bytes(sign_pk.as_ref()).unwrap();

    let mut rng = ChaCha20Rng::seed_from_u64(103);
    let ct = Sm2Pke::encrypt(&pke_pk, b"shared key", &mut rng).unwrap();
    assert_eq!(Sm2Pke::decrypt(&pke_sk, &ct).unwrap(), b"shared key");
}
