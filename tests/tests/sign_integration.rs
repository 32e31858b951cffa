//! Integration tests for SM2 signatures

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use smcrypt::prelude::*;
use smcrypt_tests::vectors::sm2 as kat;
use smcrypt_tests::{unhex, FailingRng, FixedRng};

fn known_secret_key() -> Sm2SecretKey {
    <Sm2SecretKey as SerializeSecret>::from_bytes(&unhex(kat::PRIVATE_KEY)).unwrap()
}

fn known_signature() -> Sm2Signature {
    let bytes = [unhex(kat::SIGNATURE_R), unhex(kat::SIGNATURE_S)].concat();
    <Sm2Signature as Serialize>::from_bytes(&bytes).unwrap()
}

#[test]
fn test_known_signature_through_facade() {
    let sk = known_secret_key();
    let pk = sk.public_key().unwrap();
    assert_eq!(hex::encode(pk.as_ref()), kat::PUBLIC_KEY);

    let mut rng = FixedRng::new(unhex(kat::SIGN_NONCE));
    let sig = Sm2Signer::sign(kat::SIGN_MESSAGE, SM2_DEFAULT_USER_ID, &sk, &mut rng).unwrap();
    assert_eq!(sig, known_signature());
    assert_eq!(rng.consumed(), 32);

    assert!(Sm2Signer::verify(kat::SIGN_MESSAGE, SM2_DEFAULT_USER_ID, &sig, &pk).unwrap());
    assert!(!Sm2Signer::verify(b"tesu", SM2_DEFAULT_USER_ID, &sig, &pk).unwrap());
}

#[test]
fn test_recorded_signature_verifies_with_compressed_key() {
    let pk = <Sm2PublicKey as Serialize>::from_bytes(&unhex(kat::PUBLIC_KEY_COMPRESSED)).unwrap();
    assert!(Sm2Signer::verify_with_default_id(kat::SIGN_MESSAGE, &known_signature(), &pk).unwrap());
}

#[test]
fn test_message_digest_vector() {
    use smcrypt::algorithms::ec::sm2::{Curve, Point};
    use smcrypt::sign::traditional::sm2::digest::message_digest;

    let point = Point::decode(&unhex(kat::PUBLIC_KEY)).unwrap();
    let e = message_digest(Curve::sm2(), SM2_DEFAULT_USER_ID, &point, kat::SIGN_MESSAGE).unwrap();
    assert_eq!(hex::encode(e.to_be_bytes()), kat::SIGN_DIGEST);
}

#[test]
fn test_single_bit_flips_rejected() {
    let pk = known_secret_key().public_key().unwrap();
    let sig = known_signature();
    let sig_bytes = sig.to_bytes();

    for bit in 0..32 {
        let mut msg = kat::SIGN_MESSAGE.to_vec();
        msg[bit / 8] ^= 1 << (bit % 8);
        assert!(!Sm2Signer::verify(&msg, SM2_DEFAULT_USER_ID, &sig, &pk).unwrap());
    }

    for idx in [0usize, 17, 31, 32, 50, 63] {
        let mut bytes = sig_bytes.clone();
        bytes[idx] ^= 0x01;
        // A flipped component may also leave [1, n); either way it must not verify
        if let Ok(tampered) = <Sm2Signature as Serialize>::from_bytes(&bytes) {
            assert!(!Sm2Signer::verify(kat::SIGN_MESSAGE, SM2_DEFAULT_USER_ID, &tampered, &pk)
                .unwrap());
        }
    }
}

#[test]
fn test_identity_binding() {
    let mut rng = ChaCha20Rng::seed_from_u64(200);
    let (pk, sk) = Sm2Signer::keypair(&mut rng).unwrap();

    let sig = Sm2Signer::sign(b"payload", b"alice", &sk, &mut rng).unwrap();
    assert!(Sm2Signer::verify(b"payload", b"alice", &sig, &pk).unwrap());
    assert!(!Sm2Signer::verify(b"payload", b"alicf", &sig, &pk).unwrap());
    assert!(!Sm2Signer::verify_with_default_id(b"payload", &sig, &pk).unwrap());
}

#[test]
fn test_empty_and_maximal_user_ids() {
    let mut rng = ChaCha20Rng::seed_from_u64(201);
    let (pk, sk) = Sm2Signer::keypair(&mut rng).unwrap();

    let empty: &[u8] = b"";
    let sig = Sm2Signer::sign(b"m", empty, &sk, &mut rng).unwrap();
    assert!(Sm2Signer::verify(b"m", empty, &sig, &pk).unwrap());

    let max = vec![0x42u8; 65535];
    let sig = Sm2Signer::sign(b"m", &max, &sk, &mut rng).unwrap();
    assert!(Sm2Signer::verify(b"m", &max, &sig, &pk).unwrap());

    let too_long = vec![0x42u8; 65536];
    assert!(matches!(
        Sm2Signer::sign(b"m", &too_long, &sk, &mut rng),
        Err(Error::Domain { .. })
    ));
}

#[test]
fn test_degenerate_rng_is_fatal() {
    let sk = known_secret_key();
    let mut rng = FixedRng::new(Vec::new());
    match Sm2Signer::sign(b"m", SM2_DEFAULT_USER_ID, &sk, &mut rng) {
        Err(Error::ExhaustedRetries { attempts, .. }) => assert_eq!(attempts, 100),
        other => panic!("expected exhaustion, got {:?}", other),
    }
    assert_eq!(rng.consumed(), 100 * 32);
}

#[test]
fn test_rng_failure_is_reported_not_retried() {
    let sk = known_secret_key();
    match Sm2Signer::sign(b"m", SM2_DEFAULT_USER_ID, &sk, &mut FailingRng) {
        Err(Error::RandomGeneration { message, .. }) => {
            assert!(message.contains(FailingRng::MESSAGE))
        }
        other => panic!("expected a random source error, got {:?}", other),
    }
}

#[test]
fn test_out_of_range_components_rejected() {
    let n = smcrypt::params::traditional::sm2::SM2_CURVE.n;
    let sig = known_signature();
    assert!(matches!(
        Sm2Signature::new(n, *sig.s()),
        Err(Error::Domain { .. })
    ));
    assert!(matches!(
        Sm2Signature::new(*sig.r(), [0u8; 32]),
        Err(Error::Domain { .. })
    ));
}
