//! Property tests across the public API
//!
//! Case counts stay small: every case runs several 256-bit scalar
//! multiplications.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use smcrypt::algorithms::ec::sm2::{self, Curve};
use smcrypt::prelude::{Error, Pke, Signature, Sm2Pke, Sm2Signer};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_encrypt_decrypt_round_trip(
        seed in any::<u64>(),
        msg in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (pk, sk) = Sm2Pke::keypair(&mut rng).unwrap();
        let ct = Sm2Pke::encrypt(&pk, &msg, &mut rng).unwrap();
        prop_assert_eq!(ct.len(), 97 + msg.len());
        prop_assert_eq!(Sm2Pke::decrypt(&sk, &ct).unwrap(), msg);
    }

    #[test]
    fn prop_tampered_ciphertext_never_decrypts(
        seed in any::<u64>(),
        msg in proptest::collection::vec(any::<u8>(), 1..64),
        offset in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (pk, sk) = Sm2Pke::keypair(&mut rng).unwrap();
        let mut ct = Sm2Pke::encrypt(&pk, &msg, &mut rng).unwrap();
        // tag or payload
        let idx = 65 + offset.index(ct.len() - 65);
        ct[idx] ^= flip;
        let is_integrity = matches!(Sm2Pke::decrypt(&sk, &ct), Err(Error::Integrity { .. }));
        prop_assert!(is_integrity);
    }

    #[test]
    fn prop_signatures_are_sound(
        seed in any::<u64>(),
        msg in proptest::collection::vec(any::<u8>(), 0..256),
        uid in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (pk, sk) = Sm2Signer::keypair(&mut rng).unwrap();
        let sig = Sm2Signer::sign(&msg, &uid, &sk, &mut rng).unwrap();
        prop_assert!(Sm2Signer::verify(&msg, &uid, &sig, &pk).unwrap());
    }

    #[test]
    fn prop_codec_inverse(seed in any::<u64>(), compressed in any::<bool>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (_, point) = sm2::generate_keypair(&mut rng).unwrap();
        let decoded = Curve::sm2().decode_point(&point.encode(compressed)).unwrap();
        prop_assert_eq!(decoded, point);
    }
}
