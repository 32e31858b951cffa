//! Integration tests for the curve, codec, KDF and field layers

use smcrypt::algorithms::ec::sm2::{self, Curve, Point, PointFormat};
use smcrypt::algorithms::kdf;
use smcrypt::common::{mod_inverse, Modulus, U256};
use smcrypt::internal::constant_time::ct_eq;
use smcrypt_tests::vectors::{self, sm2 as kat, toy};
use smcrypt_tests::unhex;

fn u256(hex_str: &str) -> U256 {
    let bytes: [u8; 32] = unhex(hex_str).try_into().unwrap();
    U256::from_be_bytes(&bytes)
}

fn toy_curve() -> Curve {
    Curve::new(
        toy::P.into(),
        toy::A.into(),
        toy::B.into(),
        toy::N.into(),
        toy::GX.into(),
        toy::GY.into(),
    )
    .unwrap()
}

#[test]
fn test_doubling_vector() {
    let curve = Curve::sm2();
    let g = sm2::base_point_g();
    let expected = Point::Affine {
        x: u256(kat::TWO_G_X),
        y: u256(kat::TWO_G_Y),
    };
    assert_eq!(curve.double(&g), expected);
    assert_eq!(curve.add(&g, &g), expected);
    assert_eq!(curve.scalar_multiply(&U256::from_u64(2), &g), expected);
}

#[test]
fn test_order_annihilates_generator() {
    let curve = Curve::sm2();
    assert!(curve.base_multiply(curve.n().value()).is_identity());
    assert!(toy_curve().base_multiply(&U256::from_u64(toy::N)).is_identity());
}

#[test]
fn test_toy_group_law() {
    let curve = toy_curve();
    let g = *curve.generator();
    assert_eq!(
        curve.scalar_multiply(&U256::from_u64(2), &g),
        curve.add(&g, &g)
    );
    assert_eq!(
        curve.double(&g),
        Point::Affine {
            x: U256::from_u64(6),
            y: U256::from_u64(3)
        }
    );

    // P + (-P) = ∞ for every multiple
    let mut p = g;
    for _ in 1..toy::N {
        assert!(curve.is_on_curve(&p));
        assert!(curve.add(&p, &curve.negate(&p)).is_identity());
        p = curve.add(&p, &g);
    }
    assert!(p.is_identity());
}

#[test]
fn test_public_key_encodings() {
    let point = Point::decode(&unhex(kat::PUBLIC_KEY)).unwrap();
    assert_eq!(hex::encode(point.encode(false)), kat::PUBLIC_KEY);
    assert_eq!(hex::encode(point.encode(true)), kat::PUBLIC_KEY_COMPRESSED);
    assert_eq!(Point::decode(&unhex(kat::PUBLIC_KEY_COMPRESSED)).unwrap(), point);

    assert_eq!(
        Point::detect_format(&unhex(kat::PUBLIC_KEY_COMPRESSED)).unwrap(),
        PointFormat::Compressed
    );
    assert_eq!(Point::decode(&[0x00]).unwrap(), Point::identity());
    assert_eq!(Point::identity().encode(true), vec![0x00]);
}

#[test]
fn test_codec_rejections() {
    // 0x04 with a compressed length, 0x02 with an uncompressed length
    let mut wrong = unhex(kat::PUBLIC_KEY_COMPRESSED);
    wrong[0] = 0x04;
    assert!(Point::decode(&wrong).is_err());
    let mut wrong = unhex(kat::PUBLIC_KEY);
    wrong[0] = 0x02;
    assert!(Point::decode(&wrong).is_err());

    assert!(Point::decode(&[]).is_err());
    assert!(Point::decode(&[0x00, 0x00]).is_err());
    assert!(Point::decode(&[0x05; 33]).is_err());
}

#[test]
fn test_kdf_vector() {
    let out = kdf::derive(b"abc", 40).unwrap();
    assert_eq!(hex::encode(out.as_slice()), vectors::KDF_ABC_40);
    assert!(kdf::derive(b"abc", 0).unwrap().is_empty());
    assert_eq!(kdf::derive(b"abc", 7).unwrap().as_slice(), &out.as_slice()[..7]);
}

#[test]
fn test_mod_inverse_over_curve_order() {
    let n = Curve::sm2().n();
    let a = u256(kat::PRIVATE_KEY);
    let inv = mod_inverse(&a, n).unwrap();
    assert_eq!(n.mul(&a, &inv), U256::ONE);
    assert!(mod_inverse(&U256::ZERO, n).is_none());

    let m = Modulus::new(U256::from_u64(15)).unwrap();
    assert!(mod_inverse(&U256::from_u64(6), &m).is_none());
    assert_eq!(mod_inverse(&U256::from_u64(7), &m), Some(U256::from_u64(13)));
}

#[test]
fn test_constant_time_compare() {
    let a = [1u8, 2, 3, 4];
    let b = [1u8, 2, 3, 4];
    let c = [1u8, 2, 3, 5];

    assert!(ct_eq(a, b));
    assert!(!ct_eq(a, c));
    assert!(!ct_eq(&a[..], &a[..3]));
}
