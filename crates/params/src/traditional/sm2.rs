//! Constants for the SM2 elliptic curve and the schemes built on it
//!
//! The curve is `y² = x³ + a·x + b` over the 256-bit prime field `F_p`.
//! `p ≡ 3 (mod 4)`, which is what makes point decompression a single
//! exponentiation.

/// Short-Weierstrass curve parameters, each a 32-byte big-endian integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sm2CurveParams {
    /// Field prime p
    pub p: [u8; 32],
    /// Coefficient a
    pub a: [u8; 32],
    /// Coefficient b
    pub b: [u8; 32],
    /// Order n of the base point
    pub n: [u8; 32],
    /// Base point x-coordinate
    pub g_x: [u8; 32],
    /// Base point y-coordinate
    pub g_y: [u8; 32],
}

/// The published SM2 recommended curve.
pub const SM2_CURVE: Sm2CurveParams = Sm2CurveParams {
    // p = FFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF 00000000 FFFFFFFF FFFFFFFF
    p: [
        0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF,
    ],
    // a = p - 3
    a: [
        0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFC,
    ],
    b: [
        0x28, 0xE9, 0xFA, 0x9E, 0x9D, 0x9F, 0x5E, 0x34, 0x4D, 0x5A, 0x9E, 0x4B, 0xCF, 0x65, 0x09,
        0xA7, 0xF3, 0x97, 0x89, 0xF5, 0x15, 0xAB, 0x8F, 0x92, 0xDD, 0xBC, 0xBD, 0x41, 0x4D, 0x94,
        0x0E, 0x93,
    ],
    n: [
        0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0x72, 0x03, 0xDF, 0x6B, 0x21, 0xC6, 0x05, 0x2B, 0x53, 0xBB, 0xF4, 0x09, 0x39, 0xD5,
        0x41, 0x23,
    ],
    g_x: [
        0x32, 0xC4, 0xAE, 0x2C, 0x1F, 0x19, 0x81, 0x19, 0x5F, 0x99, 0x04, 0x46, 0x6A, 0x39, 0xC9,
        0x94, 0x8F, 0xE3, 0x0B, 0xBF, 0xF2, 0x66, 0x0B, 0xE1, 0x71, 0x5A, 0x45, 0x89, 0x33, 0x4C,
        0x74, 0xC7,
    ],
    g_y: [
        0xBC, 0x37, 0x36, 0xA2, 0xF4, 0xF6, 0x77, 0x9C, 0x59, 0xBD, 0xCE, 0xE3, 0x6B, 0x69, 0x21,
        0x53, 0xD0, 0xA9, 0x87, 0x7C, 0xC6, 0x2A, 0x47, 0x40, 0x02, 0xDF, 0x32, 0xE5, 0x21, 0x39,
        0xF0, 0xA0,
    ],
};

/// Size of an SM2 scalar (private key, nonce, signature component) in bytes
pub const SM2_SCALAR_SIZE: usize = 32;

/// Size of an SM2 field element in bytes
pub const SM2_FIELD_ELEMENT_SIZE: usize = 32;

/// Encoded point at infinity: the single tag byte 0x00
pub const SM2_POINT_IDENTITY_SIZE: usize = 1;

/// Uncompressed point: 0x04 || x || y
pub const SM2_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * SM2_FIELD_ELEMENT_SIZE; // 65 bytes

/// Compressed point: 0x02/0x03 || x
pub const SM2_POINT_COMPRESSED_SIZE: usize = 1 + SM2_FIELD_ELEMENT_SIZE; // 33 bytes

/// Output size of the hash used by the KDF, the integrity tag and the digests
pub const SM2_HASH_SIZE: usize = 32;

/// Size of the ciphertext integrity tag C3
pub const SM2_TAG_SIZE: usize = SM2_HASH_SIZE;

/// Smallest valid ciphertext: C1 (uncompressed) + C3 + empty C2
pub const SM2_MIN_CIPHERTEXT_SIZE: usize = SM2_POINT_UNCOMPRESSED_SIZE + SM2_TAG_SIZE; // 97 bytes

/// Size of a serialized signature: r || s
pub const SM2_SIGNATURE_SIZE: usize = 2 * SM2_SCALAR_SIZE;

/// User identity folded into the Z digest when the caller supplies none
pub const SM2_DEFAULT_USER_ID: &[u8; 16] = b"1234567812345678";

/// Hard cap on nonce candidates drawn by one signing call (and by key generation)
pub const SM2_MAX_SIGNING_ATTEMPTS: usize = 100;
