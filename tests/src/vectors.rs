//! Recorded known-answer vectors
//!
//! The SM2 vectors use the published curve, SHA-256 for every digest and the
//! default user id `1234567812345678`.

/// SM2 fixed key pair, signature and ciphertext
pub mod sm2 {
    /// Secret scalar d
    pub const PRIVATE_KEY: &str =
        "3945208f7b2144b13f36e38ac6d39f95889393692860b51a42fb81ef4df7c5b8";

    /// d·G, uncompressed
    pub const PUBLIC_KEY: &str = concat!(
        "04",
        "09f9df311e5421a150dd7d161e4bc5c672179fad1833fc076bb08ff356f35020",
        "ccea490ce26775a52dc6ea718cc1aa600aed05fbf35e084a6632f6072da9ad13",
    );

    /// d·G, compressed (y is odd)
    pub const PUBLIC_KEY_COMPRESSED: &str =
        "0309f9df311e5421a150dd7d161e4bc5c672179fad1833fc076bb08ff356f35020";

    /// Message signed in the signature vector
    pub const SIGN_MESSAGE: &[u8] = b"test";

    /// Signing nonce k
    pub const SIGN_NONCE: &str =
        "59276e27d506861a16680f3ad9c02dccef3cc1fa3cdbe4ce6d54b80deac1bc21";

    /// e = SHA-256(Z ∥ "test") mod n
    pub const SIGN_DIGEST: &str =
        "e0f09a8fa13c69be9548b22753d04c779cd826246130b1f47dbb35d0c1adfadc";

    /// Signature component r
    pub const SIGNATURE_R: &str =
        "e5dc97012fc98156f74ce44de2484b2dde3655026f37ee03cd1f449defc2954f";

    /// Signature component s
    pub const SIGNATURE_S: &str =
        "b70ee72d113d2687f0642b2ad61dbf80616249b5092be6e86bd25c0a95767a60";

    /// Plaintext of the encryption vector
    pub const PLAINTEXT: &[u8] = b"encryption standard";

    /// Ephemeral scalar of the encryption vector
    pub const ENCRYPT_EPHEMERAL: &str =
        "4c62eefd6ecfc2b95b92fd6c3d9575148afa17425546d49018e5388d49dd7b4f";

    /// C1 ∥ C3 ∥ C2
    pub const CIPHERTEXT: &str = concat!(
        "04",
        "11c88ae04cec1ba554d03d5b5970333a83585826c2a985de5520d9e934389efb",
        "84b52d344fb21aa8ea38a4940c8332692b8d4da2393549212eafdc0f11ca5c9c",
        "75a2b168bbcfdf50c8a5142bc6c1ee0e8ba3a49d422fae224ae55efa21281664",
        "75e69ea54d8ed97172e6f6219777df0e58d58f",
    );

    /// 2·G, x-coordinate
    pub const TWO_G_X: &str = "56cefd60d7c87c000d58ef57fa73ba4d9c0dfa08c08a7331495c2e1da3f2bd52";

    /// 2·G, y-coordinate
    pub const TWO_G_Y: &str = "31b7e7e6cc8189f668535ce0f8eaf1bd6de84c182f6c8e716f780d3a970a23c3";
}

/// Toy curve y² = x³ + 2x + 2 over F₁₇ with G = (5, 1) of order 19
pub mod toy {
    /// Field prime
    pub const P: u64 = 17;
    /// Coefficient a
    pub const A: u64 = 2;
    /// Coefficient b
    pub const B: u64 = 2;
    /// Group order
    pub const N: u64 = 19;
    /// Generator x
    pub const GX: u64 = 5;
    /// Generator y
    pub const GY: u64 = 1;
}

/// KDF("abc", 40) with SHA-256
pub const KDF_ABC_40: &str = concat!(
    "46c386ebccef82ba0bb0b095aaa5548b03cdff6951871c6fb505af68af688332",
    "f885d324a47d2145",
);
