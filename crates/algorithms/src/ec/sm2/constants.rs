//! Shared constants for SM2 operations

pub use smcrypt_params::traditional::sm2::{
    SM2_FIELD_ELEMENT_SIZE, SM2_POINT_COMPRESSED_SIZE, SM2_POINT_IDENTITY_SIZE,
    SM2_POINT_UNCOMPRESSED_SIZE, SM2_SCALAR_SIZE,
};

/// Tag byte of the encoded point at infinity
pub const TAG_IDENTITY: u8 = 0x00;

/// Tag byte of a compressed point with even y
pub const TAG_COMPRESSED_EVEN: u8 = 0x02;

/// Tag byte of a compressed point with odd y
pub const TAG_COMPRESSED_ODD: u8 = 0x03;

/// Tag byte of an uncompressed point
pub const TAG_UNCOMPRESSED: u8 = 0x04;
