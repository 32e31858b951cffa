//! SM2 point representation and byte encodings
//!
//! | form         | layout              | length |
//! |--------------|---------------------|--------|
//! | identity     | `0x00`              | 1      |
//! | uncompressed | `0x04 ∥ x ∥ y`      | 65     |
//! | compressed   | `0x02/0x03 ∥ x`     | 33     |

use crate::ec::sm2::constants::{
    SM2_FIELD_ELEMENT_SIZE, SM2_POINT_COMPRESSED_SIZE, SM2_POINT_IDENTITY_SIZE,
    SM2_POINT_UNCOMPRESSED_SIZE, TAG_COMPRESSED_EVEN, TAG_COMPRESSED_ODD, TAG_IDENTITY,
    TAG_UNCOMPRESSED,
};
use crate::ec::sm2::curve::Curve;
use crate::error::{Error, Result};
use smcrypt_common::U256;

const CONTEXT: &str = "SM2 point";

/// Format of a serialized elliptic-curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// Identity point: the single byte 0x00
    Identity,
    /// Uncompressed: 0x04 ∥ x ∥ y
    Uncompressed,
    /// Compressed: 0x02/0x03 ∥ x
    Compressed,
}

/// A curve point: the group identity or an affine pair.
///
/// Values are immutable; curve operations return new points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Point {
    /// The point at infinity
    Infinity,
    /// Affine coordinates, each reduced modulo p
    Affine {
        /// x-coordinate
        x: U256,
        /// y-coordinate
        y: U256,
    },
}

impl Point {
    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point::Infinity
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// x-coordinate, `None` at infinity
    pub fn x(&self) -> Option<&U256> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, `None` at infinity
    pub fn y(&self) -> Option<&U256> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// Classify an encoding by its tag byte and length
    pub fn detect_format(bytes: &[u8]) -> Result<PointFormat> {
        match (bytes.first().copied(), bytes.len()) {
            (Some(TAG_IDENTITY), SM2_POINT_IDENTITY_SIZE) => Ok(PointFormat::Identity),
            (Some(TAG_UNCOMPRESSED), SM2_POINT_UNCOMPRESSED_SIZE) => Ok(PointFormat::Uncompressed),
            (Some(TAG_COMPRESSED_EVEN | TAG_COMPRESSED_ODD), SM2_POINT_COMPRESSED_SIZE) => {
                Ok(PointFormat::Compressed)
            }
            (None, _) => Err(Error::format(CONTEXT, "empty encoding")),
            (Some(tag), len) => Err(Error::format(
                CONTEXT,
                format!("unknown tag/length pair (0x{:02x}, {})", tag, len),
            )),
        }
    }

    /// Encode this point. Infinity is always the single byte 0x00.
    pub fn encode(&self, compressed: bool) -> Vec<u8> {
        match self {
            Point::Infinity => vec![TAG_IDENTITY],
            Point::Affine { x, y } if compressed => {
                let mut out = Vec::with_capacity(SM2_POINT_COMPRESSED_SIZE);
                out.push(if y.is_odd() {
                    TAG_COMPRESSED_ODD
                } else {
                    TAG_COMPRESSED_EVEN
                });
                out.extend_from_slice(&x.to_be_bytes());
                out
            }
            Point::Affine { x, y } => {
                let mut out = Vec::with_capacity(SM2_POINT_UNCOMPRESSED_SIZE);
                out.push(TAG_UNCOMPRESSED);
                out.extend_from_slice(&x.to_be_bytes());
                out.extend_from_slice(&y.to_be_bytes());
                out
            }
        }
    }

    /// Uncompressed encoding as a fixed array; `None` at infinity
    pub fn serialize_uncompressed(&self) -> Option<[u8; SM2_POINT_UNCOMPRESSED_SIZE]> {
        let Point::Affine { x, y } = self else {
            return None;
        };
        let mut out = [0u8; SM2_POINT_UNCOMPRESSED_SIZE];
        out[0] = TAG_UNCOMPRESSED;
        out[1..1 + SM2_FIELD_ELEMENT_SIZE].copy_from_slice(&x.to_be_bytes());
        out[1 + SM2_FIELD_ELEMENT_SIZE..].copy_from_slice(&y.to_be_bytes());
        Some(out)
    }

    /// Decode a point on the SM2 curve
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Curve::sm2().decode_point(bytes)
    }
}

impl Curve {
    /// Decode any of the three encodings into a point on this curve.
    ///
    /// Coordinates must be below p, uncompressed points must satisfy the
    /// curve equation and a compressed x must have a square root.
    pub fn decode_point(&self, bytes: &[u8]) -> Result<Point> {
        match Point::detect_format(bytes)? {
            PointFormat::Identity => Ok(Point::Infinity),
            PointFormat::Uncompressed => {
                let x = self.field_element(&bytes[1..1 + SM2_FIELD_ELEMENT_SIZE])?;
                let y = self.field_element(&bytes[1 + SM2_FIELD_ELEMENT_SIZE..])?;
                let point = Point::Affine { x, y };
                if !self.is_on_curve(&point) {
                    return Err(Error::format(CONTEXT, "point not on curve"));
                }
                Ok(point)
            }
            PointFormat::Compressed => {
                let x = self.field_element(&bytes[1..])?;
                let y = self.decompress_y(&x, bytes[0] == TAG_COMPRESSED_ODD)?;
                Ok(Point::Affine { x, y })
            }
        }
    }

    fn field_element(&self, bytes: &[u8]) -> Result<U256> {
        let v = U256::from_be_slice(bytes)
            .ok_or_else(|| Error::format(CONTEXT, "coordinate wider than 32 bytes"))?;
        if !self.p().contains(&v) {
            return Err(Error::format(CONTEXT, "coordinate not below the field prime"));
        }
        Ok(v)
    }

    /// y with the requested parity such that y² = x³ + a·x + b
    fn decompress_y(&self, x: &U256, odd: bool) -> Result<U256> {
        let exp = self
            .sqrt_exponent()
            .ok_or_else(|| Error::format(CONTEXT, "decompression needs p ≡ 3 (mod 4)"))?;
        let p = self.p();
        let y_sq = self.rhs(x);
        let mut y = p.pow(&y_sq, exp);
        if p.square(&y) != y_sq {
            return Err(Error::format(CONTEXT, "x has no matching y on the curve"));
        }
        if y.is_odd() != odd {
            y = p.neg(&y);
        }
        // y = 0 has only one root, which is even
        if y.is_odd() != odd {
            return Err(Error::format(CONTEXT, "parity bit does not match any root"));
        }
        Ok(y)
    }
}
