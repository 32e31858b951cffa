//! Short-Weierstrass curve `y² = x³ + a·x + b` over a prime field
//!
//! Affine group law with the point at infinity as an explicit variant.
//! Arithmetic is variable-time.

use crate::ec::sm2::point::Point;
use crate::error::{validate, Error, Result};
use once_cell::sync::Lazy;
use smcrypt_common::{Modulus, U256};
use smcrypt_params::traditional::sm2::{Sm2CurveParams, SM2_CURVE};

static SM2: Lazy<Curve> = Lazy::new(|| {
    Curve::from_params(&SM2_CURVE).expect("SM2 domain parameters must be valid")
});

/// Curve domain parameters with the field and group moduli precomputed
#[derive(Clone, Debug)]
pub struct Curve {
    p: Modulus,
    n: Modulus,
    a: U256,
    b: U256,
    g: Point,
    /// (p + 1) / 4, present only when p ≡ 3 (mod 4)
    sqrt_exp: Option<U256>,
}

impl Curve {
    /// The SM2 recommended curve, built once and shared read-only
    pub fn sm2() -> &'static Curve {
        &SM2
    }

    /// Build a curve from big-endian parameter bytes
    pub fn from_params(params: &Sm2CurveParams) -> Result<Self> {
        Self::new(
            U256::from_be_bytes(&params.p),
            U256::from_be_bytes(&params.a),
            U256::from_be_bytes(&params.b),
            U256::from_be_bytes(&params.n),
            U256::from_be_bytes(&params.g_x),
            U256::from_be_bytes(&params.g_y),
        )
    }

    /// Build and validate a curve.
    ///
    /// Rejects an even or trivial `p` or `n`, coefficients outside the field,
    /// a singular curve, a base point off the curve, and an `n` that does not
    /// annihilate the base point. Primality of `p` and `n` is the caller's
    /// responsibility.
    pub fn new(p: U256, a: U256, b: U256, n: U256, g_x: U256, g_y: U256) -> Result<Self> {
        let p = Modulus::new(p).ok_or_else(|| Error::param("curve p", "must be odd and > 1"))?;
        let n = Modulus::new(n).ok_or_else(|| Error::param("curve n", "must be odd and > 1"))?;
        validate::parameter(p.contains(&a), "curve a", "not reduced modulo p")?;
        validate::parameter(p.contains(&b), "curve b", "not reduced modulo p")?;

        let sqrt_exp = if p.value().limbs()[0] & 3 == 3 {
            // p = 4q + 3  =>  (p + 1) / 4 = q + 1
            Some(p.value().shr1().shr1().wrapping_add(&U256::ONE))
        } else {
            None
        };

        let curve = Self {
            p,
            n,
            a,
            b,
            g: Point::Infinity,
            sqrt_exp,
        };

        // 4a³ + 27b² ≠ 0
        let a3 = curve.p.mul(&curve.p.square(&a), &a);
        let disc = curve.p.add(
            &curve.p.mul(&curve.p.reduce(&U256::from_u64(4)), &a3),
            &curve
                .p
                .mul(&curve.p.reduce(&U256::from_u64(27)), &curve.p.square(&b)),
        );
        validate::parameter(!disc.is_zero(), "curve", "singular curve")?;

        let g = Point::Affine { x: g_x, y: g_y };
        validate::parameter(curve.is_on_curve(&g), "curve G", "base point not on curve")?;

        let curve = Self { g, ..curve };
        validate::parameter(
            curve.scalar_multiply(curve.n.value(), &g).is_identity(),
            "curve n",
            "not the order of the base point",
        )?;

        Ok(curve)
    }

    /// Field modulus p
    pub fn p(&self) -> &Modulus {
        &self.p
    }

    /// Group order n
    pub fn n(&self) -> &Modulus {
        &self.n
    }

    /// Coefficient a
    pub fn a(&self) -> &U256 {
        &self.a
    }

    /// Coefficient b
    pub fn b(&self) -> &U256 {
        &self.b
    }

    /// Base point G
    pub fn generator(&self) -> &Point {
        &self.g
    }

    /// x³ + a·x + b
    pub(crate) fn rhs(&self, x: &U256) -> U256 {
        let p = &self.p;
        let x3 = p.mul(&p.square(x), x);
        p.add(&p.add(&x3, &p.mul(&self.a, x)), &self.b)
    }

    /// (p + 1) / 4 when square roots are a single exponentiation
    pub(crate) fn sqrt_exponent(&self) -> Option<&U256> {
        self.sqrt_exp.as_ref()
    }

    /// True for infinity and for affine points with reduced coordinates
    /// satisfying the curve equation
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                self.p.contains(x) && self.p.contains(y) && self.p.square(y) == self.rhs(x)
            }
        }
    }

    /// -P = (x, -y)
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: *x,
                y: self.p.neg(y),
            },
        }
    }

    /// Group addition
    ///
    /// `P + ∞ = P`, `P + (-P) = ∞`, `P + P` delegates to [`Curve::double`],
    /// otherwise the chord rule.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Point {
        let (x1, y1, x2, y2) = match (lhs, rhs) {
            (Point::Infinity, _) => return *rhs,
            (_, Point::Infinity) => return *lhs,
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        if x1 == x2 {
            if y1 == y2 {
                return self.double(lhs);
            }
            return Point::Infinity;
        }

        let p = &self.p;
        let Some(inv) = p.inverse(&p.sub(x2, x1)) else {
            // x1 != x2 in a prime field, so the difference is invertible
            return Point::Infinity;
        };
        let slope = p.mul(&p.sub(y2, y1), &inv);
        self.chord(&slope, x1, y1, x2)
    }

    /// Point doubling with the tangent rule; a point with y = 0 doubles to ∞
    pub fn double(&self, point: &Point) -> Point {
        let Point::Affine { x, y } = point else {
            return Point::Infinity;
        };
        if y.is_zero() {
            return Point::Infinity;
        }

        let p = &self.p;
        let x_sq = p.square(x);
        let num = p.add(&p.add(&p.add(&x_sq, &x_sq), &x_sq), &self.a);
        let Some(inv) = p.inverse(&p.add(y, y)) else {
            return Point::Infinity;
        };
        let slope = p.mul(&num, &inv);
        self.chord(&slope, x, y, x)
    }

    /// x3 = λ² − x1 − x2, y3 = λ(x1 − x3) − y1
    fn chord(&self, slope: &U256, x1: &U256, y1: &U256, x2: &U256) -> Point {
        let p = &self.p;
        let x3 = p.sub(&p.sub(&p.square(slope), x1), x2);
        let y3 = p.sub(&p.mul(slope, &p.sub(x1, &x3)), y1);
        Point::Affine { x: x3, y: y3 }
    }

    /// k·P by double-and-add from the least significant bit; `0·P = ∞`.
    ///
    /// `k` is used as given, not reduced modulo n, so `n·G = ∞`.
    pub fn scalar_multiply(&self, k: &U256, point: &Point) -> Point {
        let mut result = Point::Infinity;
        let mut addend = *point;
        let bits = k.bits();
        for i in 0..bits {
            if k.bit(i) {
                result = self.add(&result, &addend);
            }
            if i + 1 < bits {
                addend = self.double(&addend);
            }
        }
        result
    }

    /// k·G
    pub fn base_multiply(&self, k: &U256) -> Point {
        self.scalar_multiply(k, &self.g)
    }
}
