//! ### AffinePoint / XyzzPoint
//!
//! Affine point predicates (on-curve test, infinity test, public-key
//! validity) and XYZZ point arithmetic: mixed-coordinate doubling (`dbl`,
//! `mdbl`) and mixed addition (`madd`), plus conversion back to affine.
//!
//! `(0, 0)` is the affine infinity encoding; `(zz, zzz) = (0, 0)` is the
//! XYZZ infinity encoding. Both are safe because P-256's curve equation has
//! no solution at the origin (`b != 0`).

use crate::curve::Curve;
use crate::errors::Secp256r1Error;
use crate::field::{self, U256};

/// A point in affine coordinates `(x, y)`, `0 <= x, y < p`.
///
/// `(0, 0)` denotes the point at infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffinePoint {
    pub x: U256,
    pub y: U256,
}

impl AffinePoint {
    pub fn new(x: U256, y: U256) -> Self {
        Self { x, y }
    }

    /// The affine point at infinity, `(0, 0)`.
    pub const fn infinity() -> Self {
        Self {
            x: field::ZERO,
            y: field::ZERO,
        }
    }

    pub fn is_infinity(&self) -> bool {
        field::is_zero(&self.x) && field::is_zero(&self.y)
    }

    /// `y^2 == x^3 + a*x + b (mod p)`, computed left-to-right as
    /// `((x*x*x) + a*x + b) mod p`.
    pub fn on_curve(&self) -> bool {
        let x2 = field::mulmod(&self.x, &self.x, &Curve::P);
        let x3 = field::mulmod(&x2, &self.x, &Curve::P);
        let ax = field::mulmod(&Curve::A, &self.x, &Curve::P);
        let rhs = field::addmod(&field::addmod(&x3, &ax, &Curve::P), &Curve::B, &Curve::P);
        let lhs = field::mulmod(&self.y, &self.y, &Curve::P);
        lhs == rhs
    }

    /// `0 <= x, y < p`, not infinity, and on-curve.
    pub fn is_valid_pubkey(&self) -> bool {
        self.validate().is_ok()
    }

    /// As [`Self::is_valid_pubkey`], but reporting which precondition failed.
    pub fn validate(&self) -> Result<(), Secp256r1Error> {
        if !field::is_less(&self.x, &Curve::P) || !field::is_less(&self.y, &Curve::P) {
            return Err(Secp256r1Error::InvalidPublicKey);
        }
        if self.is_infinity() || !self.on_curve() {
            return Err(Secp256r1Error::InvalidPublicKey);
        }
        Ok(())
    }
}

/// A point in XYZZ coordinates `(X, Y, ZZ, ZZZ)`, with affine equivalent
/// `(X/ZZ, Y/ZZZ)` and the invariant `ZZZ^2 = ZZ^3`.
///
/// `(ZZ, ZZZ) = (0, 0)` denotes the point at infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XyzzPoint {
    pub x: U256,
    pub y: U256,
    pub zz: U256,
    pub zzz: U256,
}

impl XyzzPoint {
    /// The XYZZ point at infinity.
    pub const fn infinity() -> Self {
        Self {
            x: field::ZERO,
            y: field::ZERO,
            zz: field::ZERO,
            zzz: field::ZERO,
        }
    }

    pub fn is_infinity(&self) -> bool {
        field::is_zero(&self.zz) && field::is_zero(&self.zzz)
    }

    /// Lifts an affine point to XYZZ with `z = 1`. Lifting affine infinity
    /// yields XYZZ infinity.
    pub fn from_affine(p: &AffinePoint) -> Self {
        if p.is_infinity() {
            return Self::infinity();
        }
        Self {
            x: p.x,
            y: p.y,
            zz: field::ONE,
            zzz: field::ONE,
        }
    }

    /// XYZZ doubling (`dbl-2008-s-1`).
    pub fn dbl(&self) -> Self {
        if self.is_infinity() {
            return Self::infinity();
        }
        let p = &Curve::P;
        let u = field::addmod(&self.y, &self.y, p); // U = 2y1
        let v = field::mulmod(&u, &u, p); // V = U^2
        let w = field::mulmod(&u, &v, p); // W = U*V
        let s = field::mulmod(&self.x, &v, p); // S = x1*V
        let x1_sq = field::mulmod(&self.x, &self.x, p);
        let three_x1_sq = field::addmod(&field::addmod(&x1_sq, &x1_sq, p), &x1_sq, p);
        let zz_sq = field::mulmod(&self.zz, &self.zz, p);
        let a_zz_sq = field::mulmod(&Curve::A, &zz_sq, p);
        let m = field::addmod(&three_x1_sq, &a_zz_sq, p); // M = 3x1^2 + a*zz1^2

        let m_sq = field::mulmod(&m, &m, p);
        let two_s = field::addmod(&s, &s, p);
        let x3 = field::submod(&m_sq, &two_s, p); // X' = M^2 - 2S

        let s_minus_x3 = field::submod(&s, &x3, p);
        let m_s_x3 = field::mulmod(&m, &s_minus_x3, p);
        let w_y1 = field::mulmod(&w, &self.y, p);
        let y3 = field::submod(&m_s_x3, &w_y1, p); // Y' = M*(S-X') - W*y1

        let zz3 = field::mulmod(&v, &self.zz, p); // ZZ' = V*zz1
        let zzz3 = field::mulmod(&w, &self.zzz, p); // ZZZ' = W*zzz1

        Self {
            x: x3,
            y: y3,
            zz: zz3,
            zzz: zzz3,
        }
    }

    /// Affine doubling (`mdbl-2008-s-1`): `dbl` specialized to `zz1 = zzz1 = 1`.
    pub fn mdbl(p1: &AffinePoint) -> Self {
        if p1.is_infinity() {
            return Self::infinity();
        }
        let p = &Curve::P;
        let u = field::addmod(&p1.y, &p1.y, p); // U = 2y1
        let v = field::mulmod(&u, &u, p); // V = U^2
        let w = field::mulmod(&u, &v, p); // W = U*V
        let s = field::mulmod(&p1.x, &v, p); // S = x1*V
        let x1_sq = field::mulmod(&p1.x, &p1.x, p);
        let three_x1_sq = field::addmod(&field::addmod(&x1_sq, &x1_sq, p), &x1_sq, p);
        let m = field::addmod(&three_x1_sq, &Curve::A, p); // M = 3x1^2 + a

        let m_sq = field::mulmod(&m, &m, p);
        let two_s = field::addmod(&s, &s, p);
        let x3 = field::submod(&m_sq, &two_s, p);

        let s_minus_x3 = field::submod(&s, &x3, p);
        let m_s_x3 = field::mulmod(&m, &s_minus_x3, p);
        let w_y1 = field::mulmod(&w, &p1.y, p);
        let y3 = field::submod(&m_s_x3, &w_y1, p);

        Self {
            x: x3,
            y: y3,
            zz: v,
            zzz: w,
        }
    }

    /// Mixed addition: `self + p2`, where `p2` is affine.
    pub fn madd(&self, p2: &AffinePoint) -> Self {
        if p2.is_infinity() {
            return *self;
        }
        if self.is_infinity() {
            return Self::from_affine(p2);
        }

        let field_p = &Curve::P;
        let r = field::submod(&field::mulmod(&p2.y, &self.zzz, field_p), &self.y, field_p);
        let p = field::submod(&field::mulmod(&p2.x, &self.zz, field_p), &self.x, field_p);

        if !field::is_zero(&p) {
            let pp = field::mulmod(&p, &p, field_p);
            let ppp = field::mulmod(&p, &pp, field_p);
            let q = field::mulmod(&self.x, &pp, field_p);
            let zz3 = field::mulmod(&self.zz, &pp, field_p);
            let zzz3 = field::mulmod(&self.zzz, &ppp, field_p);

            let r_sq = field::mulmod(&r, &r, field_p);
            let two_q = field::addmod(&q, &q, field_p);
            let x3 = field::submod(&field::submod(&r_sq, &ppp, field_p), &two_q, field_p);

            let q_minus_x3 = field::submod(&q, &x3, field_p);
            let r_q_x3 = field::mulmod(&r, &q_minus_x3, field_p);
            let y1_ppp = field::mulmod(&self.y, &ppp, field_p);
            let y3 = field::submod(&r_q_x3, &y1_ppp, field_p);

            Self {
                x: x3,
                y: y3,
                zz: zz3,
                zzz: zzz3,
            }
        } else if field::is_zero(&r) {
            Self::mdbl(p2)
        } else {
            Self::infinity()
        }
    }

    /// Converts to affine coordinates. Only `ZZZ` feeds a modular inversion
    /// here; `ZZ`'s inverse is recovered from it (`z_inv = ZZ * zzz_inv`,
    /// `zz_inv = z_inv^2`) rather than inverted separately.
    pub fn to_affine(&self) -> AffinePoint {
        if self.is_infinity() {
            return AffinePoint::infinity();
        }
        let p = &Curve::P;
        let zzz_inv = field::p_mod_inv(&self.zzz);
        let z_inv = field::mulmod(&self.zz, &zzz_inv, p);
        let zz_inv = field::mulmod(&z_inv, &z_inv, p);
        let x = field::mulmod(&self.x, &zz_inv, p);
        let y = field::mulmod(&self.y, &zzz_inv, p);
        AffinePoint::new(x, y)
    }
}
