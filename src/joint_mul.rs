//! ### JointMul
//!
//! Straus–Shamir joint double-scalar multiplication: `[u]G + [v]Q`, scanned
//! from the most-significant non-zero bit pair of `(u, v)`, using a
//! precomputed `H = G + Q` so each loop iteration costs one doubling and at
//! most one mixed addition.

use crate::curve::Curve;
use crate::field::{self, U256};
use crate::point::{AffinePoint, XyzzPoint};

/// Reads bit `i` (0 = LSB) of a 256-bit scalar.
fn bit_at(scalar: &U256, i: usize) -> u64 {
    (scalar[i / 64] >> (i % 64)) & 1
}

/// `((v_i) << 1) | (u_i)`, selecting among `{infinity, G, Q, H}`.
fn bitpair(i: usize, u: &U256, v: &U256) -> u8 {
    ((bit_at(v, i) << 1) | bit_at(u, i)) as u8
}

/// Selects the affine summand for a given non-zero bit pair.
fn select(pair: u8, q: &AffinePoint, h: &AffinePoint) -> AffinePoint {
    match pair {
        1 => AffinePoint::new(Curve::GX, Curve::GY),
        2 => *q,
        3 => *h,
        _ => unreachable!("select is only called with a non-zero bit pair"),
    }
}

/// Computes the affine x-coordinate of `[u]G + [v]Q`.
///
/// `(u, v) = (0, 0)` and an accumulator that lands on the point at infinity
/// both return `0`, matching the verifier's behavior on invalid/degenerate
/// input (a `0` x-coordinate never equals a valid signature scalar `r`,
/// which is constrained to `(0, n)`).
pub fn joint_mul(qx: &U256, qy: &U256, u: &U256, v: &U256) -> U256 {
    if field::is_zero(u) && field::is_zero(v) {
        return field::ZERO;
    }

    let g = AffinePoint::new(Curve::GX, Curve::GY);
    let q = AffinePoint::new(*qx, *qy);

    // H = G + Q, via a single mixed addition (correct even when Q = +-G).
    let h = XyzzPoint::from_affine(&g).madd(&q).to_affine();

    // Find the most-significant non-zero bit pair.
    let mut i = 255usize;
    let start_pair = loop {
        let pair = bitpair(i, u, v);
        if pair != 0 {
            break pair;
        }
        if i == 0 {
            // u = 0, v = 0 was already handled above; unreachable otherwise.
            unreachable!("u and v are not both zero, so some bit pair is non-zero");
        }
        i -= 1;
    };

    let mut t = XyzzPoint::from_affine(&select(start_pair, &q, &h));

    while i > 0 {
        i -= 1;
        t = t.dbl();
        let pair = bitpair(i, u, v);
        if pair != 0 {
            t = t.madd(&select(pair, &q, &h));
        }
    }

    if field::is_zero(&t.zz) {
        return field::ZERO;
    }
    field::mulmod(&t.x, &field::p_mod_inv(&t.zz), &Curve::P)
}
