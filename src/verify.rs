//! ### Verify
//!
//! ECDSA verification glue: scalar-field range checks, public-key
//! validation, scalar computation, joint scalar multiplication, and the
//! final x-coordinate comparison.

use crate::curve::Curve;
use crate::errors::Secp256r1Error;
use crate::field::{self, U256};
use crate::joint_mul::joint_mul;
use crate::point::AffinePoint;

/// `0 < v < n`, the precondition shared by signature scalars `r` and `s`.
fn validate_scalar(v: &U256) -> Result<(), Secp256r1Error> {
    if field::is_zero(v) || !field::is_less(v, &Curve::N) {
        return Err(Secp256r1Error::InvalidScalar);
    }
    Ok(())
}

/// The fallible core of [`verify`]: every precondition is a `?`-propagated
/// `Err`, collapsed to a plain `bool` by the public wrapper.
fn try_verify(h: &U256, r: &U256, s: &U256, qx: &U256, qy: &U256) -> Result<bool, Secp256r1Error> {
    validate_scalar(r)?;
    validate_scalar(s)?;

    let q = AffinePoint::new(*qx, *qy);
    q.validate()?;

    let s_inv = field::n_mod_inv(s);
    let u = field::mulmod(h, &s_inv, &Curve::N);
    let v = field::mulmod(r, &s_inv, &Curve::N);

    let x_r = joint_mul(qx, qy, &u, &v);

    // x_R mod n == r. x_R is already < p; reduce mod n before comparing.
    let x_r_mod_n = if field::is_less(&x_r, &Curve::N) {
        x_r
    } else {
        field::submod(&x_r, &Curve::N, &Curve::N)
    };

    Ok(x_r_mod_n == *r)
}

/// Verifies an ECDSA signature `(r, s)` over message digest `h` against
/// public key `(qx, qy)`, all as big-endian 256-bit words.
///
/// Returns `true` iff the signature is valid under the standard ECDSA
/// verification equation for P-256. Every failure path returns `false`;
/// nothing panics, nothing is retried, nothing is logged.
pub fn verify(h: &U256, r: &U256, s: &U256, qx: &U256, qy: &U256) -> bool {
    try_verify(h, r, s, qx, qy).unwrap_or(false)
}

/// `verify`, taking big-endian byte words directly (the library surface
/// described in the interface contract).
pub fn verify_bytes(
    h: &[u8; 32],
    r: &[u8; 32],
    s: &[u8; 32],
    qx: &[u8; 32],
    qy: &[u8; 32],
) -> bool {
    verify(
        &field::from_be_bytes(h),
        &field::from_be_bytes(r),
        &field::from_be_bytes(s),
        &field::from_be_bytes(qx),
        &field::from_be_bytes(qy),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(s: &str) -> [u8; 32] {
        let padded = format!("{:0>64}", s.trim_start_matches("0x"));
        let decoded = hex::decode(padded).unwrap();
        let mut out = [0u8; 32];
        out.copy_from_slice(&decoded);
        out
    }

    // A representative valid P-256 ECDSA signature.
    const MSG_HASH: &str = "bb5a52f42f9c9261ed4361f59422a1e30036e7c32b270c8807a419feca605023";
    const R_HEX: &str = "2ba3a8be6b94d5ec80a6d9d1190a436effe50d85a1eee859b8cc6af9bd5c2e18";
    const S_HEX: &str = "4cd60b855d442f5b3c7b11eb6c4e0ae7525fe710fab9aa7c77a67f79e6fadd76";
    const QX_HEX: &str = "2927b10512bae3eddcfe467828128bad2903269919f7086069c8c4df6c732838";
    const QY_HEX: &str = "c7787964eaac00e5921fb1498a60f4606766b3d9685001558d1a974e7341513e";

    fn scenario_a() -> ([u8; 32], [u8; 32], [u8; 32], [u8; 32], [u8; 32]) {
        (h(MSG_HASH), h(R_HEX), h(S_HEX), h(QX_HEX), h(QY_HEX))
    }

    #[test]
    fn scenario_a_valid_signature() {
        let (hh, r, s, qx, qy) = scenario_a();
        assert!(verify_bytes(&hh, &r, &s, &qx, &qy));
    }

    #[test]
    fn scenario_b_malleable_s_still_verifies() {
        let (hh, r, s, qx, qy) = scenario_a();
        let s_u = field::from_be_bytes(&s);
        let n_minus_s = field::submod(&Curve::N, &s_u, &Curve::N);
        assert!(verify(
            &field::from_be_bytes(&hh),
            &field::from_be_bytes(&r),
            &n_minus_s,
            &field::from_be_bytes(&qx),
            &field::from_be_bytes(&qy),
        ));
    }

    #[test]
    fn scenario_c_zero_s_is_rejected() {
        let (hh, r, _s, qx, qy) = scenario_a();
        assert!(!verify_bytes(&hh, &r, &[0u8; 32], &qx, &qy));
    }

    #[test]
    fn scenario_d_pubkey_not_on_curve_is_rejected() {
        let (hh, r, s, qx, mut qy) = scenario_a();
        qy[31] ^= 1;
        assert!(!verify_bytes(&hh, &r, &s, &qx, &qy));
    }

    #[test]
    fn scenario_e_pubkey_at_infinity_is_rejected() {
        let (hh, r, s, _qx, _qy) = scenario_a();
        assert!(!verify_bytes(&hh, &r, &s, &[0u8; 32], &[0u8; 32]));
    }

    #[test]
    fn reject_zero_r() {
        let (hh, _r, s, qx, qy) = scenario_a();
        assert!(!verify_bytes(&hh, &[0u8; 32], &s, &qx, &qy));
    }

    #[test]
    fn reject_r_at_n() {
        let (hh, _r, s, qx, qy) = scenario_a();
        assert!(!verify_bytes(&hh, &field::to_be_bytes(&Curve::N), &s, &qx, &qy));
    }

    #[test]
    fn reject_s_at_n() {
        let (hh, r, _s, qx, qy) = scenario_a();
        assert!(!verify_bytes(&hh, &r, &field::to_be_bytes(&Curve::N), &qx, &qy));
    }

    #[test]
    fn single_bit_flip_in_digest_rejects() {
        let (mut hh, r, s, qx, qy) = scenario_a();
        hh[0] ^= 0x80;
        assert!(!verify_bytes(&hh, &r, &s, &qx, &qy));
    }

    #[test]
    fn single_bit_flip_in_r_rejects() {
        let (hh, mut r, s, qx, qy) = scenario_a();
        r[31] ^= 0x01;
        assert!(!verify_bytes(&hh, &r, &s, &qx, &qy));
    }

    #[test]
    fn single_bit_flip_in_s_rejects() {
        let (hh, r, mut s, qx, qy) = scenario_a();
        s[31] ^= 0x01;
        assert!(!verify_bytes(&hh, &r, &s, &qx, &qy));
    }

    #[test]
    fn pubkey_coordinate_at_or_above_p_is_rejected() {
        let (hh, r, s, _qx, qy) = scenario_a();
        let qx_at_p = field::to_be_bytes(&Curve::P);
        assert!(!verify_bytes(&hh, &r, &s, &qx_at_p, &qy));
    }

    #[test]
    fn purity_same_inputs_same_output() {
        let (hh, r, s, qx, qy) = scenario_a();
        let first = verify_bytes(&hh, &r, &s, &qx, &qy);
        let second = verify_bytes(&hh, &r, &s, &qx, &qy);
        assert_eq!(first, second);
        assert!(first);
    }
}
