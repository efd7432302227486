use crate::field::U256;

/// P-256 (secp256r1) curve constants.
///
/// All constants are little-endian `u64` limb arrays (see [`crate::field`]),
/// derived from the big-endian hex values in the NIST P-256 parameter set.
pub struct Curve;

impl Curve {
    /// ### Base field prime `p`
    ///
    /// `0xFFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF`
    ///
    /// Defines the finite field `GF(p)` over which the curve is defined. All
    /// affine and XYZZ point arithmetic is performed modulo this prime.
    pub const P: U256 = [
        0xFFFFFFFFFFFFFFFF,
        0x00000000FFFFFFFF,
        0x0000000000000000,
        0xFFFFFFFF00000001,
    ];

    /// `p - 2`, the Fermat inversion exponent for `GF(p)`.
    pub const P_MINUS_2: U256 = [
        0xFFFFFFFFFFFFFFFD,
        0x00000000FFFFFFFF,
        0x0000000000000000,
        0xFFFFFFFF00000001,
    ];

    /// ### Curve order `n`
    ///
    /// `0xFFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551`
    ///
    /// The order of the cyclic group generated by the base point `G`. Valid
    /// signature scalars `r` and `s` lie in `(0, n)`.
    pub const N: U256 = [
        0xF3B9CAC2FC632551,
        0xBCE6FAADA7179E84,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFF00000000,
    ];

    /// `n - 2`, the Fermat inversion exponent for `GF(n)`.
    pub const N_MINUS_2: U256 = [
        0xF3B9CAC2FC63254F,
        0xBCE6FAADA7179E84,
        0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFF00000000,
    ];

    /// ### Curve coefficient `a`
    ///
    /// `a = p - 3` for P-256, `0xFFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC`
    pub const A: U256 = [
        0xFFFFFFFFFFFFFFFC,
        0x00000000FFFFFFFF,
        0x0000000000000000,
        0xFFFFFFFF00000001,
    ];

    /// ### Curve coefficient `b`
    ///
    /// `0x5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B`
    pub const B: U256 = [
        0x3BCE3C3E27D2604B,
        0x651D06B0CC53B0F6,
        0xB3EBBD55769886BC,
        0x5AC635D8AA3A93E7,
    ];

    /// ### Generator point `G`, x-coordinate
    pub const GX: U256 = [
        0xF4A13945D898C296,
        0x77037D812DEB33A0,
        0xF8BCE6E563A440F2,
        0x6B17D1F2E12C4247,
    ];

    /// ### Generator point `G`, y-coordinate
    pub const GY: U256 = [
        0xCBB6406837BF51F5,
        0x2BCE33576B315ECE,
        0x8EE7EB4A7C0F9E16,
        0x4FE342E2FE1A7F9B,
    ];
}
