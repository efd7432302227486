use thiserror::Error;

/// Errors surfaced by the lower-level building blocks of the P-256 kernel.
///
/// Nothing in the public `verify`/`verify_packed` surface returns this type —
/// every variant is folded into a plain `false` (or the zero word, for the
/// calling surface) at the boundary, per the verifier's single-bit
/// valid/not-valid contract. It exists because the building blocks
/// underneath (`AffinePoint` validation, fixed-width input decoding) have a
/// natural `Result` shape before that collapse happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Secp256r1Error {
    /// A scalar (`r` or `s`) was zero or outside `[1, n)`.
    #[error("scalar out of range [1, n)")]
    InvalidScalar,
    /// A public key coordinate was out of range, off-curve, or at infinity.
    #[error("public key is not a valid curve point")]
    InvalidPublicKey,
    /// The calling-surface input blob was not exactly 160 bytes.
    #[error("expected a 160-byte input, got a different length")]
    InvalidInputLength,
}
