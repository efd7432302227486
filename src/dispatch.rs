//! ### Dispatcher
//!
//! The calling surface: decodes a fixed 160-byte input blob into the five
//! 32-byte big-endian words the verifier needs, and encodes the boolean
//! result as a 32-byte big-endian word. A malformed (wrong-length) input
//! produces the zero word without touching the verification kernel.
//!
//! Grounded on the EIP-7951 `P256VERIFY` precompile calling convention:
//! `h || r || s || qx || qy`, each a 32-byte big-endian word, output
//! `0x...01` for valid / `0x...00` otherwise.

use crate::errors::Secp256r1Error;
use crate::verify::verify_bytes;

const INPUT_LEN: usize = 160;
const WORD_LEN: usize = 32;

const SUCCESS_WORD: [u8; 32] = {
    let mut w = [0u8; 32];
    w[31] = 1;
    w
};
const FAILURE_WORD: [u8; 32] = [0u8; 32];

/// Verifies a packed 160-byte `h || r || s || qx || qy` blob, returning the
/// 32-byte big-endian result word (`0x...01` valid, `0x...00` otherwise).
///
/// Any input whose length is not exactly 160 bytes returns the zero word,
/// with no error signalled; this is the only validation performed at this
/// layer.
#[cfg_attr(feature = "instrumentation", tracing::instrument(skip(input)))]
pub fn verify_packed(input: &[u8]) -> [u8; 32] {
    let words = match split_input(input) {
        Ok(words) => words,
        Err(_) => {
            #[cfg(feature = "instrumentation")]
            tracing::trace!(input_len = input.len(), valid = false, "malformed input length");
            return FAILURE_WORD;
        }
    };

    let valid = verify_bytes(&words[0], &words[1], &words[2], &words[3], &words[4]);

    #[cfg(feature = "instrumentation")]
    tracing::trace!(input_len = input.len(), valid, "verification complete");

    encode_result(valid)
}

/// Splits a 160-byte input into five 32-byte big-endian words, or
/// `Err(InvalidInputLength)` if the input is not exactly 160 bytes long.
fn split_input(input: &[u8]) -> Result<[[u8; 32]; 5], Secp256r1Error> {
    if input.len() != INPUT_LEN {
        return Err(Secp256r1Error::InvalidInputLength);
    }
    let mut words = [[0u8; WORD_LEN]; 5];
    for (i, word) in words.iter_mut().enumerate() {
        word.copy_from_slice(&input[i * WORD_LEN..(i + 1) * WORD_LEN]);
    }
    Ok(words)
}

fn encode_result(valid: bool) -> [u8; 32] {
    if valid {
        SUCCESS_WORD
    } else {
        FAILURE_WORD
    }
}
