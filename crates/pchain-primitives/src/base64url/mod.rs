//! Base64url encoding and decoding.
//!
//! ParallelChain renders every key, address, hash and signature as
//! URL-safe base64 without padding. Decoding is lenient about trailing
//! `=` padding so that records produced by other tooling still parse.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::PrimitivesError;

/// Encode a byte slice to an unpadded base64url string.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// The base64url string.
pub fn encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Decode a base64url string, with or without trailing padding.
///
/// # Arguments
/// * `s` - The base64url string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or an error for characters outside the alphabet.
pub fn decode(s: &str) -> Result<Vec<u8>, PrimitivesError> {
    Ok(URL_SAFE_NO_PAD.decode(s.trim_end_matches('='))?)
}

/// Decode a base64url string into a fixed-size array.
///
/// # Arguments
/// * `s` - The base64url string to decode.
///
/// # Returns
/// The decoded array, or `InvalidKeyLength` if the decoded length differs from `N`.
pub fn decode_array<const N: usize>(s: &str) -> Result<[u8; N], PrimitivesError> {
    let bytes = decode(s)?;
    to_array(&bytes)
}

pub(crate) fn to_array<const N: usize>(bytes: &[u8]) -> Result<[u8; N], PrimitivesError> {
    bytes.try_into().map_err(|_| PrimitivesError::InvalidKeyLength {
        expected: N,
        got: bytes.len(),
    })
}
