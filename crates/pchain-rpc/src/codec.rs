//! Request encoding and response decoding.

use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::CodecError;

/// Converts typed requests to bytes and bytes to typed responses.
pub trait Codec: Send + Sync {
    /// Serialize a request body.
    fn encode<T: BorshSerialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    /// Deserialize a response body. Trailing bytes are an error.
    fn decode<T: BorshDeserialize>(&self, bytes: &[u8]) -> Result<T, CodecError>;
}

/// Codec for the fullnode's borsh wire format.
///
/// Integers are little-endian, collection lengths are `u32`, enum and
/// `Option` tags are one byte, and fixed-size arrays are raw bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorshCodec;

impl Codec for BorshCodec {
    fn encode<T: BorshSerialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        borsh::to_vec(value).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode<T: BorshDeserialize>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        borsh::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}
