/// Unified error type for all primitives operations.
///
/// Covers errors from key parsing, signature handling and base64url decoding.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    #[error("invalid hash: {0}")]
    InvalidHash(String),

    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("invalid base64url: {0}")]
    InvalidBase64(String),

    #[error("public key does not match private key")]
    KeypairMismatch,
}

impl From<base64::DecodeError> for PrimitivesError {
    fn from(e: base64::DecodeError) -> Self {
        PrimitivesError::InvalidBase64(e.to_string())
    }
}
