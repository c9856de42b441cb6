//! Error types for RPC operations.

use crate::response_code::ErrorCategory;

/// Failure to move bytes to or from the provider.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed (connection, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// A text-mode response body was not valid UTF-8.
    #[error("response body is not valid UTF-8")]
    InvalidText,

    /// Any other transport failure, typically raised by custom transports.
    #[error("transport error: {0}")]
    Other(String),
}

/// Failure to encode a request or decode a response.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The request could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(String),

    /// The response bytes did not match the expected response shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Errors returned by [`RpcClient`](crate::RpcClient) methods.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced an HTTP response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Non-200 response whose body carried no recognizable error code.
    #[error("request failed ({status_code}): {message}")]
    Status {
        /// HTTP status code.
        status_code: u16,
        /// HTTP status text.
        message: String,
    },

    /// Non-200 response carrying a server error code.
    #[error("{category} (code {code}, status {status_code})")]
    Server {
        /// HTTP status code.
        status_code: u16,
        /// Numeric error code reported by the server.
        code: u32,
        /// Category the code classifies into.
        category: ErrorCategory,
    },

    /// Request encoding or response decoding failed.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl ClientError {
    /// The diagnostic category of this error.
    ///
    /// Only server-reported codes classify into a specific category; every
    /// other failure is [`ErrorCategory::Unclassified`].
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::Server { category, .. } => *category,
            _ => ErrorCategory::Unclassified,
        }
    }

    /// The HTTP status code, if the provider answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Status { status_code, .. } | ClientError::Server { status_code, .. } => {
                Some(*status_code)
            }
            _ => None,
        }
    }
}
