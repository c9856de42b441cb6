//! Server error codes and their classification.
//!
//! Fullnodes report failures with a numeric code in the body of a 400 or 500
//! response. [`ErrorCategory::classify`] maps any code to a category; it is a
//! total function and never fails.

use serde::Deserialize;

/// Error codes a fullnode is known to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ResponseCode {
    /// The request body or query parameter is not valid base64url / binary input.
    InputDecodeFailure = 0x44C,
    /// Unknown route or malformed query string.
    IncorrectUrlAndQueryParams = 0x44E,
    /// The view service channel is saturated.
    ViewServiceChannelError = 0x57D,
    /// The view service did not answer in time.
    ViewServiceRequestTimeout = 0x57E,
}

impl ResponseCode {
    /// Look up a known code.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0x44C => Some(Self::InputDecodeFailure),
            0x44E => Some(Self::IncorrectUrlAndQueryParams),
            0x57D => Some(Self::ViewServiceChannelError),
            0x57E => Some(Self::ViewServiceRequestTimeout),
            _ => None,
        }
    }

    /// Returns the integer code used on the wire.
    pub fn as_code(&self) -> u32 {
        *self as u32
    }

    /// The HTTP status class this code is reported under (400 or 500).
    pub fn status_class(&self) -> u16 {
        match self {
            Self::InputDecodeFailure | Self::IncorrectUrlAndQueryParams => 400,
            Self::ViewServiceChannelError | Self::ViewServiceRequestTimeout => 500,
        }
    }

    /// The diagnostic category of this code.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputDecodeFailure => ErrorCategory::MalformedInput,
            Self::IncorrectUrlAndQueryParams => ErrorCategory::MalformedUrl,
            Self::ViewServiceChannelError => ErrorCategory::ServerBusy,
            Self::ViewServiceRequestTimeout => ErrorCategory::RequestTimeout,
        }
    }
}

/// Diagnostic category of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The input was not encoded the way the server expects.
    MalformedInput,
    /// The URL or its query parameters were wrong.
    MalformedUrl,
    /// The server was too busy to accept the request.
    ServerBusy,
    /// The server timed out handling the request.
    RequestTimeout,
    /// Any other server error.
    Unclassified,
}

impl ErrorCategory {
    /// Classify a server error code. Unknown codes are [`ErrorCategory::Unclassified`].
    pub fn classify(code: u32) -> Self {
        ResponseCode::from_code(code)
            .map(|c| c.category())
            .unwrap_or(ErrorCategory::Unclassified)
    }

    /// Human-readable description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            Self::MalformedInput => {
                "Input query parameter is not a pchain_types::Base64URL encoded string."
            }
            Self::MalformedUrl => "Incorrect url or query parameters.",
            Self::ServerBusy => {
                "Internal Server Error. Server busy and failed to handle new request."
            }
            Self::RequestTimeout => "Internal Server Error. Request Timeout",
            Self::Unclassified => "Server Error Occurred",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    code: u32,
}

/// Pull a server error code out of a failure body.
///
/// Accepts a bare decimal integer (surrounding whitespace ignored) or a JSON
/// object with a numeric `code` field.
pub fn extract_code(body: &[u8]) -> Option<u32> {
    let text = std::str::from_utf8(body).ok()?.trim();
    if let Ok(code) = text.parse::<u32>() {
        return Some(code);
    }
    serde_json::from_str::<ErrorBody>(text).ok().map(|b| b.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_classify() {
        assert_eq!(ErrorCategory::classify(1100), ErrorCategory::MalformedInput);
        assert_eq!(ErrorCategory::classify(1102), ErrorCategory::MalformedUrl);
        assert_eq!(ErrorCategory::classify(1405), ErrorCategory::ServerBusy);
        assert_eq!(ErrorCategory::classify(1406), ErrorCategory::RequestTimeout);
    }

    #[test]
    fn test_unknown_codes_fall_through() {
        for code in [0, 1, 400, 500, 1101, 1404, 1407, u32::MAX] {
            assert_eq!(ErrorCategory::classify(code), ErrorCategory::Unclassified);
        }
        assert_eq!(
            ErrorCategory::classify(42).to_string(),
            "Server Error Occurred"
        );
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            ErrorCategory::MalformedInput.to_string(),
            "Input query parameter is not a pchain_types::Base64URL encoded string."
        );
        assert_eq!(
            ErrorCategory::MalformedUrl.to_string(),
            "Incorrect url or query parameters."
        );
        assert_eq!(
            ErrorCategory::ServerBusy.to_string(),
            "Internal Server Error. Server busy and failed to handle new request."
        );
        assert_eq!(
            ErrorCategory::RequestTimeout.to_string(),
            "Internal Server Error. Request Timeout"
        );
    }

    #[test]
    fn test_code_roundtrip_and_status_class() {
        let codes = [
            ResponseCode::InputDecodeFailure,
            ResponseCode::IncorrectUrlAndQueryParams,
            ResponseCode::ViewServiceChannelError,
            ResponseCode::ViewServiceRequestTimeout,
        ];
        for code in codes {
            assert_eq!(ResponseCode::from_code(code.as_code()), Some(code));
        }
        assert_eq!(ResponseCode::InputDecodeFailure.status_class(), 400);
        assert_eq!(ResponseCode::ViewServiceRequestTimeout.status_class(), 500);
    }

    #[test]
    fn test_extract_code() {
        assert_eq!(extract_code(b"1405"), Some(1405));
        assert_eq!(extract_code(b"  1100\n"), Some(1100));
        assert_eq!(extract_code(br#"{"code": 1406, "message": "timeout"}"#), Some(1406));
        assert_eq!(extract_code(b"<html>Bad Gateway</html>"), None);
        assert_eq!(extract_code(b""), None);
        assert_eq!(extract_code(&[0xff, 0xfe]), None);
    }
}
