//! JSON keypair records.
//!
//! A record is a JSON object holding both halves of a keypair as base64url
//! strings:
//!
//! ```json
//! { "public_key": "oK8Kvd-2cWYloQaPNlGtG3Q5dV6JFKzVrXOAhBRt5hs", "private_key": "..." }
//! ```

use serde::{Deserialize, Serialize};

use pchain_primitives::Keypair;

use crate::error::WalletError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypairRecord {
    pub public_key: String,
    pub private_key: String,
}

impl KeypairRecord {
    /// Parse a record from JSON text.
    pub fn from_json(text: &str) -> Result<Self, WalletError> {
        serde_json::from_str(text).map_err(|e| WalletError::MalformedKeypair(e.to_string()))
    }

    /// Render the record as JSON.
    pub fn to_json(&self) -> String {
        // Two plain string fields; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Rebuild the keypair, checking that both halves belong together.
    pub fn to_keypair(&self) -> Result<Keypair, WalletError> {
        Keypair::from_base64url(&self.public_key, &self.private_key)
            .map_err(|e| WalletError::MalformedKeypair(e.to_string()))
    }
}

impl From<&Keypair> for KeypairRecord {
    fn from(keypair: &Keypair) -> Self {
        Self {
            public_key: keypair.public_key().to_base64url(),
            private_key: keypair.private_key().to_base64url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_rebuilds_keypair() {
        let keypair = Keypair::generate();
        let record = KeypairRecord::from(&keypair);
        let parsed = KeypairRecord::from_json(&record.to_json()).unwrap();
        assert_eq!(parsed.to_keypair().unwrap(), keypair);
    }

    #[test]
    fn test_invalid_json() {
        let err = KeypairRecord::from_json("{ not json").unwrap_err();
        assert!(matches!(err, WalletError::MalformedKeypair(_)));
    }

    #[test]
    fn test_missing_field() {
        let err = KeypairRecord::from_json(r#"{"public_key": "abc"}"#).unwrap_err();
        assert!(err.to_string().contains("private_key"));
    }

    #[test]
    fn test_mismatched_halves() {
        let a = KeypairRecord::from(&Keypair::generate());
        let b = KeypairRecord::from(&Keypair::generate());
        let mixed = KeypairRecord {
            public_key: a.public_key,
            private_key: b.private_key,
        };
        assert!(matches!(
            mixed.to_keypair(),
            Err(WalletError::MalformedKeypair(_))
        ));
    }

    #[test]
    fn test_short_key() {
        let record = KeypairRecord {
            public_key: "AAAA".to_string(),
            private_key: "AAAA".to_string(),
        };
        assert!(record.to_keypair().is_err());
    }
}
