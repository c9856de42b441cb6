//! Ed25519 signatures.

use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::base64url;
use crate::PrimitivesError;

/// Length of a serialized ed25519 signature in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// A 64-byte ed25519 signature.
///
/// Both the serde and borsh encodings are the 64 raw bytes with no length
/// prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize)]
pub struct Signature([u8; SIGNATURE_LEN]);

impl Signature {
    /// Create a signature from raw bytes.
    pub fn new(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Signature(bytes)
    }

    /// Create a signature from a byte slice.
    ///
    /// # Returns
    /// `Ok(Signature)` if the slice is 64 bytes, or an error otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let arr = base64url::to_array(bytes).map_err(|_| {
            PrimitivesError::InvalidSignature(format!(
                "expected {} bytes, got {}",
                SIGNATURE_LEN,
                bytes.len()
            ))
        })?;
        Ok(Signature(arr))
    }

    /// Parse a signature from its base64url form.
    pub fn from_base64url(s: &str) -> Result<Self, PrimitivesError> {
        Self::from_bytes(&base64url::decode(s)?)
    }

    /// Render the signature as unpadded base64url.
    pub fn to_base64url(&self) -> String {
        base64url::encode(&self.0)
    }

    /// Borrow the raw signature bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    pub(crate) fn to_dalek(self) -> ed25519_dalek::Signature {
        ed25519_dalek::Signature::from_bytes(&self.0)
    }
}

impl Default for Signature {
    fn default() -> Self {
        Signature([0u8; SIGNATURE_LEN])
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.to_base64url())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base64url())
    }
}

impl From<ed25519_dalek::Signature> for Signature {
    fn from(sig: ed25519_dalek::Signature) -> Self {
        Signature(sig.to_bytes())
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(SIGNATURE_LEN)?;
        for byte in &self.0 {
            tuple.serialize_element(byte)?;
        }
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SignatureVisitor;

        impl<'de> Visitor<'de> for SignatureVisitor {
            type Value = Signature;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} signature bytes", SIGNATURE_LEN)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Signature, A::Error> {
                let mut bytes = [0u8; SIGNATURE_LEN];
                for (i, byte) in bytes.iter_mut().enumerate() {
                    *byte = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                Ok(Signature(bytes))
            }
        }

        deserializer.deserialize_tuple(SIGNATURE_LEN, SignatureVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_wrong_length() {
        assert!(Signature::from_bytes(&[0u8; 63]).is_err());
        assert!(Signature::from_bytes(&[0u8; 64]).is_ok());
    }

    #[test]
    fn test_borsh_is_fixed_width() {
        let sig = Signature::new([9u8; SIGNATURE_LEN]);
        let bytes = borsh::to_vec(&sig).unwrap();
        assert_eq!(bytes, vec![9u8; SIGNATURE_LEN]);
        let back: Signature = borsh::from_slice(&bytes).unwrap();
        assert_eq!(back, sig);
    }
}
