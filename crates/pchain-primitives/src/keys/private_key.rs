//! Ed25519 private keys.

use std::fmt;

use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;

use crate::base64url;
use crate::keys::public_address::PublicAddress;
use crate::PrimitivesError;

/// Length of a serialized private key in bytes.
pub const PRIVATE_KEY_LEN: usize = 32;

/// An ed25519 private key (the 32-byte seed).
///
/// `Debug` never prints key material.
#[derive(Clone)]
pub struct PrivateKey {
    /// The underlying dalek signing key.
    inner: SigningKey,
}

impl PrivateKey {
    /// Generate a new random private key using the OS random number generator.
    pub fn generate() -> Self {
        PrivateKey {
            inner: SigningKey::generate(&mut OsRng),
        }
    }

    /// Create a private key from its raw 32-byte seed.
    ///
    /// # Arguments
    /// * `bytes` - A 32-byte slice.
    ///
    /// # Returns
    /// `Ok(PrivateKey)`, or an error if the slice is not 32 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let seed: [u8; PRIVATE_KEY_LEN] = base64url::to_array(bytes).map_err(|_| {
            PrimitivesError::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_LEN,
                bytes.len()
            ))
        })?;
        Ok(PrivateKey {
            inner: SigningKey::from_bytes(&seed),
        })
    }

    /// Parse a private key from its base64url form.
    pub fn from_base64url(s: &str) -> Result<Self, PrimitivesError> {
        Self::from_bytes(&base64url::decode(s)?)
    }

    /// Serialize the private key as its 32-byte seed.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_LEN] {
        self.inner.to_bytes()
    }

    /// Render the private key as unpadded base64url.
    ///
    /// This is the canonical encoding used to compare keys.
    pub fn to_base64url(&self) -> String {
        base64url::encode(&self.to_bytes())
    }

    /// Derive the public address for this private key.
    pub fn public_address(&self) -> PublicAddress {
        PublicAddress::from(&self.inner.verifying_key())
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.inner
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_address", &self.public_address())
            .finish_non_exhaustive()
    }
}
