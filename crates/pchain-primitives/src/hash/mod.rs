//! Hash primitives.
//!
//! ParallelChain identifies blocks and transactions by SHA-256 digests,
//! displayed as base64url.

use std::fmt;
use std::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::base64url;
use crate::PrimitivesError;

/// Size of a SHA-256 digest in bytes.
pub const HASH_SIZE: usize = 32;

/// Compute the SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// The 32-byte digest as a [`Sha256Hash`].
pub fn sha256(data: &[u8]) -> Sha256Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Sha256Hash(hasher.finalize().into())
}

/// A 32-byte SHA-256 digest used for block hashes, transaction hashes and
/// storage hashes.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default,
    Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct Sha256Hash([u8; HASH_SIZE]);

impl Sha256Hash {
    /// Create a hash from a raw 32-byte array.
    pub fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Sha256Hash(bytes)
    }

    /// Create a hash from a byte slice.
    ///
    /// # Returns
    /// `Ok(Sha256Hash)` if the slice is 32 bytes, or an error otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        let arr = base64url::to_array(bytes).map_err(|_| {
            PrimitivesError::InvalidHash(format!(
                "invalid hash length of {}, want {}",
                bytes.len(),
                HASH_SIZE
            ))
        })?;
        Ok(Sha256Hash(arr))
    }

    /// Parse a hash from its base64url form.
    pub fn from_base64url(s: &str) -> Result<Self, PrimitivesError> {
        Self::from_bytes(&base64url::decode(s)?)
    }

    /// Render the hash as unpadded base64url.
    pub fn to_base64url(&self) -> String {
        base64url::encode(&self.0)
    }

    /// Render the hash as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Borrow the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }
}

impl fmt::Display for Sha256Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base64url())
    }
}

impl FromStr for Sha256Hash {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base64url(s)
    }
}

impl From<[u8; HASH_SIZE]> for Sha256Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Sha256Hash(bytes)
    }
}

impl AsRef<[u8]> for Sha256Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
