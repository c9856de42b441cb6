//! 32-byte account and contract addresses.

use std::fmt;
use std::str::FromStr;

use ed25519_dalek::{Verifier, VerifyingKey};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::base64url;
use crate::hash::sha256;
use crate::keys::signature::Signature;
use crate::PrimitivesError;

/// Length of a public address in bytes.
pub const PUBLIC_ADDRESS_LEN: usize = 32;

/// An account or contract address.
///
/// For external accounts this is the raw ed25519 public key. Contract
/// addresses are derived with [`PublicAddress::contract_address`] and are not
/// valid curve points.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default,
    Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct PublicAddress([u8; PUBLIC_ADDRESS_LEN]);

impl PublicAddress {
    /// Create an address from a raw 32-byte array.
    pub fn new(bytes: [u8; PUBLIC_ADDRESS_LEN]) -> Self {
        PublicAddress(bytes)
    }

    /// Create an address from a byte slice.
    ///
    /// # Arguments
    /// * `bytes` - A slice that must be exactly 32 bytes.
    ///
    /// # Returns
    /// `Ok(PublicAddress)` on success, or `InvalidKeyLength`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        Ok(PublicAddress(base64url::to_array(bytes)?))
    }

    /// Parse an address from its base64url form.
    pub fn from_base64url(s: &str) -> Result<Self, PrimitivesError> {
        Ok(PublicAddress(base64url::decode_array(s)?))
    }

    /// Render the address as unpadded base64url.
    pub fn to_base64url(&self) -> String {
        base64url::encode(&self.0)
    }

    /// Borrow the raw address bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_ADDRESS_LEN] {
        &self.0
    }

    /// Derive the address of a contract deployed by this account.
    ///
    /// The contract address is `sha256(address || nonce_le_u64)`, where
    /// `nonce` is the deploying account's nonce at the time of deployment.
    ///
    /// # Arguments
    /// * `nonce` - Nonce of the deploying transaction.
    ///
    /// # Returns
    /// The derived contract address.
    pub fn contract_address(&self, nonce: u64) -> PublicAddress {
        let mut pre_image = Vec::with_capacity(PUBLIC_ADDRESS_LEN + 8);
        pre_image.extend_from_slice(&self.0);
        pre_image.extend_from_slice(&nonce.to_le_bytes());
        PublicAddress(*sha256(&pre_image).as_bytes())
    }

    /// Verify an ed25519 signature made by the key behind this address.
    ///
    /// # Returns
    /// `true` if the signature is valid for `message`. Addresses that are not
    /// valid curve points (such as contract addresses) never verify.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let Ok(key) = VerifyingKey::from_bytes(&self.0) else {
            return false;
        };
        key.verify(message, &signature.to_dalek()).is_ok()
    }
}

impl fmt::Display for PublicAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base64url())
    }
}

impl FromStr for PublicAddress {
    type Err = PrimitivesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base64url(s)
    }
}

impl From<[u8; PUBLIC_ADDRESS_LEN]> for PublicAddress {
    fn from(bytes: [u8; PUBLIC_ADDRESS_LEN]) -> Self {
        PublicAddress(bytes)
    }
}

impl From<&VerifyingKey> for PublicAddress {
    fn from(key: &VerifyingKey) -> Self {
        PublicAddress(key.to_bytes())
    }
}
