//! Ed25519 keypairs identifying one on-chain account.

use ed25519_dalek::Signer;

use crate::keys::private_key::PrivateKey;
use crate::keys::public_address::PublicAddress;
use crate::keys::signature::Signature;
use crate::PrimitivesError;

/// A public/private key pair.
///
/// The public half is always the key derived from the private half;
/// [`Keypair::new`] rejects pairs that do not match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keypair {
    public_key: PublicAddress,
    private_key: PrivateKey,
}

impl Keypair {
    /// Build a keypair from both halves, checking that they belong together.
    ///
    /// # Returns
    /// `Err(PrimitivesError::KeypairMismatch)` if `public_key` is not the key
    /// derived from `private_key`.
    pub fn new(public_key: PublicAddress, private_key: PrivateKey) -> Result<Self, PrimitivesError> {
        if private_key.public_address() != public_key {
            return Err(PrimitivesError::KeypairMismatch);
        }
        Ok(Keypair {
            public_key,
            private_key,
        })
    }

    /// Generate a fresh keypair from the OS random number generator.
    pub fn generate() -> Self {
        Self::from_private_key(PrivateKey::generate())
    }

    /// Derive the keypair for a private key.
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        Keypair {
            public_key: private_key.public_address(),
            private_key,
        }
    }

    /// Rebuild a keypair from base64url-encoded halves.
    ///
    /// # Arguments
    /// * `public_key` - Base64url public address.
    /// * `private_key` - Base64url private key seed.
    pub fn from_base64url(public_key: &str, private_key: &str) -> Result<Self, PrimitivesError> {
        let public_key = PublicAddress::from_base64url(public_key)?;
        let private_key = PrivateKey::from_base64url(private_key)?;
        Self::new(public_key, private_key)
    }

    pub fn public_key(&self) -> &PublicAddress {
        &self.public_key
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Sign a message with the private key.
    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature::from(self.private_key.signing_key().sign(message))
    }

    /// Verify a signature against this keypair's public key.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.public_key.verify(message, signature)
    }
}
