//! Ed25519 account keys.
//!
//! A ParallelChain account is identified by its 32-byte ed25519 public key
//! (its [`PublicAddress`]); the matching [`PrivateKey`] signs transactions.

pub mod public_address;
pub mod private_key;
pub mod keypair;
pub mod signature;

pub use keypair::Keypair;
pub use private_key::PrivateKey;
pub use public_address::PublicAddress;
pub use signature::Signature;
