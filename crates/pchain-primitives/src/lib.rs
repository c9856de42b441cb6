/// ParallelChain client SDK - Cryptographic primitives and encodings.
///
/// This crate provides the foundational building blocks for the client SDK:
/// - SHA-256 hashing and the `Sha256Hash` type used for block and transaction hashes
/// - Base64url (unpadded) encoding, the textual form of every key and hash
/// - Ed25519 keys: `PublicAddress`, `PrivateKey`, `Keypair` and `Signature`
/// - Contract address derivation from an account address and nonce

pub mod hash;
pub mod base64url;
pub mod keys;

mod error;
pub use error::PrimitivesError;

pub use hash::{sha256, Sha256Hash};
pub use keys::{Keypair, PrivateKey, PublicAddress, Signature};
