//! Keypair generation.

use std::future::Future;

use pchain_primitives::Keypair;

use crate::error::WalletError;

/// Source of new keypairs for [`Wallet::create`](crate::Wallet::create).
///
/// Tests substitute a deterministic generator; production code uses
/// [`OsRngGenerator`].
pub trait KeypairGenerator: Send + Sync {
    /// Produce one new keypair.
    fn generate(&self) -> impl Future<Output = Result<Keypair, WalletError>> + Send;
}

/// Draws ed25519 keys from the operating system's secure random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRngGenerator;

impl KeypairGenerator for OsRngGenerator {
    async fn generate(&self) -> Result<Keypair, WalletError> {
        Ok(Keypair::generate())
    }
}
