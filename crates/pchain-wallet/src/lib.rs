/// ParallelChain client SDK - Wallet.
///
/// Holds the keypairs of the accounts a client can sign for and tracks which
/// one is active. Keypair generation is pluggable through
/// [`KeypairGenerator`]; keypairs can also be imported from JSON records.
///
/// A `Wallet` is single-owner: every mutating method takes `&mut self`.

mod error;
pub use error::WalletError;

pub mod generator;
pub mod record;
pub mod wallet;

pub use generator::{KeypairGenerator, OsRngGenerator};
pub use record::KeypairRecord;
pub use wallet::{ImportFailure, ImportReport, Wallet};
