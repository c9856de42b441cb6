#![deny(missing_docs)]

//! ParallelChain client SDK - Complete SDK.
//!
//! Re-exports all SDK components for convenient single-crate usage.

pub use pchain_primitives as primitives;
pub use pchain_rpc as rpc;
pub use pchain_types as types;
pub use pchain_wallet as wallet;

pub use pchain_rpc::RpcClient;
pub use pchain_wallet::Wallet;
