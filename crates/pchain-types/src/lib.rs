//! ParallelChain client SDK - Blockchain data types.
//!
//! Plain data with borsh encodings matching the fullnode: transactions and
//! their commands, receipts, blocks, accounts, staking objects, and the
//! request/response pair of every RPC operation.

pub mod blockchain;
pub mod rpc;
pub mod staking;

pub use blockchain::*;
pub use rpc::*;
pub use staking::*;
