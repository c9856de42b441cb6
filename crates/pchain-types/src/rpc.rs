//! Request and response shapes of every RPC operation.
//!
//! Responses are partially optional: `None` means the node does not know the
//! requested object, not that the call failed.

use std::collections::{BTreeMap, BTreeSet};

use borsh::{BorshDeserialize, BorshSerialize};

use pchain_primitives::{PublicAddress, Sha256Hash};

use crate::blockchain::{Account, Block, BlockHeader, CommandReceipt, Receipt, Transaction};
use crate::staking::{Deposit, OperatorOwner, Pool, Stake, ValidatorSet};

// === submit_transaction ===

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct SubmitTransactionRequest {
    pub transaction: Transaction,
}

/// Why the mempool refused a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, thiserror::Error)]
pub enum SubmitTransactionError {
    #[error("transaction nonce is not acceptable")]
    UnacceptableNonce,
    #[error("mempool is full")]
    MempoolFull,
    #[error("transaction rejected")]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct SubmitTransactionResponse {
    pub error: Option<SubmitTransactionError>,
}

// === state ===

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct StateRequest {
    pub accounts: BTreeSet<PublicAddress>,
    pub include_contract: bool,
    pub storage_keys: BTreeMap<PublicAddress, BTreeSet<Vec<u8>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct StateResponse {
    pub accounts: BTreeMap<PublicAddress, Account>,
    pub storage_tuples: BTreeMap<PublicAddress, BTreeMap<Vec<u8>, Vec<u8>>>,
    pub block_hash: Sha256Hash,
}

// === view ===

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ViewRequest {
    pub target: PublicAddress,
    pub method: String,
    pub arguments: Option<Vec<Vec<u8>>>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ViewResponse {
    pub receipt: CommandReceipt,
}

// === validator_sets ===

/// Which validator sets to return, and whether each should list its
/// delegated stakes.
#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ValidatorSetsRequest {
    pub include_prev: bool,
    pub include_prev_delegators: bool,
    pub include_curr: bool,
    pub include_curr_delegators: bool,
    pub include_next: bool,
    pub include_next_delegators: bool,
}

/// Each set is `None` when it was not requested. For the previous set the
/// inner `Option` is whether it exists; there is none in the first epoch.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ValidatorSetsResponse {
    pub previous_validator_set: Option<Option<ValidatorSet>>,
    pub current_validator_set: Option<ValidatorSet>,
    pub next_validator_set: Option<ValidatorSet>,
    pub block_hash: Sha256Hash,
}

// === pools ===

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PoolsRequest {
    pub operators: BTreeSet<PublicAddress>,
    pub include_stakes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PoolsResponse {
    pub pools: BTreeMap<PublicAddress, Option<Pool>>,
    pub block_hash: Sha256Hash,
}

// === stakes ===

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct StakesRequest {
    pub stakes: BTreeSet<OperatorOwner>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct StakesResponse {
    pub stakes: BTreeMap<OperatorOwner, Option<Stake>>,
    pub block_hash: Sha256Hash,
}

// === deposits ===

#[derive(Debug, Clone, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct DepositsRequest {
    pub deposits: BTreeSet<OperatorOwner>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct DepositsResponse {
    pub deposits: BTreeMap<OperatorOwner, Option<Deposit>>,
    pub block_hash: Sha256Hash,
}

// === blocks ===

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct BlockRequest {
    pub block_hash: Sha256Hash,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct BlockResponse {
    pub block: Option<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct BlockHeaderRequest {
    pub block_hash: Sha256Hash,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct BlockHeaderResponse {
    pub block_header: Option<BlockHeader>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct BlockHeightByHashRequest {
    pub block_hash: Sha256Hash,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct BlockHeightByHashResponse {
    pub block_hash: Sha256Hash,
    pub block_height: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct BlockHashByHeightRequest {
    pub block_height: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct BlockHashByHeightResponse {
    pub block_height: u64,
    pub block_hash: Option<Sha256Hash>,
}

/// `block_hash` is `None` only before genesis has been committed.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct HighestCommittedBlockResponse {
    pub block_hash: Option<Sha256Hash>,
}

// === transactions ===

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct TransactionRequest {
    pub transaction_hash: Sha256Hash,
    pub include_receipt: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct TransactionResponse {
    pub transaction: Option<Transaction>,
    pub receipt: Option<Receipt>,
    pub block_hash: Option<Sha256Hash>,
    pub position: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ReceiptRequest {
    pub transaction_hash: Sha256Hash,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ReceiptResponse {
    pub transaction_hash: Sha256Hash,
    pub receipt: Option<Receipt>,
    pub block_hash: Option<Sha256Hash>,
    pub position: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct TransactionPositionRequest {
    pub transaction_hash: Sha256Hash,
}

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct TransactionPositionResponse {
    pub transaction_hash: Sha256Hash,
    pub block_hash: Option<Sha256Hash>,
    pub position: Option<u32>,
}
