//! The closed table of RPC operations.
//!
//! Each operation is a zero-sized marker type implementing [`Operation`],
//! which ties together its endpoint path, HTTP method, request type and
//! response type. [`OperationKind`] enumerates the same set at runtime.

use borsh::{BorshDeserialize, BorshSerialize};

/// HTTP method used by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// No request body.
    Get,
    /// Binary request body.
    Post,
}

/// Every RPC operation a fullnode serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Submit a signed transaction to the mempool.
    SubmitTransaction,
    /// Read accounts and storage from world state.
    State,
    /// Execute a contract method without committing.
    View,
    /// Previous, current and next validator sets.
    ValidatorSets,
    /// Pools by operator.
    Pools,
    /// Stakes by (operator, owner).
    Stakes,
    /// Deposits by (operator, owner).
    Deposits,
    /// Full block by hash.
    Block,
    /// Block header by hash.
    BlockHeader,
    /// Block height for a block hash.
    BlockHeightByHash,
    /// Block hash for a block height.
    BlockHashByHeight,
    /// Hash of the highest committed block.
    HighestCommittedBlock,
    /// Transaction by hash, optionally with its receipt.
    Transaction,
    /// Receipt by transaction hash.
    Receipt,
    /// Block and position of a transaction.
    TransactionPosition,
}

impl OperationKind {
    /// All operations, in declaration order.
    pub const ALL: [OperationKind; 15] = [
        Self::SubmitTransaction,
        Self::State,
        Self::View,
        Self::ValidatorSets,
        Self::Pools,
        Self::Stakes,
        Self::Deposits,
        Self::Block,
        Self::BlockHeader,
        Self::BlockHeightByHash,
        Self::BlockHashByHeight,
        Self::HighestCommittedBlock,
        Self::Transaction,
        Self::Receipt,
        Self::TransactionPosition,
    ];

    /// Endpoint path suffix appended to the provider URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::SubmitTransaction => "submit_transaction",
            Self::State => "state",
            Self::View => "view",
            Self::ValidatorSets => "validator_sets",
            Self::Pools => "pools",
            Self::Stakes => "stakes",
            Self::Deposits => "deposits",
            Self::Block => "block",
            Self::BlockHeader => "block_header",
            Self::BlockHeightByHash => "block_height_by_hash",
            Self::BlockHashByHeight => "block_hash_by_height",
            Self::HighestCommittedBlock => "highest_committed_block",
            Self::Transaction => "transaction",
            Self::Receipt => "receipt",
            Self::TransactionPosition => "transaction_position",
        }
    }

    /// HTTP method of the operation.
    pub fn method(&self) -> Method {
        match self {
            Self::HighestCommittedBlock => Method::Get,
            _ => Method::Post,
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Static description of one RPC operation.
pub trait Operation {
    /// Which operation this is.
    const KIND: OperationKind;
    /// Request payload. `()` for operations without a body.
    type Request: BorshSerialize + Sync;
    /// Decoded response.
    type Response: BorshDeserialize;
}

macro_rules! operations {
    ($($name:ident => $request:ty, $response:ty;)*) => {
        $(
            #[doc = concat!("Marker for [`OperationKind::", stringify!($name), "`].")]
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl Operation for $name {
                const KIND: OperationKind = OperationKind::$name;
                type Request = $request;
                type Response = $response;
            }
        )*
    };
}

/// Marker types, one per operation.
pub mod ops {
    use super::{Operation, OperationKind};
    use pchain_types as t;

    operations! {
        SubmitTransaction => t::SubmitTransactionRequest, t::SubmitTransactionResponse;
        State => t::StateRequest, t::StateResponse;
        View => t::ViewRequest, t::ViewResponse;
        ValidatorSets => t::ValidatorSetsRequest, t::ValidatorSetsResponse;
        Pools => t::PoolsRequest, t::PoolsResponse;
        Stakes => t::StakesRequest, t::StakesResponse;
        Deposits => t::DepositsRequest, t::DepositsResponse;
        Block => t::BlockRequest, t::BlockResponse;
        BlockHeader => t::BlockHeaderRequest, t::BlockHeaderResponse;
        BlockHeightByHash => t::BlockHeightByHashRequest, t::BlockHeightByHashResponse;
        BlockHashByHeight => t::BlockHashByHeightRequest, t::BlockHashByHeightResponse;
        HighestCommittedBlock => (), t::HighestCommittedBlockResponse;
        Transaction => t::TransactionRequest, t::TransactionResponse;
        Receipt => t::ReceiptRequest, t::ReceiptResponse;
        TransactionPosition => t::TransactionPositionRequest, t::TransactionPositionResponse;
    }
}
