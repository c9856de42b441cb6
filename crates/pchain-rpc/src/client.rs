//! Typed RPC client for ParallelChain fullnodes.

use pchain_types::{
    BlockHashByHeightRequest, BlockHashByHeightResponse, BlockHeaderRequest, BlockHeaderResponse,
    BlockHeightByHashRequest, BlockHeightByHashResponse, BlockRequest, BlockResponse,
    DepositsRequest, DepositsResponse, HighestCommittedBlockResponse, PoolsRequest, PoolsResponse,
    ReceiptRequest, ReceiptResponse, StakesRequest, StakesResponse, StateRequest, StateResponse,
    SubmitTransactionRequest, SubmitTransactionResponse, TransactionPositionRequest,
    TransactionPositionResponse, TransactionRequest, TransactionResponse, ValidatorSetsRequest,
    ValidatorSetsResponse, ViewRequest, ViewResponse,
};
use tracing::{debug, warn};

use crate::codec::{BorshCodec, Codec};
use crate::error::ClientError;
use crate::operation::{ops, Method, Operation};
use crate::response_code::{extract_code, ErrorCategory};
use crate::transport::{HttpTransport, ResponseType, Transport, TransportResponse};
use crate::types::RpcConfig;

/// Client for the fullnode RPC API.
///
/// Each call is an independent request/response round trip: no retries, no
/// caching. Clients with different providers can coexist freely.
#[derive(Debug, Clone)]
pub struct RpcClient<T = HttpTransport, C = BorshCodec> {
    /// Base URL of the RPC service.
    provider: String,
    /// Moves bytes to and from the provider.
    transport: T,
    /// Encodes requests and decodes responses.
    codec: C,
}

impl RpcClient {
    /// Create a client for `provider` over HTTP with the borsh codec.
    pub fn new(provider: impl Into<String>) -> Self {
        Self::with_parts(provider, HttpTransport::new(), BorshCodec)
    }

    /// Create a client from an [`RpcConfig`].
    pub fn from_config(config: RpcConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::from_config(&config)?;
        Ok(Self::with_parts(config.provider, transport, BorshCodec))
    }
}

impl<T: Transport, C: Codec> RpcClient<T, C> {
    /// Create a client with a custom transport and codec.
    pub fn with_parts(provider: impl Into<String>, transport: T, codec: C) -> Self {
        Self {
            provider: provider.into(),
            transport,
            codec,
        }
    }

    /// Base URL of the RPC service.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Point the client at another RPC service. Takes effect on the next call;
    /// the URL is not validated.
    pub fn set_provider(&mut self, provider: impl Into<String>) {
        self.provider = provider.into();
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Check whether the provider answers a plain GET on its base URL.
    ///
    /// Any failure, including a non-200 status or a non-UTF-8 body, yields
    /// `false`.
    pub async fn is_provider_up(&self) -> bool {
        match self.get_response("", ResponseType::Text).await {
            Ok(_) => true,
            Err(e) => {
                debug!(provider = %self.provider, error = %e, "provider is down");
                false
            }
        }
    }

    /// Perform any operation by its marker type.
    ///
    /// ```no_run
    /// use pchain_rpc::operation::ops;
    /// use pchain_rpc::RpcClient;
    /// use pchain_types::BlockHashByHeightRequest;
    ///
    /// # async fn example() -> Result<(), pchain_rpc::ClientError> {
    /// let client = RpcClient::new("https://service.parallelchain.io");
    /// let response = client
    ///     .call::<ops::BlockHashByHeight>(&BlockHashByHeightRequest { block_height: 1 })
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn call<O: Operation>(&self, request: &O::Request) -> Result<O::Response, ClientError> {
        let path = O::KIND.path();
        let data = match O::KIND.method() {
            Method::Post => {
                let body = self.codec.encode(request)?;
                self.post_response(path, body).await?
            }
            Method::Get => self.get_response(path, ResponseType::Binary).await?,
        };

        self.codec.decode(&data).map_err(|e| {
            warn!(operation = %O::KIND, error = %e, "failed to decode response");
            ClientError::from(e)
        })
    }

    /// Submit a signed transaction to the mempool.
    pub async fn submit_transaction(
        &self,
        request: &SubmitTransactionRequest,
    ) -> Result<SubmitTransactionResponse, ClientError> {
        self.call::<ops::SubmitTransaction>(request).await
    }

    /// Account data from world state.
    pub async fn state(&self, request: &StateRequest) -> Result<StateResponse, ClientError> {
        self.call::<ops::State>(request).await
    }

    /// Result of executing a contract view call.
    pub async fn view(&self, request: &ViewRequest) -> Result<ViewResponse, ClientError> {
        self.call::<ops::View>(request).await
    }

    /// Previous, current and next validator sets, with or without delegators.
    pub async fn validator_sets(
        &self,
        request: &ValidatorSetsRequest,
    ) -> Result<ValidatorSetsResponse, ClientError> {
        self.call::<ops::ValidatorSets>(request).await
    }

    /// Pools for a set of operator addresses, with or without their stakes.
    pub async fn pools(&self, request: &PoolsRequest) -> Result<PoolsResponse, ClientError> {
        self.call::<ops::Pools>(request).await
    }

    /// Stakes for a set of (operator, owner) pairs.
    pub async fn stakes(&self, request: &StakesRequest) -> Result<StakesResponse, ClientError> {
        self.call::<ops::Stakes>(request).await
    }

    /// Deposits for a set of (operator, owner) pairs.
    pub async fn deposits(
        &self,
        request: &DepositsRequest,
    ) -> Result<DepositsResponse, ClientError> {
        self.call::<ops::Deposits>(request).await
    }

    /// Full block by hash.
    pub async fn block(&self, request: &BlockRequest) -> Result<BlockResponse, ClientError> {
        self.call::<ops::Block>(request).await
    }

    /// Block header by hash.
    pub async fn block_header(
        &self,
        request: &BlockHeaderRequest,
    ) -> Result<BlockHeaderResponse, ClientError> {
        self.call::<ops::BlockHeader>(request).await
    }

    /// Block height for a block hash.
    pub async fn block_height_by_hash(
        &self,
        request: &BlockHeightByHashRequest,
    ) -> Result<BlockHeightByHashResponse, ClientError> {
        self.call::<ops::BlockHeightByHash>(request).await
    }

    /// Block hash for a block height.
    pub async fn block_hash_by_height(
        &self,
        request: &BlockHashByHeightRequest,
    ) -> Result<BlockHashByHeightResponse, ClientError> {
        self.call::<ops::BlockHashByHeight>(request).await
    }

    /// Hash of the latest committed block.
    pub async fn highest_committed_block(
        &self,
    ) -> Result<HighestCommittedBlockResponse, ClientError> {
        self.call::<ops::HighestCommittedBlock>(&()).await
    }

    /// Transaction by hash, optionally with its receipt.
    pub async fn transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<TransactionResponse, ClientError> {
        self.call::<ops::Transaction>(request).await
    }

    /// Receipt, block hash and position of a transaction.
    pub async fn receipt(&self, request: &ReceiptRequest) -> Result<ReceiptResponse, ClientError> {
        self.call::<ops::Receipt>(request).await
    }

    /// Block hash and position of a transaction.
    pub async fn transaction_position(
        &self,
        request: &TransactionPositionRequest,
    ) -> Result<TransactionPositionResponse, ClientError> {
        self.call::<ops::TransactionPosition>(request).await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.provider, endpoint)
    }

    /// POST to `{provider}/{endpoint}` and return the body of a 200 response.
    async fn post_response(&self, endpoint: &str, body: Vec<u8>) -> Result<Vec<u8>, ClientError> {
        let url = self.url(endpoint);
        debug!(url = %url, bytes = body.len(), "rpc post");
        let resp = self.transport.post(&url, body).await.map_err(|e| {
            warn!(url = %url, error = %e, "rpc post failed");
            ClientError::from(e)
        })?;
        Self::check_status(&url, resp)
    }

    /// GET `{provider}/{endpoint}` and return the body of a 200 response.
    async fn get_response(
        &self,
        endpoint: &str,
        response_type: ResponseType,
    ) -> Result<Vec<u8>, ClientError> {
        let url = self.url(endpoint);
        debug!(url = %url, ?response_type, "rpc get");
        let resp = self
            .transport
            .get(&url, response_type)
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "rpc get failed");
                ClientError::from(e)
            })?;
        Self::check_status(&url, resp)
    }

    fn check_status(url: &str, resp: TransportResponse) -> Result<Vec<u8>, ClientError> {
        if resp.status_code == 200 {
            debug!(url = %url, bytes = resp.data.len(), "rpc response");
            return Ok(resp.data);
        }

        let err = match extract_code(&resp.data) {
            Some(code) => {
                let category = ErrorCategory::classify(code);
                if category == ErrorCategory::Unclassified {
                    warn!(url = %url, code, status = resp.status_code, "unrecognized server error code");
                }
                ClientError::Server {
                    status_code: resp.status_code,
                    code,
                    category,
                }
            }
            None => ClientError::Status {
                status_code: resp.status_code,
                message: resp.message,
            },
        };
        warn!(url = %url, error = %err, "rpc request rejected");
        Err(err)
    }
}
