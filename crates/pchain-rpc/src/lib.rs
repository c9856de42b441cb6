#![deny(missing_docs)]

//! # pchain-rpc
//!
//! Typed client for the ParallelChain fullnode RPC API.
//!
//! Every RPC operation is one async method on [`RpcClient`]. A call encodes
//! the request with a [`Codec`], sends it through a [`Transport`] to
//! `{provider}/{operation}`, and decodes the binary response. Server error
//! codes are classified into an [`ErrorCategory`].
//!
//! # Example
//!
//! ```no_run
//! use pchain_rpc::RpcClient;
//!
//! # async fn example() -> Result<(), pchain_rpc::ClientError> {
//! let client = RpcClient::new("https://service.parallelchain.io");
//!
//! if client.is_provider_up().await {
//!     let highest = client.highest_committed_block().await?;
//!     println!("Highest committed block: {:?}", highest.block_hash);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod codec;
pub mod error;
pub mod operation;
pub mod response_code;
pub mod transport;
pub mod types;


pub use client::RpcClient;
pub use codec::{BorshCodec, Codec};
pub use error::{ClientError, CodecError, TransportError};
pub use operation::{Method, Operation, OperationKind};
pub use response_code::{ErrorCategory, ResponseCode};
pub use transport::{HttpTransport, ResponseType, Transport, TransportResponse};
pub use types::RpcConfig;
