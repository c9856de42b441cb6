//! Client configuration.

use std::time::Duration;

/// Configuration for an [`RpcClient`](crate::RpcClient) backed by
/// [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// Base URL of the fullnode RPC service (e.g. `https://service.parallelchain.io`).
    pub provider: String,
    /// Whole-request timeout applied by the HTTP transport.
    pub timeout: Option<Duration>,
    /// Value of the `User-Agent` header.
    pub user_agent: Option<String>,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            provider: "https://service.parallelchain.io".to_string(),
            timeout: None,
            user_agent: None,
        }
    }
}
