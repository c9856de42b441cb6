//! HTTP transport used by the RPC client.

use std::future::Future;
use std::sync::Arc;

use reqwest::header::{HeaderValue, CONTENT_TYPE, USER_AGENT};

use crate::error::TransportError;
use crate::types::RpcConfig;

/// How the caller intends to read a GET response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    /// Opaque bytes for the codec.
    Binary,
    /// UTF-8 text, used by the liveness probe.
    Text,
}

/// A completed HTTP exchange, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// HTTP status text (e.g. `OK`, `Bad Gateway`).
    pub message: String,
    /// Fully buffered response body.
    pub data: Vec<u8>,
}

impl TransportResponse {
    /// A `200 OK` response carrying `data`.
    pub fn ok(data: impl Into<Vec<u8>>) -> Self {
        Self {
            status_code: 200,
            message: "OK".to_string(),
            data: data.into(),
        }
    }
}

/// Sends requests to the provider.
///
/// Implementations return `Ok` for every response that arrived, including
/// non-2xx ones; the client checks the status. `Err` means no usable response.
pub trait Transport: Send + Sync {
    /// GET `url`.
    fn get(
        &self,
        url: &str,
        response_type: ResponseType,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;

    /// POST `body` to `url` as `application/octet-stream`.
    fn post(
        &self,
        url: &str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn get(
        &self,
        url: &str,
        response_type: ResponseType,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
        (**self).get(url, response_type)
    }

    fn post(
        &self,
        url: &str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send {
        (**self).post(url, body)
    }
}

/// [`Transport`] over `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with reqwest's defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport honouring the timeout and user agent in `config`.
    pub fn from_config(config: &RpcConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(ref agent) = config.user_agent {
            let value = HeaderValue::from_str(agent)
                .map_err(|e| TransportError::Other(format!("invalid user agent: {e}")))?;
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(USER_AGENT, value);
            builder = builder.default_headers(headers);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Buffer a response into a [`TransportResponse`].
    async fn read(
        resp: reqwest::Response,
        response_type: ResponseType,
    ) -> Result<TransportResponse, TransportError> {
        let status = resp.status();
        let data = resp.bytes().await?.to_vec();

        if response_type == ResponseType::Text
            && status.is_success()
            && std::str::from_utf8(&data).is_err()
        {
            return Err(TransportError::InvalidText);
        }

        Ok(TransportResponse {
            status_code: status.as_u16(),
            message: status.canonical_reason().unwrap_or_default().to_string(),
            data,
        })
    }
}

impl Transport for HttpTransport {
    async fn get(
        &self,
        url: &str,
        response_type: ResponseType,
    ) -> Result<TransportResponse, TransportError> {
        let resp = self.client.get(url).send().await?;
        Self::read(resp, response_type).await
    }

    async fn post(&self, url: &str, body: Vec<u8>) -> Result<TransportResponse, TransportError> {
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(body)
            .send()
            .await?;
        Self::read(resp, ResponseType::Binary).await
    }
}
