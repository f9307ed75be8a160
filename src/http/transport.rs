//! Transport capability and its reqwest implementation.

use crate::error::HttpError;
use crate::protocol::{HttpMethod, RawResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Request timeout of [`ReqwestTransport::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A fully built request: absolute URL, final headers, encoded body.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

// Headers carry credentials; only their names are printed.
impl std::fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.headers.iter().map(|(n, _)| n.as_str()).collect();
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &names)
            .field("body_len", &self.body.len())
            .finish()
    }
}

/// Performs one HTTP exchange.
///
/// Implementations never retry and never interpret the body: every outcome,
/// including failures, is reported as a [`RawResponse`].
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Transport: Send + Sync {
    async fn perform(&self, request: HttpRequest) -> RawResponse;
}

/// Default transport on top of `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, HttpError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Use a caller-configured client (proxies, TLS roots, ...).
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Transport for ReqwestTransport {
    async fn perform(&self, request: HttpRequest) -> RawResponse {
        let method = match request.method {
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut req = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        req = req.body(request.body);

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => return RawResponse::failed(HttpError::Reqwest(e)),
        };

        let status = resp.status().as_u16();
        match resp.bytes().await {
            Ok(bytes) => RawResponse::completed(status, bytes.to_vec()),
            Err(e) => RawResponse {
                status: Some(status),
                body: None,
                error: Some(HttpError::Reqwest(e)),
            },
        }
    }
}
