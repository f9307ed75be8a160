//! Low-level dispatcher: `WalletAuthHttp`.
//!
//! One generic `send` for every [`Endpoint`]: resolve the host, build headers
//! from the credentials, perform the exchange, resolve the outcome. Internal to
//! the SDK; `WalletAuthClient` wraps it.

use crate::auth::Credentials;
use crate::error::SdkError;
use crate::http::transport::{HttpRequest, Transport};
use crate::network::{HostProvider, WALLET_API_METHODS_KEY};
use crate::protocol::{resolve, Endpoint};
use std::sync::Arc;

pub struct WalletAuthHttp {
    transport: Arc<dyn Transport>,
    hosts: Arc<dyn HostProvider>,
}

impl WalletAuthHttp {
    pub fn new(transport: Arc<dyn Transport>, hosts: Arc<dyn HostProvider>) -> Self {
        Self { transport, hosts }
    }

    /// Build the request for `endpoint` without sending it.
    ///
    /// Fails locally on host resolution, missing credentials or body encoding.
    pub fn prepare<E: Endpoint>(
        &self,
        endpoint: &E,
        credentials: &Credentials,
    ) -> Result<HttpRequest, SdkError> {
        let host = self.hosts.host(WALLET_API_METHODS_KEY)?;
        let headers = credentials
            .headers_for(E::BEARER, E::NAME)?
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();

        Ok(HttpRequest {
            method: E::METHOD,
            url: E::url(&host),
            headers,
            body: endpoint.body()?,
        })
    }

    pub async fn send<E: Endpoint>(
        &self,
        endpoint: &E,
        credentials: &Credentials,
    ) -> Result<E::Response, SdkError> {
        let request = self.prepare(endpoint, credentials)?;
        tracing::debug!(
            endpoint = E::NAME,
            method = %request.method,
            url = %request.url,
            "sending request"
        );
        let raw = self.transport.perform(request).await;
        resolve::<E>(raw)
    }
}

impl Clone for WalletAuthHttp {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            hosts: self.hosts.clone(),
        }
    }
}
