//! High-level client: `WalletAuthClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared credential cell, and accessor methods.

use crate::auth::Credentials;
use crate::domain::auth_check::client::Checks;
use crate::domain::auth_context::client::AuthContexts;
use crate::domain::auth_session::client::Sessions;
use crate::domain::merchant::client::Merchant;
use crate::domain::token_issue::client::Tokens;
use crate::error::SdkError;
use crate::http::transport::{ReqwestTransport, Transport, DEFAULT_TIMEOUT};
use crate::http::WalletAuthHttp;
use crate::network::{HostProvider, StaticHostProvider};
use crate::protocol::Endpoint;

use async_lock::RwLock;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::auth_check::client::Checks as ChecksClient;
pub use crate::domain::auth_context::client::AuthContexts as AuthContextsClient;
pub use crate::domain::auth_session::client::Sessions as SessionsClient;
pub use crate::domain::merchant::client::Merchant as MerchantClient;
pub use crate::domain::token_issue::client::Tokens as TokensClient;

pub const ENV_HOST: &str = "WALLET_AUTH_HOST";
pub const ENV_MERCHANT_CLIENT_KEY: &str = "WALLET_AUTH_MERCHANT_CLIENT_KEY";
pub const ENV_PASSPORT_TOKEN: &str = "WALLET_AUTH_PASSPORT_TOKEN";
pub const ENV_MONEY_CENTER_TOKEN: &str = "WALLET_AUTH_MONEY_CENTER_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "WALLET_AUTH_TIMEOUT_SECS";

/// The primary entry point for the Wallet-Auth SDK.
///
/// Provides nested sub-client accessors for each operation group:
/// `client.auth_contexts()`, `client.tokens()`, etc. Clones share the transport,
/// the host provider and the credentials.
pub struct WalletAuthClient {
    pub(crate) http: WalletAuthHttp,
    /// Current credentials. NEVER exposed publicly.
    pub(crate) credentials: Arc<RwLock<Credentials>>,
}

impl WalletAuthClient {
    pub fn builder() -> WalletAuthClientBuilder {
        WalletAuthClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn merchant(&self) -> Merchant<'_> {
        Merchant { client: self }
    }

    pub fn auth_contexts(&self) -> AuthContexts<'_> {
        AuthContexts { client: self }
    }

    pub fn sessions(&self) -> Sessions<'_> {
        Sessions { client: self }
    }

    pub fn checks(&self) -> Checks<'_> {
        Checks { client: self }
    }

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens { client: self }
    }

    // ── Credentials ──────────────────────────────────────────────────────

    /// Replace the passport token (e.g. after the user logged in again).
    pub async fn set_passport_authorization(&self, token: Option<String>) {
        self.credentials.write().await.set_passport(token);
    }

    pub async fn set_money_center_authorization(&self, token: Option<String>) {
        self.credentials.write().await.set_money_center(token);
    }

    /// Forget the user's tokens. Merchant calls keep working.
    pub async fn clear_bearer(&self) {
        self.credentials.write().await.clear_bearer();
    }

    pub async fn has_bearer(&self) -> bool {
        self.credentials.read().await.has_bearer()
    }

    // ── Dispatch ─────────────────────────────────────────────────────────

    /// Send any endpoint value with the current credentials.
    pub async fn send<E: Endpoint>(&self, endpoint: &E) -> Result<E::Response, SdkError> {
        let credentials = self.credentials.read().await.clone();
        self.http.send(endpoint, &credentials).await
    }
}

impl Clone for WalletAuthClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            credentials: self.credentials.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct WalletAuthClientBuilder {
    host: Option<String>,
    host_provider: Option<Arc<dyn HostProvider>>,
    merchant_client_authorization: Option<String>,
    passport_authorization: Option<String>,
    money_center_authorization: Option<String>,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl WalletAuthClientBuilder {
    /// Builder pre-filled from `WALLET_AUTH_*` environment variables.
    ///
    /// Unset variables are left empty; `build()` reports what is missing.
    pub fn from_env() -> Result<Self, SdkError> {
        let mut builder = Self::default();
        builder.host = env(ENV_HOST);
        builder.merchant_client_authorization = env(ENV_MERCHANT_CLIENT_KEY);
        builder.passport_authorization = env(ENV_PASSPORT_TOKEN);
        builder.money_center_authorization = env(ENV_MONEY_CENTER_TOKEN);
        if let Some(secs) = env(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.parse().map_err(|_| {
                SdkError::Config(format!(
                    "{} must be whole seconds, got '{}'",
                    ENV_TIMEOUT_SECS, secs
                ))
            })?;
            builder.timeout = Some(Duration::from_secs(secs));
        }
        Ok(builder)
    }

    /// Base host of the wallet API, e.g. `https://wallet.example.com`.
    pub fn host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    /// Resolve hosts through `provider` instead of a fixed host.
    pub fn host_provider(mut self, provider: Arc<dyn HostProvider>) -> Self {
        self.host_provider = Some(provider);
        self
    }

    /// Merchant client key, sent as `Basic <key>`.
    pub fn merchant_client_authorization(mut self, key: &str) -> Self {
        self.merchant_client_authorization = Some(key.to_string());
        self
    }

    /// Passport token, sent as `Bearer <token>`.
    pub fn passport_authorization(mut self, token: &str) -> Self {
        self.passport_authorization = Some(token.to_string());
        self
    }

    /// Money-center token, sent as `Authorization: Bearer <token>`.
    pub fn money_center_authorization(mut self, token: &str) -> Self {
        self.money_center_authorization = Some(token.to_string());
        self
    }

    /// Request timeout of the default transport. Ignored with a custom transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<WalletAuthClient, SdkError> {
        let hosts: Arc<dyn HostProvider> = match (self.host_provider, self.host) {
            (Some(provider), _) => provider,
            (None, Some(host)) if !host.is_empty() => Arc::new(StaticHostProvider::single(&host)),
            _ => {
                return Err(SdkError::Config(
                    "a host or a host provider is required".to_string(),
                ))
            }
        };

        let merchant = self
            .merchant_client_authorization
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                SdkError::Config("merchant client authorization is required".to_string())
            })?;

        let mut credentials = Credentials::new(merchant);
        credentials.set_passport(self.passport_authorization);
        credentials.set_money_center(self.money_center_authorization);

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::with_timeout(
                self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            )?),
        };

        Ok(WalletAuthClient {
            http: WalletAuthHttp::new(transport, hosts),
            credentials: Arc::new(RwLock::new(credentials)),
        })
    }
}

fn env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
