//! Network constants and host resolution for the Wallet-Auth API.

use crate::error::HostError;
use std::collections::HashMap;

/// Path prefix shared by every Wallet-Auth endpoint.
pub const API_PATH_PREFIX: &str = "/api/wallet-auth/v1";

/// Routing key under which the wallet API host is registered.
pub const WALLET_API_METHODS_KEY: &str = "wallet";

/// Maps a routing key to a base host (`scheme://host[:port]`).
///
/// Resolution failure is fatal for the call being made.
pub trait HostProvider: Send + Sync {
    fn host(&self, key: &str) -> Result<String, HostError>;
}

/// Fixed key → host table.
#[derive(Debug, Clone, Default)]
pub struct StaticHostProvider {
    hosts: HashMap<String, String>,
}

impl StaticHostProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider that answers [`WALLET_API_METHODS_KEY`] with `host`.
    pub fn single(host: &str) -> Self {
        Self::new().with(WALLET_API_METHODS_KEY, host)
    }

    pub fn with(mut self, key: &str, host: &str) -> Self {
        self.hosts
            .insert(key.to_string(), host.trim_end_matches('/').to_string());
        self
    }
}

impl HostProvider for StaticHostProvider {
    fn host(&self, key: &str) -> Result<String, HostError> {
        self.hosts
            .get(key)
            .cloned()
            .ok_or_else(|| HostError::UnknownKey(key.to_string()))
    }
}
