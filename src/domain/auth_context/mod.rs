//! Auth context: which authentication methods the server offers for a flow.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
pub mod wire;

use crate::domain::auth_state::AuthTypeState;
use crate::protocol::{BearerRequirement, Endpoint, SuccessEnvelope};
use crate::shared::AuthType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Request ─────────────────────────────────────────────────────────────────

/// `POST /checkout/auth-context-get`. The bearer is sent when configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutAuthContextGetRequest {
    pub auth_context_id: String,
}

impl CheckoutAuthContextGetRequest {
    pub fn new(auth_context_id: impl Into<String>) -> Self {
        Self {
            auth_context_id: auth_context_id.into(),
        }
    }
}

impl Endpoint for CheckoutAuthContextGetRequest {
    type Response = CheckoutAuthContextGet;
    type Error = CheckoutAuthContextGetError;

    const NAME: &'static str = "auth-context-get";
    const PATH: &'static str = "/checkout/auth-context-get";
    const BEARER: BearerRequirement = BearerRequirement::Optional;
}

// ─── Response ────────────────────────────────────────────────────────────────

/// Success payload of `auth-context-get`.
///
/// `auth_types` keeps the server's preference order. Entries that did not decode
/// (unknown `type`, missing flags) are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "SuccessEnvelope<wire::CheckoutAuthContextGetResult>",
    into = "SuccessEnvelope<wire::CheckoutAuthContextGetResult<AuthTypeState>>"
)]
pub struct CheckoutAuthContextGet {
    pub auth_types: Vec<AuthTypeState>,
    pub default_auth_type: AuthType,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutAuthContextGetError {
    #[error("invalid or expired auth context")]
    InvalidContext,
}

// ─── AuthContext ─────────────────────────────────────────────────────────────

/// An auth context id together with what the server reported for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub auth_context_id: String,
    pub auth_types: Vec<AuthTypeState>,
    pub default_auth_type: AuthType,
}

impl AuthContext {
    pub fn new(auth_context_id: impl Into<String>, response: CheckoutAuthContextGet) -> Self {
        Self {
            auth_context_id: auth_context_id.into(),
            auth_types: response.auth_types,
            default_auth_type: response.default_auth_type,
        }
    }

    /// State of `auth_type`, if the server offered it.
    pub fn state(&self, auth_type: AuthType) -> Option<&AuthTypeState> {
        self.auth_types.iter().find(|s| s.auth_type() == auth_type)
    }

    pub fn enabled(&self) -> impl Iterator<Item = &AuthTypeState> {
        self.auth_types.iter().filter(|s| s.enabled)
    }

    /// Default selection policy: the server default when it is offered and
    /// enabled, else the first enabled method in server order.
    pub fn preferred_auth_type(&self) -> Option<AuthType> {
        match self.state(self.default_auth_type) {
            Some(state) if state.enabled => Some(self.default_auth_type),
            _ => self.enabled().next().map(|s| s.auth_type()),
        }
    }
}
