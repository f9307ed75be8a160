//! Auth session generation: starts a time-bounded answer window (e.g. sends an SMS).

#[cfg(feature = "http")]
pub mod client;

use crate::domain::auth_state::AuthTypeState;
use crate::protocol::{BearerRequirement, Endpoint, SuccessEnvelope};
use crate::shared::AuthType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `POST /checkout/auth-session-generate`. Requires a bearer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutAuthSessionGenerateRequest {
    pub auth_context_id: String,
    pub auth_type: AuthType,
}

impl CheckoutAuthSessionGenerateRequest {
    pub fn new(auth_context_id: impl Into<String>, auth_type: AuthType) -> Self {
        Self {
            auth_context_id: auth_context_id.into(),
            auth_type,
        }
    }
}

impl Endpoint for CheckoutAuthSessionGenerateRequest {
    type Response = CheckoutAuthSessionGenerate;
    type Error = CheckoutAuthSessionGenerateError;

    const NAME: &'static str = "auth-session-generate";
    const PATH: &'static str = "/checkout/auth-session-generate";
    const BEARER: BearerRequirement = BearerRequirement::Required;
}

/// State of the method right after the session was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "SuccessEnvelope<AuthTypeState>",
    into = "SuccessEnvelope<AuthTypeState>"
)]
pub struct CheckoutAuthSessionGenerate {
    pub result: AuthTypeState,
}

impl From<SuccessEnvelope<AuthTypeState>> for CheckoutAuthSessionGenerate {
    fn from(envelope: SuccessEnvelope<AuthTypeState>) -> Self {
        Self {
            result: envelope.result,
        }
    }
}

impl From<CheckoutAuthSessionGenerate> for SuccessEnvelope<AuthTypeState> {
    fn from(response: CheckoutAuthSessionGenerate) -> Self {
        SuccessEnvelope::new(response.result)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutAuthSessionGenerateError {
    #[error("invalid or expired auth context")]
    InvalidContext,

    /// A new session was requested before the previous one's cooldown ran out.
    #[error("session create timeout has not expired")]
    CreateTimeoutNotExpired,

    #[error("session limit exceeded")]
    SessionsExceeded,

    #[error("auth type is not supported for this context")]
    UnsupportedAuthType,
}

impl CheckoutAuthSessionGenerateError {
    /// Whether a later attempt with the same context may succeed.
    pub fn is_temporary(&self) -> bool {
        matches!(self, Self::CreateTimeoutNotExpired)
    }
}
