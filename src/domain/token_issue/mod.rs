//! Token issuance: obtains a payment token for the merchant.
//!
//! Two steps. `token-issue-init` opens a process and reports whether the user
//! still has to authenticate; `token-issue-execute` turns a ready process into
//! a [`PaymentToken`].

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
pub mod wire;

use crate::protocol::{BearerRequirement, Endpoint};
use crate::shared::{MonetaryAmount, PaymentUsageLimit};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Init ────────────────────────────────────────────────────────────────────

/// `POST /checkout/token-issue-init`. Requires a bearer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutTokenIssueInitRequest {
    /// Id of the authorization instance in the application.
    pub instance_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_amount_max: Option<MonetaryAmount>,
    pub payment_usage_limit: PaymentUsageLimit,
    /// Anti-fraud session id of the device.
    pub tmx_session_id: String,
}

impl CheckoutTokenIssueInitRequest {
    pub fn new(instance_name: impl Into<String>, tmx_session_id: impl Into<String>) -> Self {
        Self {
            instance_name: instance_name.into(),
            single_amount_max: None,
            payment_usage_limit: PaymentUsageLimit::default(),
            tmx_session_id: tmx_session_id.into(),
        }
    }

    pub fn single_amount_max(mut self, amount: MonetaryAmount) -> Self {
        self.single_amount_max = Some(amount);
        self
    }

    pub fn payment_usage_limit(mut self, limit: PaymentUsageLimit) -> Self {
        self.payment_usage_limit = limit;
        self
    }
}

impl Endpoint for CheckoutTokenIssueInitRequest {
    type Response = TokenIssueProcess;
    type Error = CheckoutTokenIssueInitError;

    const NAME: &'static str = "token-issue-init";
    const PATH: &'static str = "/checkout/token-issue-init";
    const BEARER: BearerRequirement = BearerRequirement::Required;
}

/// A started token-issue process.
///
/// When `auth_required` is set the user has to pass the auth flow on
/// `auth_context_id` before the process can be executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "wire::CheckoutTokenIssueInitEnvelope",
    into = "wire::CheckoutTokenIssueInitEnvelope"
)]
pub struct TokenIssueProcess {
    pub process_id: String,
    pub auth_context_id: String,
    pub auth_required: bool,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutTokenIssueInitError {
    #[error("wallet account not found")]
    AccountNotFound,
}

// ─── Execute ─────────────────────────────────────────────────────────────────

/// `POST /checkout/token-issue-execute`. Requires a bearer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutTokenIssueExecuteRequest {
    pub process_id: String,
}

impl CheckoutTokenIssueExecuteRequest {
    pub fn new(process_id: impl Into<String>) -> Self {
        Self {
            process_id: process_id.into(),
        }
    }
}

impl Endpoint for CheckoutTokenIssueExecuteRequest {
    type Response = PaymentToken;
    type Error = CheckoutTokenIssueExecuteError;

    const NAME: &'static str = "token-issue-execute";
    const PATH: &'static str = "/checkout/token-issue-execute";
    const BEARER: BearerRequirement = BearerRequirement::Required;
}

/// Payment token handed to the merchant. `Debug` never prints it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "crate::protocol::SuccessEnvelope<wire::PaymentTokenResult>",
    into = "crate::protocol::SuccessEnvelope<wire::PaymentTokenResult>"
)]
pub struct PaymentToken {
    access_token: String,
}

impl PaymentToken {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn into_access_token(self) -> String {
        self.access_token
    }
}

impl std::fmt::Debug for PaymentToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentToken")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutTokenIssueExecuteError {
    /// The process still needs the user to authenticate.
    #[error("authorization required")]
    AuthRequired,

    /// The authorization behind the process expired; start a new process.
    #[error("authorization expired")]
    AuthExpired,
}
