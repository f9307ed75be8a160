//! Wire types for token issuance.

use serde::{Deserialize, Serialize};

/// `status` of `token-issue-init`: both values are successful outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenIssueInitStatus {
    Success,
    AuthRequired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutTokenIssueInitResult {
    pub auth_context_id: String,
    pub process_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutTokenIssueInitEnvelope {
    pub status: TokenIssueInitStatus,
    pub result: CheckoutTokenIssueInitResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTokenResult {
    pub access_token: String,
}

