//! Auth check: submits the user's answer (code, password, token) for verification.
//!
//! Not idempotent: every call consumes an attempt. Never retry it blindly.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::domain::auth_state::AuthTypeState;
use crate::protocol::{BearerRequirement, Endpoint};
use crate::shared::AuthType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `POST /checkout/auth-check`. Requires a bearer.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutAuthCheckRequest {
    pub auth_context_id: String,
    pub auth_type: AuthType,
    pub answer: String,
}

impl CheckoutAuthCheckRequest {
    pub fn new(
        auth_context_id: impl Into<String>,
        auth_type: AuthType,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            auth_context_id: auth_context_id.into(),
            auth_type,
            answer: answer.into(),
        }
    }
}

impl std::fmt::Debug for CheckoutAuthCheckRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutAuthCheckRequest")
            .field("auth_context_id", &self.auth_context_id)
            .field("auth_type", &self.auth_type)
            .field("answer", &"<redacted>")
            .finish()
    }
}

impl Endpoint for CheckoutAuthCheckRequest {
    type Response = CheckoutAuthCheck;
    type Error = CheckoutAuthCheckError;

    const NAME: &'static str = "auth-check";
    const PATH: &'static str = "/checkout/auth-check";
    const BEARER: BearerRequirement = BearerRequirement::Required;
}

/// Answer accepted. The server may report the method's updated state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "wire::CheckoutAuthCheckEnvelope", into = "wire::CheckoutAuthCheckEnvelope")]
pub struct CheckoutAuthCheck {
    pub result: Option<AuthTypeState>,
}

impl From<wire::CheckoutAuthCheckEnvelope> for CheckoutAuthCheck {
    fn from(envelope: wire::CheckoutAuthCheckEnvelope) -> Self {
        Self {
            result: envelope.result,
        }
    }
}

impl From<CheckoutAuthCheck> for wire::CheckoutAuthCheckEnvelope {
    fn from(response: CheckoutAuthCheck) -> Self {
        wire::CheckoutAuthCheckEnvelope::new(response.result)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutAuthCheckError {
    #[error("invalid or expired auth context")]
    InvalidContext,

    #[error("session does not exist")]
    SessionDoesNotExist,

    #[error("session expired")]
    SessionExpired,

    #[error("auth type is not supported for this context")]
    UnsupportedAuthType,

    #[error("verify attempts exceeded")]
    VerifyAttemptsExceeded,

    #[error("invalid answer")]
    InvalidAnswer,
}

impl CheckoutAuthCheckError {
    /// Whether the current session is gone and a new one has to be generated.
    pub fn requires_new_session(&self) -> bool {
        matches!(
            self,
            Self::SessionDoesNotExist | Self::SessionExpired | Self::VerifyAttemptsExceeded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{decode_refused, WireDecode};

    #[test]
    fn test_request_body() {
        let body = CheckoutAuthCheckRequest::new("ctx-1", AuthType::Totp, "123456")
            .body()
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"authContextId": "ctx-1", "authType": "Totp", "answer": "123456"})
        );
    }

    #[test]
    fn test_debug_hides_answer() {
        let request = CheckoutAuthCheckRequest::new("ctx-1", AuthType::SecurePassword, "hunter2");
        let printed = format!("{:?}", request);
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("ctx-1"));
    }

    #[test]
    fn test_decode_success_with_state() {
        let json = br#"{
            "status": "Success",
            "result": {
                "type": "Sms",
                "codeLength": 6,
                "sessionsLeft": 13,
                "sessionTimeLeft": 20,
                "nextSessionTimeLeft": 30,
                "hasActiveSession": true,
                "attemptsCount": 10,
                "attemptsLeft": 11,
                "canBeIssued": false,
                "enabled": true,
                "isSessionRequired": true
            }
        }"#;
        let response = CheckoutAuthCheck::decode(json).unwrap();
        let state = response.result.unwrap();
        assert_eq!(state.auth_type(), AuthType::Sms);
        assert_eq!(state.attempts_left(), Some(11));
    }

    #[test]
    fn test_decode_success_without_state() {
        let response = CheckoutAuthCheck::decode(br#"{"status": "Success"}"#).unwrap();
        assert!(response.result.is_none());
    }

    #[test]
    fn test_refusal_codes() {
        let code: CheckoutAuthCheckError =
            decode_refused(br#"{"status": "Refused", "error": "InvalidAnswer"}"#).unwrap();
        assert_eq!(code, CheckoutAuthCheckError::InvalidAnswer);
        assert!(!code.requires_new_session());

        let code: CheckoutAuthCheckError =
            decode_refused(br#"{"status": "Refused", "error": "VerifyAttemptsExceeded"}"#).unwrap();
        assert!(code.requires_new_session());
    }
}
