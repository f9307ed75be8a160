//! Endpoint-specific refusals, aggregated into one type for [`crate::error::SdkError`].

use crate::domain::auth_check::CheckoutAuthCheckError;
use crate::domain::auth_context::CheckoutAuthContextGetError;
use crate::domain::auth_session::CheckoutAuthSessionGenerateError;
use crate::domain::token_issue::{CheckoutTokenIssueExecuteError, CheckoutTokenIssueInitError};
use serde::Deserialize;
use thiserror::Error;

/// A `{"status": "Refused"}` answer from one of the checkout endpoints.
///
/// These are the expected branch points of the authorization flow, not failures
/// of the protocol.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefusedError {
    #[error("auth-context-get: {0}")]
    AuthContextGet(#[from] CheckoutAuthContextGetError),

    #[error("auth-session-generate: {0}")]
    AuthSessionGenerate(#[from] CheckoutAuthSessionGenerateError),

    #[error("auth-check: {0}")]
    AuthCheck(#[from] CheckoutAuthCheckError),

    #[error("token-issue-init: {0}")]
    TokenIssueInit(#[from] CheckoutTokenIssueInitError),

    #[error("token-issue-execute: {0}")]
    TokenIssueExecute(#[from] CheckoutTokenIssueExecuteError),
}

/// Refusal type of endpoints that define no specific errors.
///
/// Uninhabited: its decoder never matches, so resolution falls through to the
/// success decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum NoSpecificError {}

impl From<NoSpecificError> for RefusedError {
    fn from(never: NoSpecificError) -> Self {
        match never {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::decode_refused;

    #[test]
    fn test_no_specific_error_never_decodes() {
        let body = br#"{"status":"Refused","error":"InvalidContext"}"#;
        assert!(decode_refused::<NoSpecificError>(body).is_err());
    }

    #[test]
    fn test_display_names_endpoint() {
        let err = RefusedError::from(CheckoutAuthCheckError::InvalidAnswer);
        assert_eq!(err.to_string(), "auth-check: invalid answer");
    }
}
