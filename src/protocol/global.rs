//! Global Wallet-Auth API errors, shared by every endpoint.
//!
//! Body shape: `{"error": {"type": "<Code>", "parameterNames": [...], "headerNames": [...]}}`.

use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Protocol-level error returned by any endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GlobalErrorEnvelope", into = "GlobalErrorEnvelope")]
pub enum WalletAuthApiError {
    // 400: the request cannot be performed with these parameters.
    #[error("malformed request syntax")]
    SyntaxError,

    #[error("illegal parameters: {}", .0.join(", "))]
    IllegalParameters(Vec<String>),

    #[error("illegal headers: {}", .0.join(", "))]
    IllegalHeaders(Vec<String>),

    // 401
    #[error("missing or invalid merchant client credentials")]
    InvalidCredentials,

    #[error("missing or invalid wallet token")]
    InvalidToken,

    #[error("missing or invalid request signature")]
    InvalidSignature,

    // 403
    #[error("token scope is insufficient for this operation")]
    InvalidScope,

    #[error("operation forbidden")]
    Forbidden,

    // 500
    /// Result unknown; the same request may be repeated after a delay.
    #[error("technical error, result unknown")]
    TechnicalError,

    #[error("service temporarily unavailable")]
    ServiceUnavailable,
}

impl WalletAuthApiError {
    /// `TechnicalError` and `ServiceUnavailable` are hints for a caller-level retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            WalletAuthApiError::TechnicalError | WalletAuthApiError::ServiceUnavailable
        )
    }
}

// ─── Wire ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum GlobalErrorCode {
    SyntaxError,
    IllegalParameters,
    IllegalHeaders,
    InvalidCredentials,
    InvalidToken,
    InvalidSignature,
    InvalidScope,
    Forbidden,
    TechnicalError,
    ServiceUnavailable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GlobalErrorBody {
    #[serde(rename = "type")]
    kind: GlobalErrorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parameter_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    header_names: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GlobalErrorEnvelope {
    error: GlobalErrorBody,
}

impl TryFrom<GlobalErrorEnvelope> for WalletAuthApiError {
    type Error = DecodeError;

    fn try_from(envelope: GlobalErrorEnvelope) -> Result<Self, Self::Error> {
        let body = envelope.error;
        Ok(match body.kind {
            GlobalErrorCode::SyntaxError => Self::SyntaxError,
            GlobalErrorCode::IllegalParameters => Self::IllegalParameters(
                body.parameter_names
                    .ok_or(DecodeError::MissingField("parameterNames"))?,
            ),
            GlobalErrorCode::IllegalHeaders => Self::IllegalHeaders(
                body.header_names
                    .ok_or(DecodeError::MissingField("headerNames"))?,
            ),
            GlobalErrorCode::InvalidCredentials => Self::InvalidCredentials,
            GlobalErrorCode::InvalidToken => Self::InvalidToken,
            GlobalErrorCode::InvalidSignature => Self::InvalidSignature,
            GlobalErrorCode::InvalidScope => Self::InvalidScope,
            GlobalErrorCode::Forbidden => Self::Forbidden,
            GlobalErrorCode::TechnicalError => Self::TechnicalError,
            GlobalErrorCode::ServiceUnavailable => Self::ServiceUnavailable,
        })
    }
}

impl From<WalletAuthApiError> for GlobalErrorEnvelope {
    fn from(error: WalletAuthApiError) -> Self {
        let (kind, parameter_names, header_names) = match error {
            WalletAuthApiError::SyntaxError => (GlobalErrorCode::SyntaxError, None, None),
            WalletAuthApiError::IllegalParameters(names) => {
                (GlobalErrorCode::IllegalParameters, Some(names), None)
            }
            WalletAuthApiError::IllegalHeaders(names) => {
                (GlobalErrorCode::IllegalHeaders, None, Some(names))
            }
            WalletAuthApiError::InvalidCredentials => {
                (GlobalErrorCode::InvalidCredentials, None, None)
            }
            WalletAuthApiError::InvalidToken => (GlobalErrorCode::InvalidToken, None, None),
            WalletAuthApiError::InvalidSignature => (GlobalErrorCode::InvalidSignature, None, None),
            WalletAuthApiError::InvalidScope => (GlobalErrorCode::InvalidScope, None, None),
            WalletAuthApiError::Forbidden => (GlobalErrorCode::Forbidden, None, None),
            WalletAuthApiError::TechnicalError => (GlobalErrorCode::TechnicalError, None, None),
            WalletAuthApiError::ServiceUnavailable => {
                (GlobalErrorCode::ServiceUnavailable, None, None)
            }
        };
        GlobalErrorEnvelope {
            error: GlobalErrorBody {
                kind,
                parameter_names,
                header_names,
            },
        }
    }
}
