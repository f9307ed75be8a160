//! Unified SDK error types.

use crate::protocol::global::WalletAuthApiError;
use crate::protocol::refused::RefusedError;
use thiserror::Error;

/// Top-level SDK error.
///
/// Mirrors the four outcomes of response resolution (global, refused, transport,
/// mapping) plus the local failures that can happen before any I/O.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Wallet API error: {0}")]
    Api(#[from] WalletAuthApiError),

    #[error("Request refused: {0}")]
    Refused(#[from] RefusedError),

    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Host resolution error: {0}")]
    Host(#[from] HostError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Flow error: {0}")]
    Flow(#[from] crate::flow::FlowError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SdkError {
    /// Whether the failure is a hint that the caller may repeat the same request.
    ///
    /// The SDK itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            SdkError::Api(e) => e.is_retryable(),
            SdkError::Http(e) => e.is_retryable(),
            _ => false,
        }
    }

    /// The endpoint-specific refusal, if this is one.
    pub fn refused(&self) -> Option<&RefusedError> {
        match self {
            SdkError::Refused(e) => Some(e),
            _ => None,
        }
    }
}

/// Transport-level failures (no usable response body).
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Request cancelled")]
    Cancelled,
}

impl HttpError {
    pub fn is_retryable(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            HttpError::Reqwest(re) => {
                #[cfg(not(target_arch = "wasm32"))]
                let retryable = re.is_connect() || re.is_timeout() || re.is_request();
                #[cfg(target_arch = "wasm32")]
                let retryable = re.is_timeout() || re.is_request();
                retryable
            }
            _ => false,
        }
    }
}

/// Local encode/decode failures of wire values.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid decimal '{input}': {reason}")]
    DecimalConversion { input: String, reason: String },

    #[error("Missing field '{0}'")]
    MissingField(&'static str),
}

/// The response matched none of the known shapes for the endpoint.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{path}: {reason} (status {status:?})")]
pub struct MappingError {
    pub path: String,
    pub status: Option<u16>,
    pub reason: String,
}

/// Host resolution failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostError {
    #[error("No host configured for key '{0}'")]
    UnknownKey(String),
}

/// Credential errors detected before a request is sent.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error("{endpoint} requires a bearer credential")]
    MissingBearer { endpoint: &'static str },

    #[error("Merchant client credential is empty")]
    MissingMerchantClient,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth_check::CheckoutAuthCheckError;

    #[test]
    fn test_retry_hints() {
        assert!(SdkError::Api(WalletAuthApiError::TechnicalError).is_retryable());
        assert!(SdkError::Api(WalletAuthApiError::ServiceUnavailable).is_retryable());
        assert!(!SdkError::Api(WalletAuthApiError::InvalidToken).is_retryable());
        assert!(!SdkError::Http(HttpError::Cancelled).is_retryable());
        assert!(!SdkError::Refused(RefusedError::AuthCheck(
            CheckoutAuthCheckError::InvalidAnswer
        ))
        .is_retryable());
    }

    #[test]
    fn test_refused_accessor() {
        let err: SdkError = RefusedError::AuthCheck(CheckoutAuthCheckError::SessionExpired).into();
        assert_eq!(
            err.refused(),
            Some(&RefusedError::AuthCheck(CheckoutAuthCheckError::SessionExpired))
        );
        assert!(SdkError::Config("x".into()).refused().is_none());
    }

    #[test]
    fn test_mapping_error_display() {
        let err = MappingError {
            path: "/checkout/auth-check".into(),
            status: Some(200),
            reason: "empty response".into(),
        };
        assert_eq!(
            err.to_string(),
            "/checkout/auth-check: empty response (status Some(200))"
        );
    }
}
