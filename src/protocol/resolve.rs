//! Response resolution: a raw HTTP outcome becomes exactly one typed result.
//!
//! Precedence, first match wins:
//!
//! 1. response + body decode as a global [`WalletAuthApiError`]
//! 2. response + body decode as the endpoint-specific refusal
//! 3. response + body decode as the success payload
//! 4. a transport error was reported
//! 5. mapping failure
//!
//! The HTTP status code is carried for diagnostics only.

use super::{decode_refused, Endpoint, RefusedError, WalletAuthApiError, WireDecode};
use crate::error::{HttpError, MappingError, SdkError};
use serde::de::DeserializeOwned;

/// Outcome of one transport attempt.
///
/// `status` is `Some` when an HTTP response arrived. A cancelled call that the
/// transport does not report as such is all `None`.
#[derive(Debug, Default)]
pub struct RawResponse {
    pub status: Option<u16>,
    pub body: Option<Vec<u8>>,
    pub error: Option<HttpError>,
}

impl RawResponse {
    /// A completed HTTP exchange.
    pub fn completed(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Some(status),
            body: Some(body.into()),
            error: None,
        }
    }

    /// A transport failure without a usable response.
    pub fn failed(error: HttpError) -> Self {
        Self {
            status: None,
            body: None,
            error: Some(error),
        }
    }

    /// Neither a response nor an error.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Resolve a raw outcome for endpoint `E`.
pub fn resolve<E: Endpoint>(raw: RawResponse) -> Result<E::Response, SdkError> {
    resolve_as::<E::Response, E::Error>(E::PATH, raw)
}

/// Resolve a raw outcome given explicit success and refusal types.
pub fn resolve_as<T, S>(path: &str, raw: RawResponse) -> Result<T, SdkError>
where
    T: DeserializeOwned,
    S: DeserializeOwned + Into<RefusedError>,
{
    let RawResponse {
        status,
        body,
        error,
    } = raw;

    let mut reason = String::from("empty response");

    if let (Some(status_code), Some(bytes)) = (status, body.as_deref()) {
        if let Ok(global) = WalletAuthApiError::decode(bytes) {
            tracing::debug!(path, status = status_code, error = %global, "global API error");
            return Err(SdkError::Api(global));
        }

        if let Ok(specific) = decode_refused::<S>(bytes) {
            let refused: RefusedError = specific.into();
            tracing::debug!(path, status = status_code, error = %refused, "request refused");
            return Err(SdkError::Refused(refused));
        }

        match T::decode(bytes) {
            Ok(payload) => {
                tracing::debug!(path, status = status_code, "response decoded");
                return Ok(payload);
            }
            Err(e) => reason = e.to_string(),
        }
    }

    if let Some(transport) = error {
        tracing::warn!(path, error = %transport, "transport error");
        return Err(SdkError::Http(transport));
    }

    tracing::debug!(path, ?status, %reason, "response matched no known shape");
    Err(SdkError::Mapping(MappingError {
        path: path.to_string(),
        status,
        reason,
    }))
}
