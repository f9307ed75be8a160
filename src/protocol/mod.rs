//! Protocol layer: endpoint descriptors, status envelopes, global errors and
//! response resolution.
//!
//! Everything here is pure: no I/O, no async. The HTTP layer feeds raw outcomes in
//! and gets typed results out.

pub mod global;
pub mod refused;
pub mod resolve;

use crate::error::DecodeError;
use crate::network::API_PATH_PREFIX;
use crate::shared::serde_util::decode_slice;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use global::WalletAuthApiError;
pub use refused::{NoSpecificError, RefusedError};
pub use resolve::{resolve, RawResponse};

// ─── Wire encode/decode ──────────────────────────────────────────────────────

/// `decode(bytes) -> T` for every wire type.
pub trait WireDecode: Sized {
    fn decode(bytes: &[u8]) -> Result<Self, DecodeError>;
}

impl<T: DeserializeOwned> WireDecode for T {
    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode_slice(bytes)
    }
}

/// `encode(&T) -> bytes` for every wire type.
pub trait WireEncode {
    fn encode(&self) -> Result<Vec<u8>, DecodeError>;
}

impl<T: Serialize> WireEncode for T {
    fn encode(&self) -> Result<Vec<u8>, DecodeError> {
        Ok(serde_json::to_vec(self)?)
    }
}

// ─── Endpoint descriptors ────────────────────────────────────────────────────

/// Every wallet-auth operation is a JSON `POST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether an endpoint takes the user's bearer credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BearerRequirement {
    /// Never sent (discovery calls).
    None,
    /// Sent when configured.
    Optional,
    /// Must be configured; the request fails locally otherwise.
    Required,
}

/// Static description of one API operation.
///
/// Implemented by each request type. The request value carries only business
/// fields; credentials travel next to it as [`crate::auth::Credentials`].
pub trait Endpoint: Serialize {
    /// Success payload.
    type Response: DeserializeOwned;
    /// Endpoint-specific refusal codes.
    type Error: DeserializeOwned + Into<RefusedError>;

    /// Operation name used in logs and errors.
    const NAME: &'static str;
    /// Path below [`API_PATH_PREFIX`].
    const PATH: &'static str;
    const METHOD: HttpMethod = HttpMethod::Post;
    const BEARER: BearerRequirement;

    /// JSON body of the request.
    fn body(&self) -> Result<Vec<u8>, DecodeError> {
        self.encode()
    }

    /// Absolute URL for this endpoint on `host`.
    fn url(host: &str) -> String {
        format!(
            "{}{}{}",
            host.trim_end_matches('/'),
            API_PATH_PREFIX,
            Self::PATH
        )
    }
}

// ─── Status envelopes ────────────────────────────────────────────────────────

/// `"status": "Success"`, the only value a plain success decoder accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuccessStatus {
    Success,
}

/// `"status": "Refused"`, the only value a specific-error decoder accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefusedStatus {
    Refused,
}

/// `{"status": "Success", "result": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessEnvelope<R> {
    pub status: SuccessStatus,
    pub result: R,
}

impl<R> SuccessEnvelope<R> {
    pub fn new(result: R) -> Self {
        Self {
            status: SuccessStatus::Success,
            result,
        }
    }
}

/// `{"status": "Refused", "error": "<Code>"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefusedEnvelope<C> {
    pub status: RefusedStatus,
    pub error: C,
}

impl<C> RefusedEnvelope<C> {
    pub fn new(error: C) -> Self {
        Self {
            status: RefusedStatus::Refused,
            error,
        }
    }
}

/// Decode an endpoint-specific refusal body.
pub fn decode_refused<C: DeserializeOwned>(bytes: &[u8]) -> Result<C, DecodeError> {
    let envelope: RefusedEnvelope<C> = decode_slice(bytes)?;
    Ok(envelope.error)
}
