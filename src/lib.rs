//! # Wallet-Auth SDK
//!
//! Rust client for the wallet authorization API: authenticate a wallet user and
//! issue a payment token for a merchant.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Shared value types, per-operation domain slices with their wire
//!    encoding, and the protocol layer (endpoint descriptors, error taxonomy,
//!    response resolution). Pure and synchronous.
//! 2. **Auth**: Credentials and header construction
//! 3. **HTTP API**: Pluggable `Transport`, the `reqwest` transport, `WalletAuthHttp`
//! 4. **Flow**: `AuthFlow`, the state machine ordering the calls
//! 5. **High-Level Client**: `WalletAuthClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wallet_auth_sdk::prelude::*;
//!
//! let client = WalletAuthClient::builder()
//!     .host("https://wallet.example.com")
//!     .merchant_client_authorization("bWVyY2hhbnQ6c2VjcmV0")
//!     .passport_authorization("user-token")
//!     .build()?;
//!
//! let mut flow = AuthFlow::new();
//! let request = CheckoutTokenIssueInitRequest::new("app-instance", "tmx-session");
//! let process = client.tokens().init(&request).await?;
//! flow.on_token_issue_init(process)?;
//!
//! if let NextStep::GetAuthContext { auth_context_id } = flow.next_step() {
//!     let context = client.auth_contexts().get(&auth_context_id).await?;
//!     flow.on_context(context)?;
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared value types used across all domains.
pub mod shared;

/// Domain modules (vertical slices): requests, responses, wire types, sub-clients.
pub mod domain;

/// Endpoint descriptors, status envelopes, global errors, response resolution.
pub mod protocol;

/// Unified SDK error types.
pub mod error;

/// Path constants and host resolution.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Credentials and header construction.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Transport, dispatcher and caller retry helper.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: Flow ────────────────────────────────────────────────────────────

/// Authorization flow state machine.
pub mod flow;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `WalletAuthClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared value types
    pub use crate::shared::{
        AuthParams, AuthParamsType, AuthType, CurrencyCode, MonetaryAmount, PaymentUsageLimit,
    };

    // Domain types: auth type state
    pub use crate::domain::auth_state::{
        ActiveSession, AuthTypeState, EmergencyDescription, PushDescription, SmsDescription,
        Specific, TotpDescription,
    };

    // Domain types: requests, responses, refusal codes
    pub use crate::domain::auth_check::{
        CheckoutAuthCheck, CheckoutAuthCheckError, CheckoutAuthCheckRequest,
    };
    pub use crate::domain::auth_context::{
        AuthContext, CheckoutAuthContextGet, CheckoutAuthContextGetError,
        CheckoutAuthContextGetRequest,
    };
    pub use crate::domain::auth_session::{
        CheckoutAuthSessionGenerate, CheckoutAuthSessionGenerateError,
        CheckoutAuthSessionGenerateRequest,
    };
    pub use crate::domain::merchant::{MerchantClientInfo, MerchantClientInfoRequest};
    pub use crate::domain::token_issue::{
        CheckoutTokenIssueExecuteError, CheckoutTokenIssueExecuteRequest,
        CheckoutTokenIssueInitError, CheckoutTokenIssueInitRequest, PaymentToken,
        TokenIssueProcess,
    };

    // Protocol
    pub use crate::protocol::{
        Endpoint, RawResponse, RefusedError, WalletAuthApiError, WireDecode, WireEncode,
    };

    // Errors
    pub use crate::error::SdkError;

    // Network + auth
    pub use crate::auth::Credentials;
    pub use crate::network::{HostProvider, StaticHostProvider};

    // Flow
    pub use crate::flow::{AuthFlow, FlowError, FlowState, NextStep};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthContextsClient, ChecksClient, MerchantClient, SessionsClient, TokensClient,
        WalletAuthClient, WalletAuthClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{with_retry, HttpRequest, RetryConfig, Transport};
}
