//! HTTP layer: pluggable [`Transport`], the reqwest implementation and the
//! `WalletAuthHttp` dispatcher that ties credentials, hosts and resolution together.

pub mod client;
pub mod retry;
pub mod transport;

pub use client::WalletAuthHttp;
pub use retry::{with_retry, RetryConfig};
pub use transport::{HttpRequest, ReqwestTransport, Transport, DEFAULT_TIMEOUT};
