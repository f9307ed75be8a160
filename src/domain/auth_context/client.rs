//! Auth contexts sub-client.

use crate::client::WalletAuthClient;
use crate::domain::auth_context::{AuthContext, CheckoutAuthContextGetRequest};
use crate::error::SdkError;

pub struct AuthContexts<'a> {
    pub(crate) client: &'a WalletAuthClient,
}

impl<'a> AuthContexts<'a> {
    /// Fetch the methods available for `auth_context_id`.
    pub async fn get(&self, auth_context_id: &str) -> Result<AuthContext, SdkError> {
        let response = self
            .client
            .send(&CheckoutAuthContextGetRequest::new(auth_context_id))
            .await?;
        Ok(AuthContext::new(auth_context_id, response))
    }
}
