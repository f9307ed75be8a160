//! Auth sessions sub-client.

use crate::client::WalletAuthClient;
use crate::domain::auth_session::{CheckoutAuthSessionGenerate, CheckoutAuthSessionGenerateRequest};
use crate::error::SdkError;
use crate::shared::AuthType;

pub struct Sessions<'a> {
    pub(crate) client: &'a WalletAuthClient,
}

impl<'a> Sessions<'a> {
    /// Open an answer window for `auth_type` within the context.
    pub async fn generate(
        &self,
        auth_context_id: &str,
        auth_type: AuthType,
    ) -> Result<CheckoutAuthSessionGenerate, SdkError> {
        self.client
            .send(&CheckoutAuthSessionGenerateRequest::new(auth_context_id, auth_type))
            .await
    }
}
