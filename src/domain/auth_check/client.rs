//! Auth checks sub-client.

use crate::client::WalletAuthClient;
use crate::domain::auth_check::{CheckoutAuthCheck, CheckoutAuthCheckRequest};
use crate::error::SdkError;
use crate::shared::AuthType;

pub struct Checks<'a> {
    pub(crate) client: &'a WalletAuthClient,
}

impl<'a> Checks<'a> {
    /// Submit `answer` for `auth_type`. Consumes one attempt on the server.
    pub async fn check(
        &self,
        auth_context_id: &str,
        auth_type: AuthType,
        answer: &str,
    ) -> Result<CheckoutAuthCheck, SdkError> {
        self.client
            .send(&CheckoutAuthCheckRequest::new(auth_context_id, auth_type, answer))
            .await
    }
}
