//! Token issuance sub-client.

use crate::client::WalletAuthClient;
use crate::domain::token_issue::{
    CheckoutTokenIssueExecuteRequest, CheckoutTokenIssueInitRequest, PaymentToken,
    TokenIssueProcess,
};
use crate::error::SdkError;

pub struct Tokens<'a> {
    pub(crate) client: &'a WalletAuthClient,
}

impl<'a> Tokens<'a> {
    /// Start a token-issue process.
    pub async fn init(
        &self,
        request: &CheckoutTokenIssueInitRequest,
    ) -> Result<TokenIssueProcess, SdkError> {
        self.client.send(request).await
    }

    /// Exchange a ready process for a payment token.
    pub async fn execute(&self, process_id: &str) -> Result<PaymentToken, SdkError> {
        self.client
            .send(&CheckoutTokenIssueExecuteRequest::new(process_id))
            .await
    }
}
