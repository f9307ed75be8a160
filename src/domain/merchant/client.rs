//! Merchant sub-client.

use crate::client::WalletAuthClient;
use crate::domain::merchant::{MerchantClientInfo, MerchantClientInfoRequest};
use crate::error::SdkError;

pub struct Merchant<'a> {
    pub(crate) client: &'a WalletAuthClient,
}

impl<'a> Merchant<'a> {
    /// Shop details for the configured merchant client credential.
    pub async fn info(&self) -> Result<MerchantClientInfo, SdkError> {
        self.client.send(&MerchantClientInfoRequest::new()).await
    }
}
