//! Wire types for the merchant discovery call.

use serde::{Deserialize, Serialize};

/// `result` object of `merchant-client-info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantClientInfoResult {
    pub shop_name: String,
}
