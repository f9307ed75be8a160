//! Wire envelope for `auth-check`, whose `result` is optional.

use crate::domain::auth_state::AuthTypeState;
use crate::protocol::SuccessStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutAuthCheckEnvelope {
    pub status: SuccessStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AuthTypeState>,
}

impl CheckoutAuthCheckEnvelope {
    pub fn new(result: Option<AuthTypeState>) -> Self {
        Self {
            status: SuccessStatus::Success,
            result,
        }
    }
}
