//! Wire types for `auth-context-get`.

use crate::shared::AuthType;
use serde::{Deserialize, Serialize};

/// `result` object of `auth-context-get`.
///
/// Decoded with raw JSON entries so that each `authTypes` element can fail on its
/// own; encoded with typed states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutAuthContextGetResult<T = serde_json::Value> {
    pub auth_types: Vec<T>,
    pub default_auth_type: AuthType,
}
