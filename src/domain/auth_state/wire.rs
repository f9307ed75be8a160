//! Wire shape of the common `AuthTypeState` fields.

use crate::shared::AuthType;
use serde::{Deserialize, Serialize};

/// Fields every auth type state carries, regardless of its `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTypeStateFields {
    #[serde(rename = "type")]
    pub auth_type: AuthType,
    pub has_active_session: bool,
    pub can_be_issued: bool,
    pub enabled: bool,
    pub is_session_required: bool,
}
