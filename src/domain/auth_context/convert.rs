//! Conversion: CheckoutAuthContextGetResult ⇄ CheckoutAuthContextGet (stub-skip).

use super::wire::CheckoutAuthContextGetResult;
use super::CheckoutAuthContextGet;
use crate::domain::auth_state::AuthTypeState;
use crate::protocol::SuccessEnvelope;

impl From<SuccessEnvelope<CheckoutAuthContextGetResult>> for CheckoutAuthContextGet {
    fn from(envelope: SuccessEnvelope<CheckoutAuthContextGetResult>) -> Self {
        let result = envelope.result;
        let auth_types = result
            .auth_types
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| match AuthTypeState::try_from(entry) {
                Ok(state) => Some(state),
                Err(e) => {
                    tracing::debug!(index, error = %e, "skipping undecodable authTypes entry");
                    None
                }
            })
            .collect();

        Self {
            auth_types,
            default_auth_type: result.default_auth_type,
        }
    }
}

impl From<CheckoutAuthContextGet> for SuccessEnvelope<CheckoutAuthContextGetResult<AuthTypeState>> {
    fn from(response: CheckoutAuthContextGet) -> Self {
        SuccessEnvelope::new(CheckoutAuthContextGetResult {
            auth_types: response.auth_types,
            default_auth_type: response.default_auth_type,
        })
    }
}
