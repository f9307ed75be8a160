//! Conversion: flat JSON object ⇄ AuthTypeState.

use super::wire::AuthTypeStateFields;
use super::{ActiveSession, AuthTypeState, Specific};
use crate::shared::serde_util::{decode_in_place, merge_object, probe};
use crate::shared::AuthType;
use serde_json::Value;

impl TryFrom<&Value> for AuthTypeState {
    type Error = serde_json::Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let fields: AuthTypeStateFields = decode_in_place(value)?;

        let specific = match fields.auth_type {
            AuthType::Sms => Specific::Sms(probe(value)),
            AuthType::Totp => Specific::Totp(probe(value)),
            AuthType::SecurePassword => Specific::SecurePassword,
            AuthType::Emergency => Specific::Emergency(probe(value)),
            AuthType::Push => Specific::Push(probe(value)),
            AuthType::OauthToken => Specific::OauthToken,
        };

        // Unlike the descriptor, a broken session block fails the whole state.
        let active_session = if fields.has_active_session {
            Some(decode_in_place::<ActiveSession>(value)?)
        } else {
            None
        };

        Ok(AuthTypeState {
            specific,
            active_session,
            can_be_issued: fields.can_be_issued,
            enabled: fields.enabled,
            is_session_required: fields.is_session_required,
        })
    }
}

impl TryFrom<&AuthTypeState> for Value {
    type Error = serde_json::Error;

    fn try_from(state: &AuthTypeState) -> Result<Self, Self::Error> {
        let mut object = serde_json::to_value(AuthTypeStateFields {
            auth_type: state.auth_type(),
            has_active_session: state.active_session.is_some(),
            can_be_issued: state.can_be_issued,
            enabled: state.enabled,
            is_session_required: state.is_session_required,
        })?;

        let descriptor = match &state.specific {
            Specific::Sms(d) => d.map(serde_json::to_value).transpose()?,
            Specific::Totp(d) => d.map(serde_json::to_value).transpose()?,
            Specific::Emergency(d) => d.map(serde_json::to_value).transpose()?,
            Specific::Push(d) => d.map(serde_json::to_value).transpose()?,
            Specific::SecurePassword | Specific::OauthToken => None,
        };
        if let Some(descriptor) = descriptor {
            merge_object(&mut object, descriptor);
        }
        if let Some(session) = &state.active_session {
            merge_object(&mut object, serde_json::to_value(session)?);
        }

        Ok(object)
    }
}
