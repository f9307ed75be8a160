//! Auth type state: what the server reports about one authentication method.
//!
//! On the wire every field lives in one flat object:
//!
//! ```json
//! {"type": "Sms", "codeLength": 6, "sessionsLeft": 13,
//!  "hasActiveSession": true, "attemptsCount": 10, "attemptsLeft": 11,
//!  "canBeIssued": false, "enabled": true, "isSessionRequired": true}
//! ```
//!
//! `type` selects the [`Specific`] variant, whose descriptor is probed from the
//! same object and silently dropped when it does not decode.

pub mod convert;
pub mod wire;

use crate::shared::AuthType;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;

/// Server-side state of one authentication method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTypeState {
    pub specific: Specific,
    /// `Some` iff the server reported `hasActiveSession = true`.
    pub active_session: Option<ActiveSession>,
    pub can_be_issued: bool,
    pub enabled: bool,
    pub is_session_required: bool,
}

impl AuthTypeState {
    pub fn auth_type(&self) -> AuthType {
        self.specific.auth_type()
    }

    pub fn has_active_session(&self) -> bool {
        self.active_session.is_some()
    }

    /// Remaining answer attempts of the active session, if any.
    pub fn attempts_left(&self) -> Option<u32> {
        self.active_session.map(|s| s.attempts_left)
    }
}

impl<'de> Deserialize<'de> for AuthTypeState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        AuthTypeState::try_from(&value).map_err(serde::de::Error::custom)
    }
}

impl Serialize for AuthTypeState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde_json::Value::try_from(self)
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

/// Attempt counters of a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSession {
    pub attempts_count: u32,
    pub attempts_left: u32,
}

// ─── Specific ────────────────────────────────────────────────────────────────

/// Method-specific part of an [`AuthTypeState`].
///
/// The descriptor may be absent even when the tag is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Specific {
    Sms(Option<SmsDescription>),
    Totp(Option<TotpDescription>),
    SecurePassword,
    Emergency(Option<EmergencyDescription>),
    Push(Option<PushDescription>),
    OauthToken,
}

impl Specific {
    pub fn auth_type(&self) -> AuthType {
        match self {
            Specific::Sms(_) => AuthType::Sms,
            Specific::Totp(_) => AuthType::Totp,
            Specific::SecurePassword => AuthType::SecurePassword,
            Specific::Emergency(_) => AuthType::Emergency,
            Specific::Push(_) => AuthType::Push,
            Specific::OauthToken => AuthType::OauthToken,
        }
    }

    /// Length of the code the user has to enter, when the method reports one.
    pub fn code_length(&self) -> Option<u32> {
        match self {
            Specific::Sms(Some(d)) => Some(d.code_length),
            Specific::Totp(Some(d)) => Some(d.code_length),
            Specific::Emergency(Some(d)) => Some(d.code_length),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsDescription {
    pub code_length: u32,
    pub sessions_left: u32,
    /// Seconds until the current session expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_time_left: Option<u64>,
    /// Seconds until a new session may be generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_session_time_left: Option<u64>,
}

impl SmsDescription {
    pub fn session_expires_in(&self) -> Option<Duration> {
        self.session_time_left.map(Duration::from_secs)
    }

    /// Cooldown before `auth-session-generate` is accepted again.
    pub fn next_session_available_in(&self) -> Option<Duration> {
        self.next_session_time_left.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotpDescription {
    pub code_length: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyDescription {
    pub codes_left: u32,
    pub code_length: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_time_left: Option<u64>,
}

impl PushDescription {
    pub fn session_expires_in(&self) -> Option<Duration> {
        self.session_time_left.map(Duration::from_secs)
    }
}
