//! Credentials and header construction.
//!
//! ## Security Model
//!
//! - Credentials travel next to the request value, never inside it. Request bodies
//!   are credential-free and safe to log.
//! - The merchant client credential is sent with every call.
//! - The user's bearer (passport token and/or money-center token) is sent only to
//!   endpoints that take it. A missing required bearer fails locally, before I/O.
//! - [`Credentials`] never prints its secrets: `Debug` is redacted.

use crate::error::AuthError;
use crate::protocol::BearerRequirement;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const ACCEPT: &str = "Accept";
pub const MERCHANT_CLIENT_AUTHORIZATION: &str = "Merchant-Client-Authorization";
pub const PASSPORT_AUTHORIZATION: &str = "Passport-Authorization";
pub const AUTHORIZATION: &str = "Authorization";

const JSON: &str = "application/json";

/// Credential context of one API call.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    merchant_client: String,
    passport: Option<String>,
    money_center: Option<String>,
}

impl Credentials {
    /// `merchant_client` is the raw value placed after `Basic `.
    pub fn new(merchant_client: impl Into<String>) -> Self {
        Self {
            merchant_client: merchant_client.into(),
            passport: None,
            money_center: None,
        }
    }

    pub fn with_passport(mut self, token: impl Into<String>) -> Self {
        self.passport = Some(token.into());
        self
    }

    pub fn with_money_center(mut self, token: impl Into<String>) -> Self {
        self.money_center = Some(token.into());
        self
    }

    pub fn set_passport(&mut self, token: Option<String>) {
        self.passport = token;
    }

    pub fn set_money_center(&mut self, token: Option<String>) {
        self.money_center = token;
    }

    /// Drop both user tokens, keeping the merchant credential.
    pub fn clear_bearer(&mut self) {
        self.passport = None;
        self.money_center = None;
    }

    pub fn has_bearer(&self) -> bool {
        self.passport.is_some() || self.money_center.is_some()
    }

    /// Headers for a call to `endpoint` with the given bearer requirement.
    pub fn headers_for(
        &self,
        bearer: BearerRequirement,
        endpoint: &'static str,
    ) -> Result<Vec<(&'static str, String)>, AuthError> {
        if self.merchant_client.is_empty() {
            return Err(AuthError::MissingMerchantClient);
        }

        let mut headers = vec![
            (CONTENT_TYPE, JSON.to_string()),
            (ACCEPT, JSON.to_string()),
            (
                MERCHANT_CLIENT_AUTHORIZATION,
                format!("Basic {}", self.merchant_client),
            ),
        ];

        match bearer {
            BearerRequirement::None => {}
            BearerRequirement::Required if !self.has_bearer() => {
                return Err(AuthError::MissingBearer { endpoint });
            }
            BearerRequirement::Optional | BearerRequirement::Required => {
                if let Some(token) = &self.passport {
                    headers.push((PASSPORT_AUTHORIZATION, format!("Bearer {}", token)));
                }
                if let Some(token) = &self.money_center {
                    headers.push((AUTHORIZATION, format!("Bearer {}", token)));
                }
            }
        }

        Ok(headers)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn redact(value: &Option<String>) -> &'static str {
            if value.is_some() {
                "<redacted>"
            } else {
                "<none>"
            }
        }
        f.debug_struct("Credentials")
            .field("merchant_client", &"<redacted>")
            .field("passport", &redact(&self.passport))
            .field("money_center", &redact(&self.money_center))
            .finish()
    }
}
