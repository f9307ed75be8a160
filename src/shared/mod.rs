//! Shared value types used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod serde_util;

use crate::error::DecodeError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── AuthType ────────────────────────────────────────────────────────────────

/// Authentication method discriminator.
///
/// Closed set: an unknown value is a hard decode failure everywhere except inside
/// the `authTypes` list of an auth context, where unknown entries are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthType {
    Sms,
    Totp,
    SecurePassword,
    Emergency,
    Push,
    OauthToken,
}

impl AuthType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sms => "Sms",
            Self::Totp => "Totp",
            Self::SecurePassword => "SecurePassword",
            Self::Emergency => "Emergency",
            Self::Push => "Push",
            Self::OauthToken => "OauthToken",
        }
    }
}

impl std::fmt::Display for AuthType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── CurrencyCode ────────────────────────────────────────────────────────────

/// ISO 4217 currency code accepted by the wallet API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Rub,
    Usd,
    Eur,
}

impl CurrencyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rub => "RUB",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── PaymentUsageLimit ───────────────────────────────────────────────────────

/// How many times an issued payment token may be charged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentUsageLimit {
    /// One-time token.
    #[default]
    Single,
    /// Unlimited (recurring) token.
    Multiple,
}

// ─── AuthParams ──────────────────────────────────────────────────────────────

/// How the application proves itself to the wallet; must match its registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthParamsType {
    Secret,
    Signature,
}

/// Application authorization parameters: a secret word or a request signature.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthParams {
    #[serde(rename = "type")]
    pub kind: AuthParamsType,
    pub value: String,
}

impl AuthParams {
    pub fn secret(value: impl Into<String>) -> Self {
        Self {
            kind: AuthParamsType::Secret,
            value: value.into(),
        }
    }

    pub fn signature(value: impl Into<String>) -> Self {
        Self {
            kind: AuthParamsType::Signature,
            value: value.into(),
        }
    }
}

impl std::fmt::Debug for AuthParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthParams")
            .field("kind", &self.kind)
            .field("value", &"<redacted>")
            .finish()
    }
}

// ─── MonetaryAmount ──────────────────────────────────────────────────────────

/// Amount with currency.
///
/// `value` travels as a decimal string (`"10.50"`), never as a JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MonetaryAmountWire", into = "MonetaryAmountWire")]
pub struct MonetaryAmount {
    pub value: Decimal,
    pub currency: CurrencyCode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MonetaryAmountWire {
    value: String,
    currency: CurrencyCode,
}

impl MonetaryAmount {
    pub fn new(value: Decimal, currency: CurrencyCode) -> Self {
        Self { value, currency }
    }
}

impl TryFrom<MonetaryAmountWire> for MonetaryAmount {
    type Error = DecodeError;

    fn try_from(wire: MonetaryAmountWire) -> Result<Self, Self::Error> {
        let value = Decimal::from_str(&wire.value).map_err(|e| {
            let reason = e.to_string();
            serde_util::record_decimal_failure(&wire.value, &reason);
            DecodeError::DecimalConversion {
                input: wire.value.clone(),
                reason,
            }
        })?;
        Ok(Self {
            value,
            currency: wire.currency,
        })
    }
}

impl From<MonetaryAmount> for MonetaryAmountWire {
    fn from(amount: MonetaryAmount) -> Self {
        Self {
            value: amount.value.to_string(),
            currency: amount.currency,
        }
    }
}

impl std::fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}
