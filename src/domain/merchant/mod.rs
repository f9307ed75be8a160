//! Merchant discovery: who the merchant client credential belongs to.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::protocol::{BearerRequirement, Endpoint, NoSpecificError, SuccessEnvelope};
use serde::{Deserialize, Serialize};

/// `POST /merchant-client-info`, body `{}`. Never carries a bearer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantClientInfoRequest {}

impl MerchantClientInfoRequest {
    pub fn new() -> Self {
        Self {}
    }
}

impl Endpoint for MerchantClientInfoRequest {
    type Response = MerchantClientInfo;
    type Error = NoSpecificError;

    const NAME: &'static str = "merchant-client-info";
    const PATH: &'static str = "/merchant-client-info";
    const BEARER: BearerRequirement = BearerRequirement::None;
}

/// Merchant details bound to the merchant client credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "SuccessEnvelope<wire::MerchantClientInfoResult>",
    into = "SuccessEnvelope<wire::MerchantClientInfoResult>"
)]
pub struct MerchantClientInfo {
    pub shop_name: String,
}

impl MerchantClientInfo {
    pub fn new(shop_name: impl Into<String>) -> Self {
        Self {
            shop_name: shop_name.into(),
        }
    }
}

impl From<SuccessEnvelope<wire::MerchantClientInfoResult>> for MerchantClientInfo {
    fn from(envelope: SuccessEnvelope<wire::MerchantClientInfoResult>) -> Self {
        Self {
            shop_name: envelope.result.shop_name,
        }
    }
}

impl From<MerchantClientInfo> for SuccessEnvelope<wire::MerchantClientInfoResult> {
    fn from(info: MerchantClientInfo) -> Self {
        SuccessEnvelope::new(wire::MerchantClientInfoResult {
            shop_name: info.shop_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{WireDecode, WireEncode};

    #[test]
    fn test_request_body_is_empty_object() {
        let body = MerchantClientInfoRequest::new().body().unwrap();
        assert_eq!(body, b"{}");
    }

    #[test]
    fn test_decode_response() {
        let json = br#"{"status": "Success", "result": {"shopName": "Flower shop"}}"#;
        let info = MerchantClientInfo::decode(json).unwrap();
        assert_eq!(info.shop_name, "Flower shop");
    }

    #[test]
    fn test_decode_requires_success_status() {
        let json = br#"{"status": "Refused", "result": {"shopName": "Flower shop"}}"#;
        assert!(MerchantClientInfo::decode(json).is_err());
    }

    #[test]
    fn test_encode_response() {
        let bytes = MerchantClientInfo::new("Flower shop").encode().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"status": "Success", "result": {"shopName": "Flower shop"}})
        );
    }

    #[test]
    fn test_url() {
        assert_eq!(
            MerchantClientInfoRequest::url("https://wallet.example.test/"),
            "https://wallet.example.test/api/wallet-auth/v1/merchant-client-info"
        );
    }
}
