//! Conversion: token-issue wire envelopes ⇄ TokenIssueProcess / PaymentToken.

use super::wire::{
    CheckoutTokenIssueInitEnvelope, CheckoutTokenIssueInitResult, PaymentTokenResult,
    TokenIssueInitStatus,
};
use super::{PaymentToken, TokenIssueProcess};
use crate::protocol::SuccessEnvelope;

impl From<CheckoutTokenIssueInitEnvelope> for TokenIssueProcess {
    fn from(envelope: CheckoutTokenIssueInitEnvelope) -> Self {
        Self {
            process_id: envelope.result.process_id,
            auth_context_id: envelope.result.auth_context_id,
            auth_required: envelope.status == TokenIssueInitStatus::AuthRequired,
        }
    }
}

impl From<TokenIssueProcess> for CheckoutTokenIssueInitEnvelope {
    fn from(process: TokenIssueProcess) -> Self {
        Self {
            status: if process.auth_required {
                TokenIssueInitStatus::AuthRequired
            } else {
                TokenIssueInitStatus::Success
            },
            result: CheckoutTokenIssueInitResult {
                auth_context_id: process.auth_context_id,
                process_id: process.process_id,
            },
        }
    }
}

impl From<SuccessEnvelope<PaymentTokenResult>> for PaymentToken {
    fn from(envelope: SuccessEnvelope<PaymentTokenResult>) -> Self {
        PaymentToken::new(envelope.result.access_token)
    }
}

impl From<PaymentToken> for SuccessEnvelope<PaymentTokenResult> {
    fn from(token: PaymentToken) -> Self {
        SuccessEnvelope::new(PaymentTokenResult {
            access_token: token.into_access_token(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::token_issue::TokenIssueProcess;
    use crate::protocol::{WireDecode, WireEncode};

    #[test]
    fn test_success_status_means_ready() {
        let json = br#"{"status": "Success", "result": {"authContextId": "ctx-1", "processId": "proc-1"}}"#;
        let process = TokenIssueProcess::decode(json).unwrap();
        assert_eq!(process.process_id, "proc-1");
        assert_eq!(process.auth_context_id, "ctx-1");
        assert!(!process.auth_required);
    }

    #[test]
    fn test_auth_required_status() {
        let json = br#"{"status": "AuthRequired", "result": {"authContextId": "ctx-2", "processId": "proc-2"}}"#;
        let process = TokenIssueProcess::decode(json).unwrap();
        assert!(process.auth_required);
        assert_eq!(process.auth_context_id, "ctx-2");
    }

    #[test]
    fn test_refused_status_is_not_a_process() {
        let json = br#"{"status": "Refused", "result": {"authContextId": "ctx-1", "processId": "proc-1"}}"#;
        assert!(TokenIssueProcess::decode(json).is_err());
    }

    #[test]
    fn test_missing_process_id_fails() {
        let json = br#"{"status": "Success", "result": {"authContextId": "ctx-1"}}"#;
        assert!(TokenIssueProcess::decode(json).is_err());
    }

    #[test]
    fn test_encode_writes_status_from_flag() {
        let process = TokenIssueProcess {
            process_id: "proc-3".into(),
            auth_context_id: "ctx-3".into(),
            auth_required: true,
        };
        let value: serde_json::Value = serde_json::from_slice(&process.encode().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "AuthRequired",
                "result": {"authContextId": "ctx-3", "processId": "proc-3"}
            })
        );
    }
}
