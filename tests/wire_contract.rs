//! Wire contract of every endpoint, checked through the public resolver.
//!
//! Fixtures are shaped like real wallet API responses.

use std::fmt::Debug;

use rust_decimal::Decimal;
use wallet_auth_sdk::prelude::*;
use wallet_auth_sdk::protocol::resolve;

fn ok(body: &str) -> RawResponse {
    RawResponse::completed(200, body.as_bytes().to_vec())
}

fn assert_round_trip<T: WireEncode + WireDecode + PartialEq + Debug>(request: T) {
    let bytes = request.encode().unwrap();
    assert_eq!(T::decode(&bytes).unwrap(), request);
}

// ─── Requests ────────────────────────────────────────────────────────────────

#[test]
fn test_requests_decode_back_to_themselves() {
    assert_round_trip(MerchantClientInfoRequest::new());
    assert_round_trip(CheckoutAuthContextGetRequest::new("ctx-1"));
    assert_round_trip(CheckoutAuthSessionGenerateRequest::new("ctx-1", AuthType::Emergency));
    assert_round_trip(CheckoutAuthCheckRequest::new("ctx-1", AuthType::Totp, "123456"));
    assert_round_trip(CheckoutTokenIssueInitRequest::new("app-1", "tmx-1"));
    assert_round_trip(
        CheckoutTokenIssueInitRequest::new("app-1", "tmx-1")
            .single_amount_max(MonetaryAmount::new(Decimal::new(99950, 2), CurrencyCode::Eur))
            .payment_usage_limit(PaymentUsageLimit::Multiple),
    );
    assert_round_trip(CheckoutTokenIssueExecuteRequest::new("proc-1"));
}

// ─── Success payloads ────────────────────────────────────────────────────────

#[test]
fn test_merchant_client_info() {
    let info = resolve::<MerchantClientInfoRequest>(ok(
        r#"{"status": "Success", "result": {"shopName": "Book Shop"}}"#,
    ))
    .unwrap();
    assert_eq!(info.shop_name, "Book Shop");
}

#[test]
fn test_auth_context_get_keeps_known_methods() {
    let body = r#"{
        "status": "Success",
        "result": {
            "authTypes": [
                {"type": "Totp", "codeLength": 6, "hasActiveSession": false, "canBeIssued": true, "enabled": true, "isSessionRequired": false},
                {"type": "Voice", "hasActiveSession": false, "canBeIssued": true, "enabled": true, "isSessionRequired": true},
                {"type": "SecurePassword", "hasActiveSession": false, "canBeIssued": false, "enabled": false, "isSessionRequired": false}
            ],
            "defaultAuthType": "Totp"
        }
    }"#;
    let response = resolve::<CheckoutAuthContextGetRequest>(ok(body)).unwrap();
    let kinds: Vec<AuthType> = response.auth_types.iter().map(|s| s.auth_type()).collect();
    assert_eq!(kinds, vec![AuthType::Totp, AuthType::SecurePassword]);
    assert_eq!(response.default_auth_type, AuthType::Totp);

    let context = AuthContext::new("ctx-1", response);
    let enabled: Vec<AuthType> = context.enabled().map(|s| s.auth_type()).collect();
    assert_eq!(enabled, vec![AuthType::Totp]);
    assert_eq!(context.preferred_auth_type(), Some(AuthType::Totp));
}

#[test]
fn test_auth_session_generate() {
    let body = r#"{
        "status": "Success",
        "result": {"type": "Push", "sessionTimeLeft": 90, "hasActiveSession": true, "attemptsCount": 1, "attemptsLeft": 1, "canBeIssued": true, "enabled": true, "isSessionRequired": true}
    }"#;
    let response = resolve::<CheckoutAuthSessionGenerateRequest>(ok(body)).unwrap();
    assert_eq!(response.result.auth_type(), AuthType::Push);
    assert_eq!(response.result.attempts_left(), Some(1));
    assert_eq!(
        response.result.specific,
        Specific::Push(Some(PushDescription {
            session_time_left: Some(90)
        }))
    );
}

#[test]
fn test_auth_check_with_and_without_result() {
    let bare = resolve::<CheckoutAuthCheckRequest>(ok(r#"{"status": "Success"}"#)).unwrap();
    assert!(bare.result.is_none());

    let body = r#"{
        "status": "Success",
        "result": {"type": "Emergency", "codesLeft": 4, "codeLength": 8, "hasActiveSession": false, "canBeIssued": true, "enabled": true, "isSessionRequired": false}
    }"#;
    let full = resolve::<CheckoutAuthCheckRequest>(ok(body)).unwrap();
    assert_eq!(
        full.result.map(|s| s.specific),
        Some(Specific::Emergency(Some(EmergencyDescription {
            codes_left: 4,
            code_length: 8
        })))
    );
}

#[test]
fn test_token_issue_init_both_statuses() {
    let ready = resolve::<CheckoutTokenIssueInitRequest>(ok(
        r#"{"status": "Success", "result": {"authContextId": "ctx-1", "processId": "proc-1"}}"#,
    ))
    .unwrap();
    assert!(!ready.auth_required);
    assert_eq!(ready.process_id, "proc-1");

    let gated = resolve::<CheckoutTokenIssueInitRequest>(ok(
        r#"{"status": "AuthRequired", "result": {"authContextId": "ctx-2", "processId": "proc-2"}}"#,
    ))
    .unwrap();
    assert!(gated.auth_required);
    assert_eq!(gated.auth_context_id, "ctx-2");
}

#[test]
fn test_token_issue_execute() {
    let token = resolve::<CheckoutTokenIssueExecuteRequest>(ok(
        r#"{"status": "Success", "result": {"accessToken": "tok-123"}}"#,
    ))
    .unwrap();
    assert_eq!(token.access_token(), "tok-123");
    assert!(!format!("{:?}", token).contains("tok-123"));
}

// ─── Refusals ────────────────────────────────────────────────────────────────

#[test]
fn test_refusal_codes_per_endpoint() {
    let refused = |body: &str| -> RefusedError {
        match resolve::<CheckoutAuthCheckRequest>(ok(body)) {
            Err(SdkError::Refused(e)) => e,
            other => panic!("expected refusal, got {:?}", other),
        }
    };
    assert_eq!(
        refused(r#"{"status": "Refused", "error": "SessionExpired"}"#),
        RefusedError::AuthCheck(CheckoutAuthCheckError::SessionExpired)
    );
    assert_eq!(
        refused(r#"{"status": "Refused", "error": "VerifyAttemptsExceeded"}"#),
        RefusedError::AuthCheck(CheckoutAuthCheckError::VerifyAttemptsExceeded)
    );

    let err = resolve::<CheckoutTokenIssueInitRequest>(ok(
        r#"{"status": "Refused", "error": "AccountNotFound"}"#,
    ))
    .unwrap_err();
    assert_eq!(
        err.refused(),
        Some(&RefusedError::TokenIssueInit(
            CheckoutTokenIssueInitError::AccountNotFound
        ))
    );
}

#[test]
fn test_code_of_another_endpoint_is_a_mapping_failure() {
    // AccountNotFound is not an auth-check code.
    let err = resolve::<CheckoutAuthCheckRequest>(ok(
        r#"{"status": "Refused", "error": "AccountNotFound"}"#,
    ))
    .unwrap_err();
    assert!(matches!(err, SdkError::Mapping(_)));
}

#[test]
fn test_merchant_info_has_no_refusals() {
    let err = resolve::<MerchantClientInfoRequest>(ok(
        r#"{"status": "Refused", "error": "InvalidContext"}"#,
    ))
    .unwrap_err();
    assert!(matches!(err, SdkError::Mapping(_)));
}

// ─── Global errors ───────────────────────────────────────────────────────────

#[test]
fn test_global_errors_on_any_status() {
    for status in [200, 400, 401, 503] {
        let raw = RawResponse::completed(
            status,
            br#"{"error": {"type": "IllegalHeaders", "headerNames": ["Passport-Authorization"]}}"#
                .to_vec(),
        );
        match resolve::<CheckoutAuthSessionGenerateRequest>(raw) {
            Err(SdkError::Api(WalletAuthApiError::IllegalHeaders(header_names))) => {
                assert_eq!(header_names, vec!["Passport-Authorization".to_string()])
            }
            other => panic!("status {}: unexpected {:?}", status, other),
        }
    }
}

#[test]
fn test_success_body_with_error_status_still_succeeds() {
    let raw = RawResponse::completed(
        500,
        br#"{"status": "Success", "result": {"shopName": "Late"}}"#.to_vec(),
    );
    assert_eq!(
        resolve::<MerchantClientInfoRequest>(raw).unwrap().shop_name,
        "Late"
    );
}
