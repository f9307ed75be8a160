//! End-to-end checkout flow through `WalletAuthClient` over a scripted transport.
//!
//! The transport answers each request with the next canned response and records
//! what was sent, so the tests can check both the flow and the wire traffic.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use wallet_auth_sdk::prelude::*;

struct Scripted {
    responses: Mutex<VecDeque<(&'static str, u16, &'static str)>>,
    sent: Mutex<Vec<HttpRequest>>,
}

impl Scripted {
    fn new(responses: Vec<(&'static str, u16, &'static str)>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            sent: Mutex::new(Vec::new()),
        })
    }

    fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for Scripted {
    async fn perform(&self, request: HttpRequest) -> RawResponse {
        let (path, status, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected request");
        assert!(
            request.url.ends_with(path),
            "expected call to {path}, got {}",
            request.url
        );
        self.sent.lock().unwrap().push(request);
        RawResponse::completed(status, body.as_bytes().to_vec())
    }
}

fn client(transport: Arc<Scripted>) -> WalletAuthClient {
    WalletAuthClient::builder()
        .host("https://wallet.example.test")
        .merchant_client_authorization("bWVyY2hhbnQ=")
        .passport_authorization("passport-token")
        .transport(transport)
        .build()
        .unwrap()
}

const INIT_AUTH_REQUIRED: &str =
    r#"{"status": "AuthRequired", "result": {"authContextId": "ctx-1", "processId": "proc-1"}}"#;

const CONTEXT: &str = r#"{
    "status": "Success",
    "result": {
        "authTypes": [
            {"type": "Sms", "codeLength": 4, "sessionsLeft": 3, "hasActiveSession": false, "canBeIssued": true, "enabled": true, "isSessionRequired": true},
            {"type": "Fingerprint", "hasActiveSession": false, "canBeIssued": true, "enabled": true, "isSessionRequired": false}
        ],
        "defaultAuthType": "Sms"
    }
}"#;

const SESSION: &str = r#"{
    "status": "Success",
    "result": {"type": "Sms", "codeLength": 4, "sessionsLeft": 2, "sessionTimeLeft": 300, "hasActiveSession": true, "attemptsCount": 3, "attemptsLeft": 3, "canBeIssued": true, "enabled": true, "isSessionRequired": true}
}"#;

const INVALID_ANSWER: &str = r#"{"status": "Refused", "error": "InvalidAnswer"}"#;
const CHECK_OK: &str = r#"{"status": "Success"}"#;
const TOKEN: &str = r#"{"status": "Success", "result": {"accessToken": "payment-token-1"}}"#;

#[tokio::test]
async fn test_full_flow_with_auth_required() {
    let transport = Scripted::new(vec![
        ("/checkout/token-issue-init", 200, INIT_AUTH_REQUIRED),
        ("/checkout/auth-context-get", 200, CONTEXT),
        ("/checkout/auth-session-generate", 200, SESSION),
        ("/checkout/auth-check", 200, INVALID_ANSWER),
        ("/checkout/auth-check", 200, CHECK_OK),
        ("/checkout/token-issue-execute", 200, TOKEN),
    ]);
    let client = client(transport.clone());
    let mut flow = AuthFlow::new();

    // Init
    assert_eq!(flow.next_step(), NextStep::InitTokenIssue);
    let request = CheckoutTokenIssueInitRequest::new("app-1", "tmx-1")
        .payment_usage_limit(PaymentUsageLimit::Multiple);
    let process = client.tokens().init(&request).await.unwrap();
    assert!(process.auth_required);
    flow.on_token_issue_init(process).unwrap();

    // Context (loop-back)
    let NextStep::GetAuthContext { auth_context_id } = flow.next_step() else {
        panic!("expected GetAuthContext, got {:?}", flow.next_step());
    };
    let context = client.auth_contexts().get(&auth_context_id).await.unwrap();
    assert_eq!(context.auth_types.len(), 1, "unknown auth type must be skipped");
    flow.on_context(context).unwrap();

    // Session
    let NextStep::GenerateSession {
        auth_context_id,
        auth_type,
    } = flow.next_step()
    else {
        panic!("expected GenerateSession");
    };
    let session = client
        .sessions()
        .generate(&auth_context_id, auth_type)
        .await
        .unwrap();
    flow.on_session_generated(auth_type, &session).unwrap();

    // Wrong answer, then the right one
    let err = client
        .checks()
        .check(&auth_context_id, auth_type, "0000")
        .await
        .unwrap_err();
    let refused = err.refused().copied().expect("refusal");
    assert_eq!(
        refused,
        RefusedError::AuthCheck(CheckoutAuthCheckError::InvalidAnswer)
    );
    flow.on_refused(&refused).unwrap();
    match flow.state() {
        FlowState::SessionActive { session, .. } => {
            assert_eq!(session.map(|s| s.attempts_left), Some(2))
        }
        other => panic!("unexpected state {other}"),
    }

    let check = client
        .checks()
        .check(&auth_context_id, auth_type, "1234")
        .await
        .unwrap();
    flow.on_checked(auth_type, &check).unwrap();

    // Execute the carried process
    let NextStep::ExecuteTokenIssue { process_id } = flow.next_step() else {
        panic!("expected ExecuteTokenIssue");
    };
    assert_eq!(process_id, "proc-1");
    let token = client.tokens().execute(&process_id).await.unwrap();
    assert_eq!(token.access_token(), "payment-token-1");
    flow.on_token_issued().unwrap();
    assert_eq!(flow.next_step(), NextStep::Done);

    // Wire traffic
    let sent = transport.sent();
    assert_eq!(sent.len(), 6);
    for request in &sent {
        assert_eq!(request.header("Merchant-Client-Authorization"), Some("Basic bWVyY2hhbnQ="));
        assert_eq!(request.header("Passport-Authorization"), Some("Bearer passport-token"));
        assert_eq!(request.header("Content-Type"), Some("application/json"));
    }
    let init_body: serde_json::Value = serde_json::from_slice(&sent[0].body).unwrap();
    assert_eq!(
        init_body,
        serde_json::json!({
            "instanceName": "app-1",
            "paymentUsageLimit": "Multiple",
            "tmxSessionId": "tmx-1"
        })
    );
    let check_body: serde_json::Value = serde_json::from_slice(&sent[4].body).unwrap();
    assert_eq!(check_body["answer"], "1234");
    assert_eq!(
        sent[5].url,
        "https://wallet.example.test/api/wallet-auth/v1/checkout/token-issue-execute"
    );
}

#[tokio::test]
async fn test_ready_process_skips_auth() {
    let transport = Scripted::new(vec![
        (
            "/checkout/token-issue-init",
            200,
            r#"{"status": "Success", "result": {"authContextId": "ctx-9", "processId": "proc-9"}}"#,
        ),
        ("/checkout/token-issue-execute", 200, TOKEN),
    ]);
    let client = client(transport);
    let mut flow = AuthFlow::new();

    let process = client
        .tokens()
        .init(&CheckoutTokenIssueInitRequest::new("app-1", "tmx-1"))
        .await
        .unwrap();
    flow.on_token_issue_init(process).unwrap();

    let request = flow.execute_request().unwrap();
    let token = client.send(&request).await.unwrap();
    assert_eq!(token.into_access_token(), "payment-token-1");
    flow.on_token_issued().unwrap();
}

#[tokio::test]
async fn test_auth_expired_restarts_issuance() {
    let transport = Scripted::new(vec![
        (
            "/checkout/token-issue-init",
            200,
            r#"{"status": "Success", "result": {"authContextId": "ctx-1", "processId": "proc-1"}}"#,
        ),
        (
            "/checkout/token-issue-execute",
            200,
            r#"{"status": "Refused", "error": "AuthExpired"}"#,
        ),
    ]);
    let client = client(transport);
    let mut flow = AuthFlow::new();

    let process = client
        .tokens()
        .init(&CheckoutTokenIssueInitRequest::new("app-1", "tmx-1"))
        .await
        .unwrap();
    flow.on_token_issue_init(process).unwrap();

    let err = client.tokens().execute("proc-1").await.unwrap_err();
    flow.on_refused(err.refused().unwrap()).unwrap();
    assert_eq!(flow.state(), &FlowState::Start);
    assert_eq!(flow.next_step(), NextStep::InitTokenIssue);
}

#[tokio::test]
async fn test_merchant_info_without_bearer() {
    let transport = Scripted::new(vec![(
        "/merchant-client-info",
        200,
        r#"{"status": "Success", "result": {"shopName": "Coffee"}}"#,
    )]);
    let client = client(transport.clone());
    client.clear_bearer().await;

    let info = client.merchant().info().await.unwrap();
    assert_eq!(info.shop_name, "Coffee");

    let sent = transport.sent();
    assert_eq!(sent[0].body, b"{}");
    assert_eq!(sent[0].header("Passport-Authorization"), None);
}

#[tokio::test]
async fn test_missing_bearer_never_reaches_transport() {
    let transport = Scripted::new(Vec::new());
    let client = client(transport.clone());
    client.clear_bearer().await;

    let err = client
        .sessions()
        .generate("ctx-1", AuthType::Sms)
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Auth(_)));
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn test_global_error_is_retry_hint() {
    let transport = Scripted::new(vec![(
        "/checkout/auth-context-get",
        500,
        r#"{"error": {"type": "TechnicalError"}}"#,
    )]);
    let client = client(transport);

    let err = client.auth_contexts().get("ctx-1").await.unwrap_err();
    assert!(matches!(err, SdkError::Api(WalletAuthApiError::TechnicalError)));
    assert!(err.is_retryable());
}
