use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use bytes::Bytes;
use common_utils::{request::Request, types::MinorUnit, CustomResult};
use domain_types::router_response_types::HttpResponse;
use gateway_client::{
    ChargeData, ConnectorEnum, Credentials, ErrorKind, GatewayClient, GatewayError, HttpTransport,
    PaymentOperation, QueryData, RefundData, VoidData,
};
use hyperswitch_masking::{ExposeInterface, Secret};

#[derive(Debug)]
struct CapturedRequest {
    url: String,
    body: Option<serde_json::Value>,
}

/// Scripted transport. Pops one canned response per send and records what
/// was sent.
#[derive(Default)]
struct MockTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    send_count: AtomicUsize,
    last_request: Mutex<Option<CapturedRequest>>,
}

impl MockTransport {
    fn replying(response: HttpResponse) -> Self {
        let transport = Self::default();
        transport.responses.lock().unwrap().push_back(response);
        transport
    }

    fn sends(&self) -> usize {
        self.send_count.load(Ordering::SeqCst)
    }

    fn last_request_url(&self) -> String {
        self.last_request
            .lock()
            .unwrap()
            .as_ref()
            .map(|captured| captured.url.clone())
            .unwrap_or_default()
    }

    fn last_request_body(&self) -> serde_json::Value {
        self.last_request
            .lock()
            .unwrap()
            .as_ref()
            .and_then(|captured| captured.body.clone())
            .unwrap_or(serde_json::Value::Null)
    }
}

#[async_trait::async_trait]
impl HttpTransport for MockTransport {
    async fn send(
        &self,
        request: Request,
    ) -> CustomResult<HttpResponse, domain_types::errors::ApiClientError> {
        self.send_count.fetch_add(1, Ordering::SeqCst);
        let body = request
            .body
            .as_ref()
            .and_then(|content| serde_json::from_str(&content.get_inner_value().expose()).ok());
        *self.last_request.lock().unwrap() = Some(CapturedRequest {
            url: request.url.clone(),
            body,
        });
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| HttpResponse::transport_failure("no scripted response"));
        Ok(response)
    }
}

fn delivered(status_code: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        is_error: false,
        message: String::new(),
        raw_body: Bytes::from(body.to_string()),
        headers: Default::default(),
    }
}

fn sandbox_credentials() -> Credentials {
    Credentials::new("merchant_login", "transaction_key", true)
}

fn charge(amount: i64) -> PaymentOperation {
    PaymentOperation::Charge(ChargeData {
        amount: MinorUnit::new(amount),
        card_token: Secret::new("tok_opaque_1".to_string()),
    })
}

const APPROVED_BODY: &str = r#"{
    "transactionResponse": {"responseCode": "1", "transId": "60123456789"},
    "messages": {"resultCode": "Ok", "message": [{"code": "I00001", "text": "Successful."}]}
}"#;

#[tokio::test]
async fn live_mode_with_empty_credentials_fails_without_network_traffic() {
    let transport = MockTransport::default();
    let client = GatewayClient::with_transport(ConnectorEnum::Authorizedotnet, transport);

    let result = client
        .execute(charge(1000), &Credentials::new("", "", false))
        .await;

    assert!(matches!(
        result.unwrap_err().current_context(),
        GatewayError::InvalidCredentials
    ));
    assert_eq!(client.transport().sends(), 0);
}

#[tokio::test]
async fn invalid_operation_fails_without_network_traffic() {
    let transport = MockTransport::default();
    let client = GatewayClient::with_transport(ConnectorEnum::Authorizedotnet, transport);
    let credentials = sandbox_credentials();

    let zero_amount = client.execute(charge(0), &credentials).await;
    assert!(matches!(
        zero_amount.unwrap_err().current_context(),
        GatewayError::InvalidOperation
    ));

    let missing_reference = client
        .execute(
            PaymentOperation::Refund(RefundData {
                amount: MinorUnit::new(500),
                transaction_id: String::new(),
            }),
            &credentials,
        )
        .await;
    assert!(matches!(
        missing_reference.unwrap_err().current_context(),
        GatewayError::InvalidOperation
    ));

    assert_eq!(client.transport().sends(), 0);
}

#[tokio::test]
async fn sandbox_charge_normalizes_approval_and_targets_sandbox_endpoint() {
    let transport = MockTransport::replying(delivered(200, APPROVED_BODY));
    let client = GatewayClient::with_transport(ConnectorEnum::Authorizedotnet, transport);

    let result = client
        .execute(charge(1050), &sandbox_credentials())
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.error_kind, None);
    assert_eq!(result.status_code, 200);
    let expected_payload: serde_json::Value = serde_json::from_str(APPROVED_BODY).unwrap();
    assert_eq!(result.provider_payload, expected_payload);

    let transport = client.transport();
    assert_eq!(transport.sends(), 1);
    assert!(transport.last_request_url().contains("apitest.authorize.net"));
    let body = transport.last_request_body();
    assert_eq!(
        body["createTransactionRequest"]["transactionRequest"]["amount"],
        "10.50"
    );
}

#[tokio::test]
async fn declined_charge_normalizes_to_declined() {
    let body = r#"{
        "transactionResponse": {"responseCode": "2", "transId": "60123456789"},
        "messages": {"resultCode": "Ok", "message": [{"code": "I00001", "text": "Successful."}]}
    }"#;
    let transport = MockTransport::replying(delivered(200, body));
    let client = GatewayClient::with_transport(ConnectorEnum::Authorizedotnet, transport);

    let result = client
        .execute(charge(1050), &sandbox_credentials())
        .await
        .unwrap();

    assert!(!result.success);
    assert_eq!(result.error_kind, Some(ErrorKind::Declined));
}

#[tokio::test]
async fn timeout_normalizes_to_network_error() {
    let transport =
        MockTransport::replying(HttpResponse::transport_failure("connector request timed out"));
    let client = GatewayClient::with_transport(ConnectorEnum::Authorizedotnet, transport);

    let result = client
        .execute(charge(1050), &sandbox_credentials())
        .await
        .unwrap();

    assert!(!result.success);
    assert_eq!(result.error_kind, Some(ErrorKind::NetworkError));
    assert_eq!(result.status_code, 0);
    assert_eq!(result.message, "connector request timed out");
}

#[tokio::test]
async fn status_zero_wins_over_approval_looking_body() {
    let response = HttpResponse {
        status_code: 0,
        is_error: true,
        message: "connection reset".to_string(),
        raw_body: Bytes::from(APPROVED_BODY.to_string()),
        headers: Default::default(),
    };
    let transport = MockTransport::replying(response);
    let client = GatewayClient::with_transport(ConnectorEnum::Authorizedotnet, transport);

    let result = client
        .execute(charge(1050), &sandbox_credentials())
        .await
        .unwrap();

    assert!(!result.success);
    assert_eq!(result.error_kind, Some(ErrorKind::NetworkError));
    assert_eq!(result.status_code, 0);
}

#[tokio::test]
async fn unparsable_success_body_normalizes_to_malformed() {
    let transport = MockTransport::replying(delivered(200, "<html>oops</html>"));
    let client = GatewayClient::with_transport(ConnectorEnum::Authorizedotnet, transport);

    let result = client
        .execute(charge(1050), &sandbox_credentials())
        .await
        .unwrap();

    assert_eq!(result.error_kind, Some(ErrorKind::MalformedResponse));
}

#[tokio::test]
async fn http_status_classes_map_to_client_and_provider_errors() {
    let credentials = sandbox_credentials().with_integrator_id("integrator_7");

    let transport = MockTransport::replying(delivered(
        401,
        r#"{"success": false, "status_message": "Please provide a valid integration key."}"#,
    ));
    let client = GatewayClient::with_transport(ConnectorEnum::Paytrace, transport);
    let result = client.execute(charge(1050), &credentials).await.unwrap();
    assert_eq!(result.error_kind, Some(ErrorKind::ClientError));
    assert_eq!(result.message, "Please provide a valid integration key.");

    let transport = MockTransport::replying(delivered(502, "bad gateway"));
    let client = GatewayClient::with_transport(ConnectorEnum::Paytrace, transport);
    let result = client.execute(charge(1050), &credentials).await.unwrap();
    assert_eq!(result.error_kind, Some(ErrorKind::ProviderError));
}

#[tokio::test]
async fn paytrace_without_integrator_id_fails_before_network() {
    let transport = MockTransport::default();
    let client = GatewayClient::with_transport(ConnectorEnum::Paytrace, transport);

    let result = client.execute(charge(1050), &sandbox_credentials()).await;

    assert!(matches!(
        result.unwrap_err().current_context(),
        GatewayError::InvalidCredentials
    ));
    assert_eq!(client.transport().sends(), 0);
}

#[tokio::test]
async fn void_and_query_flows_round_trip() {
    let transport = MockTransport::replying(delivered(
        200,
        r#"{
            "transactionResponse": {"responseCode": "1", "transId": "60123456789"},
            "messages": {"resultCode": "Ok", "message": []}
        }"#,
    ));
    let client = GatewayClient::with_transport(ConnectorEnum::Authorizedotnet, transport);
    let result = client
        .execute(
            PaymentOperation::Void(VoidData {
                transaction_id: "60123456789".to_string(),
            }),
            &sandbox_credentials(),
        )
        .await
        .unwrap();
    assert!(result.success);

    let transport = MockTransport::replying(delivered(
        200,
        r#"{
            "transaction": {"transId": "60123456789", "transactionStatus": "settledSuccessfully"},
            "messages": {"resultCode": "Ok", "message": []}
        }"#,
    ));
    let client = GatewayClient::with_transport(ConnectorEnum::Authorizedotnet, transport);
    let result = client
        .execute(
            PaymentOperation::Query(QueryData {
                transaction_id: "60123456789".to_string(),
            }),
            &sandbox_credentials(),
        )
        .await
        .unwrap();
    assert!(result.success);
    assert_eq!(result.message, "settledSuccessfully");
}
