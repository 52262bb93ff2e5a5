use bytes::Bytes;
use common_utils::{request::Method, types::MinorUnit};
use domain_types::{
    connector_flow::{Charge, Query, Refund, Void},
    connector_types::{ChargeData, QueryData, RefundData, VoidData},
    credentials::Credentials,
    router_data::GatewayRouterData,
    router_response_types::{ErrorKind, HttpResponse},
};
use hyperswitch_masking::{ExposeInterface, Secret};
use interfaces::connector_integration::{ConnectorCommon, ConnectorIntegration};

use super::{Authorizedotnet, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};

fn credentials(sandbox: bool) -> Credentials {
    Credentials::new("merchant_login", "transaction_key", sandbox)
}

fn charge_data() -> GatewayRouterData<Charge, ChargeData> {
    GatewayRouterData::new(
        credentials(true),
        ChargeData {
            amount: MinorUnit::new(1050),
            card_token: Secret::new("tok_opaque_1".to_string()),
        },
    )
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

fn body_as_json(request: &common_utils::request::Request) -> serde_json::Value {
    let body = request.body.as_ref().unwrap().get_inner_value().expose();
    serde_json::from_str(&body).unwrap()
}

#[test]
fn charge_request_shape() {
    let router_data = charge_data();
    let request = ConnectorIntegration::<Charge, ChargeData>::build_request(
        &Authorizedotnet,
        &router_data,
    )
    .unwrap();

    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, SANDBOX_BASE_URL);

    let body = body_as_json(&request);
    let envelope = &body["createTransactionRequest"];
    assert_eq!(envelope["merchantAuthentication"]["name"], "merchant_login");
    assert_eq!(
        envelope["merchantAuthentication"]["transactionKey"],
        "transaction_key"
    );
    assert_eq!(
        envelope["transactionRequest"]["transactionType"],
        "authCaptureTransaction"
    );
    assert_eq!(envelope["transactionRequest"]["amount"], "10.50");
    assert_eq!(
        envelope["transactionRequest"]["payment"]["opaqueData"]["dataValue"],
        "tok_opaque_1"
    );
    assert!(envelope["transactionRequest"]
        .get("refTransId")
        .is_none());
}

#[test]
fn live_credentials_select_production_url() {
    let router_data = GatewayRouterData::new(
        credentials(false),
        ChargeData {
            amount: MinorUnit::new(100),
            card_token: Secret::new("tok_opaque_1".to_string()),
        },
    );
    let url =
        ConnectorIntegration::<Charge, ChargeData>::get_url(&Authorizedotnet, &router_data)
            .unwrap();
    assert_eq!(url, PRODUCTION_BASE_URL);
}

#[test]
fn refund_request_carries_reference_and_amount() {
    let router_data = GatewayRouterData::new(
        credentials(true),
        RefundData {
            amount: MinorUnit::new(250),
            transaction_id: "60123456789".to_string(),
        },
    );
    let request = ConnectorIntegration::<Refund, RefundData>::build_request(
        &Authorizedotnet,
        &router_data,
    )
    .unwrap();

    let body = body_as_json(&request);
    let transaction = &body["createTransactionRequest"]["transactionRequest"];
    assert_eq!(transaction["transactionType"], "refundTransaction");
    assert_eq!(transaction["amount"], "2.50");
    assert_eq!(transaction["refTransId"], "60123456789");
}

#[test]
fn void_request_omits_amount() {
    let router_data = GatewayRouterData::new(
        credentials(true),
        VoidData {
            transaction_id: "60123456789".to_string(),
        },
    );
    let request = ConnectorIntegration::<Void, VoidData>::build_request(
        &Authorizedotnet,
        &router_data,
    )
    .unwrap();

    let body = body_as_json(&request);
    let transaction = &body["createTransactionRequest"]["transactionRequest"];
    assert_eq!(transaction["transactionType"], "voidTransaction");
    assert!(transaction.get("amount").is_none());
    assert_eq!(transaction["refTransId"], "60123456789");
}

#[test]
fn query_request_shape() {
    let router_data = GatewayRouterData::new(
        credentials(true),
        QueryData {
            transaction_id: "60123456789".to_string(),
        },
    );
    let request = ConnectorIntegration::<Query, QueryData>::build_request(
        &Authorizedotnet,
        &router_data,
    )
    .unwrap();

    let body = body_as_json(&request);
    let envelope = &body["getTransactionDetailsRequest"];
    assert_eq!(envelope["transId"], "60123456789");
    assert_eq!(envelope["merchantAuthentication"]["name"], "merchant_login");
}

#[test]
fn approved_transaction_normalizes_to_success() {
    let router_data = charge_data();
    let response = delivered(
        200,
        r#"{
            "transactionResponse": {"responseCode": "1", "transId": "60123456789"},
            "messages": {
                "resultCode": "Ok",
                "message": [{"code": "I00001", "text": "Successful."}]
            }
        }"#,
    );

    let result = ConnectorIntegration::<Charge, ChargeData>::handle_response(
        &Authorizedotnet,
        &router_data,
        &response,
    )
    .unwrap();

    assert!(result.success);
    assert_eq!(result.error_kind, None);
    assert_eq!(result.status_code, 200);
    assert_eq!(result.message, "Successful.");
    assert_eq!(
        result.provider_payload["transactionResponse"]["transId"],
        "60123456789"
    );
}

#[test]
fn declined_transaction_normalizes_to_declined() {
    let router_data = charge_data();
    let response = delivered(
        200,
        r#"{
            "transactionResponse": {"responseCode": "2", "transId": "60123456789"},
            "messages": {
                "resultCode": "Ok",
                "message": [{"code": "I00001", "text": "Successful."}]
            }
        }"#,
    );

    let result = ConnectorIntegration::<Charge, ChargeData>::handle_response(
        &Authorizedotnet,
        &router_data,
        &response,
    )
    .unwrap();

    assert!(!result.success);
    assert_eq!(result.error_kind, Some(ErrorKind::Declined));
}

#[test]
fn envelope_error_normalizes_to_declined() {
    let router_data = charge_data();
    let response = delivered(
        200,
        r#"{
            "messages": {
                "resultCode": "Error",
                "message": [{"code": "E00007", "text": "User authentication failed."}]
            }
        }"#,
    );

    let result = ConnectorIntegration::<Charge, ChargeData>::handle_response(
        &Authorizedotnet,
        &router_data,
        &response,
    )
    .unwrap();

    assert!(!result.success);
    assert_eq!(result.error_kind, Some(ErrorKind::Declined));
    assert_eq!(result.message, "User authentication failed.");
}

#[test]
fn unparsable_body_normalizes_to_malformed() {
    let router_data = charge_data();
    let response = delivered(200, "<html>gateway error</html>");

    let result = ConnectorIntegration::<Charge, ChargeData>::handle_response(
        &Authorizedotnet,
        &router_data,
        &response,
    )
    .unwrap();

    assert!(!result.success);
    assert_eq!(result.error_kind, Some(ErrorKind::MalformedResponse));
    assert_eq!(result.provider_payload, serde_json::Value::Null);
}

#[test]
fn parsable_but_unexpected_body_keeps_payload() {
    let router_data = charge_data();
    let response = delivered(200, r#"{"unexpected": true}"#);

    let result = ConnectorIntegration::<Charge, ChargeData>::handle_response(
        &Authorizedotnet,
        &router_data,
        &response,
    )
    .unwrap();

    assert_eq!(result.error_kind, Some(ErrorKind::MalformedResponse));
    assert_eq!(result.provider_payload["unexpected"], true);
}

#[test]
fn normalization_is_idempotent() {
    let router_data = charge_data();
    let response = delivered(
        200,
        r#"{
            "transactionResponse": {"responseCode": "1", "transId": "60123456789"},
            "messages": {"resultCode": "Ok", "message": []}
        }"#,
    );

    let first = ConnectorIntegration::<Charge, ChargeData>::handle_response(
        &Authorizedotnet,
        &router_data,
        &response,
    )
    .unwrap();
    let second = ConnectorIntegration::<Charge, ChargeData>::handle_response(
        &Authorizedotnet,
        &router_data,
        &response,
    )
    .unwrap();

    assert_eq!(first, second);
}

#[test]
fn query_details_normalize_to_success() {
    let router_data = GatewayRouterData::new(
        credentials(true),
        QueryData {
            transaction_id: "60123456789".to_string(),
        },
    );
    let response = delivered(
        200,
        r#"{
            "transaction": {
                "transId": "60123456789",
                "transactionStatus": "settledSuccessfully",
                "responseCode": 1
            },
            "messages": {
                "resultCode": "Ok",
                "message": [{"code": "I00001", "text": "Successful."}]
            }
        }"#,
    );

    let result = ConnectorIntegration::<Query, QueryData>::handle_response(
        &Authorizedotnet,
        &router_data,
        &response,
    )
    .unwrap();

    assert!(result.success);
    assert_eq!(result.message, "settledSuccessfully");
}

#[test]
fn http_error_classifies_by_status_class() {
    let client_error = delivered(
        400,
        r#"{"messages": {"resultCode": "Error", "message": [{"code": "E00003", "text": "Bad request."}]}}"#,
    );
    let result = Authorizedotnet.build_error_response(&client_error).unwrap();
    assert_eq!(result.error_kind, Some(ErrorKind::ClientError));
    assert_eq!(result.message, "Bad request.");

    let server_error = delivered(503, "upstream unavailable");
    let result = Authorizedotnet.build_error_response(&server_error).unwrap();
    assert_eq!(result.error_kind, Some(ErrorKind::ProviderError));
    assert_eq!(result.provider_payload, serde_json::Value::Null);
}
