use common_utils::{consts, CustomResult};
use domain_types::{
    connector_flow::{Charge, Query, Refund, Void},
    connector_types::{ChargeData, QueryData, RefundData, VoidData},
    credentials::Credentials,
    errors::ConnectorError,
    router_data::GatewayRouterData,
    router_response_types::{HttpResponse, NormalizedResult},
};
use error_stack::report;
use hyperswitch_masking::{PeekInterface, Secret};
use serde::{Deserialize, Serialize};

type Error = error_stack::Report<ConnectorError>;

const OPAQUE_DATA_DESCRIPTOR: &str = "COMMON.ACCEPT.INAPP.PAYMENT";
const RESPONSE_CODE_APPROVED: &str = "1";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantAuthentication {
    name: Secret<String>,
    transaction_key: Secret<String>,
}

impl From<&Credentials> for MerchantAuthentication {
    fn from(credentials: &Credentials) -> Self {
        Self {
            name: credentials.login.clone(),
            transaction_key: credentials.key.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub enum TransactionType {
    #[serde(rename = "authCaptureTransaction")]
    AuthCaptureTransaction,
    #[serde(rename = "refundTransaction")]
    RefundTransaction,
    #[serde(rename = "voidTransaction")]
    VoidTransaction,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpaqueData {
    data_descriptor: String,
    data_value: Secret<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    opaque_data: OpaqueData,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    transaction_type: TransactionType,
    amount: Option<String>,
    payment: Option<PaymentDetails>,
    ref_trans_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionEnvelope {
    merchant_authentication: MerchantAuthentication,
    transaction_request: TransactionRequest,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedotnetChargeRequest {
    create_transaction_request: CreateTransactionEnvelope,
}

impl TryFrom<&GatewayRouterData<Charge, ChargeData>> for AuthorizedotnetChargeRequest {
    type Error = Error;

    fn try_from(item: &GatewayRouterData<Charge, ChargeData>) -> Result<Self, Self::Error> {
        if item.request.card_token.peek().is_empty() {
            return Err(report!(ConnectorError::MissingRequiredField {
                field_name: "card_token",
            }));
        }
        Ok(Self {
            create_transaction_request: CreateTransactionEnvelope {
                merchant_authentication: MerchantAuthentication::from(&item.credentials),
                transaction_request: TransactionRequest {
                    transaction_type: TransactionType::AuthCaptureTransaction,
                    amount: Some(item.request.amount.to_major_unit_string()),
                    payment: Some(PaymentDetails {
                        opaque_data: OpaqueData {
                            data_descriptor: OPAQUE_DATA_DESCRIPTOR.to_string(),
                            data_value: item.request.card_token.clone(),
                        },
                    }),
                    ref_trans_id: None,
                },
            },
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedotnetRefundRequest {
    create_transaction_request: CreateTransactionEnvelope,
}

impl TryFrom<&GatewayRouterData<Refund, RefundData>> for AuthorizedotnetRefundRequest {
    type Error = Error;

    fn try_from(item: &GatewayRouterData<Refund, RefundData>) -> Result<Self, Self::Error> {
        if item.request.transaction_id.is_empty() {
            return Err(report!(ConnectorError::MissingRequiredField {
                field_name: "transaction_id",
            }));
        }
        Ok(Self {
            create_transaction_request: CreateTransactionEnvelope {
                merchant_authentication: MerchantAuthentication::from(&item.credentials),
                transaction_request: TransactionRequest {
                    transaction_type: TransactionType::RefundTransaction,
                    amount: Some(item.request.amount.to_major_unit_string()),
                    payment: None,
                    ref_trans_id: Some(item.request.transaction_id.clone()),
                },
            },
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedotnetVoidRequest {
    create_transaction_request: CreateTransactionEnvelope,
}

impl TryFrom<&GatewayRouterData<Void, VoidData>> for AuthorizedotnetVoidRequest {
    type Error = Error;

    fn try_from(item: &GatewayRouterData<Void, VoidData>) -> Result<Self, Self::Error> {
        if item.request.transaction_id.is_empty() {
            return Err(report!(ConnectorError::MissingRequiredField {
                field_name: "transaction_id",
            }));
        }
        Ok(Self {
            create_transaction_request: CreateTransactionEnvelope {
                merchant_authentication: MerchantAuthentication::from(&item.credentials),
                transaction_request: TransactionRequest {
                    transaction_type: TransactionType::VoidTransaction,
                    amount: None,
                    payment: None,
                    ref_trans_id: Some(item.request.transaction_id.clone()),
                },
            },
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetailsEnvelope {
    merchant_authentication: MerchantAuthentication,
    trans_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedotnetQueryRequest {
    get_transaction_details_request: TransactionDetailsEnvelope,
}

impl TryFrom<&GatewayRouterData<Query, QueryData>> for AuthorizedotnetQueryRequest {
    type Error = Error;

    fn try_from(item: &GatewayRouterData<Query, QueryData>) -> Result<Self, Self::Error> {
        if item.request.transaction_id.is_empty() {
            return Err(report!(ConnectorError::MissingRequiredField {
                field_name: "transaction_id",
            }));
        }
        Ok(Self {
            get_transaction_details_request: TransactionDetailsEnvelope {
                merchant_authentication: MerchantAuthentication::from(&item.credentials),
                trans_id: item.request.transaction_id.clone(),
            },
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMessage {
    pub code: String,
    pub text: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub enum ResultCode {
    Ok,
    Error,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMessages {
    pub result_code: ResultCode,
    #[serde(default)]
    pub message: Vec<ResponseMessage>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub response_code: Option<String>,
    pub trans_id: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedotnetTransactionResponse {
    pub transaction_response: Option<TransactionResponse>,
    pub messages: ResponseMessages,
}

/// The bare messages envelope the gateway wraps errors in.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedotnetErrorEnvelope {
    pub messages: ResponseMessages,
}

impl AuthorizedotnetErrorEnvelope {
    pub fn top_level_message(&self) -> Option<String> {
        self.messages.message.first().map(|m| m.text.clone())
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    pub trans_id: Option<String>,
    pub transaction_status: Option<String>,
    pub response_code: Option<i32>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizedotnetDetailsResponse {
    pub transaction: Option<TransactionDetails>,
    pub messages: ResponseMessages,
}

fn first_message_or_default(messages: &ResponseMessages) -> String {
    messages
        .message
        .first()
        .map(|m| m.text.clone())
        .unwrap_or_else(|| consts::NO_ERROR_MESSAGE.to_string())
}

/// Approval requires both the envelope result code and the transaction-level
/// response code; everything else delivered over 2xx is a decline.
pub(crate) fn normalize_transaction_response(
    res: &HttpResponse,
) -> CustomResult<NormalizedResult, ConnectorError> {
    let payload = match res.parse_payload() {
        Ok(payload) => payload,
        Err(_) => return Ok(NormalizedResult::malformed(res.status_code, serde_json::Value::Null)),
    };
    let response: AuthorizedotnetTransactionResponse = match serde_json::from_value(payload.clone())
    {
        Ok(response) => response,
        Err(_) => return Ok(NormalizedResult::malformed(res.status_code, payload)),
    };

    let message = first_message_or_default(&response.messages);
    let approved = response.messages.result_code == ResultCode::Ok
        && response
            .transaction_response
            .as_ref()
            .and_then(|transaction| transaction.response_code.as_deref())
            == Some(RESPONSE_CODE_APPROVED);

    if approved {
        Ok(NormalizedResult::approved(message, res.status_code, payload))
    } else {
        Ok(NormalizedResult::declined(message, res.status_code, payload))
    }
}

pub(crate) fn normalize_details_response(
    res: &HttpResponse,
) -> CustomResult<NormalizedResult, ConnectorError> {
    let payload = match res.parse_payload() {
        Ok(payload) => payload,
        Err(_) => return Ok(NormalizedResult::malformed(res.status_code, serde_json::Value::Null)),
    };
    let response: AuthorizedotnetDetailsResponse = match serde_json::from_value(payload.clone()) {
        Ok(response) => response,
        Err(_) => return Ok(NormalizedResult::malformed(res.status_code, payload)),
    };

    let message = response
        .transaction
        .as_ref()
        .and_then(|transaction| transaction.transaction_status.clone())
        .unwrap_or_else(|| first_message_or_default(&response.messages));

    if response.messages.result_code == ResultCode::Ok {
        Ok(NormalizedResult::approved(message, res.status_code, payload))
    } else {
        Ok(NormalizedResult::declined(message, res.status_code, payload))
    }
}
