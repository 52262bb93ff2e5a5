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
use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};

type Error = error_stack::Report<ConnectorError>;

/// Paytrace takes its authentication fields inline in every request body
/// rather than in a header. The integrator id is mandatory.
#[derive(Debug, Serialize)]
pub struct PaytraceAuthFields {
    username: Secret<String>,
    password: Secret<String>,
    integrator_id: Secret<String>,
}

impl TryFrom<&Credentials> for PaytraceAuthFields {
    type Error = Error;

    fn try_from(credentials: &Credentials) -> Result<Self, Self::Error> {
        let integrator_id = credentials
            .integrator_id
            .clone()
            .ok_or_else(|| report!(ConnectorError::FailedToObtainAuthType))?;
        Ok(Self {
            username: credentials.login.clone(),
            password: credentials.key.clone(),
            integrator_id,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PaytraceChargeRequest {
    #[serde(flatten)]
    auth: PaytraceAuthFields,
    amount: String,
    customer_token: Secret<String>,
}

impl TryFrom<&GatewayRouterData<Charge, ChargeData>> for PaytraceChargeRequest {
    type Error = Error;

    fn try_from(item: &GatewayRouterData<Charge, ChargeData>) -> Result<Self, Self::Error> {
        Ok(Self {
            auth: PaytraceAuthFields::try_from(&item.credentials)?,
            amount: item.request.amount.to_major_unit_string(),
            customer_token: item.request.card_token.clone(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PaytraceRefundRequest {
    #[serde(flatten)]
    auth: PaytraceAuthFields,
    amount: String,
    transaction_id: String,
}

impl TryFrom<&GatewayRouterData<Refund, RefundData>> for PaytraceRefundRequest {
    type Error = Error;

    fn try_from(item: &GatewayRouterData<Refund, RefundData>) -> Result<Self, Self::Error> {
        if item.request.transaction_id.is_empty() {
            return Err(report!(ConnectorError::MissingRequiredField {
                field_name: "transaction_id",
            }));
        }
        Ok(Self {
            auth: PaytraceAuthFields::try_from(&item.credentials)?,
            amount: item.request.amount.to_major_unit_string(),
            transaction_id: item.request.transaction_id.clone(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PaytraceVoidRequest {
    #[serde(flatten)]
    auth: PaytraceAuthFields,
    transaction_id: String,
}

impl TryFrom<&GatewayRouterData<Void, VoidData>> for PaytraceVoidRequest {
    type Error = Error;

    fn try_from(item: &GatewayRouterData<Void, VoidData>) -> Result<Self, Self::Error> {
        if item.request.transaction_id.is_empty() {
            return Err(report!(ConnectorError::MissingRequiredField {
                field_name: "transaction_id",
            }));
        }
        Ok(Self {
            auth: PaytraceAuthFields::try_from(&item.credentials)?,
            transaction_id: item.request.transaction_id.clone(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PaytraceQueryRequest {
    #[serde(flatten)]
    auth: PaytraceAuthFields,
    transaction_id: String,
}

impl TryFrom<&GatewayRouterData<Query, QueryData>> for PaytraceQueryRequest {
    type Error = Error;

    fn try_from(item: &GatewayRouterData<Query, QueryData>) -> Result<Self, Self::Error> {
        if item.request.transaction_id.is_empty() {
            return Err(report!(ConnectorError::MissingRequiredField {
                field_name: "transaction_id",
            }));
        }
        Ok(Self {
            auth: PaytraceAuthFields::try_from(&item.credentials)?,
            transaction_id: item.request.transaction_id.clone(),
        })
    }
}

/// Flat response envelope shared by the transaction endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct PaytraceResponse {
    #[serde(default)]
    pub success: bool,
    pub response_code: Option<i64>,
    pub status_message: Option<String>,
    pub transaction_id: Option<i64>,
}

fn message_or_default(status_message: Option<String>) -> String {
    status_message.unwrap_or_else(|| consts::NO_ERROR_MESSAGE.to_string())
}

pub(crate) fn normalize_response(
    res: &HttpResponse,
) -> CustomResult<NormalizedResult, ConnectorError> {
    let payload = match res.parse_payload() {
        Ok(payload) => payload,
        Err(_) => return Ok(NormalizedResult::malformed(res.status_code, serde_json::Value::Null)),
    };
    let response: PaytraceResponse = match serde_json::from_value(payload.clone()) {
        Ok(response) => response,
        Err(_) => return Ok(NormalizedResult::malformed(res.status_code, payload)),
    };

    let message = message_or_default(response.status_message);
    if response.success {
        Ok(NormalizedResult::approved(message, res.status_code, payload))
    } else {
        Ok(NormalizedResult::declined(message, res.status_code, payload))
    }
}

/// Export responses carry a `transactions` array instead of the flat success
/// envelope; a delivered 2xx with the queried transaction present counts as
/// success.
#[derive(Clone, Debug, Deserialize)]
pub struct PaytraceExportResponse {
    #[serde(default)]
    pub success: bool,
    pub status_message: Option<String>,
    #[serde(default)]
    pub transactions: Vec<serde_json::Value>,
}

pub(crate) fn normalize_query_response(
    res: &HttpResponse,
) -> CustomResult<NormalizedResult, ConnectorError> {
    let payload = match res.parse_payload() {
        Ok(payload) => payload,
        Err(_) => return Ok(NormalizedResult::malformed(res.status_code, serde_json::Value::Null)),
    };
    let response: PaytraceExportResponse = match serde_json::from_value(payload.clone()) {
        Ok(response) => response,
        Err(_) => return Ok(NormalizedResult::malformed(res.status_code, payload)),
    };

    let message = message_or_default(response.status_message);
    if response.success && !response.transactions.is_empty() {
        Ok(NormalizedResult::approved(message, res.status_code, payload))
    } else {
        Ok(NormalizedResult::declined(message, res.status_code, payload))
    }
}
