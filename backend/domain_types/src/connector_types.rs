use common_utils::{types::MinorUnit, CustomResult};
use error_stack::report;
use hyperswitch_masking::{PeekInterface, Secret};
use serde::Deserialize;

use crate::errors::GatewayError;

/// Providers wired into the connector-integration crate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ConnectorEnum {
    Authorizedotnet,
    Paytrace,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChargeData {
    pub amount: MinorUnit,
    pub card_token: Secret<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RefundData {
    pub amount: MinorUnit,
    pub transaction_id: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct VoidData {
    pub transaction_id: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct QueryData {
    pub transaction_id: String,
}

/// A domain-level payment operation together with its payload.
#[derive(Clone, Debug, Deserialize)]
pub enum PaymentOperation {
    Charge(ChargeData),
    Refund(RefundData),
    Void(VoidData),
    Query(QueryData),
}

impl PaymentOperation {
    /// Local validation, run before any request is constructed. Charge and
    /// refund amounts must be positive; refund, void and query need the
    /// provider transaction reference they act on.
    pub fn validate(&self) -> CustomResult<(), GatewayError> {
        match self {
            Self::Charge(data) => {
                if data.amount.get_amount_as_i64() <= 0 {
                    return Err(report!(GatewayError::InvalidOperation)
                        .attach_printable("charge amount must be greater than zero"));
                }
                if data.card_token.peek().is_empty() {
                    return Err(report!(GatewayError::InvalidOperation)
                        .attach_printable("charge requires a card token"));
                }
            }
            Self::Refund(data) => {
                if data.amount.get_amount_as_i64() <= 0 {
                    return Err(report!(GatewayError::InvalidOperation)
                        .attach_printable("refund amount must be greater than zero"));
                }
                if data.transaction_id.is_empty() {
                    return Err(report!(GatewayError::InvalidOperation)
                        .attach_printable("refund requires a transaction reference"));
                }
            }
            Self::Void(data) => {
                if data.transaction_id.is_empty() {
                    return Err(report!(GatewayError::InvalidOperation)
                        .attach_printable("void requires a transaction reference"));
                }
            }
            Self::Query(data) => {
                if data.transaction_id.is_empty() {
                    return Err(report!(GatewayError::InvalidOperation)
                        .attach_printable("query requires a transaction reference"));
                }
            }
        }
        Ok(())
    }
}
