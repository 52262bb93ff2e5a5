use domain_types::{
    connector_flow::{Charge, Query, Refund, Void},
    connector_types::{ChargeData, QueryData, RefundData, VoidData},
};

use crate::connector_integration::ConnectorIntegration;

pub trait PaymentChargeV2: ConnectorIntegration<Charge, ChargeData> {}

pub trait PaymentRefundV2: ConnectorIntegration<Refund, RefundData> {}

pub trait PaymentVoidV2: ConnectorIntegration<Void, VoidData> {}

pub trait PaymentQueryV2: ConnectorIntegration<Query, QueryData> {}

/// The full per-provider surface the gateway client dispatches against.
pub trait ConnectorServiceTrait:
    PaymentChargeV2 + PaymentRefundV2 + PaymentVoidV2 + PaymentQueryV2
{
}

pub type BoxedConnectorIntegration<'a, F, Req> =
    Box<&'a (dyn ConnectorIntegration<F, Req> + Send + Sync)>;
