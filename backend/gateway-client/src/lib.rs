pub mod client;

pub use client::GatewayClient;
pub use connector_integration::{Authorizedotnet, Paytrace};
pub use domain_types::{
    connector_types::{
        ChargeData, ConnectorEnum, PaymentOperation, QueryData, RefundData, VoidData,
    },
    credentials::Credentials,
    errors::GatewayError,
    router_response_types::{ErrorKind, NormalizedResult},
    types::Proxy,
};
pub use external_services::{HttpTransport, ReqwestTransport};
