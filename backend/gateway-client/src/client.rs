use common_utils::CustomResult;
use connector_integration::{Authorizedotnet, Paytrace};
use domain_types::{
    connector_flow::{Charge, Query, Refund, Void},
    connector_types::{ChargeData, ConnectorEnum, PaymentOperation, QueryData, RefundData, VoidData},
    credentials::Credentials,
    errors::GatewayError,
    router_data::GatewayRouterData,
    router_response_types::NormalizedResult,
    types::Proxy,
};
use external_services::{execute_gateway_processing_step, HttpTransport, ReqwestTransport};
use interfaces::{
    connector_integration::ConnectorIntegration, connector_types::ConnectorServiceTrait,
};

/// Facade over the connector integrations. One client serves one provider;
/// credentials are supplied per call, never stored.
pub struct GatewayClient<T: HttpTransport = ReqwestTransport> {
    connector_name: ConnectorEnum,
    transport: T,
}

impl GatewayClient {
    pub fn new(connector_name: ConnectorEnum) -> Self {
        Self {
            connector_name,
            transport: ReqwestTransport::new(Proxy::default()),
        }
    }
}

impl<T: HttpTransport> GatewayClient<T> {
    pub fn with_transport(connector_name: ConnectorEnum, transport: T) -> Self {
        Self {
            connector_name,
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validates locally, then runs the operation against the provider.
    /// Validation failures surface as errors without any network traffic;
    /// everything that reached the network comes back as a normalized result.
    #[tracing::instrument(skip_all, fields(connector = %self.connector_name))]
    pub async fn execute(
        &self,
        operation: PaymentOperation,
        credentials: &Credentials,
    ) -> CustomResult<NormalizedResult, GatewayError> {
        credentials.validate()?;
        operation.validate()?;

        match self.connector_name {
            ConnectorEnum::Authorizedotnet => {
                self.execute_with(&Authorizedotnet, operation, credentials).await
            }
            ConnectorEnum::Paytrace => self.execute_with(&Paytrace, operation, credentials).await,
        }
    }

    async fn execute_with<C: ConnectorServiceTrait + Send + Sync>(
        &self,
        connector: &C,
        operation: PaymentOperation,
        credentials: &Credentials,
    ) -> CustomResult<NormalizedResult, GatewayError> {
        match operation {
            PaymentOperation::Charge(data) => {
                execute_gateway_processing_step(
                    &self.transport,
                    Box::new(connector as &(dyn ConnectorIntegration<Charge, ChargeData> + Send + Sync)),
                    GatewayRouterData::new(credentials.clone(), data),
                )
                .await
            }
            PaymentOperation::Refund(data) => {
                execute_gateway_processing_step(
                    &self.transport,
                    Box::new(connector as &(dyn ConnectorIntegration<Refund, RefundData> + Send + Sync)),
                    GatewayRouterData::new(credentials.clone(), data),
                )
                .await
            }
            PaymentOperation::Void(data) => {
                execute_gateway_processing_step(
                    &self.transport,
                    Box::new(connector as &(dyn ConnectorIntegration<Void, VoidData> + Send + Sync)),
                    GatewayRouterData::new(credentials.clone(), data),
                )
                .await
            }
            PaymentOperation::Query(data) => {
                execute_gateway_processing_step(
                    &self.transport,
                    Box::new(connector as &(dyn ConnectorIntegration<Query, QueryData> + Send + Sync)),
                    GatewayRouterData::new(credentials.clone(), data),
                )
                .await
            }
        }
    }
}
