pub mod transformers;

#[cfg(test)]
mod test;

use common_utils::{consts, request::RequestContent, CustomResult};
use domain_types::{
    connector_flow::{Charge, Query, Refund, Void},
    connector_types::{ChargeData, QueryData, RefundData, VoidData},
    credentials::Credentials,
    errors::ConnectorError,
    router_data::GatewayRouterData,
    router_response_types::{HttpResponse, NormalizedResult},
};
use interfaces::{
    connector_integration::{ConnectorCommon, ConnectorIntegration},
    connector_types::{
        ConnectorServiceTrait, PaymentChargeV2, PaymentQueryV2, PaymentRefundV2, PaymentVoidV2,
    },
};
use transformers as authorizedotnet;

pub(crate) const PRODUCTION_BASE_URL: &str = "https://api.authorize.net/xml/v1/request.api";
pub(crate) const SANDBOX_BASE_URL: &str = "https://apitest.authorize.net/xml/v1/request.api";

#[derive(Clone, Copy, Debug)]
pub struct Authorizedotnet;

impl ConnectorServiceTrait for Authorizedotnet {}
impl PaymentChargeV2 for Authorizedotnet {}
impl PaymentRefundV2 for Authorizedotnet {}
impl PaymentVoidV2 for Authorizedotnet {}
impl PaymentQueryV2 for Authorizedotnet {}

impl ConnectorCommon for Authorizedotnet {
    fn id(&self) -> &'static str {
        "authorizedotnet"
    }

    fn base_url(&self, credentials: &Credentials) -> &'static str {
        if credentials.sandbox {
            SANDBOX_BASE_URL
        } else {
            PRODUCTION_BASE_URL
        }
    }

    fn build_error_response(
        &self,
        res: &HttpResponse,
    ) -> CustomResult<NormalizedResult, ConnectorError> {
        // Authorize.Net reports almost everything over HTTP 200; a non-2xx
        // status still carries the standard messages envelope when the
        // gateway itself produced it.
        let provider_payload = res.parse_payload().unwrap_or(serde_json::Value::Null);
        let message = serde_json::from_value::<authorizedotnet::AuthorizedotnetErrorEnvelope>(
            provider_payload.clone(),
        )
        .ok()
        .and_then(|envelope| envelope.top_level_message())
        .unwrap_or_else(|| consts::NO_ERROR_MESSAGE.to_string());
        Ok(NormalizedResult::http_failure(
            message,
            res.status_code,
            provider_payload,
        ))
    }
}

impl ConnectorIntegration<Charge, ChargeData> for Authorizedotnet {
    fn get_url(
        &self,
        req: &GatewayRouterData<Charge, ChargeData>,
    ) -> CustomResult<String, ConnectorError> {
        Ok(self.base_url(&req.credentials).to_string())
    }

    fn get_request_body(
        &self,
        req: &GatewayRouterData<Charge, ChargeData>,
    ) -> CustomResult<RequestContent, ConnectorError> {
        let connector_req = authorizedotnet::AuthorizedotnetChargeRequest::try_from(req)?;
        Ok(RequestContent::Json(Box::new(connector_req)))
    }

    fn handle_response(
        &self,
        _req: &GatewayRouterData<Charge, ChargeData>,
        res: &HttpResponse,
    ) -> CustomResult<NormalizedResult, ConnectorError> {
        authorizedotnet::normalize_transaction_response(res)
    }
}

impl ConnectorIntegration<Refund, RefundData> for Authorizedotnet {
    fn get_url(
        &self,
        req: &GatewayRouterData<Refund, RefundData>,
    ) -> CustomResult<String, ConnectorError> {
        Ok(self.base_url(&req.credentials).to_string())
    }

    fn get_request_body(
        &self,
        req: &GatewayRouterData<Refund, RefundData>,
    ) -> CustomResult<RequestContent, ConnectorError> {
        let connector_req = authorizedotnet::AuthorizedotnetRefundRequest::try_from(req)?;
        Ok(RequestContent::Json(Box::new(connector_req)))
    }

    fn handle_response(
        &self,
        _req: &GatewayRouterData<Refund, RefundData>,
        res: &HttpResponse,
    ) -> CustomResult<NormalizedResult, ConnectorError> {
        authorizedotnet::normalize_transaction_response(res)
    }
}

impl ConnectorIntegration<Void, VoidData> for Authorizedotnet {
    fn get_url(
        &self,
        req: &GatewayRouterData<Void, VoidData>,
    ) -> CustomResult<String, ConnectorError> {
        Ok(self.base_url(&req.credentials).to_string())
    }

    fn get_request_body(
        &self,
        req: &GatewayRouterData<Void, VoidData>,
    ) -> CustomResult<RequestContent, ConnectorError> {
        let connector_req = authorizedotnet::AuthorizedotnetVoidRequest::try_from(req)?;
        Ok(RequestContent::Json(Box::new(connector_req)))
    }

    fn handle_response(
        &self,
        _req: &GatewayRouterData<Void, VoidData>,
        res: &HttpResponse,
    ) -> CustomResult<NormalizedResult, ConnectorError> {
        authorizedotnet::normalize_transaction_response(res)
    }
}

impl ConnectorIntegration<Query, QueryData> for Authorizedotnet {
    fn get_url(
        &self,
        req: &GatewayRouterData<Query, QueryData>,
    ) -> CustomResult<String, ConnectorError> {
        Ok(self.base_url(&req.credentials).to_string())
    }

    fn get_request_body(
        &self,
        req: &GatewayRouterData<Query, QueryData>,
    ) -> CustomResult<RequestContent, ConnectorError> {
        let connector_req = authorizedotnet::AuthorizedotnetQueryRequest::try_from(req)?;
        Ok(RequestContent::Json(Box::new(connector_req)))
    }

    fn handle_response(
        &self,
        _req: &GatewayRouterData<Query, QueryData>,
        res: &HttpResponse,
    ) -> CustomResult<NormalizedResult, ConnectorError> {
        authorizedotnet::normalize_details_response(res)
    }
}
