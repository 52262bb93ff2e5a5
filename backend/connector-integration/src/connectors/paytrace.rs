pub mod transformers;


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
use transformers as paytrace;

pub(crate) const PRODUCTION_BASE_URL: &str = "https://api.paytrace.com";
pub(crate) const SANDBOX_BASE_URL: &str = "https://api.sandbox.paytrace.com";

#[derive(Clone, Copy, Debug)]
pub struct Paytrace;

impl ConnectorServiceTrait for Paytrace {}
impl PaymentChargeV2 for Paytrace {}
impl PaymentRefundV2 for Paytrace {}
impl PaymentVoidV2 for Paytrace {}
impl PaymentQueryV2 for Paytrace {}

impl ConnectorCommon for Paytrace {
    fn id(&self) -> &'static str {
        "paytrace"
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
        let provider_payload = res.parse_payload().unwrap_or(serde_json::Value::Null);
        let message =
            serde_json::from_value::<paytrace::PaytraceResponse>(provider_payload.clone())
                .ok()
                .and_then(|response| response.status_message)
                .unwrap_or_else(|| consts::NO_ERROR_MESSAGE.to_string());
        Ok(NormalizedResult::http_failure(
            message,
            res.status_code,
            provider_payload,
        ))
    }
}

impl ConnectorIntegration<Charge, ChargeData> for Paytrace {
    fn get_url(
        &self,
        req: &GatewayRouterData<Charge, ChargeData>,
    ) -> CustomResult<String, ConnectorError> {
        Ok(format!(
            "{}/v1/transactions/sale/by_token",
            self.base_url(&req.credentials)
        ))
    }

    fn get_request_body(
        &self,
        req: &GatewayRouterData<Charge, ChargeData>,
    ) -> CustomResult<RequestContent, ConnectorError> {
        let connector_req = paytrace::PaytraceChargeRequest::try_from(req)?;
        Ok(RequestContent::Json(Box::new(connector_req)))
    }

    fn handle_response(
        &self,
        _req: &GatewayRouterData<Charge, ChargeData>,
        res: &HttpResponse,
    ) -> CustomResult<NormalizedResult, ConnectorError> {
        paytrace::normalize_response(res)
    }
}

impl ConnectorIntegration<Refund, RefundData> for Paytrace {
    fn get_url(
        &self,
        req: &GatewayRouterData<Refund, RefundData>,
    ) -> CustomResult<String, ConnectorError> {
        Ok(format!(
            "{}/v1/transactions/refund/for_transaction",
            self.base_url(&req.credentials)
        ))
    }

    fn get_request_body(
        &self,
        req: &GatewayRouterData<Refund, RefundData>,
    ) -> CustomResult<RequestContent, ConnectorError> {
        let connector_req = paytrace::PaytraceRefundRequest::try_from(req)?;
        Ok(RequestContent::Json(Box::new(connector_req)))
    }

    fn handle_response(
        &self,
        _req: &GatewayRouterData<Refund, RefundData>,
        res: &HttpResponse,
    ) -> CustomResult<NormalizedResult, ConnectorError> {
        paytrace::normalize_response(res)
    }
}

impl ConnectorIntegration<Void, VoidData> for Paytrace {
    fn get_url(
        &self,
        req: &GatewayRouterData<Void, VoidData>,
    ) -> CustomResult<String, ConnectorError> {
        Ok(format!(
            "{}/v1/transactions/void",
            self.base_url(&req.credentials)
        ))
    }

    fn get_request_body(
        &self,
        req: &GatewayRouterData<Void, VoidData>,
    ) -> CustomResult<RequestContent, ConnectorError> {
        let connector_req = paytrace::PaytraceVoidRequest::try_from(req)?;
        Ok(RequestContent::Json(Box::new(connector_req)))
    }

    fn handle_response(
        &self,
        _req: &GatewayRouterData<Void, VoidData>,
        res: &HttpResponse,
    ) -> CustomResult<NormalizedResult, ConnectorError> {
        paytrace::normalize_response(res)
    }
}

impl ConnectorIntegration<Query, QueryData> for Paytrace {
    fn get_url(
        &self,
        req: &GatewayRouterData<Query, QueryData>,
    ) -> CustomResult<String, ConnectorError> {
        Ok(format!(
            "{}/v1/transactions/export/by_id",
            self.base_url(&req.credentials)
        ))
    }

    fn get_request_body(
        &self,
        req: &GatewayRouterData<Query, QueryData>,
    ) -> CustomResult<RequestContent, ConnectorError> {
        let connector_req = paytrace::PaytraceQueryRequest::try_from(req)?;
        Ok(RequestContent::Json(Box::new(connector_req)))
    }

    fn handle_response(
        &self,
        _req: &GatewayRouterData<Query, QueryData>,
        res: &HttpResponse,
    ) -> CustomResult<NormalizedResult, ConnectorError> {
        paytrace::normalize_query_response(res)
    }
}
