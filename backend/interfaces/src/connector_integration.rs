use common_utils::{
    consts,
    request::{Method, Request, RequestBuilder, RequestContent},
    CustomResult,
};
use domain_types::{
    credentials::Credentials,
    errors::ConnectorError,
    router_data::GatewayRouterData,
    router_response_types::{HttpResponse, NormalizedResult},
};
use hyperswitch_masking::Maskable;

/// Provider-wide constants and behavior shared by every flow of a connector.
pub trait ConnectorCommon {
    fn id(&self) -> &'static str;

    fn common_get_content_type(&self) -> &'static str {
        "application/json"
    }

    /// Endpoint selection is driven solely by the explicit sandbox flag on
    /// the credentials, never inferred.
    fn base_url(&self, credentials: &Credentials) -> &'static str;

    /// Classifies a delivered non-2xx response. The status class decides the
    /// error kind; the body is still preserved for audit when it parses.
    /// Connectors with a documented error body override this to extract the
    /// provider message.
    fn build_error_response(
        &self,
        res: &HttpResponse,
    ) -> CustomResult<NormalizedResult, ConnectorError> {
        let provider_payload = res.parse_payload().unwrap_or(serde_json::Value::Null);
        let message = if res.message.is_empty() {
            consts::NO_ERROR_MESSAGE.to_string()
        } else {
            res.message.clone()
        };
        Ok(NormalizedResult::http_failure(
            message,
            res.status_code,
            provider_payload,
        ))
    }
}

/// One payment flow of one connector: builds the provider request for the
/// flow and interprets the provider's 2xx response.
pub trait ConnectorIntegration<F, Req>: ConnectorCommon {
    fn get_http_method(&self) -> Method {
        Method::Post
    }

    fn get_headers(
        &self,
        _req: &GatewayRouterData<F, Req>,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
        Ok(vec![(
            "Content-Type".to_string(),
            self.common_get_content_type().to_string().into(),
        )])
    }

    fn get_url(&self, req: &GatewayRouterData<F, Req>) -> CustomResult<String, ConnectorError>;

    fn get_request_body(
        &self,
        req: &GatewayRouterData<F, Req>,
    ) -> CustomResult<RequestContent, ConnectorError>;

    /// Pure function of the router data; no side effects.
    fn build_request(
        &self,
        req: &GatewayRouterData<F, Req>,
    ) -> CustomResult<Request, ConnectorError> {
        Ok(RequestBuilder::new()
            .method(self.get_http_method())
            .url(&self.get_url(req)?)
            .attach_default_headers()
            .headers(self.get_headers(req)?)
            .set_body(self.get_request_body(req)?)
            .build())
    }

    /// Interprets a delivered 2xx response. Never fails on malformed input;
    /// an uninterpretable body maps to a MalformedResponse result.
    fn handle_response(
        &self,
        req: &GatewayRouterData<F, Req>,
        res: &HttpResponse,
    ) -> CustomResult<NormalizedResult, ConnectorError>;
}
