use std::{str::FromStr, time::Duration};

use common_utils::{
    consts,
    request::{Headers, Method, Request, RequestContent},
    CustomResult,
};
use domain_types::{
    errors::{ApiClientError, ConnectorError, GatewayError},
    router_data::GatewayRouterData,
    router_response_types::{HttpResponse, NormalizedResult},
    types::Proxy,
};
use error_stack::ResultExt;
use hyperswitch_masking::ErasedMaskSerialize;
use interfaces::connector_types::BoxedConnectorIntegration;
use once_cell::sync::OnceCell;
use reqwest::Client;
use serde_json::json;
use tracing::field::Empty;

/// Sends a built request to a provider. The only errors are those raised
/// before the request leaves the process; a connection failure or timeout is
/// captured as a status-code-0 response instead.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: Request) -> CustomResult<HttpResponse, ApiClientError>;
}

pub struct ReqwestTransport {
    proxy: Proxy,
    request_timeout: Duration,
}

impl ReqwestTransport {
    pub fn new(proxy: Proxy) -> Self {
        Self {
            proxy,
            request_timeout: Duration::from_secs(consts::DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: Request) -> CustomResult<HttpResponse, ApiClientError> {
        let url = reqwest::Url::parse(&request.url)
            .change_context(ApiClientError::UrlEncodingFailed)?;

        let should_bypass_proxy = self.proxy.bypass_proxy_urls.contains(&url.to_string());
        let client = get_base_client(&self.proxy, should_bypass_proxy)?;
        let headers = request.headers.construct_header_map()?;

        let request_builder = match request.method {
            Method::Get => client.get(url),
            Method::Post => client.post(url),
            Method::Put => client.put(url),
            Method::Delete => client.delete(url),
        };
        let request_builder = match request.body {
            Some(RequestContent::Json(payload)) => request_builder.json(&payload),
            Some(RequestContent::FormUrlEncoded(payload)) => request_builder.form(&payload),
            None => request_builder,
        };

        let send_result = request_builder
            .headers(headers)
            .timeout(self.request_timeout)
            .send()
            .await;

        match send_result {
            Ok(response) => handle_reqwest_response(response).await,
            Err(error) => {
                let message = if error.is_timeout() {
                    "connector request timed out".to_string()
                } else {
                    error.to_string()
                };
                Ok(HttpResponse::transport_failure(message))
            }
        }
    }
}

async fn handle_reqwest_response(
    response: reqwest::Response,
) -> CustomResult<HttpResponse, ApiClientError> {
    let status_code = response.status().as_u16();
    let message = response
        .status()
        .canonical_reason()
        .unwrap_or_default()
        .to_string();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();

    match response.bytes().await {
        Ok(raw_body) => Ok(HttpResponse {
            status_code,
            is_error: false,
            message,
            raw_body,
            headers,
        }),
        // The connection dropped mid-body; the provider's answer is unknown.
        Err(error) => Ok(HttpResponse::transport_failure(error.to_string())),
    }
}

static NON_PROXIED_CLIENT: OnceCell<Client> = OnceCell::new();
static PROXIED_CLIENT: OnceCell<Client> = OnceCell::new();

fn get_base_client(
    proxy_config: &Proxy,
    should_bypass_proxy: bool,
) -> CustomResult<Client, ApiClientError> {
    Ok(if should_bypass_proxy
        || (proxy_config.http_url.is_none() && proxy_config.https_url.is_none())
    {
        &NON_PROXIED_CLIENT
    } else {
        &PROXIED_CLIENT
    }
    .get_or_try_init(|| {
        get_client_builder(proxy_config, should_bypass_proxy)?
            .build()
            .change_context(ApiClientError::ClientConstructionFailed)
    })?
    .clone())
}

fn get_client_builder(
    proxy_config: &Proxy,
    should_bypass_proxy: bool,
) -> CustomResult<reqwest::ClientBuilder, ApiClientError> {
    let client_builder = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_idle_timeout(Duration::from_secs(
            proxy_config
                .idle_pool_connection_timeout
                .unwrap_or_default(),
        ));

    if should_bypass_proxy {
        return Ok(client_builder);
    }

    let client_builder = match proxy_config.https_url.as_ref() {
        Some(url) => client_builder.proxy(
            reqwest::Proxy::https(url)
                .change_context(ApiClientError::InvalidProxyConfiguration)?,
        ),
        None => client_builder,
    };
    let client_builder = match proxy_config.http_url.as_ref() {
        Some(url) => client_builder.proxy(
            reqwest::Proxy::http(url)
                .change_context(ApiClientError::InvalidProxyConfiguration)?,
        ),
        None => client_builder,
    };

    Ok(client_builder)
}

/// Runs one connector flow end to end: build the request, send it, classify
/// the outcome. Request construction failures never reach the network.
#[tracing::instrument(
    skip_all,
    fields(
        connector = connector.id(),
        request.url = Empty,
        request.method = Empty,
        request.body = Empty,
        response.status_code = Empty,
        response.error_kind = Empty,
        latency = Empty,
    )
)]
pub async fn execute_gateway_processing_step<F, Req>(
    transport: &dyn HttpTransport,
    connector: BoxedConnectorIntegration<'_, F, Req>,
    router_data: GatewayRouterData<F, Req>,
) -> CustomResult<NormalizedResult, GatewayError> {
    let request = connector.build_request(&router_data).map_err(|report| {
        let gateway_error = match report.current_context() {
            ConnectorError::FailedToObtainAuthType => GatewayError::InvalidCredentials,
            _ => GatewayError::InvalidOperation,
        };
        report.change_context(gateway_error)
    })?;

    let span = tracing::Span::current();
    span.record("request.url", tracing::field::display(&request.url));
    span.record("request.method", tracing::field::display(request.method));
    if let Some(body) = request.body.as_ref() {
        let masked_body = match body {
            RequestContent::Json(payload) | RequestContent::FormUrlEncoded(payload) => payload
                .masked_serialize()
                .unwrap_or(json!({ "error": "failed to mask serialize request body" })),
        };
        span.record("request.body", tracing::field::display(masked_body));
    }

    let start = tokio::time::Instant::now();
    let response = transport
        .send(request)
        .await
        .change_context(GatewayError::ProcessingStepFailed)?;
    span.record("latency", start.elapsed().as_millis());
    span.record(
        "response.status_code",
        tracing::field::display(response.status_code),
    );

    let result = match response.status_code {
        0 => NormalizedResult::network_failure(response.message.clone()),
        200..=299 => connector
            .handle_response(&router_data, &response)
            .change_context(GatewayError::ProcessingStepFailed)?,
        _ => connector
            .build_error_response(&response)
            .change_context(GatewayError::ProcessingStepFailed)?,
    };

    if let Some(error_kind) = result.error_kind {
        span.record("response.error_kind", tracing::field::display(error_kind));
    }
    tracing::info!("gateway processing step completed");
    Ok(result)
}

trait HeaderExt {
    fn construct_header_map(&self) -> CustomResult<reqwest::header::HeaderMap, ApiClientError>;
}

impl HeaderExt for Headers {
    fn construct_header_map(&self) -> CustomResult<reqwest::header::HeaderMap, ApiClientError> {
        use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

        self.iter().try_fold(
            HeaderMap::new(),
            |mut header_map, (header_name, header_value)| {
                let header_name = HeaderName::from_str(header_name)
                    .change_context(ApiClientError::HeaderMapConstructionFailed)?;
                let header_value = HeaderValue::from_str(header_value.clone().into_inner().as_str())
                    .change_context(ApiClientError::HeaderMapConstructionFailed)?;
                header_map.append(header_name, header_value);
                Ok(header_map)
            },
        )
    }
}
