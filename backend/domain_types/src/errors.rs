/// Failures surfaced to callers. Validation failures are raised before any
/// network call is attempted; everything that happens after a request reaches
/// the provider is captured in the normalized result instead.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("Invalid credentials were supplied for the selected provider")]
    InvalidCredentials,
    #[error("The operation is missing required fields or carries out-of-range values")]
    InvalidOperation,
    #[error("Failed at the gateway processing step")]
    ProcessingStepFailed,
}

/// Failures inside a connector while constructing a request or interpreting
/// a response.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Failed to obtain authentication type")]
    FailedToObtainAuthType,
}

/// Failures inside the HTTP client before a request could be attempted.
/// Connection-level failures after that point are not errors here; the
/// transport captures them as a status-code-0 response.
#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("URL encoding of the request failed")]
    UrlEncodingFailed,
    #[error("Failed to construct the HTTP client")]
    ClientConstructionFailed,
    #[error("Invalid proxy configuration")]
    InvalidProxyConfiguration,
    #[error("Header map construction failed")]
    HeaderMapConstructionFailed,
}
