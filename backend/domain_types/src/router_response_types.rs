use std::collections::HashMap;

use bytes::Bytes;
use serde::Serialize;

/// Raw transport outcome. `is_error` marks transport-level failure only
/// (status_code 0); a delivered HTTP error status is a normal response here
/// and is classified during normalization instead.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status_code: u16,
    pub is_error: bool,
    pub message: String,
    pub raw_body: Bytes,
    pub headers: HashMap<String, String>,
}

impl HttpResponse {
    pub fn transport_failure(message: impl Into<String>) -> Self {
        Self {
            status_code: 0,
            is_error: true,
            message: message.into(),
            raw_body: Bytes::new(),
            headers: HashMap::new(),
        }
    }

    /// Parses the body as JSON, stripping a UTF-8 BOM when present. Some
    /// providers prepend one.
    pub fn parse_payload(&self) -> Result<serde_json::Value, serde_json::Error> {
        match serde_json::from_slice(&self.raw_body) {
            Ok(value) => Ok(value),
            Err(_) if self.raw_body.starts_with(&[0xEF, 0xBB, 0xBF]) => {
                serde_json::from_slice(&self.raw_body[3..])
            }
            Err(err) => Err(err),
        }
    }
}

/// Classification of an unsuccessful call.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, strum::Display)]
pub enum ErrorKind {
    /// The request never reached the provider (connection failure, timeout).
    NetworkError,
    /// The provider rejected the payment as a business decision.
    Declined,
    /// The provider answered with an HTTP 4xx.
    ClientError,
    /// The provider answered with an HTTP 5xx (or another unexpected class).
    ProviderError,
    /// A delivered 2xx body could not be interpreted.
    MalformedResponse,
}

impl ErrorKind {
    /// Status-class fallback used when the body carries no better signal.
    pub fn from_status_code(status_code: u16) -> Option<Self> {
        match status_code {
            0 => Some(Self::NetworkError),
            200..=299 => None,
            400..=499 => Some(Self::ClientError),
            // 1xx/3xx are never expected from the supported providers;
            // treat them as provider faults alongside 5xx.
            _ => Some(Self::ProviderError),
        }
    }
}

/// The value returned to callers for any call that reached the network,
/// whatever the outcome. `provider_payload` preserves the parsed body for
/// audit whenever parsing succeeded.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedResult {
    pub success: bool,
    pub error_kind: Option<ErrorKind>,
    pub message: String,
    pub status_code: u16,
    pub provider_payload: serde_json::Value,
}

impl NormalizedResult {
    pub fn approved(
        message: impl Into<String>,
        status_code: u16,
        provider_payload: serde_json::Value,
    ) -> Self {
        Self {
            success: true,
            error_kind: None,
            message: message.into(),
            status_code,
            provider_payload,
        }
    }

    pub fn declined(
        message: impl Into<String>,
        status_code: u16,
        provider_payload: serde_json::Value,
    ) -> Self {
        Self {
            success: false,
            error_kind: Some(ErrorKind::Declined),
            message: message.into(),
            status_code,
            provider_payload,
        }
    }

    pub fn network_failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_kind: Some(ErrorKind::NetworkError),
            message: message.into(),
            status_code: 0,
            provider_payload: serde_json::Value::Null,
        }
    }

    pub fn malformed(status_code: u16, provider_payload: serde_json::Value) -> Self {
        Self {
            success: false,
            error_kind: Some(ErrorKind::MalformedResponse),
            message: "Unable to interpret the provider response".to_string(),
            status_code,
            provider_payload,
        }
    }

    /// Delivered non-2xx response, classified by status class.
    pub fn http_failure(
        message: impl Into<String>,
        status_code: u16,
        provider_payload: serde_json::Value,
    ) -> Self {
        Self {
            success: false,
            error_kind: ErrorKind::from_status_code(status_code),
            message: message.into(),
            status_code,
            provider_payload,
        }
    }
}
