use common_utils::CustomResult;
use error_stack::report;
use hyperswitch_masking::{PeekInterface, Secret};
use serde::Deserialize;

use crate::errors::GatewayError;

/// API credentials for a payment provider.
///
/// Immutable once constructed. The sandbox flag is always explicit and is the
/// only input to endpoint selection. The integrator id is meaningful only for
/// providers that require one (Paytrace).
#[derive(Clone, Debug, Deserialize)]
pub struct Credentials {
    pub login: Secret<String>,
    pub key: Secret<String>,
    pub sandbox: bool,
    pub integrator_id: Option<Secret<String>>,
}

impl Credentials {
    pub fn new(login: impl Into<String>, key: impl Into<String>, sandbox: bool) -> Self {
        Self {
            login: Secret::new(login.into()),
            key: Secret::new(key.into()),
            sandbox,
            integrator_id: None,
        }
    }

    pub fn with_integrator_id(mut self, integrator_id: impl Into<String>) -> Self {
        self.integrator_id = Some(Secret::new(integrator_id.into()));
        self
    }

    /// Live mode requires real credentials; sandbox traffic may carry
    /// placeholder values.
    pub fn validate(&self) -> CustomResult<(), GatewayError> {
        if !self.sandbox && (self.login.peek().is_empty() || self.key.peek().is_empty()) {
            return Err(report!(GatewayError::InvalidCredentials)
                .attach_printable("live mode requires a non-empty login and key"));
        }
        Ok(())
    }
}
