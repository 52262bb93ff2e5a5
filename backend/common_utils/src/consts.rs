/// Fallback error message when a provider response carries none.
pub const NO_ERROR_MESSAGE: &str = "No error message";

/// Bound on a single outgoing provider call.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
