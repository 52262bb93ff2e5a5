pub mod service;

pub use service::{execute_gateway_processing_step, HttpTransport, ReqwestTransport};
