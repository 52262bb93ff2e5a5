pub mod consts;
pub mod errors;
pub mod request;
pub mod types;

pub use errors::CustomResult;
