pub mod authorizedotnet;
pub use self::authorizedotnet::Authorizedotnet;

pub mod paytrace;
pub use self::paytrace::Paytrace;
