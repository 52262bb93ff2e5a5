pub mod connectors;

pub use connectors::{Authorizedotnet, Paytrace};
