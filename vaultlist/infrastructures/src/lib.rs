pub mod boundaries;
pub mod gateways;
pub(crate) mod utils;
