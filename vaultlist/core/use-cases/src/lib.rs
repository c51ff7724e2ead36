pub mod boundaries;
pub mod errors;
pub mod gateways;
pub mod interactors;
pub mod models;
pub mod normalizers;
pub mod utils;
