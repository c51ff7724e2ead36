pub mod extractors;
pub mod repositories;
mod templates;
