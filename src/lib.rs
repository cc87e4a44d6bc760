pub mod agenda;
pub mod config;
pub mod tracing;
pub mod vitrine;
