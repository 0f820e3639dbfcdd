pub mod app;
pub mod claims;
pub mod config;
pub mod errors;
pub mod service_account;
pub mod verifier;
