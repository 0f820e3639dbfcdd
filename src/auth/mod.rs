pub mod errors;
pub mod firebase;
pub mod models;
