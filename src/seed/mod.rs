pub mod data;
pub mod errors;
pub mod firestore;
pub mod models;
pub mod service;
pub mod store;
