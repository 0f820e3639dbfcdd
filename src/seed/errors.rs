use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to sign service account assertion: {0}")]
    Sign(#[from] jsonwebtoken::errors::Error),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("firestore responded {status}: {body}")]
    Rejected { status: StatusCode, body: String },
    #[error("document store client is not logged in")]
    NotLoggedIn,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("{collection} record has no string {id_field} field")]
    MissingId {
        collection: String,
        id_field: String,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}
