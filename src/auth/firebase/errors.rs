use jsonwebtoken::Algorithm;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FirebaseError {
    #[error("failed to read service account key {path}: {source}")]
    ReadCredentials {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse service account key: {0}")]
    ParseCredentials(#[from] serde_json::Error),
    #[error("firebase project id is not configured")]
    MissingProjectId,
}

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("malformed token: {0}")]
    Malformed(jsonwebtoken::errors::Error),
    #[error("unsupported algorithm {0:?}")]
    UnsupportedAlgorithm(Algorithm),
    #[error("token has no kid header")]
    MissingKeyId,
    #[error("no public key matches kid {0}")]
    UnknownKeyId(String),
    #[error("failed to fetch public keys: {0}")]
    KeyFetch(#[from] reqwest::Error),
    #[error("invalid public key {kid}: {source}")]
    InvalidKey {
        kid: String,
        source: jsonwebtoken::errors::Error,
    },
    #[error("token rejected: {0}")]
    Rejected(jsonwebtoken::errors::Error),
    #[error("token subject is empty or longer than 128 characters")]
    InvalidSubject,
    #[error("token {0} is in the future")]
    IssuedInFuture(&'static str),
}
