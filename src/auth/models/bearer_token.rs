use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{app::models::api_error::ApiError, auth::errors::AuthApiError};

static BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(AUTHORIZATION) else {
            return Err(AuthApiError::MissingOrMalformedCredential.value());
        };

        let Ok(value) = value.to_str() else {
            return Err(AuthApiError::MissingOrMalformedCredential.value());
        };

        match parse_bearer(value) {
            Some(token) => Ok(BearerToken(token.to_string())),
            None => Err(AuthApiError::MissingOrMalformedCredential.value()),
        }
    }
}

/// Returns the second space-separated part of a `Bearer ` header value.
pub fn parse_bearer(value: &str) -> Option<&str> {
    if !value.starts_with(BEARER_PREFIX) {
        return None;
    }

    value.split(' ').nth(1)
}
