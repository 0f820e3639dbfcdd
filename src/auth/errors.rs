use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum AuthApiError {
    MissingOrMalformedCredential,
    InvalidCredential,
}

impl AuthApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MissingOrMalformedCredential => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Missing or invalid token.".to_string(),
            },
            Self::InvalidCredential => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Invalid Firebase token.".to_string(),
            },
        }
    }
}
