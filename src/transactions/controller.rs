use axum::{extract::State, Json};

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    auth::{errors::AuthApiError, models::bearer_token::BearerToken},
    AppState,
};

use super::{
    dtos::verify_transaction_dto::VerifyTransactionDto,
    models::transaction_receipt::TransactionReceipt, service,
};

pub async fn verify_transaction(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    JsonFromRequest(dto): JsonFromRequest<VerifyTransactionDto>,
) -> Result<Json<TransactionReceipt>, ApiError> {
    let Some(identity) = state.auth.verify_token(&token).await else {
        return Err(AuthApiError::InvalidCredential.value());
    };

    Ok(Json(service::verify_transaction(&dto, &identity)))
}
