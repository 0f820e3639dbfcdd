use std::{sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    http::header::{AUTHORIZATION, CONTENT_TYPE},
    http::Method,
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{app::errors::DefaultApiError, auth::firebase::verifier::FirebaseAuth};

pub mod app;
pub mod auth;
pub mod seed;
pub mod transactions;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<FirebaseAuth>,
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::POST, Method::GET]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // transactions
        .route(
            "/verify-transaction",
            post(transactions::controller::verify_transaction),
        )
        // layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!(%err);
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(50, Duration::from_secs(1))),
        )
        .with_state(state)
}
