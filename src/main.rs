use std::net::SocketAddr;

use loan_tracker_api::{
    app::{self, env::Envy},
    auth::firebase::app::initialize_firebase,
    AppState,
};

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let envy: Envy = match app::env::load() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // firebase
    let firebase = match initialize_firebase(&envy) {
        Ok(firebase) => firebase,
        Err(e) => panic!("failed to initialize firebase: {}", e),
    };

    let state = AppState {
        auth: firebase.auth(),
    };

    // app
    let app = loan_tracker_api::app(state);

    let port = envy.port.unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {} ({})", addr, envy.app_env);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(%e);
    }
}
