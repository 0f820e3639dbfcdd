use std::process;

use chrono::Utc;
use loan_tracker_api::{
    app,
    auth::firebase::app::initialize_firebase,
    seed::{firestore::client::FirestoreClient, service::seed_database},
};

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let envy = match app::env::load() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    let firebase = match initialize_firebase(&envy) {
        Ok(firebase) => firebase,
        Err(e) => panic!("failed to initialize firebase: {}", e),
    };

    let mut client = FirestoreClient::new(
        firebase.service_account.clone(),
        &firebase.project_id,
        None,
    );

    if let Err(e) = client.login().await {
        tracing::error!("failed to log in to firestore: {}", e);
        process::exit(1);
    }

    match seed_database(&client, Utc::now()).await {
        Ok(summary) => tracing::info!(
            users = summary.users,
            loans = summary.loans,
            transactions = summary.transactions,
            "database seeded successfully"
        ),
        Err(e) => {
            tracing::error!("seeding failed: {}", e);
            process::exit(1);
        }
    }
}
