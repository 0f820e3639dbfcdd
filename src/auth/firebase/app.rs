use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::app::env::Envy;

use super::{errors::FirebaseError, service_account::ServiceAccount, verifier::FirebaseAuth};

/// Process-wide Firebase application, set up once during startup.
static FIREBASE_APP: OnceCell<FirebaseApp> = OnceCell::new();

pub struct FirebaseApp {
    pub project_id: String,
    pub storage_bucket: String,
    pub service_account: ServiceAccount,
    auth: Arc<FirebaseAuth>,
}

impl FirebaseApp {
    pub fn new(
        service_account: ServiceAccount,
        project_id: Option<String>,
        storage_bucket: Option<String>,
    ) -> Result<FirebaseApp, FirebaseError> {
        let project_id = project_id.unwrap_or_else(|| service_account.project_id.to_string());

        if project_id.is_empty() {
            return Err(FirebaseError::MissingProjectId);
        }

        let storage_bucket =
            storage_bucket.unwrap_or_else(|| format!("{}.appspot.com", project_id));
        let auth = FirebaseAuth::new(project_id.to_string(), reqwest::Client::new());

        Ok(FirebaseApp {
            project_id,
            storage_bucket,
            service_account,
            auth: Arc::new(auth),
        })
    }

    pub fn from_envy(envy: &Envy) -> Result<FirebaseApp, FirebaseError> {
        let service_account = ServiceAccount::from_file(envy.credentials_path())?;

        FirebaseApp::new(
            service_account,
            envy.firebase_project_id.to_owned(),
            envy.firebase_storage_bucket.to_owned(),
        )
    }

    pub fn auth(&self) -> Arc<FirebaseAuth> {
        self.auth.clone()
    }
}

/// Initializes the Firebase application on first call. Later calls return the
/// instance created by the first one and ignore their argument.
pub fn initialize_firebase(envy: &Envy) -> Result<&'static FirebaseApp, FirebaseError> {
    FIREBASE_APP.get_or_try_init(|| {
        let app = FirebaseApp::from_envy(envy)?;

        tracing::info!(
            project_id = %app.project_id,
            storage_bucket = %app.storage_bucket,
            "firebase admin initialized"
        );

        Ok(app)
    })
}
