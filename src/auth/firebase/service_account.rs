use std::{fmt, fs};

use serde::Deserialize;

use super::errors::FirebaseError;

#[derive(Clone, Deserialize)]
pub struct ServiceAccount {
    pub project_id: String,
    pub private_key_id: Option<String>,
    pub private_key: String,
    pub client_email: String,
    pub token_uri: Option<String>,
}

impl ServiceAccount {
    pub fn from_file(path: &str) -> Result<ServiceAccount, FirebaseError> {
        let contents = fs::read_to_string(path).map_err(|source| FirebaseError::ReadCredentials {
            path: path.to_string(),
            source,
        })?;

        Ok(serde_json::from_str(&contents)?)
    }
}

impl fmt::Debug for ServiceAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccount")
            .field("project_id", &self.project_id)
            .field("private_key_id", &self.private_key_id)
            .field("private_key", &"[redacted]")
            .field("client_email", &self.client_email)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}
