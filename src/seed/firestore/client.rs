use std::fmt;

use async_trait::async_trait;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    app::util::time,
    auth::firebase::{config::OAUTH_TOKEN_URL, service_account::ServiceAccount},
    seed::{
        errors::StoreError,
        models::field_value::{encode_fields, Fields},
        store::DocumentStore,
    },
};

use super::config::{
    ASSERTION_LIFETIME_SECS, DATASTORE_SCOPE, DEFAULT_DATABASE, FIRESTORE_BASE_URL,
    JWT_BEARER_GRANT,
};

#[derive(Clone)]
pub struct FirestoreClient {
    pub project_id: String,
    pub database: String,
    service_account: ServiceAccount,
    http_client: reqwest::Client,
    access_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    assertion: &'a str,
}

#[derive(Debug, Deserialize)]
struct OAuthResponse {
    access_token: String,
}

impl FirestoreClient {
    pub fn new(
        service_account: ServiceAccount,
        project_id: &str,
        http_client: Option<reqwest::Client>,
    ) -> FirestoreClient {
        FirestoreClient {
            project_id: project_id.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            service_account,
            http_client: http_client.unwrap_or_default(),
            access_token: None,
        }
    }

    fn token_uri(&self) -> &str {
        self.service_account
            .token_uri
            .as_deref()
            .unwrap_or(OAUTH_TOKEN_URL)
    }

    pub fn sign_assertion(&self) -> Result<String, StoreError> {
        let iat = time::current_time_in_secs();

        let claims = json!({
            "iss": self.service_account.client_email,
            "scope": DATASTORE_SCOPE,
            "aud": self.token_uri(),
            "exp": iat + ASSERTION_LIFETIME_SECS,
            "iat": iat,
        });

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.service_account.private_key_id.to_owned();

        let encoding_key = EncodingKey::from_rsa_pem(self.service_account.private_key.as_bytes())?;

        Ok(encode(&header, &claims, &encoding_key)?)
    }

    /// Trades a signed service account assertion for an OAuth2 access token.
    pub async fn login(&mut self) -> Result<(), StoreError> {
        let assertion = self.sign_assertion()?;

        let res = self
            .http_client
            .post(self.token_uri())
            .form(&TokenRequest {
                grant_type: JWT_BEARER_GRANT,
                assertion: &assertion,
            })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(StoreError::Rejected { status, body });
        }

        let oauth_response: OAuthResponse = res.json().await?;
        self.access_token = Some(oauth_response.access_token);

        tracing::info!(
            "logged in to firestore as {}",
            self.service_account.client_email
        );

        Ok(())
    }

    pub fn document_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents/{}/{}",
            FIRESTORE_BASE_URL, self.project_id, self.database, collection, id
        )
    }
}

impl fmt::Debug for FirestoreClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirestoreClient")
            .field("project_id", &self.project_id)
            .field("database", &self.database)
            .field("service_account", &self.service_account)
            .field("logged_in", &self.access_token.is_some())
            .finish()
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: &Fields,
    ) -> Result<(), StoreError> {
        let Some(access_token) = &self.access_token else {
            return Err(StoreError::NotLoggedIn);
        };

        // PATCH without an update mask replaces the whole document.
        let res = self
            .http_client
            .patch(self.document_url(collection, id))
            .bearer_auth(access_token)
            .json(&json!({ "fields": encode_fields(fields) }))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::error!("failed to set {}/{}: {}", collection, id, body);
            return Err(StoreError::Rejected { status, body });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_account(private_key: &str) -> ServiceAccount {
        ServiceAccount {
            project_id: "track-1".to_string(),
            private_key_id: Some("key-1".to_string()),
            private_key: private_key.to_string(),
            client_email: "firebase-adminsdk@track-1.iam.gserviceaccount.com".to_string(),
            token_uri: None,
        }
    }

    #[test]
    fn document_url_addresses_collection_and_id() {
        let client = FirestoreClient::new(service_account(""), "track-1", None);

        assert_eq!(
            client.document_url("users", "user_001"),
            "https://firestore.googleapis.com/v1/projects/track-1/databases/(default)/documents/users/user_001"
        );
    }

    #[test]
    fn bad_private_key_fails_to_sign() {
        let client = FirestoreClient::new(service_account("not a pem"), "track-1", None);

        assert!(matches!(client.sign_assertion(), Err(StoreError::Sign(_))));
    }

    #[test]
    fn signs_assertion_with_service_account_key() {
        let client = FirestoreClient::new(
            service_account(include_str!("../../../tests/fixtures/test_key.pem")),
            "track-1",
            None,
        );

        let assertion = client.sign_assertion().unwrap();
        let header = jsonwebtoken::decode_header(&assertion).unwrap();

        assert_eq!(header.alg, Algorithm::RS256);
        assert_eq!(header.kid.as_deref(), Some("key-1"));
    }

    #[tokio::test]
    async fn writes_require_login() {
        let client = FirestoreClient::new(service_account(""), "track-1", None);

        let result = client.set_document("users", "user_001", &Fields::new()).await;

        assert!(matches!(result, Err(StoreError::NotLoggedIn)));
    }

    #[test]
    fn debug_output_hides_credentials() {
        let mut client = FirestoreClient::new(
            service_account(include_str!("../../../tests/fixtures/test_key.pem")),
            "track-1",
            None,
        );
        client.access_token = Some("ya29.secret-access-token".to_string());

        let debug = format!("{:?}", client);

        assert!(!debug.contains("BEGIN PRIVATE KEY"));
        assert!(!debug.contains("ya29.secret-access-token"));
        assert!(debug.contains("logged_in: true"));
    }
}
