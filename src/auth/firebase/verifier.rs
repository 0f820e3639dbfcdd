use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use reqwest::header::CACHE_CONTROL;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::{app::util::time, auth::models::verified_identity::VerifiedIdentity};

use super::{
    claims::FirebaseClaims,
    config::{issuer_for, CLOCK_SKEW_SECS, DEFAULT_KEYS_MAX_AGE, MAX_UID_LENGTH, PUBLIC_KEYS_URL},
    errors::VerifyError,
};

pub struct FirebaseAuth {
    project_id: String,
    keys_url: String,
    http_client: reqwest::Client,
    keys: RwLock<PublicKeys>,
}

struct PublicKeys {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Option<Instant>,
    max_age: Duration,
}

impl PublicKeys {
    fn empty() -> PublicKeys {
        PublicKeys {
            keys: HashMap::new(),
            fetched_at: None,
            max_age: Duration::ZERO,
        }
    }

    fn is_fresh(&self) -> bool {
        match self.fetched_at {
            Some(fetched_at) => fetched_at.elapsed() < self.max_age,
            None => false,
        }
    }

    fn get(&self, kid: &str) -> Result<DecodingKey, VerifyError> {
        match self.keys.get(kid) {
            Some(key) => Ok(key.clone()),
            None => Err(VerifyError::UnknownKeyId(kid.to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}

#[derive(Debug, Deserialize)]
pub struct Jwk {
    pub kid: String,
    pub n: String,
    pub e: String,
}

impl JwkSet {
    pub fn decoding_keys(&self) -> Result<HashMap<String, DecodingKey>, VerifyError> {
        self.keys
            .iter()
            .map(|jwk| match DecodingKey::from_rsa_components(&jwk.n, &jwk.e) {
                Ok(key) => Ok((jwk.kid.to_string(), key)),
                Err(source) => Err(VerifyError::InvalidKey {
                    kid: jwk.kid.to_string(),
                    source,
                }),
            })
            .collect()
    }
}

impl FirebaseAuth {
    pub fn new(project_id: impl Into<String>, http_client: reqwest::Client) -> FirebaseAuth {
        FirebaseAuth {
            project_id: project_id.into(),
            keys_url: PUBLIC_KEYS_URL.to_string(),
            http_client,
            keys: RwLock::new(PublicKeys::empty()),
        }
    }

    /// Builds a verifier whose key set is fixed and never refreshed.
    pub fn with_keys(
        project_id: impl Into<String>,
        keys: HashMap<String, DecodingKey>,
    ) -> FirebaseAuth {
        FirebaseAuth {
            project_id: project_id.into(),
            keys_url: PUBLIC_KEYS_URL.to_string(),
            http_client: reqwest::Client::new(),
            keys: RwLock::new(PublicKeys {
                keys,
                fetched_at: Some(Instant::now()),
                max_age: Duration::MAX,
            }),
        }
    }

    pub fn with_keys_url(mut self, keys_url: impl Into<String>) -> FirebaseAuth {
        self.keys_url = keys_url.into();
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the verified identity, or `None` when the token is refused for
    /// any reason. The reason is only logged.
    pub async fn verify_token(&self, token: &str) -> Option<VerifiedIdentity> {
        match self.try_verify_token(token).await {
            Ok(identity) => Some(identity),
            Err(e) => {
                tracing::warn!("token verification failed: {}", e);
                None
            }
        }
    }

    pub async fn try_verify_token(&self, token: &str) -> Result<VerifiedIdentity, VerifyError> {
        let header = decode_header(token).map_err(VerifyError::Malformed)?;

        if header.alg != Algorithm::RS256 {
            return Err(VerifyError::UnsupportedAlgorithm(header.alg));
        }

        let Some(kid) = header.kid else {
            return Err(VerifyError::MissingKeyId);
        };

        let key = self.public_key(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.leeway = CLOCK_SKEW_SECS;
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[issuer_for(&self.project_id)]);
        validation.set_required_spec_claims(&["exp", "sub", "aud", "iss"]);

        let claims = decode::<FirebaseClaims>(token, &key, &validation)
            .map_err(VerifyError::Rejected)?
            .claims;

        if claims.sub.is_empty() || claims.sub.chars().count() > MAX_UID_LENGTH {
            return Err(VerifyError::InvalidSubject);
        }

        let now = time::current_time_in_secs() + CLOCK_SKEW_SECS;

        if claims.iat > now {
            return Err(VerifyError::IssuedInFuture("iat"));
        }

        if let Some(auth_time) = claims.auth_time {
            if auth_time > now {
                return Err(VerifyError::IssuedInFuture("auth_time"));
            }
        }

        Ok(claims.into())
    }

    async fn public_key(&self, kid: &str) -> Result<DecodingKey, VerifyError> {
        {
            let keys = self.keys.read().await;

            if keys.is_fresh() {
                return keys.get(kid);
            }
        }

        let mut keys = self.keys.write().await;

        // another request may have refreshed while we waited
        if !keys.is_fresh() {
            *keys = self.fetch_public_keys().await?;
        }

        keys.get(kid)
    }

    async fn fetch_public_keys(&self) -> Result<PublicKeys, VerifyError> {
        let res = self
            .http_client
            .get(&self.keys_url)
            .send()
            .await?
            .error_for_status()?;

        let max_age = res
            .headers()
            .get(CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_max_age)
            .unwrap_or(DEFAULT_KEYS_MAX_AGE);

        let jwk_set: JwkSet = res.json().await?;
        let keys = jwk_set.decoding_keys()?;

        tracing::debug!(count = keys.len(), max_age, "refreshed firebase public keys");

        Ok(PublicKeys {
            keys,
            fetched_at: Some(Instant::now()),
            max_age: Duration::from_secs(max_age),
        })
    }
}

fn parse_max_age(cache_control: &str) -> Option<u64> {
    cache_control
        .split(',')
        .filter_map(|directive| directive.trim().strip_prefix("max-age="))
        .find_map(|seconds| seconds.parse().ok())
}
