#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::Router;
use jsonwebtoken::{encode, Algorithm, DecodingKey, EncodingKey, Header};
use loan_tracker_api::{auth::firebase::verifier::FirebaseAuth, AppState};
use serde_json::{json, Value};

pub const PROJECT_ID: &str = "track-1-test";
pub const KEY_ID: &str = "test-key";

pub const TEST_PRIVATE_KEY: &str = include_str!("../fixtures/test_key.pem");
pub const TEST_PUBLIC_KEY: &str = include_str!("../fixtures/test_key.pub.pem");
pub const OTHER_PRIVATE_KEY: &str = include_str!("../fixtures/other_key.pem");
pub const TEST_JWKS: &str = include_str!("../fixtures/jwks.json");

pub fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

/// Claims shaped like a Firebase ID token for a phone sign-in.
pub fn claims(uid: &str) -> Value {
    let now = now();

    json!({
        "sub": uid,
        "user_id": uid,
        "aud": PROJECT_ID,
        "iss": format!("https://securetoken.google.com/{}", PROJECT_ID),
        "iat": now - 10,
        "exp": now + 3600,
        "auth_time": now - 10,
        "phone_number": "+919876543210",
        "firebase": {
            "identities": { "phone": ["+919876543210"] },
            "sign_in_provider": "phone"
        }
    })
}

pub fn sign_with(claims: &Value, kid: Option<&str>, private_key: &str) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = kid.map(str::to_string);

    encode(
        &header,
        claims,
        &EncodingKey::from_rsa_pem(private_key.as_bytes()).unwrap(),
    )
    .unwrap()
}

pub fn sign(claims: &Value) -> String {
    sign_with(claims, Some(KEY_ID), TEST_PRIVATE_KEY)
}

pub fn test_auth() -> FirebaseAuth {
    let key = DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes()).unwrap();

    FirebaseAuth::with_keys(PROJECT_ID, HashMap::from([(KEY_ID.to_string(), key)]))
}

pub fn test_app() -> Router {
    loan_tracker_api::app(AppState {
        auth: Arc::new(test_auth()),
    })
}
