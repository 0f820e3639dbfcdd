mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{claims, sign, sign_with, test_app, KEY_ID, OTHER_PRIVATE_KEY};

fn transaction() -> Value {
    json!({
        "loan_id": "loan_102",
        "amount": 2500.75,
        "vendor": "Vellore Agro Supplies",
        "image_url": "https://firebasestorage.googleapis.com/v0/b/track-1.appspot.com/o/receipts%2Fr1.jpg"
    })
}

fn verify_request(authorization: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/verify-transaction")
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(authorization) = authorization {
        builder = builder.header(header::AUTHORIZATION, authorization);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_reports_online() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "status": "online", "system": "Track-1 API" })
    );
}

#[tokio::test]
async fn root_ignores_request_details() {
    let request = Request::builder()
        .uri("/?verbose=true")
        .header(header::AUTHORIZATION, "Bearer garbage")
        .body(Body::from("ignored"))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "status": "online", "system": "Track-1 API" })
    );
}

#[tokio::test]
async fn missing_authorization_is_unauthorized() {
    let response = test_app()
        .oneshot(verify_request(None, &transaction()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json_body(response).await,
        json!({ "message": "Missing or invalid token." })
    );
}

#[tokio::test]
async fn non_bearer_scheme_is_unauthorized() {
    let response = test_app()
        .oneshot(verify_request(Some("Basic dXNlcjpwYXNz"), &transaction()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn lowercase_scheme_is_unauthorized() {
    let token = sign(&claims("user_001"));
    let authorization = format!("bearer {}", token);

    let response = test_app()
        .oneshot(verify_request(Some(&authorization), &transaction()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn rejected_credential_is_unauthorized() {
    let token = sign_with(&claims("user_001"), Some(KEY_ID), OTHER_PRIVATE_KEY);
    let authorization = format!("Bearer {}", token);

    let response = test_app()
        .oneshot(verify_request(Some(&authorization), &transaction()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json_body(response).await,
        json!({ "message": "Invalid Firebase token." })
    );
}

#[tokio::test]
async fn empty_bearer_credential_is_unauthorized() {
    let response = test_app()
        .oneshot(verify_request(Some("Bearer "), &transaction()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_credential_is_acknowledged() {
    let token = sign(&claims("user_001"));
    let authorization = format!("Bearer {}", token);

    let response = test_app()
        .oneshot(verify_request(Some(&authorization), &transaction()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({
            "status": "success",
            "message": "Transaction verified and logged",
            "user_id": "user_001",
            "receipt_stored_at": transaction()["image_url"]
        })
    );
}

#[tokio::test]
async fn resubmission_succeeds_again() {
    let app = test_app();
    let authorization = format!("Bearer {}", sign(&claims("user_002")));

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(verify_request(Some(&authorization), &transaction()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["user_id"], "user_002");
    }
}

#[tokio::test]
async fn malformed_payload_is_a_client_error() {
    let authorization = format!("Bearer {}", sign(&claims("user_001")));
    let body = json!({ "loan_id": "loan_102", "vendor": "Vellore Agro Supplies" });

    let response = test_app()
        .oneshot(verify_request(Some(&authorization), &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json_body(response).await["message"].is_string());
}

#[tokio::test]
async fn credential_is_checked_before_payload() {
    let response = test_app()
        .oneshot(verify_request(None, &json!({ "nonsense": true })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
