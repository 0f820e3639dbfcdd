use axum::Json;
use serde_json::{json, Value};

pub async fn get_root() -> Json<Value> {
    Json(json!({
        "status": "online",
        "system": "Track-1 API",
    }))
}
