pub mod colors;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/colors", colors::routes())
}
