use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

// The registry lives in-process and the vault is plain local disk, so
// there are no external dependencies to probe. Liveness of the request
// path is the signal.
#[tracing::instrument]
pub async fn handler() -> Response {
    let msg = serde_json::json!({"status": "ok"});
    (StatusCode::OK, Json(msg)).into_response()
}
