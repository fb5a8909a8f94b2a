use axum::extract::{Multipart, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use common::drops::IssueError;
use common::registry::DropTicket;

use crate::http_server::Config;
use crate::ServiceState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Shareable link to the password prompt for this drop.
    pub url: String,
    /// One-time password, shown to the uploader exactly once.
    pub password: String,
}

pub async fn handler(
    State(state): State<ServiceState>,
    Extension(config): Extension<Config>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, UploadError> {
    let mut file: Option<(String, Vec<u8>)> = None;

    // Parse multipart form data; the first field carrying a filename is
    // the upload, whatever the form named it.
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Multipart parsing error: {}", e);
        UploadError::Multipart(e.to_string())
    })? {
        let Some(filename) = field.file_name().map(|s| s.to_string()) else {
            tracing::warn!(field = field.name().unwrap_or(""), "ignoring non-file field");
            continue;
        };

        let data = field.bytes().await.map_err(|e| {
            tracing::error!("Error reading file data for {}: {}", filename, e);
            UploadError::Multipart(e.to_string())
        })?;

        file = Some((filename, data.to_vec()));
        break;
    }

    let (filename, data) = file.ok_or(UploadError::MissingFile)?;

    let ticket = state
        .drops()
        .issue(&data, filename)
        .await
        .map_err(|e| match e {
            IssueError::TooLarge { size, max } => UploadError::TooLarge { size, max },
            IssueError::Storage(e) => {
                tracing::error!("failed to persist upload: {}", e);
                UploadError::Storage
            }
        })?;

    Ok((
        http::StatusCode::OK,
        Json(UploadResponse {
            url: share_url(&config, &headers, &ticket),
            password: ticket.password.reveal().to_string(),
        }),
    )
        .into_response())
}

/// Build the shareable link for a freshly issued drop.
///
/// Prefers the configured public URL; otherwise falls back to the
/// request's Host header so links work out of the box behind whatever
/// name the client reached us on.
fn share_url(config: &Config, headers: &HeaderMap, ticket: &DropTicket) -> String {
    let base = match &config.public_url {
        Some(url) => url.as_str().trim_end_matches('/').to_string(),
        None => {
            let host = headers
                .get(axum::http::header::HOST)
                .and_then(|h| h.to_str().ok())
                .unwrap_or("localhost");
            if host.starts_with("http://") || host.starts_with("https://") {
                host.trim_end_matches('/').to_string()
            } else {
                format!("http://{}", host)
            }
        }
    };

    format!("{}/file/{}", base, ticket.id)
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("a file is required")]
    MissingFile,
    #[error("file too large: {size} bytes (limit {max})")]
    TooLarge { size: u64, max: u64 },
    #[error("multipart error: {0}")]
    Multipart(String),
    #[error("storage error")]
    Storage,
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            UploadError::MissingFile => {
                (http::StatusCode::BAD_REQUEST, "File required.".to_string())
            }
            UploadError::TooLarge { size, max } => (
                http::StatusCode::BAD_REQUEST,
                format!("File too large: {} bytes (limit {}).", size, max),
            ),
            UploadError::Multipart(msg) => (
                http::StatusCode::BAD_REQUEST,
                format!("Bad request: {}", msg),
            ),
            UploadError::Storage => (
                http::StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to store upload.".to_string(),
            ),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
