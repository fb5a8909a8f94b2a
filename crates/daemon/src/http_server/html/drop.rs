use askama::Template;
use askama_axum::IntoResponse;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use axum::Form;
use serde::Deserialize;

use common::credentials::DropId;
use common::drops::RedeemError;

use crate::http_server::handlers::not_found_handler;
use crate::ServiceState;

/// The password prompt page, also re-rendered with an inline error after
/// a wrong attempt.
#[derive(Template)]
#[template(path = "pages/drop_prompt.html")]
pub struct PromptTemplate {
    pub id: String,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RedeemForm {
    pub password: String,
}

/// GET /file/:id - render the password prompt if the drop is pending.
///
/// A malformed identifier takes the same 404 path as an unknown one;
/// nothing distinguishes "never existed" from "already downloaded".
pub async fn prompt_handler(
    State(state): State<ServiceState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let Ok(id) = id.parse::<DropId>() else {
        return not_found_handler(headers).await;
    };

    if !state.drops().exists(&id) {
        return not_found_handler(headers).await;
    }

    let template = PromptTemplate {
        id: id.to_string(),
        error: None,
    };
    template.into_response()
}

/// POST /file/:id - attempt the claim.
///
/// Success streams the bytes as an attachment; by the time the first
/// byte leaves, the record is already retired, so a disconnect cannot
/// resurrect it. A wrong password re-renders the prompt with an inline
/// error and leaves the drop claimable.
pub async fn redeem_handler(
    State(state): State<ServiceState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<RedeemForm>,
) -> Response {
    let Ok(id) = id.parse::<DropId>() else {
        return not_found_handler(headers).await;
    };

    match state.drops().redeem(&id, &form.password).await {
        Ok(claimed) => {
            let mime_type = mime_guess::from_path(&claimed.original_name)
                .first_or_octet_stream()
                .to_string();
            let disposition = format!(
                "attachment; filename=\"{}\"",
                claimed.original_name.replace(['"', '\r', '\n'], "_")
            );

            (
                StatusCode::OK,
                [
                    (axum::http::header::CONTENT_TYPE, mime_type),
                    (axum::http::header::CONTENT_DISPOSITION, disposition),
                ],
                claimed.bytes,
            )
                .into_response()
        }
        Err(RedeemError::WrongPassword) => {
            let template = PromptTemplate {
                id: id.to_string(),
                error: Some("Incorrect password".to_string()),
            };
            (StatusCode::OK, template).into_response()
        }
        Err(RedeemError::NotFound) => not_found_handler(headers).await,
        Err(RedeemError::Storage(e)) => {
            tracing::error!(id = %id, error = %e, "failed to read claimed blob");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to read stored file.",
            )
                .into_response()
        }
    }
}
