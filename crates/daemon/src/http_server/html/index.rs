use askama::Template;
use askama_axum::IntoResponse;
use axum::extract::State;
use tracing::instrument;

use crate::ServiceState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub max_upload_size: u64,
}

#[instrument(skip(state))]
pub async fn handler(State(state): State<ServiceState>) -> askama_axum::Response {
    let template = IndexTemplate {
        max_upload_size: state.drops().max_size(),
    };

    template.into_response()
}
