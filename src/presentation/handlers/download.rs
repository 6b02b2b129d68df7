use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};

use crate::application::services::SummarizationError;
use crate::domain::SummaryId;
use crate::presentation::state::AppState;

const ATTACHMENT: &str = "attachment; filename=\"summary.pdf\"";

pub async fn download_latest_handler(State(state): State<AppState>) -> Response {
    match state.summarization_service.fetch_latest_document().await {
        Ok((id, document)) => {
            tracing::debug!(summary_id = %id, bytes = document.len(), "Serving latest summary");
            attachment(document)
        }
        Err(e) => error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn download_handler(
    State(state): State<AppState>,
    Path(summary_id): Path<String>,
) -> Response {
    let id: SummaryId = match summary_id.parse() {
        Ok(id) => id,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, "Invalid summary id").into_response();
        }
    };

    match state.summarization_service.fetch_document(&id).await {
        Ok(document) => attachment(document),
        Err(e) => error_response(e),
    }
}

fn attachment(document: Vec<u8>) -> Response {
    (
        [(CONTENT_TYPE, "application/pdf"), (CONTENT_DISPOSITION, ATTACHMENT)],
        document,
    )
        .into_response()
}

fn error_response(error: SummarizationError) -> Response {
    match error {
        SummarizationError::NoDocumentYet | SummarizationError::DocumentNotFound(_) => {
            tracing::debug!(error = %error, "No document to serve");
            (StatusCode::NOT_FOUND, "No summary available for download").into_response()
        }
        other => {
            tracing::error!(error = %other, "Failed to load summary document");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load summary document",
            )
                .into_response()
        }
    }
}
