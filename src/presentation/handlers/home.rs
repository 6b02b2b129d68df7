use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use bytes::Bytes;

use crate::application::services::SummarizationError;
use crate::infrastructure::observability::preview_for_log;
use crate::infrastructure::text_processing::secure_filename;
use crate::presentation::state::AppState;
use crate::presentation::views::{PageView, render_page};

const TEXT_FIELD: &str = "text";
const FILE_FIELD: &str = "file";

struct Upload {
    filename: String,
    data: Bytes,
}

#[derive(Default)]
struct SubmittedForm {
    text: String,
    upload: Option<Upload>,
}

pub async fn index_handler() -> Html<String> {
    Html(render_page(&PageView::default()))
}

#[tracing::instrument(skip(state, multipart))]
pub async fn summarize_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let form = match read_form(&mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!(error = %e, status = %e.status(), "Failed to read multipart form");
            return (e.status(), format!("Failed to read form: {e}")).into_response();
        }
    };

    let input_text = match form.upload {
        Some(upload) => {
            let filename = secure_filename(&upload.filename);
            tracing::debug!(
                original = %upload.filename,
                sanitized = %filename,
                bytes = upload.data.len(),
                "Processing file upload"
            );
            match state.extraction_service.extract(&filename, upload.data).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to persist upload");
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Failed to store the uploaded file",
                    )
                        .into_response();
                }
            }
        }
        None => form.text.clone(),
    };

    if input_text.trim().is_empty() {
        tracing::debug!("No usable input, showing the form");
        return Html(render_page(&PageView::form_only(form.text))).into_response();
    }

    tracing::debug!(input = %preview_for_log(&input_text), "Summarizing input");

    match state.summarization_service.summarize(&input_text).await {
        Ok(report) => Html(render_page(&PageView::with_report(form.text, &report))).into_response(),
        Err(SummarizationError::EmptySummary) => {
            tracing::warn!("Model returned no text, showing the form");
            Html(render_page(&PageView::form_only(form.text))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Summarization failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Summarization failed").into_response()
        }
    }
}

/// Collects the `text` and `file` parts. A file part with an empty filename
/// (a form submitted without choosing a file) counts as no upload.
async fn read_form(multipart: &mut Multipart) -> Result<SubmittedForm, MultipartError> {
    let mut form = SubmittedForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(TEXT_FIELD) => form.text = field.text().await?,
            Some(FILE_FIELD) => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                if !filename.is_empty() {
                    form.upload = Some(Upload { filename, data });
                }
            }
            other => tracing::debug!(field = ?other, "Ignoring unknown form field"),
        }
    }

    Ok(form)
}
