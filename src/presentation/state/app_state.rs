use std::sync::Arc;

use crate::application::services::{ExtractionService, SummarizationService};

#[derive(Clone)]
pub struct AppState {
    pub extraction_service: Arc<ExtractionService>,
    pub summarization_service: Arc<SummarizationService>,
    pub max_upload_bytes: usize,
}
