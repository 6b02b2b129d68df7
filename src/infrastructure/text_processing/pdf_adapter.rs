use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::text_sanitizer::sanitize_extracted_text;

const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Extracts the text layer of every page; pages with no text are skipped.
pub struct PdfAdapter {
    timeout: Duration,
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_EXTRACTION_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn read_pages(path: &Path) -> Result<Vec<String>, FileLoaderError> {
        let pdf = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = pdf.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let pages = (0..page_count)
            .filter_map(|index| match pdf.extract_text(index) {
                Ok(text) => Some(sanitize_extracted_text(&text)),
                Err(e) => {
                    tracing::debug!(page = index + 1, error = %e, "Skipping unreadable page");
                    None
                }
            })
            .filter(|text| !text.is_empty())
            .collect();

        Ok(pages)
    }
}

impl Default for PdfAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != Some(ContentType::Pdf) {
            return Err(FileLoaderError::UnsupportedContentType(
                document.filename.clone(),
            ));
        }

        let mut scratch = tempfile::NamedTempFile::new().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;
        scratch.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let scratch_path = scratch.path().to_path_buf();
        let pages = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || Self::read_pages(&scratch_path)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(pages = pages.len(), "PDF text extraction complete");

        if pages.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(pages.join(" "))
    }
}
