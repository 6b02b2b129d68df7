use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream;

use crate::application::ports::{ArtifactStore, ArtifactStoreError, FileLoader};
use crate::domain::{Document, StoragePath};

pub struct ExtractionService {
    file_loader: Arc<dyn FileLoader>,
    upload_store: Arc<dyn ArtifactStore>,
}

impl ExtractionService {
    pub fn new(file_loader: Arc<dyn FileLoader>, upload_store: Arc<dyn ArtifactStore>) -> Self {
        Self {
            file_loader,
            upload_store,
        }
    }

    /// Persists the upload and extracts its text. `filename` must already be
    /// sanitized. Extraction problems degrade to an empty string; only a
    /// failure to persist the upload is reported.
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn extract(&self, filename: &str, data: Bytes) -> Result<String, ExtractionError> {
        let document = Document::new(filename.to_string(), data.len() as u64);
        let path = StoragePath::new(&document.id, &document.filename);

        let payload = data.clone();
        let byte_stream = stream::once(async move { Ok::<_, std::io::Error>(payload) });
        let stored = self
            .upload_store
            .store(&path, byte_stream.boxed(), Some(document.size_bytes))
            .await?;

        tracing::debug!(path = %path, stored, "Upload persisted");

        if document.content_type.is_none() {
            tracing::warn!(filename = %document.filename, "Unsupported upload type, ignoring");
            return Ok(String::new());
        }

        match self.file_loader.extract_text(&data, &document).await {
            Ok(text) => {
                tracing::info!(chars = text.len(), "Upload text extracted");
                Ok(text)
            }
            Err(e) => {
                tracing::warn!(error = %e, filename = %document.filename, "Text extraction failed");
                Ok(String::new())
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("upload storage: {0}")]
    Storage(#[from] ArtifactStoreError),
}
