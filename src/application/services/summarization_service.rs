use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream;
use tokio::sync::{RwLock, Semaphore};

use crate::application::ports::{
    ArtifactStore, ArtifactStoreError, DocumentRenderer, RenderError, SentimentAnalyzer, Summarizer,
    SummarizerError, SummaryLength,
};
use crate::domain::{StoragePath, SummaryId, SummaryReport};

use super::token_budget::truncate_to_word_budget;

#[derive(Debug, Clone, Copy)]
pub struct SummarizationSettings {
    pub max_input_words: usize,
    pub length: SummaryLength,
    pub max_concurrent_inferences: usize,
}

impl Default for SummarizationSettings {
    fn default() -> Self {
        Self {
            max_input_words: 1024,
            length: SummaryLength {
                min_tokens: 40,
                max_tokens: 150,
            },
            max_concurrent_inferences: 1,
        }
    }
}

pub struct SummarizationService {
    summarizer: Arc<dyn Summarizer>,
    sentiment_analyzer: Arc<dyn SentimentAnalyzer>,
    renderer: Arc<dyn DocumentRenderer>,
    output_store: Arc<dyn ArtifactStore>,
    settings: SummarizationSettings,
    inference_permits: Semaphore,
    latest: RwLock<Option<SummaryId>>,
}

impl SummarizationService {
    pub fn new(
        summarizer: Arc<dyn Summarizer>,
        sentiment_analyzer: Arc<dyn SentimentAnalyzer>,
        renderer: Arc<dyn DocumentRenderer>,
        output_store: Arc<dyn ArtifactStore>,
        settings: SummarizationSettings,
    ) -> Self {
        Self {
            summarizer,
            sentiment_analyzer,
            renderer,
            output_store,
            inference_permits: Semaphore::new(settings.max_concurrent_inferences.max(1)),
            settings,
            latest: RwLock::new(None),
        }
    }

    /// Summarizes, scores and renders `text`, then publishes the rendered
    /// document as the latest one.
    #[tracing::instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn summarize(&self, text: &str) -> Result<SummaryReport, SummarizationError> {
        if text.trim().is_empty() {
            return Err(SummarizationError::EmptyInput);
        }

        let input = truncate_to_word_budget(text, self.settings.max_input_words);
        if input.truncated {
            tracing::warn!(
                words = input.word_count,
                budget = self.settings.max_input_words,
                "Input exceeds word budget, trailing content dropped"
            );
        }

        let generated = {
            let _permit = self
                .inference_permits
                .acquire()
                .await
                .map_err(|_| SummarizationError::InferenceUnavailable)?;
            self.summarizer
                .summarize(&input.text, self.settings.length)
                .await?
        };

        if generated.input_truncated {
            tracing::warn!("Model context window exceeded, input cut before inference");
        }

        let summary = generated.text.trim().to_string();
        if summary.is_empty() {
            return Err(SummarizationError::EmptySummary);
        }

        let sentiment = self.sentiment_analyzer.analyze(text);

        let id = SummaryId::new();
        let document = self.renderer.render(&summary)?;
        let path = StoragePath::for_summary(&id);
        let size = document.len() as u64;
        let payload = Bytes::from(document);
        self.output_store
            .store(
                &path,
                stream::once(async move { Ok::<_, std::io::Error>(payload) }).boxed(),
                Some(size),
            )
            .await?;

        *self.latest.write().await = Some(id);

        tracing::info!(
            summary_id = %id,
            summary_chars = summary.len(),
            polarity = sentiment.polarity(),
            subjectivity = sentiment.subjectivity(),
            "Summary rendered"
        );

        Ok(SummaryReport {
            id,
            summary,
            sentiment,
            input_words: input.word_count,
            truncated: input.truncated || generated.input_truncated,
        })
    }

    pub async fn latest_summary(&self) -> Option<SummaryId> {
        *self.latest.read().await
    }

    pub async fn fetch_document(&self, id: &SummaryId) -> Result<Vec<u8>, SummarizationError> {
        let path = StoragePath::for_summary(id);
        self.output_store.fetch(&path).await.map_err(|e| match e {
            ArtifactStoreError::NotFound(_) => SummarizationError::DocumentNotFound(id.to_string()),
            other => SummarizationError::Storage(other),
        })
    }

    pub async fn fetch_latest_document(
        &self,
    ) -> Result<(SummaryId, Vec<u8>), SummarizationError> {
        let id = self
            .latest_summary()
            .await
            .ok_or(SummarizationError::NoDocumentYet)?;
        let document = self.fetch_document(&id).await?;
        Ok((id, document))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizationError {
    #[error("input text is empty")]
    EmptyInput,
    #[error("model produced an empty summary")]
    EmptySummary,
    #[error("inference gate closed")]
    InferenceUnavailable,
    #[error("summarization: {0}")]
    Summarizer(#[from] SummarizerError),
    #[error("rendering: {0}")]
    Render(#[from] RenderError),
    #[error("storage: {0}")]
    Storage(#[from] ArtifactStoreError),
    #[error("no summary has been rendered yet")]
    NoDocumentYet,
    #[error("summary document not found: {0}")]
    DocumentNotFound(String),
}
