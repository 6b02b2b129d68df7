use async_trait::async_trait;

/// Output length bounds, in decoder tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLength {
    pub min_tokens: usize,
    pub max_tokens: usize,
}

/// Generated text plus whether the model dropped part of its input to fit
/// its context window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSummary {
    pub text: String,
    pub input_truncated: bool,
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Callers must not pass empty or whitespace-only text.
    async fn summarize(
        &self,
        text: &str,
        length: SummaryLength,
    ) -> Result<ModelSummary, SummarizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("inference failed: {0}")]
    InferenceFailed(String),
}
