mod artifact_store;
mod document_renderer;
mod file_loader;
mod sentiment_analyzer;
mod summarizer;

pub use artifact_store::{ArtifactStore, ArtifactStoreError};
pub use document_renderer::{DocumentRenderer, RenderError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use sentiment_analyzer::SentimentAnalyzer;
pub use summarizer::{ModelSummary, Summarizer, SummarizerError, SummaryLength};
