use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::StoragePath;

/// Write-once storage for uploads and rendered summaries, keyed by
/// per-request paths.
#[async_trait::async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Returns the number of bytes written. Nothing is visible at `path`
    /// unless the whole stream was consumed.
    async fn store(
        &self,
        path: &StoragePath,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
        content_length: Option<u64>,
    ) -> Result<u64, ArtifactStoreError>;

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, ArtifactStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
