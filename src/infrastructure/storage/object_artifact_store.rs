use std::io;
use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use futures::TryStreamExt;
use futures::stream::BoxStream;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ArtifactStore, ArtifactStoreError};
use crate::domain::StoragePath;

/// `ArtifactStore` over an `object_store` backend. Writes are whole-object
/// puts, so a reader never observes a partially written file.
pub struct ObjectArtifactStore {
    inner: Arc<dyn ObjectStore>,
}

impl ObjectArtifactStore {
    pub fn local(base_path: impl AsRef<Path>) -> Result<Self, ArtifactStoreError> {
        let base_path = base_path.as_ref();
        std::fs::create_dir_all(base_path)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| ArtifactStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(InMemory::new()),
        }
    }
}

#[async_trait::async_trait]
impl ArtifactStore for ObjectArtifactStore {
    async fn store(
        &self,
        path: &StoragePath,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
        _content_length: Option<u64>,
    ) -> Result<u64, ArtifactStoreError> {
        let chunks: Vec<Bytes> = stream.try_collect().await?;
        let total_bytes: u64 = chunks.iter().map(|c| c.len() as u64).sum();

        self.inner
            .put(&StorePath::from(path.as_str()), PutPayload::from_iter(chunks))
            .await
            .map_err(|e| ArtifactStoreError::WriteFailed(e.to_string()))?;

        tracing::debug!(path = %path, total_bytes, "Artifact stored");
        Ok(total_bytes)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, ArtifactStoreError> {
        let result = self
            .inner
            .get(&StorePath::from(path.as_str()))
            .await
            .map_err(|e| match e {
                object_store::Error::NotFound { path, .. } => ArtifactStoreError::NotFound(path),
                other => ArtifactStoreError::ReadFailed(other.to_string()),
            })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| ArtifactStoreError::ReadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
