use std::io;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use futures::TryStreamExt;
use futures::stream::BoxStream;

use notes_summarizer::application::ports::{FileLoader, ArtifactStore, ArtifactStoreError};
use notes_summarizer::application::services::{ExtractionError, ExtractionService};
use notes_summarizer::domain::{ContentType, StoragePath};
use notes_summarizer::infrastructure::text_processing::{CompositeFileLoader, PlainTextAdapter};

#[derive(Default)]
struct RecordingStore {
    stored: Mutex<Vec<(String, Vec<u8>)>>,
}

#[async_trait::async_trait]
impl ArtifactStore for RecordingStore {
    async fn store(
        &self,
        path: &StoragePath,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
        _content_length: Option<u64>,
    ) -> Result<u64, ArtifactStoreError> {
        let chunks: Vec<Bytes> = stream.try_collect().await?;
        let data: Vec<u8> = chunks.concat();
        let size = data.len() as u64;
        self.stored
            .lock()
            .unwrap()
            .push((path.as_str().to_string(), data));
        Ok(size)
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, ArtifactStoreError> {
        Err(ArtifactStoreError::NotFound(path.to_string()))
    }
}

struct FailingStore;

#[async_trait::async_trait]
impl ArtifactStore for FailingStore {
    async fn store(
        &self,
        _path: &StoragePath,
        _stream: BoxStream<'_, Result<Bytes, io::Error>>,
        _content_length: Option<u64>,
    ) -> Result<u64, ArtifactStoreError> {
        Err(ArtifactStoreError::WriteFailed("disk full".to_string()))
    }

    async fn fetch(&self, path: &StoragePath) -> Result<Vec<u8>, ArtifactStoreError> {
        Err(ArtifactStoreError::NotFound(path.to_string()))
    }
}

fn text_loader() -> Arc<dyn FileLoader> {
    Arc::new(CompositeFileLoader::new(vec![(
        ContentType::Text,
        Arc::new(PlainTextAdapter) as Arc<dyn FileLoader>,
    )]))
}

#[tokio::test]
async fn given_txt_upload_when_extracting_then_returns_content_exactly() {
    let store = Arc::new(RecordingStore::default());
    let service = ExtractionService::new(text_loader(), store.clone());

    let text = service
        .extract("notes.txt", Bytes::from_static(b"Hello world"))
        .await
        .unwrap();

    assert_eq!(text, "Hello world");
}

#[tokio::test]
async fn given_upload_when_extracting_then_bytes_are_persisted_under_sanitized_name() {
    let store = Arc::new(RecordingStore::default());
    let service = ExtractionService::new(text_loader(), store.clone());

    service
        .extract("notes.txt", Bytes::from_static(b"Hello world"))
        .await
        .unwrap();

    let stored = store.stored.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].0.ends_with("/notes.txt"));
    assert_eq!(stored[0].1, b"Hello world");
}

#[tokio::test]
async fn given_docx_upload_when_extracting_then_returns_empty_text_but_still_persists() {
    let store = Arc::new(RecordingStore::default());
    let service = ExtractionService::new(text_loader(), store.clone());

    let text = service
        .extract("report.docx", Bytes::from_static(b"PK\x03\x04"))
        .await
        .unwrap();

    assert_eq!(text, "");
    assert_eq!(store.stored.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn given_invalid_utf8_txt_when_extracting_then_degrades_to_empty_text() {
    let store = Arc::new(RecordingStore::default());
    let service = ExtractionService::new(text_loader(), store);

    let text = service
        .extract("broken.txt", Bytes::from_static(&[0xff, 0xfe, 0xfd]))
        .await
        .unwrap();

    assert_eq!(text, "");
}

#[tokio::test]
async fn given_failing_store_when_extracting_then_returns_storage_error() {
    let service = ExtractionService::new(text_loader(), Arc::new(FailingStore));

    let result = service
        .extract("notes.txt", Bytes::from_static(b"Hello world"))
        .await;

    assert!(matches!(result, Err(ExtractionError::Storage(_))));
}
