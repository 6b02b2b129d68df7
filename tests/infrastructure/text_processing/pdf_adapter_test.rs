use std::time::Duration;

use notes_summarizer::application::ports::{DocumentRenderer, FileLoader, FileLoaderError};
use notes_summarizer::domain::Document;
use notes_summarizer::infrastructure::rendering::PdfRenderer;
use notes_summarizer::infrastructure::text_processing::PdfAdapter;

#[tokio::test]
async fn given_rendered_pdf_when_extracting_then_returns_its_text() {
    let pdf_bytes = PdfRenderer::default()
        .render("Ownership moves values between bindings")
        .unwrap();
    let document = Document::new("summary.pdf".to_string(), pdf_bytes.len() as u64);

    let text = PdfAdapter::new()
        .extract_text(&pdf_bytes, &document)
        .await
        .unwrap();

    assert!(text.contains("Ownership"), "extracted: {text}");
    assert!(text.contains("bindings"), "extracted: {text}");
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let garbage = b"not a pdf at all";
    let document = Document::new("corrupt.pdf".to_string(), garbage.len() as u64);

    let result = PdfAdapter::with_timeout(Duration::from_secs(5))
        .extract_text(garbage, &document)
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_txt_document_when_extracting_with_pdf_adapter_then_unsupported() {
    let document = Document::new("notes.txt".to_string(), 5);

    let result = PdfAdapter::default().extract_text(b"hello", &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
