use notes_summarizer::application::ports::{FileLoader, FileLoaderError};
use notes_summarizer::domain::Document;
use notes_summarizer::infrastructure::text_processing::PlainTextAdapter;

#[tokio::test]
async fn given_utf8_bytes_when_extracting_then_returns_text_verbatim() {
    let data = "  Hello world\n\nsecond line  ".as_bytes();
    let document = Document::new("notes.txt".to_string(), data.len() as u64);

    let text = PlainTextAdapter.extract_text(data, &document).await.unwrap();

    assert_eq!(text, "  Hello world\n\nsecond line  ");
}

#[tokio::test]
async fn given_invalid_utf8_when_extracting_then_returns_extraction_failed() {
    let data = [0xc3, 0x28];
    let document = Document::new("notes.txt".to_string(), 2);

    let result = PlainTextAdapter.extract_text(&data, &document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_pdf_document_when_extracting_with_text_adapter_then_unsupported() {
    let document = Document::new("slides.pdf".to_string(), 4);

    let result = PlainTextAdapter.extract_text(b"%PDF", &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
