use notes_summarizer::domain::{ContentType, Document};

#[test]
fn given_pdf_filename_when_creating_document_then_content_type_is_pdf() {
    let document = Document::new("lecture.pdf".to_string(), 42);

    assert_eq!(document.content_type, Some(ContentType::Pdf));
    assert_eq!(document.size_bytes, 42);
}

#[test]
fn given_uppercase_extension_when_resolving_content_type_then_matches_case_insensitively() {
    assert_eq!(ContentType::from_filename("NOTES.TXT"), Some(ContentType::Text));
    assert_eq!(ContentType::from_filename("Slides.Pdf"), Some(ContentType::Pdf));
}

#[test]
fn given_docx_filename_when_creating_document_then_content_type_is_none() {
    let document = Document::new("report.docx".to_string(), 10);

    assert_eq!(document.content_type, None);
}

#[test]
fn given_filename_without_extension_when_resolving_then_returns_none() {
    assert_eq!(ContentType::from_filename("README"), None);
}

#[test]
fn given_two_documents_with_same_name_when_created_then_ids_differ() {
    let a = Document::new("notes.txt".to_string(), 1);
    let b = Document::new("notes.txt".to_string(), 1);

    assert_ne!(a.id, b.id);
}
