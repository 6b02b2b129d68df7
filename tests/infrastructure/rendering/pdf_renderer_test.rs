use std::io::Write;

use pdf_oxide::writer::FontManager;

use notes_summarizer::application::ports::DocumentRenderer;
use notes_summarizer::infrastructure::rendering::PdfRenderer;

fn open(pdf_bytes: &[u8]) -> (tempfile::NamedTempFile, pdf_oxide::PdfDocument) {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(pdf_bytes).unwrap();
    let document = pdf_oxide::PdfDocument::open(file.path()).unwrap();
    (file, document)
}

fn page_count(pdf_bytes: &[u8]) -> usize {
    let (_file, document) = open(pdf_bytes);
    document.page_count().unwrap()
}

fn assert_lines_fit(renderer: &PdfRenderer, text: &str) {
    let fonts = FontManager::new();
    let max_width = renderer.printable_width();

    for line in renderer.layout(text).iter().flatten() {
        let width = fonts.text_width(line, "Helvetica", 12.0);
        assert!(
            width <= max_width,
            "line {line:?} is {width}pt wide, printable width is {max_width}pt"
        );
    }
}

#[test]
fn given_summary_when_rendering_then_produces_pdf_bytes() {
    let bytes = PdfRenderer::default().render("A short summary.").unwrap();

    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(page_count(&bytes), 1);
}

#[test]
fn given_empty_text_when_rendering_then_still_produces_a_page() {
    let bytes = PdfRenderer::new("Empty").render("").unwrap();

    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(page_count(&bytes), 1);
}

#[test]
fn given_many_lines_when_rendering_then_paginates() {
    let text = (0..100)
        .map(|i| format!("Line number {i}"))
        .collect::<Vec<_>>()
        .join("\n");

    let bytes = PdfRenderer::default().render(&text).unwrap();

    assert!(page_count(&bytes) > 1);
}

#[test]
fn given_wide_uppercase_text_when_laying_out_then_every_line_fits_printable_width() {
    let renderer = PdfRenderer::default();
    let text = "THE QUARTERLY REVIEW MEETING WILL COVER WORKLOAD, MILESTONES, BUDGET \
                OVERRUNS, MAINTENANCE WINDOWS AND THE MIGRATION OF WAREHOUSE SYSTEMS";

    assert!(renderer.layout(text)[0].len() > 1);
    assert_lines_fit(&renderer, text);
}

#[test]
fn given_word_wider_than_page_when_laying_out_then_it_is_broken_to_fit() {
    let renderer = PdfRenderer::default();
    let text = "W".repeat(120);

    let lines: Vec<String> = renderer.layout(&text).into_iter().flatten().collect();

    assert!(lines.len() > 1);
    assert_eq!(lines.concat(), text);
    assert_lines_fit(&renderer, &text);
}

#[test]
fn given_blank_cell_between_lines_when_laying_out_then_empty_line_is_kept() {
    let lines: Vec<String> = PdfRenderer::default()
        .layout("first\n\nsecond")
        .into_iter()
        .flatten()
        .collect();

    assert_eq!(lines, vec!["first", "", "second"]);
}

#[test]
fn given_text_on_first_page_when_rendering_then_it_can_be_read_back() {
    let bytes = PdfRenderer::default()
        .render("Borrowing rules\nprevent data races")
        .unwrap();

    let (_file, document) = open(&bytes);
    let text = document.extract_text(0).unwrap();

    assert!(text.contains("Borrowing"), "extracted: {text}");
    assert!(text.contains("races"), "extracted: {text}");
}
