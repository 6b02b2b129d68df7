use notes_summarizer::infrastructure::text_processing::sanitize_extracted_text;

#[test]
fn given_hyphenated_line_break_when_sanitizing_then_word_is_rejoined() {
    assert_eq!(sanitize_extracted_text("owner-\nship rules"), "ownership rules");
}

#[test]
fn given_ligature_when_sanitizing_then_folded_by_nfkc() {
    assert_eq!(sanitize_extracted_text("\u{FB01}le"), "file");
}

#[test]
fn given_runs_of_whitespace_and_blank_lines_when_sanitizing_then_collapsed() {
    let raw = "first   line\n\n   \nsecond\t\tline  ";

    assert_eq!(sanitize_extracted_text(raw), "first line\nsecond line");
}

#[test]
fn given_control_characters_when_sanitizing_then_removed() {
    assert_eq!(sanitize_extracted_text("a\u{0007}b\u{0000}c"), "abc");
}

#[test]
fn given_empty_text_when_sanitizing_then_returns_empty() {
    assert_eq!(sanitize_extracted_text(""), "");
}
