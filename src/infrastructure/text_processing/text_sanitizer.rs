use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static SOFT_HYPHEN_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<head>\w)-[ \t]*\r?\n[ \t]*(?P<tail>\w)").unwrap());

/// Cleans text pulled out of a PDF page: NFKC folding (ligatures, full-width
/// forms), words re-joined across hyphenated line breaks, control characters
/// dropped, runs of spaces collapsed and blank lines removed.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let folded: String = raw.nfkc().collect();
    let joined = SOFT_HYPHEN_BREAK.replace_all(&folded, "$head$tail");

    joined
        .lines()
        .map(|line| {
            line.chars()
                .filter(|c| !c.is_control() || *c == '\t')
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
