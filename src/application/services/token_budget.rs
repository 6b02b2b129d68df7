use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncatedInput<'a> {
    pub text: Cow<'a, str>,
    pub word_count: usize,
    pub truncated: bool,
}

/// Keeps the first `budget` whitespace-separated words. Text within the
/// budget is returned untouched; longer text is rejoined with single spaces.
pub fn truncate_to_word_budget(text: &str, budget: usize) -> TruncatedInput<'_> {
    let word_count = text.split_whitespace().count();

    if word_count <= budget {
        return TruncatedInput {
            text: Cow::Borrowed(text),
            word_count,
            truncated: false,
        };
    }

    let kept = text
        .split_whitespace()
        .take(budget)
        .collect::<Vec<_>>()
        .join(" ");

    TruncatedInput {
        text: Cow::Owned(kept),
        word_count,
        truncated: true,
    }
}
