use async_trait::async_trait;

use crate::application::ports::{ModelSummary, Summarizer, SummarizerError, SummaryLength};

/// Model-free extractive fallback: keeps leading sentences until the word
/// budget (`max_tokens`, counted in words) is spent. Used when no model
/// weights are available.
#[derive(Debug, Default)]
pub struct LeadSentenceSummarizer;

impl LeadSentenceSummarizer {
    pub fn new() -> Self {
        Self
    }
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (index, ch) in text.char_indices() {
        if matches!(ch, '.' | '!' | '?') {
            let end = index + ch.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

#[async_trait]
impl Summarizer for LeadSentenceSummarizer {
    async fn summarize(
        &self,
        text: &str,
        length: SummaryLength,
    ) -> Result<ModelSummary, SummarizerError> {
        let budget = length.max_tokens.max(1);
        let mut words: Vec<&str> = Vec::new();

        for sentence in split_sentences(text) {
            let sentence_words: Vec<&str> = sentence.split_whitespace().collect();
            if !words.is_empty() && words.len() + sentence_words.len() > budget {
                break;
            }
            words.extend(sentence_words);
            if words.len() >= length.min_tokens {
                break;
            }
        }

        words.truncate(budget);
        Ok(ModelSummary {
            text: words.join(" "),
            input_truncated: false,
        })
    }
}
