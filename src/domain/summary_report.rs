use super::sentiment::Sentiment;
use super::summary_id::SummaryId;

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub id: SummaryId,
    pub summary: String,
    pub sentiment: Sentiment,
    pub input_words: usize,
    pub truncated: bool,
}
