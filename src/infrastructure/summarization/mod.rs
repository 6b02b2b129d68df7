mod candle_t5_summarizer;
mod lead_sentence_summarizer;
mod summarizer_factory;

pub use candle_t5_summarizer::CandleT5Summarizer;
pub use lead_sentence_summarizer::LeadSentenceSummarizer;
pub use summarizer_factory::SummarizerFactory;
