use std::sync::Arc;

use crate::application::ports::{Summarizer, SummarizerError};
use crate::presentation::config::{SummarizerProvider, SummarizerSettings};

use super::candle_t5_summarizer::CandleT5Summarizer;
use super::lead_sentence_summarizer::LeadSentenceSummarizer;

pub struct SummarizerFactory;

impl SummarizerFactory {
    pub fn create(settings: &SummarizerSettings) -> Result<Arc<dyn Summarizer>, SummarizerError> {
        match settings.provider {
            SummarizerProvider::Local => {
                tracing::info!(model = %settings.model_id, "Loading local T5 summarizer");
                let summarizer = CandleT5Summarizer::new(&settings.model_id, &settings.revision)?;
                Ok(Arc::new(summarizer))
            }
            SummarizerProvider::Lead => {
                tracing::warn!("Using lead-sentence summarizer, no model will be loaded");
                Ok(Arc::new(LeadSentenceSummarizer::new()))
            }
        }
    }
}
