mod extraction_service;
mod summarization_service;
mod token_budget;

pub use extraction_service::{ExtractionError, ExtractionService};
pub use summarization_service::{
    SummarizationError, SummarizationService, SummarizationSettings,
};
pub use token_budget::{TruncatedInput, truncate_to_word_budget};
