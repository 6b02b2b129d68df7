pub mod observability;
pub mod rendering;
pub mod sentiment;
pub mod storage;
pub mod summarization;
pub mod text_processing;
