mod document;
mod document_id;
mod sentiment;
mod storage_path;
mod summary_id;
mod summary_report;

pub use document::{ContentType, Document};
pub use document_id::DocumentId;
pub use sentiment::{Sentiment, SentimentLabel};
pub use storage_path::StoragePath;
pub use summary_id::SummaryId;
pub use summary_report::SummaryReport;
