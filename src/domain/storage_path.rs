use std::fmt;

use super::document_id::DocumentId;
use super::summary_id::SummaryId;

pub const SUMMARY_FILENAME: &str = "summary.pdf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(document_id: &DocumentId, filename: &str) -> Self {
        Self(format!("{}/{}", document_id.as_uuid(), filename))
    }

    pub fn for_summary(summary_id: &SummaryId) -> Self {
        Self(format!("{}/{}", summary_id.as_uuid(), SUMMARY_FILENAME))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
