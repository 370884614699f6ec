//! Report structures wrapping a parsed resume with run metadata

use crate::extraction::ParsedResume;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One parsed resume plus where it came from and how long it took.
///
/// The resume fields are flattened so the JSON keeps the familiar
/// `name`/`email`/.../`raw_text` shape with an extra `metadata` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseReport {
    #[serde(flatten)]
    pub resume: ParsedResume,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub parser_version: String,
    pub source_file: String,
    pub processing_time_ms: u64,
    /// Length of the decoded text in characters
    pub text_chars: usize,
}

impl ParseReport {
    pub fn new(resume: ParsedResume, source_file: &str, text: &str, processing_time_ms: u64) -> Self {
        Self {
            resume,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                parser_version: env!("CARGO_PKG_VERSION").to_string(),
                source_file: source_file.to_string(),
                processing_time_ms,
                text_chars: text.chars().count(),
            },
        }
    }

    /// Fields found out of the six the parser looks for
    pub fn coverage(&self) -> (usize, usize) {
        (self.resume.populated_fields(), 6)
    }
}
