use thiserror::Error;

use crate::types::RecordTitle;

/// Error type for pipeline runs over a record collection.
///
/// A parse failure aborts the whole run: a value that cannot convert is an
/// upstream data-quality bug that must surface, not be defaulted over.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("record '{record}': {source}")]
    Parse {
        record: RecordTitle,
        #[source]
        source: FieldError,
    },
    #[error("input is not a valid record collection: {0}")]
    Load(#[from] serde_json::Error),
}

/// A single field value that could not be converted to its expected shape.
#[derive(Debug, Error)]
#[error("field '{field}' has unparseable value '{value}': {reason}")]
pub struct FieldError {
    /// Canonical name of the offending field.
    pub field: &'static str,
    /// Raw value as received from the scraper.
    pub value: String,
    /// Human-readable conversion failure description.
    pub reason: String,
}

impl FieldError {
    /// Build a field error for `field` with the raw `value` that failed.
    pub fn new(field: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Attach the owning record's identity, producing a run-level error.
    pub fn for_record(self, record: impl Into<RecordTitle>) -> CleanError {
        CleanError::Parse {
            record: record.into(),
            source: self,
        }
    }
}
