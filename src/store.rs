use indexmap::IndexMap;

use crate::constants::fields;
use crate::errors::CleanError;
use crate::pipeline::CleanSummary;
use crate::record::{NormalizedRecord, RawRecord};
use crate::types::FieldName;

/// Ordered in-memory collection of raw records: the pipeline's input
/// boundary. Loaded once per run and consumed by [`crate::pipeline::clean`];
/// the raw and normalized views never alias.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<RawRecord>,
}

impl RecordStore {
    /// Wrap an already-decoded collection of raw records.
    pub fn from_records(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// Decode a scraped catalog from a JSON array of records.
    ///
    /// Mixed-typed fields (string-or-number ratings and years, bool-or-string
    /// series flags) are resolved here, once, rather than inside each
    /// transformer.
    pub fn from_json(json: &str) -> Result<Self, CleanError> {
        let records: Vec<RawRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Number of loaded records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when no records are loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn into_records(self) -> Vec<RawRecord> {
        self.records
    }
}

/// The normalized output of a pipeline run: surviving records in input
/// order, plus the run summary.
#[derive(Clone, Debug)]
pub struct FeatureSet {
    records: Vec<NormalizedRecord>,
    summary: CleanSummary,
}

impl FeatureSet {
    pub(crate) fn new(records: Vec<NormalizedRecord>, summary: CleanSummary) -> Self {
        Self { records, summary }
    }

    /// Surviving normalized records, in input order.
    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    /// Counts for the run that produced this set.
    pub fn summary(&self) -> CleanSummary {
        self.summary
    }

    /// Number of surviving records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the filter dropped every record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Export each record as an ordered field-to-value mapping, the hand-off
    /// shape for an external persistence or modeling collaborator.
    ///
    /// Pure structural conversion: no values change, field order follows
    /// [`fields::EXPORT_ORDER`], and repeated calls yield identical rows.
    pub fn to_rows(&self) -> Vec<IndexMap<FieldName, String>> {
        self.records
            .iter()
            .map(|record| {
                let mut row = IndexMap::with_capacity(fields::EXPORT_ORDER.len());
                for field in fields::EXPORT_ORDER {
                    if let Some(value) = record.value_of(field) {
                        row.insert(field.to_string(), value.to_string());
                    }
                }
                row
            })
            .collect()
    }
}
