#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Categorization thresholds, labels, and canonical field orders.
pub mod constants;
/// Pipeline driver and run summary.
pub mod pipeline;
/// Raw and normalized record types.
pub mod record;
/// Record store input boundary and row exporter.
pub mod store;
/// Pure per-field transformers.
pub mod transform;
/// Shared type aliases.
pub mod types;
/// Text normalization helpers.
pub mod utils;

mod errors;

pub use errors::{CleanError, FieldError};
pub use pipeline::{clean, CleanSummary};
pub use record::{NormalizedRecord, RawRecord, Scalar, SeriesFlag};
pub use store::{FeatureSet, RecordStore};
pub use types::{CategoryLabel, FieldName, RaterCount, RecordTitle, TokenString};
