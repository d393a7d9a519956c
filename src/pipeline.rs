//! Pipeline driver: applies every field transformer, runs the popularity
//! filter, and synthesizes the per-record `features` blob.

use tracing::{debug, info};

use crate::constants::{fields, raters};
use crate::errors::CleanError;
use crate::record::{NormalizedRecord, RawRecord};
use crate::store::{FeatureSet, RecordStore};
use crate::transform::{
    categorize_length, categorize_rating, categorize_year, classify_series, convert_raters,
    tokens_from_list,
};
use crate::utils::collapse_double_spaces;

/// Record counts for one pipeline run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CleanSummary {
    /// Records loaded into the run.
    pub input: usize,
    /// Records surviving the popularity filter.
    pub retained: usize,
    /// Records dropped for a rater count at or below the threshold.
    pub dropped: usize,
}

/// Run the full normalization pass over a record store.
///
/// Per record: categorize the rating, expand the compact rater count, and
/// apply the popularity filter; survivors then get the series/movie label,
/// the five list-to-token conversions, the length and year categories, and
/// finally the synthesized `features` string. The transient rater count and
/// the raw `number` field are not retained.
///
/// The first unparseable field aborts the run with the offending record's
/// title, field name, and raw value. Records dropped by the filter are never
/// reached by the transforms that run after it, so a malformed length or
/// year in a low-popularity record does not fail the run.
pub fn clean(store: RecordStore) -> Result<FeatureSet, CleanError> {
    let raw = store.into_records();
    let input = raw.len();
    let mut retained = Vec::with_capacity(input);
    let mut dropped = 0usize;

    for record in raw {
        match normalize_record(record)? {
            Some(normalized) => retained.push(normalized),
            None => dropped += 1,
        }
    }

    let summary = CleanSummary {
        input,
        retained: retained.len(),
        dropped,
    };
    info!(
        input = summary.input,
        retained = summary.retained,
        dropped = summary.dropped,
        "catalog clean pass completed"
    );
    Ok(FeatureSet::new(retained, summary))
}

fn normalize_record(record: RawRecord) -> Result<Option<NormalizedRecord>, CleanError> {
    let rating = categorize_rating(&record.rating)
        .map_err(|err| err.for_record(record.title.as_str()))?;
    let rater_count = convert_raters(&record.number)
        .map_err(|err| err.for_record(record.title.as_str()))?;
    if rater_count <= raters::MIN_RATERS {
        debug!(
            record = %record.title,
            rater_count,
            threshold = raters::MIN_RATERS,
            "dropping low-popularity record"
        );
        return Ok(None);
    }

    let length = categorize_length(&record.length)
        .map_err(|err| err.for_record(record.title.as_str()))?;
    let year =
        categorize_year(&record.year).map_err(|err| err.for_record(record.title.as_str()))?;

    let mut normalized = NormalizedRecord {
        poster: record.poster,
        title: record.title,
        rating,
        directors: tokens_from_list(&record.directors),
        writers: tokens_from_list(&record.writers),
        cast: tokens_from_list(&record.cast),
        languages: tokens_from_list(&record.languages),
        genres: tokens_from_list(&record.genres),
        age_group: record.age_group,
        series: classify_series(&record.series),
        length,
        year,
        features: String::new(),
    };
    normalized.features = synthesize_features(&normalized);
    Ok(Some(normalized))
}

/// Concatenate every non-poster field value plus one separating space, in
/// column order, then collapse double spaces in a single pass. Empty token
/// strings leave space runs behind; the collapse only halves them, and
/// consumers match on that exact spacing.
fn synthesize_features(record: &NormalizedRecord) -> String {
    let mut features = String::new();
    for field in fields::FEATURE_ORDER {
        if let Some(value) = record.value_of(field) {
            features.push_str(value);
            features.push(' ');
        }
    }
    collapse_double_spaces(&features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Scalar, SeriesFlag};

    fn build_record(title: &str, rating: &str, number: &str) -> RawRecord {
        RawRecord {
            poster: format!("{title}.jpg"),
            title: title.to_string(),
            rating: Scalar::from(rating),
            number: number.to_string(),
            directors: Vec::new(),
            writers: Vec::new(),
            cast: vec!["Some Actor".to_string()],
            languages: vec!["English".to_string()],
            genres: vec!["Drama".to_string()],
            age_group: "TV-MA".to_string(),
            series: SeriesFlag::from(true),
            length: "44m".to_string(),
            year: Scalar::from("2013"),
        }
    }

    #[test]
    fn filter_drops_records_at_or_below_the_threshold() {
        let store = RecordStore::from_records(vec![
            build_record("kept", "8.5", "101k"),
            build_record("boundary", "8.5", "100k"),
            build_record("dropped", "8.5", "6.1K"),
        ]);
        let set = clean(store).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.records()[0].title, "kept");
        assert_eq!(
            set.summary(),
            CleanSummary {
                input: 3,
                retained: 1,
                dropped: 2,
            }
        );
    }

    #[test]
    fn dropped_records_skip_later_transforms() {
        let mut unpopular = build_record("unpopular", "8.5", "12");
        unpopular.length = "not a duration".to_string();
        let store = RecordStore::from_records(vec![unpopular]);
        let set = clean(store).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.summary().dropped, 1);
    }

    #[test]
    fn bad_rating_fails_even_for_a_record_the_filter_would_drop() {
        let store = RecordStore::from_records(vec![build_record("broken", "great", "12")]);
        let err = clean(store).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("broken"));
        assert!(message.contains("rating"));
        assert!(message.contains("great"));
    }

    #[test]
    fn features_follow_column_order_and_exclude_poster() {
        let store = RecordStore::from_records(vec![build_record("Vikings", "8.5", "491K")]);
        let set = clean(store).unwrap();
        let record = &set.records()[0];
        // title rating directors(empty) writers(empty) cast languages genres
        // age_group series length year, then one collapse pass.
        assert_eq!(
            record.features,
            "Vikings high  someactor english drama TV-MA series short old "
        );
        assert!(!record.features.contains(".jpg"));
    }

    #[test]
    fn empty_store_yields_empty_set() {
        let set = clean(RecordStore::default()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.summary(), CleanSummary::default());
    }
}
