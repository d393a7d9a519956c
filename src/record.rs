use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::fields;
use crate::types::{CategoryLabel, RecordTitle, TokenString};

/// A loosely-typed scalar as scraped: some call sites deliver numbers,
/// others the same value as a string. Resolved once at the serde boundary.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

/// Title-presence flag for the `series` field. Scrapers emit a boolean, the
/// series title itself, or occasionally an episode count.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SeriesFlag {
    Flag(bool),
    Count(f64),
    Text(String),
}

impl SeriesFlag {
    /// Truthiness: `true`, a non-empty string, or a non-zero number.
    pub fn is_truthy(&self) -> bool {
        match self {
            SeriesFlag::Flag(flag) => *flag,
            SeriesFlag::Count(count) => *count != 0.0,
            SeriesFlag::Text(text) => !text.is_empty(),
        }
    }
}

impl From<bool> for SeriesFlag {
    fn from(value: bool) -> Self {
        SeriesFlag::Flag(value)
    }
}

impl From<&str> for SeriesFlag {
    fn from(value: &str) -> Self {
        SeriesFlag::Text(value.to_string())
    }
}

/// One scraped catalog record, shape fixed to the source dataset schema.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawRecord {
    /// Opaque poster reference, passed through untouched.
    pub poster: String,
    /// Record title, also used as record identity in errors and logs.
    pub title: RecordTitle,
    /// Rating in `[0, 10]`, as a number or numeric string.
    pub rating: Scalar,
    /// Rater count in compact suffix format (`491K`, `1.1M`) or plain digits.
    pub number: String,
    /// Director names in scrape order.
    pub directors: Vec<String>,
    /// Writer names in scrape order.
    pub writers: Vec<String>,
    /// Cast names in scrape order.
    pub cast: Vec<String>,
    /// Spoken languages in scrape order.
    pub languages: Vec<String>,
    /// Genre tags in scrape order.
    pub genres: Vec<String>,
    /// Age-group rating, passed through untouched.
    pub age_group: String,
    /// Series/movie flag, truthy when the record is a series.
    pub series: SeriesFlag,
    /// Compact duration (`2h 1m`, `44m`), empty or `-`-ranged when unknown.
    pub length: String,
    /// Release year, as an integer or numeric string.
    pub year: Scalar,
}

/// A fully normalized record: every transformed field holds its category
/// label or token string, plus the synthesized `features` blob.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NormalizedRecord {
    /// Poster reference, unchanged from the raw record.
    pub poster: String,
    /// Record title, unchanged from the raw record.
    pub title: RecordTitle,
    /// Rating category: low, medium, or high.
    pub rating: CategoryLabel,
    /// Director names as a compact token string.
    pub directors: TokenString,
    /// Writer names as a compact token string.
    pub writers: TokenString,
    /// Cast names as a compact token string.
    pub cast: TokenString,
    /// Languages as a compact token string.
    pub languages: TokenString,
    /// Genre tags as a compact token string.
    pub genres: TokenString,
    /// Age-group rating, unchanged from the raw record.
    pub age_group: String,
    /// Series/movie classification.
    pub series: CategoryLabel,
    /// Duration category: short, medium, long, or empty when unknown.
    pub length: CategoryLabel,
    /// Release-year category: old or new.
    pub year: CategoryLabel,
    /// Space-joined concatenation of every non-poster field value.
    pub features: String,
}

impl NormalizedRecord {
    /// Look up a field value by canonical name.
    ///
    /// This is the single definition of column identity; feature synthesis
    /// and the row exporter both walk the order arrays through it.
    pub fn value_of(&self, field: &str) -> Option<&str> {
        match field {
            fields::POSTER => Some(&self.poster),
            fields::TITLE => Some(&self.title),
            fields::RATING => Some(&self.rating),
            fields::DIRECTORS => Some(&self.directors),
            fields::WRITERS => Some(&self.writers),
            fields::CAST => Some(&self.cast),
            fields::LANGUAGES => Some(&self.languages),
            fields::GENRES => Some(&self.genres),
            fields::AGE_GROUP => Some(&self.age_group),
            fields::SERIES => Some(&self.series),
            fields::LENGTH => Some(&self.length),
            fields::YEAR => Some(&self.year),
            fields::FEATURES => Some(&self.features),
            _ => None,
        }
    }
}
