//! Pure per-field transformers.
//!
//! Each function maps one raw field value to its category label or
//! normalized string. Conversions never default on bad input: a value that
//! fails to parse returns a [`FieldError`] carrying the field name and raw
//! value, and the pipeline driver attaches the owning record's identity.

use crate::constants::{fields, length, rating, raters, series, year};
use crate::errors::FieldError;
use crate::record::{Scalar, SeriesFlag};
use crate::types::{CategoryLabel, RaterCount, TokenString};
use crate::utils::compact_token;

/// Bucket a rating in `[0, 10]` into low (≤5), medium (≤7), or high (>7).
pub fn categorize_rating(value: &Scalar) -> Result<CategoryLabel, FieldError> {
    let rating = match value {
        Scalar::Number(number) => *number,
        Scalar::Text(text) => text.trim().parse::<f64>().map_err(|err| {
            FieldError::new(fields::RATING, text.clone(), err.to_string())
        })?,
    };
    let label = if rating <= rating::LOW_MAX {
        rating::LABEL_LOW
    } else if rating <= rating::MEDIUM_MAX {
        rating::LABEL_MEDIUM
    } else {
        rating::LABEL_HIGH
    };
    Ok(label.to_string())
}

/// Expand a compact rater count (`10k` -> 10000, `1.1M` -> 1100000).
///
/// A trailing case-insensitive `k` or `m` multiplies a fractional prefix;
/// the product truncates toward zero. Suffix-free input must be a plain
/// integer. The result feeds only the popularity filter and is not retained.
pub fn convert_raters(raw: &str) -> Result<RaterCount, FieldError> {
    let Some(last) = raw.chars().next_back() else {
        return Err(FieldError::new(
            fields::NUMBER,
            raw,
            "empty rater count",
        ));
    };
    let multiplier = match last.to_ascii_lowercase() {
        'k' => Some(raters::THOUSAND),
        'm' => Some(raters::MILLION),
        _ => None,
    };
    match multiplier {
        Some(multiplier) => {
            let prefix = &raw[..raw.len() - last.len_utf8()];
            let count = prefix.trim().parse::<f64>().map_err(|err| {
                FieldError::new(fields::NUMBER, raw, err.to_string())
            })?;
            Ok((count * multiplier) as RaterCount)
        }
        None => raw
            .trim()
            .parse::<RaterCount>()
            .map_err(|err| FieldError::new(fields::NUMBER, raw, err.to_string())),
    }
}

/// Flatten a list of names into one token string: each entry loses its
/// internal whitespace and casing, tokens join on single spaces, and the
/// final token keeps a trailing space (the downstream double-space collapse
/// tolerates it). An empty list yields an empty string.
pub fn tokens_from_list(values: &[String]) -> TokenString {
    let mut tokens = String::new();
    for value in values {
        tokens.push_str(&compact_token(value));
        tokens.push(' ');
    }
    tokens
}

/// Bucket a compact duration into short (≤90 min), medium (≤150), or long.
///
/// An empty string or any `-`-containing value (unknown or ranged duration
/// in the source data) yields the empty label rather than an error; the
/// record simply goes uncategorized. Components are `<integer><unit>` with
/// unit `h` or `m`; anything else is a parse failure.
pub fn categorize_length(raw: &str) -> Result<CategoryLabel, FieldError> {
    if raw.is_empty() || raw.contains(length::RANGE_MARKER) {
        return Ok(length::LABEL_UNKNOWN.to_string());
    }
    let mut total_minutes: u64 = 0;
    for component in raw.split(' ') {
        let Some(unit) = component.chars().next_back() else {
            return Err(FieldError::new(
                fields::LENGTH,
                raw,
                "empty duration component",
            ));
        };
        let amount = component[..component.len() - unit.len_utf8()]
            .parse::<u64>()
            .map_err(|err| FieldError::new(fields::LENGTH, raw, err.to_string()))?;
        total_minutes += match unit {
            length::MINUTE_UNIT => amount,
            length::HOUR_UNIT => amount * length::MINUTES_PER_HOUR,
            other => {
                return Err(FieldError::new(
                    fields::LENGTH,
                    raw,
                    format!("unknown duration unit '{other}'"),
                ));
            }
        };
    }
    let label = if total_minutes <= length::SHORT_MAX_MINUTES {
        length::LABEL_SHORT
    } else if total_minutes <= length::MEDIUM_MAX_MINUTES {
        length::LABEL_MEDIUM
    } else {
        length::LABEL_LONG
    };
    Ok(label.to_string())
}

/// Bucket a release year into old (<2014) or new (≥2014).
pub fn categorize_year(value: &Scalar) -> Result<CategoryLabel, FieldError> {
    let year = match value {
        Scalar::Number(number) => *number as i64,
        Scalar::Text(text) => text.trim().parse::<i64>().map_err(|err| {
            FieldError::new(fields::YEAR, text.clone(), err.to_string())
        })?,
    };
    let label = if year < year::NEW_FROM {
        year::LABEL_OLD
    } else {
        year::LABEL_NEW
    };
    Ok(label.to_string())
}

/// Classify a record as series or movie by the truthiness of its flag.
pub fn classify_series(flag: &SeriesFlag) -> CategoryLabel {
    if flag.is_truthy() {
        series::LABEL_SERIES.to_string()
    } else {
        series::LABEL_MOVIE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Scalar {
        Scalar::Text(value.to_string())
    }

    #[test]
    fn rating_buckets_sit_on_inclusive_boundaries() {
        assert_eq!(categorize_rating(&Scalar::Number(5.0)).unwrap(), "low");
        assert_eq!(categorize_rating(&Scalar::Number(5.0001)).unwrap(), "medium");
        assert_eq!(categorize_rating(&Scalar::Number(7.0)).unwrap(), "medium");
        assert_eq!(categorize_rating(&Scalar::Number(7.1)).unwrap(), "high");
    }

    #[test]
    fn rating_accepts_numeric_strings() {
        assert_eq!(categorize_rating(&text("8.5")).unwrap(), "high");
        assert_eq!(categorize_rating(&text("4")).unwrap(), "low");
    }

    #[test]
    fn rating_rejects_non_numeric_text() {
        let err = categorize_rating(&text("great")).unwrap_err();
        assert_eq!(err.field, "rating");
        assert_eq!(err.value, "great");
    }

    #[test]
    fn raters_expand_compact_suffixes() {
        assert_eq!(convert_raters("10k").unwrap(), 10_000);
        assert_eq!(convert_raters("1.1M").unwrap(), 1_100_000);
        assert_eq!(convert_raters("491K").unwrap(), 491_000);
        assert_eq!(convert_raters("6.1K").unwrap(), 6_100);
        assert_eq!(convert_raters("12345").unwrap(), 12_345);
    }

    #[test]
    fn raters_truncate_toward_zero() {
        // 1.2345k = 1234.5 raters; fractional raters truncate away.
        assert_eq!(convert_raters("1.2345k").unwrap(), 1_234);
    }

    #[test]
    fn raters_reject_non_numeric_input() {
        assert!(convert_raters("many").is_err());
        assert!(convert_raters("").is_err());
        assert!(convert_raters("1.5").is_err());
    }

    #[test]
    fn list_tokens_preserve_order_and_keep_trailing_space() {
        let names = vec!["Chris Pratt".to_string(), "Vin Diesel".to_string()];
        assert_eq!(tokens_from_list(&names), "chrispratt vindiesel ");
        assert_eq!(tokens_from_list(&[]), "");
    }

    #[test]
    fn length_buckets_by_total_minutes() {
        assert_eq!(categorize_length("44m").unwrap(), "short");
        assert_eq!(categorize_length("1h 30m").unwrap(), "short");
        assert_eq!(categorize_length("1h").unwrap(), "short");
        assert_eq!(categorize_length("2h 1m").unwrap(), "medium");
        assert_eq!(categorize_length("2h 31m").unwrap(), "long");
    }

    #[test]
    fn length_leaves_unknown_durations_uncategorized() {
        assert_eq!(categorize_length("").unwrap(), "");
        assert_eq!(categorize_length("90-120").unwrap(), "");
    }

    #[test]
    fn length_rejects_malformed_components() {
        assert!(categorize_length("90").is_err());
        assert!(categorize_length("2x").is_err());
        assert!(categorize_length("h").is_err());
        assert!(categorize_length("2h  1m").is_err());
    }

    #[test]
    fn year_splits_on_pivot() {
        assert_eq!(categorize_year(&Scalar::Number(2013.0)).unwrap(), "old");
        assert_eq!(categorize_year(&Scalar::Number(2014.0)).unwrap(), "new");
        assert_eq!(categorize_year(&text("2013")).unwrap(), "old");
        assert_eq!(categorize_year(&text("2020")).unwrap(), "new");
    }

    #[test]
    fn year_rejects_non_numeric_text() {
        let err = categorize_year(&text("next year")).unwrap_err();
        assert_eq!(err.field, "year");
    }

    #[test]
    fn series_follows_flag_truthiness() {
        assert_eq!(classify_series(&SeriesFlag::Flag(true)), "series");
        assert_eq!(classify_series(&SeriesFlag::Text(String::new())), "movie");
        assert_eq!(
            classify_series(&SeriesFlag::Text("Vikings".to_string())),
            "series"
        );
        assert_eq!(classify_series(&SeriesFlag::Flag(false)), "movie");
    }
}
