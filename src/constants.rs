/// Constants used by the rating categorizer.
pub mod rating {
    /// Ratings at or below this value are labeled low.
    pub const LOW_MAX: f64 = 5.0;
    /// Ratings above low and at or below this value are labeled medium.
    pub const MEDIUM_MAX: f64 = 7.0;
    /// Label for ratings in the lowest bucket.
    pub const LABEL_LOW: &str = "low";
    /// Label for ratings in the middle bucket.
    pub const LABEL_MEDIUM: &str = "medium";
    /// Label for ratings in the highest bucket.
    pub const LABEL_HIGH: &str = "high";
}

/// Constants used by the compact rater-count converter and popularity filter.
pub mod raters {
    /// Multiplier for the `k` compact suffix.
    pub const THOUSAND: f64 = 1_000.0;
    /// Multiplier for the `m` compact suffix.
    pub const MILLION: f64 = 1_000_000.0;
    /// Records with a derived rater count at or below this are dropped.
    pub const MIN_RATERS: u64 = 100_000;
}

/// Constants used by the duration categorizer.
pub mod length {
    /// Minutes per hour component.
    pub const MINUTES_PER_HOUR: u64 = 60;
    /// Durations at or below this many minutes are labeled short.
    pub const SHORT_MAX_MINUTES: u64 = 90;
    /// Durations above short and at or below this many minutes are labeled medium.
    pub const MEDIUM_MAX_MINUTES: u64 = 150;
    /// Unit letter for hour components.
    pub const HOUR_UNIT: char = 'h';
    /// Unit letter for minute components.
    pub const MINUTE_UNIT: char = 'm';
    /// Marker denoting an unknown or ranged duration in the source data.
    pub const RANGE_MARKER: char = '-';
    /// Label for durations in the shortest bucket.
    pub const LABEL_SHORT: &str = "short";
    /// Label for durations in the middle bucket.
    pub const LABEL_MEDIUM: &str = "medium";
    /// Label for durations in the longest bucket.
    pub const LABEL_LONG: &str = "long";
    /// Label for unknown/ranged durations (deliberately uncategorized).
    pub const LABEL_UNKNOWN: &str = "";
}

/// Constants used by the release-year categorizer.
pub mod year {
    /// Years at or after this value are labeled new.
    pub const NEW_FROM: i64 = 2014;
    /// Label for releases before the pivot year.
    pub const LABEL_OLD: &str = "old";
    /// Label for releases at or after the pivot year.
    pub const LABEL_NEW: &str = "new";
}

/// Constants used by the series/movie classifier.
pub mod series {
    /// Label for records with a truthy series flag.
    pub const LABEL_SERIES: &str = "series";
    /// Label for records with a falsy series flag.
    pub const LABEL_MOVIE: &str = "movie";
}

/// Canonical field names and column orders for the fixed dataset schema.
pub mod fields {
    /// Opaque poster reference, passed through and excluded from `features`.
    pub const POSTER: &str = "poster";
    /// Record title.
    pub const TITLE: &str = "title";
    /// Rating category field.
    pub const RATING: &str = "rating";
    /// Raw compact rater count, dropped after the popularity filter.
    pub const NUMBER: &str = "number";
    /// Director token-string field.
    pub const DIRECTORS: &str = "directors";
    /// Writer token-string field.
    pub const WRITERS: &str = "writers";
    /// Cast token-string field.
    pub const CAST: &str = "cast";
    /// Language token-string field.
    pub const LANGUAGES: &str = "languages";
    /// Genre token-string field.
    pub const GENRES: &str = "genres";
    /// Age-group rating, passed through.
    pub const AGE_GROUP: &str = "age_group";
    /// Series/movie category field.
    pub const SERIES: &str = "series";
    /// Duration category field.
    pub const LENGTH: &str = "length";
    /// Release-year category field.
    pub const YEAR: &str = "year";
    /// Synthesized concatenated feature blob.
    pub const FEATURES: &str = "features";

    /// Column order for feature synthesis: raw insertion order minus
    /// `poster` (excluded by design) and `number` (dropped by the filter).
    pub const FEATURE_ORDER: [&str; 11] = [
        TITLE, RATING, DIRECTORS, WRITERS, CAST, LANGUAGES, GENRES, AGE_GROUP, SERIES, LENGTH,
        YEAR,
    ];

    /// Column order for exported rows: raw insertion order minus `number`,
    /// with `features` appended last.
    pub const EXPORT_ORDER: [&str; 13] = [
        POSTER, TITLE, RATING, DIRECTORS, WRITERS, CAST, LANGUAGES, GENRES, AGE_GROUP, SERIES,
        LENGTH, YEAR, FEATURES,
    ];
}
