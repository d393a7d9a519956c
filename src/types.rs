/// Canonical field name used in exported rows.
/// Examples: `title`, `rating`, `features`
pub type FieldName = String;
/// Closed-set category tag replacing a raw value.
/// Examples: `low`, `medium`, `high`, `old`, `new`, `series`, `movie`
pub type CategoryLabel = String;
/// Space-joined string of compacted lower-cased tokens.
/// Example: `chrispratt vindiesel bradleycooper `
pub type TokenString = String;
/// Record identity used in error reporting and logging.
/// Example: `Guardians of the Galaxy`
pub type RecordTitle = String;
/// Derived popularity count used only by the filter step.
/// Example: `491000`
pub type RaterCount = u64;
