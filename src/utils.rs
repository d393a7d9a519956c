//! Text helpers shared by the transformers and the pipeline driver.

/// Compact a name into a single token: strip all internal whitespace and
/// lower-case the result (`"Chris Pratt"` -> `"chrispratt"`).
pub fn compact_token<T: AsRef<str>>(name: T) -> String {
    name.as_ref()
        .split_whitespace()
        .collect::<String>()
        .to_lowercase()
}

/// Replace each non-overlapping `"  "` with `" "` in one left-to-right pass.
///
/// This is intentionally not a full whitespace normalization: scanning
/// resumes after each replacement, so a run of three spaces comes out as
/// two. Downstream feature strings depend on this exact behavior; do not
/// swap in an idempotent collapse.
pub fn collapse_double_spaces(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == ' ' && chars.peek() == Some(&' ') {
            chars.next();
        }
        collapsed.push(ch);
    }
    collapsed
}
